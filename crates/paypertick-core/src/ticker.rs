//! Refresh ticker.
//!
//! Like a wall-clock timer, the ticker owns no thread: the caller invokes
//! `tick()` as often as it likes and gets events back only when a refresh is
//! due. A refresh is due when the interval has elapsed since the last one,
//! when the schedule was edited, or on the very first tick.
//!
//! ## Usage
//!
//! ```ignore
//! let mut ticker = EarningsTicker::new(60);
//! // In a loop:
//! for event in ticker.tick(&schedule, Local::now().naive_local(), &mut rng) {
//!     render(event);
//! }
//! ```

use chrono::NaiveDateTime;
use rand::Rng;
use tracing::{debug, info};

use crate::earnings::{
    compute_earnings, format_countdown_message, status_bar_text, Phase, WorkSchedule,
};
use crate::events::Event;

/// Refresh cadence of the status display.
pub const DEFAULT_INTERVAL_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct EarningsTicker {
    interval_secs: u64,
    last_refresh: Option<NaiveDateTime>,
    last_phase: Option<Phase>,
    last_schedule: Option<WorkSchedule>,
}

impl Default for EarningsTicker {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL_SECS)
    }
}

impl EarningsTicker {
    pub fn new(interval_secs: u64) -> Self {
        Self {
            interval_secs: interval_secs.max(1),
            last_refresh: None,
            last_phase: None,
            last_schedule: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn interval_secs(&self) -> u64 {
        self.interval_secs
    }

    pub fn last_refresh(&self) -> Option<NaiveDateTime> {
        self.last_refresh
    }

    pub fn last_phase(&self) -> Option<Phase> {
        self.last_phase
    }

    /// Whether `tick(schedule, now)` would refresh.
    pub fn is_due(&self, schedule: &WorkSchedule, now: NaiveDateTime) -> bool {
        if self.last_schedule.as_ref() != Some(schedule) {
            return true;
        }
        match self.last_refresh {
            None => true,
            // A clock that jumped backwards also forces a refresh.
            Some(last) => {
                let elapsed = now.signed_duration_since(last).num_seconds();
                elapsed < 0 || elapsed as u64 >= self.interval_secs
            }
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Call periodically. Returns an empty vec unless a refresh is due.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        schedule: &WorkSchedule,
        now: NaiveDateTime,
        rng: &mut R,
    ) -> Vec<Event> {
        if !self.is_due(schedule, now) {
            return Vec::new();
        }
        self.refresh(schedule, now, rng)
    }

    /// Recompute immediately, regardless of the interval.
    pub fn refresh<R: Rng + ?Sized>(
        &mut self,
        schedule: &WorkSchedule,
        now: NaiveDateTime,
        rng: &mut R,
    ) -> Vec<Event> {
        if self.last_schedule.is_some() && self.last_schedule.as_ref() != Some(schedule) {
            info!("schedule changed, refreshing");
        }
        self.last_refresh = Some(now);
        self.last_schedule = Some(schedule.clone());

        let mut events = Vec::with_capacity(2);
        let snapshot = snapshot(schedule, now, rng);

        if let Event::EarningsSnapshot { result, .. } = &snapshot {
            if let Some(from) = self.last_phase.filter(|p| *p != result.phase) {
                debug!(?from, to = ?result.phase, "phase changed");
                events.push(Event::PhaseChanged {
                    from,
                    to: result.phase,
                    at: now,
                });
            }
            self.last_phase = Some(result.phase);
        } else {
            self.last_phase = None;
        }

        events.push(snapshot);
        events
    }

    pub fn reset(&mut self) {
        self.last_refresh = None;
        self.last_phase = None;
        self.last_schedule = None;
    }
}

/// Build a single snapshot event for `now`, without any ticker state.
pub fn snapshot<R: Rng + ?Sized>(schedule: &WorkSchedule, now: NaiveDateTime, rng: &mut R) -> Event {
    let result = compute_earnings(schedule, now.time());
    let status_text = status_bar_text(&result);
    match result {
        Ok(result) => Event::EarningsSnapshot {
            message: format_countdown_message(&result, rng),
            result,
            status_text,
            at: now,
        },
        Err(e) => Event::NotConfigured {
            status_text,
            reason: e.to_string(),
            at: now,
        },
    }
}
