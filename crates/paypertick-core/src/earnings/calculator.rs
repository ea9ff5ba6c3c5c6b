//! Work progress and earnings calculator.
//!
//! Everything here is a pure function of a [`WorkSchedule`] and the current
//! time of day. Time is handled at minute granularity: `now` is truncated to
//! the whole minute before any arithmetic.
//!
//! ## Phases
//!
//! ```text
//! BeforeWork -> MorningWork -> Lunch -> AfternoonWork -> Overtime
//! ```
//!
//! A lunch break is honoured only when it lies strictly inside the workday.
//! Only the part of it that overlaps a working block is deducted, so a lunch
//! break coinciding with the gap between morning and afternoon costs nothing
//! extra.

use chrono::{NaiveTime, Timelike};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::schedule::{Currency, WorkSchedule};
use crate::error::EarningsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    BeforeWork,
    MorningWork,
    Lunch,
    AfternoonWork,
    Overtime,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::BeforeWork => "before work",
            Phase::MorningWork => "morning",
            Phase::Lunch => "lunch break",
            Phase::AfternoonWork => "afternoon",
            Phase::Overtime => "overtime",
        }
    }
}

/// Where `now` sits within the workday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkProgress {
    pub phase: Phase,
    pub completed_minutes: u32,
    /// Minutes until the current phase ends. `None` in overtime.
    pub remaining_minutes: Option<u32>,
    /// Minutes since the current phase began. `None` before work.
    pub elapsed_in_phase_minutes: Option<u32>,
    /// `now - end_time` in overtime, otherwise 0.
    pub overtime_minutes: u32,
}

/// Snapshot of today's earnings. Recomputed on every refresh, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningsResult {
    pub currency: Currency,
    pub daily_salary: Decimal,
    pub total_work_minutes: u32,
    pub completed_work_minutes: u32,
    pub earnings_so_far: Decimal,
    /// Completion fraction in `[0, 1]`.
    pub progress: f64,
    pub phase: Phase,
    pub remaining_minutes: Option<u32>,
    pub elapsed_in_phase_minutes: Option<u32>,
    pub overtime_minutes: u32,
}

impl EarningsResult {
    pub fn earnings_rounded(&self) -> Decimal {
        round_money(self.earnings_so_far)
    }

    pub fn daily_salary_rounded(&self) -> Decimal {
        round_money(self.daily_salary)
    }
}

/// Round a money amount to cents, half away from zero.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Half-open minute range `[start, end)` within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: u32,
    end: u32,
}

impl Span {
    fn new(start: u32, end: u32) -> Self {
        Self { start, end: end.max(start) }
    }

    fn len(&self) -> u32 {
        self.end - self.start
    }

    fn contains(&self, minute: u32) -> bool {
        self.start <= minute && minute < self.end
    }

    fn until(&self, minute: u32) -> Span {
        Span::new(self.start, self.end.min(minute))
    }

    fn overlap(&self, other: &Span) -> u32 {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        end.saturating_sub(start)
    }

    fn touches(&self, other: &Span) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

fn minute_of_day(t: NaiveTime) -> u32 {
    t.hour() * 60 + t.minute()
}

/// Check `start <= morning_end <= afternoon_start <= end`.
pub fn validate_schedule(schedule: &WorkSchedule) -> Result<(), EarningsError> {
    let bounds = [
        ("start_time", schedule.start_time),
        ("morning_end", schedule.morning_end),
        ("afternoon_start", schedule.afternoon_start),
        ("end_time", schedule.end_time),
    ];
    for pair in bounds.windows(2) {
        let (earlier_name, earlier) = pair[0];
        let (later_name, later) = pair[1];
        if later < earlier {
            warn!(earlier_name, %earlier, later_name, %later, "schedule boundaries out of order");
            return Err(EarningsError::ScheduleInvalid {
                earlier_name,
                earlier,
                later_name,
                later,
            });
        }
    }
    Ok(())
}

fn work_blocks(schedule: &WorkSchedule) -> [Span; 2] {
    [
        Span::new(
            minute_of_day(schedule.start_time),
            minute_of_day(schedule.morning_end),
        ),
        Span::new(
            minute_of_day(schedule.afternoon_start),
            minute_of_day(schedule.end_time),
        ),
    ]
}

/// The lunch break, if it lies strictly inside the workday. An inverted
/// break (end before start) is ignored as well.
fn lunch_break(schedule: &WorkSchedule) -> Option<Span> {
    let nested = schedule.lunch_start > schedule.start_time && schedule.lunch_end < schedule.end_time;
    if !nested || schedule.lunch_end <= schedule.lunch_start {
        return None;
    }
    Some(Span::new(
        minute_of_day(schedule.lunch_start),
        minute_of_day(schedule.lunch_end),
    ))
}

/// Non-working stretch containing `minute`: the morning/afternoon gap and
/// the lunch break, merged where they touch.
fn break_around(schedule: &WorkSchedule, minute: u32) -> Option<Span> {
    let [morning, afternoon] = work_blocks(schedule);
    let gap = Span::new(morning.end, afternoon.start);
    let mut breaks: Vec<Span> = [Some(gap), lunch_break(schedule)]
        .into_iter()
        .flatten()
        .filter(|s| s.len() > 0)
        .collect();
    breaks.sort_by_key(|s| s.start);

    let mut merged: Vec<Span> = Vec::with_capacity(breaks.len());
    for span in breaks {
        match merged.last_mut() {
            Some(last) if last.touches(&span) => last.end = last.end.max(span.end),
            _ => merged.push(span),
        }
    }
    merged.into_iter().find(|s| s.contains(minute))
}

/// Working minutes between `start_time` and `minute`, net of lunch.
fn worked_until(schedule: &WorkSchedule, minute: u32) -> u32 {
    let lunch = lunch_break(schedule);
    work_blocks(schedule)
        .iter()
        .map(|block| {
            let done = block.until(minute);
            let eaten = lunch.map(|l| done.overlap(&l)).unwrap_or(0);
            done.len() - eaten
        })
        .sum()
}

/// Total working minutes in the day.
///
/// # Errors
///
/// Returns [`EarningsError::ScheduleInvalid`] if the boundaries are out of order.
pub fn compute_total_work_duration(schedule: &WorkSchedule) -> Result<u32, EarningsError> {
    validate_schedule(schedule)?;
    Ok(worked_until(schedule, minute_of_day(schedule.end_time)))
}

/// Working minutes completed at `now`, with the phase `now` falls in.
///
/// # Errors
///
/// Returns [`EarningsError::ScheduleInvalid`] if the boundaries are out of order.
pub fn compute_completed_work_duration(
    schedule: &WorkSchedule,
    now: NaiveTime,
) -> Result<WorkProgress, EarningsError> {
    validate_schedule(schedule)?;

    let n = minute_of_day(now);
    let [morning, afternoon] = work_blocks(schedule);
    let start = morning.start;
    let end = afternoon.end;

    if n < start {
        return Ok(WorkProgress {
            phase: Phase::BeforeWork,
            completed_minutes: 0,
            remaining_minutes: Some(start - n),
            elapsed_in_phase_minutes: None,
            overtime_minutes: 0,
        });
    }

    if n >= end {
        let overtime = n - end;
        return Ok(WorkProgress {
            phase: Phase::Overtime,
            completed_minutes: worked_until(schedule, end),
            remaining_minutes: None,
            elapsed_in_phase_minutes: Some(overtime),
            overtime_minutes: overtime,
        });
    }

    let completed_minutes = worked_until(schedule, n);

    if let Some(pause) = break_around(schedule, n) {
        return Ok(WorkProgress {
            phase: Phase::Lunch,
            completed_minutes,
            remaining_minutes: Some(pause.end.min(end) - n),
            elapsed_in_phase_minutes: Some(n - pause.start),
            overtime_minutes: 0,
        });
    }

    let progress = if morning.contains(n) {
        // Counts down to whichever break comes first.
        let next_break = lunch_break(schedule)
            .map(|l| l.start)
            .filter(|&s| s > n)
            .map_or(morning.end, |s| s.min(morning.end));
        WorkProgress {
            phase: Phase::MorningWork,
            completed_minutes,
            remaining_minutes: Some(next_break - n),
            elapsed_in_phase_minutes: Some(n - morning.start),
            overtime_minutes: 0,
        }
    } else {
        WorkProgress {
            phase: Phase::AfternoonWork,
            completed_minutes,
            remaining_minutes: Some(end - n),
            elapsed_in_phase_minutes: Some(n - afternoon.start),
            overtime_minutes: 0,
        }
    };
    Ok(progress)
}

/// Earnings so far today.
///
/// # Errors
///
/// - [`EarningsError::ScheduleInvalid`] if the boundaries are out of order
/// - [`EarningsError::DivisionByZero`] if `monthly_work_days` or the total
///   working time is zero
/// - [`EarningsError::InvalidSalary`] if the salary is not positive
pub fn compute_earnings(
    schedule: &WorkSchedule,
    now: NaiveTime,
) -> Result<EarningsResult, EarningsError> {
    let total = compute_total_work_duration(schedule)?;
    if schedule.monthly_work_days == 0 {
        return Err(EarningsError::DivisionByZero("monthly_work_days"));
    }
    if total == 0 {
        return Err(EarningsError::DivisionByZero("total_work_minutes"));
    }
    if schedule.monthly_salary <= Decimal::ZERO {
        return Err(EarningsError::InvalidSalary(schedule.monthly_salary));
    }

    let progress = compute_completed_work_duration(schedule, now)?;
    let completed = progress.completed_minutes.min(total);

    let daily_salary = schedule.monthly_salary / Decimal::from(schedule.monthly_work_days);
    let earnings_so_far = if completed == total {
        daily_salary
    } else {
        daily_salary * Decimal::from(completed) / Decimal::from(total)
    };

    debug!(
        phase = ?progress.phase,
        completed,
        total,
        %earnings_so_far,
        "computed earnings"
    );

    Ok(EarningsResult {
        currency: schedule.currency,
        daily_salary,
        total_work_minutes: total,
        completed_work_minutes: completed,
        earnings_so_far,
        progress: f64::from(completed) / f64::from(total),
        phase: progress.phase,
        remaining_minutes: progress.remaining_minutes,
        elapsed_in_phase_minutes: progress.elapsed_in_phase_minutes,
        overtime_minutes: progress.overtime_minutes,
    })
}
