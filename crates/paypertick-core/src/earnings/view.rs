//! Text renderings of an [`EarningsResult`] for status bars and panels.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calculator::{round_money, EarningsResult};
use super::schedule::{hhmm, WorkSchedule};
use crate::error::EarningsError;

/// Shown instead of an amount when the schedule cannot be evaluated.
pub const NOT_CONFIGURED: &str = "Salary: not configured";

/// One-line status bar text, e.g. `Today: ¥272.73`.
pub fn status_bar_text(result: &Result<EarningsResult, EarningsError>) -> String {
    match result {
        Ok(r) => format!("Today: {}{:.2}", r.currency.symbol(), r.earnings_rounded()),
        Err(_) => NOT_CONFIGURED.to_string(),
    }
}

/// `"7h 30m"`-style effective work time.
pub fn format_work_time(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Salary breakdown shown on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailView {
    pub symbol: String,
    pub monthly_salary: Decimal,
    pub monthly_work_days: u32,
    pub daily_salary: Decimal,
    /// Percentage of the workday done, one decimal place.
    pub progress_pct: f64,
    pub earned: Decimal,
    #[serde(with = "hhmm")]
    pub end_time: chrono::NaiveTime,
}

impl DetailView {
    pub fn new(schedule: &WorkSchedule, result: &EarningsResult) -> Self {
        Self {
            symbol: result.currency.symbol().to_string(),
            monthly_salary: round_money(schedule.monthly_salary),
            monthly_work_days: schedule.monthly_work_days,
            daily_salary: result.daily_salary_rounded(),
            progress_pct: (result.progress * 1000.0).round() / 10.0,
            earned: result.earnings_rounded(),
            end_time: schedule.end_time,
        }
    }
}

impl fmt::Display for DetailView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.symbol;
        writeln!(f, "Salary details")?;
        writeln!(f, "Monthly salary: {s}{:.2}", self.monthly_salary)?;
        writeln!(f, "Work days: {}", self.monthly_work_days)?;
        writeln!(f, "Daily salary: {s}{:.2}", self.daily_salary)?;
        writeln!(f, "Progress today: {:.1}%", self.progress_pct)?;
        writeln!(f, "Earned: {s}{:.2}", self.earned)?;
        write!(f, "Off work at: {}", self.end_time.format(hhmm::FORMAT))
    }
}

/// Labels for a side panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelLabels {
    pub daily_salary: String,
    pub earned_today: String,
    pub effective_work_time: String,
}

impl PanelLabels {
    pub fn new(result: &EarningsResult) -> Self {
        let s = result.currency.symbol();
        Self {
            daily_salary: format!("Daily salary: {s}{:.2}", result.daily_salary_rounded()),
            earned_today: format!("Earned today: {s}{:.2}", result.earnings_rounded()),
            effective_work_time: format!(
                "Effective work time: {}",
                format_work_time(result.completed_work_minutes)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::earnings::{compute_earnings, Currency};
    use chrono::NaiveTime;
    use rust_decimal_macros::dec;

    fn at(schedule: &WorkSchedule, hour: u32, minute: u32) -> Result<EarningsResult, EarningsError> {
        compute_earnings(schedule, NaiveTime::from_hms_opt(hour, minute, 0).unwrap())
    }

    #[test]
    fn status_text_shows_rounded_amount() {
        let result = at(&WorkSchedule::default(), 15, 0);
        assert_eq!(status_bar_text(&result), "Today: ¥272.73");
    }

    #[test]
    fn status_text_uses_currency_symbol() {
        let schedule = WorkSchedule {
            currency: Currency::Usd,
            ..WorkSchedule::default()
        };
        assert_eq!(status_bar_text(&at(&schedule, 8, 0)), "Today: $0.00");
    }

    #[test]
    fn status_text_falls_back_when_invalid() {
        let schedule = WorkSchedule {
            monthly_work_days: 0,
            ..WorkSchedule::default()
        };
        assert_eq!(status_bar_text(&at(&schedule, 10, 0)), NOT_CONFIGURED);
    }

    #[test]
    fn detail_view_lines() {
        let schedule = WorkSchedule::default();
        let result = at(&schedule, 15, 0).unwrap();
        let view = DetailView::new(&schedule, &result);
        assert_eq!(view.progress_pct, 60.0);
        assert_eq!(view.daily_salary, dec!(454.55));

        let text = view.to_string();
        assert!(text.contains("Monthly salary: ¥10000.00"));
        assert!(text.contains("Work days: 22"));
        assert!(text.contains("Progress today: 60.0%"));
        assert!(text.contains("Earned: ¥272.73"));
        assert!(text.ends_with("Off work at: 18:00"));
    }

    #[test]
    fn panel_labels() {
        let result = at(&WorkSchedule::default(), 10, 45).unwrap();
        let labels = PanelLabels::new(&result);
        assert_eq!(labels.daily_salary, "Daily salary: ¥454.55");
        assert_eq!(labels.effective_work_time, "Effective work time: 1h 45m");
    }
}
