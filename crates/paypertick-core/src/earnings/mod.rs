mod calculator;
mod message;
mod schedule;
mod view;

pub use calculator::{
    compute_completed_work_duration, compute_earnings, compute_total_work_duration, round_money,
    validate_schedule, EarningsResult, Phase, WorkProgress,
};
pub use message::{format_countdown_message, format_duration, MEAL_MINUTES};
pub use schedule::{hhmm, parse_hhmm, Currency, WorkSchedule};
pub use view::{format_work_time, status_bar_text, DetailView, PanelLabels, NOT_CONFIGURED};
