//! # PayPerTick Core Library
//!
//! This library provides the core logic for PayPerTick, a real-time
//! "how much have I earned today" estimator. All computation lives here;
//! the CLI is a thin host that supplies the clock and renders the results.
//!
//! ## Architecture
//!
//! - **Earnings Calculator**: Pure functions over a [`WorkSchedule`] and the
//!   time of day, classifying the day into phases and prorating the daily
//!   salary over worked minutes
//! - **Ticker**: A wall-clock refresh driver that requires the caller to
//!   periodically invoke `tick()`
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`compute_earnings`]: Earnings snapshot for a given time of day
//! - [`EarningsTicker`]: Periodic and edit-triggered refresh
//! - [`Config`]: Application configuration management

pub mod earnings;
pub mod error;
pub mod events;
pub mod storage;
pub mod ticker;

pub use earnings::{
    compute_completed_work_duration, compute_earnings, compute_total_work_duration,
    format_countdown_message, Currency, EarningsResult, Phase, WorkSchedule,
};
pub use error::{ConfigError, CoreError, EarningsError};
pub use events::Event;
pub use storage::Config;
pub use ticker::EarningsTicker;
