use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::earnings::{EarningsResult, Phase};

/// Every refresh produces one or more Events.
/// Hosts render them; the CLI prints them as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// Fresh earnings figures for the current minute.
    EarningsSnapshot {
        result: EarningsResult,
        status_text: String,
        message: String,
        at: NaiveDateTime,
    },
    /// The schedule could not be evaluated; hosts show a fallback.
    NotConfigured {
        status_text: String,
        reason: String,
        at: NaiveDateTime,
    },
    /// The workday moved into another phase since the previous refresh.
    PhaseChanged {
        from: Phase,
        to: Phase,
        at: NaiveDateTime,
    },
}

