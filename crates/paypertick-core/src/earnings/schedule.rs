//! Work schedule definition.
//!
//! A workday is a morning block `[start_time, morning_end)` and an afternoon
//! block `[afternoon_start, end_time)`, optionally with a lunch break that is
//! only honoured when it lies strictly inside `[start_time, end_time]`.

use std::fmt;

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Currency the salary is paid in. Display only, no conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    #[serde(alias = "cny", alias = "rmb")]
    Cny,
    #[serde(alias = "usd")]
    Usd,
    #[serde(alias = "eur")]
    Eur,
    #[serde(alias = "jpy")]
    Jpy,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Cny | Currency::Jpy => "¥",
            Currency::Usd => "$",
            Currency::Eur => "€",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Cny => "CNY",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Jpy => "JPY",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Salary and working hours for a single day.
///
/// Times are serialized as `HH:MM`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkSchedule {
    #[serde(default = "default_monthly_salary")]
    pub monthly_salary: Decimal,
    #[serde(default = "default_monthly_work_days")]
    pub monthly_work_days: u32,
    #[serde(with = "hhmm", default = "default_start_time")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm", default = "default_morning_end")]
    pub morning_end: NaiveTime,
    #[serde(with = "hhmm", default = "default_afternoon_start")]
    pub afternoon_start: NaiveTime,
    #[serde(with = "hhmm", default = "default_end_time")]
    pub end_time: NaiveTime,
    #[serde(with = "hhmm", default = "default_lunch_start")]
    pub lunch_start: NaiveTime,
    #[serde(with = "hhmm", default = "default_lunch_end")]
    pub lunch_end: NaiveTime,
    #[serde(default)]
    pub currency: Currency,
}

fn default_monthly_salary() -> Decimal {
    Decimal::from(10_000)
}
fn default_monthly_work_days() -> u32 {
    22
}
fn default_start_time() -> NaiveTime {
    hm(9, 0)
}
fn default_morning_end() -> NaiveTime {
    hm(12, 0)
}
fn default_afternoon_start() -> NaiveTime {
    hm(13, 30)
}
fn default_end_time() -> NaiveTime {
    hm(18, 0)
}
fn default_lunch_start() -> NaiveTime {
    hm(12, 0)
}
fn default_lunch_end() -> NaiveTime {
    hm(13, 30)
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

impl Default for WorkSchedule {
    fn default() -> Self {
        Self {
            monthly_salary: default_monthly_salary(),
            monthly_work_days: default_monthly_work_days(),
            start_time: default_start_time(),
            morning_end: default_morning_end(),
            afternoon_start: default_afternoon_start(),
            end_time: default_end_time(),
            lunch_start: default_lunch_start(),
            lunch_end: default_lunch_end(),
            currency: Currency::default(),
        }
    }
}

/// Parse a `HH:MM` time of day.
pub fn parse_hhmm(s: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(s.trim(), hhmm::FORMAT)
}

/// Serde adapter for `HH:MM` times of day.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_hhmm(&raw)
            .map_err(|e| serde::de::Error::custom(format!("expected HH:MM, got '{raw}': {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_standard_office_day() {
        let s = WorkSchedule::default();
        assert_eq!(s.monthly_salary, Decimal::from(10_000));
        assert_eq!(s.monthly_work_days, 22);
        assert_eq!(s.start_time, hm(9, 0));
        assert_eq!(s.end_time, hm(18, 0));
        assert_eq!(s.currency, Currency::Cny);
    }

    #[test]
    fn times_serialize_as_hhmm() {
        let json = serde_json::to_value(WorkSchedule::default()).unwrap();
        assert_eq!(json["afternoon_start"], "13:30");
        assert_eq!(json["currency"], "CNY");
    }

    #[test]
    fn rejects_malformed_time() {
        let mut json = serde_json::to_value(WorkSchedule::default()).unwrap();
        json["start_time"] = serde_json::Value::String("9am".into());
        let err = serde_json::from_value::<WorkSchedule>(json).unwrap_err();
        assert!(err.to_string().contains("HH:MM"));
    }

    #[test]
    fn parse_hhmm_accepts_single_digit_hour() {
        assert_eq!(parse_hhmm("8:05").unwrap(), hm(8, 5));
        assert_eq!(parse_hhmm(" 17:45 ").unwrap(), hm(17, 45));
        assert!(parse_hhmm("25:00").is_err());
    }

    #[test]
    fn currency_symbols() {
        assert_eq!(Currency::Usd.symbol(), "$");
        assert_eq!(Currency::Eur.symbol(), "€");
        assert_eq!(Currency::Jpy.symbol(), "¥");
        assert_eq!(Currency::Jpy.to_string(), "JPY");
    }
}
