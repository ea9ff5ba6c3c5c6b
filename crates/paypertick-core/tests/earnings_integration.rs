//! Integration tests for a full workday driven through config and ticker.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use paypertick_core::earnings::{status_bar_text, DetailView, PanelLabels};
use paypertick_core::{
    compute_earnings, Config, EarningsError, EarningsTicker, Event, Phase, WorkSchedule,
};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tempfile::TempDir;

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

fn on_day(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 5, 11)
        .unwrap()
        .and_time(time(hour, minute))
}

#[test]
fn test_reference_day() {
    let schedule = WorkSchedule::default();

    let cases = [
        (time(8, 0), 0, Phase::BeforeWork),
        (time(9, 0), 0, Phase::MorningWork),
        (time(12, 30), 180, Phase::Lunch),
        (time(15, 0), 270, Phase::AfternoonWork),
        (time(18, 0), 450, Phase::Overtime),
        (time(19, 0), 450, Phase::Overtime),
    ];
    for (now, completed, phase) in cases {
        let result = compute_earnings(&schedule, now).unwrap();
        assert_eq!(result.completed_work_minutes, completed, "at {now}");
        assert_eq!(result.phase, phase, "at {now}");
        assert_eq!(result.total_work_minutes, 450);
    }

    let at_three = compute_earnings(&schedule, time(15, 0)).unwrap();
    assert_eq!(at_three.earnings_rounded(), dec!(272.73));

    let evening = compute_earnings(&schedule, time(19, 0)).unwrap();
    assert_eq!(evening.earnings_so_far, evening.daily_salary);
    assert_eq!(evening.overtime_minutes, 60);
}

#[test]
fn test_earnings_never_decrease_over_a_day() {
    let schedule = WorkSchedule::default();
    let mut last = Decimal::ZERO;
    for minute in 0..24 * 60 {
        let result = compute_earnings(&schedule, time(minute / 60, minute % 60)).unwrap();
        assert!(result.earnings_so_far >= last, "dropped at minute {minute}");
        assert!(result.completed_work_minutes <= result.total_work_minutes);
        last = result.earnings_so_far;
    }
    assert_eq!(last, WorkSchedule::default().monthly_salary / Decimal::from(22));
}

#[test]
fn test_edit_config_and_refresh() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    let mut rng = Pcg64::seed_from_u64(3);

    let mut config = Config::load_from(&path).unwrap();
    let mut ticker = EarningsTicker::new(config.refresh.interval_secs);

    let first = ticker.tick(&config.work, on_day(10, 0), &mut rng);
    assert_eq!(first.len(), 1);

    // An edit within the same minute triggers a refresh on the next tick.
    config.set("work.monthly_salary", "22000").unwrap();
    config.save_to(&path).unwrap();
    let reloaded = Config::load_from(&path).unwrap();

    let events = ticker.tick(&reloaded.work, on_day(10, 0), &mut rng);
    match events.last() {
        Some(Event::EarningsSnapshot {
            result,
            status_text,
            ..
        }) => {
            assert_eq!(result.daily_salary, dec!(1000));
            assert_eq!(result.completed_work_minutes, 60);
            assert_eq!(status_text, "Today: ¥133.33");
        }
        other => panic!("Expected EarningsSnapshot, got {other:?}"),
    }
}

#[test]
fn test_broken_config_renders_fallback() {
    let mut config = Config::default();
    config.set("work.morning_end", "08:30").unwrap();

    let result = compute_earnings(&config.work, time(10, 0));
    assert!(matches!(result, Err(EarningsError::ScheduleInvalid { .. })));
    assert_eq!(status_bar_text(&result), "Salary: not configured");

    config.set("work.morning_end", "12:00").unwrap();
    config.set("work.monthly_work_days", "0").unwrap();
    let result = compute_earnings(&config.work, time(10, 0));
    assert!(matches!(result, Err(EarningsError::DivisionByZero(_))));
}

#[test]
fn test_views_for_usd_schedule() {
    let mut config = Config::default();
    config.set("work.currency", "USD").unwrap();
    config.set("work.monthly_salary", "4400").unwrap();

    let result = compute_earnings(&config.work, time(12, 0)).unwrap();
    let labels = PanelLabels::new(&result);
    assert_eq!(labels.daily_salary, "Daily salary: $200.00");
    assert_eq!(labels.earned_today, "Earned today: $80.00");
    assert_eq!(labels.effective_work_time, "Effective work time: 3h 0m");

    let details = DetailView::new(&config.work, &result).to_string();
    assert!(details.contains("Progress today: 40.0%"));
}
