//! Countdown and overtime messages.
//!
//! Each message starts with a decorative icon picked by the caller's random
//! source; the rest of the text is a deterministic function of the phase and
//! the minutes left (or worked over).

use rand::seq::SliceRandom;
use rand::Rng;

use super::calculator::{EarningsResult, Phase};

const COUNTDOWN_ICONS: &[&str] = &["🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼"];
const OVERTIME_ICONS: &[&str] = &["🌙", "✨", "🕯️", "🍵", "📚", "🛋️", "🌃", "🌠"];

/// How long into the lunch gap the "enjoy your meal" message is shown.
pub const MEAL_MINUTES: u32 = 30;

/// `"2h 5m"` for an hour or more, otherwise `"45 min"`.
pub fn format_duration(minutes: u32) -> String {
    let (h, m) = (minutes / 60, minutes % 60);
    if h >= 1 {
        format!("{h}h {m}m")
    } else {
        format!("{m} min")
    }
}

fn pick<'a, R: Rng + ?Sized>(icons: &[&'a str], rng: &mut R) -> &'a str {
    icons.choose(rng).copied().unwrap_or_default()
}

/// Human-readable status line for the phase `result` is in.
pub fn format_countdown_message<R: Rng + ?Sized>(result: &EarningsResult, rng: &mut R) -> String {
    match result.phase {
        Phase::Overtime => overtime_message(result.overtime_minutes, pick(OVERTIME_ICONS, rng)),
        phase => {
            let icon = pick(COUNTDOWN_ICONS, rng);
            let left = result.remaining_minutes.unwrap_or(0);
            match phase {
                Phase::BeforeWork => before_work_message(left, icon),
                Phase::MorningWork => morning_message(left, icon),
                Phase::Lunch => {
                    lunch_message(left, result.elapsed_in_phase_minutes.unwrap_or(0), icon)
                }
                _ => afternoon_message(left, icon),
            }
        }
    }
}

fn before_work_message(left: u32, icon: &str) -> String {
    format!(
        "{icon} Work starts in {}\n☕ Plenty of time for a coffee~",
        format_duration(left)
    )
}

fn morning_message(left: u32, icon: &str) -> String {
    let d = format_duration(left);
    if left >= 60 {
        format!("{icon} {d} until lunch\n🍚 Decided what to eat yet?")
    } else if left >= 30 {
        format!("{icon} {d} and it's time to eat~\n🍜 Hang in there!")
    } else if left >= 10 {
        format!("{icon} Only {d} to go!\n🍔 Time to order takeout~")
    } else {
        format!("{icon} Final {d}!\n🍱 Chopsticks ready, sprint!")
    }
}

fn lunch_message(left: u32, elapsed: u32, icon: &str) -> String {
    let d = format_duration(left);
    if elapsed < MEAL_MINUTES {
        format!("🍚 Lunch time! Back at it in {d}\n😋 Enjoy your meal~")
    } else {
        format!("💤 Napping...\n{icon} {d} until the afternoon shift")
    }
}

fn afternoon_message(left: u32, icon: &str) -> String {
    let d = format_duration(left);
    if left >= 120 {
        format!("{icon} {d} until the end of the day\n🎮 How are today's tasks going?")
    } else if left >= 60 {
        format!("{icon} Hold on for {d}\n☕ Need a coffee?")
    } else if left >= 30 {
        format!("{icon} Only {d} left~\n🏃 Start packing up~")
    } else if left >= 10 {
        format!("{icon} Final {d}!\n🚪 Finger hovering over the time clock!")
    } else {
        format!("{icon} Countdown: {d}!\n🎉 Freedom is almost here!")
    }
}

fn overtime_message(over: u32, icon: &str) -> String {
    let d = format_duration(over);
    if over >= 180 {
        format!(
            "{icon} {d} of overtime\n🌙 It's late, today's effort is enough\nSave some energy for tomorrow~"
        )
    } else if over >= 120 {
        format!(
            "{icon} {d} of overtime\n🏠 Family and friends are waiting for you\nWork never ends, time together is precious~"
        )
    } else if over >= 60 {
        format!(
            "{icon} {d} past the end of the day\n📖 You did great today\nGive yourself a relaxing evening~"
        )
    } else {
        format!("{icon} {d} of overtime\n🛋️ Time to head home\nA warm bed and sweet dreams await~")
    }
}
