//! Streak advancement and bonus schedule
//!
//! A streak counts consecutive calendar days with at least one qualifying
//! log. Time of day is discarded before any comparison; a log at 23:59 and
//! another at 00:01 the next day are adjacent days.

use chrono::{Duration, NaiveDate};

/// Outcome of advancing a streak by one logging action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakChange {
    /// First qualifying log ever
    Started,
    /// Previous log was exactly yesterday
    Continued,
    /// Already logged today; nothing to do
    Unchanged,
    /// Gap of two or more days broke the streak
    Reset { previous: i32 },
}

/// Advance a streak for a log on `today`, returning the new streak length
/// and what happened.
pub fn advance(streak_days: i32, last_log_date: Option<NaiveDate>, today: NaiveDate) -> (i32, StreakChange) {
    match last_log_date {
        None => (1, StreakChange::Started),
        Some(last) if last == today => (streak_days, StreakChange::Unchanged),
        Some(last) if last == today - Duration::days(1) => {
            (streak_days + 1, StreakChange::Continued)
        }
        Some(_) => (1, StreakChange::Reset { previous: streak_days }),
    }
}

/// Bonus points for reaching `streak_days`.
///
/// The first day of a streak (fresh start or reset) never earns a bonus.
/// Exact milestones outrank the multiple-of-ten rule: 30 and 100 pay their
/// milestone amounts, not 50.
pub fn bonus(streak_days: i32) -> i32 {
    if streak_days <= 1 {
        return 0;
    }
    match streak_days {
        7 => 25,
        30 => 100,
        100 => 300,
        n if n % 10 == 0 => 50,
        _ => 5,
    }
}

/// Whether `streak_days` is a celebrated milestone (surfaced as a
/// `StreakMilestone` event, not just a base continuation bonus).
pub fn is_milestone(streak_days: i32) -> bool {
    streak_days > 1 && (matches!(streak_days, 7 | 30 | 100) || streak_days % 10 == 0)
}

/// Fixed consistency-achievement thresholds, in days.
pub const CONSISTENCY_THRESHOLDS: &[i32] = &[7, 30, 100];
