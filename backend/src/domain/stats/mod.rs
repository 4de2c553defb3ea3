//! Practice statistics derived from stored sessions.
//!
//! Everything here is pure: callers supply the session snapshot and the
//! instant treated as "now". The time zone of `now` decides which calendar
//! day a session belongs to.

use chrono::NaiveDate;

use crate::domain::Rating;

mod aggregate;
mod goal_progress;
mod streaks;

pub use aggregate::compute_practice_stats;
pub use goal_progress::{GoalProgress, GoalProgressReport, compute_goal_progress};

/// Longest window the aggregator covers; longer requests are clamped to it.
pub const MAX_WINDOW_DAYS: u32 = 3_650;

/// Rounds seconds to whole minutes with halves rounding up.
pub(crate) fn round_minutes(seconds: u64) -> u64 {
    seconds.saturating_add(30) / 60
}

/// Statistics snapshot over a trailing window of days.
#[derive(Debug, Clone, PartialEq)]
pub struct PracticeStats {
    pub window_days: u32,
    pub total_sessions: u32,
    pub total_seconds: u64,
    pub avg_seconds_per_session: f64,
    pub avg_seconds_per_day: f64,
    pub days_with_practice: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub avg_mood: f64,
    pub avg_focus: f64,
    /// Sorted by count descending, then name ascending.
    pub focus_areas: Vec<FocusAreaCount>,
    /// Always five entries, levels 1 through 5.
    pub mood_distribution: Vec<RatingCount>,
    /// Always five entries, levels 1 through 5.
    pub focus_distribution: Vec<RatingCount>,
    /// One point per calendar day, oldest first, today last.
    pub trend: Vec<TrendPoint>,
    /// Days with at least one session, ascending.
    pub practice_days: Vec<PracticeDay>,
    pub achievements: Achievements,
}

/// Number of sessions tagged with one focus area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusAreaCount {
    pub name: String,
    pub count: u32,
}

/// Number of sessions at one rating level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingCount {
    pub rating: Rating,
    pub count: u32,
}

/// Practice totals for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub minutes: u64,
    /// Mean mood for the day; `None` without sessions.
    pub mood: Option<f64>,
    /// Mean focus for the day; `None` without sessions.
    pub focus: Option<f64>,
}

/// Total practised seconds on a day with sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticeDay {
    pub date: NaiveDate,
    pub seconds: u64,
}

/// Milestones unlocked within the window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Achievements {
    /// Current streak of at least seven days.
    pub seven_day_streak: bool,
    /// At least thirty sessions.
    pub thirty_sessions: bool,
    /// At least ten hours of practice.
    pub ten_hours: bool,
}

impl Achievements {
    pub(crate) const STREAK_DAYS: u32 = 7;
    pub(crate) const SESSION_COUNT: u32 = 30;
    pub(crate) const TOTAL_SECONDS: u64 = 10 * 60 * 60;

    pub(crate) fn evaluate(current_streak: u32, total_sessions: u32, total_seconds: u64) -> Self {
        Self {
            seven_day_streak: current_streak >= Self::STREAK_DAYS,
            thirty_sessions: total_sessions >= Self::SESSION_COUNT,
            ten_hours: total_seconds >= Self::TOTAL_SECONDS,
        }
    }
}
