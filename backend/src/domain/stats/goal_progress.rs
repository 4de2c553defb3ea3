//! Progress towards the daily, weekly and monthly goals.

use chrono::{DateTime, Days, TimeZone};

use crate::domain::{GoalPeriod, GoalTargets, PracticeSession};

use super::round_minutes;

/// Progress for one goal period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalProgress {
    pub period: GoalPeriod,
    pub practiced_minutes: u64,
    pub target_minutes: u32,
    /// Percentage of the target reached, capped at 100.
    pub percent: f64,
    /// Minutes still needed; zero once the target is met.
    pub remaining_minutes: u64,
}

/// Progress for every goal period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalProgressReport {
    pub daily: GoalProgress,
    pub weekly: GoalProgress,
    pub monthly: GoalProgress,
}

/// Computes goal progress for the periods ending on `now`'s calendar day.
///
/// Daily covers today, weekly the last 7 calendar days and monthly the last
/// 30, each including today.
pub fn compute_goal_progress<Tz: TimeZone>(
    sessions: &[PracticeSession],
    targets: &GoalTargets,
    now: DateTime<Tz>,
) -> GoalProgressReport {
    let progress = |period| period_progress(sessions, targets, &now, period);
    GoalProgressReport {
        daily: progress(GoalPeriod::Daily),
        weekly: progress(GoalPeriod::Weekly),
        monthly: progress(GoalPeriod::Monthly),
    }
}

fn period_progress<Tz: TimeZone>(
    sessions: &[PracticeSession],
    targets: &GoalTargets,
    now: &DateTime<Tz>,
    period: GoalPeriod,
) -> GoalProgress {
    let zone = now.timezone();
    let today = now.date_naive();
    let first_day = today
        .checked_sub_days(Days::new(u64::from(period.days() - 1)))
        .unwrap_or(today);

    let seconds: u64 = sessions
        .iter()
        .filter(|session| {
            let day = session.date().with_timezone(&zone).date_naive();
            day >= first_day && day <= today
        })
        .map(|session| u64::from(session.duration_seconds()))
        .sum();

    let practiced_minutes = round_minutes(seconds);
    let target_minutes = targets.for_period(period);
    let target = u64::from(target_minutes);
    let percent = if target == 0 {
        100.0
    } else {
        (practiced_minutes as f64 / target as f64 * 100.0).min(100.0)
    };

    GoalProgress {
        period,
        practiced_minutes,
        target_minutes,
        percent,
        remaining_minutes: target.saturating_sub(practiced_minutes),
    }
}
