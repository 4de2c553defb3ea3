//! Windowed aggregation of practice sessions.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::{DateTime, Days, Duration, NaiveDate, TimeZone, Utc};

use crate::domain::{PracticeSession, Rating};

use super::streaks::{current_streak, longest_streak};
use super::{
    Achievements, FocusAreaCount, MAX_WINDOW_DAYS, PracticeDay, PracticeStats, RatingCount,
    TrendPoint, round_minutes,
};

#[derive(Debug, Default, Clone, Copy)]
struct DayBucket {
    seconds: u64,
    sessions: u32,
    mood_sum: u32,
    focus_sum: u32,
}

impl DayBucket {
    fn add(&mut self, session: &PracticeSession) {
        self.seconds += u64::from(session.duration_seconds());
        self.sessions += 1;
        self.mood_sum += u32::from(session.mood().value());
        self.focus_sum += u32::from(session.focus().value());
    }

    fn mean(sum: u32, count: u32) -> Option<f64> {
        (count > 0).then(|| f64::from(sum) / f64::from(count))
    }
}

/// Computes statistics over sessions dated within `window_days` of `now`.
///
/// A session is kept when its timestamp is at or after
/// `now - window_days days`. Calendar days, streaks and the trend series use
/// the time zone carried by `now`. Windows longer than [`MAX_WINDOW_DAYS`]
/// are clamped, and the reported `window_days` is the clamped value.
/// Identical inputs always produce identical output.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use practice_tracker::domain::compute_practice_stats;
///
/// let stats = compute_practice_stats(&[], 30, Utc::now());
/// assert_eq!(stats.total_sessions, 0);
/// assert_eq!(stats.trend.len(), 30);
/// assert_eq!(stats.mood_distribution.len(), 5);
/// ```
pub fn compute_practice_stats<Tz: TimeZone>(
    sessions: &[PracticeSession],
    window_days: u32,
    now: DateTime<Tz>,
) -> PracticeStats {
    let window_days = window_days.min(MAX_WINDOW_DAYS);
    let zone = now.timezone();
    let today = now.date_naive();
    // Unrepresentable cutoffs lie before every stored session.
    let cutoff = now
        .clone()
        .checked_sub_signed(Duration::days(i64::from(window_days)))
        .map(|cutoff| cutoff.with_timezone(&Utc));

    let kept: Vec<&PracticeSession> = sessions
        .iter()
        .filter(|session| cutoff.is_none_or(|cutoff| session.date() >= cutoff))
        .collect();

    let mut buckets: BTreeMap<NaiveDate, DayBucket> = BTreeMap::new();
    for session in &kept {
        let day = session.date().with_timezone(&zone).date_naive();
        buckets.entry(day).or_default().add(session);
    }

    let total_sessions = u32::try_from(kept.len()).unwrap_or(u32::MAX);
    let total_seconds: u64 = buckets.values().map(|bucket| bucket.seconds).sum();
    let days_with_practice = u32::try_from(buckets.len()).unwrap_or(u32::MAX);
    let mood_sum: u32 = buckets.values().map(|bucket| bucket.mood_sum).sum();
    let focus_sum: u32 = buckets.values().map(|bucket| bucket.focus_sum).sum();

    let days: BTreeSet<NaiveDate> = buckets.keys().copied().collect();
    let current = current_streak(&days, today);

    PracticeStats {
        window_days,
        total_sessions,
        total_seconds,
        avg_seconds_per_session: average(total_seconds, total_sessions),
        avg_seconds_per_day: average(total_seconds, days_with_practice),
        days_with_practice,
        current_streak: current,
        longest_streak: longest_streak(&days),
        avg_mood: DayBucket::mean(mood_sum, total_sessions).unwrap_or(0.0),
        avg_focus: DayBucket::mean(focus_sum, total_sessions).unwrap_or(0.0),
        focus_areas: focus_area_counts(&kept),
        mood_distribution: distribution(&kept, PracticeSession::mood),
        focus_distribution: distribution(&kept, PracticeSession::focus),
        trend: trend(&buckets, today, window_days),
        practice_days: buckets
            .iter()
            .map(|(date, bucket)| PracticeDay {
                date: *date,
                seconds: bucket.seconds,
            })
            .collect(),
        achievements: Achievements::evaluate(current, total_sessions, total_seconds),
    }
}

fn average(total: u64, count: u32) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / f64::from(count)
    }
}

fn focus_area_counts(sessions: &[&PracticeSession]) -> Vec<FocusAreaCount> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for area in sessions.iter().filter_map(|session| session.focus_area()) {
        *counts.entry(area).or_default() += 1;
    }

    let mut areas: Vec<FocusAreaCount> = counts
        .into_iter()
        .map(|(name, count)| FocusAreaCount {
            name: name.to_owned(),
            count,
        })
        .collect();
    areas.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    areas
}

fn distribution(
    sessions: &[&PracticeSession],
    rating_of: fn(&PracticeSession) -> Rating,
) -> Vec<RatingCount> {
    Rating::ALL
        .into_iter()
        .map(|rating| RatingCount {
            rating,
            count: u32::try_from(
                sessions
                    .iter()
                    .filter(|session| rating_of(session) == rating)
                    .count(),
            )
            .unwrap_or(u32::MAX),
        })
        .collect()
}

fn trend(
    buckets: &BTreeMap<NaiveDate, DayBucket>,
    today: NaiveDate,
    window_days: u32,
) -> Vec<TrendPoint> {
    (0..window_days)
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(u64::from(offset))))
        .map(|date| {
            let bucket = buckets.get(&date).copied().unwrap_or_default();
            TrendPoint {
                date,
                minutes: round_minutes(bucket.seconds),
                mood: DayBucket::mean(bucket.mood_sum, bucket.sessions),
                focus: DayBucket::mean(bucket.focus_sum, bucket.sessions),
            }
        })
        .collect()
}
