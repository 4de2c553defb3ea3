//! Consecutive-day streak calculations.

use std::collections::BTreeSet;

use chrono::NaiveDate;

/// Counts consecutive practice days ending today.
///
/// Today counts when present; the walk stops at the first day without
/// practice, so a missed today yields zero.
pub(super) fn current_streak(days: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut cursor = today;
    while days.contains(&cursor) {
        streak += 1;
        match cursor.pred_opt() {
            Some(previous) => cursor = previous,
            None => break,
        }
    }
    streak
}

/// Longest run of calendar-adjacent practice days.
pub(super) fn longest_streak(days: &BTreeSet<NaiveDate>) -> u32 {
    let mut longest = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;

    for &day in days.iter().rev() {
        run = match previous {
            Some(later) if later.pred_opt() == Some(day) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(day);
    }
    longest
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, d).expect("valid date")
    }

    fn days(values: &[u32]) -> BTreeSet<NaiveDate> {
        values.iter().copied().map(day).collect()
    }

    #[rstest]
    #[case(&[], 0)]
    #[case(&[10], 1)]
    #[case(&[8, 9, 10], 3)]
    #[case(&[7, 9, 10], 2)]
    #[case(&[8, 9], 0)]
    fn current_streak_counts_back_from_today(#[case] values: &[u32], #[case] expected: u32) {
        assert_eq!(current_streak(&days(values), day(10)), expected);
    }

    #[rstest]
    #[case(&[], 0)]
    #[case(&[3], 1)]
    #[case(&[1, 2, 3, 7, 8], 3)]
    #[case(&[1, 3, 5], 1)]
    #[case(&[20, 21, 22, 23, 2, 3], 4)]
    fn longest_streak_finds_longest_run(#[case] values: &[u32], #[case] expected: u32) {
        assert_eq!(longest_streak(&days(values)), expected);
    }

    #[rstest]
    fn longest_streak_spans_month_boundary() {
        let set: BTreeSet<NaiveDate> = [
            NaiveDate::from_ymd_opt(2026, 4, 30).expect("valid date"),
            NaiveDate::from_ymd_opt(2026, 5, 1).expect("valid date"),
        ]
        .into_iter()
        .collect();
        assert_eq!(longest_streak(&set), 2);
    }
}
