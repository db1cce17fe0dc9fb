//! Streaks and slumps
//!
//! Runs are taken over the date sequence as supplied (sorted, nothing after
//! today); a gap in the dates does not break a run.

use crate::types::ContributionDay;
use chrono::NaiveDate;
use serde::Serialize;

/// Streak statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StreakStats {
    /// Active days ending at the most recent day (today may still be empty)
    pub current_streak: u32,
    pub current_streak_dates: Vec<NaiveDate>,
    /// Longest run of active days
    pub longest_streak: u32,
    pub longest_streak_dates: Vec<NaiveDate>,
    /// Longest run of zero-count days
    pub longest_slump: u32,
    pub longest_slump_dates: Vec<NaiveDate>,
}

impl StreakStats {
    /// First and last date of the longest streak.
    pub fn longest_streak_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        span(&self.longest_streak_dates)
    }

    /// First and last date of the longest slump.
    pub fn longest_slump_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        span(&self.longest_slump_dates)
    }
}

fn span(dates: &[NaiveDate]) -> Option<(NaiveDate, NaiveDate)> {
    Some((*dates.first()?, *dates.last()?))
}

/// A run being accumulated during the forward pass.
#[derive(Default)]
struct Run {
    dates: Vec<NaiveDate>,
}

impl Run {
    /// Close the run, keeping it if strictly longer than `best`.
    fn close_into(&mut self, best: &mut Vec<NaiveDate>) {
        if self.dates.len() > best.len() {
            *best = std::mem::take(&mut self.dates);
        } else {
            self.dates.clear();
        }
    }
}

/// Calculate streaks and slumps over a sorted series ending at or before `today`.
///
/// The forward pass closes an active run on every zero day and a slump run on
/// every active day; whichever run is still open at the end is compared once
/// more. Ties keep the earlier run.
///
/// The current streak walks backward from the last day. A zero-count day ends
/// it, except when that day is `today`, which may still be in progress.
pub fn calculate_streaks(days: &[ContributionDay], today: NaiveDate) -> StreakStats {
    let mut streak = Run::default();
    let mut slump = Run::default();
    let mut longest_streak_dates = Vec::new();
    let mut longest_slump_dates = Vec::new();

    for day in days {
        if day.is_active() {
            streak.dates.push(day.date);
            slump.close_into(&mut longest_slump_dates);
        } else {
            streak.close_into(&mut longest_streak_dates);
            slump.dates.push(day.date);
        }
    }
    streak.close_into(&mut longest_streak_dates);
    slump.close_into(&mut longest_slump_dates);

    let mut current_streak_dates = Vec::new();
    for day in days.iter().rev() {
        if day.is_active() {
            current_streak_dates.push(day.date);
        } else if day.date != today {
            break;
        }
    }
    current_streak_dates.reverse();

    StreakStats {
        current_streak: current_streak_dates.len() as u32,
        current_streak_dates,
        longest_streak: longest_streak_dates.len() as u32,
        longest_streak_dates,
        longest_slump: longest_slump_dates.len() as u32,
        longest_slump_dates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    /// Consecutive days starting 2024-03-01 with the given counts.
    fn series(counts: &[u32]) -> Vec<ContributionDay> {
        counts
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                ContributionDay::new(d("2024-03-01") + Days::new(i as u64), u8::from(c > 0), c)
            })
            .collect()
    }

    fn last_date(days: &[ContributionDay]) -> NaiveDate {
        days.last().unwrap().date
    }

    #[test]
    fn test_single_zero_day() {
        let days = vec![ContributionDay::new(d("2024-01-01"), 0, 0)];
        let stats = calculate_streaks(&days, d("2024-06-01"));
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.longest_streak, 0);
        assert_eq!(stats.longest_slump, 1);
    }

    #[test]
    fn test_empty_series() {
        let stats = calculate_streaks(&[], d("2024-06-01"));
        assert_eq!(stats, StreakStats::default());
        assert!(stats.longest_streak_range().is_none());
    }

    #[test]
    fn test_all_active() {
        let days = series(&[3; 10]);
        let stats = calculate_streaks(&days, last_date(&days));
        assert_eq!(stats.current_streak, 10);
        assert_eq!(stats.longest_streak, 10);
        assert_eq!(stats.longest_slump, 0);
    }

    #[test]
    fn test_longest_run_at_end_is_counted() {
        let days = series(&[1, 0, 2, 2, 2]);
        let stats = calculate_streaks(&days, last_date(&days));
        assert_eq!(stats.longest_streak, 3);
        assert_eq!(
            stats.longest_streak_range(),
            Some((d("2024-03-03"), d("2024-03-05")))
        );
    }

    #[test]
    fn test_ties_keep_first_run() {
        let days = series(&[1, 1, 0, 0, 1, 1, 0, 0]);
        let stats = calculate_streaks(&days, last_date(&days));
        assert_eq!(stats.longest_streak_dates, vec![d("2024-03-01"), d("2024-03-02")]);
        assert_eq!(stats.longest_slump_dates, vec![d("2024-03-03"), d("2024-03-04")]);
    }

    #[test]
    fn test_empty_today_does_not_break_current_streak() {
        let days = series(&[0, 4, 4, 4, 0]);
        let today = last_date(&days);
        let stats = calculate_streaks(&days, today);
        assert_eq!(stats.current_streak, 3);
        assert_eq!(
            stats.current_streak_dates,
            vec![d("2024-03-02"), d("2024-03-03"), d("2024-03-04")]
        );

        // The same empty day breaks the streak once it is in the past
        let stats = calculate_streaks(&days, today + Days::new(1));
        assert_eq!(stats.current_streak, 0);
    }

    #[test]
    fn test_empty_today_still_counts_as_slump() {
        let days = series(&[5, 0]);
        let stats = calculate_streaks(&days, last_date(&days));
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.longest_slump, 1);
    }

    #[test]
    fn test_longest_bounds_current() {
        for counts in [
            vec![1, 0, 1, 1, 0, 1],
            vec![0, 0, 0],
            vec![2, 2, 0, 2, 2, 2, 0],
            vec![1, 1, 1, 0, 1],
        ] {
            let days = series(&counts);
            let stats = calculate_streaks(&days, last_date(&days));
            assert!(stats.longest_streak >= stats.current_streak, "{:?}", counts);
            assert!(
                (stats.longest_streak + stats.longest_slump) as usize <= days.len(),
                "{:?}",
                counts
            );
        }
    }
}
