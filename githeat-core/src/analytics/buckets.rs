//! Best month and best week
//!
//! Days are grouped into calendar months and Sunday-anchored weeks. Each
//! group is scored by volume, weighted by how many of its days were active
//! and by its longest internal streak.

use crate::format::{month_label, round1, week_label};
use crate::types::ContributionDay;
use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// Days in a week, the fixed divisor for week consistency.
const DAYS_PER_WEEK: u32 = 7;

/// The winning bucket for one granularity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestPeriod {
    /// Human-readable label ("March 2024", "Jan 7 - Jan 13")
    pub label: String,
    /// Bucket key ("2024-03" or the week's Sunday, "2024-01-07")
    pub key: String,
    pub score: u64,
    /// Total contributions in the bucket
    pub count: u64,
    /// Active days as a percentage, one decimal
    pub consistency: f64,
    /// Longest run of active days inside the bucket
    pub streak: u32,
    /// Every member date, for highlighting
    pub dates: Vec<NaiveDate>,
}

/// Running totals for one bucket.
#[derive(Debug, Default)]
struct Bucket {
    count: u64,
    active_days: u32,
    total_days: u32,
    longest_streak: u32,
    running_streak: u32,
    dates: Vec<NaiveDate>,
}

impl Bucket {
    fn push(&mut self, day: &ContributionDay) {
        self.total_days += 1;
        self.dates.push(day.date);
        if day.is_active() {
            self.count += u64::from(day.count);
            self.active_days += 1;
            self.running_streak += 1;
            self.longest_streak = self.longest_streak.max(self.running_streak);
        } else {
            self.running_streak = 0;
        }
    }

    /// Fraction of active days over `divisor` days, 0 when the divisor is 0.
    fn consistency(&self, divisor: u32) -> f64 {
        if divisor == 0 {
            0.0
        } else {
            f64::from(self.active_days) / f64::from(divisor)
        }
    }

    fn score(&self, divisor: u32) -> u64 {
        let weighted =
            self.count as f64 * self.consistency(divisor) * f64::from(self.longest_streak.max(1));
        weighted.round() as u64
    }
}

/// Pick the highest-scoring bucket; ties keep the earliest.
fn best_of<K, F, L>(buckets: BTreeMap<K, Bucket>, divisor: F, describe: L) -> Option<BestPeriod>
where
    F: Fn(&Bucket) -> u32,
    L: Fn(&K) -> (String, String),
{
    let mut best: Option<(u64, K, Bucket)> = None;

    for (key, bucket) in buckets {
        let score = bucket.score(divisor(&bucket));
        if best.as_ref().map_or(true, |(top, _, _)| score > *top) {
            best = Some((score, key, bucket));
        }
    }

    best.map(|(score, key, bucket)| {
        let (label, key) = describe(&key);
        BestPeriod {
            label,
            key,
            score,
            count: bucket.count,
            consistency: round1(bucket.consistency(divisor(&bucket)) * 100.0),
            streak: bucket.longest_streak,
            dates: bucket.dates,
        }
    })
}

/// Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let back = u64::from(date.weekday().num_days_from_sunday());
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

/// Best calendar month over a sorted series.
///
/// Month consistency is over the days actually present in the series.
pub fn best_month(days: &[ContributionDay]) -> Option<BestPeriod> {
    let mut months: BTreeMap<(i32, u32), Bucket> = BTreeMap::new();
    for day in days {
        months
            .entry((day.date.year(), day.date.month()))
            .or_default()
            .push(day);
    }

    best_of(
        months,
        |bucket| bucket.total_days,
        |&(year, month)| (month_label(year, month), format!("{:04}-{:02}", year, month)),
    )
}

/// Best Sunday-anchored week over a sorted series.
///
/// Week consistency is always over seven days, so partial weeks at the edges
/// of the calendar are not inflated.
pub fn best_week(days: &[ContributionDay]) -> Option<BestPeriod> {
    let mut weeks: BTreeMap<NaiveDate, Bucket> = BTreeMap::new();
    for day in days {
        weeks.entry(week_start(day.date)).or_default().push(day);
    }

    best_of(
        weeks,
        |_| DAYS_PER_WEEK,
        |sunday| (week_label(*sunday), sunday.to_string()),
    )
}
