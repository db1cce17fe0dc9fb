//! Activity ratios and weekday patterns
//!
//! Velocity, consistency and weekend figures prefer the current year to date
//! and fall back to the whole calendar when the year has not started in the
//! data (e.g. a past year's calendar).

use crate::format::round1;
use crate::types::ContributionDay;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Numerator and denominator behind a displayed ratio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RatioBasis {
    pub part: u64,
    pub whole: u64,
}

impl RatioBasis {
    fn new(part: u64, whole: u64) -> Self {
        Self { part, whole }
    }

    /// `part / whole`, or 0 when `whole` is 0.
    pub fn ratio(&self) -> f64 {
        if self.whole == 0 {
            0.0
        } else {
            self.part as f64 / self.whole as f64
        }
    }
}

/// Headline activity ratios.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ActivitySummary {
    /// Whether the figures cover the current year to date
    pub is_ytd: bool,
    /// Contributions per active day, one decimal
    pub velocity: f64,
    /// Active days as a percentage of days, one decimal
    pub consistency: f64,
    /// Active weekend days as a whole percentage of weekend days
    pub weekend_score: u32,
    /// Share of contributions made on weekends (0-1)
    pub weekend_volume_share: f64,
    /// Contributions over active days
    pub velocity_basis: RatioBasis,
    /// Active days over days
    pub consistency_basis: RatioBasis,
    /// Active weekend days over weekend days
    pub weekend_basis: RatioBasis,
}

/// Counters gathered in one pass over a window of days.
#[derive(Debug, Default)]
struct WindowTotals {
    days: u64,
    active_days: u64,
    weekend_days: u64,
    active_weekend_days: u64,
    weekend_volume: u64,
    volume: u64,
}

impl WindowTotals {
    fn collect<'a>(days: impl Iterator<Item = &'a ContributionDay>) -> Self {
        let mut totals = Self::default();
        for day in days {
            totals.days += 1;
            totals.volume += u64::from(day.count);
            if day.is_weekend() {
                totals.weekend_days += 1;
                totals.weekend_volume += u64::from(day.count);
            }
            if day.is_active() {
                totals.active_days += 1;
                if day.is_weekend() {
                    totals.active_weekend_days += 1;
                }
            }
        }
        totals
    }

    fn summarize(&self, is_ytd: bool) -> ActivitySummary {
        let velocity_basis = RatioBasis::new(self.volume, self.active_days);
        let consistency_basis = RatioBasis::new(self.active_days, self.days);
        let weekend_basis = RatioBasis::new(self.active_weekend_days, self.weekend_days);

        ActivitySummary {
            is_ytd,
            velocity: round1(velocity_basis.ratio()),
            consistency: round1(consistency_basis.ratio() * 100.0),
            weekend_score: (weekend_basis.ratio() * 100.0).round() as u32,
            weekend_volume_share: RatioBasis::new(self.weekend_volume, self.volume).ratio(),
            velocity_basis,
            consistency_basis,
            weekend_basis,
        }
    }
}

/// January 1st of `today`'s year.
pub fn year_start(today: NaiveDate) -> NaiveDate {
    today.with_ordinal(1).unwrap_or(today)
}

/// Ratios over a sorted series ending at or before `today`.
pub fn summarize_activity(days: &[ContributionDay], today: NaiveDate) -> ActivitySummary {
    let ytd_start = year_start(today);
    let ytd = WindowTotals::collect(days.iter().filter(|d| d.date >= ytd_start));

    if ytd.days > 0 {
        ytd.summarize(true)
    } else {
        WindowTotals::collect(days.iter()).summarize(false)
    }
}

/// Per-weekday breakdown (index 0 = Sunday).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeekdayPatterns {
    /// Contributions per weekday
    pub totals: [u64; 7],
    /// Days seen per weekday
    pub day_counts: [u32; 7],
    /// Days with level >= 2 per weekday
    pub high_activity_days: [u32; 7],
    /// Weekday with the most contributions
    pub best_day: usize,
    /// Weekday with the fewest contributions
    pub worst_day: usize,
    /// Weekday with the highest average per occurrence
    pub power_day: usize,
    pub power_day_average: f64,
    /// Weekday with the most high-activity days
    pub peak_day: usize,
    /// Single busiest date, if any day was active
    pub most_active_date: Option<NaiveDate>,
    pub most_active_count: u32,
}

impl WeekdayPatterns {
    /// Average contributions per occurrence of `weekday`.
    pub fn average(&self, weekday: usize) -> f64 {
        RatioBasis::new(self.totals[weekday], u64::from(self.day_counts[weekday])).ratio()
    }
}

/// Index of the first strictly greatest value.
fn first_max<T: PartialOrd + Copy>(values: &[T]) -> usize {
    let mut best = 0;
    for (i, v) in values.iter().enumerate().skip(1) {
        if *v > values[best] {
            best = i;
        }
    }
    best
}

/// Index of the first strictly smallest value.
fn first_min<T: PartialOrd + Copy>(values: &[T]) -> usize {
    let mut best = 0;
    for (i, v) in values.iter().enumerate().skip(1) {
        if *v < values[best] {
            best = i;
        }
    }
    best
}

/// Weekday breakdown over a sorted series ending at or before today.
pub fn weekday_patterns(days: &[ContributionDay], high_activity_level: u8) -> WeekdayPatterns {
    let mut patterns = WeekdayPatterns::default();

    for day in days {
        let weekday = day.weekday_index();
        patterns.totals[weekday] += u64::from(day.count);
        patterns.day_counts[weekday] += 1;
        if day.level >= high_activity_level {
            patterns.high_activity_days[weekday] += 1;
        }
        if day.count > patterns.most_active_count {
            patterns.most_active_count = day.count;
            patterns.most_active_date = Some(day.date);
        }
    }

    let averages: Vec<f64> = (0..7).map(|i| patterns.average(i)).collect();
    patterns.best_day = first_max(&patterns.totals);
    patterns.worst_day = first_min(&patterns.totals);
    patterns.power_day = first_max(&averages);
    patterns.power_day_average = round1(averages[patterns.power_day]);
    patterns.peak_day = first_max(&patterns.high_activity_days);
    patterns
}
