//! Islands on the calendar grid
//!
//! The calendar is drawn as weeks (columns) by weekdays (rows), so a day
//! touches the day before and after it (same column) and the same weekday in
//! the neighbouring weeks. An island is a connected group of days that all
//! satisfy a predicate.

use crate::types::ContributionDay;
use chrono::{Days, NaiveDate};
use serde::Serialize;
use std::collections::{HashMap, HashSet, VecDeque};

/// Day offsets of the four grid neighbours.
const GRID_NEIGHBOURS: [i64; 4] = [-1, 1, -7, 7];

/// The largest island found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Island {
    pub size: u32,
    /// Member dates, ascending
    pub dates: Vec<NaiveDate>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl Island {
    fn from_dates(mut dates: Vec<NaiveDate>) -> Self {
        dates.sort_unstable();
        Self {
            size: dates.len() as u32,
            start: dates.first().copied(),
            end: dates.last().copied(),
            dates,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.binary_search(&date).is_ok()
    }
}

fn shift(date: NaiveDate, offset: i64) -> Option<NaiveDate> {
    if offset >= 0 {
        date.checked_add_days(Days::new(offset as u64))
    } else {
        date.checked_sub_days(Days::new(offset.unsigned_abs()))
    }
}

/// Find the largest island of days matching `predicate`.
///
/// Only days in `days` that are on or before `today` are graph nodes. Seeds
/// are taken in input order and ties keep the island found first.
pub fn find_largest_island<P>(days: &[ContributionDay], today: NaiveDate, predicate: P) -> Island
where
    P: Fn(&ContributionDay) -> bool,
{
    let by_date: HashMap<NaiveDate, &ContributionDay> = days
        .iter()
        .filter(|d| d.date <= today)
        .map(|d| (d.date, d))
        .collect();

    let mut visited: HashSet<NaiveDate> = HashSet::new();
    let mut biggest: Vec<NaiveDate> = Vec::new();

    for seed in days.iter().filter(|d| d.date <= today && predicate(d)) {
        if !visited.insert(seed.date) {
            continue;
        }

        let mut component = Vec::new();
        let mut queue = VecDeque::from([seed.date]);

        while let Some(current) = queue.pop_front() {
            component.push(current);

            for offset in GRID_NEIGHBOURS {
                let Some(next) = shift(current, offset) else {
                    continue;
                };
                let is_member = by_date.get(&next).is_some_and(|day| predicate(day));
                if is_member && visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        if component.len() > biggest.len() {
            biggest = component;
        }
    }

    tracing::trace!(size = biggest.len(), "Largest island");
    Island::from_dates(biggest)
}
