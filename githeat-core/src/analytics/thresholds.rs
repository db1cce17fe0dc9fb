//! Level thresholds and percentile cut-points
//!
//! Both maps are computed over active days only and accept the raw series in
//! any order, future days included.

use crate::types::ContributionDay;
use serde::Serialize;
use std::collections::BTreeMap;

/// Observed count range for one source level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelRange {
    pub min: u32,
    pub max: u32,
}

/// Sparse map from source level (1-4) to its observed count range.
pub type LevelThresholds = BTreeMap<u8, LevelRange>;

/// Map from percentile marker to the count at that marker.
pub type PercentileMap = BTreeMap<u8, u32>;

/// Intensity steps above the base shade, highest first.
const INTENSITY_LADDER: [(u8, u8); 10] = [
    (99, 11),
    (95, 10),
    (90, 9),
    (80, 8),
    (70, 7),
    (60, 6),
    (50, 5),
    (40, 4),
    (30, 3),
    (20, 2),
];

/// Highest intensity step.
pub const MAX_INTENSITY: u8 = 11;

/// Min/max count per source level, over active days.
///
/// Levels with no active day are absent; level 0 never appears.
pub fn calculate_thresholds(days: &[ContributionDay]) -> LevelThresholds {
    let mut thresholds = LevelThresholds::new();

    for day in days.iter().filter(|d| d.is_active() && (1..=4).contains(&d.level)) {
        thresholds
            .entry(day.level)
            .and_modify(|range| {
                range.min = range.min.min(day.count);
                range.max = range.max.max(day.count);
            })
            .or_insert(LevelRange {
                min: day.count,
                max: day.count,
            });
    }

    thresholds
}

/// Nearest-rank percentiles over active-day counts.
///
/// For `N` active days the value at marker `m` is the count at ascending
/// rank `ceil(m/100 * N)` (1-indexed), clamped into range. Empty when there
/// are no active days.
pub fn calculate_percentiles(days: &[ContributionDay], markers: &[u8]) -> PercentileMap {
    let mut counts: Vec<u32> = days.iter().filter(|d| d.is_active()).map(|d| d.count).collect();
    if counts.is_empty() {
        return PercentileMap::new();
    }
    counts.sort_unstable();

    markers
        .iter()
        .map(|&m| (m, counts[nearest_rank_index(m, counts.len())]))
        .collect()
}

/// Zero-based index for marker `m` over `n` sorted values.
fn nearest_rank_index(m: u8, n: usize) -> usize {
    // ceil(m * n / 100) in integers, avoiding float drift such as 0.7 * 10 > 7
    let rank = (usize::from(m) * n + 99) / 100;
    rank.saturating_sub(1).min(n - 1)
}

/// Fine-grained shade (0-11) for a day's count.
///
/// 0 for inactive days. Otherwise the highest step whose marker cut-point is
/// at or below `count`, falling back to 1. Markers missing from the map never
/// match.
pub fn intensity_level(count: u32, percentiles: &PercentileMap) -> u8 {
    if count == 0 {
        return 0;
    }

    INTENSITY_LADDER
        .iter()
        .find(|(marker, _)| percentiles.get(marker).is_some_and(|&cut| count >= cut))
        .map(|&(_, step)| step)
        .unwrap_or(1)
}
