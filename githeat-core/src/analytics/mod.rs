//! Contribution analytics
//!
//! Every analyzer is a pure function over a day series plus "today":
//! - Level thresholds, percentiles and intensity shading
//! - Streaks and slumps
//! - Islands of adjacent calendar cells
//! - Best month and best week
//! - Activity ratios and weekday patterns
//! - Persona classification
//! - XP, levels and today's combo
//!
//! [`report::generate_report`] runs them all and returns a single
//! [`ProfileStats`].

pub mod activity;
pub mod buckets;
pub mod islands;
pub mod persona;
pub mod report;
pub mod rpg;
pub mod streaks;
pub mod thresholds;

pub use activity::{
    summarize_activity, weekday_patterns, ActivitySummary, RatioBasis, WeekdayPatterns,
};
pub use buckets::{best_month, best_week, week_start, BestPeriod};
pub use islands::{find_largest_island, Island};
pub use persona::{Persona, PersonaProfile};
pub use report::{analyze_series, generate_report, past_and_present, ProfileStats, ProfileTotals};
pub use rpg::{calculate_combo, total_xp, Combo, ComboInputs, ComboReason, LevelProgress};
pub use streaks::{calculate_streaks, StreakStats};
pub use thresholds::{
    calculate_percentiles, calculate_thresholds, intensity_level, LevelRange, LevelThresholds,
    PercentileMap, MAX_INTENSITY,
};
