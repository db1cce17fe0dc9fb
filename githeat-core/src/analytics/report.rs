//! Profile report
//!
//! Runs every analyzer over one snapshot and gathers the results into
//! [`ProfileStats`], the object handed to whatever renders the page. Field
//! names here are the contract with the renderer.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use super::activity::{
    summarize_activity, weekday_patterns, year_start, ActivitySummary, WeekdayPatterns,
};
use super::buckets::{best_month, best_week, BestPeriod};
use super::islands::{find_largest_island, Island};
use super::persona::{Persona, PersonaProfile};
use super::rpg::{calculate_combo, total_xp, Combo, ComboInputs, LevelProgress};
use super::streaks::{calculate_streaks, StreakStats};
use super::thresholds::{
    calculate_percentiles, calculate_thresholds, intensity_level, LevelThresholds, PercentileMap,
};
use crate::config::AnalyticsConfig;
use crate::snapshot::ProfileSnapshot;
use crate::types::{
    ContributionDay, CreatedRepo, PinnedProject, RepoActivity, SocialStats, TimelineActivity,
};

/// Pinned language that carries no information.
const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Complete statistics for one profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileStats {
    /// The day treated as "today"
    pub today: NaiveDate,
    /// Count range per source level
    pub thresholds: LevelThresholds,
    /// Count at each percentile marker
    pub percentiles: PercentileMap,
    /// Shade (1-11) for every active day
    pub intensities: BTreeMap<NaiveDate, u8>,
    /// Contributions this year, or over the whole calendar for past years
    pub total_contributions: u64,
    pub today_count: u32,
    /// Weekday of today (0 = Sunday)
    pub current_weekday: usize,
    /// Contributions on today's weekday so far
    pub current_weekday_total: u64,
    pub activity: ActivitySummary,
    pub weekdays: WeekdayPatterns,
    pub streaks: StreakStats,
    /// Largest island of high-activity days
    pub island: Island,
    /// Largest island of near-empty days
    pub slump_island: Island,
    pub best_month: Option<BestPeriod>,
    pub best_week: Option<BestPeriod>,
    pub persona: Persona,
    pub level: LevelProgress,
    pub combo: Combo,
    /// Human-readable combo score breakdown
    pub combo_breakdown: String,
    pub profile: ProfileTotals,
}

/// Pass-through aggregates from the rest of the profile page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileTotals {
    pub total_stars: u64,
    pub total_forks: u64,
    /// Most frequent pinned languages
    pub top_languages: Vec<String>,
    pub top_repos: Vec<RepoActivity>,
    pub created_repos: u32,
    pub created_repo_list: Vec<CreatedRepo>,
    pub issues_opened: u32,
    pub pull_requests: u32,
    pub pull_request_reviews: u32,
    pub merged_pull_requests: u32,
    pub achievements: Vec<String>,
    pub socials: SocialStats,
}

impl ProfileTotals {
    fn collect(
        pinned: &[PinnedProject],
        timeline: &TimelineActivity,
        achievements: &[String],
        socials: SocialStats,
        config: &AnalyticsConfig,
    ) -> Self {
        Self {
            total_stars: pinned.iter().map(|p| u64::from(p.stars)).sum(),
            total_forks: pinned.iter().map(|p| u64::from(p.forks)).sum(),
            top_languages: top_languages(pinned, config.top_languages),
            top_repos: timeline.top_repos.iter().take(config.top_repos).cloned().collect(),
            created_repos: timeline.created_repos,
            created_repo_list: timeline.created_repo_list.clone(),
            issues_opened: timeline.issues_opened,
            pull_requests: timeline.pull_requests,
            pull_request_reviews: timeline.pull_request_reviews,
            merged_pull_requests: timeline.merged_pull_requests,
            achievements: achievements.iter().take(config.achievements).cloned().collect(),
            socials,
        }
    }
}

/// Most frequent pinned languages; ties keep first-seen order.
fn top_languages(pinned: &[PinnedProject], limit: usize) -> Vec<String> {
    let mut tally: Vec<(&str, u32)> = Vec::new();
    for project in pinned {
        let language = project.language.as_str();
        if language.is_empty() || language == UNKNOWN_LANGUAGE {
            continue;
        }
        match tally.iter_mut().find(|(name, _)| *name == language) {
            Some((_, count)) => *count += 1,
            None => tally.push((language, 1)),
        }
    }

    // Stable sort keeps first-seen order among equals
    tally.sort_by(|a, b| b.1.cmp(&a.1));
    tally
        .into_iter()
        .take(limit)
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Sorted days on or before `today`.
pub fn past_and_present(days: &[ContributionDay], today: NaiveDate) -> Vec<ContributionDay> {
    let mut filtered: Vec<ContributionDay> =
        days.iter().filter(|d| d.date <= today).copied().collect();
    filtered.sort_by_key(|d| d.date);
    filtered
}

/// Contributions this year when the calendar covers it, else the whole calendar.
fn total_contributions(days: &[ContributionDay], today: NaiveDate, is_ytd: bool) -> u64 {
    let ytd_start = year_start(today);
    let sum = |pred: &dyn Fn(&ContributionDay) -> bool| -> u64 {
        days.iter().filter(|d| pred(d)).map(|d| u64::from(d.count)).sum()
    };

    if is_ytd && days.iter().any(|d| d.date >= ytd_start) {
        sum(&|d| d.date >= ytd_start)
    } else {
        sum(&|_| true)
    }
}

/// Analyze one snapshot as of `today`.
///
/// Pure and deterministic: the same snapshot, day and config always give the
/// same statistics.
pub fn generate_report(
    snapshot: &ProfileSnapshot,
    today: NaiveDate,
    config: &AnalyticsConfig,
) -> ProfileStats {
    let days = snapshot.series();
    analyze_series(&days, snapshot, today, config)
}

/// Analyze an already-built day series alongside the snapshot's other fragments.
pub fn analyze_series(
    days: &[ContributionDay],
    snapshot: &ProfileSnapshot,
    today: NaiveDate,
    config: &AnalyticsConfig,
) -> ProfileStats {
    let past = past_and_present(days, today);

    // Thresholds and percentiles see the whole calendar, future days included
    let thresholds = calculate_thresholds(days);
    let percentiles = calculate_percentiles(days, &config.percentile_markers);
    let intensities: BTreeMap<NaiveDate, u8> = days
        .iter()
        .filter(|d| d.is_active())
        .map(|d| (d.date, intensity_level(d.count, &percentiles)))
        .collect();

    let activity = summarize_activity(&past, today);
    let weekdays = weekday_patterns(&past, config.island_min_level);
    let streaks = calculate_streaks(&past, today);

    let island = find_largest_island(&past, today, |d| d.level >= config.island_min_level);
    let slump_island =
        find_largest_island(&past, today, |d| d.count <= config.slump_island_max_count);

    let month = best_month(&past);
    let week = best_week(&past);

    tracing::debug!(
        thresholds = thresholds.len(),
        active_days = intensities.len(),
        longest_streak = streaks.longest_streak,
        island = island.size,
        slump_island = slump_island.size,
        "Calendar analyzed"
    );

    let profile = ProfileTotals::collect(
        &snapshot.pinned,
        &snapshot.timeline,
        &snapshot.achievements,
        snapshot.socials,
        config,
    );

    let persona = PersonaProfile {
        weekend_volume_share: activity.weekend_volume_share,
        consistency: (activity.consistency_basis.whole > 0).then_some(activity.consistency),
        velocity: activity.velocity,
        weekend_score: activity.weekend_score,
        total_stars: profile.total_stars,
    }
    .classify();

    let current_weekday = ContributionDay::new(today, 0, 0).weekday_index();
    let today_count = days
        .iter()
        .find(|d| d.date == today)
        .map(|d| d.count)
        .unwrap_or(0);

    let level = LevelProgress::from_xp(total_xp(&past, snapshot.timeline.pull_request_reviews));
    let combo_inputs = ComboInputs {
        today_count,
        current_streak: streaks.current_streak,
        velocity: activity.velocity,
        actions: snapshot.timeline.today_actions,
    };
    let combo = calculate_combo(&combo_inputs);

    tracing::info!(
        days = past.len(),
        persona = persona.name(),
        level = level.level,
        combo = combo.multiplier,
        "Profile analyzed"
    );

    ProfileStats {
        today,
        thresholds,
        percentiles,
        intensities,
        total_contributions: total_contributions(days, today, activity.is_ytd),
        today_count,
        current_weekday,
        current_weekday_total: weekdays.totals[current_weekday],
        activity,
        weekdays,
        streaks,
        island,
        slump_island,
        best_month: month,
        best_week: week,
        persona,
        level,
        combo_breakdown: combo.breakdown(&combo_inputs),
        combo,
        profile,
    }
}
