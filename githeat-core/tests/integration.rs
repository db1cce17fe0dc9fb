//! Integration tests for githeat snapshot loading and analytics
//!
//! These tests use fixture files in `tests/fixtures/` to verify the
//! end-to-end flow from a JSON snapshot to the finished report.

use chrono::NaiveDate;
use githeat_core::analytics::{generate_report, ComboReason, LevelRange, Persona};
use githeat_core::config::AnalyticsConfig;
use githeat_core::{Error, ProfileSnapshot};
use std::path::PathBuf;

/// Get the path to a fixture file
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn load(name: &str) -> ProfileSnapshot {
    ProfileSnapshot::load_from(&fixture_path(name)).expect("fixture should load")
}

fn d(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

// ============================================
// Calendar Scenarios
// ============================================

#[test]
fn test_single_zero_day() {
    let snapshot = load("single-zero-day.json");
    let stats = generate_report(&snapshot, d("2024-01-01"), &AnalyticsConfig::default());

    assert!(stats.thresholds.is_empty());
    assert!(stats.percentiles.is_empty());
    assert!(stats.intensities.is_empty());
    assert_eq!(stats.streaks.current_streak, 0);
    assert_eq!(stats.streaks.longest_streak, 0);
    assert_eq!(stats.streaks.longest_slump, 1);
    assert_eq!(stats.slump_island.size, 1);
}

#[test]
fn test_steady_ten_days() {
    let snapshot = load("steady-ten-days.json");
    let stats = generate_report(&snapshot, d("2024-03-10"), &AnalyticsConfig::default());

    assert_eq!(stats.thresholds.len(), 1);
    assert_eq!(stats.thresholds[&2], LevelRange { min: 3, max: 3 });
    assert_eq!(stats.percentiles[&50], 3);
    assert_eq!(stats.streaks.longest_streak, 10);
    assert_eq!(stats.streaks.current_streak, 10);
    assert_eq!(stats.island.size, 10);
    assert_eq!(stats.island.start, Some(d("2024-03-01")));
    assert_eq!(stats.island.end, Some(d("2024-03-10")));

    // Every day sits at the top of an all-equal distribution
    assert!(stats.intensities.values().all(|&shade| shade == 11));
}

// ============================================
// Full Profile
// ============================================

#[test]
fn test_full_profile_report() {
    githeat_core::logging::init_test();
    let snapshot = load("full-profile.json");
    let stats = generate_report(&snapshot, d("2024-03-10"), &AnalyticsConfig::default());

    // 9 active days out of 10, 18 contributions
    assert!(stats.activity.is_ytd);
    assert_eq!(stats.total_contributions, 18);
    assert_eq!(stats.activity.velocity, 2.0);
    assert_eq!(stats.activity.consistency, 90.0);
    assert_eq!(stats.activity.weekend_score, 100);
    assert_eq!(stats.today_count, 6);
    assert_eq!(stats.current_weekday, 0);
    assert_eq!(stats.current_weekday_total, 7);

    assert_eq!(stats.streaks.current_streak, 9);
    assert_eq!(stats.streaks.longest_streak, 9);
    assert_eq!(
        stats.streaks.longest_streak_range(),
        Some((d("2024-03-02"), d("2024-03-10")))
    );
    assert_eq!(stats.streaks.longest_slump, 1);

    // Level >= 2 runs from Mar 6 to Mar 10
    assert_eq!(stats.island.size, 5);
    assert_eq!(stats.island.start, Some(d("2024-03-06")));
    assert!(stats.island.contains(d("2024-03-08")));
    // Count <= 1 runs from Mar 1 to Mar 5
    assert_eq!(stats.slump_island.size, 5);

    let month = stats.best_month.as_ref().expect("best month");
    assert_eq!(month.key, "2024-03");
    assert_eq!(month.label, "March 2024");
    assert_eq!(month.score, 146);
    assert_eq!(month.streak, 9);

    let week = stats.best_week.as_ref().expect("best week");
    assert_eq!(week.key, "2024-03-03");
    assert_eq!(week.label, "Mar 3 - Mar 9");
    assert_eq!(week.score, 77);

    assert_eq!(stats.weekdays.best_day, 0);
    assert_eq!(stats.weekdays.most_active_date, Some(d("2024-03-10")));

    // 10 of 18 contributions landed on weekends
    assert_eq!(stats.persona, Persona::WeekendWarrior);

    // 20 from days + 5 reviews * 3
    assert_eq!(stats.level.total_xp, 35);
    assert_eq!(stats.level.level, 1);
    assert_eq!(stats.level.title, "Novice");

    // 6 today + streak 9/3 + 2 for beating velocity 2.0
    assert_eq!(stats.combo.score, 11);
    assert_eq!(stats.combo.multiplier, 5);
    assert_eq!(stats.combo.reason, ComboReason::CommitFrenzy);
    assert_eq!(stats.combo.next_threshold, Some(13));
    assert!(stats.combo_breakdown.starts_with("Score: 11"));
}

#[test]
fn test_profile_totals() {
    let snapshot = load("full-profile.json");
    let stats = generate_report(&snapshot, d("2024-03-10"), &AnalyticsConfig::default());
    let profile = &stats.profile;

    assert_eq!(profile.total_stars, 157);
    assert_eq!(profile.total_forks, 15);
    assert_eq!(profile.top_languages, vec!["Rust", "Go"]);
    assert_eq!(profile.top_repos.len(), 3);
    assert_eq!(profile.top_repos[0].name, "octo/heatwave");
    assert_eq!(profile.achievements.len(), 4);
    assert_eq!(profile.created_repos, 2);
    assert_eq!(profile.merged_pull_requests, 6);
    assert_eq!(profile.socials.followers, 42);
}

#[test]
fn test_earlier_today_ignores_later_days() {
    let snapshot = load("full-profile.json");
    let stats = generate_report(&snapshot, d("2024-03-05"), &AnalyticsConfig::default());

    assert_eq!(stats.streaks.longest_streak, 4);
    assert_eq!(stats.streaks.current_streak, 4);
    assert_eq!(stats.total_contributions, 18);
    assert_eq!(stats.activity.consistency_basis.whole, 5);
    // Islands never reach past today
    assert_eq!(stats.island.size, 0);
}

#[test]
fn test_config_changes_island_predicates() {
    let snapshot = load("full-profile.json");
    let config = AnalyticsConfig {
        island_min_level: 3,
        slump_island_max_count: 0,
        top_languages: 1,
        ..Default::default()
    };
    let stats = generate_report(&snapshot, d("2024-03-10"), &config);

    assert_eq!(stats.island.size, 1);
    assert_eq!(stats.slump_island.size, 1);
    assert_eq!(stats.slump_island.start, Some(d("2024-03-01")));
    assert_eq!(stats.profile.top_languages, vec!["Rust"]);
}

#[test]
fn test_report_is_deterministic() {
    let snapshot = load("full-profile.json");
    let config = AnalyticsConfig::default();
    let first = generate_report(&snapshot, d("2024-03-10"), &config);
    let second = generate_report(&snapshot, d("2024-03-10"), &config);
    assert_eq!(first, second);
}

#[test]
fn test_report_json_shape() {
    let snapshot = load("full-profile.json");
    let stats = generate_report(&snapshot, d("2024-03-10"), &AnalyticsConfig::default());
    let json = serde_json::to_value(&stats).unwrap();

    assert_eq!(json["persona"], "Weekend Warrior");
    assert_eq!(json["combo"]["reason"], "Commit Frenzy");
    assert_eq!(json["thresholds"]["3"]["max"], 6);
    assert_eq!(json["intensities"]["2024-03-10"], 11);
    assert_eq!(json["best_week"]["key"], "2024-03-03");
}

// ============================================
// Raw Cells
// ============================================

#[test]
fn test_raw_cells_are_extracted() {
    let snapshot = load("raw-cells.json");
    let counts: Vec<u32> = snapshot.series().iter().map(|d| d.count).collect();
    assert_eq!(counts, vec![0, 1, 1204, 7, 12, 0]);

    let stats = generate_report(&snapshot, d("2024-05-10"), &AnalyticsConfig::default());
    assert_eq!(stats.streaks.longest_streak, 4);
    // A quiet today does not break the current streak
    assert_eq!(stats.streaks.current_streak, 4);
    assert_eq!(stats.weekdays.most_active_count, 1204);
}

#[test]
fn test_invalid_snapshots_are_rejected() {
    let both = r#"{
        "days": [{"date": "2024-01-01", "level": 0, "count": 0}],
        "cells": [{"date": "2024-01-02", "level": 0}]
    }"#;
    assert!(matches!(
        ProfileSnapshot::from_json_str(both),
        Err(Error::InvalidSnapshot(_))
    ));

    assert!(matches!(
        ProfileSnapshot::from_json_str("{\"days\": 3}"),
        Err(Error::Json(_))
    ));

    assert!(matches!(
        ProfileSnapshot::load_from(&fixture_path("missing.json")),
        Err(Error::Io(_))
    ));
}
