//! githeat - contribution calendar stats CLI
//!
//! Reads a scraped profile snapshot and prints streaks, islands, best
//! periods, level and persona.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use githeat_core::analytics::{generate_report, ProfileStats};
use githeat_core::format::{compact_count, day_name, fixed1, plural};
use githeat_core::{Config, ProfileSnapshot};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "githeat")]
#[command(about = "GitHeat - stats for your contribution calendar")]
#[command(version)]
struct Args {
    /// Profile snapshot JSON file ("-" reads stdin)
    #[arg(long)]
    input: PathBuf,

    /// Day to treat as today (format: YYYY-MM-DD, default: local date)
    #[arg(long)]
    today: Option<String>,

    /// Disable fun mode (no persona, no combo)
    #[arg(long)]
    serious: bool,

    /// Export format (md = markdown, json = JSON)
    #[arg(long)]
    export: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load().context("failed to load configuration")?;
    let _log_guard = githeat_core::logging::init(&config.logging).ok();

    let today = match &args.today {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("Invalid date: {}. Use YYYY-MM-DD", s))?,
        None => Local::now().date_naive(),
    };

    let snapshot = if args.input.as_os_str() == "-" {
        ProfileSnapshot::from_reader(io::stdin().lock())
    } else {
        ProfileSnapshot::load_from(&args.input)
    }
    .with_context(|| format!("failed to read snapshot {}", args.input.display()))?;

    tracing::info!(input = %args.input.display(), %today, "Generating report");
    let stats = generate_report(&snapshot, today, &config.analytics);

    match args.export.as_deref() {
        Some("json") => print_json(&stats, !args.serious)?,
        Some("md") => print_markdown(&stats, !args.serious),
        Some(other) => anyhow::bail!("Unknown export format: {}. Use 'md' or 'json'", other),
        None => print_terminal(&stats, !args.serious),
    }

    Ok(())
}

fn has_activity(stats: &ProfileStats) -> bool {
    stats.activity.consistency_basis.whole > 0
}

fn date_range(range: Option<(NaiveDate, NaiveDate)>) -> String {
    match range {
        Some((start, end)) => format!(" ({} - {})", start.format("%b %d"), end.format("%b %d")),
        None => String::new(),
    }
}

fn period_label(stats: &ProfileStats) -> &'static str {
    if stats.activity.is_ytd {
        "this year"
    } else {
        "in the calendar"
    }
}

fn print_terminal(stats: &ProfileStats, fun_mode: bool) {
    let title = if fun_mode {
        "🔥 YOUR CONTRIBUTION HEAT 🔥".to_string()
    } else {
        format!("Contribution Summary: {}", stats.today)
    };

    // Header
    println!();
    println!("╭{}╮", "─".repeat(60));
    println!("│{:^60}│", title);
    println!("╰{}╯", "─".repeat(60));
    println!();

    if !has_activity(stats) {
        println!("  No contribution days found in this snapshot.");
        println!();
        return;
    }

    let activity = &stats.activity;

    // The Numbers
    if fun_mode {
        println!("📊 THE NUMBERS");
    } else {
        println!("SUMMARY");
    }
    println!(
        "   Contributions: {:<9} ({})",
        compact_count(stats.total_contributions),
        period_label(stats)
    );
    println!(
        "   Velocity:      {:<9} per active day",
        fixed1(activity.velocity)
    );
    println!(
        "   Consistency:   {:<9} {} of {} days",
        format!("{}%", fixed1(activity.consistency)),
        activity.consistency_basis.part,
        activity.consistency_basis.whole
    );
    println!(
        "   Weekends:      {:<9} {} of {} weekend days",
        format!("{}%", activity.weekend_score),
        activity.weekend_basis.part,
        activity.weekend_basis.whole
    );
    println!("   Today:         {}", stats.today_count);
    println!();

    // Streaks
    if fun_mode {
        println!("🔥 STREAKS");
    } else {
        println!("STREAKS");
    }
    let streaks = &stats.streaks;
    println!(
        "   Current:  {}",
        plural(u64::from(streaks.current_streak), "day")
    );
    println!(
        "   Longest:  {}{}",
        plural(u64::from(streaks.longest_streak), "day"),
        date_range(streaks.longest_streak_range())
    );
    println!(
        "   Slump:    {}{}",
        plural(u64::from(streaks.longest_slump), "day"),
        date_range(streaks.longest_slump_range())
    );
    println!();

    // Best periods and islands
    if fun_mode {
        println!("🏆 HIGHLIGHTS");
    } else {
        println!("HIGHLIGHTS");
    }
    if let Some(month) = &stats.best_month {
        println!(
            "   Best month:  {} - {} contributions, {}% active",
            month.label,
            month.count,
            fixed1(month.consistency)
        );
    }
    if let Some(week) = &stats.best_week {
        println!(
            "   Best week:   {} - {} contributions, {} streak",
            week.label,
            week.count,
            plural(u64::from(week.streak), "day")
        );
    }
    println!(
        "   Heat island: {}{}",
        plural(u64::from(stats.island.size), "cell"),
        date_range(stats.island.start.zip(stats.island.end))
    );
    println!(
        "   Cold island: {}{}",
        plural(u64::from(stats.slump_island.size), "cell"),
        date_range(stats.slump_island.start.zip(stats.slump_island.end))
    );
    println!();

    // Weekdays
    if fun_mode {
        println!("📅 WEEKDAYS");
    } else {
        println!("WEEKDAYS");
    }
    let weekdays = &stats.weekdays;
    println!("   Busiest day:  {}", day_name(weekdays.best_day));
    println!(
        "   Power day:    {} ({} per day)",
        day_name(weekdays.power_day),
        fixed1(weekdays.power_day_average)
    );
    println!("   Quietest day: {}", day_name(weekdays.worst_day));
    if let Some(date) = weekdays.most_active_date {
        println!(
            "   Biggest day:  {} ({} contributions)",
            date.format("%b %d, %Y"),
            weekdays.most_active_count
        );
    }
    println!();

    // Level
    let level = &stats.level;
    if fun_mode {
        println!("⚔️ LEVEL {} - {}", level.level, level.title);
    } else {
        println!("LEVEL {}", level.level);
    }
    println!(
        "   XP:       {} ({} of {} into this level, {}%)",
        level.total_xp, level.xp_into_level, level.xp_for_level, level.progress_percent
    );
    println!("   Next:     {} XP to go", level.xp_to_next);
    println!();

    // Combo (fun mode only)
    if fun_mode {
        let combo = &stats.combo;
        println!("💥 TODAY'S COMBO: x{} ({})", combo.multiplier, combo.reason.name());
        println!("   {}", stats.combo_breakdown);
        println!();
    }

    // Profile
    let profile = &stats.profile;
    if fun_mode {
        println!("⭐ PROFILE");
    } else {
        println!("PROFILE");
    }
    println!(
        "   Stars: {:<8} Forks: {}",
        compact_count(profile.total_stars),
        compact_count(profile.total_forks)
    );
    if !profile.top_languages.is_empty() {
        println!("   Languages: {}", profile.top_languages.join(", "));
    }
    for repo in &profile.top_repos {
        println!("   {} - {} commits", repo.name, repo.commits);
    }
    println!(
        "   Issues: {}  PRs: {} ({} merged)  Reviews: {}",
        profile.issues_opened,
        profile.pull_requests,
        profile.merged_pull_requests,
        profile.pull_request_reviews
    );
    println!(
        "   Followers: {}  Following: {}  Orgs: {}",
        profile.socials.followers, profile.socials.following, profile.socials.organizations
    );
    if !profile.achievements.is_empty() {
        println!("   Achievements: {}", profile.achievements.join(", "));
    }
    println!();

    // Persona (fun mode only)
    if fun_mode {
        println!("🎭 YOUR PERSONA: {}", stats.persona.name());
        println!("   \"{}\"", stats.persona.tagline());
        println!();
    }
}

fn print_markdown(stats: &ProfileStats, fun_mode: bool) {
    let title = if fun_mode {
        "🔥 Contribution Heat 🔥".to_string()
    } else {
        format!("Contribution Summary: {}", stats.today)
    };

    println!("# {}", title);
    println!();

    if !has_activity(stats) {
        println!("*No contribution days found in this snapshot.*");
        return;
    }

    let activity = &stats.activity;

    // Summary table
    println!("## Summary");
    println!();
    println!("| Metric | Value |");
    println!("|--------|-------|");
    println!(
        "| Contributions ({}) | {} |",
        period_label(stats),
        stats.total_contributions
    );
    println!("| Velocity | {} |", fixed1(activity.velocity));
    println!("| Consistency | {}% |", fixed1(activity.consistency));
    println!("| Weekend Score | {}% |", activity.weekend_score);
    println!("| Today | {} |", stats.today_count);
    println!();

    // Streaks
    let streaks = &stats.streaks;
    println!("## Streaks");
    println!();
    println!("- **Current streak:** {} days", streaks.current_streak);
    println!(
        "- **Longest streak:** {} days{}",
        streaks.longest_streak,
        date_range(streaks.longest_streak_range())
    );
    println!(
        "- **Longest slump:** {} days{}",
        streaks.longest_slump,
        date_range(streaks.longest_slump_range())
    );
    println!();

    // Highlights
    println!("## Highlights");
    println!();
    if let Some(month) = &stats.best_month {
        println!(
            "- **Best month:** {} ({} contributions, score {})",
            month.label, month.count, month.score
        );
    }
    if let Some(week) = &stats.best_week {
        println!(
            "- **Best week:** {} ({} contributions, score {})",
            week.label, week.count, week.score
        );
    }
    println!("- **Heat island:** {} cells", stats.island.size);
    println!("- **Cold island:** {} cells", stats.slump_island.size);
    println!(
        "- **Busiest day:** {}",
        day_name(stats.weekdays.best_day)
    );
    println!(
        "- **Power day:** {} ({} per day)",
        day_name(stats.weekdays.power_day),
        fixed1(stats.weekdays.power_day_average)
    );
    println!();

    // Level
    let level = &stats.level;
    println!("## Level");
    println!();
    if fun_mode {
        println!("**Level {}: {}**", level.level, level.title);
    } else {
        println!("**Level {}**", level.level);
    }
    println!();
    println!(
        "{} XP, {} to the next level ({}%)",
        level.total_xp, level.xp_to_next, level.progress_percent
    );
    println!();

    // Profile
    let profile = &stats.profile;
    println!("## Profile");
    println!();
    println!("| Metric | Value |");
    println!("|--------|-------|");
    println!("| Stars | {} |", profile.total_stars);
    println!("| Forks | {} |", profile.total_forks);
    if !profile.top_languages.is_empty() {
        println!("| Languages | {} |", profile.top_languages.join(", "));
    }
    println!("| Issues | {} |", profile.issues_opened);
    println!("| Pull Requests | {} |", profile.pull_requests);
    println!("| Reviews | {} |", profile.pull_request_reviews);
    println!("| Followers | {} |", profile.socials.followers);
    println!();

    if fun_mode {
        println!("## Today's Combo");
        println!();
        println!(
            "**x{}** - {}",
            stats.combo.multiplier,
            stats.combo.reason.name()
        );
        println!();
        println!("## Your Persona");
        println!();
        println!("{} **{}**", stats.persona.emoji(), stats.persona.name());
        println!();
        println!("*\"{}\"*", stats.persona.tagline());
        println!();
    }

    println!("---");
    println!("*Generated by githeat*");
}

fn print_json(stats: &ProfileStats, fun_mode: bool) -> Result<()> {
    let mut json = serde_json::to_value(stats)?;
    if !fun_mode {
        if let Some(object) = json.as_object_mut() {
            object.remove("persona");
            object.remove("combo");
            object.remove("combo_breakdown");
        }
    }

    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
