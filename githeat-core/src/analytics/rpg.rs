//! Levels, XP and today's combo
//!
//! XP grows with every contribution, with a bonus for big days and for
//! reviewing others' pull requests. Levels follow a quadratic curve: level
//! `n` starts at `25 * n^2` XP.

use crate::types::{ContributionDay, TodayActions};
use serde::{Serialize, Serializer};

/// XP per level step: level `n` starts at `XP_CURVE * n^2`.
const XP_CURVE: u64 = 25;
/// Contributions per bonus group on a single day.
const BONUS_GROUP: u32 = 5;
/// Bonus XP per full group.
const BONUS_PER_GROUP: u64 = 2;
/// XP per pull request review.
const XP_PER_REVIEW: u64 = 3;

/// Score rungs for today's combo multiplier.
pub const COMBO_LADDER: [u32; 11] = [1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144];

/// Title per level; levels past the end keep the last title.
pub const LEVEL_TITLES: [&str; 13] = [
    "Ghost",
    "Novice",
    "Script Kiddie",
    "Code Monkey",
    "Byte Basher",
    "Repo Ranger",
    "Commit Commander",
    "Git Guru",
    "Merge Master",
    "Branch Baron",
    "Pull Request Prince",
    "Octocat Overlord",
    "Code God",
];

/// XP earned by a single day.
pub fn day_xp(count: u32) -> u64 {
    let base = u64::from(count);
    if count >= BONUS_GROUP {
        base + u64::from(count / BONUS_GROUP) * BONUS_PER_GROUP
    } else {
        base
    }
}

/// Total XP over the series plus the review bonus (counted once, not per day).
pub fn total_xp(days: &[ContributionDay], reviews: u32) -> u64 {
    days.iter().map(|d| day_xp(d.count)).sum::<u64>() + u64::from(reviews) * XP_PER_REVIEW
}

/// XP at which `level` starts.
pub fn level_threshold(level: u32) -> u64 {
    XP_CURVE * u64::from(level) * u64::from(level)
}

/// Level reached with `xp`: `floor(sqrt(xp / 25))`.
pub fn level_for_xp(xp: u64) -> u32 {
    let mut level = ((xp as f64) / XP_CURVE as f64).sqrt() as u32;
    // Correct any float rounding at exact level boundaries
    while level > 0 && level_threshold(level) > xp {
        level -= 1;
    }
    while level_threshold(level + 1) <= xp {
        level += 1;
    }
    level
}

/// Title for a level.
pub fn level_title(level: u32) -> &'static str {
    let index = (level as usize).min(LEVEL_TITLES.len() - 1);
    LEVEL_TITLES[index]
}

/// Where the profile sits on the level curve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelProgress {
    pub level: u32,
    pub title: &'static str,
    pub total_xp: u64,
    /// XP earned since the current level started
    pub xp_into_level: u64,
    /// XP between the current and next level
    pub xp_for_level: u64,
    /// XP still missing for the next level
    pub xp_to_next: u64,
    /// 0-100
    pub progress_percent: u32,
}

impl LevelProgress {
    pub fn from_xp(total_xp: u64) -> Self {
        let level = level_for_xp(total_xp);
        let current = level_threshold(level);
        let next = level_threshold(level + 1);
        let xp_into_level = total_xp - current;
        let xp_for_level = next - current;
        let percent = if xp_for_level == 0 {
            0.0
        } else {
            (xp_into_level as f64 / xp_for_level as f64 * 100.0).round()
        };

        Self {
            level,
            title: level_title(level),
            total_xp,
            xp_into_level,
            xp_for_level,
            xp_to_next: next - total_xp,
            progress_percent: percent.clamp(0.0, 100.0) as u32,
        }
    }
}

/// Why today's combo is what it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboReason {
    MultiTasker,
    GuardianOfCode,
    CommitFrenzy,
    ProblemSolver,
    Architect,
    ActivityStreak,
}

impl ComboReason {
    pub fn name(&self) -> &'static str {
        match self {
            ComboReason::MultiTasker => "Multi-Tasker",
            ComboReason::GuardianOfCode => "Guardian of Code",
            ComboReason::CommitFrenzy => "Commit Frenzy",
            ComboReason::ProblemSolver => "Problem Solver",
            ComboReason::Architect => "Architect",
            ComboReason::ActivityStreak => "Activity Streak",
        }
    }

    /// Pick the reason from today's action mix. First match wins.
    pub fn from_actions(actions: &TodayActions) -> Self {
        if actions.distinct_kinds() >= 3 {
            ComboReason::MultiTasker
        } else if actions.reviews >= 2 {
            ComboReason::GuardianOfCode
        } else if actions.commits >= 5 {
            ComboReason::CommitFrenzy
        } else if actions.prs >= 1 && actions.issues >= 1 {
            ComboReason::ProblemSolver
        } else if actions.repos >= 1 {
            ComboReason::Architect
        } else {
            ComboReason::ActivityStreak
        }
    }
}

impl Serialize for ComboReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Today's inputs to the combo.
#[derive(Debug, Clone, Default)]
pub struct ComboInputs {
    /// Today's count from the calendar
    pub today_count: u32,
    pub current_streak: u32,
    /// Contributions per active day, as displayed (one decimal)
    pub velocity: f64,
    pub actions: TodayActions,
}

/// Today's gamified multiplier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Combo {
    pub score: u32,
    /// Number of ladder rungs reached
    pub multiplier: u32,
    pub reason: ComboReason,
    /// Score needed for the next rung, absent past the top
    pub next_threshold: Option<u32>,
    pub streak_bonus: u32,
    pub velocity_bonus: u32,
}

impl Combo {
    /// Human-readable breakdown of the score.
    pub fn breakdown(&self, inputs: &ComboInputs) -> String {
        let next = self
            .next_threshold
            .map(|n| n.to_string())
            .unwrap_or_else(|| "??".to_string());
        format!(
            "Score: {} ((HeatmapCommits:{}) + (Reviews:{}*2) + (Repos:{}*3) + (StreakBonus:{}) + (VelocityBonus:{})). Next level at {} XP.",
            self.score,
            inputs.today_count,
            inputs.actions.reviews,
            inputs.actions.repos,
            self.streak_bonus,
            self.velocity_bonus,
            next
        )
    }
}

/// Number of ladder rungs at or below `score`.
pub fn combo_multiplier(score: u32) -> u32 {
    COMBO_LADDER.iter().take_while(|&&rung| rung <= score).count() as u32
}

/// Compute today's combo.
///
/// `score = today + reviews*2 + repos*3 + streak/3 + 2` where the final 2 is
/// only granted when today beats a non-zero velocity.
pub fn calculate_combo(inputs: &ComboInputs) -> Combo {
    let actions = &inputs.actions;
    let streak_bonus = inputs.current_streak / 3;
    let beats_velocity = inputs.velocity > 0.0 && f64::from(inputs.today_count) > inputs.velocity;
    let velocity_bonus = if beats_velocity { 2 } else { 0 };

    let score = inputs
        .today_count
        .saturating_add(actions.reviews.saturating_mul(2))
        .saturating_add(actions.repos.saturating_mul(3))
        .saturating_add(streak_bonus)
        .saturating_add(velocity_bonus);

    let multiplier = combo_multiplier(score);
    let reason = if multiplier >= 2 {
        ComboReason::from_actions(actions)
    } else {
        ComboReason::ActivityStreak
    };

    Combo {
        score,
        multiplier,
        reason,
        next_threshold: COMBO_LADDER.get(multiplier as usize).copied(),
        streak_bonus,
        velocity_bonus,
    }
}
