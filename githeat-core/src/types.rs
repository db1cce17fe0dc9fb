//! Core domain types for githeat
//!
//! These types are the clean input handed to the analytics engine once a
//! profile page has been scraped.
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Day** | One cell of the yearly calendar: a date, a coarse level and a count |
//! | **Active day** | A day with `count > 0` |
//! | **Level** | The source's own 0-4 shading bucket for a day |
//! | **Timeline** | The recent-activity feed next to the calendar |
//! | **Pinned project** | A repository pinned on the profile |

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

// ============================================
// Calendar
// ============================================

/// One day of the contribution calendar.
///
/// Dates are unique within a series. Series may arrive unsorted; consumers
/// order them by date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionDay {
    /// Local calendar date
    pub date: NaiveDate,
    /// Source shading level (0-4)
    #[serde(default)]
    pub level: u8,
    /// Contributions on that day
    #[serde(default)]
    pub count: u32,
}

impl ContributionDay {
    pub fn new(date: NaiveDate, level: u8, count: u32) -> Self {
        Self { date, level, count }
    }

    /// Whether any contribution happened on this day.
    pub fn is_active(&self) -> bool {
        self.count > 0
    }

    /// Day of week, 0 = Sunday.
    pub fn weekday_index(&self) -> usize {
        self.date.weekday().num_days_from_sunday() as usize
    }

    /// Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday_index(), 0 | 6)
    }
}

// ============================================
// Profile fragments
// ============================================

/// A repository pinned on the profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinnedProject {
    pub name: String,
    pub stars: u32,
    pub forks: u32,
    /// Primary language, "Unknown" when the page shows none
    pub language: String,
    pub language_color: String,
}

/// Commits pushed to one repository in the timeline window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepoActivity {
    pub name: String,
    pub commits: u32,
}

/// A repository created in the timeline window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatedRepo {
    pub name: String,
    pub language: String,
}

/// Follower/following/org counts from the profile sidebar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialStats {
    pub followers: u32,
    pub following: u32,
    pub organizations: u32,
}

/// Breakdown of actions recorded for today in the timeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodayActions {
    pub commits: u32,
    pub repos: u32,
    pub issues: u32,
    pub prs: u32,
    pub reviews: u32,
}

impl TodayActions {
    /// Number of distinct kinds of work done today.
    ///
    /// Created repositories are not a kind of their own here.
    pub fn distinct_kinds(&self) -> usize {
        [self.commits, self.issues, self.prs, self.reviews]
            .iter()
            .filter(|&&n| n > 0)
            .count()
    }
}

/// Aggregates parsed from the activity timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineActivity {
    /// Repositories sorted by commit count, descending
    pub top_repos: Vec<RepoActivity>,
    pub created_repos: u32,
    pub created_repo_list: Vec<CreatedRepo>,
    pub issues_opened: u32,
    pub pull_requests: u32,
    pub pull_request_reviews: u32,
    pub merged_pull_requests: u32,
    pub today_actions: TodayActions,
}
