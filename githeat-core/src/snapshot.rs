//! Profile snapshots
//!
//! A snapshot is the JSON document a scraper hands over: the calendar (either
//! as clean days or as raw cells) plus whatever profile fragments it found.
//! Every fragment is optional.

use crate::error::{Error, Result};
use crate::extract::{CalendarCell, DayCountExtractor};
use crate::types::{ContributionDay, PinnedProject, SocialStats, TimelineActivity};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

/// Everything scraped from one profile page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSnapshot {
    /// Clean day series
    pub days: Vec<ContributionDay>,
    /// Raw calendar cells, used when `days` is not supplied
    pub cells: Vec<CalendarCell>,
    pub pinned: Vec<PinnedProject>,
    pub timeline: TimelineActivity,
    /// Achievement badge labels
    pub achievements: Vec<String>,
    pub socials: SocialStats,
}

impl ProfileSnapshot {
    /// Load a snapshot from a JSON file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Read a snapshot from any JSON source (e.g. stdin).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let snapshot: ProfileSnapshot = serde_json::from_reader(reader)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Parse a snapshot from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let snapshot: ProfileSnapshot = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Check structural invariants: one calendar source, unique dates.
    pub fn validate(&self) -> Result<()> {
        if !self.days.is_empty() && !self.cells.is_empty() {
            return Err(Error::InvalidSnapshot(
                "supply either days or cells, not both".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        let dates = self
            .days
            .iter()
            .map(|d| d.date)
            .chain(self.cells.iter().map(|c| c.date));
        for date in dates {
            if !seen.insert(date) {
                return Err(Error::InvalidSnapshot(format!("duplicate date {}", date)));
            }
        }
        Ok(())
    }

    /// The day series, extracting counts from raw cells when needed.
    pub fn series(&self) -> Vec<ContributionDay> {
        if self.cells.is_empty() {
            self.days
                .iter()
                .map(|d| ContributionDay {
                    level: d.level.min(4),
                    ..*d
                })
                .collect()
        } else {
            DayCountExtractor::default().build_series(&self.cells)
        }
    }
}
