//! Persona classification
//!
//! Assigns a "developer persona" from activity ratios and pinned-project
//! popularity. Rules are checked in a fixed priority order and the first
//! match wins.

use serde::{Serialize, Serializer};

/// Developer persona archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persona {
    /// Over 40% of contributions land on weekends
    WeekendWarrior,
    /// Active on fewer than 20% of days
    BurstDeveloper,
    /// More than 15 contributions per active day
    HighVolumeArchitect,
    /// Active on more than 80% of weekend days
    UnstoppableForce,
    /// Pinned projects hold more than 100 stars
    PopularMaintainer,
    /// None of the above
    ConsistentCoder,
}

impl Persona {
    /// Get the display name for this persona.
    pub fn name(&self) -> &'static str {
        match self {
            Persona::WeekendWarrior => "Weekend Warrior",
            Persona::BurstDeveloper => "Burst Developer",
            Persona::HighVolumeArchitect => "High-Volume Architect",
            Persona::UnstoppableForce => "Unstoppable Force",
            Persona::PopularMaintainer => "Popular Maintainer",
            Persona::ConsistentCoder => "Consistent Coder",
        }
    }

    /// Get the tagline for this persona.
    pub fn tagline(&self) -> &'static str {
        match self {
            Persona::WeekendWarrior => "Saturdays are for shipping",
            Persona::BurstDeveloper => "Long quiet spells, then a flood",
            Persona::HighVolumeArchitect => "Every active day is a big one",
            Persona::UnstoppableForce => "Weekends are just more weekdays",
            Persona::PopularMaintainer => "People star what you build",
            Persona::ConsistentCoder => "Steady wins the race",
        }
    }

    /// Get an emoji for this persona.
    pub fn emoji(&self) -> &'static str {
        match self {
            Persona::WeekendWarrior => "⚔️",
            Persona::BurstDeveloper => "💥",
            Persona::HighVolumeArchitect => "🏗️",
            Persona::UnstoppableForce => "🚀",
            Persona::PopularMaintainer => "⭐",
            Persona::ConsistentCoder => "🧱",
        }
    }
}

impl Serialize for Persona {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Inputs for persona classification.
#[derive(Debug, Clone, Default)]
pub struct PersonaProfile {
    /// Weekend contributions / all contributions (0-1)
    pub weekend_volume_share: f64,
    /// Active days percentage, as displayed (one decimal); `None` when
    /// there were no days to measure
    pub consistency: Option<f64>,
    /// Contributions per active day, as displayed (one decimal)
    pub velocity: f64,
    /// Active weekend days percentage
    pub weekend_score: u32,
    /// Stars across pinned projects
    pub total_stars: u64,
}

impl PersonaProfile {
    /// Classify the persona. Order matters: earlier rules shadow later ones.
    pub fn classify(&self) -> Persona {
        if self.weekend_volume_share > 0.4 {
            Persona::WeekendWarrior
        } else if self.consistency.is_some_and(|c| c < 20.0) {
            Persona::BurstDeveloper
        } else if self.velocity > 15.0 {
            Persona::HighVolumeArchitect
        } else if self.weekend_score > 80 {
            Persona::UnstoppableForce
        } else if self.total_stars > 100 {
            Persona::PopularMaintainer
        } else {
            Persona::ConsistentCoder
        }
    }
}
