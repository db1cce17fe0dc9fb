//! # githeat-core
//!
//! Core library for githeat - contribution calendar analytics.
//!
//! This library provides:
//! - Domain types for calendar days and profile fragments
//! - Snapshot loading, including count extraction from raw calendar cells
//! - Pure analytics over a day series (streaks, islands, best periods,
//!   persona, levels and combos)
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Example
//!
//! ```rust,no_run
//! use githeat_core::analytics::generate_report;
//! use githeat_core::{Config, ProfileSnapshot};
//!
//! let config = Config::load().expect("failed to load config");
//! let snapshot = ProfileSnapshot::load_from("profile.json".as_ref()).expect("bad snapshot");
//! let today = chrono::Local::now().date_naive();
//!
//! let stats = generate_report(&snapshot, today, &config.analytics);
//! println!("{} day streak", stats.streaks.current_streak);
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use error::{Error, Result};
pub use snapshot::ProfileSnapshot;
pub use types::*;

// Public modules
pub mod analytics;
pub mod config;
pub mod error;
pub mod extract;
pub mod format;
pub mod logging;
pub mod snapshot;
pub mod types;
