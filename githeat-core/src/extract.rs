//! Day-count extraction
//!
//! A scraped calendar cell carries its count in one of several places
//! depending on how the page was rendered. Each place is read by a
//! [`CountStrategy`]; a [`DayCountExtractor`] tries them in order and turns
//! raw [`CalendarCell`]s into [`ContributionDay`]s.
//!
//! ## Strategy order
//!
//! | Order | Strategy | Consulted when |
//! |-------|----------|----------------|
//! | 1 | [`TooltipText`] | always |
//! | 2 | [`AriaLabel`] | count still 0 and level > 0 |
//! | 3 | [`TitleAttribute`] | count still 0, level > 0, no aria-label |

use crate::types::ContributionDay;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A raw calendar cell as captured from the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCell {
    pub date: NaiveDate,
    #[serde(default)]
    pub level: u8,
    /// Element id, which the page's tooltip points back to
    #[serde(default)]
    pub id: Option<String>,
    /// Text of the tooltip bound to the cell
    #[serde(default)]
    pub tooltip: Option<String>,
    #[serde(default)]
    pub aria_label: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// One place a day's count can be read from.
pub trait CountStrategy: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Read the count, or `None` if this source is absent on the cell.
    fn extract(&self, cell: &CalendarCell) -> Option<u32>;
}

/// Reads the tooltip text ("5 contributions on March 3rd.").
pub struct TooltipText;

/// Reads the `aria-label` attribute.
pub struct AriaLabel;

/// Reads the `title` attribute.
pub struct TitleAttribute;

fn non_empty(text: &Option<String>) -> Option<&str> {
    text.as_deref().filter(|t| !t.trim().is_empty())
}

impl CountStrategy for TooltipText {
    fn name(&self) -> &'static str {
        "tooltip"
    }

    fn extract(&self, cell: &CalendarCell) -> Option<u32> {
        non_empty(&cell.tooltip).map(parse_count_text)
    }
}

impl CountStrategy for AriaLabel {
    fn name(&self) -> &'static str {
        "aria-label"
    }

    fn extract(&self, cell: &CalendarCell) -> Option<u32> {
        non_empty(&cell.aria_label).map(parse_count_text)
    }
}

impl CountStrategy for TitleAttribute {
    fn name(&self) -> &'static str {
        "title"
    }

    fn extract(&self, cell: &CalendarCell) -> Option<u32> {
        non_empty(&cell.title).map(parse_count_text)
    }
}

/// Parse a count out of free text.
///
/// "No contributions" reads as 0; otherwise the first number wins, with
/// thousands separators ignored. Text without digits reads as 0.
pub fn parse_count_text(text: &str) -> u32 {
    if text.is_empty() || text.to_lowercase().contains("no contribution") {
        return 0;
    }

    let Some(start) = text.find(|c: char| c.is_ascii_digit()) else {
        return 0;
    };

    let digits: String = text[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ',')
        .filter(|c| c.is_ascii_digit())
        .collect();

    digits.parse().unwrap_or(u32::MAX)
}

/// Ordered chain of count strategies.
pub struct DayCountExtractor {
    strategies: Vec<Box<dyn CountStrategy>>,
}

impl Default for DayCountExtractor {
    fn default() -> Self {
        Self::new(vec![
            Box::new(TooltipText),
            Box::new(AriaLabel),
            Box::new(TitleAttribute),
        ])
    }
}

impl DayCountExtractor {
    /// Build an extractor from strategies; the first is the primary source.
    pub fn new(strategies: Vec<Box<dyn CountStrategy>>) -> Self {
        Self { strategies }
    }

    /// Names of the configured strategies, in order.
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Resolve the count for one cell.
    ///
    /// Fallback strategies are only consulted for shaded cells (level > 0)
    /// whose primary count came back 0. The first fallback that is present
    /// decides, even when it reads 0.
    pub fn count_for(&self, cell: &CalendarCell) -> u32 {
        let mut count = 0;
        for (i, strategy) in self.strategies.iter().enumerate() {
            if i > 0 && (count > 0 || cell.level == 0) {
                break;
            }
            if let Some(found) = strategy.extract(cell) {
                count = found;
                if i > 0 {
                    tracing::trace!(
                        date = %cell.date,
                        strategy = strategy.name(),
                        count,
                        "Fallback count"
                    );
                    break;
                }
            }
        }
        count
    }

    /// Convert raw cells into a day series, preserving input order.
    pub fn build_series(&self, cells: &[CalendarCell]) -> Vec<ContributionDay> {
        cells
            .iter()
            .map(|cell| {
                ContributionDay::new(cell.date, cell.level.min(4), self.count_for(cell))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(level: u8) -> CalendarCell {
        CalendarCell {
            date: "2024-05-01".parse().unwrap(),
            level,
            id: None,
            tooltip: None,
            aria_label: None,
            title: None,
        }
    }

    #[test]
    fn test_parse_count_text() {
        assert_eq!(parse_count_text(""), 0);
        assert_eq!(parse_count_text("No contributions on May 1st."), 0);
        assert_eq!(parse_count_text("5 contributions on May 1st."), 5);
        assert_eq!(parse_count_text("1,234 contributions on May 1st."), 1234);
        assert_eq!(parse_count_text("contributions"), 0);
    }

    #[test]
    fn test_tooltip_is_primary() {
        let extractor = DayCountExtractor::default();
        let c = CalendarCell {
            tooltip: Some("7 contributions".into()),
            aria_label: Some("3 contributions".into()),
            ..cell(2)
        };
        assert_eq!(extractor.count_for(&c), 7);
    }

    #[test]
    fn test_fallback_only_for_shaded_cells() {
        let extractor = DayCountExtractor::default();

        let unshaded = CalendarCell {
            aria_label: Some("3 contributions".into()),
            ..cell(0)
        };
        assert_eq!(extractor.count_for(&unshaded), 0);

        let shaded = CalendarCell {
            tooltip: Some("No contributions".into()),
            aria_label: Some("3 contributions".into()),
            ..cell(1)
        };
        assert_eq!(extractor.count_for(&shaded), 3);
    }

    #[test]
    fn test_title_used_when_aria_absent() {
        let extractor = DayCountExtractor::default();
        let c = CalendarCell {
            title: Some("9 contributions".into()),
            ..cell(3)
        };
        assert_eq!(extractor.count_for(&c), 9);

        // A present aria-label decides even when it reads zero
        let c = CalendarCell {
            aria_label: Some("unknown".into()),
            title: Some("9 contributions".into()),
            ..cell(3)
        };
        assert_eq!(extractor.count_for(&c), 0);
    }

    #[test]
    fn test_build_series() {
        let extractor = DayCountExtractor::default();
        assert_eq!(
            extractor.strategy_names(),
            vec!["tooltip", "aria-label", "title"]
        );
        let cells = vec![CalendarCell {
            tooltip: Some("2 contributions".into()),
            ..cell(1)
        }];
        let series = extractor.build_series(&cells);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].count, 2);
        assert_eq!(series[0].level, 1);
    }
}
