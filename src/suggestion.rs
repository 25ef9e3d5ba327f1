//! Suggestion value types
//!
//! A [`LocationSuggestion`] is one candidate location the user may pick
//! from the autocomplete dropdown: a preset airport or railway station,
//! a hotel name from the hotel search, or a street address from the
//! places autocomplete.

use serde::Serialize;

/// Category of a location suggestion
///
/// Serialized to the wire names the booking frontend expects:
/// `airport`, `train-station`, `hotel`, `generic-address`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionCategory {
    Airport,
    TrainStation,
    Hotel,
    GenericAddress,
}

impl SuggestionCategory {
    /// Get the display label for this category
    pub fn label(&self) -> &'static str {
        match self {
            SuggestionCategory::Airport => "[airport]",
            SuggestionCategory::TrainStation => "[station]",
            SuggestionCategory::Hotel => "[hotel]",
            SuggestionCategory::GenericAddress => "[address]",
        }
    }
}

/// One candidate location a user may select
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationSuggestion {
    /// Unique within a single suggestion batch; not globally stable
    pub id: String,
    /// Full display string for the location
    pub address: String,
    pub category: SuggestionCategory,
    /// Optional short label shown under the address
    pub description: Option<String>,
}

impl LocationSuggestion {
    pub fn new(
        id: impl Into<String>,
        address: impl Into<String>,
        category: SuggestionCategory,
        description: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            address: address.into(),
            category,
            description,
        }
    }

    /// Single-line rendering used by the CLI's plain output mode
    pub fn display_line(&self) -> String {
        match &self.description {
            Some(desc) => format!("{} {} ({})", self.category.label(), self.address, desc),
            None => format!("{} {}", self.category.label(), self.address),
        }
    }
}

#[cfg(test)]
#[path = "suggestion_tests.rs"]
mod suggestion_tests;
