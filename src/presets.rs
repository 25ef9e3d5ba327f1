//! Preset locations
//!
//! Hardcoded airports and railway stations that should surface in the
//! dropdown without any network round-trip. Matching is deliberately
//! permissive: an entry matches when its text contains the query, or
//! when the query contains one of the entry's keywords ("airport",
//! "cdg", "gare", ...), so partial and intent-only queries still pull
//! up the relevant presets.

use crate::suggestion::{LocationSuggestion, SuggestionCategory};

/// Metadata for one preset location
#[derive(Debug, Clone)]
pub struct Preset {
    /// Stable id prefix for suggestions built from this entry
    pub id: &'static str,
    /// Full display address
    pub address: &'static str,
    /// Short label shown under the address
    pub description: &'static str,
    pub category: SuggestionCategory,
    /// Lowercase keywords; a query containing any of them matches
    pub keywords: &'static [&'static str],
}

impl Preset {
    pub const fn new(
        id: &'static str,
        address: &'static str,
        description: &'static str,
        category: SuggestionCategory,
        keywords: &'static [&'static str],
    ) -> Self {
        Self {
            id,
            address,
            description,
            category,
            keywords,
        }
    }
}

/// Static list of preset airports and railway stations
pub static PRESETS: &[Preset] = &[
    Preset::new(
        "preset-cdg",
        "Aéroport Paris-Charles de Gaulle (CDG)",
        "Roissy-en-France",
        SuggestionCategory::Airport,
        &["airport", "aeroport", "aéroport", "cdg", "roissy", "charles de gaulle"],
    ),
    Preset::new(
        "preset-ory",
        "Aéroport Paris-Orly (ORY)",
        "Orly",
        SuggestionCategory::Airport,
        &["airport", "aeroport", "aéroport", "ory", "orly"],
    ),
    Preset::new(
        "preset-bva",
        "Aéroport Paris-Beauvais (BVA)",
        "Tillé",
        SuggestionCategory::Airport,
        &["airport", "aeroport", "aéroport", "bva", "beauvais"],
    ),
    Preset::new(
        "preset-gare-du-nord",
        "Gare du Nord, Paris",
        "Eurostar, Thalys, TER",
        SuggestionCategory::TrainStation,
        &["train", "gare", "station", "nord", "eurostar"],
    ),
    Preset::new(
        "preset-gare-de-lyon",
        "Gare de Lyon, Paris",
        "TGV Sud-Est",
        SuggestionCategory::TrainStation,
        &["train", "gare", "station", "lyon"],
    ),
    Preset::new(
        "preset-gare-montparnasse",
        "Gare Montparnasse, Paris",
        "TGV Atlantique",
        SuggestionCategory::TrainStation,
        &["train", "gare", "station", "montparnasse"],
    ),
    Preset::new(
        "preset-gare-de-lest",
        "Gare de l'Est, Paris",
        "TGV Est",
        SuggestionCategory::TrainStation,
        &["train", "gare", "station", "est"],
    ),
    Preset::new(
        "preset-gare-saint-lazare",
        "Gare Saint-Lazare, Paris",
        "Transilien, Intercités",
        SuggestionCategory::TrainStation,
        &["train", "gare", "station", "lazare", "saint-lazare"],
    ),
];

/// Scan the preset table for entries matching the query
///
/// Returned suggestions keep table order, so airports come before
/// stations when both match a broad query.
pub fn local_matches(query: &str) -> Vec<LocationSuggestion> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();

    PRESETS
        .iter()
        .filter(|preset| matches_preset(preset, &needle))
        .map(|preset| {
            LocationSuggestion::new(
                preset.id,
                preset.address,
                preset.category,
                Some(preset.description.to_string()),
            )
        })
        .collect()
}

fn matches_preset(preset: &Preset, needle: &str) -> bool {
    if preset.address.to_lowercase().contains(needle)
        || preset.description.to_lowercase().contains(needle)
    {
        return true;
    }

    // Intent keywords: "taxi to the airport" should still surface airports
    preset.keywords.iter().any(|keyword| needle.contains(keyword))
}

#[cfg(test)]
#[path = "presets_tests.rs"]
mod presets_tests;
