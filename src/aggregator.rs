//! Suggestion aggregation
//!
//! Turns a raw text query into a displayable, ordered suggestion list
//! while keeping network traffic down: cached queries are answered
//! immediately, the two remote sources are fetched concurrently, and a
//! failing source degrades to an empty contribution instead of taking
//! the whole lookup down with it.
//!
//! Merge order is fixed: presets first, then hotel names, then places
//! predictions, deduplicated by address and truncated to
//! [`MAX_SUGGESTIONS`]. `suggest` never returns an error; the worst
//! case is a shorter (or empty) list.

use std::collections::HashSet;

use futures::future::join;
use tokio_util::sync::CancellationToken;

use crate::cache::{QUERY_CACHE_CAPACITY, QueryCache};
use crate::presets;
use crate::source::{HotelSource, PlacesSource};
use crate::suggestion::{LocationSuggestion, SuggestionCategory};

/// Upper bound on the merged suggestion list
pub const MAX_SUGGESTIONS: usize = 8;

/// Queries shorter than this never hit the places source
pub const PLACES_MIN_QUERY_LEN: usize = 2;

#[derive(Debug)]
pub struct SuggestionAggregator<H, P> {
    hotels: H,
    places: P,
    cache: QueryCache,
}

impl<H: HotelSource, P: PlacesSource> SuggestionAggregator<H, P> {
    pub fn new(hotels: H, places: P) -> Self {
        Self::with_cache_capacity(hotels, places, QUERY_CACHE_CAPACITY)
    }

    /// Like [`new`](Self::new) with a custom cache bound, for embedders
    /// and tests
    pub fn with_cache_capacity(hotels: H, places: P, capacity: usize) -> Self {
        Self {
            hotels,
            places,
            cache: QueryCache::new(capacity),
        }
    }

    /// Aggregate suggestions for a query
    pub async fn suggest(&mut self, query: &str) -> Vec<LocationSuggestion> {
        self.suggest_with_cancel(query, &CancellationToken::new())
            .await
    }

    /// Aggregate suggestions, honoring a caller-provided cancellation
    /// token
    ///
    /// Cancellation aborts both in-flight remote calls; the call then
    /// degrades to whatever local matches were already computed and
    /// writes nothing to the cache, so a partial batch is never
    /// replayed as a cache hit.
    pub async fn suggest_with_cancel(
        &mut self,
        query: &str,
        cancel: &CancellationToken,
    ) -> Vec<LocationSuggestion> {
        if query.is_empty() {
            return Vec::new();
        }

        if let Some(hit) = self.cache.get(query) {
            log::debug!("cache hit for {:?}", query);
            return hit.to_vec();
        }

        let local = presets::local_matches(query);

        let remote = fetch_remote(&self.hotels, &self.places, query);
        let (hotel_names, place_names) = tokio::select! {
            biased;

            _ = cancel.cancelled() => {
                log::debug!("lookup cancelled for {:?}", query);
                return local;
            }

            names = remote => names,
        };

        let merged = merge(local, hotel_names, place_names);
        self.cache.insert(query.to_string(), merged.clone());
        merged
    }

    /// Clear the whole query cache
    pub fn invalidate(&mut self) {
        log::debug!("suggestion cache cleared");
        self.cache.clear();
    }
}

/// Fetch both remote sources with overlapping latencies
///
/// Each source degrades to an empty list on failure; neither failure
/// mode affects the other source.
async fn fetch_remote<H: HotelSource, P: PlacesSource>(
    hotels: &H,
    places: &P,
    query: &str,
) -> (Vec<String>, Vec<String>) {
    let hotel_names = async {
        match hotels.search(query).await {
            Ok(names) => names,
            Err(e) => {
                log::debug!("hotel search degraded to empty: {}", e);
                Vec::new()
            }
        }
    };

    let place_names = async {
        // Single-character queries are too noisy for the places API
        if query.chars().count() < PLACES_MIN_QUERY_LEN {
            return Vec::new();
        }
        match places.autocomplete(query).await {
            Ok(names) => names,
            Err(e) => {
                log::debug!("places autocomplete degraded to empty: {}", e);
                Vec::new()
            }
        }
    };

    join(hotel_names, place_names).await
}

/// Merge the three sources in priority order, dedup by address,
/// truncate to [`MAX_SUGGESTIONS`]
fn merge(
    local: Vec<LocationSuggestion>,
    hotel_names: Vec<String>,
    place_names: Vec<String>,
) -> Vec<LocationSuggestion> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut merged: Vec<LocationSuggestion> = Vec::new();

    for suggestion in local {
        if seen.insert(suggestion.address.to_lowercase()) {
            merged.push(suggestion);
        }
    }

    for (i, name) in hotel_names.into_iter().enumerate() {
        if name.trim().is_empty() {
            continue;
        }
        if seen.insert(name.to_lowercase()) {
            merged.push(LocationSuggestion::new(
                format!("hotel-{i}"),
                name,
                SuggestionCategory::Hotel,
                None,
            ));
        }
    }

    for (i, name) in place_names.into_iter().enumerate() {
        if name.trim().is_empty() {
            continue;
        }
        if seen.insert(name.to_lowercase()) {
            merged.push(LocationSuggestion::new(
                format!("place-{i}"),
                name,
                SuggestionCategory::GenericAddress,
                None,
            ));
        }
    }

    merged.truncate(MAX_SUGGESTIONS);
    merged
}

#[cfg(test)]
#[path = "aggregator_tests.rs"]
mod aggregator_tests;
