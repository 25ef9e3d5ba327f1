//! Bounded query-result cache
//!
//! Maps raw query strings to previously aggregated suggestion lists so
//! retyping the same text never re-fires the remote sources. Capacity
//! is bounded; when full, the entry inserted earliest is evicted —
//! strict insertion-order FIFO, not LRU. Reads never refresh an
//! entry's position.

use std::collections::{HashMap, VecDeque};

use crate::suggestion::LocationSuggestion;

/// Maximum number of distinct query strings kept
pub const QUERY_CACHE_CAPACITY: usize = 100;

#[derive(Debug)]
pub struct QueryCache {
    capacity: usize,
    entries: HashMap<String, Vec<LocationSuggestion>>,
    /// Keys in insertion order; front is evicted first
    order: VecDeque<String>,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(QUERY_CACHE_CAPACITY)
    }
}

impl QueryCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    pub fn get(&self, query: &str) -> Option<&[LocationSuggestion]> {
        self.entries.get(query).map(|list| list.as_slice())
    }

    /// Insert a computed list, evicting the oldest entry when full
    ///
    /// Re-inserting an existing key replaces the value but keeps the
    /// key's original insertion position (two concurrent misses for the
    /// same query both store; last writer wins).
    pub fn insert(&mut self, query: String, suggestions: Vec<LocationSuggestion>) {
        if self.entries.insert(query.clone(), suggestions).is_some() {
            return;
        }

        self.order.push_back(query);
        if self.order.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                log::debug!("query cache full, evicting {:?}", oldest);
                self.entries.remove(&oldest);
            }
        }
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod cache_tests;
