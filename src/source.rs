//! Remote suggestion sources
//!
//! Defines the source traits the aggregator fans out to, the
//! reqwest-backed clients used in production, and the no-op source
//! backing `--offline` mode. The seam is a trait so tests can inject
//! deterministic fakes.

mod hotels;
mod places;

pub use hotels::HotelSearchClient;
pub use places::PlacesClient;

use crate::error::SourceError;

/// Hotel-name search scoped by the query text
#[allow(async_fn_in_trait)]
pub trait HotelSource {
    async fn search(&self, query: &str) -> Result<Vec<String>, SourceError>;
}

/// Places autocomplete scoped by the query text
///
/// Implementations restrict predictions to a single country and return
/// at most `PLACES_MAX_RESULTS` entries.
#[allow(async_fn_in_trait)]
pub trait PlacesSource {
    async fn autocomplete(&self, query: &str) -> Result<Vec<String>, SourceError>;
}

/// Source that never returns anything
///
/// Used for `--offline` mode and as the degraded stand-in when a real
/// client cannot be constructed from config.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSource;

impl HotelSource for NoopSource {
    async fn search(&self, _query: &str) -> Result<Vec<String>, SourceError> {
        Ok(Vec::new())
    }
}

impl PlacesSource for NoopSource {
    async fn autocomplete(&self, _query: &str) -> Result<Vec<String>, SourceError> {
        Ok(Vec::new())
    }
}
