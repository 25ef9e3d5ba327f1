//! Error types for the remote suggestion sources
//!
//! Source errors never reach the aggregator's callers: each one is
//! logged and degrades that source's contribution to an empty list.

use thiserror::Error;

/// Errors that can occur while querying a remote suggestion source
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    /// Source is missing required configuration (e.g. an endpoint URL)
    #[error("[{source_name}] not configured: {message}")]
    NotConfigured {
        source_name: &'static str,
        message: String,
    },

    /// Network error during the request (includes transport timeouts)
    #[error("[{source_name}] network error: {message}")]
    Network {
        source_name: &'static str,
        message: String,
    },

    /// Provider returned a non-success HTTP status
    #[error("[{source_name}] API error ({code}): {message}")]
    Api {
        source_name: &'static str,
        code: u16,
        message: String,
    },

    /// Provider response did not match the expected shape
    #[error("[{source_name}] parse error: {message}")]
    Parse {
        source_name: &'static str,
        message: String,
    },

    /// The places API key could not be obtained
    #[error("[places] key retrieval failed: {0}")]
    KeyRetrieval(String),
}
