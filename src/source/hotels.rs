//! Hotel-name search client
//!
//! Thin client for the booking backend's hotel search: POST the query,
//! get back a list of hotel names. Uses reqwest with a per-request
//! timeout so a hung backend degrades instead of stalling the merge.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::HotelSource;
use crate::config::HotelsConfig;
use crate::error::SourceError;

const SOURCE_NAME: &str = "hotels";

#[derive(Debug, Clone)]
pub struct HotelSearchClient {
    client: Client,
    endpoint: String,
}

#[derive(Debug, Serialize)]
struct HotelSearchRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct HotelSearchResponse {
    #[serde(default)]
    hotels: Vec<String>,
}

impl HotelSearchClient {
    /// Create a client from the `[hotels]` config section
    pub fn from_config(config: &HotelsConfig, timeout: Duration) -> Result<Self, SourceError> {
        if config.endpoint.trim().is_empty() {
            return Err(SourceError::NotConfigured {
                source_name: SOURCE_NAME,
                message: "missing endpoint in [hotels] section".to_string(),
            });
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Network {
                source_name: SOURCE_NAME,
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

impl HotelSource for HotelSearchClient {
    async fn search(&self, query: &str) -> Result<Vec<String>, SourceError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&HotelSearchRequest { query })
            .send()
            .await
            .map_err(|e| SourceError::Network {
                source_name: SOURCE_NAME,
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            let code = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SourceError::Api {
                source_name: SOURCE_NAME,
                code,
                message,
            });
        }

        let parsed: HotelSearchResponse =
            response.json().await.map_err(|e| SourceError::Parse {
                source_name: SOURCE_NAME,
                message: e.to_string(),
            })?;

        Ok(parsed.hotels)
    }
}
