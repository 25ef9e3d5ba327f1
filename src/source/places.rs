//! Places autocomplete client
//!
//! Two-step provider: the API key comes from the booking backend's
//! key-retrieval endpoint (fetched once per client, cached in a
//! `OnceCell`), then predictions come from the places autocomplete
//! endpoint restricted to one country and the address/establishment
//! types. At most the first 5 predictions are kept.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tokio::sync::OnceCell;

use super::PlacesSource;
use crate::config::PlacesConfig;
use crate::error::SourceError;

const SOURCE_NAME: &str = "places";

/// Maximum number of predictions mapped into suggestions
pub const PLACES_MAX_RESULTS: usize = 5;

/// Prediction types requested from the provider
const PLACES_TYPES: &str = "address|establishment";

/// Provider statuses that mean "request understood"
const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

#[derive(Debug)]
pub struct PlacesClient {
    client: Client,
    key_endpoint: String,
    autocomplete_endpoint: String,
    country: String,
    api_key: OnceCell<String>,
}

#[derive(Debug, Deserialize)]
struct KeyResponse {
    key: String,
}

#[derive(Debug, Deserialize)]
struct AutocompleteResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
    status: String,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    description: String,
}

impl PlacesClient {
    /// Create a client from the `[places]` config section
    pub fn from_config(config: &PlacesConfig, timeout: Duration) -> Result<Self, SourceError> {
        if config.key_endpoint.trim().is_empty() || config.autocomplete_endpoint.trim().is_empty() {
            return Err(SourceError::NotConfigured {
                source_name: SOURCE_NAME,
                message: "missing endpoint in [places] section".to_string(),
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
            key_endpoint: config.key_endpoint.clone(),
            autocomplete_endpoint: config.autocomplete_endpoint.clone(),
            country: config.country.clone(),
            api_key: OnceCell::new(),
        })
    }

    /// Fetch the places API key, once per client lifetime
    async fn api_key(&self) -> Result<&str, SourceError> {
        self.api_key
            .get_or_try_init(|| async {
                let response = self
                    .client
                    .get(&self.key_endpoint)
                    .send()
                    .await
                    .map_err(|e| SourceError::KeyRetrieval(e.to_string()))?;

                if !response.status().is_success() {
                    return Err(SourceError::KeyRetrieval(format!(
                        "key endpoint returned {}",
                        response.status()
                    )));
                }

                let parsed: KeyResponse = response
                    .json()
                    .await
                    .map_err(|e| SourceError::KeyRetrieval(e.to_string()))?;

                Ok(parsed.key)
            })
            .await
            .map(String::as_str)
    }
}

impl PlacesSource for PlacesClient {
    async fn autocomplete(&self, query: &str) -> Result<Vec<String>, SourceError> {
        let key = self.api_key().await?;
        let components = format!("country:{}", self.country);

        let response = self
            .client
            .get(&self.autocomplete_endpoint)
            .query(&[
                ("input", query),
                ("components", components.as_str()),
                ("types", PLACES_TYPES),
                ("key", key),
            ])
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

        let parsed: AutocompleteResponse =
            response.json().await.map_err(|e| SourceError::Parse {
                source_name: SOURCE_NAME,
                message: e.to_string(),
            })?;

        if parsed.status != STATUS_OK && parsed.status != STATUS_ZERO_RESULTS {
            return Err(SourceError::Api {
                source_name: SOURCE_NAME,
                code: 200,
                message: parsed.status,
            });
        }

        Ok(parsed
            .predictions
            .into_iter()
            .take(PLACES_MAX_RESULTS)
            .map(|p| p.description)
            .collect())
    }
}
