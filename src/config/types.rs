// Configuration type definitions

use serde::Deserialize;

/// Hotel search source configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct HotelsConfig {
    #[serde(default = "default_hotels_endpoint")]
    pub endpoint: String,
}

fn default_hotels_endpoint() -> String {
    "https://api.pickmehop.com/hotels/search".to_string()
}

impl Default for HotelsConfig {
    fn default() -> Self {
        HotelsConfig {
            endpoint: default_hotels_endpoint(),
        }
    }
}

/// Places autocomplete source configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct PlacesConfig {
    /// Endpoint handing out the places API key
    #[serde(default = "default_key_endpoint")]
    pub key_endpoint: String,
    #[serde(default = "default_autocomplete_endpoint")]
    pub autocomplete_endpoint: String,
    /// Two-letter country restriction for predictions
    #[serde(default = "default_country")]
    pub country: String,
}

fn default_key_endpoint() -> String {
    "https://api.pickmehop.com/maps/key".to_string()
}

fn default_autocomplete_endpoint() -> String {
    "https://maps.googleapis.com/maps/api/place/autocomplete/json".to_string()
}

fn default_country() -> String {
    "fr".to_string()
}

impl Default for PlacesConfig {
    fn default() -> Self {
        PlacesConfig {
            key_endpoint: default_key_endpoint(),
            autocomplete_endpoint: default_autocomplete_endpoint(),
            country: default_country(),
        }
    }
}

/// Shared transport settings for both remote sources
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteConfig {
    /// Per-request ceiling; a source that exceeds it degrades to an
    /// empty contribution instead of stalling the merge
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig {
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub hotels: HotelsConfig,
    #[serde(default)]
    pub places: PlacesConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_endpoints() {
        let config = Config::default();
        assert_eq!(config.hotels.endpoint, "https://api.pickmehop.com/hotels/search");
        assert_eq!(config.places.country, "fr");
        assert_eq!(config.remote.timeout_secs, 10);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[hotels]
endpoint = "https://staging.pickmehop.com/hotels/search"

[places]
key_endpoint = "https://staging.pickmehop.com/maps/key"
autocomplete_endpoint = "https://example.test/autocomplete"
country = "be"

[remote]
timeout_secs = 3
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.hotels.endpoint, "https://staging.pickmehop.com/hotels/search");
        assert_eq!(config.places.country, "be");
        assert_eq!(config.remote.timeout_secs, 3);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let toml = r#"
[places]
country = "es"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.places.country, "es");
        assert_eq!(
            config.places.autocomplete_endpoint,
            "https://maps.googleapis.com/maps/api/place/autocomplete/json"
        );
        assert_eq!(config.hotels.endpoint, "https://api.pickmehop.com/hotels/search");
    }

    // For any subset of sections present in the file, parsing succeeds
    // and absent sections fall back to their defaults.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_sections_use_defaults(
            include_hotels in prop::bool::ANY,
            include_remote in prop::bool::ANY,
        ) {
            let mut toml_content = String::new();
            if include_hotels {
                toml_content.push_str("[hotels]\nendpoint = \"https://h.test/search\"\n");
            }
            if include_remote {
                toml_content.push_str("[remote]\ntimeout_secs = 5\n");
            }

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse config with missing sections");

            let config = config.unwrap();
            if include_hotels {
                prop_assert_eq!(config.hotels.endpoint, "https://h.test/search");
            } else {
                prop_assert_eq!(
                    config.hotels.endpoint,
                    "https://api.pickmehop.com/hotels/search"
                );
            }
            prop_assert_eq!(config.remote.timeout_secs, if include_remote { 5 } else { 10 });
        }
    }

    // For any timeout value, round-tripping through TOML preserves it.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_timeout_parses_any_value(timeout in 0u64..=86_400) {
            let toml_content = format!("[remote]\ntimeout_secs = {}\n", timeout);
            let config: Config = toml::from_str(&toml_content).unwrap();
            prop_assert_eq!(config.remote.timeout_secs, timeout);
        }
    }
}
