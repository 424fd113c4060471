use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const POKE_API_BASE_URL: &str = "https://pokeapi.co/api/v2/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for `PokeApiClient`, fixed at construction.
///
/// Timeouts are (de)serialized as whole seconds; missing fields take the
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    #[serde(with = "secs")]
    pub connect_timeout: Duration,
    #[serde(with = "secs")]
    pub read_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: POKE_API_BASE_URL.to_string(),
            connect_timeout: DEFAULT_TIMEOUT,
            read_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }
}

mod secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_pokeapi_with_ten_second_timeouts() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://pokeapi.co/api/v2/");
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.read_timeout, Duration::from_secs(10));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url":"http://localhost:3000/api/v2"}"#).unwrap();
        assert_eq!(config.base_url, "http://localhost:3000/api/v2");
        assert_eq!(config.read_timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn timeouts_are_whole_seconds() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"connect_timeout":3,"read_timeout":5}"#).unwrap();
        assert_eq!(config.connect_timeout, Duration::from_secs(3));
        assert_eq!(config.read_timeout, Duration::from_secs(5));

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["read_timeout"], 5);
    }
}
