//! Client configuration: host, default headers, credentials policy.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::headers::Headers;

/// State shared by every request a client sends.
///
/// Deserializes from JSON with every field optional:
///
/// ```json
/// { "host": "https://api.example.com/", "headers": { "Accept": "application/json" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    /// Prepended to relative request paths. Empty means no prefix.
    pub host: String,
    pub headers: Headers,
    /// Whether requests carry ambient credentials (cookies).
    pub with_credentials: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            headers: Headers::new(),
            with_credentials: true,
        }
    }
}

impl ClientConfig {
    pub fn new(headers: Headers) -> Self {
        let mut config = Self::default();
        config.headers.merge(headers);
        config
    }

    /// JSON in, JSON out.
    pub fn json() -> Self {
        Self::new(
            [
                ("Accept", "application/json"),
                ("Content-Type", "application/json"),
            ]
            .into_iter()
            .collect(),
        )
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}
