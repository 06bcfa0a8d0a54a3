//! Service settings

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root settings loaded from a YAML file and CLI overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Path of the XML dataset to serve
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<String>,

    /// Server configuration (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
}

/// Server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on (default: 8080)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Token required in the `AccessToken` header; no check when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// Per-request timeout in seconds (default: 30)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Settings {
    /// Get the server port, defaulting to 8080
    pub fn port(&self) -> u16 {
        self.server.as_ref().and_then(|s| s.port).unwrap_or(8080)
    }

    pub fn access_token(&self) -> Option<&str> {
        self.server
            .as_ref()
            .and_then(|s| s.access_token.as_deref())
            .filter(|t| !t.is_empty())
    }

    /// Get the request timeout, defaulting to 30 seconds
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.server
                .as_ref()
                .and_then(|s| s.request_timeout_secs)
                .unwrap_or(30),
        )
    }

    /// Mutable server section, created on first use
    pub fn server_mut(&mut self) -> &mut ServerConfig {
        self.server.get_or_insert_with(ServerConfig::default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.port(), 8080);
        assert_eq!(settings.access_token(), None);
        assert_eq!(settings.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_settings_custom_server() {
        let settings = Settings {
            dataset: Some("dataset.xml".to_string()),
            server: Some(ServerConfig {
                port: Some(3000),
                access_token: Some("secret".to_string()),
                request_timeout_secs: Some(5),
            }),
        };
        assert_eq!(settings.port(), 3000);
        assert_eq!(settings.access_token(), Some("secret"));
        assert_eq!(settings.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_empty_access_token_disables_check() {
        let mut settings = Settings::default();
        settings.server_mut().access_token = Some(String::new());
        assert_eq!(settings.access_token(), None);
    }
}
