//! Service client configuration.
//!
//! Points the client at the credential offer service. Defaults target a
//! service on localhost. Override via environment variables or explicit
//! construction for staging/testing.

use url::Url;
use zeroize::Zeroizing;

/// Service URL used when `CREDOFFER_SERVICE_URL` is unset.
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:9000";

/// Request timeout used when `CREDOFFER_TIMEOUT_SECS` is unset or invalid.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for connecting to the credential offer service.
///
/// Custom `Debug` implementation redacts the `api_token` field
/// to prevent credential leakage in log output.
#[derive(Clone)]
pub struct ServiceConfig {
    /// Base URL of the service. Always ends with `/`.
    pub service_url: Url,
    /// Optional bearer token for the service.
    pub api_token: Option<Zeroizing<String>>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("service_url", &self.service_url)
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `CREDOFFER_SERVICE_URL` (default: `http://localhost:9000`)
    /// - `CREDOFFER_API_TOKEN` (optional)
    /// - `CREDOFFER_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with_url(None)
    }

    /// Like [`from_env`](Self::from_env), but an explicit `service_url`
    /// replaces `CREDOFFER_SERVICE_URL`, which is then never read.
    pub fn from_env_with_url(service_url: Option<&str>) -> Result<Self, ConfigError> {
        let service_url = match service_url {
            Some(raw) => parse_service_url("--service-url", raw)?,
            None => {
                let raw = std::env::var("CREDOFFER_SERVICE_URL")
                    .unwrap_or_else(|_| DEFAULT_SERVICE_URL.to_string());
                parse_service_url("CREDOFFER_SERVICE_URL", &raw)?
            }
        };
        Ok(Self {
            service_url,
            api_token: std::env::var("CREDOFFER_API_TOKEN")
                .ok()
                .filter(|t| !t.is_empty())
                .map(Zeroizing::new),
            timeout_secs: std::env::var("CREDOFFER_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Create a configuration pointing to a local mock server (for testing).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if the localhost URL cannot be parsed.
    pub fn local_mock(port: u16) -> Result<Self, ConfigError> {
        Ok(Self {
            service_url: parse_service_url("localhost", &format!("http://127.0.0.1:{port}"))?,
            api_token: None,
            timeout_secs: 5,
        })
    }
}

/// Parse a base URL, appending a trailing `/` so relative routes resolve
/// underneath it.
pub fn parse_service_url(source: &str, raw: &str) -> Result<Url, ConfigError> {
    let mut url =
        Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(source.to_string(), e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl(
            source.to_string(),
            "URL cannot be used as a base".to_string(),
        ));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("invalid API token: {0}")]
    InvalidToken(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_mock_builds_valid_config() {
        let cfg = ServiceConfig::local_mock(9000).unwrap();
        assert_eq!(cfg.service_url.as_str(), "http://127.0.0.1:9000/");
        assert_eq!(cfg.timeout_secs, 5);
        assert!(cfg.api_token.is_none());
    }

    #[test]
    fn service_url_gains_trailing_slash() {
        let url = parse_service_url("test", "https://example.com/api").unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/");
        let url = parse_service_url("test", "https://example.com/api/").unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/");
    }

    #[test]
    fn service_url_rejects_garbage() {
        assert!(matches!(
            parse_service_url("test", "not a url"),
            Err(ConfigError::InvalidUrl(_, _))
        ));
        assert!(parse_service_url("test", "mailto:someone@example.com").is_err());
    }

    #[test]
    fn explicit_url_wins_over_broken_env_url() {
        std::env::set_var("CREDOFFER_SERVICE_URL", "not a url");
        let explicit = ServiceConfig::from_env_with_url(Some("https://issuer.example.com"));
        let from_env = ServiceConfig::from_env();
        std::env::remove_var("CREDOFFER_SERVICE_URL");

        assert_eq!(
            explicit.unwrap().service_url.as_str(),
            "https://issuer.example.com/"
        );
        assert!(matches!(from_env, Err(ConfigError::InvalidUrl(_, _))));
    }

    #[test]
    fn debug_redacts_token() {
        let mut cfg = ServiceConfig::local_mock(9000).unwrap();
        cfg.api_token = Some(Zeroizing::new("super-secret".into()));
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
