//! Service client error types.

/// Errors from calls to the credential offer service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The service returned a non-2xx status.
    #[error("service {endpoint} returned {status}: {body}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The photo claim's value could not be resolved to a URL.
    #[error("invalid image URL {url:?}: {source}")]
    ImageUrl {
        url: String,
        source: url::ParseError,
    },
    /// Fetching the photo claim's image failed.
    #[error("failed to fetch image {url}: {source}")]
    ImageFetch { url: String, source: reqwest::Error },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),
}
