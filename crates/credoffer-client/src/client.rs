//! Typed client for the credential offer service.
//!
//! Two HTTP clients share one timeout: the service client carries the
//! optional bearer token, the fetch client never does, so image URLs from
//! claim values cannot receive the token.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::{ConfigError, ServiceConfig};
use crate::error::ServiceError;
use crate::routes::RpcRoute;

/// MIME type used when an image response carries no content type.
const FALLBACK_MIME: &str = "application/octet-stream";

/// Handle to the credential offer service.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    http: reqwest::Client,
    fetch: reqwest::Client,
    base_url: Url,
}

impl ServiceClient {
    /// Create a new client from configuration.
    pub fn new(config: ServiceConfig) -> Result<Self, ServiceError> {
        let timeout = Duration::from_secs(config.timeout_secs);

        let mut headers = HeaderMap::new();
        if let Some(token) = &config.api_token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token.as_str()))
                .map_err(|e| ConfigError::InvalidToken(e.to_string()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| ServiceError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;
        let fetch = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self {
            http,
            fetch,
            base_url: config.service_url,
        })
    }

    /// Base URL of the service.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Invoke an RPC on the service.
    ///
    /// Calls `POST {base_url}rpc/{route}` with `request` as the JSON body.
    pub async fn send_rpc<Req, Resp>(
        &self,
        route: RpcRoute,
        request: &Req,
    ) -> Result<Resp, ServiceError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let endpoint = format!("POST /rpc/{route}");
        let url = format!("{}rpc/{}", self.base_url, route.as_str());

        tracing::debug!(%route, %url, "sending RPC");

        let resp = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ServiceError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ServiceError::Api {
                endpoint,
                status,
                body,
            });
        }

        resp.json()
            .await
            .map_err(|e| ServiceError::Deserialization { endpoint, source: e })
    }

    /// Download `url` and encode it as a `data:<mime>;base64,...` URL.
    ///
    /// `url` is resolved against the service base URL, so empty and relative
    /// values point at the service. Only transport failures are errors. A
    /// non-2xx response body is encoded like any other.
    pub async fn fetch_image_data_url(&self, url: &str) -> Result<String, ServiceError> {
        let resolved = self
            .base_url
            .join(url)
            .map_err(|e| ServiceError::ImageUrl {
                url: url.to_string(),
                source: e,
            })?;
        let image_fetch = |e: reqwest::Error| ServiceError::ImageFetch {
            url: url.to_string(),
            source: e,
        };

        let resp = self
            .fetch
            .get(resolved.clone())
            .send()
            .await
            .map_err(image_fetch)?;
        if !resp.status().is_success() {
            tracing::warn!(
                url = %resolved,
                status = resp.status().as_u16(),
                "image fetch returned non-success status"
            );
        }

        let mime = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .unwrap_or(FALLBACK_MIME)
            .to_string();
        let bytes = resp.bytes().await.map_err(image_fetch)?;

        Ok(format!("data:{mime};base64,{}", STANDARD.encode(&bytes)))
    }
}
