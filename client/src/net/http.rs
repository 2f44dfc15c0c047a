//! Cookie-authenticated JSON client for the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always with
//! `credentials: include` so the session cookie travels with every request.
//! Server-side (SSR): every call fails as unreachable; the backend session
//! cookie lives in the browser, not on the render host.
//!
//! RESPONSE HANDLING
//! =================
//! Status and body are normalized by [`decode_body`]: non-2xx is an HTTP
//! error, an empty body is `None`, anything else must parse as the expected
//! JSON type.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::config::ApiConfig;

/// HTTP verbs used against the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

/// Shared handle to the backend. Cheap to clone.
#[derive(Clone, Debug)]
pub struct ApiClient {
    config: Arc<ApiConfig>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(ApiConfig::from_build_env())
    }
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config: Arc::new(config) }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET endpoint`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Option<T>, ApiError> {
        self.request(Method::Get, endpoint, None).await
    }

    /// `POST endpoint` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, endpoint: &str, body: &B) -> Result<Option<T>, ApiError> {
        let body = encode(body)?;
        self.request(Method::Post, endpoint, Some(body)).await
    }

    /// `POST endpoint` without a body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn post_empty<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Option<T>, ApiError> {
        self.request(Method::Post, endpoint, None).await
    }

    /// `PUT endpoint` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, endpoint: &str, body: &B) -> Result<Option<T>, ApiError> {
        let body = encode(body)?;
        self.request(Method::Put, endpoint, Some(body)).await
    }

    /// Issue a request and decode the response.
    ///
    /// # Errors
    ///
    /// `NetworkUnreachable` when no response arrives, `Http` for non-2xx
    /// statuses, `MalformedResponse` when a non-empty body does not decode.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<String>,
    ) -> Result<Option<T>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            use web_sys::RequestCredentials;

            let url = self.config.url(endpoint);
            let builder = match method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
            }
            .credentials(RequestCredentials::Include)
            .header("Content-Type", "application/json");

            let request = match body {
                Some(json) => builder.body(json),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Encode(e.to_string()))?;

            let resp = request.send().await.map_err(|e| {
                log::error!("request to {url} failed; is the backend running at {}?", self.config.base_url);
                ApiError::NetworkUnreachable(e.to_string())
            })?;
            let status = resp.status();
            let text = resp
                .text()
                .await
                .map_err(|e| ApiError::NetworkUnreachable(e.to_string()))?;
            decode_body(status, &text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (method, endpoint, body);
            Err(ApiError::NetworkUnreachable("not available on server".to_owned()))
        }
    }
}

/// Normalize a raw response into the payload, `None`, or an error.
///
/// # Errors
///
/// `Http` when `status` is outside 200..=299, `MalformedResponse` when a
/// non-blank body does not parse as `T`.
pub fn decode_body<T: DeserializeOwned>(status: u16, text: &str) -> Result<Option<T>, ApiError> {
    if !(200..=299).contains(&status) {
        return Err(ApiError::Http { status });
    }
    if text.trim().is_empty() {
        return Ok(None);
    }
    match serde_json::from_str(text) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            log::warn!("response decode failed: {e}");
            Err(ApiError::MalformedResponse { raw: text.to_owned() })
        }
    }
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}
