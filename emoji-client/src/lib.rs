//! Minimal API Ninjas emoji lookup client.
//!
//! This crate provides a focused client for the `/v1/emoji` endpoint:
//! - One `GET` per lookup, keyed by the `name` query parameter
//! - API key authentication via the `X-Api-Key` header
//! - Typed decoding of the candidate array

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

const API_BASE: &str = "https://api.api-ninjas.com/v1";

/// Environment variable holding the API Ninjas key.
pub const API_KEY_VAR: &str = "API_NINJAS_KEY";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors that can occur when using the emoji client.
#[derive(Debug, Error)]
pub enum Error {
    #[error("API key not configured - set API_NINJAS_KEY")]
    NoApiKey,

    #[error("Network error: {0}")]
    Network(String),

    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// A single emoji candidate returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Emoji {
    /// The glyph itself, e.g. "🐱".
    pub character: String,
    /// Human-readable name, e.g. "cat face".
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub subgroup: Option<String>,
}

/// API Ninjas emoji client.
#[derive(Clone)]
pub struct EmojiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for EmojiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmojiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl EmojiClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::NoApiKey);
        }

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: API_BASE.to_string(),
        })
    }

    /// Create a client from the `API_NINJAS_KEY` environment variable.
    pub fn from_env() -> Result<Self, Error> {
        let api_key = std::env::var(API_KEY_VAR).map_err(|_| Error::NoApiKey)?;
        Self::new(api_key)
    }

    /// Point the client at a different API base (e.g. a local stub server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// The API base this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up emoji candidates for `name`.
    ///
    /// Issues exactly one request. The name is sent as a URL-encoded query
    /// parameter. An empty array is a successful response, not an error.
    pub async fn lookup(&self, name: &str) -> Result<Vec<Emoji>, Error> {
        let headers = self.build_headers()?;

        tracing::debug!(%name, "emoji lookup");

        let response = self
            .client
            .get(self.endpoint())
            .headers(headers)
            .query(&[("name", name)])
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status,
                message: body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        parse_emojis(&body)
    }

    fn endpoint(&self) -> String {
        format!("{}/emoji", self.base_url)
    }

    fn build_headers(&self) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(&self.api_key)
                .map_err(|e| Error::Config(format!("Invalid API key: {e}")))?,
        );
        Ok(headers)
    }
}

/// Decode a response body into emoji candidates, preserving service order.
pub fn parse_emojis(body: &str) -> Result<Vec<Emoji>, Error> {
    serde_json::from_str(body).map_err(|e| Error::Parse(e.to_string()))
}
