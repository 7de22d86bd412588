use crate::constants::{API_USERNAME, DEFAULT_API_URL, UPLOAD_CONTENT_TYPE};
use crate::error::{Result, SqueezeError};
use base64::{engine::general_purpose, Engine};
use bytes::Bytes;
use reqwest::Client;
use serde::Deserialize;

/// Encodes `username:secret` for an HTTP Basic `authorization` header.
pub fn basic_auth(username: &str, secret: &str) -> String {
    general_purpose::STANDARD.encode(format!("{}:{}", username, secret))
}

#[derive(Debug, Clone)]
pub struct ShrinkOptions {
    pub api_url: String,
    pub secret: String,
}

impl Default for ShrinkOptions {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            secret: String::new(),
        }
    }
}

impl ShrinkOptions {
    pub fn new(api_url: Option<String>, secret: String) -> Self {
        Self {
            api_url: api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            secret,
        }
    }
}

/// Shape of the service reply to an upload: `{"output":{"url":"..."}}`.
#[derive(Debug, Deserialize)]
pub struct ShrinkResponse {
    pub output: ShrinkOutput,
}

#[derive(Debug, Deserialize)]
pub struct ShrinkOutput {
    pub url: String,
}

/// Thin wrapper around one shared `reqwest::Client` carrying the
/// precomputed `authorization` header value. Cheap to clone via `Arc`,
/// never mutated after construction.
#[derive(Debug)]
pub struct ShrinkClient {
    http: Client,
    api_url: String,
    authorization: String,
}

impl ShrinkClient {
    pub fn new(options: &ShrinkOptions) -> Result<Self> {
        let http = Client::builder()
            .build()
            .map_err(|e| SqueezeError::ClientBuild(e.to_string()))?;

        Ok(Self {
            http,
            api_url: options.api_url.clone(),
            authorization: format!("Basic {}", basic_auth(API_USERNAME, &options.secret)),
        })
    }

    /// Uploads raw file bytes and returns the parsed service response.
    ///
    /// The content type is deliberately `application/x-www-form-urlencoded`
    /// even though the body is binary; the upstream API accepts it and has
    /// only ever been sent that. No retry on any failure.
    pub async fn shrink(&self, body: Vec<u8>) -> Result<ShrinkResponse> {
        let response = self
            .http
            .post(&self.api_url)
            .header("authorization", &self.authorization)
            .header("Content-Type", UPLOAD_CONTENT_TYPE)
            .body(body)
            .send()
            .await?
            .error_for_status()?;

        let text = response.text().await?;
        let parsed: ShrinkResponse = serde_json::from_str(&text)?;
        Ok(parsed)
    }

    /// Downloads the compressed result from the URL the service returned.
    /// Non-2xx statuses are treated as errors.
    pub async fn fetch(&self, url: &str) -> Result<Bytes> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?)
    }
}
