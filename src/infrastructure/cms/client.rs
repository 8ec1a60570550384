// src/infrastructure/cms/client.rs
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;
use thiserror::Error;

use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum CmsError {
    #[error("cms request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("cms answered {status} for {url}")]
    Status { status: u16, url: String },
    #[error("cms query could not be encoded: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),
    #[error("cms api token is not a valid header value")]
    InvalidToken,
}

impl From<CmsError> for DomainError {
    fn from(err: CmsError) -> Self {
        Self::Upstream(err.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct StrapiClientConfig {
    pub base_url: String,
    pub api_token: Option<String>,
    pub timeout: Duration,
}

impl Default for StrapiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:1337".into(),
            api_token: None,
            timeout: Duration::from_secs(10),
        }
    }
}

/// Thin JSON client for the CMS REST API.
#[derive(Debug, Clone)]
pub struct StrapiClient {
    http: reqwest::Client,
    base_url: String,
}

impl StrapiClient {
    pub fn new(config: StrapiClientConfig) -> Result<Self, CmsError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = config.api_token.as_deref().filter(|token| !token.is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| CmsError::InvalidToken)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/{collection}?{query}`; any non-2xx status is an error.
    pub async fn fetch_collection(
        &self,
        collection: &str,
        query: &[(String, String)],
    ) -> Result<Value, CmsError> {
        let query = serde_urlencoded::to_string(query)?;
        let url = if query.is_empty() {
            format!("{}/api/{collection}", self.base_url)
        } else {
            format!("{}/api/{collection}?{query}", self.base_url)
        };

        tracing::debug!(url = %url, "fetching from cms");
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CmsError::Status {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response.json::<Value>().await?)
    }
}
