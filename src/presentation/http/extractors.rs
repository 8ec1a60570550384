// src/presentation/http/extractors.rs
use crate::{application::error::ApplicationError, presentation::http::state::HttpState};
use axum::{
    Extension,
    extract::{FromRequestParts, Query},
    http::{HeaderMap, header, request::Parts},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};
use serde::Deserialize;

use super::error::HttpError;

/// Token presented to the webhook endpoint, if any.
///
/// Looked up in the configured headers first, then in `?token=`.
#[derive(Debug, Clone, Default)]
pub struct WebhookToken(pub Option<String>);

#[derive(Debug, Deserialize)]
struct TokenQuery {
    token: Option<String>,
}

impl FromRequestParts<()> for WebhookToken {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &()) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::Infrastructure(
                    "application state missing".into(),
                ))
            })?;

        let from_headers = app_state
            .webhook_token_headers
            .iter()
            .find_map(|name| header_token(&parts.headers, name));
        if from_headers.is_some() {
            return Ok(Self(from_headers));
        }

        let from_query = Query::<TokenQuery>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(query)| query.token)
            .filter(|token| !token.trim().is_empty());
        Ok(Self(from_query))
    }
}

fn header_token(headers: &HeaderMap, name: &str) -> Option<String> {
    if name.eq_ignore_ascii_case(header::AUTHORIZATION.as_str())
        && let Some(bearer) = headers.typed_get::<Authorization<Bearer>>()
    {
        return Some(bearer.token().to_string());
    }

    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
}
