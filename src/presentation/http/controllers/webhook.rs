// src/presentation/http/controllers/webhook.rs
use crate::application::{commands::revalidation::HandleWebhookCommand, dto::WebhookResultDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::WebhookToken;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use bytes::Bytes;

/// The body is taken raw so a malformed payload surfaces as a 400 with the
/// same error shape as every other failure.
#[utoipa::path(
    post,
    path = "/api/webhook",
    request_body(
        content = crate::application::commands::revalidation::WebhookPayload,
        content_type = "application/json",
        description = "CMS entry lifecycle notification."
    ),
    params(
        ("token" = Option<String>, Query, description = "Webhook token, when it cannot be sent as a header.")
    ),
    responses(
        (status = 200, description = "Affected pages revalidated, or the event ignored.", body = WebhookResultDto),
        (status = 400, description = "Body is not a webhook payload.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Token not configured.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("webhookToken" = [])),
    tag = "Revalidation"
)]
pub async fn handle_webhook(
    Extension(state): Extension<HttpState>,
    WebhookToken(token): WebhookToken,
    body: Bytes,
) -> HttpResult<Json<WebhookResultDto>> {
    let result = state
        .services
        .revalidation_commands
        .handle_webhook(HandleWebhookCommand { token, body })
        .await
        .into_http()?;

    Ok(Json(result))
}
