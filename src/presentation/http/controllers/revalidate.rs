// src/presentation/http/controllers/revalidate.rs
use crate::application::{commands::revalidation::RevalidatePathCommand, dto::RevalidationDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RevalidateParams {
    /// Shared revalidation secret.
    pub secret: Option<String>,
    /// Site path to drop from the page cache, e.g. `/news/my-article`.
    pub path: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/revalidate",
    params(RevalidateParams),
    responses(
        (status = 200, description = "Path dropped from the page cache.", body = RevalidationDto),
        (status = 400, description = "Missing or relative path.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid secret.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Secret not configured.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Revalidation"
)]
pub async fn revalidate(
    Extension(state): Extension<HttpState>,
    Query(params): Query<RevalidateParams>,
) -> HttpResult<Json<RevalidationDto>> {
    let result = state
        .services
        .revalidation_commands
        .revalidate_path(RevalidatePathCommand {
            secret: params.secret,
            path: params.path,
        })
        .await
        .into_http()?;

    Ok(Json(result))
}
