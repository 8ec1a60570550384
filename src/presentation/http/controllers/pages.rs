// src/presentation/http/controllers/pages.rs
use crate::application::{error::ApplicationError, ports::cache::RenderedPage};
use crate::domain::{
    article::{ArticleSlug, CategorySlug},
    site::SitePage,
};
use crate::presentation::http::{conditional, error::HttpError, state::HttpState};
use axum::{
    Extension,
    extract::Path,
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
};

const PAGE_CACHE_CONTROL: &str = "public, max-age=0, must-revalidate";

pub async fn home(Extension(state): Extension<HttpState>, headers: HeaderMap) -> Response {
    serve(&state, &SitePage::Home, &headers).await
}

pub async fn news_index(Extension(state): Extension<HttpState>, headers: HeaderMap) -> Response {
    serve(&state, &SitePage::NewsIndex, &headers).await
}

pub async fn article(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> Response {
    match ArticleSlug::new(slug) {
        Ok(slug) => serve(&state, &SitePage::Article(slug), &headers).await,
        Err(_) => not_found_page(&state),
    }
}

pub async fn category(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> Response {
    match CategorySlug::new(slug) {
        Ok(slug) => serve(&state, &SitePage::Category(slug), &headers).await,
        Err(_) => not_found_page(&state),
    }
}

pub async fn not_found(Extension(state): Extension<HttpState>) -> Response {
    not_found_page(&state)
}

async fn serve(state: &HttpState, page: &SitePage, headers: &HeaderMap) -> Response {
    match state.services.page_queries.render_page(page).await {
        Ok(rendered) => page_response(&rendered, headers),
        Err(ApplicationError::NotFound(_)) => not_found_page(state),
        Err(err) => HttpError::from_error(err).into_response(),
    }
}

fn page_response(page: &RenderedPage, headers: &HeaderMap) -> Response {
    let last_modified = conditional::http_date(page.rendered_at);
    let validators = [
        (header::ETAG, page.etag.clone()),
        (header::LAST_MODIFIED, last_modified),
        (header::CACHE_CONTROL, PAGE_CACHE_CONTROL.to_string()),
    ];

    if conditional::is_not_modified(headers, &page.etag, page.rendered_at) {
        return (StatusCode::NOT_MODIFIED, validators).into_response();
    }

    (
        StatusCode::OK,
        validators,
        Html(page.html.clone()),
    )
        .into_response()
}

fn not_found_page(state: &HttpState) -> Response {
    (
        StatusCode::NOT_FOUND,
        [(header::CACHE_CONTROL, "no-store")],
        Html(state.services.page_queries.not_found_html()),
    )
        .into_response()
}
