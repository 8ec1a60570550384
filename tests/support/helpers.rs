// tests/support/helpers.rs
use std::path::Path;
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{HeaderMap, Request, StatusCode};
use bytes::Bytes;
use serde_json::Value;
use tower::util::ServiceExt as _;

use super::builders::sample_articles;
use super::mocks::{ManualClock, RecordingObjectStore, StubArticleRepo};
use kawaraban::application::ports::{
    cache::PageCache, security::SecretMatcher, storage::ObjectStore, time::Clock,
};
use kawaraban::application::services::{ApplicationServices, ServiceSettings};
use kawaraban::application::settings::{ExportSettings, RevalidationSettings, UploadSettings};
use kawaraban::domain::article::ArticleReadRepository;
use kawaraban::infrastructure::{cache::InMemoryPageCache, security::DigestSecretMatcher};
use kawaraban::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};

pub const TEST_SECRET: &str = "test-secret";
pub const TEST_WEBHOOK_TOKEN: &str = "hook-token";

pub fn test_settings() -> ServiceSettings {
    ServiceSettings {
        revalidation: RevalidationSettings {
            revalidation_secret: Some(TEST_SECRET.into()),
            webhook_token: Some(TEST_WEBHOOK_TOKEN.into()),
        },
        ..ServiceSettings::default()
    }
}

/// Settings whose export writes into `export_dir`, with `prefix` for uploads.
pub fn publishing_settings(export_dir: &Path, prefix: &str) -> ServiceSettings {
    ServiceSettings {
        export: ExportSettings {
            export_dir: export_dir.to_path_buf(),
            static_assets_dir: export_dir.join("missing-assets"),
        },
        upload: UploadSettings::new(prefix),
        ..test_settings()
    }
}

/// Everything a router test may want to poke at after a request.
pub struct TestApp {
    pub router: axum::Router,
    pub services: Arc<ApplicationServices>,
    pub cache: Arc<InMemoryPageCache>,
    pub clock: Arc<ManualClock>,
}

pub fn build_test_app(
    repo: Arc<dyn ArticleReadRepository>,
    settings: ServiceSettings,
    store: Option<Arc<RecordingObjectStore>>,
) -> TestApp {
    let cache = Arc::new(InMemoryPageCache::new());
    let clock = Arc::new(ManualClock::default());
    let page_cache: Arc<dyn PageCache> = cache.clone();
    let clock_port: Arc<dyn Clock> = clock.clone();
    let secret_matcher: Arc<dyn SecretMatcher> = Arc::new(DigestSecretMatcher);
    let store: Option<Arc<dyn ObjectStore>> = store.map(|store| store as Arc<dyn ObjectStore>);

    let services = Arc::new(ApplicationServices::new(
        repo,
        page_cache,
        secret_matcher,
        clock_port,
        store,
        settings,
    ));

    let state = HttpState::new(
        Arc::clone(&services),
        vec![
            "x-webhook-token".into(),
            "x-strapi-token".into(),
            "authorization".into(),
        ],
    );
    let router = build_router(
        state,
        &RouterOptions {
            rate_limit_enabled: false,
            ..RouterOptions::default()
        },
    );

    TestApp {
        router,
        services,
        cache,
        clock,
    }
}

pub fn make_test_app(repo: Arc<StubArticleRepo>) -> TestApp {
    build_test_app(repo, test_settings(), None)
}

pub fn make_test_router() -> axum::Router {
    make_test_app(Arc::new(StubArticleRepo::new(sample_articles()))).router
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("expected a json body")
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn header(&self, name: &str) -> &str {
        self.headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
    }
}

pub async fn send(router: &axum::Router, request: Request<Body>) -> TestResponse {
    let response = router.clone().oneshot(request).await.unwrap();
    let (parts, body_stream) = response.into_parts();
    let body = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    TestResponse {
        status: parts.status,
        headers: parts.headers,
        body,
    }
}

pub async fn get(router: &axum::Router, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(router, request).await
}

/// Assert an `ErrorResponse` JSON body with the expected status and error string.
pub fn assert_error_response(resp: &TestResponse, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status, expected_status, "body: {}", resp.text());
    let ct = resp.header("content-type");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = resp.json();
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
