use axum::body::{self, Body};
use axum::http::{Method, Request};
use kawaraban::presentation::http::openapi::{docs_router, write_openapi_snapshot};
use serde_json::Value;
use tower::ServiceExt; // for oneshot

/// /openapi.json が API のパスを含む文書を返すことを確認する
#[tokio::test]
async fn docs_router_serves_openapi_json() {
    let app = docs_router();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/openapi.json")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), 200);
    let bytes = body::to_bytes(resp.into_body(), 4 * 1024 * 1024).await.unwrap();
    let doc: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(doc["paths"].get("/api/revalidate").is_some());
    assert!(doc["paths"].get("/api/webhook").is_some());
    assert!(doc["components"]["securitySchemes"].get("webhookToken").is_some());
}

/// スナップショットをファイルに書き出せることを確認する
#[test]
fn snapshot_is_written_to_requested_path() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("spec").join("openapi.json");

    write_openapi_snapshot(&path).unwrap();

    let doc: Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(doc["info"]["title"], "Kawaraban API");
}
