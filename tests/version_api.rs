mod common;

use axum::http::{Method, StatusCode};
use bookshelf_app::version;
use bookshelf_kernel::ModuleRegistry;
use serde_json::json;

use common::send;

fn version_app() -> axum::Router {
    let mut registry = ModuleRegistry::new();
    registry.register(version::create_module());
    common::app(&registry)
}

#[tokio::test]
async fn root_returns_version_one() {
    let app = version_app();
    let (status, body) = send(&app, Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"version": 1}));
}

#[tokio::test]
async fn query_parameters_do_not_change_the_answer() {
    let app = version_app();
    let (status, body) = send(&app, Method::GET, "/?version=2&verbose=true", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"version": 1}));
}

#[tokio::test]
async fn version_service_has_no_book_routes() {
    let app = version_app();
    let (status, _) = send(&app, Method::GET, "/books", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
