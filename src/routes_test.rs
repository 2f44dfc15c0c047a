use axum::body::Body;
use axum::http::Request;
use tower::util::ServiceExt;

use super::*;

#[tokio::test]
async fn healthz_is_ok() {
    let response = base_routes()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_path_is_not_found_without_leptos() {
    let response = base_routes()
        .oneshot(Request::builder().uri("/api/reports").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
