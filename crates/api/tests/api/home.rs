use crate::helpers::{spawn_app, MockClimateStore, REMOTE_URL};
use axum::{
    body::{to_bytes, Body},
    http::Request,
};
use hyper::{header, Method, StatusCode};
use std::sync::Arc;
use tower::ServiceExt;

#[tokio::test]
async fn welcome_page_lists_routes_without_touching_store() {
    let mut store = MockClimateStore::new();
    store.expect_session().times(0);
    let test_app = spawn_app(Arc::new(store)).await;

    let request = Request::builder()
        .method(Method::GET)
        .uri("/")
        .header(header::ACCEPT, "text/html")
        .body(Body::empty())
        .unwrap();

    let response = test_app
        .app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();

    assert!(html.contains("Available Routes:"));
    assert!(html.contains(&format!("{}/api/v1.0/precipitation", REMOTE_URL)));
    assert!(html.contains(&format!("{}/api/v1.0/stations", REMOTE_URL)));
    assert!(html.contains(&format!("{}/api/v1.0/tobs", REMOTE_URL)));
    assert!(html.contains("/api/v1.0/&lt;start&gt;"));
}

#[tokio::test]
async fn docs_are_served() {
    let test_app = spawn_app(Arc::new(MockClimateStore::new())).await;

    let request = Request::builder()
        .method(Method::GET)
        .uri("/docs")
        .body(Body::empty())
        .unwrap();

    let response = test_app
        .app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status(), StatusCode::OK);
}
