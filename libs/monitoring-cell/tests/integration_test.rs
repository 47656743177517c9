use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

use monitoring_cell::router::monitoring_routes;
use shared_utils::test_utils::{read_json, test_state};

fn probe() -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri("/test-db")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_db_probe_reports_solution() {
    let state = test_state().await;

    let response = monitoring_routes(state).oneshot(probe()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        json!({"message": "Database connection successful", "solution": 2})
    );
}

#[tokio::test]
async fn test_db_probe_fails_with_500_when_pool_is_closed() {
    let state = test_state().await;
    state.db.close().await;

    let response = monitoring_routes(state).oneshot(probe()).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = read_json(response).await;
    assert!(json["error"].as_str().is_some_and(|msg| !msg.is_empty()));
}
