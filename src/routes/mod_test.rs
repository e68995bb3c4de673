use super::*;
use crate::state::test_helpers::{closed_addr, spawn, test_app_state, test_config};

#[tokio::test]
async fn healthz_is_ok_without_backend() {
    let state = test_app_state(test_config(closed_addr().await));
    let addr = spawn(api_routes(state)).await;

    let response = reqwest::get(format!("http://{addr}/healthz")).await.unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn cors_allows_cross_origin_callers() {
    let state = test_app_state(test_config(closed_addr().await));
    let addr = spawn(api_routes(state)).await;

    let response = reqwest::Client::new()
        .get(format!("http://{addr}/healthz"))
        .header("origin", "http://localhost:8080")
        .send()
        .await
        .unwrap();

    assert_eq!(response.headers().get("access-control-allow-origin").unwrap(), "*");
}
