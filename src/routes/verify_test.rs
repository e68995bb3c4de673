use std::net::SocketAddr;
use std::time::Duration;

use axum::http::StatusCode;
use reqwest::multipart::{Form, Part};
use serde_json::{Value, json};

use crate::config::GatewayConfig;
use crate::routes::api_routes;
use crate::state::test_helpers::{
    closed_addr, echo_backend, scripted_backend, slow_backend, spawn, test_app_state, test_config,
};

async fn gateway(config: GatewayConfig) -> String {
    let addr = spawn(api_routes(test_app_state(config))).await;
    format!("http://{addr}/api/verify")
}

async fn gateway_for(backend: SocketAddr) -> String {
    gateway(test_config(backend)).await
}

async fn post(url: &str, form: Form) -> (u16, Value) {
    let response = reqwest::Client::new().post(url).multipart(form).send().await.unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

fn text_form(text: &str, lang: &str) -> Form {
    Form::new().text("news_text", text.to_owned()).text("target_lang", lang.to_owned())
}

#[tokio::test]
async fn forwards_text_and_language() {
    let url = gateway_for(spawn(echo_backend()).await).await;

    let (status, body) = post(&url, text_form("Water is wet", "ta")).await;

    assert_eq!(status, 200);
    assert_eq!(body["verdict"], "Real");
    assert_eq!(body["received"], json!([["news_text", "Water is wet"], ["target_lang", "ta"]]));
}

#[tokio::test]
async fn forwards_file_upload() {
    let url = gateway_for(spawn(echo_backend()).await).await;
    let file = Part::bytes(b"%PDF-1.4".to_vec()).file_name("claim.pdf").mime_str("application/pdf").unwrap();

    let (status, body) = post(&url, text_form("", "en").part("file_upload", file)).await;

    assert_eq!(status, 200);
    assert_eq!(
        body["received"][2],
        json!(["file_upload", { "file_name": "claim.pdf", "content_type": "application/pdf", "len": 8 }])
    );
}

#[tokio::test]
async fn blank_file_part_is_dropped() {
    let url = gateway_for(spawn(echo_backend()).await).await;
    let blank = Part::bytes(Vec::new()).file_name("").mime_str("application/octet-stream").unwrap();

    let (_, body) = post(&url, text_form("text only", "auto").part("file_upload", blank)).await;

    assert_eq!(body["received"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn missing_language_defaults_to_auto() {
    let url = gateway_for(spawn(echo_backend()).await).await;

    let (_, body) = post(&url, Form::new().text("news_text", "hello")).await;

    assert_eq!(body["received"][1], json!(["target_lang", "auto"]));
}

#[tokio::test]
async fn unknown_language_is_rejected_before_relay() {
    let url = gateway_for(closed_addr().await).await;

    let (status, body) = post(&url, text_form("hello", "xx")).await;

    assert_eq!(status, 400);
    assert_eq!(body["error"], "unsupported output language: xx");
}

#[tokio::test]
async fn backend_error_is_relayed_verbatim() {
    let backend = spawn(scripted_backend(StatusCode::BAD_REQUEST, r#"{"error":"Unsupported file type"}"#)).await;
    let url = gateway_for(backend).await;

    let (status, body) = post(&url, text_form("", "auto")).await;

    assert_eq!(status, 400);
    assert_eq!(body, json!({ "error": "Unsupported file type" }));
}

#[tokio::test]
async fn non_json_backend_reply_is_bad_gateway() {
    let backend = spawn(scripted_backend(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")).await;
    let url = gateway_for(backend).await;

    let (status, body) = post(&url, text_form("", "auto")).await;

    assert_eq!(status, 502);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway() {
    let url = gateway_for(closed_addr().await).await;

    let (status, body) = post(&url, text_form("hello", "auto")).await;

    assert_eq!(status, 502);
    assert!(body["error"].as_str().unwrap().contains("unreachable"));
}

#[tokio::test]
async fn slow_backend_is_gateway_timeout() {
    let url = gateway_for(spawn(slow_backend(Duration::from_secs(3))).await).await;

    let (status, body) = post(&url, text_form("hello", "auto")).await;

    assert_eq!(status, 504);
    assert_eq!(body["error"], "verification service timed out");
}

#[tokio::test]
async fn oversized_upload_is_rejected() {
    let backend = spawn(echo_backend()).await;
    let url = gateway(GatewayConfig { max_upload_bytes: 1024, ..test_config(backend) }).await;
    let big = Part::bytes(vec![7_u8; 8 * 1024]).file_name("big.bin").mime_str("application/octet-stream").unwrap();

    let (status, body) = post(&url, text_form("", "auto").part("file_upload", big)).await;

    assert_eq!(status, 413);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn non_multipart_body_is_bad_request() {
    let url = gateway_for(closed_addr().await).await;

    let response = reqwest::Client::new().post(&url).body("news_text=hi").send().await.unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
}
