use super::*;
use crate::config::Timeouts;

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

// =============================================================
// Endpoint formatting
// =============================================================

#[test]
fn generate_endpoint_formats_expected_path() {
    assert_eq!(generate_endpoint("http://h:1"), "http://h:1/generate-content");
}

#[test]
fn history_endpoints_format_expected_paths() {
    assert_eq!(history_endpoint("http://h:1"), "http://h:1/history");
    assert_eq!(history_item_endpoint("http://h:1", &RecordId::from(9)), "http://h:1/history/9");
    assert_eq!(history_item_endpoint("http://h:1", &RecordId::from("ab")), "http://h:1/history/ab");
}

#[test]
fn health_endpoint_is_root() {
    assert_eq!(health_endpoint("http://h:1"), "http://h:1/");
}

// =============================================================
// Mock backend
// =============================================================

#[derive(Clone, Default)]
struct Backend {
    calls: Arc<Mutex<Vec<String>>>,
    last_body: Arc<Mutex<Option<Value>>>,
}

impl Backend {
    fn log(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "backend is running" }))
}

async fn generate(State(backend): State<Backend>, Json(body): Json<Value>) -> Json<Value> {
    backend.log("POST /generate-content");
    *backend.last_body.lock().unwrap() = Some(body);
    Json(json!({ "marketing_text": "Meet the Smart Mug." }))
}

async fn list(State(backend): State<Backend>) -> Json<Value> {
    backend.log("GET /history");
    Json(json!([
        {
            "id": 2,
            "product_name": "Lamp",
            "product_description": "Bright",
            "generated_content": "Shine on.",
            "created_at": "2025-02-01T00:00:00"
        },
        {
            "id": 1,
            "product_name": "Mug",
            "product_description": "Hot",
            "generated_content": "Stay warm."
        }
    ]))
}

async fn delete_one(State(backend): State<Backend>, Path(id): Path<String>) -> Json<Value> {
    backend.log(format!("DELETE /history/{id}"));
    Json(json!({ "message": "History item deleted successfully" }))
}

async fn delete_all(State(backend): State<Backend>) -> Json<Value> {
    backend.log("DELETE /history");
    Json(json!({ "message": "Successfully deleted 2 history items." }))
}

fn backend_router(backend: Backend) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/generate-content", post(generate))
        .route("/history", get(list).delete(delete_all))
        .route("/history/{id}", delete(delete_one))
        .with_state(backend)
}

fn failing_router() -> Router {
    Router::new()
        .route("/generate-content", post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }))
        .route("/history", get(|| async { "not json" }).delete(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .route("/history/{id}", delete(|| async { StatusCode::NOT_FOUND }))
}

async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn api_for(base_url: &str) -> HttpApi {
    let config = ClientConfig { api_url: base_url.to_owned(), timeouts: Timeouts::default() };
    HttpApi::new(&config).unwrap()
}

// =============================================================
// HttpApi against a live router
// =============================================================

#[tokio::test]
async fn generate_content_posts_form_fields() {
    let backend = Backend::default();
    let base = spawn_backend(backend_router(backend.clone())).await;
    let api = api_for(&base);

    let req = GenerateRequest { product_name: "Smart Mug".into(), product_description: "Keeps coffee hot".into() };
    let resp = api.generate_content(&req).await.unwrap();

    assert_eq!(resp.marketing_text, "Meet the Smart Mug.");
    assert_eq!(backend.calls(), vec!["POST /generate-content"]);
    assert_eq!(
        backend.last_body.lock().unwrap().clone(),
        Some(json!({ "product_name": "Smart Mug", "product_description": "Keeps coffee hot" }))
    );
}

#[tokio::test]
async fn list_history_keeps_server_order() {
    let backend = Backend::default();
    let base = spawn_backend(backend_router(backend.clone())).await;
    let api = api_for(&base);

    let records = api.list_history().await.unwrap();

    let ids: Vec<String> = records.iter().map(|r| r.id.to_string()).collect();
    assert_eq!(ids, vec!["2", "1"]);
    assert_eq!(records[0].created_at.as_deref(), Some("2025-02-01T00:00:00"));
    assert!(records[1].created_at.is_none());
}

#[tokio::test]
async fn delete_record_targets_item_path() {
    let backend = Backend::default();
    let base = spawn_backend(backend_router(backend.clone())).await;
    let api = api_for(&base);

    api.delete_record(&RecordId::from(1)).await.unwrap();

    assert_eq!(backend.calls(), vec!["DELETE /history/1"]);
}

#[tokio::test]
async fn clear_history_targets_collection_path() {
    let backend = Backend::default();
    let base = spawn_backend(backend_router(backend.clone())).await;
    let api = api_for(&base);

    api.clear_history().await.unwrap();

    assert_eq!(backend.calls(), vec!["DELETE /history"]);
}

#[tokio::test]
async fn ping_returns_root_message() {
    let base = spawn_backend(backend_router(Backend::default())).await;
    let api = api_for(&base);

    assert_eq!(api.ping().await.unwrap(), "backend is running");
}

#[tokio::test]
async fn server_error_maps_to_status() {
    let base = spawn_backend(failing_router()).await;
    let api = api_for(&base);

    let req = GenerateRequest { product_name: "a".into(), product_description: "b".into() };
    let err = api.generate_content(&req).await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 500 }));

    let err = api.delete_record(&RecordId::from(5)).await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 404 }));

    let err = api.clear_history().await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 500 }));
}

#[tokio::test]
async fn malformed_body_maps_to_decode() {
    let base = spawn_backend(failing_router()).await;
    let api = api_for(&base);

    let err = api.list_history().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn unreachable_backend_maps_to_request() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let api = api_for(&format!("http://{addr}"));

    let err = api.list_history().await.unwrap_err();
    assert!(matches!(err, ApiError::Request(_)));
}

#[test]
fn new_trims_trailing_slash() {
    let api = api_for("http://127.0.0.1:8000/");
    assert_eq!(api.base_url(), "http://127.0.0.1:8000");
}
