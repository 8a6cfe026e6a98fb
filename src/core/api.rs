//! HTTP API for Emolex
//!
//! Endpoints:
//! - POST /api/emotion/analyze - Analyze text
//! - GET /api/emotion/test - Run the example sentences
//! - GET /api/emotion/emotions - List supported emotions
//! - GET /health - Health check

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use crate::core::Analyzer;
use crate::types::{EmotionCatalog, SelfTestReport};

/// App state
pub struct AppState {
    pub analyzer: Analyzer,
}

/// Analyze request. A missing `text` is a client error; `null` is blank text.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default, deserialize_with = "present")]
    pub text: Option<Option<String>>,
}

/// Wraps a present field (even `null`) in `Some`
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Client error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub emotions: usize,
}

/// Create the API router
pub fn create_router(analyzer: Analyzer) -> Router {
    let state = Arc::new(AppState { analyzer });

    Router::new()
        .route("/health", get(health))
        .route("/api/emotion/analyze", post(analyze))
        .route("/api/emotion/test", get(self_test))
        .route("/api/emotion/emotions", get(emotions))
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        emotions: state.analyzer.lexicon().len(),
    })
}

/// Analyze text
async fn analyze(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Response {
    let text = match payload {
        Ok(Json(AnalyzeRequest { text: Some(text) })) => text.unwrap_or_default(),
        Ok(_) => return text_required(),
        Err(rejection) => {
            warn!(reason = %rejection.body_text(), "rejected analyze request");
            return text_required();
        }
    };

    let result = state.analyzer.analyze(&text);
    let status = if result.is_error() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    };
    (status, Json(result)).into_response()
}

fn text_required() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: "Text is required".to_string(),
        }),
    )
        .into_response()
}

/// Run the example sentences
async fn self_test(State(state): State<Arc<AppState>>) -> Json<SelfTestReport> {
    Json(state.analyzer.self_test())
}

/// List supported emotions
async fn emotions(State(state): State<Arc<AppState>>) -> Json<EmotionCatalog> {
    Json(state.analyzer.list_supported_emotions())
}

/// Run the API server
pub async fn run_server(addr: &str, analyzer: Analyzer) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router(analyzer);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "emolex API listening");
    println!("Emolex API running on {}", addr);
    println!("  POST /api/emotion/analyze  - Analyze text");
    println!("  GET  /api/emotion/test     - Run example sentences");
    println!("  GET  /api/emotion/emotions - List emotions");
    println!("  GET  /health               - Health check");
    axum::serve(listener, router).await?;
    Ok(())
}
