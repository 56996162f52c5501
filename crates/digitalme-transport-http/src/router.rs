//! Axum router for the DigitalMe HTTP/JSON-RPC transport.
//! Routes: `POST /mcp` (requests), `GET /health` (liveness), `GET /` (service info).

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde_json::json;
use tower_http::trace::TraceLayer;

use digitalme_mcp::{DispatchError, McpHandler, SERVER_VERSION};
use digitalme_persona::IVAN;
use digitalme_protocol::{error_codes, JsonRpcErrorResponse};

/// Human-readable service name used by the info endpoints.
pub const SERVICE_NAME: &str = "DigitalMe MCP Server";

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// The JSON-RPC dispatcher.
    pub handler: Arc<McpHandler>,
}

/// Builds the axum `Router` with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_info))
        .route("/mcp", post(handle_mcp))
        .route("/health", get(handle_health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Maps a JSON-RPC error code to the HTTP status of the response.
pub fn status_for(error_code: Option<i32>) -> StatusCode {
    match error_code {
        None => StatusCode::OK,
        Some(error_codes::INVALID_REQUEST | error_codes::INVALID_PARAMS) => {
            StatusCode::BAD_REQUEST
        }
        Some(error_codes::METHOD_NOT_FOUND) => StatusCode::NOT_FOUND,
        Some(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

async fn handle_health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": SERVER_VERSION,
        "timestamp": timestamp(),
    }))
}

async fn handle_info() -> impl IntoResponse {
    Json(json!({
        "name": SERVICE_NAME,
        "version": SERVER_VERSION,
        "protocol": "JSON-RPC 2.0",
        "personality": IVAN.name,
        "endpoints": {
            "mcp": "/mcp (POST)",
            "health": "/health (GET)",
        },
    }))
}

async fn handle_mcp(State(state): State<AppState>, body: Bytes) -> axum::response::Response {
    let output = state.handler.handle_body(&body);
    let status = status_for(output.error_code());

    match output.to_json() {
        Ok(json_str) => (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            json_str,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize response");
            let err = DispatchError::Internal(e.to_string());
            let body = JsonRpcErrorResponse::error(output.id().clone(), err.code(), err.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}
