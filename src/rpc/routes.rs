use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, instrument};

use super::forwarder::RpcForwarder;

/// Shared application state for the RPC route.
#[derive(Debug, Clone)]
pub struct AppState {
    pub forwarder: RpcForwarder,
}

/// Creates the gateway router.
///
/// ```text
/// /api
/// └── /RPC    POST - forward JSON-RPC body upstream
///             GET  - always 405
/// ```
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/RPC", post(forward_rpc).get(method_not_allowed))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Relays an opaque JSON-RPC request (or batch) to the upstream node.
/// Any failure collapses to a 500 envelope; the render cycle of the caller
/// is never broken by a proxy error.
#[instrument(skip(state, body))]
async fn forward_rpc(
    State(state): State<Arc<AppState>>,
    body: String,
) -> (StatusCode, Json<Value>) {
    info!("received RPC proxy request");

    let parsed = match serde_json::from_str::<Value>(&body) {
        Ok(parsed) => parsed,
        Err(e) => {
            error!("RPC proxy error: request body is not valid JSON: {e}");
            return rpc_failed(format!("request body is not valid JSON: {e}"));
        }
    };

    match state.forwarder.forward(parsed).await {
        Ok(data) => {
            info!("upstream call succeeded");
            (StatusCode::OK, Json(data))
        }
        Err(e) => {
            error!("RPC proxy error: {e}");
            rpc_failed(e.to_string())
        }
    }
}

fn rpc_failed(details: String) -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "RPC call failed",
            "details": details,
        })),
    )
}

async fn method_not_allowed() -> (StatusCode, Json<Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed, use POST" })),
    )
}
