//! API routes for the gateway

pub mod chat;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;

use crate::server::state::AppState;

/// Build all API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Chat endpoint: POST only, other methods get an explicit 405
        .route("/chat", post(chat::handle_chat).fallback(method_not_allowed))
        // Info
        .route("/info", get(info))
        // Anything else under /api is a routing mismatch, not an error
        .fallback(not_found)
}

async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}

/// API info endpoint
async fn info() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "name": "shipment-gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Chat gateway for shipment and container tracking",
        "endpoints": {
            "POST /api/chat": "Send a conversation transcript, receive a tracking answer",
            "GET /api/info": "This document"
        }
    }))
}
