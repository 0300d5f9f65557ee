//! Chat endpoint: the conversation mediator

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use crate::error::{Error, Result};
use crate::prompt::active_query;
use crate::server::state::AppState;
use crate::types::message::ChatRequest;

/// POST /api/chat - Answer the transcript's latest query via the RAG backend
///
/// The body is deserialized explicitly rather than through the `Json`
/// extractor so that a bad payload fails closed into the gateway's own
/// error type instead of an extractor-level 400. The retrieval result is
/// forwarded verbatim; the whole body is buffered before responding.
pub async fn handle_chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<serde_json::Value>> {
    let request: ChatRequest = serde_json::from_slice(&body)
        .map_err(|e| Error::MalformedRequest(format!("invalid JSON body: {}", e)))?;

    let transcript = state.injector().normalize(request.messages);
    let query = active_query(&transcript)?;

    tracing::info!("Chat query: \"{}\"", query);

    let result = state.retrieval().search(query).await?;

    Ok(Json(result))
}
