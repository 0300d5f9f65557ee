//! Retrieval provider trait

use async_trait::async_trait;

use crate::error::Result;

/// Trait for the external RAG search capability.
///
/// The backend is a black box: given a query string it returns an answer
/// payload whose shape the gateway does not inspect or transform. No
/// timeout, retry, or backoff policy is imposed at this layer.
#[async_trait]
pub trait RetrievalProvider: Send + Sync {
    /// Run a retrieval-augmented search for the given query.
    ///
    /// The returned value is forwarded verbatim as the response body.
    async fn search(&self, query: &str) -> Result<serde_json::Value>;

    /// Check if the backend is reachable and healthy
    async fn health_check(&self) -> Result<bool>;

    /// Provider name for logging
    fn name(&self) -> &str;
}
