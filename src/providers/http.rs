//! HTTP client for the retrieval backend

use async_trait::async_trait;
use serde::Serialize;

use crate::config::RetrievalConfig;
use crate::error::{Error, Result};

use super::retrieval::RetrievalProvider;

/// Retrieval client addressing a fixed RAG index over HTTP
pub struct HttpRetrievalClient {
    client: reqwest::Client,
    base_url: String,
    backend_id: String,
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
}

impl HttpRetrievalClient {
    /// Create a new client from configuration
    pub fn new(config: &RetrievalConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            backend_id: config.backend_id.clone(),
        }
    }

    fn search_url(&self) -> String {
        format!("{}/rags/{}/search", self.base_url, self.backend_id)
    }
}

#[async_trait]
impl RetrievalProvider for HttpRetrievalClient {
    async fn search(&self, query: &str) -> Result<serde_json::Value> {
        let response = self
            .client
            .post(self.search_url())
            .json(&SearchRequest { query })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Retrieval(format!(
                "backend {} returned {}: {}",
                self.backend_id, status, body
            )));
        }

        let result = response.json::<serde_json::Value>().await?;
        Ok(result)
    }

    async fn health_check(&self) -> Result<bool> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await;
        match response {
            Ok(resp) => Ok(resp.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    fn name(&self) -> &str {
        "http"
    }
}
