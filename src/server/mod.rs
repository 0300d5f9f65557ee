//! HTTP server for the gateway

pub mod routes;
pub mod state;

use axum::{routing::get, Router};
use std::net::SocketAddr;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::config::GatewayConfig;
use crate::error::Result;
use state::AppState;

/// Gateway HTTP server
pub struct GatewayServer {
    config: GatewayConfig,
    state: AppState,
}

impl GatewayServer {
    /// Create a new gateway server
    pub fn new(config: GatewayConfig) -> Self {
        let state = AppState::new(config.clone());
        Self { config, state }
    }

    /// Create with an explicit application state (alternative providers)
    pub fn with_state(config: GatewayConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Build the router with all routes
    fn build_router(&self) -> Router {
        let router = Router::new()
            // Health check
            .route("/health", get(health_check))
            // API routes
            .nest("/api", routes::api_routes())
            .with_state(self.state.clone())
            // Everything outside /api passes through to static assets
            .fallback_service(ServeDir::new(&self.config.static_dir))
            // Middleware layers (order matters - applied bottom to top)
            .layer(TraceLayer::new_for_http())
            .layer(CompressionLayer::new());

        if self.config.server.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            router.layer(cors)
        } else {
            router
        }
    }

    /// Start the server
    pub async fn start(self) -> Result<()> {
        let addr: SocketAddr = format!("{}:{}", self.config.server.host, self.config.server.port)
            .parse()
            .map_err(|e| crate::error::Error::Config(format!("Invalid address: {}", e)))?;

        let router = self.build_router();

        tracing::info!("Starting gateway on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| crate::error::Error::Config(format!("Failed to bind: {}", e)))?;

        axum::serve(listener, router)
            .await
            .map_err(|e| crate::error::Error::Internal(format!("Server error: {}", e)))?;

        Ok(())
    }

    /// Get the server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.server.host, self.config.server.port)
    }
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::providers::RetrievalProvider;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    /// Retrieval stub that records queries and replies with a canned payload
    struct StubRetrieval {
        seen: Mutex<Vec<String>>,
        reply: std::result::Result<serde_json::Value, String>,
    }

    impl StubRetrieval {
        fn answering(reply: serde_json::Value) -> Arc<Self> {
            Arc::new(Self {
                seen: Mutex::new(Vec::new()),
                reply: Ok(reply),
            })
        }

        fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                seen: Mutex::new(Vec::new()),
                reply: Err(message.to_string()),
            })
        }
    }

    #[async_trait]
    impl RetrievalProvider for StubRetrieval {
        async fn search(&self, query: &str) -> crate::error::Result<serde_json::Value> {
            self.seen.lock().unwrap().push(query.to_string());
            match &self.reply {
                Ok(value) => Ok(value.clone()),
                Err(message) => Err(Error::Retrieval(message.clone())),
            }
        }

        async fn health_check(&self) -> crate::error::Result<bool> {
            Ok(true)
        }

        fn name(&self) -> &str {
            "stub"
        }
    }

    fn router_with(stub: Arc<StubRetrieval>, static_dir: &std::path::Path) -> Router {
        let mut config = GatewayConfig::default();
        config.static_dir = static_dir.to_path_buf();
        let state = AppState::with_provider(config.clone(), stub);
        GatewayServer::with_state(config, state).build_router()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn chat_request(body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn chat_forwards_query_and_result_verbatim() {
        let stub = StubRetrieval::answering(serde_json::json!({
            "answer": "Container ABC123 is aboard MSC LORETO, ETA Hamburg 2026-09-01."
        }));
        let tmp = tempfile::tempdir().unwrap();
        let router = router_with(Arc::clone(&stub), tmp.path());

        let response = router
            .oneshot(chat_request(
                r#"{"messages":[{"role":"user","content":"Where is container ABC123?"}]}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let body = body_json(response).await;
        assert_eq!(
            body["answer"],
            "Container ABC123 is aboard MSC LORETO, ETA Hamburg 2026-09-01."
        );

        let seen = stub.seen.lock().unwrap();
        assert_eq!(seen.as_slice(), ["Where is container ABC123?"]);
    }

    #[tokio::test]
    async fn invalid_json_body_yields_opaque_500() {
        let stub = StubRetrieval::answering(serde_json::json!({"answer": "unused"}));
        let tmp = tempfile::tempdir().unwrap();
        let router = router_with(Arc::clone(&stub), tmp.path());

        let response = router
            .oneshot(chat_request(r#"{"messages":[{"role":"user","#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({"error": "Failed to process request"}));
        assert!(stub.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn upstream_failure_collapses_to_opaque_500() {
        let stub = StubRetrieval::failing("backend shipment-tracking returned 503");
        let tmp = tempfile::tempdir().unwrap();
        let router = router_with(stub, tmp.path());

        let response = router
            .oneshot(chat_request(
                r#"{"messages":[{"role":"user","content":"Where is booking BK-1?"}]}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({"error": "Failed to process request"}));
    }

    #[tokio::test]
    async fn transcript_without_dialogue_is_rejected() {
        let stub = StubRetrieval::answering(serde_json::json!({"answer": "unused"}));
        let tmp = tempfile::tempdir().unwrap();
        let router = router_with(Arc::clone(&stub), tmp.path());

        // Empty transcript: only the injected preamble would remain, and the
        // preamble must never become the search query.
        let response = router
            .oneshot(chat_request(r#"{"messages":[]}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(stub.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_on_chat_endpoint_is_405() {
        let stub = StubRetrieval::answering(serde_json::json!({"answer": "unused"}));
        let tmp = tempfile::tempdir().unwrap();
        let router = router_with(stub, tmp.path());

        let response = router
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri("/api/chat")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"Method not allowed");
    }

    #[tokio::test]
    async fn unknown_api_path_is_404() {
        let stub = StubRetrieval::answering(serde_json::json!({"answer": "unused"}));
        let tmp = tempfile::tempdir().unwrap();
        let router = router_with(stub, tmp.path());

        let response = router
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri("/api/unknown")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"Not found");
    }

    #[tokio::test]
    async fn non_api_paths_pass_through_to_static_assets() {
        let stub = StubRetrieval::answering(serde_json::json!({"answer": "unused"}));
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("index.html"), "<h1>Tracking</h1>").unwrap();
        let router = router_with(stub, tmp.path());

        let response = router
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri("/index.html")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"<h1>Tracking</h1>");
    }

    #[tokio::test]
    async fn caller_supplied_system_message_is_not_duplicated() {
        let stub = StubRetrieval::answering(serde_json::json!({"answer": "ok"}));
        let tmp = tempfile::tempdir().unwrap();
        let router = router_with(Arc::clone(&stub), tmp.path());

        let response = router
            .oneshot(chat_request(
                r#"{"messages":[
                    {"role":"system","content":"Respond tersely."},
                    {"role":"user","content":"ETA for MAEU7001?"}
                ]}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let seen = stub.seen.lock().unwrap();
        assert_eq!(seen.as_slice(), ["ETA for MAEU7001?"]);
    }
}
