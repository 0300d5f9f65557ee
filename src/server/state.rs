//! Application state for the gateway server

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::prompt::PromptInjector;
use crate::providers::{HttpRetrievalClient, RetrievalProvider};

/// Shared application state.
///
/// Carries only immutable configuration and collaborator handles; no
/// conversation data survives a request, so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: GatewayConfig,
    injector: PromptInjector,
    retrieval: Arc<dyn RetrievalProvider>,
}

impl AppState {
    /// Create state with the HTTP retrieval client from configuration
    pub fn new(config: GatewayConfig) -> Self {
        let retrieval = Arc::new(HttpRetrievalClient::new(&config.retrieval));
        Self::with_provider(config, retrieval)
    }

    /// Create state with an explicit retrieval provider
    pub fn with_provider(config: GatewayConfig, retrieval: Arc<dyn RetrievalProvider>) -> Self {
        let injector = PromptInjector::new(config.system_prompt.clone());
        Self {
            inner: Arc::new(AppStateInner {
                config,
                injector,
                retrieval,
            }),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &GatewayConfig {
        &self.inner.config
    }

    /// Get the prompt injector
    pub fn injector(&self) -> &PromptInjector {
        &self.inner.injector
    }

    /// Get the retrieval provider
    pub fn retrieval(&self) -> &Arc<dyn RetrievalProvider> {
        &self.inner.retrieval
    }
}
