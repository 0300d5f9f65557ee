//! Configuration for the gateway

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Instruction preamble injected when the caller supplies no system message.
///
/// Treated as opaque configuration data; deployments override it via the
/// `system_prompt` field in the config file.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a shipment tracking assistant. \
Answer questions about containers, bookings, vessels, and port calls using only \
the retrieved tracking records. If the records do not contain the answer, say \
that the shipment could not be found.";

/// Main gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Retrieval backend configuration
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    /// Directory served for all non-API paths
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
    /// System instruction preamble injected into transcripts
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Enable CORS
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8787,
            enable_cors: true,
        }
    }
}

/// Retrieval backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Base URL of the retrieval service
    pub base_url: String,
    /// Identifier of the RAG index to query on that service
    pub backend_id: String,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            backend_id: "shipment-tracking".to_string(),
        }
    }
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_system_prompt() -> String {
    DEFAULT_SYSTEM_PROMPT.to_string()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            retrieval: RetrievalConfig::default(),
            static_dir: default_static_dir(),
            system_prompt: default_system_prompt(),
        }
    }
}

impl GatewayConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))
    }
}
