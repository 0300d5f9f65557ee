//! shipment-gateway: HTTP gateway for a shipment-tracking RAG chat
//!
//! Mediates between a chat-style frontend and an external retrieval-augmented
//! generation backend. The gateway owns request routing, transcript
//! normalization (injecting the domain instruction preamble exactly once),
//! query delegation, and the HTTP/JSON response contract. The retrieval
//! engine itself is an external collaborator reached over HTTP.

pub mod config;
pub mod error;
pub mod prompt;
pub mod providers;
pub mod server;
pub mod types;

pub use config::GatewayConfig;
pub use error::{Error, Result};
pub use types::message::{ChatMessage, ChatRequest, Role};
