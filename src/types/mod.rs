//! Core types for the gateway

pub mod message;

pub use message::{ChatMessage, ChatRequest, Role};
