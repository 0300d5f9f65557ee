//! Provider abstractions for external collaborators

pub mod http;
pub mod retrieval;

pub use http::HttpRetrievalClient;
pub use retrieval::RetrievalProvider;
