//! Clients - HTTP Clients for External APIs
//! 
//! This module contains the HTTP client for the remote after-sales backend.

pub mod backend_client;

// Re-export main types for convenience
pub use backend_client::{parse_body, BackendClient, UpstreamResponse};
