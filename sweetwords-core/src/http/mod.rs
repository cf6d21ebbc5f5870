//! HTTP module for making API requests to LLM providers
//!
//! This module implements the HTTP layer, handling:
//! - Connection pooling and client management
//! - Error mapping from status codes and transport failures
//! - Request ID generation and correlation

pub mod client;
pub mod error;

pub use client::{HttpClient, MAX_RESPONSE_SIZE};
pub use error::map_http_error;
