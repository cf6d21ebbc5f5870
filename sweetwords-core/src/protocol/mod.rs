//! Protocol module for the shared generation request/result shapes
//!
//! These structures are vendor-agnostic: adapters translate them to and from
//! each provider's wire format.

pub mod types;

pub use types::{
    keywords_from_input, GenerationRequest, GenerationRequestBuilder, GenerationResult, Language,
};
