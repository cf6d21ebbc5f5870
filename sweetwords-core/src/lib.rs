//! Sweet Words Core Library
//!
//! This crate turns a recipient name, a style, a scene and a few keyword hints
//! into a templated prompt, sends it to a hosted LLM and hands back the text.
//!
//! The moving parts are small:
//! - [`protocol`] holds the shared request/result shapes
//! - [`prompt`] renders the prompt text for both vendor families
//! - [`config`] validates and persists provider settings
//! - [`providers`] contains the Gemini and OpenAI-compatible adapters plus the dispatcher
//! - [`generator`] wires validation, dispatch and the single HTTP call together

pub mod catalog;
pub mod config;
pub mod generator;
pub mod http;
pub mod prompt;
pub mod protocol;
pub mod providers;

pub use generator::Generator;
pub use protocol::{GenerationRequest, GenerationResult, Language};

/// Returns the version of the Sweet Words core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
