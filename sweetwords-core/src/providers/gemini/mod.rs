//! Gemini-style provider family
//!
//! A single user prompt goes out through `generateContent`; the text comes
//! back under `candidates[0].content.parts[0].text`.

mod client;
pub mod types;

pub use client::{normalize_response, GeminiAdapter};
pub use types::{GeminiRequest, GeminiResponse};
