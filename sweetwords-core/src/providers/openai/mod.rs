//! OpenAI-compatible provider family
//!
//! System and user prompts go out through `/v1/chat/completions` with a
//! bearer key; the text comes back under `choices[0].message.content`.

mod client;
pub mod types;

pub use client::{normalize_response, OpenAiAdapter};
pub use types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
