//! Vendor adapters and dispatch
//!
//! Two wire families cover every supported vendor: Gemini-style
//! (`generateContent`) and OpenAI-compatible (`/v1/chat/completions`).

pub mod adapter;
pub mod dispatch;
pub mod error;
pub mod gemini;
pub mod openai;

pub use adapter::{token_budget, Adapter, AdapterKind, ProviderAdapter, TEMPERATURE, TOKEN_BUDGET_MULTIPLIER};
pub use dispatch::{effective_provider, route, route_raw, Dispatcher};
pub use error::{ProviderError, ProviderResult};
pub use gemini::GeminiAdapter;
pub use openai::OpenAiAdapter;
