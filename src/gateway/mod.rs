//! Inference gateway clients (OpenRouter-compatible API).

mod catalog;
mod chat;

pub use catalog::CatalogClient;
pub use chat::{API_KEY_ENV_VAR, Attribution, ChatClient};

/// Default base URL of the inference gateway.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
