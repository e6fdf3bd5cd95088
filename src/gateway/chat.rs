//! Gateway chat-completion client.
//!
//! A single authenticated `POST {base}/chat/completions` per call. No retry,
//! no streaming.

use reqwest::Client;
use tracing::{debug, info};

use crate::error::Upstream;
use crate::telemetry;
use crate::types::{ChatCompletion, ChatRequest, ChatRequestMessage, CompletionOptions};
use crate::upstream::{self, ErrorBody};
use crate::{Result, RouterError};

use super::DEFAULT_BASE_URL;

/// Name of the credential chat completion needs.
pub const API_KEY_ENV_VAR: &str = "OPENROUTER_API_KEY";

/// Attribution headers sent with every completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribution {
    /// Sent as `HTTP-Referer`.
    pub referer: String,
    /// Sent as `X-Title`.
    pub title: String,
}

impl Default for Attribution {
    fn default() -> Self {
        Self {
            referer: "https://github.com/mcp-bench-router".to_string(),
            title: "mcp-bench-router".to_string(),
        }
    }
}

/// Client for one-shot chat completions.
#[derive(Clone)]
pub struct ChatClient {
    api_key: Option<String>,
    http: Client,
    base_url: String,
    attribution: Attribution,
}

impl ChatClient {
    /// Client for the public gateway endpoint.
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Client with a custom base URL (for testing with wiremock).
    pub fn with_base_url(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self::from_parts(Client::new(), api_key, base_url, Attribution::default())
    }

    pub fn from_parts(
        http: Client,
        api_key: Option<String>,
        base_url: impl Into<String>,
        attribution: Attribution,
    ) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            attribution,
        }
    }

    /// Whether a credential is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Send `prompt` as a single user message to `model`.
    ///
    /// Fails with [`RouterError::MissingCredential`] before touching the
    /// network when no API key is configured.
    pub async fn complete(
        &self,
        model: &str,
        prompt: &str,
        options: &CompletionOptions,
    ) -> Result<ChatCompletion> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(RouterError::MissingCredential(API_KEY_ENV_VAR))?;

        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatRequest {
            model,
            messages: [ChatRequestMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: options.max_tokens,
            temperature: options.temperature,
        };
        info!(model, "sending chat completion");

        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .header("HTTP-Referer", self.attribution.referer.as_str())
            .header("X-Title", self.attribution.title.as_str())
            .json(&request)
            .send()
            .await
            .map_err(|e| upstream::transport_error(Upstream::Chat, e))?;

        let completion: ChatCompletion =
            upstream::decode(Upstream::Chat, response, ErrorBody::Include).await?;

        if let Some(usage) = completion.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "chat completion usage"
            );
            metrics::counter!(telemetry::TOKENS_TOTAL, "direction" => "prompt")
                .increment(u64::from(usage.prompt_tokens));
            metrics::counter!(telemetry::TOKENS_TOTAL, "direction" => "completion")
                .increment(u64::from(usage.completion_tokens));
        }

        Ok(completion)
    }
}
