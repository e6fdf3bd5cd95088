//! Tool arguments and their validation.

use serde::Deserialize;

use crate::types::CompletionOptions;
use crate::{Category, Result, RouterError};

/// Default page size for [`LeaderboardArgs`].
pub const DEFAULT_LIMIT: usize = 10;
/// Largest accepted page size.
pub const MAX_LIMIT: usize = 50;

/// Arguments for `get_leaderboard`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeaderboardArgs {
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub offset: Option<usize>,
}

impl LeaderboardArgs {
    /// `(limit, offset)` with defaults applied.
    pub(crate) fn page(&self) -> Result<(usize, usize)> {
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(RouterError::InvalidInput(format!(
                "limit must be between 1 and {MAX_LIMIT}, got {limit}"
            )));
        }
        Ok((limit, self.offset.unwrap_or(0)))
    }
}

/// Sampling arguments shared by the query tools.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct SamplingArgs {
    #[serde(default)]
    pub max_tokens: Option<u32>,
    #[serde(default)]
    pub temperature: Option<f32>,
}

impl SamplingArgs {
    pub(crate) fn to_options(self) -> Result<CompletionOptions> {
        let mut options = CompletionOptions::new();
        if let Some(n) = self.max_tokens {
            if n == 0 {
                return Err(RouterError::InvalidInput(
                    "max_tokens must be at least 1".to_string(),
                ));
            }
            options = options.max_tokens(n);
        }
        if let Some(t) = self.temperature {
            if !(0.0..=2.0).contains(&t) {
                return Err(RouterError::InvalidInput(format!(
                    "temperature must be between 0 and 2, got {t}"
                )));
            }
            options = options.temperature(t);
        }
        Ok(options)
    }
}

/// Arguments for `query_best_model`.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryBestArgs {
    pub prompt: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(flatten)]
    pub sampling: SamplingArgs,
}

/// Arguments for `query_specific_model`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuerySpecificArgs {
    pub prompt: String,
    /// Gateway id (`provider/slug`) or leaderboard id.
    pub model: String,
    #[serde(flatten)]
    pub sampling: SamplingArgs,
}
