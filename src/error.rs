//! bench-router error types

use std::fmt;

use crate::types::Category;

/// The upstream service a request was sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    /// The leaderboard origin, for one category.
    Leaderboard(Category),
    /// The gateway's model catalog endpoint.
    Catalog,
    /// The gateway's chat-completion endpoint.
    Chat,
}

impl Upstream {
    /// Short label used in metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Upstream::Leaderboard(_) => "leaderboard",
            Upstream::Catalog => "catalog",
            Upstream::Chat => "chat",
        }
    }
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Upstream::Leaderboard(category) => {
                write!(f, "leaderboard API (category \"{category}\")")
            }
            Upstream::Catalog => f.write_str("gateway models API"),
            Upstream::Chat => f.write_str("gateway chat API"),
        }
    }
}

/// bench-router error types
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    // Upstream errors
    /// The origin answered with a non-success HTTP status.
    #[error("{upstream} error: {status} {reason}")]
    UpstreamUnavailable {
        upstream: Upstream,
        status: u16,
        reason: String,
    },

    /// The leaderboard was reachable but reported `success=false`.
    #[error("leaderboard returned success=false for category \"{category}\"")]
    UpstreamRejected { category: Category },

    #[error("HTTP error: {0}")]
    Http(String),

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    // Configuration errors
    /// A credential needed for the operation is not configured.
    #[error("{0} is not set. Set it as an environment variable or in secrets.toml to use query tools.")]
    MissingCredential(&'static str),

    #[error("configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for RouterError {
    fn from(err: reqwest::Error) -> Self {
        RouterError::Http(err.to_string())
    }
}

impl RouterError {
    /// HTTP status carried by an upstream failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            RouterError::UpstreamUnavailable { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for bench-router operations
pub type Result<T> = std::result::Result<T, RouterError>;
