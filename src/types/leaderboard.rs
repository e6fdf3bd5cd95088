//! Leaderboard wire types.

use serde::{Deserialize, Serialize};

/// One ranked model on the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// Arena identifier (not in the gateway's namespace).
    pub model_id: String,
    pub wins: u64,
    pub losses: u64,
    pub battles: u64,
    /// Win rate as a percentage (0–100).
    pub win_rate: f64,
    /// Elo rating, higher is better.
    pub elo: f64,
    /// Bradley–Terry standard error, when the origin reports one.
    #[serde(default)]
    pub bt_std_err: Option<f64>,
    #[serde(default)]
    pub avg_generation_time_ms: f64,
    /// Too few votes for the rating to be statistically meaningful.
    #[serde(default)]
    pub insufficient_votes: bool,
}

impl LeaderboardEntry {
    /// Entry with the given id and Elo and zeroed counters.
    pub fn new(model_id: impl Into<String>, elo: f64) -> Self {
        Self {
            model_id: model_id.into(),
            wins: 0,
            losses: 0,
            battles: 0,
            win_rate: 0.0,
            elo,
            bt_std_err: None,
            avg_generation_time_ms: 0.0,
            insufficient_votes: false,
        }
    }
}

/// Leaderboard request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LeaderboardRequest<'a> {
    pub arena_type: &'a str,
    pub category: &'a str,
}

/// Leaderboard response envelope.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LeaderboardResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<LeaderboardEntry>,
    #[serde(default)]
    pub metadata: Option<LeaderboardMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LeaderboardMetadata {
    #[serde(default)]
    pub last_update_time: Option<String>,
    #[serde(default)]
    pub total_votes: Option<u64>,
}

/// Sort entries by Elo, highest first, keeping response order for ties.
pub(crate) fn sort_by_elo(entries: &mut [LeaderboardEntry]) {
    entries.sort_by(|a, b| b.elo.total_cmp(&a.elo));
}
