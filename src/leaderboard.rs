//! Leaderboard client.
//!
//! One `POST` per category on a cold or expired cache. Entries are sorted by
//! Elo, highest first, before they are cached, so every read sees them in
//! rank order regardless of how the origin ordered them.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

use crate::cache::{Clock, LEADERBOARD_TTL, SystemClock, TtlCache};
use crate::error::Upstream;
use crate::traits::LeaderboardSource;
use crate::types::{LeaderboardRequest, LeaderboardResponse, sort_by_elo};
use crate::upstream::{self, ErrorBody};
use crate::{Category, LeaderboardEntry, Result, RouterError};

/// Default leaderboard endpoint.
pub const DEFAULT_LEADERBOARD_URL: &str = "https://www.designarena.ai/api/leaderboard";

/// Arena type requested from the origin.
const ARENA_TYPE: &str = "models";

/// Cached client for ranked leaderboard entries.
pub struct LeaderboardClient {
    http: Client,
    url: String,
    cache: TtlCache<Category, Vec<LeaderboardEntry>>,
}

impl LeaderboardClient {
    /// Client for the public leaderboard endpoint.
    pub fn new() -> Self {
        Self::with_url(DEFAULT_LEADERBOARD_URL)
    }

    /// Client with a custom endpoint (for testing with wiremock).
    pub fn with_url(url: impl Into<String>) -> Self {
        Self::from_parts(Client::new(), url, Arc::new(SystemClock))
    }

    pub fn from_parts(http: Client, url: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        Self {
            http,
            url: url.into(),
            cache: TtlCache::new("leaderboard", LEADERBOARD_TTL, clock),
        }
    }

    /// Entries for `category`, Elo descending.
    pub async fn fetch(&self, category: Category) -> Result<Arc<Vec<LeaderboardEntry>>> {
        self.cache
            .get_or_refresh(category, || self.fetch_uncached(category))
            .await
    }

    /// Drop one cached category.
    pub async fn invalidate(&self, category: Category) {
        self.cache.invalidate(&category).await;
    }

    /// Drop every cached category.
    pub fn clear(&self) {
        self.cache.clear();
    }

    async fn fetch_uncached(&self, category: Category) -> Result<Vec<LeaderboardEntry>> {
        info!(%category, url = %self.url, "fetching leaderboard");
        let upstream = Upstream::Leaderboard(category);

        let response = self
            .http
            .post(&self.url)
            .json(&LeaderboardRequest {
                arena_type: ARENA_TYPE,
                category: category.as_str(),
            })
            .send()
            .await
            .map_err(|e| upstream::transport_error(upstream, e))?;

        let body: LeaderboardResponse =
            upstream::decode(upstream, response, ErrorBody::Omit).await?;
        if !body.success {
            return Err(RouterError::UpstreamRejected { category });
        }

        let mut entries = body.data;
        sort_by_elo(&mut entries);

        let (updated, votes) = body
            .metadata
            .map(|m| (m.last_update_time, m.total_votes))
            .unwrap_or_default();
        info!(
            %category,
            count = entries.len(),
            last_update = updated.as_deref().unwrap_or("unknown"),
            total_votes = votes.unwrap_or(0),
            "leaderboard refreshed"
        );
        Ok(entries)
    }
}

impl Default for LeaderboardClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LeaderboardSource for LeaderboardClient {
    async fn fetch(&self, category: Category) -> Result<Arc<Vec<LeaderboardEntry>>> {
        LeaderboardClient::fetch(self, category).await
    }
}
