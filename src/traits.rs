//! Data-source traits the resolver and tools are written against.
//!
//! [`CatalogClient`](crate::gateway::CatalogClient) and
//! [`LeaderboardClient`](crate::leaderboard::LeaderboardClient) are the
//! production implementations. Both are expected to cache; callers never
//! decide between fetching and reusing data themselves.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{Category, GatewayModel, LeaderboardEntry, Result};

/// Something that can list the gateway's model catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Full catalog, in the order the gateway returned it.
    async fn list(&self) -> Result<Arc<Vec<GatewayModel>>>;
}

/// Something that can produce ranked leaderboard entries.
#[async_trait]
pub trait LeaderboardSource: Send + Sync {
    /// Entries for `category`, Elo descending.
    async fn fetch(&self, category: Category) -> Result<Arc<Vec<LeaderboardEntry>>>;
}
