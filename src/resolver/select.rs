//! Ranked selection: the best-ranked entry that actually resolves.

use tracing::debug;

use crate::types::{LeaderboardEntry, ModelMapping};
use crate::Result;

use super::Resolver;

/// A leaderboard entry chosen for routing.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// 1-based position in the list the entry was selected from.
    pub rank: usize,
    pub entry: LeaderboardEntry,
    pub mapping: ModelMapping,
}

impl Resolver {
    /// Walk `entries` in order and return the first one that resolves.
    ///
    /// This is not a search for the "best" resolvable model by any secondary
    /// criterion: rank order alone decides. `Ok(None)` when nothing in the
    /// list resolves.
    pub async fn first_available(&self, entries: &[LeaderboardEntry]) -> Result<Option<Selection>> {
        for (index, entry) in entries.iter().enumerate() {
            if let Some(mapping) = self.resolve(&entry.model_id).await? {
                debug!(
                    rank = index + 1,
                    arena_id = %entry.model_id,
                    gateway_id = %mapping.gateway_id,
                    "selected"
                );
                return Ok(Some(Selection {
                    rank: index + 1,
                    entry: entry.clone(),
                    mapping,
                }));
            }
        }
        debug!(candidates = entries.len(), "no resolvable entry");
        Ok(None)
    }
}
