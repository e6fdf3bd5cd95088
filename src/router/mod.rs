//! The assembled router: clients, caches, resolver and tools.

mod builder;

pub use builder::RouterBuilder;

use std::sync::Arc;

use crate::config::{Config, Secrets};
use crate::gateway::{CatalogClient, ChatClient};
use crate::leaderboard::LeaderboardClient;
use crate::resolver::Resolver;
use crate::tools::Tools;
use crate::Result;

/// Main entry point: one shared set of caches behind the tool operations.
pub struct Router {
    leaderboard: Arc<LeaderboardClient>,
    catalog: Arc<CatalogClient>,
    resolver: Arc<Resolver>,
    chat: Arc<ChatClient>,
    tools: Tools,
}

impl Router {
    /// Create a new builder for configuring the router.
    pub fn builder() -> RouterBuilder {
        RouterBuilder::new()
    }

    /// Router from a loaded config and secrets.
    pub fn from_config(config: &Config, secrets: &Secrets) -> Result<Self> {
        Self::builder().config(config, secrets).build()
    }

    pub fn tools(&self) -> &Tools {
        &self.tools
    }

    pub fn leaderboard(&self) -> &LeaderboardClient {
        &self.leaderboard
    }

    pub fn catalog(&self) -> &CatalogClient {
        &self.catalog
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn chat(&self) -> &ChatClient {
        &self.chat
    }

    /// Drop all cached leaderboards and the cached catalog.
    pub fn clear_caches(&self) {
        self.leaderboard.clear();
        self.catalog.clear();
    }
}
