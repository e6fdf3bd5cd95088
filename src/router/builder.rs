//! Builder for configuring router instances

use std::path::PathBuf;
use std::sync::Arc;

use reqwest::Client;
use tracing::info;

use super::Router;
use crate::cache::{Clock, SystemClock};
use crate::config::{Config, Secrets};
use crate::gateway::{Attribution, CatalogClient, ChatClient, DEFAULT_BASE_URL};
use crate::leaderboard::{DEFAULT_LEADERBOARD_URL, LeaderboardClient};
use crate::resolver::{AliasTable, Resolver};
use crate::tools::Tools;
use crate::Result;

/// Builder for configuring router instances.
pub struct RouterBuilder {
    api_key: Option<String>,
    leaderboard_url: String,
    gateway_base_url: String,
    attribution: Attribution,
    clock: Arc<dyn Clock>,
    http: Option<Client>,
    alias_table: Option<AliasTable>,
    alias_overlay: Option<PathBuf>,
}

impl RouterBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            leaderboard_url: DEFAULT_LEADERBOARD_URL.to_string(),
            gateway_base_url: DEFAULT_BASE_URL.to_string(),
            attribution: Attribution::default(),
            clock: Arc::new(SystemClock),
            http: None,
            alias_table: None,
            alias_overlay: None,
        }
    }

    /// Apply a loaded config file and secrets.
    pub fn config(mut self, config: &Config, secrets: &Secrets) -> Self {
        self.leaderboard_url = config.endpoints.leaderboard_url.clone();
        self.gateway_base_url = config.endpoints.gateway_base_url.clone();
        self.attribution = config.client.attribution();
        self.alias_overlay = config.aliases.path.clone();
        if let Some(key) = secrets.api_key() {
            self.api_key = Some(key);
        }
        self
    }

    /// Gateway API key; only chat completion needs it.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn leaderboard_url(mut self, url: impl Into<String>) -> Self {
        self.leaderboard_url = url.into();
        self
    }

    /// Gateway API root (for both the catalog and chat completion).
    pub fn gateway_base_url(mut self, url: impl Into<String>) -> Self {
        self.gateway_base_url = url.into();
        self
    }

    pub fn attribution(mut self, attribution: Attribution) -> Self {
        self.attribution = attribution;
        self
    }

    /// Time source for cache freshness (default: the system clock).
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Share an existing HTTP client.
    pub fn http_client(mut self, http: Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Replace the compiled-in alias table entirely.
    pub fn alias_table(mut self, table: AliasTable) -> Self {
        self.alias_table = Some(table);
        self
    }

    /// Merge a TOML alias file over the base table at build time.
    pub fn alias_overlay(mut self, path: impl Into<PathBuf>) -> Self {
        self.alias_overlay = Some(path.into());
        self
    }

    /// Build the router.
    ///
    /// Fails only if an alias overlay was given and cannot be read.
    pub fn build(self) -> Result<Router> {
        let mut table = self.alias_table.unwrap_or_else(AliasTable::embedded);
        if let Some(path) = &self.alias_overlay {
            table.merge(AliasTable::load(path)?);
            info!(path = %path.display(), "merged alias overlay");
        }

        let http = self.http.unwrap_or_default();
        let leaderboard = Arc::new(LeaderboardClient::from_parts(
            http.clone(),
            self.leaderboard_url,
            self.clock.clone(),
        ));
        let catalog = Arc::new(CatalogClient::from_parts(
            http.clone(),
            self.gateway_base_url.clone(),
            self.clock,
        ));
        let resolver = Arc::new(Resolver::with_table(catalog.clone(), table));
        let chat = Arc::new(ChatClient::from_parts(
            http,
            self.api_key,
            self.gateway_base_url,
            self.attribution,
        ));
        let tools = Tools::new(leaderboard.clone(), resolver.clone(), chat.clone());

        info!(
            aliases = resolver.table().len(),
            chat = chat.has_api_key(),
            "router ready"
        );
        Ok(Router {
            leaderboard,
            catalog,
            resolver,
            chat,
            tools,
        })
    }
}

impl Default for RouterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        let router = RouterBuilder::new().build().unwrap();
        assert!(!router.chat().has_api_key());
        assert_eq!(router.resolver().table().len(), AliasTable::embedded().len());
    }

    #[test]
    fn config_supplies_key_and_overlay() {
        let dir = tempfile::tempdir().unwrap();
        let overlay = dir.path().join("aliases.toml");
        std::fs::write(&overlay, "[aliases]\n\"brand-new\" = \"acme/brand-new\"\n").unwrap();

        let mut config = Config::default();
        config.aliases.path = Some(overlay);
        let secrets: Secrets = toml::from_str("[openrouter]\napi_key = \"sk-or-x\"\n").unwrap();

        let router = RouterBuilder::new().config(&config, &secrets).build().unwrap();
        assert!(router.chat().has_api_key());
        assert_eq!(router.resolver().table().lookup("brand-new"), Some("acme/brand-new"));
        assert_eq!(router.resolver().table().lookup("gpt-5"), Some("openai/gpt-5"));
    }

    #[test]
    fn missing_overlay_fails_build() {
        let result = RouterBuilder::new()
            .alias_overlay("/nonexistent/aliases.toml")
            .build();
        assert!(result.is_err());
    }
}
