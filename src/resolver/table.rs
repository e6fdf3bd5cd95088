//! Curated alias data for the resolver.
//!
//! The table is data, not code: the default set is compiled in from
//! `aliases.toml` and can be overlaid at startup with a user-supplied file
//! of the same shape (see [`AliasTable::merge`]).

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;
use tracing::error;

use crate::{Result, RouterError};

/// Raw TOML compiled into the binary.
const EMBEDDED_ALIASES: &str = include_str!("aliases.toml");

/// Known identifier discrepancies between the leaderboard and the gateway.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AliasTable {
    /// Provider prefixes probed by the catalog tier, in order.
    #[serde(default)]
    provider_prefixes: Vec<String>,
    /// Codenames that must never resolve.
    #[serde(default)]
    unreleased: HashSet<String>,
    /// Real-world names for codenames with a confirmed identity.
    #[serde(default)]
    display_names: HashMap<String, String>,
    /// Exact arena id → gateway id mappings.
    #[serde(default)]
    aliases: HashMap<String, String>,
    /// Arena ids deliberately routed to the closest available gateway model.
    #[serde(default)]
    substitutes: HashMap<String, String>,
}

impl AliasTable {
    /// An empty table: nothing excluded, nothing aliased, no prefixes.
    pub fn new() -> Self {
        Self::default()
    }

    /// The compiled-in table.
    pub fn embedded() -> Self {
        match Self::from_toml_str(EMBEDDED_ALIASES) {
            Ok(table) => table,
            Err(e) => {
                error!(error = %e, "failed to parse embedded alias table");
                Self::default()
            }
        }
    }

    pub fn from_toml_str(toml: &str) -> Result<Self> {
        toml::from_str(toml)
            .map_err(|e| RouterError::Configuration(format!("failed to parse alias table: {e}")))
    }

    /// Read a table from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RouterError::Configuration(format!("failed to read alias file {path:?}: {e}"))
        })?;
        Self::from_toml_str(&content)
    }

    /// Overlay `other` on top of this table.
    ///
    /// Map entries from `other` replace existing ones, set entries are
    /// added, and a non-empty prefix list in `other` replaces this one.
    pub fn merge(&mut self, other: AliasTable) {
        if !other.provider_prefixes.is_empty() {
            self.provider_prefixes = other.provider_prefixes;
        }
        self.unreleased.extend(other.unreleased);
        self.display_names.extend(other.display_names);
        self.aliases.extend(other.aliases);
        self.substitutes.extend(other.substitutes);
    }

    /// Add or replace an exact alias.
    pub fn with_alias(mut self, arena_id: impl Into<String>, gateway_id: impl Into<String>) -> Self {
        self.aliases.insert(arena_id.into(), gateway_id.into());
        self
    }

    /// Mark a codename as never resolvable.
    pub fn with_unreleased(mut self, arena_id: impl Into<String>) -> Self {
        self.unreleased.insert(arena_id.into());
        self
    }

    /// Lift the exclusion on a codename (e.g. once it ships).
    pub fn without_unreleased(mut self, arena_id: &str) -> Self {
        self.unreleased.remove(arena_id);
        self
    }

    pub fn with_display_name(mut self, arena_id: impl Into<String>, name: impl Into<String>) -> Self {
        self.display_names.insert(arena_id.into(), name.into());
        self
    }

    pub fn with_provider_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.provider_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_unreleased(&self, arena_id: &str) -> bool {
        self.unreleased.contains(arena_id)
    }

    /// Curated gateway id for `arena_id`, exact aliases before substitutes.
    pub fn lookup(&self, arena_id: &str) -> Option<&str> {
        self.aliases
            .get(arena_id)
            .or_else(|| self.substitutes.get(arena_id))
            .map(String::as_str)
    }

    /// Whether `arena_id` is routed to a stand-in model rather than itself.
    pub fn is_substitute(&self, arena_id: &str) -> bool {
        !self.aliases.contains_key(arena_id) && self.substitutes.contains_key(arena_id)
    }

    pub fn display_name(&self, arena_id: &str) -> Option<&str> {
        self.display_names.get(arena_id).map(String::as_str)
    }

    pub fn provider_prefixes(&self) -> &[String] {
        &self.provider_prefixes
    }

    /// Number of curated mappings (aliases plus substitutes).
    pub fn len(&self) -> usize {
        self.aliases.len() + self.substitutes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
