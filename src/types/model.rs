//! Gateway catalog entries and resolved mappings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One model in the gateway's catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayModel {
    /// Gateway identifier, `<provider>/<slug>`.
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<GatewayPricing>,
}

impl GatewayModel {
    /// Catalog entry with only an id and display name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            context_length: None,
            pricing: None,
        }
    }

    /// Everything after the last `/` (the whole id if there is none).
    pub fn slug(&self) -> &str {
        self.id.rsplit('/').next().unwrap_or(&self.id)
    }

    /// Everything before the first `/`, if the id has a provider part.
    pub fn provider(&self) -> Option<&str> {
        self.id.split_once('/').map(|(provider, _)| provider)
    }
}

/// Per-token prices, string-encoded decimals as the gateway reports them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayPricing {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub completion: Option<String>,
}

/// Catalog response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct CatalogResponse {
    pub data: Vec<GatewayModel>,
}

/// Which resolution tier produced a mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MappingSource {
    /// Curated alias table.
    Static,
    /// `<provider>/<arena id>` found verbatim in the catalog.
    Dynamic,
    /// Normalized slug match against the catalog.
    Fuzzy,
}

impl MappingSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            MappingSource::Static => "static",
            MappingSource::Dynamic => "dynamic",
            MappingSource::Fuzzy => "fuzzy",
        }
    }
}

impl fmt::Display for MappingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A leaderboard identifier resolved to a gateway identifier.
///
/// Recomputed on every resolution; never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelMapping {
    pub arena_id: String,
    pub gateway_id: String,
    pub source: MappingSource,
    /// Real-world name of a codename model, when its identity is known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl ModelMapping {
    /// `arena_id (Display Name)` for codename models, `arena_id` otherwise.
    pub fn label(&self) -> String {
        match &self.display_name {
            Some(name) => format!("{} ({name})", self.arena_id),
            None => self.arena_id.clone(),
        }
    }
}
