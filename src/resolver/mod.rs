//! Leaderboard → gateway identifier resolution.
//!
//! Resolution runs in strictly ordered steps and stops at the first hit:
//!
//! 1. **Exclusion**: unreleased codenames resolve to nothing.
//! 2. **Static table**: curated aliases and deliberate substitutes
//!    ([`AliasTable`]). Tags the mapping [`MappingSource::Static`].
//! 3. **Provider-prefix probe**: `"<prefix>/<arena id>"` present verbatim in
//!    the gateway catalog. Tags [`MappingSource::Dynamic`].
//! 4. **Normalized slug match**: case, `-`, `.` and `_` ignored. Tags
//!    [`MappingSource::Fuzzy`].
//!
//! Steps 1 and 2 never touch the network. The catalog is only requested
//! when they both miss; caching it is the [`CatalogSource`]'s job.
//!
//! A fuzzy match can land on an unrelated model with a similar slug. Add a
//! table alias when that happens.

mod select;
mod table;
mod tiers;

pub use select::Selection;
pub use table::AliasTable;

use std::sync::Arc;

use tracing::debug;

use crate::telemetry;
use crate::traits::CatalogSource;
use crate::types::{GatewayModel, MappingSource, ModelMapping};
use crate::Result;

use tiers::CATALOG_TIERS;

/// Outcome of the steps that need no catalog.
enum Offline {
    Excluded,
    Static(ModelMapping),
    NeedsCatalog,
}

/// Maps leaderboard identifiers to gateway identifiers.
pub struct Resolver {
    table: Arc<AliasTable>,
    catalog: Arc<dyn CatalogSource>,
}

impl Resolver {
    /// Resolver using the compiled-in alias table.
    pub fn new(catalog: Arc<dyn CatalogSource>) -> Self {
        Self::with_table(catalog, AliasTable::embedded())
    }

    pub fn with_table(catalog: Arc<dyn CatalogSource>, table: AliasTable) -> Self {
        Self {
            table: Arc::new(table),
            catalog,
        }
    }

    pub fn table(&self) -> &AliasTable {
        &self.table
    }

    /// Real-world name of a codename model, if known.
    pub fn display_name(&self, arena_id: &str) -> Option<&str> {
        self.table.display_name(arena_id)
    }

    /// Resolve `arena_id`, fetching the catalog only if the table misses.
    ///
    /// `Ok(None)` means no mapping exists. Errors only come from the catalog
    /// fetch.
    pub async fn resolve(&self, arena_id: &str) -> Result<Option<ModelMapping>> {
        let mapping = match self.resolve_offline(arena_id) {
            Offline::Excluded => {
                debug!(arena_id, "unreleased codename, not resolving");
                record("excluded");
                return Ok(None);
            }
            Offline::Static(mapping) => Some(mapping),
            Offline::NeedsCatalog => {
                let catalog = self.catalog.list().await?;
                self.resolve_with_catalog(arena_id, &catalog)
            }
        };

        match &mapping {
            Some(m) => {
                debug!(arena_id, gateway_id = %m.gateway_id, source = %m.source, "resolved");
                record(m.source.as_str());
            }
            None => {
                debug!(arena_id, "no gateway mapping");
                record("none");
            }
        }
        Ok(mapping)
    }

    /// Resolve against a given catalog snapshot without any I/O.
    pub fn resolve_against(&self, arena_id: &str, catalog: &[GatewayModel]) -> Option<ModelMapping> {
        match self.resolve_offline(arena_id) {
            Offline::Excluded => None,
            Offline::Static(mapping) => Some(mapping),
            Offline::NeedsCatalog => self.resolve_with_catalog(arena_id, catalog),
        }
    }

    fn resolve_offline(&self, arena_id: &str) -> Offline {
        if self.table.is_unreleased(arena_id) {
            return Offline::Excluded;
        }
        match self.table.lookup(arena_id) {
            Some(gateway_id) => {
                Offline::Static(self.mapping(arena_id, gateway_id, MappingSource::Static))
            }
            None => Offline::NeedsCatalog,
        }
    }

    fn resolve_with_catalog(&self, arena_id: &str, catalog: &[GatewayModel]) -> Option<ModelMapping> {
        CATALOG_TIERS.iter().find_map(|(source, tier)| {
            tier(self.table.as_ref(), arena_id, catalog)
                .map(|gateway_id| self.mapping(arena_id, &gateway_id, *source))
        })
    }

    fn mapping(&self, arena_id: &str, gateway_id: &str, source: MappingSource) -> ModelMapping {
        ModelMapping {
            arena_id: arena_id.to_string(),
            gateway_id: gateway_id.to_string(),
            source,
            display_name: self.table.display_name(arena_id).map(str::to_string),
        }
    }
}

fn record(source: &'static str) {
    metrics::counter!(telemetry::RESOLUTIONS_TOTAL, "source" => source).increment(1);
}
