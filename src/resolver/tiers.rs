//! Catalog-backed resolution tiers.
//!
//! Each tier is a pure function of the alias table, the arena id and a
//! catalog snapshot. They run in [`CATALOG_TIERS`] order after the static
//! table has missed; the first hit wins.

use std::collections::HashSet;

use crate::types::{GatewayModel, MappingSource};

use super::AliasTable;

/// A catalog tier: returns the matching gateway id, if any.
pub(crate) type CatalogTier = fn(&AliasTable, &str, &[GatewayModel]) -> Option<String>;

/// Catalog tiers in the order they are tried.
pub(crate) const CATALOG_TIERS: [(MappingSource, CatalogTier); 2] = [
    (MappingSource::Dynamic, probe_provider_prefixes),
    (MappingSource::Fuzzy, match_normalized_slug),
];

/// `"<prefix>/<arena_id>"` present verbatim in the catalog, first prefix wins.
pub(crate) fn probe_provider_prefixes(
    table: &AliasTable,
    arena_id: &str,
    catalog: &[GatewayModel],
) -> Option<String> {
    let ids: HashSet<&str> = catalog.iter().map(|m| m.id.as_str()).collect();
    table
        .provider_prefixes()
        .iter()
        .map(|prefix| format!("{prefix}/{arena_id}"))
        .find(|candidate| ids.contains(candidate.as_str()))
}

/// First catalog entry whose normalized slug equals the normalized arena id.
pub(crate) fn match_normalized_slug(
    _table: &AliasTable,
    arena_id: &str,
    catalog: &[GatewayModel],
) -> Option<String> {
    let wanted = normalize(arena_id);
    catalog
        .iter()
        .find(|m| normalize(m.slug()) == wanted)
        .map(|m| m.id.clone())
}

/// Lower-case and drop `-`, `.` and `_`.
pub(crate) fn normalize(id: &str) -> String {
    id.chars()
        .filter(|c| !matches!(c, '-' | '.' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}
