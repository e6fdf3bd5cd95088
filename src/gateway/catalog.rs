//! Gateway model catalog client.
//!
//! Fetches `GET {base}/models` and keeps the result in a single-slot
//! [`TtlCache`] for [`CATALOG_TTL`]. Only the `{ "data": [...] }` envelope is
//! checked; the entries are taken as the gateway returns them.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

use crate::cache::{CATALOG_TTL, Clock, SystemClock, TtlCache};
use crate::error::Upstream;
use crate::traits::CatalogSource;
use crate::types::{CatalogResponse, GatewayModel};
use crate::upstream::{self, ErrorBody};
use crate::Result;

use super::DEFAULT_BASE_URL;

/// Cached client for the gateway's model list.
pub struct CatalogClient {
    http: Client,
    base_url: String,
    cache: TtlCache<(), Vec<GatewayModel>>,
}

impl CatalogClient {
    /// Client for the public gateway endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client with a custom base URL (for testing with wiremock).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::from_parts(Client::new(), base_url, Arc::new(SystemClock))
    }

    /// Client sharing an HTTP pool and a clock with the rest of the router.
    pub fn from_parts(http: Client, base_url: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cache: TtlCache::new("catalog", CATALOG_TTL, clock),
        }
    }

    /// The full catalog, fetched on a cold or expired cache.
    pub async fn list(&self) -> Result<Arc<Vec<GatewayModel>>> {
        self.cache.get_or_refresh((), || self.fetch()).await
    }

    /// Drop the cached catalog so the next [`list`](Self::list) refetches.
    pub fn clear(&self) {
        self.cache.clear();
    }

    async fn fetch(&self) -> Result<Vec<GatewayModel>> {
        let url = format!("{}/models", self.base_url);
        info!(%url, "fetching gateway catalog");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| upstream::transport_error(Upstream::Catalog, e))?;

        let catalog: CatalogResponse =
            upstream::decode(Upstream::Catalog, response, ErrorBody::Omit).await?;
        info!(count = catalog.data.len(), "gateway catalog refreshed");
        Ok(catalog.data)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn list(&self) -> Result<Arc<Vec<GatewayModel>>> {
        CatalogClient::list(self).await
    }
}
