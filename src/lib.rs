//! bench-router - route prompts to the best-ranked design model
//!
//! This crate reads a public design-benchmark leaderboard, maps its model
//! names onto the identifiers an OpenRouter-compatible inference gateway
//! accepts, and sends prompts to the best-ranked model that is actually
//! available there. Leaderboards and the gateway catalog are cached with
//! fixed TTLs so repeated calls do not hammer either upstream.
//!
//! # Example
//!
//! ```rust,no_run
//! use bench_router::{Category, Router};
//! use bench_router::tools::QueryBestArgs;
//!
//! #[tokio::main]
//! async fn main() -> bench_router::Result<()> {
//!     let router = Router::builder()
//!         .api_key("sk-or-your-key")
//!         .build()?;
//!
//!     println!("{}", router.tools().get_best_model(Some(Category::Website)).await?);
//!
//!     let answer = router
//!         .tools()
//!         .query_best_model(QueryBestArgs {
//!             prompt: "A landing page for a bakery".to_string(),
//!             category: Some(Category::Website),
//!             sampling: Default::default(),
//!         })
//!         .await?;
//!     println!("{answer}");
//!     Ok(())
//! }
//! ```
//!
//! # Resolving without the network
//!
//! ```rust
//! use std::sync::Arc;
//! use bench_router::{GatewayModel, MappingSource, Resolver};
//! use bench_router::gateway::CatalogClient;
//!
//! let resolver = Resolver::new(Arc::new(CatalogClient::new()));
//! let catalog = vec![GatewayModel::new("google/gemini-3-pro-preview", "Gemini 3 Pro Preview")];
//!
//! let mapping = resolver.resolve_against("riftrunner", &catalog).unwrap();
//! assert_eq!(mapping.gateway_id, "google/gemini-3-pro-preview");
//! assert_eq!(mapping.source, MappingSource::Static);
//! assert!(resolver.resolve_against("obsidian", &catalog).is_none());
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod gateway;
pub mod leaderboard;
pub mod resolver;
pub mod router;
pub mod telemetry;
pub mod tools;
pub mod traits;
pub mod types;
mod upstream;

// Re-export main types at crate root
pub use error::{Result, RouterError, Upstream};
pub use resolver::{AliasTable, Resolver, Selection};
pub use router::{Router, RouterBuilder};
pub use traits::{CatalogSource, LeaderboardSource};

// Re-export all types
pub use types::{
    Category, ChatChoice, ChatCompletion, ChatMessage, CompletionOptions, GatewayModel,
    GatewayPricing, LeaderboardEntry, MappingSource, ModelMapping, Usage,
};
