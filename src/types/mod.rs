//! Core types for bench-router

mod category;
mod chat;
mod leaderboard;
mod model;

pub use category::Category;
pub use chat::{ChatChoice, ChatCompletion, ChatMessage, CompletionOptions, Usage};
pub use leaderboard::LeaderboardEntry;
pub use model::{GatewayModel, GatewayPricing, MappingSource, ModelMapping};

pub(crate) use chat::{ChatRequest, ChatRequestMessage};
pub(crate) use leaderboard::{LeaderboardRequest, LeaderboardResponse, sort_by_elo};
pub(crate) use model::CatalogResponse;
