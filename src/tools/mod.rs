//! The four tool operations, rendered as Markdown.
//!
//! Each tool returns `Ok(text)` for everything a caller should read,
//! including "nothing found" outcomes. `Err` is reserved for upstream
//! failures and invalid arguments; turn those into text with
//! [`render_error`].

mod args;
mod render;

pub use args::{
    DEFAULT_LIMIT, LeaderboardArgs, MAX_LIMIT, QueryBestArgs, QuerySpecificArgs, SamplingArgs,
};
pub use render::render_error;

use std::sync::Arc;

use tracing::info;

use crate::gateway::ChatClient;
use crate::resolver::Resolver;
use crate::traits::LeaderboardSource;
use crate::{Category, Result};

use render::Row;

/// Tool entry points over a leaderboard, a resolver and a chat client.
#[derive(Clone)]
pub struct Tools {
    leaderboard: Arc<dyn LeaderboardSource>,
    resolver: Arc<Resolver>,
    chat: Arc<ChatClient>,
}

impl Tools {
    pub fn new(
        leaderboard: Arc<dyn LeaderboardSource>,
        resolver: Arc<Resolver>,
        chat: Arc<ChatClient>,
    ) -> Self {
        Self {
            leaderboard,
            resolver,
            chat,
        }
    }

    /// `get_best_model`: the #1 entry, plus the best resolvable alternative
    /// when #1 has no gateway mapping.
    pub async fn get_best_model(&self, category: Option<Category>) -> Result<String> {
        let category = category.unwrap_or_default();
        let entries = self.leaderboard.fetch(category).await?;
        let Some(top) = entries.first() else {
            return Ok(render::no_models(category));
        };

        let mapping = self.resolver.resolve(&top.model_id).await?;
        let alternative = match mapping {
            Some(_) => None,
            None => self.resolver.first_available(&entries).await?,
        };
        Ok(render::best_model(
            category,
            top,
            mapping.as_ref(),
            alternative.as_ref(),
        ))
    }

    /// `get_leaderboard`: one page of the ranked list.
    pub async fn get_leaderboard(&self, args: LeaderboardArgs) -> Result<String> {
        let (limit, offset) = args.page()?;
        let category = args.category.unwrap_or_default();
        let entries = self.leaderboard.fetch(category).await?;

        let page = entries.iter().skip(offset).take(limit);
        let mut rows = Vec::with_capacity(limit);
        for (i, entry) in page.enumerate() {
            rows.push(Row {
                rank: offset + i + 1,
                entry,
                display_name: self.resolver.display_name(&entry.model_id),
                mapping: self.resolver.resolve(&entry.model_id).await?,
            });
        }
        if rows.is_empty() {
            return Ok(render::no_models_at_offset(category, offset));
        }
        Ok(render::leaderboard_page(category, entries.len(), offset, &rows))
    }

    /// `query_best_model`: route `prompt` to the best-ranked resolvable model.
    pub async fn query_best_model(&self, args: QueryBestArgs) -> Result<String> {
        let options = args.sampling.to_options()?;
        let category = args.category.unwrap_or_default();
        let entries = self.leaderboard.fetch(category).await?;

        let Some(selection) = self.resolver.first_available(&entries).await? else {
            return Ok(render::no_available_models(category));
        };
        info!(
            %category,
            rank = selection.rank,
            gateway_id = %selection.mapping.gateway_id,
            "routing prompt to best available model"
        );

        let completion = self
            .chat
            .complete(&selection.mapping.gateway_id, &args.prompt, &options)
            .await?;
        Ok(render::best_query(category, &selection, &completion))
    }

    /// `query_specific_model`: send `prompt` to a named model.
    ///
    /// A model containing `/` is taken as a gateway id verbatim; anything
    /// else goes through the resolver.
    pub async fn query_specific_model(&self, args: QuerySpecificArgs) -> Result<String> {
        let options = args.sampling.to_options()?;

        let gateway_id = if args.model.contains('/') {
            args.model.clone()
        } else {
            match self.resolver.resolve(&args.model).await? {
                Some(mapping) => mapping.gateway_id,
                None => {
                    return Ok(render::unresolvable_model(
                        &args.model,
                        self.resolver.display_name(&args.model),
                    ));
                }
            }
        };

        let completion = self.chat.complete(&gateway_id, &args.prompt, &options).await?;
        Ok(render::specific_query(&gateway_id, &completion))
    }
}
