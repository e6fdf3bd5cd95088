//! Markdown rendering for tool results.

use std::fmt::Write as _;

use crate::resolver::Selection;
use crate::types::{ChatCompletion, LeaderboardEntry, ModelMapping};
use crate::{Category, RouterError};

const EMPTY_RESPONSE: &str = "(empty response)";

/// One row of a leaderboard page.
pub(crate) struct Row<'a> {
    pub rank: usize,
    pub entry: &'a LeaderboardEntry,
    pub display_name: Option<&'a str>,
    pub mapping: Option<ModelMapping>,
}

/// Text shown at the tool boundary for a failed call.
pub fn render_error(error: &RouterError) -> String {
    format!("Error: {error}")
}

pub(crate) fn no_models(category: Category) -> String {
    format!("No models found for category \"{}\".", category.display_name())
}

pub(crate) fn no_models_at_offset(category: Category, offset: usize) -> String {
    format!(
        "No models found for category \"{}\" at offset {offset}.",
        category.display_name()
    )
}

pub(crate) fn no_available_models(category: Category) -> String {
    format!(
        "No models available on OpenRouter for category \"{}\".",
        category.display_name()
    )
}

pub(crate) fn unresolvable_model(model: &str, display_name: Option<&str>) -> String {
    match display_name {
        Some(name) => format!(
            "\"{model}\" ({name}) is not yet available on OpenRouter. \
             Try using a direct OpenRouter ID (e.g. \"provider/model-name\")."
        ),
        None => format!(
            "Could not find OpenRouter mapping for model \"{model}\". \
             This model may be a codename or unreleased. \
             Try using a direct OpenRouter ID (e.g. \"provider/model-name\")."
        ),
    }
}

pub(crate) fn best_model(
    category: Category,
    top: &LeaderboardEntry,
    mapping: Option<&ModelMapping>,
    alternative: Option<&Selection>,
) -> String {
    let mut out = heading("Best Design Model", category);
    let _ = writeln!(out, "**#1: {}**", top.model_id);
    let _ = writeln!(out, "- Elo: {}", top.elo);
    let _ = writeln!(out, "- Win Rate: {}%", top.win_rate);
    let _ = writeln!(out, "- Battles: {}", top.battles);

    match mapping {
        Some(mapping) => {
            let _ = writeln!(out, "- OpenRouter ID: `{}`", mapping.gateway_id);
            out.push('\n');
            out.push_str(
                "This model is available on OpenRouter. Use `query_best_model` to send it a prompt.",
            );
        }
        None => {
            out.push_str("- OpenRouter ID: Not available (codename/unreleased model)");
            if let Some(alt) = alternative {
                let _ = write!(
                    out,
                    "\n\n**Best available alternative: #{} {}**\n",
                    alt.rank, alt.entry.model_id
                );
                let _ = writeln!(out, "- Elo: {}", alt.entry.elo);
                let _ = writeln!(out, "- Win Rate: {}%", alt.entry.win_rate);
                let _ = writeln!(out, "- OpenRouter ID: `{}`", alt.mapping.gateway_id);
                out.push('\n');
                out.push_str(
                    "Use `query_best_model` to automatically route to the best available model.",
                );
            }
        }
    }
    out
}

pub(crate) fn leaderboard_page(
    category: Category,
    total: usize,
    offset: usize,
    rows: &[Row<'_>],
) -> String {
    let mut out = heading("Design Arena Leaderboard", category);
    let _ = writeln!(out, "Showing {}–{} of {total}", offset + 1, offset + rows.len());
    out.push('\n');
    out.push_str("| Rank | Model | Elo | Win Rate | Battles | OpenRouter ID |\n");
    out.push_str("|------|-------|-----|----------|---------|---------------|");

    for row in rows {
        let model = match row.display_name {
            Some(name) => format!("{} ({name})", row.entry.model_id),
            None => row.entry.model_id.clone(),
        };
        let gateway_id = match &row.mapping {
            Some(m) => format!("`{}`", m.gateway_id),
            None => "—".to_string(),
        };
        let _ = write!(
            out,
            "\n| {} | {model} | {} | {}% | {} | {gateway_id} |",
            row.rank, row.entry.elo, row.entry.win_rate, row.entry.battles
        );
    }
    out
}

pub(crate) fn best_query(
    category: Category,
    selection: &Selection,
    completion: &ChatCompletion,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "**Model:** {} (#{} in {})",
        selection.mapping.label(),
        selection.rank,
        category.display_name()
    );
    let _ = writeln!(out, "**Category:** {}", category.description());
    let _ = writeln!(out, "**OpenRouter ID:** `{}`", selection.mapping.gateway_id);
    let _ = writeln!(
        out,
        "**Elo:** {} | **Win Rate:** {}%",
        selection.entry.elo, selection.entry.win_rate
    );
    body(out, completion)
}

pub(crate) fn specific_query(gateway_id: &str, completion: &ChatCompletion) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "**Model:** `{gateway_id}`");
    body(out, completion)
}

fn heading(title: &str, category: Category) -> String {
    format!(
        "## {title} — {}\n> {}\n\n",
        category.display_name(),
        category.description()
    )
}

/// Usage line, separator, then the completion text.
fn body(mut out: String, completion: &ChatCompletion) -> String {
    if let Some(usage) = completion.usage {
        let _ = writeln!(
            out,
            "**Tokens:** {} prompt + {} completion",
            usage.prompt_tokens, usage.completion_tokens
        );
    }
    out.push_str("\n---\n\n");
    out.push_str(completion.content().unwrap_or(EMPTY_RESPONSE));
    out
}
