//! bench-router CLI
//!
//! Runs the router's tool operations from the command line.

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args as ClapArgs, Parser, Subcommand};
use bench_router::config::{Config, Secrets};
use bench_router::tools::{
    LeaderboardArgs, QueryBestArgs, QuerySpecificArgs, SamplingArgs, render_error,
};
use bench_router::{Category, Router, RouterError};

/// Route prompts to the best-ranked design model
#[derive(Parser)]
#[command(name = "bench-router")]
#[command(version)]
#[command(about = "Design leaderboard lookups and prompt routing")]
struct Args {
    /// Config file (default: ~/.bench-router/config.toml if present)
    #[arg(short, long, env = "BENCH_ROUTER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the top-ranked model for a category
    Best {
        #[arg(short, long, help = Category::options_help("Design category"))]
        category: Option<Category>,
    },

    /// Show a page of the leaderboard
    Leaderboard {
        #[arg(short, long, help = Category::options_help("Design category"))]
        category: Option<Category>,
        /// Number of entries to show (1-50)
        #[arg(short, long)]
        limit: Option<usize>,
        /// Number of entries to skip
        #[arg(short, long)]
        offset: Option<usize>,
    },

    /// Send a prompt to the best available model for a category
    Query {
        /// Prompt (or omit to read from stdin)
        prompt: Option<String>,
        #[arg(short, long, help = Category::options_help("Category to select the best model from"))]
        category: Option<Category>,
        #[command(flatten)]
        sampling: Sampling,
    },

    /// Send a prompt to a specific model
    Ask {
        /// Gateway id ("provider/model") or leaderboard model name
        #[arg(short, long)]
        model: String,
        /// Prompt (or omit to read from stdin)
        prompt: Option<String>,
        #[command(flatten)]
        sampling: Sampling,
    },
}

#[derive(ClapArgs)]
struct Sampling {
    /// Maximum tokens in the response
    #[arg(long)]
    max_tokens: Option<u32>,
    /// Sampling temperature (0-2)
    #[arg(long)]
    temperature: Option<f32>,
}

impl From<Sampling> for SamplingArgs {
    fn from(s: Sampling) -> Self {
        SamplingArgs {
            max_tokens: s.max_tokens,
            temperature: s.temperature,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    match run(args).await {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", render_error(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> bench_router::Result<String> {
    let config = Config::load(args.config.as_deref())?;
    let secrets = Secrets::load()?;
    let router = Router::from_config(&config, &secrets)?;
    let tools = router.tools();

    match args.command {
        Command::Best { category } => tools.get_best_model(category).await,
        Command::Leaderboard {
            category,
            limit,
            offset,
        } => {
            tools
                .get_leaderboard(LeaderboardArgs {
                    category,
                    limit,
                    offset,
                })
                .await
        }
        Command::Query {
            prompt,
            category,
            sampling,
        } => {
            tools
                .query_best_model(QueryBestArgs {
                    prompt: resolve_prompt(prompt, "query")?,
                    category,
                    sampling: sampling.into(),
                })
                .await
        }
        Command::Ask {
            model,
            prompt,
            sampling,
        } => {
            tools
                .query_specific_model(QuerySpecificArgs {
                    prompt: resolve_prompt(prompt, "ask")?,
                    model,
                    sampling: sampling.into(),
                })
                .await
        }
    }
}

/// Resolve the prompt from an optional CLI argument and/or stdin.
///
/// - arg only → arg
/// - stdin only → stdin
/// - both → `"{arg}\n\n{stdin}"`
/// - neither → error
fn resolve_prompt(arg: Option<String>, command: &str) -> bench_router::Result<String> {
    let stdin_text = if io::stdin().is_terminal() {
        None
    } else {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(|e| {
            RouterError::InvalidInput(format!("{command}: failed to read stdin: {e}"))
        })?;
        let trimmed = buf.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    };

    match (arg, stdin_text) {
        (Some(a), Some(s)) => Ok(format!("{a}\n\n{s}")),
        (Some(a), None) => Ok(a),
        (None, Some(s)) => Ok(s),
        (None, None) => Err(RouterError::InvalidInput(format!(
            "{command}: no prompt provided (pass it as an argument or via stdin)"
        ))),
    }
}
