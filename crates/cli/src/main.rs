//! # Pokedex
//!
//! Command-line front end for the Pokedex SDK: fetch single resources or
//! page through whole collections of the upstream catalog.

mod bootstrap;
mod commands;

use bootstrap::{init_logging, load_config};
use clap::{Parser, Subcommand};
use pokedex_domain::{CliOverrides, ResourceKind};
use pokedex_infrastructure::PokedexClient;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "pokedex")]
#[command(version)]
#[command(about = "Cached, paginated client for the Pokédex catalog")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<String>,

    /// Upstream base URL (overrides the config file)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Per-request deadline in milliseconds
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    /// Log level: trace, debug, info, warn, error
    #[arg(short = 'l', long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch one resource by id or name
    Get {
        /// nature, pokemon or stat
        kind: ResourceKind,

        /// Numeric id or name
        reference: String,

        /// Fetch the resource again this many times, then print cache stats
        #[arg(short, long, default_value = "0")]
        repeat: u32,
    },

    /// Walk a collection page by page
    List {
        /// nature, pokemon or stat
        kind: ResourceKind,

        /// Resources per page; each page resolves this many details concurrently
        #[arg(short, long, default_value = "20")]
        page_size: u32,

        /// Stop after this many pages
        #[arg(short, long)]
        max_pages: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        base_url: cli.base_url.clone(),
        timeout_ms: cli.timeout_ms,
        log_level: cli.log_level.clone(),
    };

    let config = load_config(cli.config.as_deref(), overrides)?;
    init_logging(&config);

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        base_url = %config.client.base_url,
        timeout_ms = config.client.timeout_ms,
        cache_max_cost_bytes = config.cache.max_cost_bytes,
        cache_ttl_secs = config.cache.ttl_secs,
        "Configuration loaded"
    );

    let client = PokedexClient::new(&config)?;

    let cancel = CancellationToken::new();
    let interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, cancelling in-flight requests");
            interrupt.cancel();
        }
    });

    let result = match cli.command {
        Command::Get {
            kind,
            reference,
            repeat,
        } => commands::get::run(&client, kind, &reference, repeat, &cancel).await,
        Command::List {
            kind,
            page_size,
            max_pages,
        } => commands::list::run(&client, kind, page_size, max_pages, &cancel).await,
    };

    client.close();
    result
}
