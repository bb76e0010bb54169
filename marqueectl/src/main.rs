//! # marqueectl
//!
//! Drives the Marquee aggregation core from the command line.
//!
//! - `aggregate` resolves the hero and every configured row and prints the
//!   resulting home layout as JSON.
//! - `resolve` looks up ad-hoc search terms through one lookup session.
//! - `poster` rewrites a poster URL to its high-resolution variant.
//! - `config` prints the effective configuration and its warnings.

mod progress;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use marquee_config::{ConfigLoad, ConfigLoader, ConfigWarnings};
use marquee_core::{
    Aggregator, MovieResolver, hi_res_poster_url,
    providers::{CatalogClient, OmdbApiProvider},
};
use marquee_model::SearchTerm;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::progress::ProgressObserver;

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "marqueectl", version)]
#[command(about = "Build a movie home page layout from the OMDb catalog")]
struct Cli {
    /// Log at debug level (RUST_LOG still wins when set)
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve the hero and all configured rows, then print the layout as JSON
    Aggregate {
        #[command(flatten)]
        config: ConfigArgs,

        /// Pretty-print the JSON output
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
    /// Resolve search terms through one lookup session and print the records
    Resolve {
        #[command(flatten)]
        config: ConfigArgs,

        /// Search terms, resolved in order
        #[arg(required = true)]
        terms: Vec<String>,
    },
    /// Print the high-resolution variant of a poster URL (no network access)
    Poster {
        /// Poster URL as returned by the catalog
        url: String,
    },
    /// Print the effective configuration as TOML (API key redacted)
    Config {
        #[command(flatten)]
        config: ConfigArgs,
    },
}

#[derive(ClapArgs, Debug, Clone)]
struct ConfigArgs {
    /// Config file (TOML or JSON); overrides MARQUEE_CONFIG_PATH and the default files
    #[arg(long = "config", value_name = "PATH")]
    path: Option<PathBuf>,
}

impl ConfigArgs {
    fn load(&self) -> anyhow::Result<ConfigLoad> {
        let mut loader = ConfigLoader::new();
        if let Some(path) = self.path.as_ref() {
            loader = loader.with_path(path.clone());
        }
        let load = loader.load().context("failed to load configuration")?;
        log_warnings(&load.warnings);
        Ok(load)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Aggregate { config, pretty } => aggregate(&config, pretty).await,
        Command::Resolve { config, terms } => resolve(&config, terms).await,
        Command::Poster { url } => {
            println!("{}", hi_res_poster_url(&url));
            Ok(())
        }
        Command::Config { config } => show_config(&config),
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "debug,reqwest=info,hyper=info"
    } else {
        "info,marquee_core=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn log_warnings(warnings: &ConfigWarnings) {
    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => warn!(message = %warning.message, "configuration warning"),
        }
    }
}

fn catalog_client(load: &ConfigLoad) -> anyhow::Result<Arc<dyn CatalogClient>> {
    let settings = load
        .config
        .omdb_settings()
        .context("invalid catalog settings")?;
    let provider =
        OmdbApiProvider::new(settings).context("failed to build OMDb client")?;
    Ok(Arc::new(provider))
}

async fn aggregate(args: &ConfigArgs, pretty: bool) -> anyhow::Result<()> {
    let load = args.load()?;
    info!(source = %load.source, "building home layout");

    let mut aggregator =
        Aggregator::new(catalog_client(&load)?, load.config.row_cap);
    let mut observer = ProgressObserver::default();
    let layout = aggregator
        .aggregate(&load.config.aggregate_request(), &mut observer)
        .await;

    print_json(&layout, pretty)
}

async fn resolve(args: &ConfigArgs, terms: Vec<String>) -> anyhow::Result<()> {
    let load = args.load()?;
    let mut resolver = MovieResolver::new(catalog_client(&load)?);

    let mut resolved = Vec::with_capacity(terms.len());
    for term in terms.into_iter().map(SearchTerm::new) {
        let record = resolver.resolve(&term).await;
        if record.is_none() {
            warn!(term = %term, "no record for search term");
        }
        resolved.push(ResolvedTerm { term, record });
    }

    let stats = resolver.stats();
    info!(
        resolved = stats.resolved,
        cache_hits = stats.cache_hits,
        unresolved = stats.unresolved,
        "resolution finished"
    );
    print_json(&resolved, true)
}

#[derive(Serialize)]
struct ResolvedTerm {
    term: SearchTerm,
    record: Option<Arc<marquee_model::MovieRecord>>,
}

fn show_config(args: &ConfigArgs) -> anyhow::Result<()> {
    let load = args.load()?;
    eprintln!("# source: {}", load.source);
    let rendered = load
        .config
        .to_toml_redacted()
        .context("failed to render configuration")?;
    print!("{rendered}");
    Ok(())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("failed to serialize output")?;
    println!("{rendered}");
    Ok(())
}
