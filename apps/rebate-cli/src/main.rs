//! # rebate
//!
//! Calculates one rebate for one product and prints the outcome.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  env (CliConfig) + flags (clap)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DataStore ← --catalog / REBATE_CATALOG_PATH / bundled sample          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  RebateEngine::calculate                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  stdout: text or JSON          exit: 0 applied, 1 not applied, 2 error │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```bash
//! rebate --rebate REB003 --product PROD001 --volume 3
//! rebate --rebate REB004 --product PROD001 --volume 2 --json
//! REBATE_CATALOG_PATH=./catalog.json rebate --rebate CASH --product WIDGET
//! ```

mod config;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use rebate_core::{CalculateRebateRequest, Decimal, RebateEngine};
use rebate_db::DataStore;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

/// Rebate calculation engine.
#[derive(Debug, Parser)]
#[command(name = "rebate", version, about = "Calculate a rebate for a product")]
struct Cli {
    /// Rebate identifier
    #[arg(long)]
    rebate: String,

    /// Product identifier
    #[arg(long)]
    product: String,

    /// Units of product (decimal)
    #[arg(long, default_value = "1", allow_negative_numbers = true)]
    volume: Decimal,

    /// Catalog JSON file (overrides REBATE_CATALOG_PATH; default: bundled sample)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether the rebate was applied.
fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = CliConfig::load()
        .context("Failed to load configuration")?
        .with_catalog(cli.catalog);

    init_tracing(&config.log_filter);

    let store = match &config.catalog_path {
        Some(path) => DataStore::open(path)
            .with_context(|| format!("Failed to open catalog {}", path.display()))?,
        None => {
            debug!("No catalog given, using bundled sample");
            DataStore::sample()
        }
    };

    let engine = RebateEngine::new(Arc::new(store.rebates()), Arc::new(store.products()));
    debug!(rules = ?engine.registry(), "Engine ready");
    let request = CalculateRebateRequest::new(cli.rebate, cli.product, cli.volume);

    let result = engine
        .calculate(&request)
        .context("Rebate calculation failed")?;

    let rendered = if cli.json {
        output::render_json(&request, &result)?
    } else {
        output::render_text(&request, &result)
    };
    println!("{rendered}");

    info!(
        success = result.is_success(),
        recorded = store.calculations().count()?,
        "Done"
    );
    Ok(result.is_success())
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG` wins when set
/// - Otherwise `REBATE_LOG_LEVEL`, default `info,rebate=debug`
///
/// Logs go to stderr so stdout carries only the result.
fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_flags() {
        let cli = Cli::try_parse_from([
            "rebate", "--rebate", "REB002", "--product", "PROD001", "--volume", "2.5", "--json",
        ])
        .unwrap();

        assert_eq!(cli.rebate, "REB002");
        assert_eq!(cli.volume, Decimal::new(25, 1));
        assert!(cli.json);
        assert!(cli.catalog.is_none());
    }

    #[test]
    fn test_volume_defaults_to_one() {
        let cli = Cli::try_parse_from(["rebate", "--rebate", "R", "--product", "P"]).unwrap();
        assert_eq!(cli.volume, Decimal::ONE);
    }

    #[test]
    fn test_rejects_bad_volume() {
        let result = Cli::try_parse_from([
            "rebate", "--rebate", "R", "--product", "P", "--volume", "lots",
        ]);
        assert!(result.is_err());
    }
}
