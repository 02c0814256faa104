//! CLI entry point for the paperstats tool.

use std::io::{self, Write};
use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use paperstats_core::server::{self, AppState};
use paperstats_core::{ListingExtractor, ScraperConfig};
use tracing::{debug, info};

mod cli;

use cli::{Args, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    // stderr keeps `fetch` stdout pure JSON
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    debug!(?args, "CLI arguments parsed");

    let config = ScraperConfig::new(&args.base_origin)?
        .with_listing_path(args.listing_path.clone())
        .with_timeouts(args.connect_timeout, args.read_timeout);
    let extractor = ListingExtractor::new(config)?;

    match args.command {
        Command::Fetch { pretty } => {
            info!(listing_url = %extractor.config().listing_url(), "fetching listing");
            let records = extractor
                .extract_listing()
                .await
                .context("could not fetch paper data")?;

            let json = if pretty {
                serde_json::to_string_pretty(&records)?
            } else {
                serde_json::to_string(&records)?
            };
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
        Command::Serve { host, port } => {
            let addr = SocketAddr::new(host, port);
            server::serve(addr, AppState::new(extractor))
                .await
                .with_context(|| format!("server on {addr} failed"))?;
        }
    }

    Ok(())
}
