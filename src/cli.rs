//! CLI argument definitions using clap derive macros.

use clap::{Parser, Subcommand};

use paperstats_core::config::{
    DEFAULT_BASE_ORIGIN, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_LISTING_PATH,
    DEFAULT_READ_TIMEOUT_SECS,
};

/// Scrape a paper statistics listing and resolve direct PDF links.
#[derive(Parser, Debug)]
#[command(name = "paperstats")]
#[command(author, version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Origin (scheme + host) serving the listing and detail pages
    #[arg(long, env = "PAPERSTATS_BASE_ORIGIN", default_value = DEFAULT_BASE_ORIGIN, global = true)]
    pub base_origin: String,

    /// Path of the listing page under the base origin
    #[arg(long, default_value = DEFAULT_LISTING_PATH, global = true)]
    pub listing_path: String,

    /// TCP connect timeout in seconds (1-300)
    #[arg(long, default_value_t = DEFAULT_CONNECT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..=300), global = true)]
    pub connect_timeout: u64,

    /// Whole-request timeout in seconds (1-3600)
    #[arg(long, default_value_t = DEFAULT_READ_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..=3600), global = true)]
    pub read_timeout: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one batch and print the records as a JSON array
    Fetch {
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Serve the records over HTTP at GET /api/papers
    Serve {
        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: std::net::IpAddr,

        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = 3000)]
        port: u16,
    },
}
