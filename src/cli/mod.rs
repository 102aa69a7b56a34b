//! CLI argument parsing for borderpath
//!
//! Global flags: --dataset, --adjacency, --config, --language, --format,
//! --quiet, --verbose, --log-level, --log-json

pub mod format;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use borderpath_core::dataset::Language;
pub use borderpath_core::format::OutputFormat;
use parse::{parse_format, parse_language};

/// Borderpath - shortest border-crossing routes between countries
#[derive(Parser, Debug)]
#[command(name = "borderpath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// GeoJSON country dataset (Natural Earth admin-0 layout)
    #[arg(long, global = true, env = "BORDERPATH_DATASET")]
    pub dataset: Option<PathBuf>,

    /// Precomputed adjacency list (JSON) used instead of boundary geometry
    #[arg(long, global = true)]
    pub adjacency: Option<PathBuf>,

    /// Config file (defaults to ~/.config/borderpath/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Language for country names, e.g. NAME_DE or de
    #[arg(long, global = true, value_parser = parse_language)]
    pub language: Option<Language>,

    /// Output format
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the shortest route between two countries
    Path {
        /// Start country (id or name)
        from: String,

        /// Destination country (id or name)
        to: String,

        /// Minimize travel distance between country centroids instead of
        /// the number of border crossings
        #[arg(long)]
        weighted: bool,
    },

    /// List the countries bordering a country
    Neighbors {
        /// Country id or name
        country: String,
    },

    /// List country identifiers and names
    Countries,

    /// Dump the full adjacency graph
    Graph,
}
