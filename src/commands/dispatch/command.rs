//! Command trait and context for dispatching commands

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::cli::Cli;
use borderpath_core::bail_usage;
use borderpath_core::config::BorderpathConfig;
use borderpath_core::dataset::{load_from_path, Dataset, Language};
use borderpath_core::error::Result;
use borderpath_core::graph::{AdjacencyProvider, BoundaryAdjacency, ListAdjacency, PathFinder};

/// Adjacency source chosen on the command line
pub type DynProvider = Box<dyn AdjacencyProvider>;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: BorderpathConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Result<Self> {
        let config = BorderpathConfig::load_or_default(cli.config.as_deref())?;
        debug!(elapsed = ?start.elapsed(), "load_config");
        Ok(Self { cli, config, start })
    }

    /// Name language: `--language`, else the configured one
    pub fn language(&self) -> Language {
        self.cli.language.unwrap_or(self.config.dataset.language)
    }

    pub fn load_dataset(&self) -> Result<Dataset> {
        let Some(path) = self.cli.dataset.as_deref() else {
            bail_usage!("no dataset given; pass --dataset or set BORDERPATH_DATASET");
        };
        let dataset = load_from_path(path, &self.config.dataset)?;
        debug!(
            countries = dataset.len(),
            elapsed = ?self.start.elapsed(),
            "load_dataset"
        );
        Ok(dataset)
    }

    /// `ListAdjacency` when `--adjacency` is given, boundary geometry otherwise
    pub fn provider(&self, dataset: &Dataset) -> Result<DynProvider> {
        match self.cli.adjacency.as_deref() {
            Some(path) => {
                let list = ListAdjacency::load(path)?;
                list.validate_against(dataset)?;
                debug!(entries = list.len(), path = %path.display(), "load_adjacency_list");
                Ok(Box::new(list))
            }
            None => Ok(Box::new(BoundaryAdjacency::from_config(
                &self.config.adjacency,
            ))),
        }
    }

    /// Dataset, provider and finder in one step
    pub fn finder(&self) -> Result<PathFinder<DynProvider>> {
        let dataset = Arc::new(self.load_dataset()?);
        let provider = self.provider(&dataset)?;
        Ok(PathFinder::new(provider, dataset).with_symmetry(self.config.adjacency.symmetry))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("borderpath {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest border-crossing routes between countries.");
        println!();
        println!("Run `borderpath --help` for usage information.");
        Ok(())
    }
}
