//! Command dispatch logic for borderpath

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use borderpath_core::config::global::source_display;
use borderpath_core::error::Result;
use tracing::debug;

mod command;

pub use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    if cli.config.is_none() {
        debug!(source = %source_display(), "config_source");
    }

    let ctx = CommandContext::new(cli, start)?;

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Path { from, to, weighted } => {
                commands::path::execute(ctx, from, to, *weighted)
            }
            Commands::Neighbors { country } => commands::neighbors::execute(ctx, country),
            Commands::Countries => commands::countries::execute(ctx),
            Commands::Graph => commands::graph::execute(ctx),
        }
    }
}
