//! Command dispatch logic for parcelbook

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use parcelbook_core::error::{CatalogError, Result};
use tracing::debug;

mod command;
mod commands;
pub mod handlers;
mod macros;

pub(crate) use command::CommandContext;
use command::{Command, NoCommand};
pub(crate) use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let cwd: PathBuf = env::current_dir()
        .map_err(|e| CatalogError::io_operation("read", "current directory", e))?;

    debug!(elapsed = ?start.elapsed(), cwd = %cwd.display(), "resolve_cwd");

    let ctx = CommandContext::new(cli, cwd, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
