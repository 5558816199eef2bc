//! Command implementations for all parcelbook commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use parcelbook_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        dispatch_command::execute(self, ctx)
    }
}

pub(super) mod dispatch_command {
    use super::*;

    use crate::commands::dispatch::handlers;

    pub(super) fn execute(cmd: &Commands, ctx: &CommandContext) -> Result<()> {
        match cmd {
            Commands::Regions => handlers::handle_regions(ctx),
            Commands::List(args) => handlers::handle_list(ctx, args),
            Commands::Show(args) => handlers::handle_show(ctx, &args.target),
            Commands::Note { command } => handlers::handle_note(ctx, command),
            Commands::Draft(args) => handlers::handle_draft(ctx, &args.target),
            Commands::Describe(args) => handlers::handle_describe(ctx, args),
            Commands::Export(args) => handlers::handle_export(ctx, args),
            Commands::Link(args) => handlers::handle_link(ctx, &args.target),
            Commands::Browse(args) => handlers::handle_browse(ctx, args),
        }
    }
}
