//! Command handlers: option plumbing between parsed arguments and commands

use std::fs;
use std::path::Path;

use crate::cli::{BrowseArgs, DescribeArgs, ExportArgs, ListArgs, NoteCommands};
use crate::commands;
use parcelbook_core::error::{CatalogError, Result};

use super::command::CommandContext;
use super::trace_command;

pub(super) fn handle_regions(ctx: &CommandContext) -> Result<()> {
    let result = commands::regions::execute(ctx);
    trace_command!(ctx.cli, ctx.start, "regions");
    result
}

pub(super) fn handle_list(ctx: &CommandContext, args: &ListArgs) -> Result<()> {
    if args.pages == 0 {
        return Err(CatalogError::invalid_value("page count", args.pages));
    }
    let result = commands::list::execute(ctx, &args.filters, args.pages);
    trace_command!(ctx.cli, ctx.start, "list");
    result
}

pub(super) fn handle_show(ctx: &CommandContext, target: &str) -> Result<()> {
    let result = commands::show::execute(ctx, target);
    trace_command!(ctx.cli, ctx.start, "show");
    result
}

pub(super) fn handle_note(ctx: &CommandContext, command: &NoteCommands) -> Result<()> {
    let result = match command {
        NoteCommands::Get(args) => commands::note::execute_get(ctx, &args.target),
        NoteCommands::Set(args) => {
            let description = match (&args.description, &args.description_file) {
                (Some(text), _) => Some(text.clone()),
                (None, Some(path)) => {
                    Some(read_text_file(&ctx.cwd.join(path), "description")?)
                }
                (None, None) => None,
            };
            if description.is_none() && args.link.is_none() {
                return Err(CatalogError::UsageError(
                    "nothing to save: pass --description, --description-file, or --link"
                        .to_string(),
                ));
            }
            commands::note::execute_set(
                ctx,
                &args.target,
                description.as_deref(),
                args.link.as_deref(),
            )
        }
    };
    trace_command!(ctx.cli, ctx.start, "note");
    result
}

pub(super) fn handle_draft(ctx: &CommandContext, target: &str) -> Result<()> {
    let result = commands::draft::execute(ctx, target);
    trace_command!(ctx.cli, ctx.start, "draft");
    result
}

pub(super) fn handle_describe(ctx: &CommandContext, args: &DescribeArgs) -> Result<()> {
    let result =
        commands::describe::execute(ctx, &args.target, args.instruction.as_deref(), args.save);
    trace_command!(ctx.cli, ctx.start, "describe");
    result
}

pub(super) fn handle_export(ctx: &CommandContext, args: &ExportArgs) -> Result<()> {
    let draft = match (&args.draft, &args.draft_file) {
        (Some(text), _) => Some(text.clone()),
        (None, Some(path)) => Some(read_text_file(&ctx.cwd.join(path), "draft")?),
        (None, None) => None,
    };
    let dir = match &args.output {
        Some(dir) => ctx.cwd.join(dir),
        None => ctx.cwd.clone(),
    };
    let result = commands::export::execute(ctx, &args.target, args.kind, &dir, draft.as_deref());
    trace_command!(ctx.cli, ctx.start, "export");
    result
}

pub(super) fn handle_link(ctx: &CommandContext, target: &str) -> Result<()> {
    let result = commands::link::execute(ctx, target);
    trace_command!(ctx.cli, ctx.start, "link");
    result
}

pub(super) fn handle_browse(ctx: &CommandContext, args: &BrowseArgs) -> Result<()> {
    let export_dir = match &args.export_dir {
        Some(dir) => ctx.cwd.join(dir),
        None => ctx.cwd.clone(),
    };
    let result = match &args.script {
        Some(path) => {
            let script = read_text_file(&ctx.cwd.join(path), "script")?;
            commands::browse::execute(ctx, script.as_bytes(), &export_dir)
        }
        None => commands::browse::execute(ctx, std::io::stdin().lock(), &export_dir),
    };
    trace_command!(ctx.cli, ctx.start, "browse");
    result
}

fn read_text_file(path: &Path, what: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| CatalogError::io_operation(&format!("read {} file", what), path.display(), e))
}
