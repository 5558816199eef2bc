//! `parcelbook export` command - RTF document or print-ready page

use std::path::Path;

use chrono::Local;
use parcelbook_core::error::{CatalogError, Result};
use parcelbook_core::export::ExportKind;
use parcelbook_core::session::ActionStatus;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_json_status, print_records_data, print_records_header};
use crate::commands::helpers::require_success;

/// Execute the export command.
///
/// Without `draft` the report carries the saved description as its draft,
/// which is what the editor holds right after selection.
pub fn execute(
    ctx: &CommandContext,
    target: &str,
    kind: ExportKind,
    dir: &Path,
    draft: Option<&str>,
) -> Result<()> {
    let (mut session, _) = ctx.session_for(target)?;
    if let Some(text) = draft {
        session.edit_draft(text);
    }

    let path = match require_success(session.export(kind, dir, &Local::now()))? {
        ActionStatus::Exported(path) => path,
        other => {
            return Err(CatalogError::Other(format!(
                "unexpected export status: {:?}",
                other
            )))
        }
    };

    match ctx.cli.format {
        OutputFormat::Json => print_json_status(
            "exported",
            None,
            &[
                ("kind", json!(kind)),
                ("path", json!(path.display().to_string())),
            ],
        )?,
        OutputFormat::Records => {
            print_records_header("export", &[("kind", kind.to_string())]);
            print_records_data("path", &path.display().to_string());
        }
        OutputFormat::Human => {
            if ctx.cli.quiet {
                println!("{}", path.display());
            } else {
                println!("Exported {} report to {}", kind, path.display());
            }
        }
    }
    Ok(())
}
