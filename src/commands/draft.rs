//! `parcelbook draft` command - offline description template

use parcelbook_core::error::Result;
use parcelbook_core::format::quoted;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_json, print_records_header, wrap_records_body};
use crate::commands::helpers::require_success;

/// Execute the draft command
pub fn execute(ctx: &CommandContext, target: &str) -> Result<()> {
    let (mut session, _) = ctx.session_for(target)?;
    require_success(session.generate_local_draft())?;

    let cadastral = session
        .selected_record()
        .map(|r| r.primary_cadastral())
        .unwrap_or_default();

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "cadastral_number": cadastral,
            "source": "template",
            "draft": session.draft(),
        }))?,
        OutputFormat::Records => {
            print_records_header(
                "draft",
                &[
                    ("cadastral", quoted(&cadastral)),
                    ("source", "template".to_string()),
                ],
            );
            wrap_records_body("draft", session.draft());
        }
        OutputFormat::Human => println!("{}", session.draft()),
    }
    Ok(())
}
