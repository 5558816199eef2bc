//! `parcelbook describe` command - AI-generated description
//!
//! The generated text replaces the draft only; `--save` stores it as
//! the parcel description afterwards.

use parcelbook_core::ai::DescribeError;
use parcelbook_core::error::{CatalogError, Result};
use parcelbook_core::format::quoted;
use parcelbook_core::session::ActionStatus;
use serde_json::json;
use tracing::debug;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_json, print_records_header, wrap_records_body};
use crate::commands::helpers::require_success;

/// Execute the describe command
pub fn execute(
    ctx: &CommandContext,
    target: &str,
    instruction: Option<&str>,
    save: bool,
) -> Result<()> {
    let (mut session, _) = ctx.session_for(target)?;

    let ticket = match session.begin_generate(instruction) {
        Ok(ticket) => ticket,
        Err(ActionStatus::Unavailable) => return Err(DescribeError::NotConfigured.into()),
        Err(status) => {
            require_success(status)?;
            return Err(CatalogError::Other("AI description refused".to_string()));
        }
    };

    let result = session.run_describe(&ticket);
    let failure = result.as_ref().err().cloned();
    let status = session.complete_generate(ticket, result);
    debug!(status = ?status, "describe_complete");
    if let Some(err) = failure {
        return Err(err.into());
    }

    let saved = if save {
        require_success(session.save_description())?;
        true
    } else {
        false
    };

    let cadastral = session
        .selected_record()
        .map(|r| r.primary_cadastral())
        .unwrap_or_default();

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "cadastral_number": cadastral,
            "source": "ai",
            "saved": saved,
            "draft": session.draft(),
        }))?,
        OutputFormat::Records => {
            print_records_header(
                "describe",
                &[
                    ("cadastral", quoted(&cadastral)),
                    ("saved", saved.to_string()),
                ],
            );
            wrap_records_body("draft", session.draft());
        }
        OutputFormat::Human => {
            println!("{}", session.draft());
            if saved && !ctx.cli.quiet {
                eprintln!("Saved description for {}", cadastral);
            }
        }
    }
    Ok(())
}
