//! `parcelbook list` command - filter parcels and show the visible window
//!
//! The window starts at one page and grows by a page for every extra
//! `--pages`, the way "load more" does in the browser.

use parcelbook_core::error::Result;
use parcelbook_core::session::Session;

use crate::cli::{FilterArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{
    parcel_json, parcel_row, print_json, print_parcel_record, print_records_header,
};
use crate::commands::helpers::{apply_filter_args, describe_inputs, validate_bounds};

/// Execute the list command
pub fn execute(ctx: &CommandContext, filters: &FilterArgs, pages: usize) -> Result<()> {
    validate_bounds(filters)?;

    let mut session = ctx.session_without_notes()?;
    apply_filter_args(&mut session, filters);
    for _ in 1..pages {
        if !session.state().has_more() {
            break;
        }
        session.load_more();
    }

    print_window(ctx.cli.format, ctx.cli.quiet, &session)
}

/// Render the visible window of a session; shared with `browse`
pub fn print_window(format: OutputFormat, quiet: bool, session: &Session) -> Result<()> {
    let state = session.state();
    let store = session.store();
    let selection = state.selection();

    match format {
        OutputFormat::Json => {
            let parcels: Vec<_> = state
                .visible()
                .iter()
                .map(|id| parcel_json(store.record(*id), Some(*id) == selection))
                .collect();
            print_json(&serde_json::json!({
                "total": state.total(),
                "visible": state.visible_count(),
                "has_more": state.has_more(),
                "criteria": state.criteria(),
                "parcels": parcels,
            }))?;
        }
        OutputFormat::Records => {
            print_records_header(
                "list",
                &[
                    ("total", state.total().to_string()),
                    ("visible", state.visible_count().to_string()),
                    ("more", state.has_more().to_string()),
                ],
            );
            for id in state.visible() {
                print_parcel_record(store.record(*id), Some(*id) == selection);
            }
        }
        OutputFormat::Human => {
            if state.total() == 0 {
                if !quiet {
                    println!("No parcels found");
                }
                return Ok(());
            }
            for id in state.visible() {
                println!("{}", parcel_row(store.record(*id), Some(*id) == selection));
            }
            if !quiet {
                let filters = describe_inputs(session.inputs());
                println!();
                print!("Showing {} of {}", state.visible_count(), state.total());
                if !filters.is_empty() {
                    print!(" ({})", filters);
                }
                println!();
                if state.has_more() {
                    println!("More parcels available (use --pages or `more`)");
                }
            }
        }
    }

    Ok(())
}
