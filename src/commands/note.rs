//! `parcelbook note` command - read or write a parcel's saved note

use parcelbook_core::error::{CatalogError, Result};
use parcelbook_core::format::quoted;
use parcelbook_core::notes::NoteEntry;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{
    print_json, print_json_status, print_records_header, print_records_note,
};
use crate::commands::helpers::require_success;

/// Print the saved note; a failing notes backend is an error here
pub fn execute_get(ctx: &CommandContext, target: &str) -> Result<()> {
    let config = ctx.config()?;
    let store = ctx.open_store(&config)?;
    let record = store.record(store.resolve(target)?);
    let cadastral = record.primary_cadastral();
    if cadastral.is_empty() {
        return Err(CatalogError::MissingCadastral {
            selector: target.to_string(),
        });
    }

    let notes = ctx.notes_backend(&config).fetch_all()?;
    let entry = notes.get(&cadastral).cloned().unwrap_or_default();
    print_note(ctx, &cadastral, &entry)
}

fn print_note(ctx: &CommandContext, cadastral: &str, entry: &NoteEntry) -> Result<()> {
    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "cadastral_number": cadastral,
            "description": entry.description(),
            "avito_link": entry.avito_link(),
        }))?,
        OutputFormat::Records => {
            print_records_header("note", &[("cadastral", quoted(cadastral))]);
            print_records_note("description", entry.description());
            print_records_note("avito_link", entry.avito_link());
        }
        OutputFormat::Human => {
            if entry.description().is_empty() && entry.avito_link().is_empty() {
                if !ctx.cli.quiet {
                    println!("No note saved for {}", cadastral);
                }
                return Ok(());
            }
            if !entry.description().is_empty() {
                println!("{}", entry.description());
            }
            if !entry.avito_link().is_empty() {
                if !entry.description().is_empty() {
                    println!();
                }
                println!("Объявление: {}", entry.avito_link());
            }
        }
    }
    Ok(())
}

/// Save the description and/or the listing link of one parcel
pub fn execute_set(
    ctx: &CommandContext,
    target: &str,
    description: Option<&str>,
    link: Option<&str>,
) -> Result<()> {
    let (mut session, _) = ctx.session_for(target)?;
    let cadastral = session
        .selected_record()
        .map(|r| r.primary_cadastral())
        .unwrap_or_default();
    if cadastral.is_empty() {
        return Err(CatalogError::MissingCadastral {
            selector: target.to_string(),
        });
    }

    let mut saved = Vec::new();
    if let Some(text) = description {
        session.edit_draft(text);
        require_success(session.save_description())?;
        saved.push("description");
    }
    if let Some(link) = link {
        session.edit_link(link);
        require_success(session.save_link())?;
        saved.push("avito_link");
    }

    let entry = session.selected_note().cloned().unwrap_or_default();
    match ctx.cli.format {
        OutputFormat::Json => print_json_status(
            "saved",
            None,
            &[
                ("cadastral_number", json!(cadastral)),
                ("fields", json!(saved)),
                ("description", json!(entry.description())),
                ("avito_link", json!(entry.avito_link())),
            ],
        )?,
        OutputFormat::Records => {
            print_records_header(
                "note.set",
                &[
                    ("cadastral", quoted(&cadastral)),
                    ("status", "saved".to_string()),
                ],
            );
            print_records_note("description", entry.description());
            print_records_note("avito_link", entry.avito_link());
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("Saved {} for {}", saved.join(" and "), cadastral);
            }
        }
    }
    Ok(())
}
