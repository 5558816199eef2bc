//! `parcelbook link` command - map link and saved listing link

use parcelbook_core::error::{CatalogError, Result};
use parcelbook_core::format::quoted;
use parcelbook_core::links;
use parcelbook_core::session::ActionStatus;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_json, print_records_data, print_records_header};

/// Execute the link command
pub fn execute(ctx: &CommandContext, target: &str) -> Result<()> {
    let (session, _) = ctx.session_for(target)?;
    let record = session
        .selected_record()
        .ok_or_else(|| CatalogError::record_not_found(target))?;

    let map_link = links::map_link(record, &session.config().map.search_url);
    let listing = match session.open_link() {
        ActionStatus::Opened(url) => Some(url),
        _ => None,
    };
    let photo = links::photo_link(&session.config().photo_links, record);

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "cadastral_number": record.primary_cadastral(),
            "map_link": map_link,
            "avito_link": listing,
            "photo_link": photo,
        }))?,
        OutputFormat::Records => {
            print_records_header(
                "link",
                &[("cadastral", quoted(&record.primary_cadastral()))],
            );
            if let Some(url) = &map_link {
                print_records_data("map_link", url);
            }
            if let Some(url) = &listing {
                print_records_data("avito_link", url);
            }
            if let Some(photo) = photo {
                print_records_data("photo_link", &photo.url);
            }
        }
        OutputFormat::Human => {
            match &map_link {
                Some(url) => println!("Публичная карта: {}", url),
                None => println!("Публичная карта: —"),
            }
            match &listing {
                Some(url) => println!("Объявление: {}", url),
                None => println!("Объявление: —"),
            }
            if let Some(photo) = photo {
                println!("{}: {}", photo.label, photo.url);
            }
        }
    }
    Ok(())
}
