//! `parcelbook show` command - detail view of one parcel
//!
//! Notes come from the configured backend; when it cannot be reached the
//! view is shown without them.

use parcelbook_core::detail::DetailView;
use parcelbook_core::error::{CatalogError, Result};
use parcelbook_core::format::quoted;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{
    print_json, print_records_data, print_records_header, print_records_note,
    print_records_section,
};

/// Execute the show command
pub fn execute(ctx: &CommandContext, target: &str) -> Result<()> {
    let (session, _) = ctx.session_for(target)?;
    let view = session
        .detail()
        .ok_or_else(|| CatalogError::record_not_found(target))?;
    print_detail(ctx.cli.format, &view)
}

/// Render a detail view; shared with `browse`
pub fn print_detail(format: OutputFormat, view: &DetailView) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(view)?,
        OutputFormat::Records => print_detail_records(view),
        OutputFormat::Human => print_detail_human(view),
    }
    Ok(())
}

fn print_detail_records(view: &DetailView) {
    print_records_header(
        "show",
        &[("cadastral", quoted(&view.primary_cadastral))],
    );
    print_records_section("cadastral_number", &view.title);
    if let Some(label) = &view.match_label {
        print_records_data("match", label);
    }
    if let Some(raw) = &view.cadastral_raw {
        print_records_data("cadastral_raw", raw);
    }
    for row in &view.rows {
        if let Some(value) = &row.value {
            print_records_section(row.key, value);
        }
    }
    for entry in &view.usage_decoded {
        print_records_data("usage", &format!("{} {}", entry.code, entry.title));
    }
    if let Some(link) = &view.map_link {
        print_records_data("map_link", link);
    }
    if let Some(photo) = &view.photo_link {
        print_records_data("photo_link", &photo.url);
    }
    print_records_note("description", &view.description);
    print_records_note("avito_link", &view.avito_link);
}

fn print_detail_human(view: &DetailView) {
    if view.title.is_empty() {
        println!("Участок без кадастрового номера");
    } else {
        println!("{}", view.title);
    }
    if let Some(label) = &view.match_label {
        println!("Совпадение: {}", label);
    }
    if let Some(raw) = &view.cadastral_raw {
        println!("Исходная строка: {}", raw);
    }
    println!();

    for row in &view.rows {
        let value = row.value.as_deref().unwrap_or("—");
        if value.contains('\n') {
            println!("{}:", row.label);
            for line in value.lines() {
                println!("  {}", line);
            }
        } else {
            println!("{}: {}", row.label, value);
        }
    }

    if !view.usage_decoded.is_empty() {
        println!();
        println!("Расшифровка назначения:");
        for entry in &view.usage_decoded {
            println!("  {} — {}", entry.code, entry.title);
        }
    }

    if view.map_link.is_some() || view.photo_link.is_some() {
        println!();
    }
    if let Some(link) = &view.map_link {
        println!("Публичная карта: {}", link);
    }
    if let Some(photo) = &view.photo_link {
        println!("{}: {}", photo.label, photo.url);
    }

    println!();
    if view.description.trim().is_empty() {
        println!("Описание: —");
    } else {
        println!("Описание:");
        for line in view.description.lines() {
            println!("  {}", line);
        }
    }
    if !view.avito_link.is_empty() {
        println!("Объявление: {}", view.avito_link);
    }
}
