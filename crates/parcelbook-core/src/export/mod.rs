//! Report export: RTF document and print-ready page
//!
//! Both formats render the same [`Section`] list built by
//! [`collect_sections`], under the same [`ReportHeader`].

pub mod filename;
pub mod print;
pub mod rtf;
pub mod sections;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::debug;

use crate::detail::format::format_measure;
use crate::error::{CatalogError, Result};
use crate::notes::NoteEntry;
use crate::record::ParcelRecord;
use crate::usage::UsageCatalog;

pub use filename::export_filename;
pub use sections::{collect_sections, Section};

/// Export target format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportKind {
    /// Rich-text document
    Rtf,
    /// HTML page that opens the print dialog
    Print,
}

impl ExportKind {
    pub fn extension(self) -> &'static str {
        match self {
            ExportKind::Rtf => "rtf",
            ExportKind::Print => "html",
        }
    }
}

impl FromStr for ExportKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "rtf" => Ok(ExportKind::Rtf),
            "print" | "pdf" | "html" => Ok(ExportKind::Print),
            other => Err(CatalogError::invalid_value("export kind", other)),
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportKind::Rtf => write!(f, "rtf"),
            ExportKind::Print => write!(f, "print"),
        }
    }
}

/// Title block of a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportHeader {
    pub title: String,
    pub subtitle: String,
    pub generated_at: String,
}

impl ReportHeader {
    pub fn for_record(record: &ParcelRecord, generated_at: String) -> Self {
        let cadastral = record.cadastral_number.as_text();
        let title = if cadastral.is_empty() {
            "Участок без кадастрового номера".to_string()
        } else {
            format!("Участок {}", cadastral)
        };

        let mut subtitle = Vec::new();
        let region = record.region.as_text();
        if !region.is_empty() {
            subtitle.push(region);
        }
        if record.area_ha.is_present() {
            subtitle.push(format!("{} га", format_measure(&record.area_ha)));
        }

        Self {
            title,
            subtitle: subtitle.join(" • "),
            generated_at,
        }
    }
}

/// `dd.mm.yyyy, hh:mm:ss`
pub fn format_timestamp(now: &DateTime<Local>) -> String {
    now.format("%d.%m.%Y, %H:%M:%S").to_string()
}

/// A rendered report ready to be written
#[derive(Debug, Clone, Serialize)]
pub struct ExportDocument {
    pub kind: ExportKind,
    pub filename: String,
    #[serde(skip)]
    pub content: String,
    pub sections: Vec<Section>,
}

/// Inputs shared by every export
pub struct ExportRequest<'a> {
    pub record: &'a ParcelRecord,
    pub note: Option<&'a NoteEntry>,
    pub draft: &'a str,
    pub catalog: &'a UsageCatalog,
    pub map_template: &'a str,
}

impl ExportRequest<'_> {
    pub fn render(&self, kind: ExportKind, now: &DateTime<Local>) -> ExportDocument {
        let sections = collect_sections(
            self.record,
            self.note,
            self.draft,
            self.catalog,
            self.map_template,
        );
        let header = ReportHeader::for_record(self.record, format_timestamp(now));
        let content = match kind {
            ExportKind::Rtf => rtf::render(&header, &sections),
            ExportKind::Print => print::render(&header, &sections),
        };
        ExportDocument {
            kind,
            filename: export_filename(self.record, kind.extension(), now.date_naive()),
            content,
            sections,
        }
    }
}

impl ExportDocument {
    /// Write into `dir`, creating it if needed; returns the file path
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)
            .map_err(|e| CatalogError::io_operation("create export directory", dir.display(), e))?;
        let path = dir.join(&self.filename);
        fs::write(&path, &self.content)
            .map_err(|e| CatalogError::io_operation("write export", path.display(), e))?;
        debug!(path = %path.display(), kind = %self.kind, "export_written");
        Ok(path)
    }
}
