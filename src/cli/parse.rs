use parcelbook_core::export::ExportKind;
use parcelbook_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse export kind from string
pub fn parse_export_kind(s: &str) -> std::result::Result<ExportKind, String> {
    s.parse::<ExportKind>().map_err(|e| e.to_string())
}
