use std::path::PathBuf;

use clap::{Args, Subcommand};
use parcelbook_core::export::ExportKind;

use super::parse::parse_export_kind;

/// Filter inputs shared by `list`
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Exact region
    #[arg(long)]
    pub region: Option<String>,

    /// Case-insensitive substring of the cadastral number
    #[arg(long)]
    pub cadastral: Option<String>,

    /// Case-insensitive substring of the article
    #[arg(long)]
    pub article: Option<String>,

    /// Minimum area in hectares
    #[arg(long)]
    pub area_min: Option<String>,

    /// Maximum area in hectares
    #[arg(long)]
    pub area_max: Option<String>,

    /// Minimum price per plot in rubles
    #[arg(long)]
    pub price_min: Option<String>,

    /// Maximum price per plot in rubles
    #[arg(long)]
    pub price_max: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Number of pages to show (each extra page is one "load more")
    #[arg(long, default_value_t = 1)]
    pub pages: usize,
}

/// A parcel selected by `#<source_row>` or cadastral number
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// `#<source_row>` or cadastral number
    pub target: String,
}

#[derive(Subcommand, Debug, Clone)]
pub enum NoteCommands {
    /// Print the saved note
    Get(TargetArgs),

    /// Save the description and/or listing link
    Set(NoteSetArgs),
}

#[derive(Args, Debug, Clone)]
pub struct NoteSetArgs {
    /// `#<source_row>` or cadastral number
    pub target: String,

    /// Description text
    #[arg(long, conflicts_with = "description_file")]
    pub description: Option<String>,

    /// Read the description from a file
    #[arg(long)]
    pub description_file: Option<PathBuf>,

    /// External listing link
    #[arg(long)]
    pub link: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct DescribeArgs {
    /// `#<source_row>` or cadastral number
    pub target: String,

    /// Extra instruction for the generator (e.g. "shorter")
    #[arg(long)]
    pub instruction: Option<String>,

    /// Save the generated text as the parcel description
    #[arg(long)]
    pub save: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// `#<source_row>` or cadastral number
    pub target: String,

    /// Report kind: rtf or print
    #[arg(long, value_parser = parse_export_kind, default_value = "rtf")]
    pub kind: ExportKind,

    /// Output directory (default: current directory)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Draft text to include instead of the saved description
    #[arg(long, conflicts_with = "draft_file")]
    pub draft: Option<String>,

    /// Read the draft text from a file
    #[arg(long)]
    pub draft_file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct BrowseArgs {
    /// Read actions from a file instead of stdin
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Directory for `export` actions without an explicit directory
    #[arg(long)]
    pub export_dir: Option<PathBuf>,
}
