//! CLI argument parsing for parcelbook
//!
//! Global flags: --config, --dataset, --notes-url, --notes-file, --ai-url,
//! --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use args::{
    BrowseArgs, DescribeArgs, ExportArgs, FilterArgs, ListArgs, NoteCommands, NoteSetArgs,
    TargetArgs,
};
pub use parcelbook_core::format::OutputFormat;
use parse::parse_format;

/// Parcelbook - land-parcel catalog browser
#[derive(Parser, Debug)]
#[command(name = "parcelbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (default: ./parcelbook.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Dataset CSV, overriding configuration
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Notes service base URL, overriding configuration
    #[arg(long, global = true)]
    pub notes_url: Option<String>,

    /// Local notes file, overriding configuration
    #[arg(long, global = true)]
    pub notes_file: Option<PathBuf>,

    /// AI describe endpoint, overriding configuration
    #[arg(long, global = true)]
    pub ai_url: Option<String>,

    /// Output format
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `parcelbook_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the regions present in the dataset
    Regions,

    /// Filter parcels and print the visible window
    List(ListArgs),

    /// Show the detail view of one parcel
    Show(TargetArgs),

    /// Read or write the saved note of a parcel
    Note {
        #[command(subcommand)]
        command: NoteCommands,
    },

    /// Compose the offline description draft
    Draft(TargetArgs),

    /// Generate a description with the AI service
    Describe(DescribeArgs),

    /// Export a parcel report (RTF or print page)
    Export(ExportArgs),

    /// Print the public map link and the saved listing link
    Link(TargetArgs),

    /// Interactive session driven by one action per input line
    Browse(BrowseArgs),
}
