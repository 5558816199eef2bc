//! `parcelbook regions` command - region picker list

use parcelbook_core::error::Result;
use parcelbook_core::format::escape_quotes;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_json, print_records_header};

/// Execute the regions command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let config = ctx.config()?;
    let store = ctx.open_store(&config)?;
    let regions = store.regions();

    match ctx.cli.format {
        OutputFormat::Json => {
            print_json(&serde_json::json!({
                "count": regions.len(),
                "regions": regions,
            }))?;
        }
        OutputFormat::Records => {
            print_records_header("regions", &[("count", regions.len().to_string())]);
            for region in &regions {
                println!("R \"{}\"", escape_quotes(region));
            }
        }
        OutputFormat::Human => {
            if regions.is_empty() {
                if !ctx.cli.quiet {
                    println!("No regions found");
                }
                return Ok(());
            }
            for region in &regions {
                println!("{}", region);
            }
        }
    }

    Ok(())
}
