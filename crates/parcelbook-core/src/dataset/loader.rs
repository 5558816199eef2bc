//! CSV dataset reader

use std::io::Read;
use std::time::Instant;

use tracing::{debug, warn};

use crate::error::Result;
use crate::record::{FieldValue, ParcelRecord};
use crate::trace_time;

const SOURCE_ROW_COLUMN: &str = "source_row";
const MATCH_INDEX_COLUMN: &str = "match_index";

/// Read parcel records from CSV with a header row.
///
/// Blank lines and rows whose cells are all blank are skipped. Unknown
/// columns are ignored. `source_row` falls back to the 1-based data row
/// ordinal when the column is missing or unparsable.
pub(super) fn read_records<R: Read>(reader: R) -> Result<Vec<ParcelRecord>> {
    let start = Instant::now();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();

    let known = headers
        .iter()
        .filter(|h| ParcelRecord::default().set_column(h, FieldValue::Empty))
        .count();
    if known == 0 {
        warn!(columns = headers.len(), "dataset header has no known parcel columns");
    }

    let mut records = Vec::new();
    let mut ordinal: u64 = 0;
    for row in reader.records() {
        let row = row?;
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        ordinal += 1;

        let mut record = ParcelRecord {
            source_row: ordinal,
            ..ParcelRecord::default()
        };

        for (column, cell) in headers.iter().zip(row.iter()) {
            match column.as_str() {
                SOURCE_ROW_COLUMN => {
                    if let Some(row) = parse_index(cell) {
                        record.source_row = row;
                    }
                }
                MATCH_INDEX_COLUMN => record.match_index = parse_index(cell),
                other => {
                    record.set_column(other, FieldValue::from_cell(cell));
                }
            }
        }

        records.push(record);
    }

    debug!(records = records.len(), columns = headers.len(), "load_dataset");
    trace_time!(start, "read_records");
    Ok(records)
}

fn parse_index(cell: &str) -> Option<u64> {
    let trimmed = cell.trim();
    trimmed.parse::<u64>().ok().or_else(|| {
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0 && v.fract() == 0.0)
            .map(|v| v as u64)
    })
}
