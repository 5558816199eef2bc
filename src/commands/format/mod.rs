//! Shared output formatting helpers for commands
//!
//! Provides common patterns for JSON status messages, Records lines,
//! and the one-line parcel summary used by `list` and `browse`.

pub mod parcel;
pub mod status;

pub use parcel::{parcel_json, parcel_row, print_parcel_record};
pub use status::{
    print_json, print_json_status, print_records_data, print_records_header, print_records_note,
    print_records_section, wrap_records_body,
};
