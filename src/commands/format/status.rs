//! Status message and Records line helpers

use parcelbook_core::error::Result;
use parcelbook_core::format::{escape_quotes, records_header};
use serde::Serialize;
use serde_json::json;

/// Pretty-print any serializable value as JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a JSON status message with optional fields
///
/// # Examples
/// ```ignore
/// print_json_status("saved", Some("description saved"), &[("cadastral_number", json!(cad))])?;
/// ```
pub fn print_json_status(
    status: &str,
    message: Option<&str>,
    extra_fields: &[(&str, serde_json::Value)],
) -> Result<()> {
    let mut output = json!({ "status": status });

    if let Some(obj) = output.as_object_mut() {
        if let Some(msg) = message {
            obj.insert("message".to_string(), json!(msg));
        }
        for (key, value) in extra_fields {
            obj.insert(key.to_string(), value.clone());
        }
    }

    print_json(&output)
}

/// Print a Records format header
///
/// # Examples
/// ```ignore
/// print_records_header("list", &[("total", total.to_string())]);
/// ```
pub fn print_records_header(mode: &str, extra_fields: &[(&str, String)]) {
    println!("{}", records_header(mode, extra_fields));
}

/// Wrap multi-line text in Records format with B and B-END markers
pub fn wrap_records_body(key: &str, body: &str) {
    println!("B {}", key);
    for line in body.lines() {
        println!("{}", line);
    }
    println!("B-END");
}

/// `D <key> <value>`
pub fn print_records_data(key: &str, value: &str) {
    println!("D {} {}", key, escape_quotes(value));
}

/// `S <key> "<value>"`
pub fn print_records_section(key: &str, value: &str) {
    println!("S {} \"{}\"", key, escape_quotes(value));
}

/// `N <key> "<value>"`, omitted when the value is empty
pub fn print_records_note(key: &str, value: &str) {
    if !value.is_empty() {
        println!("N {} \"{}\"", key, escape_quotes(value));
    }
}
