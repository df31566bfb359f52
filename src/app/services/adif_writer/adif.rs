//! ADIF text rendering
//!
//! The header block lists merge provenance as free text, followed by the
//! version, creation timestamp and program tags. Records are rendered one
//! field per line and separated by a blank line.

use chrono::Utc;

use crate::app::models::{Document, Record};
use crate::constants::{ADIF_VERSION, END_OF_HEADER, END_OF_RECORD, PROGRAM_ID, PROGRAM_VERSION};

/// Timestamp layout of the `created_timestamp` header tag
pub const CREATED_TIMESTAMP_FORMAT: &str = "%Y%m%d %H%M%S";

/// Render one `<name:len>value` line
///
/// The name is lower-cased and the value trimmed; the declared length is
/// the byte length of the trimmed value.
pub fn render_key_value(name: &str, value: &str) -> String {
    let name = name.trim().to_lowercase();
    let value = value.trim();
    format!("<{}:{}>{}\n", name, value.len(), value)
}

/// Render the synthesized header block, ending with `<eoh>` and a blank line
pub fn render_header(document: &Document) -> String {
    let mut block = String::new();
    for source in document.sources() {
        block.push_str(&format!("Source [{}]\n", source.join(", ")));
    }

    let created = Utc::now().format(CREATED_TIMESTAMP_FORMAT).to_string();
    block.push_str(&render_key_value("adif_version", ADIF_VERSION));
    block.push_str(&render_key_value("created_timestamp", &created));
    block.push_str(&render_key_value("programid", PROGRAM_ID));
    block.push_str(&render_key_value("programversion", PROGRAM_VERSION));

    format!("{}\n{}\n\n", block.trim(), END_OF_HEADER)
}

/// Render a record's fields followed by `<eor>`
pub fn render_record(record: &Record) -> String {
    let fields: String = record
        .iter()
        .map(|(name, value)| render_key_value(name, &value.to_string()))
        .collect();
    format!("{}\n{}", fields.trim(), END_OF_RECORD)
}

/// Render the whole document as ADIF text
pub fn render_adif(document: &Document) -> String {
    let records: Vec<String> = document
        .records()
        .iter()
        .map(|entry| render_record(&entry.record))
        .collect();
    format!("{}{}", render_header(document), records.join("\n\n"))
}
