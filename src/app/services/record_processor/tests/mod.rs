//! Comprehensive tests for record processor module
//!
//! This module provides unit tests for every record processing stage and
//! the shared record and document fixtures they use.

pub mod processor_tests;

// Test helper functions and fixtures
use crate::app::models::{Document, Record};

/// Create a record from field/value pairs, as the parser would produce it
pub fn create_test_record(fields: &[(&str, &str)]) -> Record {
    fields.iter().copied().collect()
}

/// Create a complete, valid contact in parser (lower-case) form
pub fn create_valid_record(call: &str, time_on: &str) -> Record {
    create_test_record(&[
        ("band", "20m"),
        ("call", call),
        ("freq", "14.250"),
        ("mode", "ssb"),
        ("operator", "w1aw"),
        ("qso_date", "20240101"),
        ("time_on", time_on),
    ])
}

/// Create a valid POTA activation contact
pub fn create_pota_record(call: &str, time_on: &str, my_park: &str) -> Record {
    let mut record = create_valid_record(call, time_on);
    record.insert("my_sig", "pota");
    record.insert("my_sig_info", my_park);
    record
}

/// Create a document holding the given records
pub fn create_test_document(records: Vec<Record>) -> Document {
    let mut document = Document::new();
    document.add_records(records);
    document
}

/// Create a document of distinct valid contacts spaced one minute apart
pub fn create_spaced_document(count: usize) -> Document {
    let records = (0..count)
        .map(|i| {
            let time_on = format!("{:02}{:02}", 12 + i / 60, i % 60);
            create_valid_record(&format!("k{}ab", i % 10), &time_on)
        })
        .collect();
    create_test_document(records)
}
