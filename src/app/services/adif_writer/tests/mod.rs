//! Unit tests for the adif_writer module

pub mod json_tests;

use crate::app::models::{Document, Record};

/// Create a document with one record per call sign
pub fn create_test_document(calls: &[&str]) -> Document {
    let mut document = Document::new();
    for call in calls {
        let mut record = Record::new();
        record.insert("band", "20M");
        record.insert("call", *call);
        document.add_record(record);
    }
    document
}
