//! Parsing statistics and result structures for ADIF input
//!
//! This module provides types for tracking what the tokenizer saw and for
//! handing parsed content to the pipeline driver.

use crate::app::models::{Headers, Record};

/// Parsing result with header block, records and statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed header tags and free-form lines
    pub headers: Headers,

    /// Parsed records in input order
    pub records: Vec<Record>,

    /// Position of the chronologically earliest record, if any was dated
    pub first_entry: Option<usize>,

    /// Position of the chronologically latest record, if any was dated
    pub last_entry: Option<usize>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Number of non-empty chunks between end-of-record markers
    pub total_chunks: usize,

    /// Number of records produced
    pub records_parsed: usize,

    /// Number of chunks that yielded no fields
    pub chunks_skipped: usize,

    /// Number of tags dropped for an empty name or value
    pub fields_dropped: usize,

    /// Number of records whose date and time could be read as a timestamp
    pub dated_records: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_chunks: 0,
            records_parsed: 0,
            chunks_skipped: 0,
            fields_dropped: 0,
            dated_records: 0,
        }
    }

    /// Calculate the share of chunks that produced a record, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_chunks == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / self.total_chunks as f64) * 100.0
        }
    }

    /// Get a one-line summary
    pub fn summary(&self) -> String {
        format!(
            "{} records from {} chunks ({} skipped, {} empty fields dropped, {} dated)",
            self.records_parsed,
            self.total_chunks,
            self.chunks_skipped,
            self.fields_dropped,
            self.dated_records
        )
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
