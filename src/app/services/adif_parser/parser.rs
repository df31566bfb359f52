//! Core ADIF parser implementation
//!
//! This module handles section splitting, record chunking, override
//! application and chronology tracking.

use chrono::{NaiveDateTime, Utc};
use std::collections::BTreeMap;
use tracing::{debug, info};

use super::header::parse_headers;
use super::record_parser::{extract_fields, record_timestamp};
use super::stats::{ParseResult, ParseStats};
use crate::app::models::{FieldValue, Headers, Record};
use crate::constants::{END_OF_HEADER, END_OF_RECORD, TAG_OPEN};
use crate::{Error, Result};

/// Lenient ADIF parser
///
/// Holds the forced field values that are written over every parsed
/// record.
#[derive(Debug, Clone, Default)]
pub struct AdifParser {
    overrides: BTreeMap<String, String>,
}

impl AdifParser {
    /// Create a parser without overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser that forces the given field values onto every record
    ///
    /// Field names are matched case-insensitively; values are trimmed.
    pub fn with_overrides<'a>(overrides: impl IntoIterator<Item = (&'a String, &'a String)>) -> Self {
        let overrides = overrides
            .into_iter()
            .map(|(field, value)| (Record::normalize_name(field), value.trim().to_string()))
            .filter(|(field, _)| !field.is_empty())
            .collect();
        Self { overrides }
    }

    pub fn overrides(&self) -> &BTreeMap<String, String> {
        &self.overrides
    }

    /// Parse raw ADIF text into headers and records
    pub fn parse(&self, raw: &str) -> Result<ParseResult> {
        let (header_text, record_text) = Self::split_sections(raw)?;

        let headers = header_text.map(parse_headers).unwrap_or_else(Headers::new);
        debug!(
            "Parsed header: {} tags, {} free-text lines",
            headers.fields.len(),
            headers.strings.len()
        );

        let mut result = self.parse_records(record_text);
        result.headers = headers;

        info!("Parsed {}", result.stats.summary());
        Ok(result)
    }

    /// Split raw text into an optional header block and the record block
    ///
    /// Without an end-of-header marker the whole input is records, provided
    /// it starts with a tag and holds at least one end-of-record marker.
    pub fn split_sections(raw: &str) -> Result<(Option<&str>, &str)> {
        // ASCII lower-casing keeps byte offsets valid for the original text
        let lowered = raw.to_ascii_lowercase();

        if let Some(position) = lowered.find(END_OF_HEADER) {
            let records_start = position + END_OF_HEADER.len();
            if !lowered[records_start..].contains(END_OF_RECORD) {
                return Err(Error::malformed_input(
                    "end-of-header marker is not followed by any end-of-record marker",
                ));
            }
            return Ok((Some(&raw[..position]), &raw[records_start..]));
        }

        if lowered.contains(END_OF_RECORD) && raw.trim_start().starts_with(TAG_OPEN) {
            return Ok((None, raw));
        }

        Err(Error::malformed_input(
            "input has neither an <eoh> header nor tag-led <eor> records",
        ))
    }

    /// Lower-case the record block, split it into chunks and extract fields
    fn parse_records(&self, text: &str) -> ParseResult {
        let mut stats = ParseStats::new();
        let mut records = Vec::new();

        let mut earliest: NaiveDateTime = Utc::now().naive_utc();
        let mut latest: Option<NaiveDateTime> = None;
        let mut first_entry = None;
        let mut last_entry = None;

        let lowered = text.to_lowercase();
        for chunk in lowered.split(END_OF_RECORD) {
            let chunk = chunk.trim();
            if chunk.is_empty() {
                continue;
            }
            stats.total_chunks += 1;

            let mut record = Record::new();
            for (name, value) in extract_fields(chunk) {
                if name.is_empty() || value.is_empty() {
                    stats.fields_dropped += 1;
                    continue;
                }
                record.insert(&name, value);
            }

            if record.is_empty() {
                stats.chunks_skipped += 1;
                debug!("Skipped chunk {} with no fields", stats.total_chunks);
                continue;
            }

            for (field, value) in &self.overrides {
                record.insert(field, FieldValue::from(value.as_str()));
            }

            records.push(record);
            let position = records.len() - 1;

            if let Some(stamp) = records.last().and_then(record_timestamp) {
                stats.dated_records += 1;
                if stamp < earliest {
                    earliest = stamp;
                    first_entry = Some(position);
                }
                if latest.is_none_or(|current| stamp > current) {
                    latest = Some(stamp);
                    last_entry = Some(position);
                }
            }
        }

        stats.records_parsed = records.len();

        ParseResult {
            headers: Headers::new(),
            records,
            first_entry,
            last_entry,
            stats,
        }
    }
}
