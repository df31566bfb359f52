//! The ADIF document carried through the pipeline
//!
//! A [`Document`] owns the raw input, the parsed header block and the live
//! record list, together with everything the stages report back: validation
//! errors, removed duplicates, stage timers, merge provenance and planned
//! output chunks.
//!
//! Every record is addressed by a stable index assigned when it enters the
//! document. Removing records never renumbers the survivors, so error keys,
//! duplicate keys and unroll back-references stay meaningful.

use super::{Headers, Record};
use crate::constants::{DOCUMENT_ERROR_KEY, END_OF_RECORD, timers};
use crate::{Error, Result};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Range;
use std::path::Path;
use tracing::debug;

/// Key of an entry in the document's error map
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKey {
    /// Document-level findings, rendered as `"@"`
    Document,
    /// Findings for the record with this stable index
    Record(usize),
}

impl fmt::Display for ErrorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKey::Document => write!(f, "{}", DOCUMENT_ERROR_KEY),
            ErrorKey::Record(index) => write!(f, "{}", index),
        }
    }
}

impl Serialize for ErrorKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A record together with its stable index
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedRecord {
    pub index: usize,
    pub record: Record,
}

impl IndexedRecord {
    pub fn new(index: usize, record: Record) -> Self {
        Self { index, record }
    }
}

/// An ADIF logbook and its pipeline state
#[derive(Debug, Clone, Default)]
pub struct Document {
    filename: String,
    size: usize,
    raw: String,
    headers: Headers,
    records: Vec<IndexedRecord>,
    next_index: usize,
    errors: BTreeMap<ErrorKey, Vec<String>>,
    duplicates: BTreeMap<usize, Record>,
    timers: BTreeMap<String, f64>,
    sources: Vec<Vec<String>>,
    chunks: Vec<Vec<usize>>,
    first_entry: Option<usize>,
    last_entry: Option<usize>,
}

/// Round a millisecond figure to three decimals
pub(crate) fn round_ms(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

impl Document {
    /// Create an empty document, as used for merges
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from raw ADIF text
    pub fn from_text(text: impl Into<String>) -> Self {
        let raw = text.into();
        Self {
            size: raw.len(),
            raw,
            ..Self::default()
        }
    }

    /// Create a document from an ADIF file on disk
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        debug!("Loaded {} ({} bytes)", filename, raw.len());

        Ok(Self {
            filename,
            size: raw.len(),
            raw,
            ..Self::default()
        })
    }

    /// Create a document from either raw ADIF text or a file path
    ///
    /// Input containing an end-of-record marker (any case) is treated as
    /// ADIF content; anything else must name a readable file.
    pub fn from_input(input: &str) -> Result<Self> {
        if input.to_ascii_lowercase().contains(END_OF_RECORD) {
            Ok(Self::from_text(input))
        } else {
            Self::from_file(Path::new(input.trim()))
        }
    }

    // -------------------------------------------------------------------------
    // Source content
    // -------------------------------------------------------------------------

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Originating file name, empty for in-memory input
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn set_filename(&mut self, filename: impl Into<String>) {
        self.filename = filename.into();
    }

    /// Input size in bytes
    pub fn size(&self) -> usize {
        self.size
    }

    // -------------------------------------------------------------------------
    // Headers
    // -------------------------------------------------------------------------

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn set_headers(&mut self, headers: Headers) {
        self.headers = headers;
    }

    /// Value of a header tag, or an empty string when absent
    pub fn header(&self, name: &str) -> &str {
        self.headers.get(name)
    }

    /// Add a free-form header line
    pub fn add_header(&mut self, line: &str) {
        self.headers.add_string(line);
    }

    pub fn add_header_field(&mut self, name: &str, value: &str) {
        self.headers.set(name, value);
    }

    // -------------------------------------------------------------------------
    // Records
    // -------------------------------------------------------------------------

    pub fn records(&self) -> &[IndexedRecord] {
        &self.records
    }

    /// Mutable view of the live records; the list itself cannot grow or shrink
    pub fn records_mut(&mut self) -> &mut [IndexedRecord] {
        &mut self.records
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Look up a live record by stable index
    pub fn record(&self, index: usize) -> Option<&Record> {
        self.position(index).map(|position| &self.records[position].record)
    }

    fn position(&self, index: usize) -> Option<usize> {
        self.records
            .binary_search_by_key(&index, |entry| entry.index)
            .ok()
            .or_else(|| self.records.iter().position(|entry| entry.index == index))
    }

    /// Append a record under a fresh stable index
    pub fn add_record(&mut self, record: Record) -> usize {
        let index = self.allocate_index();
        self.records.push(IndexedRecord::new(index, record));
        index
    }

    /// Append records in order, returning their stable index range
    pub fn add_records(&mut self, records: impl IntoIterator<Item = Record>) -> Range<usize> {
        let start = self.next_index;
        for record in records {
            self.add_record(record);
        }
        start..self.next_index
    }

    /// Remove a record by stable index
    pub fn remove_record(&mut self, index: usize) -> Option<Record> {
        self.position(index)
            .map(|position| self.records.remove(position).record)
    }

    /// Reserve the next stable index
    pub(crate) fn allocate_index(&mut self) -> usize {
        let index = self.next_index;
        self.next_index += 1;
        index
    }

    /// Install a rebuilt record list
    pub(crate) fn replace_records(&mut self, records: Vec<IndexedRecord>) {
        self.records = records;
    }

    /// Drop every record and the state keyed by stable index
    ///
    /// Index allocation restarts at zero. Headers, timers and sources are
    /// kept.
    pub(crate) fn clear_records(&mut self) {
        self.records.clear();
        self.next_index = 0;
        self.errors.clear();
        self.duplicates.clear();
        self.chunks.clear();
        self.first_entry = None;
        self.last_entry = None;
    }

    /// Take the record list out for a rebuild
    pub(crate) fn take_records(&mut self) -> Vec<IndexedRecord> {
        std::mem::take(&mut self.records)
    }

    /// Chronologically earliest record seen by the parser
    pub fn first_entry(&self) -> Option<&Record> {
        self.first_entry.and_then(|index| self.record(index))
    }

    /// Chronologically latest record seen by the parser
    pub fn last_entry(&self) -> Option<&Record> {
        self.last_entry.and_then(|index| self.record(index))
    }

    pub(crate) fn set_chronology(&mut self, first: Option<usize>, last: Option<usize>) {
        self.first_entry = first;
        self.last_entry = last;
    }

    // -------------------------------------------------------------------------
    // Errors and duplicates
    // -------------------------------------------------------------------------

    pub fn errors(&self) -> &BTreeMap<ErrorKey, Vec<String>> {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Failing field names recorded for a record
    pub fn record_errors(&self, index: usize) -> Option<&[String]> {
        self.errors.get(&ErrorKey::Record(index)).map(Vec::as_slice)
    }

    pub(crate) fn set_record_errors(&mut self, index: usize, errors: Vec<String>) {
        self.errors.insert(ErrorKey::Record(index), errors);
    }

    pub(crate) fn clear_record_errors(&mut self, index: usize) {
        self.errors.remove(&ErrorKey::Record(index));
    }

    /// Record a document-level finding once
    pub(crate) fn add_document_error(&mut self, marker: &str) {
        let bucket = self.errors.entry(ErrorKey::Document).or_default();
        if !bucket.iter().any(|existing| existing == marker) {
            bucket.push(marker.to_string());
        }
    }

    pub fn duplicates(&self) -> &BTreeMap<usize, Record> {
        &self.duplicates
    }

    pub fn has_dupes(&self) -> bool {
        !self.duplicates.is_empty()
    }

    pub(crate) fn add_duplicate(&mut self, index: usize, record: Record) {
        self.duplicates.insert(index, record);
    }

    // -------------------------------------------------------------------------
    // Timers
    // -------------------------------------------------------------------------

    /// Accumulate milliseconds under a stage name (case-insensitive)
    pub fn add_timer(&mut self, name: &str, milliseconds: f64) {
        let name = name.trim().to_lowercase();
        if name.is_empty() || name == timers::TOTAL {
            return;
        }
        *self.timers.entry(name).or_insert(0.0) += milliseconds;
    }

    /// Recorded milliseconds for a stage, zero when it never ran
    pub fn timer(&self, name: &str) -> f64 {
        let name = name.trim().to_lowercase();
        if name == timers::TOTAL {
            return self.sum_timers();
        }
        self.timers.get(&name).copied().map(round_ms).unwrap_or(0.0)
    }

    /// Every stage timer plus the synthetic total
    pub fn timers(&self) -> BTreeMap<String, f64> {
        let mut all: BTreeMap<String, f64> = self
            .timers
            .iter()
            .map(|(name, value)| (name.clone(), round_ms(*value)))
            .collect();
        all.insert(timers::TOTAL.to_string(), self.sum_timers());
        all
    }

    pub fn sum_timers(&self) -> f64 {
        round_ms(self.timers.values().sum())
    }

    // -------------------------------------------------------------------------
    // Provenance and chunks
    // -------------------------------------------------------------------------

    pub fn sources(&self) -> &[Vec<String>] {
        &self.sources
    }

    /// Add a provenance entry such as `["fn=a.adi", "ec=12"]`
    pub fn add_source(&mut self, parts: Vec<String>) {
        self.sources.push(parts);
    }

    /// Planned output chunks, as lists of stable indices
    pub fn chunks(&self) -> &[Vec<usize>] {
        &self.chunks
    }

    pub(crate) fn set_chunks(&mut self, chunks: Vec<Vec<usize>>) {
        self.chunks = chunks;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn record(call: &str) -> Record {
        [("call", call)].into_iter().collect()
    }

    #[test]
    fn test_from_input_detects_adif_text() {
        let doc = Document::from_input("<call:4>W1AW<EOR>").unwrap();
        assert_eq!(doc.raw(), "<call:4>W1AW<EOR>");
        assert_eq!(doc.size(), 17);
        assert_eq!(doc.filename(), "");
    }

    #[test]
    fn test_from_input_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "hdr<eoh><call:4>w1aw<eor>").unwrap();

        let doc = Document::from_input(file.path().to_str().unwrap()).unwrap();
        assert!(doc.raw().contains("<eoh>"));
        assert_eq!(
            doc.filename(),
            file.path().file_name().unwrap().to_string_lossy()
        );
    }

    #[test]
    fn test_from_input_missing_file() {
        let result = Document::from_input("/definitely/not/here.adi");
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }

    #[test]
    fn test_stable_indices_survive_removal() {
        let mut doc = Document::new();
        let range = doc.add_records(vec![record("a1a"), record("b2b"), record("c3c")]);
        assert_eq!(range, 0..3);

        assert!(doc.remove_record(1).is_some());
        assert_eq!(doc.record_count(), 2);
        assert!(doc.record(1).is_none());
        assert_eq!(doc.record(2).unwrap().text("call").as_deref(), Some("c3c"));

        assert_eq!(doc.add_record(record("d4d")), 3);
        assert_eq!(doc.record_count(), 3);
    }

    #[test]
    fn test_timers_accumulate_case_insensitively() {
        let mut doc = Document::new();
        doc.add_timer("Parse", 1.5);
        doc.add_timer(" parse ", 2.25);
        doc.add_timer("dedupe", 0.1234);

        assert_eq!(doc.timer("PARSE"), 3.75);
        assert_eq!(doc.timer("dedupe"), 0.123);
        assert_eq!(doc.timer("never"), 0.0);

        let all = doc.timers();
        assert_eq!(all["total"], 3.873);
        assert_eq!(doc.timer("total"), 3.873);
    }

    #[test]
    fn test_document_errors_are_not_repeated() {
        let mut doc = Document::new();
        doc.add_document_error("qps");
        doc.add_document_error("qps");
        assert_eq!(doc.errors()[&ErrorKey::Document], vec!["qps".to_string()]);
        assert!(doc.has_errors());
    }

    #[test]
    fn test_error_keys_serialize_as_strings() {
        let mut doc = Document::new();
        doc.set_record_errors(4, vec!["call".to_string()]);
        doc.add_document_error("qps");
        let json = serde_json::to_string(doc.errors()).unwrap();
        assert_eq!(json, r#"{"@":["qps"],"4":["call"]}"#);
    }

    #[test]
    fn test_headers() {
        let mut doc = Document::new();
        doc.add_header_field("PROGRAMID", "Logger");
        doc.add_header("free text");
        assert_eq!(doc.header("programid"), "Logger");
        assert_eq!(doc.header("programversion"), "");
        assert_eq!(doc.headers().strings, vec!["free text".to_string()]);
    }
}
