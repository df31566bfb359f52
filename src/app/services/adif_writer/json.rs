//! JSON rendering
//!
//! [`JsonDocument`] borrows everything it renders from the document except
//! the timers, which are copied so the rendering stage can add its own.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::Result;
use crate::app::models::document::round_ms;
use crate::app::models::{Document, ErrorKey, Headers, Record};
use crate::constants::timers;

fn is_empty_map<K, V>(map: &&BTreeMap<K, V>) -> bool {
    map.is_empty()
}

fn is_empty_slice<T>(slice: &&[T]) -> bool {
    slice.is_empty()
}

#[derive(Debug, Serialize)]
struct JsonMeta<'a> {
    #[serde(skip_serializing_if = "is_empty_slice")]
    sources: &'a [Vec<String>],
    count: usize,
    duplicates: usize,
    errors: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    chunks: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum JsonEntries<'a> {
    Flat(Vec<&'a Record>),
    Chunked(Vec<Vec<&'a Record>>),
}

/// JSON view of a document
#[derive(Debug, Serialize)]
pub struct JsonDocument<'a> {
    timers: BTreeMap<String, f64>,
    meta: JsonMeta<'a>,
    headers: &'a Headers,
    entries: JsonEntries<'a>,
    #[serde(skip_serializing_if = "is_empty_map")]
    duplicates: &'a BTreeMap<usize, Record>,
    #[serde(skip_serializing_if = "is_empty_map")]
    errors: &'a BTreeMap<ErrorKey, Vec<String>>,
}

impl<'a> JsonDocument<'a> {
    /// Build the view; planned chunks turn `entries` into a list of lists
    pub fn new(document: &'a Document) -> Self {
        let records = document.records();
        let chunks = document.chunks();

        let entries = if chunks.is_empty() {
            JsonEntries::Flat(records.iter().map(|entry| &entry.record).collect())
        } else {
            JsonEntries::Chunked(
                chunks
                    .iter()
                    .map(|chunk| {
                        chunk
                            .iter()
                            .filter_map(|position| records.get(*position))
                            .map(|entry| &entry.record)
                            .collect()
                    })
                    .collect(),
            )
        };

        Self {
            timers: document.timers(),
            meta: JsonMeta {
                sources: document.sources(),
                count: document.record_count(),
                duplicates: document.duplicates().len(),
                errors: document.errors().len(),
                chunks: (!chunks.is_empty()).then_some(chunks.len()),
            },
            headers: document.headers(),
            entries,
            duplicates: document.duplicates(),
            errors: document.errors(),
        }
    }

    /// Accumulate a timer into the rendered timers and their total
    pub fn with_timer(mut self, name: &str, milliseconds: f64) -> Self {
        let name = name.trim().to_lowercase();
        if name.is_empty() || name == timers::TOTAL {
            return self;
        }
        *self.timers.entry(name).or_insert(0.0) += milliseconds;

        let total = self
            .timers
            .iter()
            .filter(|(name, _)| name.as_str() != timers::TOTAL)
            .map(|(_, value)| *value)
            .sum();
        self.timers = self
            .timers
            .into_iter()
            .map(|(name, value)| (name, round_ms(value)))
            .collect();
        self.timers.insert(timers::TOTAL.to_string(), round_ms(total));
        self
    }

    pub fn timers(&self) -> &BTreeMap<String, f64> {
        &self.timers
    }

    /// Serialize, optionally pretty-printed, with a trailing newline
    pub fn render(&self, pretty: bool) -> Result<String> {
        let mut text = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        text.push('\n');
        Ok(text)
    }
}
