//! Field extraction for individual ADIF record chunks
//!
//! A chunk is the text between two end-of-record markers. Fields are read
//! with a tolerant `<name:length>value` pattern; values are the run of
//! accepted characters after the tag, cut at the declared length.

use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::LazyLock;

use crate::app::models::Record;
use crate::constants::TIME_WIDTH;

/// Tag name, length spec and value run
///
/// The value class covers letters, digits, `_`, the ASCII range from space
/// to `.` (which includes `,`), `/`, `:` and `@`.
static FIELD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<([a-z0-9_]*):(.+?)>([a-z0-9_\x20-\x2E/:@]+)?").expect("field pattern")
});

/// Leading digits of a tag's length spec (`"5"` or `"5:s"`)
pub(crate) fn declared_length(spec: &str) -> Option<usize> {
    let digits: String = spec
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

/// Cut a captured value run at the declared length
pub(crate) fn bounded_value(run: &str, length: Option<usize>) -> &str {
    match length {
        Some(limit) if limit < run.len() => {
            let mut end = limit;
            while !run.is_char_boundary(end) {
                end -= 1;
            }
            &run[..end]
        }
        _ => run,
    }
}

/// Extract every `(name, value)` pair in a chunk, values trimmed
///
/// Pairs with an empty name or value are returned too; callers decide what
/// to drop.
pub fn extract_fields(chunk: &str) -> Vec<(String, String)> {
    FIELD_PATTERN
        .captures_iter(chunk)
        .map(|caps| {
            let name = caps[1].to_lowercase();
            let run = caps.get(3).map_or("", |m| m.as_str());
            let value = bounded_value(run, declared_length(&caps[2])).trim();
            (name, value.to_string())
        })
        .collect()
}

/// Build a record from one chunk, dropping empty names and empty values
pub fn parse_record_chunk(chunk: &str) -> Record {
    extract_fields(chunk)
        .into_iter()
        .filter(|(name, value)| !name.is_empty() && !value.is_empty())
        .collect()
}

/// Read a record's `qso_date` and `time_on` as a timestamp
///
/// The date must hold eight digits; time digits are right-padded with
/// zeros to HHMMSS. Returns `None` when either field is missing or the
/// combination is not a real instant.
pub fn record_timestamp(record: &Record) -> Option<NaiveDateTime> {
    let date: String = record
        .text("qso_date")?
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    let time: String = record
        .text("time_on")?
        .chars()
        .filter(char::is_ascii_digit)
        .take(TIME_WIDTH)
        .collect();

    if date.len() != 8 || time.is_empty() {
        return None;
    }

    let stamp = format!("{}{:0<width$}", date, time, width = TIME_WIDTH);
    NaiveDateTime::parse_from_str(&stamp, "%Y%m%d%H%M%S").ok()
}
