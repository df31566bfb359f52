//! Data models for ADIF processing
//!
//! This module contains the core data structures for representing ADIF
//! logbook content: typed field values, contact records and the header
//! block. The mutable [`Document`] that carries them through the pipeline
//! lives in [`document`].

pub mod document;

pub use document::{Document, ErrorKey, IndexedRecord};

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

// =============================================================================
// Field Values
// =============================================================================

/// A single ADIF field value
///
/// The parser produces text only. The sanitizer coerces the numeric and
/// boolean fields it knows about; every later stage works on typed values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    /// Textual form used by predicates, fingerprints and ADIF output
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(text) => Cow::Borrowed(text.as_str()),
            other => Cow::Owned(other.to_string()),
        }
    }

    /// Check for a value that carries no content
    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Text(text) if text.trim().is_empty())
    }

    /// Check whether the value is a complete numeric literal
    ///
    /// Booleans are never numeric. Text must parse in full after trimming.
    pub fn is_numeric(&self) -> bool {
        match self {
            FieldValue::Integer(_) | FieldValue::Float(_) => true,
            FieldValue::Boolean(_) => false,
            FieldValue::Text(text) => {
                let trimmed = text.trim();
                !trimmed.is_empty()
                    && trimmed.parse::<f64>().is_ok_and(f64::is_finite)
            }
        }
    }

    /// Check whether the value is integral, either typed or as a pure integer literal
    pub fn is_integer(&self) -> bool {
        match self {
            FieldValue::Integer(_) => true,
            FieldValue::Text(text) => text.trim().parse::<i64>().is_ok(),
            _ => false,
        }
    }

    /// Numeric value when [`is_numeric`](Self::is_numeric) holds
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(value) => Some(*value as f64),
            FieldValue::Float(value) => Some(*value),
            FieldValue::Text(text) if self.is_numeric() => text.trim().parse().ok(),
            _ => None,
        }
    }

    /// Lenient numeric conversion
    ///
    /// Reads the longest leading numeric prefix of a text value and yields
    /// 0.0 when there is none, so `"5.5w"` becomes 5.5 and `"abc"` becomes 0.
    /// Non-finite values also become 0.0.
    pub fn to_number(&self) -> f64 {
        match self {
            FieldValue::Integer(value) => *value as f64,
            FieldValue::Float(value) if value.is_finite() => *value,
            FieldValue::Float(_) => 0.0,
            FieldValue::Boolean(value) => f64::from(u8::from(*value)),
            FieldValue::Text(text) => leading_number(text),
        }
    }
}

/// Parse the longest numeric prefix of a string (sign, digits, fraction, exponent)
pub fn leading_number(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    if end == digits_start || &trimmed[digits_start..end] == "." {
        return 0.0;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits = exponent_end;
        while exponent_end < bytes.len() && bytes[exponent_end].is_ascii_digit() {
            exponent_end += 1;
        }
        if exponent_end > exponent_digits {
            end = exponent_end;
        }
    }

    // Overflowing exponents parse to infinity
    trimmed[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Boolean(true) => write!(f, "Y"),
            FieldValue::Boolean(false) => write!(f, "N"),
            FieldValue::Integer(value) => write!(f, "{}", value),
            FieldValue::Float(value) => write!(f, "{}", value),
            FieldValue::Text(text) => write!(f, "{}", text),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

// =============================================================================
// Records
// =============================================================================

/// One logged contact: lower-case field names mapped to values
///
/// Fields iterate in sorted name order, which keeps ADIF and JSON output
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a field name to its stored form
    pub fn normalize_name(name: &str) -> String {
        name.trim().to_lowercase()
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Textual value of a field
    pub fn text(&self, name: &str) -> Option<Cow<'_, str>> {
        self.fields.get(name).map(FieldValue::as_text)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Insert or replace a field, normalizing its name
    pub fn insert(&mut self, name: &str, value: impl Into<FieldValue>) -> Option<FieldValue> {
        self.fields.insert(Self::normalize_name(name), value.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.fields.remove(name)
    }

    /// Keep only the fields accepted by the predicate
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.fields.retain(|name, _| keep(name));
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, FieldValue> {
        self.fields.iter()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Serialized JSON size in bytes, used for output chunking
    pub fn json_size(&self) -> usize {
        serde_json::to_vec(self).map(|bytes| bytes.len()).unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a FieldValue);
    type IntoIter = btree_map::Iter<'a, String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl<K: AsRef<str>, V: Into<FieldValue>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.insert(name.as_ref(), value);
        }
        record
    }
}

// =============================================================================
// Headers
// =============================================================================

/// ADIF header block
///
/// Recognized `<tag:len>value` pairs are stored by lower-case tag name; any
/// other header text is kept line by line in `strings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Headers {
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub strings: Vec<String>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a header tag, or an empty string
    pub fn get(&self, name: &str) -> &str {
        self.fields
            .get(&Record::normalize_name(name))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn set(&mut self, name: &str, value: &str) {
        self.fields
            .insert(Record::normalize_name(name), value.trim().to_string());
    }

    pub fn add_string(&mut self, line: &str) {
        self.strings.push(line.trim().to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.strings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod field_value_tests {
        use super::*;

        #[test]
        fn test_display_forms() {
            assert_eq!(FieldValue::from("w1aw").to_string(), "w1aw");
            assert_eq!(FieldValue::Integer(100).to_string(), "100");
            assert_eq!(FieldValue::Float(1.5).to_string(), "1.5");
            assert_eq!(FieldValue::Boolean(true).to_string(), "Y");
            assert_eq!(FieldValue::Boolean(false).to_string(), "N");
        }

        #[test]
        fn test_numeric_checks() {
            assert!(FieldValue::from("42").is_numeric());
            assert!(FieldValue::from(" -3.5 ").is_numeric());
            assert!(!FieldValue::from("42w").is_numeric());
            assert!(!FieldValue::from("").is_numeric());
            assert!(!FieldValue::Boolean(true).is_numeric());
            assert!(FieldValue::Float(2.0).is_numeric());

            assert!(FieldValue::Integer(3).is_integer());
            assert!(FieldValue::from("3").is_integer());
            assert!(!FieldValue::from("3.0").is_integer());
            assert!(!FieldValue::Float(3.0).is_integer());
        }

        #[test]
        fn test_leading_number() {
            assert_eq!(leading_number("5.5w"), 5.5);
            assert_eq!(leading_number("  100"), 100.0);
            assert_eq!(leading_number("-7"), -7.0);
            assert_eq!(leading_number("1e3x"), 1000.0);
            assert_eq!(leading_number("2e"), 2.0);
            assert_eq!(leading_number("abc"), 0.0);
            assert_eq!(leading_number("."), 0.0);
            assert_eq!(leading_number(""), 0.0);
            assert_eq!(leading_number("1e400"), 0.0);
            assert_eq!(leading_number("-1e400"), 0.0);
        }

        #[test]
        fn test_as_f64() {
            assert_eq!(FieldValue::from("14.074").as_f64(), Some(14.074));
            assert_eq!(FieldValue::Integer(5).as_f64(), Some(5.0));
            assert_eq!(FieldValue::from("n/a").as_f64(), None);
        }

        #[test]
        fn test_json_is_untagged() {
            let values = vec![
                FieldValue::from("abc"),
                FieldValue::Integer(5),
                FieldValue::Boolean(true),
            ];
            let json = serde_json::to_string(&values).unwrap();
            assert_eq!(json, r#"["abc",5,true]"#);
        }
    }

    mod record_tests {
        use super::*;

        #[test]
        fn test_insert_normalizes_names() {
            let mut record = Record::new();
            record.insert(" CALL ", "w1aw");
            assert!(record.contains("call"));
            assert_eq!(record.text("call").as_deref(), Some("w1aw"));
        }

        #[test]
        fn test_fields_iterate_sorted() {
            let record: Record = [("time_on", "1234"), ("call", "w1aw"), ("band", "20m")]
                .into_iter()
                .collect();
            let names: Vec<_> = record.field_names().collect();
            assert_eq!(names, vec!["band", "call", "time_on"]);
        }

        #[test]
        fn test_retain_and_json_size() {
            let mut record: Record = [("call", "w1aw"), ("comment", "hi")].into_iter().collect();
            record.retain(|name| name == "call");
            assert_eq!(record.len(), 1);
            assert_eq!(record.json_size(), r#"{"call":"w1aw"}"#.len());
        }
    }

    mod header_tests {
        use super::*;

        #[test]
        fn test_header_lookup_defaults_to_empty() {
            let mut headers = Headers::new();
            headers.set("ProgramID", " LoggerX ");
            assert_eq!(headers.get("programid"), "LoggerX");
            assert_eq!(headers.get("missing"), "");
        }

        #[test]
        fn test_header_json_shape() {
            let mut headers = Headers::new();
            headers.set("adif_ver", "3.1.4");
            headers.add_string("Generated by hand");
            let json = serde_json::to_value(&headers).unwrap();
            assert_eq!(json["adif_ver"], "3.1.4");
            assert_eq!(json["strings"][0], "Generated by hand");
        }
    }
}
