//! ADIF header parsing
//!
//! The header block is scanned left to right. Each position either starts
//! a `<tag:length>value` pair or begins a free-text run that extends to the
//! end of its line. Tag names are lower-cased; header values and free text
//! keep their case.

use regex::Regex;
use std::sync::LazyLock;

use super::record_parser::{bounded_value, declared_length};
use crate::app::models::Headers;

static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<([a-z_]*):(.+?)>([a-z0-9_\x20-\x2E/:@]+)?|(.*)").expect("header pattern")
});

/// Parse header text into tags and free-form lines
///
/// Later occurrences of a tag replace earlier ones.
pub fn parse_headers(text: &str) -> Headers {
    let mut headers = Headers::new();

    for caps in HEADER_PATTERN.captures_iter(text) {
        if let Some(line) = caps.get(4) {
            let line = line.as_str().trim();
            if !line.is_empty() {
                headers.add_string(line);
            }
            continue;
        }

        let name = &caps[1];
        if name.is_empty() {
            continue;
        }
        let run = caps.get(3).map_or("", |m| m.as_str());
        headers.set(name, bounded_value(run, declared_length(&caps[2])));
    }

    headers
}
