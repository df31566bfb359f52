//! Structural pre-parse checks
//!
//! The linter looks at raw text only. It answers whether the input has the
//! header and record markers a parse needs, and in POTA mode whether every
//! record chunk carries the base field tags.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::debug;

use crate::app::models::ErrorKey;
use crate::app::services::field_spec::REQUIRED_FIELDS;
use crate::config::ProcessingMode;
use crate::constants::LINT_BAD_FORM;

static WELL_FORMED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<eoh>.*<eor>").expect("well-formed pattern"));

static RECORD_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<eor>").expect("record separator pattern"));

static FIELD_TAGS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    REQUIRED_FIELDS
        .iter()
        .map(|field| {
            let pattern = format!(r"(?is)<{}:[0-9]*>", regex::escape(field));
            (*field, Regex::new(&pattern).expect("field tag pattern"))
        })
        .collect()
});

/// Findings keyed by `"@"` for the document or by record chunk position
pub type LintFindings = BTreeMap<ErrorKey, Vec<String>>;

fn bad_form() -> LintFindings {
    BTreeMap::from([(ErrorKey::Document, vec![LINT_BAD_FORM.to_string()])])
}

/// Lint raw ADIF text
///
/// An empty result means the text passed.
pub fn lint(text: &str, mode: ProcessingMode) -> LintFindings {
    let text = text.trim();
    if !WELL_FORMED.is_match(text) {
        debug!("Lint: missing <eoh> or <eor>");
        return bad_form();
    }

    match mode {
        ProcessingMode::Pota => lint_pota(text),
        ProcessingMode::Default => LintFindings::new(),
    }
}

/// Report base field tags missing from each record chunk
///
/// The header block travels with the first chunk, as in the raw text.
pub fn lint_pota(text: &str) -> LintFindings {
    let mut findings = LintFindings::new();

    for (position, chunk) in RECORD_SEPARATOR.split(text).enumerate() {
        if chunk.trim().is_empty() {
            continue;
        }
        let missing: Vec<String> = FIELD_TAGS
            .iter()
            .filter(|(_, tag)| !tag.is_match(chunk))
            .map(|(field, _)| field.to_string())
            .collect();
        if !missing.is_empty() {
            findings.insert(ErrorKey::Record(position), missing);
        }
    }

    findings
}
