//! Duplicate contact removal
//!
//! Records are fingerprinted over a fixed, ordered field list. A single
//! pass with a hash set keeps the first record for every fingerprint and
//! moves later ones into the document's duplicate map under their stable
//! index.

use indicatif::ProgressBar;
use std::collections::HashSet;
use tracing::{debug, info};

use crate::app::models::{Document, Record};
use crate::app::services::field_spec::UNIQUE_KEY_FIELDS;
use crate::constants::{UNIQUE_KEY_PLACEHOLDER, UNIQUE_KEY_SEPARATOR};

/// Composite dedupe key of a record
///
/// Absent fields contribute a placeholder so that field positions never
/// shift between records.
pub fn fingerprint(record: &Record) -> String {
    UNIQUE_KEY_FIELDS
        .iter()
        .map(|field| {
            record
                .text(field)
                .map(|value| value.into_owned())
                .unwrap_or_else(|| UNIQUE_KEY_PLACEHOLDER.to_string())
        })
        .collect::<Vec<_>>()
        .join(UNIQUE_KEY_SEPARATOR)
}

/// Check whether two records share a fingerprint
pub fn are_duplicates(a: &Record, b: &Record) -> bool {
    fingerprint(a) == fingerprint(b)
}

/// Remove duplicate records from a document
///
/// # Arguments
///
/// * `document` - Document whose live records are deduplicated in place
/// * `progress_bar` - Optional progress bar advanced once per record
///
/// # Returns
///
/// Number of records moved to the duplicate map
pub fn deduplicate_records(document: &mut Document, progress_bar: Option<&ProgressBar>) -> usize {
    let records = document.take_records();
    let total = records.len();
    let mut seen: HashSet<String> = HashSet::with_capacity(total);
    let mut kept = Vec::with_capacity(total);
    let mut removed = 0;

    for (position, entry) in records.into_iter().enumerate() {
        if let Some(pb) = progress_bar {
            pb.set_position(position as u64);
        }

        if seen.insert(fingerprint(&entry.record)) {
            kept.push(entry);
        } else {
            debug!("Record {} duplicates an earlier contact", entry.index);
            document.add_duplicate(entry.index, entry.record);
            removed += 1;
        }
    }

    document.replace_records(kept);

    info!(
        "Deduplication complete: {} -> {} records ({} duplicates)",
        total,
        document.record_count(),
        removed
    );

    removed
}
