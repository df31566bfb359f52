//! Field-set projection and POTA reference unrolling
//!
//! Projection keeps only the fields of an allow-list. Unrolling expands
//! contacts logged against several parks at once ("n-fers") into one
//! record per park pairing and splits `@location` suffixes off references.

use indicatif::ProgressBar;
use tracing::{debug, info};

use crate::app::models::{Document, IndexedRecord, Record};
use crate::app::services::field_spec::{is_field, is_pota_field};
use crate::config::MorphMode;
use crate::constants::pota;

/// Apply a morph mode to every live record
///
/// Returns the number of fields dropped by a projection, or the number of
/// records expanded by the reference unroll.
pub fn morph_records(
    document: &mut Document,
    mode: MorphMode,
    progress_bar: Option<&ProgressBar>,
) -> usize {
    match mode {
        MorphMode::Strict => project_records(document, is_field),
        MorphMode::PotaOnly => project_records(document, is_pota_field),
        MorphMode::PotaRefs => unroll_pota_refs(document, progress_bar),
    }
}

/// Keep only the fields accepted by the allow-list predicate
pub fn project_records(document: &mut Document, allowed: fn(&str) -> bool) -> usize {
    let mut dropped = 0;
    for entry in document.records_mut() {
        let before = entry.record.len();
        entry.record.retain(allowed);
        dropped += before - entry.record.len();
    }
    debug!("Projection dropped {} fields", dropped);
    dropped
}

/// A single park reference with its optional location suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkRef {
    pub park: String,
    pub location: Option<String>,
}

impl ParkRef {
    /// Split `park@location`, trimming both parts
    pub fn parse(text: &str) -> Self {
        match text.split_once(pota::LOCATION_SEPARATOR) {
            Some((park, location)) => Self {
                park: park.trim().to_string(),
                location: Some(location.trim().to_string()),
            },
            None => Self {
                park: text.trim().to_string(),
                location: None,
            },
        }
    }
}

/// Parse a reference list, dropping empty entries
pub fn parse_ref_list(text: &str) -> Vec<ParkRef> {
    text.split(pota::REF_SEPARATOR)
        .filter(|part| !part.trim().is_empty())
        .map(ParkRef::parse)
        .collect()
}

/// Copy `*_sig_info` into `*_pota_ref` where the latter is absent
fn normalize_aliases(record: &mut Record) {
    let aliases = [
        (pota::MY_SIG_INFO, pota::MY_POTA_REF),
        (pota::SIG_INFO, pota::POTA_REF),
    ];
    for (alias, field) in aliases {
        if record.contains(field) {
            continue;
        }
        if let Some(value) = record.get(alias).cloned() {
            record.insert(field, value);
        }
    }
}

fn stamp_ref(record: &mut Record, park_field: &str, location_field: &str, park_ref: &ParkRef) {
    record.insert(park_field, park_ref.park.as_str());
    if let Some(location) = &park_ref.location {
        record.insert(location_field, location.as_str());
    }
}

fn stamp_mine(record: &mut Record, park_ref: &ParkRef) {
    stamp_ref(record, pota::MY_PARK_REF, pota::MY_LOCATION, park_ref);
}

fn stamp_theirs(record: &mut Record, park_ref: &ParkRef) {
    stamp_ref(record, pota::PARK_REF, pota::LOCATION, park_ref);
}

/// Outcome of unrolling a single record
#[derive(Debug, Clone, PartialEq)]
pub enum Unrolled {
    /// The record keeps its place and index
    InPlace(Record),
    /// The record is replaced by derived records
    Expanded(Vec<Record>),
}

/// A side is a multi-park ("fer") list when it names more than one park
///
/// Stray separators such as a leading comma do not make a list.
fn is_multi(refs: &[ParkRef]) -> bool {
    refs.len() > 1
}

/// Expand one record
///
/// Records without any POTA reference come back untouched. When neither
/// side lists several parks the record is updated in place, otherwise one
/// derived record is produced per (mine, theirs) pairing.
pub fn unroll_record(index: usize, mut record: Record) -> Unrolled {
    normalize_aliases(&mut record);

    let my_text = record.text(pota::MY_POTA_REF).map(|text| text.into_owned());
    let their_text = record.text(pota::POTA_REF).map(|text| text.into_owned());

    if my_text.is_none() && their_text.is_none() {
        return Unrolled::InPlace(record);
    }

    let mine = my_text.as_deref().map(parse_ref_list).unwrap_or_default();
    let theirs = their_text.as_deref().map(parse_ref_list).unwrap_or_default();

    if !is_multi(&mine) && !is_multi(&theirs) {
        let mut suffixed = false;
        if let Some(my_ref) = mine.first() {
            suffixed |= my_ref.location.is_some();
            stamp_mine(&mut record, my_ref);
        }
        if let Some(their_ref) = theirs.first() {
            suffixed |= their_ref.location.is_some();
            stamp_theirs(&mut record, their_ref);
        }
        if suffixed {
            record.insert(pota::UNROLLED_FROM, index as i64);
        }
        return Unrolled::InPlace(record);
    }

    // A side without refs still pairs once, contributing nothing
    let mine: Vec<Option<&ParkRef>> = if mine.is_empty() {
        vec![None]
    } else {
        mine.iter().map(Some).collect()
    };
    let theirs: Vec<Option<&ParkRef>> = if theirs.is_empty() {
        vec![None]
    } else {
        theirs.iter().map(Some).collect()
    };

    let mut derived = Vec::with_capacity(mine.len() * theirs.len());
    for my_ref in &mine {
        for their_ref in &theirs {
            let mut unrolled = record.clone();
            unrolled.insert(pota::UNROLLED_FROM, index as i64);
            if let Some(my_ref) = my_ref {
                stamp_mine(&mut unrolled, my_ref);
            }
            if let Some(their_ref) = their_ref {
                stamp_theirs(&mut unrolled, their_ref);
            }
            derived.push(unrolled);
        }
    }
    Unrolled::Expanded(derived)
}

/// Unroll POTA references across the document
///
/// Derived records take the place of their original in list order and
/// receive fresh stable indices; `pota_unrolled_from_rec` points back at
/// the original's index.
///
/// # Returns
///
/// Number of original records that were expanded
pub fn unroll_pota_refs(document: &mut Document, progress_bar: Option<&ProgressBar>) -> usize {
    let records = document.take_records();
    let before = records.len();
    let mut rebuilt: Vec<IndexedRecord> = Vec::with_capacity(before);
    let mut expanded_count = 0;

    for (position, entry) in records.into_iter().enumerate() {
        if let Some(pb) = progress_bar {
            pb.set_position(position as u64);
        }

        match unroll_record(entry.index, entry.record) {
            Unrolled::InPlace(record) => rebuilt.push(IndexedRecord::new(entry.index, record)),
            Unrolled::Expanded(derived) => {
                debug!("Record {} unrolled into {} records", entry.index, derived.len());
                expanded_count += 1;
                for record in derived {
                    let index = document.allocate_index();
                    rebuilt.push(IndexedRecord::new(index, record));
                }
            }
        }
    }

    document.replace_records(rebuilt);

    info!(
        "POTA reference unroll complete: {} -> {} records ({} expanded)",
        before,
        document.record_count(),
        expanded_count
    );

    expanded_count
}
