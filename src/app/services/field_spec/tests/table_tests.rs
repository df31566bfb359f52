//! Tests for the static domain tables

use crate::app::services::field_spec::tables::*;
use crate::app::services::field_spec::{is_pota_field, required_fields};
use std::collections::HashSet;

#[test]
fn test_known_fields_are_lowercase_and_unique() {
    let unique: HashSet<_> = KNOWN_FIELDS.iter().collect();
    assert_eq!(unique.len(), KNOWN_FIELDS.len());
    for field in KNOWN_FIELDS {
        assert_eq!(*field, field.to_lowercase(), "field {} is not lower-case", field);
    }
}

#[test]
fn test_pota_fields_are_known() {
    for field in POTA_FIELDS {
        assert!(KNOWN_FIELD_SET.contains(field), "{} missing from registry", field);
    }
    assert!(is_pota_field("my_pota_ref"));
    assert!(!is_pota_field("comment"));
}

#[test]
fn test_pota_optional_fields_subset_of_pota_fields() {
    for field in POTA_OPTIONAL_FIELDS {
        assert!(POTA_FIELDS.contains(field), "{} not in POTA allow-list", field);
    }
}

#[test]
fn test_band_ranges_are_ordered_intervals() {
    for (name, low, high) in BAND_RANGES {
        assert!(low < high, "band {} has inverted range", name);
    }
    let names: HashSet<_> = BAND_RANGES.iter().map(|(name, _, _)| name).collect();
    assert_eq!(names.len(), BAND_RANGES.len());
}

#[test]
fn test_unique_key_fields_order() {
    assert_eq!(UNIQUE_KEY_FIELDS.first(), Some(&"band"));
    assert_eq!(UNIQUE_KEY_FIELDS.last(), Some(&"submode"));
    assert_eq!(UNIQUE_KEY_FIELDS.len(), 10);
}

#[test]
fn test_required_fields_by_mode() {
    let default = required_fields(false);
    assert_eq!(default, REQUIRED_FIELDS.to_vec());

    let pota = required_fields(true);
    assert_eq!(pota.len(), REQUIRED_FIELDS.len() + 1);
    assert!(pota.contains(&"pota_my_park_ref"));
}

#[test]
fn test_mode_index_covers_submodes() {
    assert_eq!(MODE_INDEX.get("SSB"), Some(&&["LSB", "USB"][..]));
    assert!(SUBMODE_SET.contains("FT4"));
    assert!(SUBMODE_SET.contains("USB"));
}

#[test]
fn test_dxcc_index() {
    assert_eq!(DXCC_INDEX.get(&291), Some(&"UNITED STATES OF AMERICA"));
    assert_eq!(DXCC_INDEX.get(&1), Some(&"CANADA"));
    assert!(!DXCC_INDEX.contains_key(&2));
}
