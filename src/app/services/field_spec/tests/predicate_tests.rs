//! Tests for the format and membership predicates

use crate::app::services::field_spec::*;

#[test]
fn test_field_registry_is_case_insensitive() {
    assert!(is_field("CALL"));
    assert!(is_field(" qso_date "));
    assert!(!is_field("not_a_field"));
}

#[test]
fn test_band_membership() {
    assert!(is_band("20m"));
    assert!(is_band("70CM"));
    assert!(is_band("5M"));
    assert!(!is_band("INVALID"));
    assert!(!is_band(""));
}

#[test]
fn test_band_from_freq() {
    assert_eq!(band_from_freq(14.074), Some("20M"));
    assert_eq!(band_from_freq(7.0), Some("40M"));
    assert_eq!(band_from_freq(146.52), Some("2M"));
    assert_eq!(band_from_freq(42.0), Some("8M"));
    assert_eq!(band_from_freq(60.0), Some("5M"));
    assert_eq!(band_from_freq(9999.0), None);
}

#[test]
fn test_band_from_freq_inclusive_bounds() {
    assert_eq!(band_from_freq(14.0), Some("20M"));
    assert_eq!(band_from_freq(14.35), Some("20M"));
    assert_eq!(band_from_freq(14.351), None);
}

#[test]
fn test_mode_and_submode() {
    assert!(is_mode("ssb"));
    assert!(is_mode("FT8"));
    assert!(!is_mode("USB"));
    assert!(is_submode("usb"));
    assert!(is_submode("FT4"));
    assert!(!is_submode("SSB"));
}

#[test]
fn test_enumerations() {
    assert!(is_continent("na"));
    assert!(!is_continent("XX"));
    assert!(is_ant_path("g"));
    assert!(!is_ant_path("Z"));
    assert!(is_arrl_section("ENY"));
    assert!(is_qso_upload("m"));
    assert!(!is_qso_upload("I"));
    assert!(is_qso_download("I"));
    assert!(is_qsl_sent("Q"));
    assert!(!is_qsl_sent("V"));
    assert!(is_qsl_rcvd("V"));
    assert!(!is_qsl_rcvd("Q"));
    assert!(is_qsl_via("e"));
    assert!(is_propagation("eme"));
    assert!(!is_propagation("WARP"));
}

#[test]
fn test_dxcc() {
    assert!(is_dxcc("291"));
    assert!(is_dxcc(" 1 "));
    assert!(!is_dxcc("2"));
    assert!(!is_dxcc("abc"));
    assert_eq!(dxcc_name(291), Some("UNITED STATES OF AMERICA"));
}

#[test]
fn test_latitude() {
    assert!(is_lat("45.123"));
    assert!(is_lat("-89.5"));
    assert!(is_lat("90.0"));
    assert!(is_lat("90"));
    assert!(!is_lat("90.5"));
    assert!(!is_lat("91.0"));
    assert!(!is_lat("45"));
}

#[test]
fn test_longitude() {
    assert!(is_lon("-179.999"));
    assert!(is_lon("5.5"));
    assert!(is_lon("180"));
    assert!(!is_lon("180.1"));
    assert!(!is_lon("200.0"));
}

#[test]
fn test_maidenhead() {
    assert!(is_maidenhead("FN31"));
    assert!(is_maidenhead("fn31pr"));
    assert!(is_maidenhead("FN31PR12AB34"));
    assert!(!is_maidenhead("FN3"));
    assert!(!is_maidenhead("ZZ31"));
    assert!(!is_maidenhead("FN31PR12AB34CD"));
}

#[test]
fn test_maidenhead_accepts_empty_string() {
    assert!(is_maidenhead(""));
}

#[test]
fn test_date() {
    assert!(is_date("20231225"));
    assert!(is_date("2023-12-25"));
    assert!(is_date("20230231"));
    assert!(!is_date("19291231"));
    assert!(!is_date("20231301"));
    assert!(!is_date("20231200"));
    assert!(!is_date("2023122"));
    assert!(!is_date("29991231"));
}

#[test]
fn test_time() {
    assert!(is_time("1234"));
    assert!(is_time("123456"));
    assert!(is_time("235959"));
    assert!(!is_time("2400"));
    assert!(!is_time("1260"));
    assert!(!is_time("123460"));
    assert!(!is_time("12345"));
}

#[test]
fn test_freq_against_band() {
    assert!(is_freq(14.074, Some("20M")));
    assert!(is_freq(14.074, Some("20m")));
    assert!(!is_freq(7.074, Some("20M")));
    assert!(is_freq(7.074, None));
    assert!(is_freq(7.074, Some("")));
    assert!(!is_freq(99.0, None));
}

#[test]
fn test_callsign() {
    assert!(is_callsign("W1AW"));
    assert!(is_callsign("k1abc/p"));
    assert!(!is_callsign("WWWW"));
    assert!(!is_callsign("1111"));
    assert!(!is_callsign("ABC"));
    assert!(!is_callsign(""));
}

#[test]
fn test_pota_ref() {
    assert!(is_pota_ref("US-0001"));
    assert!(is_pota_ref("us-0001"));
    assert!(is_pota_ref("K-12345"));
    assert!(is_pota_ref("US-0001@US-CA"));
    assert!(!is_pota_ref("US-001"));
    assert!(!is_pota_ref("US-0001,US-0002"));
}

#[test]
fn test_sota_wwff_iota_refs() {
    assert!(is_sota_ref("W7W/KG-001"));
    assert!(is_sota_ref("w7w/kg-001"));
    assert!(!is_sota_ref("W7W-KG-001"));

    assert!(is_wwff_ref("KFF-0001"));
    assert!(is_wwff_ref("dlff-0123"));
    assert!(!is_wwff_ref("K-0001"));

    assert!(is_iota_ref("NA-001"));
    assert!(is_iota_ref("eu-005"));
    assert!(!is_iota_ref("XX-001"));
    assert!(!is_iota_ref("NA"));
}
