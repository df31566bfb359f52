//! Format and membership predicates over the ADIF domain tables
//!
//! Every predicate takes the raw textual form of a value. Membership checks
//! are case-insensitive because the parser lower-cases record data.

use chrono::{Datelike, Utc};
use regex::Regex;
use std::sync::LazyLock;

use super::tables::{
    ANTENNA_PATHS, ARRL_SECTIONS, BAND_RANGES, CONTINENTS, DXCC_INDEX, KNOWN_FIELD_SET,
    MODE_INDEX, PROPAGATION_MODES, QSL_RCVD_STATUS, QSL_SENT_STATUS, QSL_VIA,
    QSO_DOWNLOAD_STATUS, QSO_UPLOAD_STATUS, SUBMODE_SET,
};
use crate::constants::MIN_QSO_YEAR;

static LAT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?(([0-8]?[0-9])\.[0-9]+|90(\.0+)?)$").expect("latitude pattern")
});

static LON_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?(((1[0-7][0-9])|([0-9]?[0-9]))\.[0-9]+|180(\.0+)?)$")
        .expect("longitude pattern")
});

static POTA_REF_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z0-9]+-[0-9]{4,}(@[A-Z0-9]+(-[A-Z0-9]+)?)?$").expect("POTA pattern")
});

static WWFF_REF_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{1,4}FF-[0-9]{4,}$").expect("WWFF pattern"));

static SOTA_REF_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]+/[A-Z0-9]+-[0-9]{1,3}$").expect("SOTA pattern"));

/// Maidenhead group patterns, one per character pair
const MAIDENHEAD_GROUPS: [fn(u8) -> bool; 6] = [
    |c| (b'A'..=b'R').contains(&c),
    |c| c.is_ascii_digit(),
    |c| (b'A'..=b'X').contains(&c),
    |c| c.is_ascii_digit(),
    |c| (b'A'..=b'X').contains(&c),
    |c| c.is_ascii_digit(),
];

fn in_table(table: &[(&str, &str)], text: &str) -> bool {
    let key = text.trim().to_uppercase();
    table.iter().any(|(code, _)| *code == key)
}

/// Check whether a name is a registered ADIF field
pub fn is_field(text: &str) -> bool {
    KNOWN_FIELD_SET.contains(text.trim().to_lowercase().as_str())
}

/// Check whether a band name exists in the band plan
pub fn is_band(text: &str) -> bool {
    band_range(text).is_some()
}

/// Frequency interval of a band, in MHz
pub fn band_range(band: &str) -> Option<(f64, f64)> {
    let key = band.trim().to_uppercase();
    BAND_RANGES
        .iter()
        .find(|(name, _, _)| *name == key)
        .map(|(_, low, high)| (*low, *high))
}

/// Derive a band name from a frequency in MHz
///
/// Returns the first declared band whose inclusive interval contains the
/// frequency, so overlapping ranges favor the earlier entry.
pub fn band_from_freq(freq: f64) -> Option<&'static str> {
    BAND_RANGES
        .iter()
        .find(|(_, low, high)| freq >= *low && freq <= *high)
        .map(|(name, _, _)| *name)
}

pub fn is_mode(text: &str) -> bool {
    MODE_INDEX.contains_key(text.trim().to_uppercase().as_str())
}

/// Check whether a submode belongs to any registered mode
pub fn is_submode(text: &str) -> bool {
    SUBMODE_SET.contains(text.trim().to_uppercase().as_str())
}

pub fn is_continent(text: &str) -> bool {
    in_table(CONTINENTS, text)
}

pub fn is_ant_path(text: &str) -> bool {
    in_table(ANTENNA_PATHS, text)
}

pub fn is_arrl_section(text: &str) -> bool {
    in_table(ARRL_SECTIONS, text)
}

pub fn is_qso_upload(text: &str) -> bool {
    in_table(QSO_UPLOAD_STATUS, text)
}

pub fn is_qso_download(text: &str) -> bool {
    in_table(QSO_DOWNLOAD_STATUS, text)
}

pub fn is_qsl_sent(text: &str) -> bool {
    in_table(QSL_SENT_STATUS, text)
}

pub fn is_qsl_rcvd(text: &str) -> bool {
    in_table(QSL_RCVD_STATUS, text)
}

pub fn is_qsl_via(text: &str) -> bool {
    in_table(QSL_VIA, text)
}

pub fn is_propagation(text: &str) -> bool {
    in_table(PROPAGATION_MODES, text)
}

/// Check whether a value names a DXCC entity code
pub fn is_dxcc(text: &str) -> bool {
    text.trim()
        .parse::<u16>()
        .map(|code| DXCC_INDEX.contains_key(&code))
        .unwrap_or(false)
}

/// Name of a DXCC entity
pub fn dxcc_name(code: u16) -> Option<&'static str> {
    DXCC_INDEX.get(&code).copied()
}

/// Check a signed decimal latitude in [-90, 90]
pub fn is_lat(text: &str) -> bool {
    LAT_PATTERN.is_match(text.trim())
}

/// Check a signed decimal longitude in [-180, 180]
pub fn is_lon(text: &str) -> bool {
    LON_PATTERN.is_match(text.trim())
}

/// Check a Maidenhead grid locator of 2 to 12 characters
///
/// The empty string passes: zero groups trivially match.
pub fn is_maidenhead(text: &str) -> bool {
    let upper = text.to_uppercase();
    let bytes = upper.as_bytes();
    if bytes.len() > 12 || bytes.len() % 2 != 0 {
        return false;
    }
    bytes
        .chunks(2)
        .zip(MAIDENHEAD_GROUPS)
        .all(|(pair, accepts)| pair.iter().all(|c| accepts(*c)))
}

fn digits(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Check an ADIF date (YYYYMMDD) between 1930 and next year
///
/// Days are checked against 1..=31 only, not against the month's length.
pub fn is_date(text: &str) -> bool {
    let data = digits(text);
    if data.len() != 8 {
        return false;
    }
    let field = |range: std::ops::Range<usize>| data[range].parse::<i32>().unwrap_or(-1);
    let (year, month, day) = (field(0..4), field(4..6), field(6..8));
    let max_year = Utc::now().year() + 1;

    (MIN_QSO_YEAR..=max_year).contains(&year)
        && (1..=12).contains(&month)
        && (1..=31).contains(&day)
}

/// Check an ADIF time (HHMM or HHMMSS)
pub fn is_time(text: &str) -> bool {
    if text.len() != 4 && text.len() != 6 {
        return false;
    }
    let data = digits(text);
    if data.len() < 4 {
        return false;
    }
    let field = |range: std::ops::Range<usize>| data[range].parse::<u32>().unwrap_or(99);
    let hours = field(0..2);
    let minutes = field(2..4);
    let seconds = if data.len() == 6 { field(4..6) } else { 0 };

    hours <= 23 && minutes <= 59 && seconds <= 59
}

/// Check a frequency against a declared band, or against any band when none is given
pub fn is_freq(freq: f64, band: Option<&str>) -> bool {
    if let Some((low, high)) = band.filter(|b| !b.is_empty()).and_then(band_range) {
        return freq >= low && freq <= high;
    }
    band_from_freq(freq).is_some()
}

/// Check a callsign-like value
///
/// Must contain a letter and a digit and must not be one repeated character.
pub fn is_callsign(text: &str) -> bool {
    let has_letter = text.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = text.chars().any(|c| c.is_ascii_digit());
    let repeated = text
        .chars()
        .next()
        .is_some_and(|first| text.chars().all(|c| c == first));

    has_letter && has_digit && !repeated
}

/// Check a single POTA park reference, optionally with an `@location` suffix
pub fn is_pota_ref(text: &str) -> bool {
    POTA_REF_PATTERN.is_match(&text.trim().to_uppercase())
}

pub fn is_sota_ref(text: &str) -> bool {
    SOTA_REF_PATTERN.is_match(&text.trim().to_uppercase())
}

pub fn is_wwff_ref(text: &str) -> bool {
    WWFF_REF_PATTERN.is_match(&text.trim().to_uppercase())
}

/// Check an IOTA reference (continent code, dash, island number)
pub fn is_iota_ref(text: &str) -> bool {
    match text.trim().split_once('-') {
        Some((continent, number)) => {
            is_continent(continent) && !number.is_empty() && number.parse::<f64>().is_ok()
        }
        None => false,
    }
}
