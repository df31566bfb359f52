//! Field-by-field normalization of parsed records
//!
//! Each known field maps to a [`SanitizeRule`] in a static table; one
//! dispatcher applies the rule to the field's value. After the per-field
//! pass the sanitizer derives missing values: `operator` from
//! `station_callsign`, `submode` from a USB/LSB mode, and a band from the
//! frequency when the declared band is not in the band plan.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::app::models::{FieldValue, Record};
use crate::app::services::field_spec::{band_from_freq, is_band};
use crate::constants::{FREQUENCY_DECIMALS, TIME_WIDTH};

/// Normalization applied to a single field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanitizeRule {
    /// Truncating integer coercion; non-numeric text becomes 0
    Integer,
    /// Floating point coercion; non-numeric text becomes 0.0
    Float,
    /// Keep at most this many characters
    Truncate(usize),
    /// Trim and upper-case
    Upper,
    /// Trim and upper-case; USB and LSB become SSB with a submode
    Mode,
    /// Keep digits only
    DateDigits,
    /// Keep digits only, right-padded with zeros to HHMMSS
    TimeDigits,
    /// Fixed six-decimal frequency string
    Frequency,
    /// Truthy or falsy text to boolean
    Boolean,
}

const DATE_FIELDS: &[&str] = &[
    "dcl_qslrdate",
    "dcl_qslsdate",
    "eqsl_qslrdate",
    "eqsl_qslsdate",
    "hamlogeu_qso_upload_date",
    "hamqth_qso_upload_date",
    "hrdlog_qso_upload_date",
    "lotw_qslrdate",
    "lotw_qslsdate",
    "qrzcom_qso_download_date",
    "qrzcom_qso_upload_date",
    "qslrdate",
    "qslsdate",
    "qso_date",
    "qso_date_off",
];

const STATUS_FIELDS: &[&str] = &[
    "ant_path",
    "clublog_qso_upload_status",
    "dcl_qsl_rcvd",
    "dcl_qsl_sent",
    "eqsl_qsl_rcvd",
    "eqsl_qsl_sent",
    "hamlogeu_qso_upload_status",
    "hamqth_qso_upload_status",
    "hrdlog_qso_upload_status",
    "lotw_qsl_rcvd",
    "lotw_qsl_sent",
    "qrzcom_qso_download_status",
    "qrzcom_qso_upload_status",
    "qsl_rcvd",
    "qsl_sent",
];

const UPPER_FIELDS: &[&str] = &[
    "band",
    "band_rx",
    "call",
    "cnty",
    "gridsquare",
    "my_gridsquare",
    "my_pota_ref",
    "my_sig",
    "my_sig_info",
    "my_state",
    "operator",
    "pota_location",
    "pota_my_location",
    "pota_my_park_ref",
    "pota_park_ref",
    "pota_ref",
    "prop_mode",
    "sig",
    "sig_info",
    "state",
    "station_callsign",
    "submode",
];

const INTEGER_FIELDS: &[&str] = &[
    "a_index",
    "age",
    "ant_az",
    "ant_el",
    "dxcc",
    "k_index",
    "max_bursts",
    "my_altitude",
    "my_dxcc",
    "rx_pwr",
    "sfi",
    "srx",
    "stx",
    "tx_pwr",
];

static SANITIZE_RULES: LazyLock<HashMap<&'static str, SanitizeRule>> = LazyLock::new(|| {
    let groups: [(&[&'static str], SanitizeRule); 10] = [
        (INTEGER_FIELDS, SanitizeRule::Integer),
        (&["altitude", "distance"], SanitizeRule::Float),
        (STATUS_FIELDS, SanitizeRule::Truncate(1)),
        (&["cont"], SanitizeRule::Truncate(2)),
        (UPPER_FIELDS, SanitizeRule::Upper),
        (&["mode"], SanitizeRule::Mode),
        (DATE_FIELDS, SanitizeRule::DateDigits),
        (&["time_off", "time_on"], SanitizeRule::TimeDigits),
        (&["freq", "freq_rx"], SanitizeRule::Frequency),
        (&["force_init", "qso_random", "silent_key"], SanitizeRule::Boolean),
    ];

    groups
        .into_iter()
        .flat_map(|(fields, rule)| fields.iter().map(move |field| (*field, rule)))
        .collect()
});

const FALSY_VALUES: &[&str] = &["", "0", "n", "no", "false", "off"];

/// Rule for a field, `None` for pass-through fields such as `rst_sent`
pub fn sanitize_rule(field: &str) -> Option<SanitizeRule> {
    SANITIZE_RULES.get(field).copied()
}

fn digits_only(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Apply one rule to one value
pub fn apply_rule(rule: SanitizeRule, value: &FieldValue) -> FieldValue {
    match rule {
        SanitizeRule::Integer => match value {
            FieldValue::Integer(_) => value.clone(),
            other => FieldValue::Integer(other.to_number().trunc() as i64),
        },
        SanitizeRule::Float => FieldValue::Float(value.to_number()),
        SanitizeRule::Truncate(limit) => {
            FieldValue::Text(value.as_text().chars().take(limit).collect())
        }
        SanitizeRule::Upper | SanitizeRule::Mode => {
            FieldValue::Text(value.as_text().trim().to_uppercase())
        }
        SanitizeRule::DateDigits => FieldValue::Text(digits_only(&value.as_text())),
        SanitizeRule::TimeDigits => FieldValue::Text(format!(
            "{:0<width$}",
            digits_only(&value.as_text()),
            width = TIME_WIDTH
        )),
        SanitizeRule::Frequency => FieldValue::Text(format!(
            "{:.prec$}",
            value.to_number(),
            prec = FREQUENCY_DECIMALS
        )),
        SanitizeRule::Boolean => match value {
            FieldValue::Boolean(_) => value.clone(),
            other => {
                let text = other.as_text().trim().to_lowercase();
                FieldValue::Boolean(!FALSY_VALUES.contains(&text.as_str()))
            }
        },
    }
}

/// Normalize a record
///
/// Never fails: unusable values degrade to a coerced default or pass
/// through unchanged.
pub fn sanitize_record(mut record: Record) -> Record {
    if record.contains("station_callsign") && !record.contains("operator") {
        if let Some(callsign) = record.get("station_callsign").cloned() {
            record.insert("operator", callsign);
        }
    }

    let mut sanitized = Record::new();
    let mut sideband = None;
    for (name, value) in &record {
        let value = match sanitize_rule(name) {
            Some(rule) => apply_rule(rule, value),
            None => value.clone(),
        };
        if sanitize_rule(name) == Some(SanitizeRule::Mode) {
            let mode = value.as_text();
            if mode == "USB" || mode == "LSB" {
                sideband = Some(mode.into_owned());
            }
        }
        sanitized.insert(name, value);
    }

    if let Some(sideband) = sideband {
        sanitized.insert("submode", sideband);
        sanitized.insert("mode", "SSB");
    }

    derive_band(&mut sanitized, "band", "freq");
    derive_band(&mut sanitized, "band_rx", "freq_rx");

    sanitized
}

/// Replace an unknown band with the band containing the frequency
fn derive_band(record: &mut Record, band_field: &str, freq_field: &str) {
    let band_is_valid = match record.text(band_field) {
        Some(band) => is_band(&band),
        None => return,
    };
    if band_is_valid {
        return;
    }

    let derived = record
        .get(freq_field)
        .map(FieldValue::to_number)
        .and_then(band_from_freq);
    if let Some(band) = derived {
        record.insert(band_field, band);
    }
}

/// Strip optional fields that failed validation
///
/// Any failing field name found in `optional` is removed from both the
/// record and the error list. Returns the cleaned record and the errors
/// that remain; the record is still errored when that list is non-empty.
pub fn filter(
    mut record: Record,
    errors: Vec<String>,
    optional: &[&str],
) -> (Record, Vec<String>) {
    let optional: HashSet<&str> = optional.iter().copied().collect();
    let mut remaining = Vec::with_capacity(errors.len());

    for error in errors {
        if optional.contains(error.as_str()) {
            record.remove(&error);
        } else {
            remaining.push(error);
        }
    }

    (record, remaining)
}
