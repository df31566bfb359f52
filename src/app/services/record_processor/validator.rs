//! Domain validation of sanitized records
//!
//! Field checks are table-driven: every validated field maps to a
//! [`ValidationRule`] evaluated by a single dispatcher. Cross-field checks
//! (self-contact, required presence) run after the per-field pass, and the
//! document-level QSO rate check works over the whole record list.

use chrono::NaiveDateTime;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::app::models::{FieldValue, Record};
use crate::app::services::adif_parser::record_timestamp;
use crate::app::services::field_spec::{self, REQUIRED_FIELDS};
use crate::constants::{MAX_QSO_PER_SECOND, SELF_QSO_MARKER};

/// Outcome of validating one record
///
/// `Pass` is distinct from an empty failure list so callers can tell a
/// clean record from one that was never checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Pass,
    Failed(Vec<String>),
}

impl Validation {
    pub fn is_pass(&self) -> bool {
        matches!(self, Validation::Pass)
    }

    /// Failing field names, empty on pass
    pub fn errors(&self) -> &[String] {
        match self {
            Validation::Pass => &[],
            Validation::Failed(errors) => errors,
        }
    }

    pub fn into_errors(self) -> Vec<String> {
        match self {
            Validation::Pass => Vec::new(),
            Validation::Failed(errors) => errors,
        }
    }
}

/// Check applied to a single field value
#[derive(Debug, Clone, Copy)]
pub enum ValidationRule {
    /// Letter, digit and not one repeated character
    Callsign,
    /// Numeric with optional inclusive bounds
    Numeric { min: Option<f64>, max: Option<f64> },
    /// Integer typed, or an integer literal
    Integral,
    /// Textual format or membership predicate
    Format(fn(&str) -> bool),
    /// Comma-separated list of grid locators
    GridList,
    /// Frequency inside the band named by the companion field
    Frequency { band_field: &'static str },
}

const fn range(min: f64, max: f64) -> ValidationRule {
    ValidationRule::Numeric {
        min: Some(min),
        max: Some(max),
    }
}

const NON_NEGATIVE: ValidationRule = ValidationRule::Numeric {
    min: Some(0.0),
    max: None,
};

const NUMERIC: ValidationRule = ValidationRule::Numeric {
    min: None,
    max: None,
};

const VALIDATION_GROUPS: &[(&[&str], ValidationRule)] = &[
    (&["call", "operator", "station_callsign"], ValidationRule::Callsign),
    (&["age"], range(0.0, 120.0)),
    (&["ant_az"], range(0.0, 360.0)),
    (&["ant_el"], range(-90.0, 90.0)),
    (&["a_index"], range(0.0, 400.0)),
    (&["k_index"], range(0.0, 9.0)),
    (&["my_cq_zone"], range(1.0, 40.0)),
    (&["my_itu_zone"], range(1.0, 90.0)),
    (&["sfi"], range(0.0, 300.0)),
    (
        &[
            "distance",
            "max_bursts",
            "my_fists",
            "my_iota_island_id",
            "rx_pwr",
            "srx",
            "stx",
            "ten_ten",
            "tx_pwr",
            "uksmg",
        ],
        NON_NEGATIVE,
    ),
    (&["altitude", "my_altitude"], NUMERIC),
    (&["nr_bursts", "nr_pings"], ValidationRule::Integral),
    (&["freq"], ValidationRule::Frequency { band_field: "band" }),
    (&["freq_rx"], ValidationRule::Frequency { band_field: "band_rx" }),
    (&["band", "band_rx"], ValidationRule::Format(field_spec::is_band)),
    (&["mode"], ValidationRule::Format(field_spec::is_mode)),
    (&["submode"], ValidationRule::Format(field_spec::is_submode)),
    (
        &[
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
        ],
        ValidationRule::Format(field_spec::is_date),
    ),
    (&["time_off", "time_on"], ValidationRule::Format(field_spec::is_time)),
    (&["gridsquare", "my_gridsquare"], ValidationRule::Format(field_spec::is_maidenhead)),
    (&["vucc_grids", "my_vucc_grids"], ValidationRule::GridList),
    (&["lat", "my_lat"], ValidationRule::Format(field_spec::is_lat)),
    (&["lon", "my_lon"], ValidationRule::Format(field_spec::is_lon)),
    (
        &[
            "clublog_qso_upload_status",
            "hamlogeu_qso_upload_status",
            "hamqth_qso_upload_status",
            "hrdlog_qso_upload_status",
            "qrzcom_qso_upload_status",
        ],
        ValidationRule::Format(field_spec::is_qso_upload),
    ),
    (&["qrzcom_qso_download_status"], ValidationRule::Format(field_spec::is_qso_download)),
    (
        &["dcl_qsl_rcvd", "eqsl_qsl_rcvd", "lotw_qsl_rcvd", "qsl_rcvd"],
        ValidationRule::Format(field_spec::is_qsl_rcvd),
    ),
    (
        &["dcl_qsl_sent", "eqsl_qsl_sent", "lotw_qsl_sent", "qsl_sent"],
        ValidationRule::Format(field_spec::is_qsl_sent),
    ),
    (&["qsl_rcvd_via", "qsl_sent_via"], ValidationRule::Format(field_spec::is_qsl_via)),
    (&["ant_path"], ValidationRule::Format(field_spec::is_ant_path)),
    (&["arrl_sect", "my_arrl_sect"], ValidationRule::Format(field_spec::is_arrl_section)),
    (&["cont"], ValidationRule::Format(field_spec::is_continent)),
    (&["dxcc", "my_dxcc"], ValidationRule::Format(field_spec::is_dxcc)),
    (&["prop_mode"], ValidationRule::Format(field_spec::is_propagation)),
    (&["pota_my_park_ref", "pota_park_ref"], ValidationRule::Format(field_spec::is_pota_ref)),
    (&["my_sota_ref", "sota_ref"], ValidationRule::Format(field_spec::is_sota_ref)),
    (&["iota", "my_iota"], ValidationRule::Format(field_spec::is_iota_ref)),
    (&["my_wwff_ref", "wwff_ref"], ValidationRule::Format(field_spec::is_wwff_ref)),
];

static VALIDATION_RULES: LazyLock<HashMap<&'static str, ValidationRule>> = LazyLock::new(|| {
    VALIDATION_GROUPS
        .iter()
        .flat_map(|(fields, rule)| fields.iter().map(move |field| (*field, *rule)))
        .collect()
});

/// Rule for a field, `None` for fields that are not checked
pub fn validation_rule(field: &str) -> Option<ValidationRule> {
    VALIDATION_RULES.get(field).copied()
}

/// Evaluate a rule against a field value
pub fn check_rule(rule: ValidationRule, value: &FieldValue, record: &Record) -> bool {
    match rule {
        ValidationRule::Callsign => field_spec::is_callsign(&value.as_text()),
        ValidationRule::Numeric { min, max } => value.as_f64().is_some_and(|number| {
            min.is_none_or(|min| number >= min) && max.is_none_or(|max| number <= max)
        }),
        ValidationRule::Integral => value.is_integer(),
        ValidationRule::Format(predicate) => predicate(&value.as_text()),
        ValidationRule::GridList => value
            .as_text()
            .split(',')
            .all(|grid| field_spec::is_maidenhead(grid.trim())),
        ValidationRule::Frequency { band_field } => {
            let band = record.text(band_field);
            field_spec::is_freq(value.to_number(), band.as_deref())
        }
    }
}

/// Validate a record against the default required field set
pub fn validate_record(record: &Record) -> Validation {
    validate_record_with(record, REQUIRED_FIELDS)
}

/// Validate a record against an explicit required field set
///
/// Failing names come in field order, then the self-contact marker, then
/// missing required fields in the order given.
pub fn validate_record_with(record: &Record, required: &[&str]) -> Validation {
    let mut errors = Vec::new();
    let mut contact_calls: HashSet<String> = HashSet::new();

    for (name, value) in record {
        if name == "call" || name == "operator" {
            contact_calls.insert(value.as_text().into_owned());
        }
        if let Some(rule) = validation_rule(name) {
            if !check_rule(rule, value, record) {
                errors.push(name.clone());
            }
        }
    }

    // Exactly two distinct values: a missing call or operator fails too
    if contact_calls.len() != 2 {
        errors.push(SELF_QSO_MARKER.to_string());
    }

    for field in required {
        if !record.contains(&Record::normalize_name(field)) {
            errors.push(field.to_string());
        }
    }

    if errors.is_empty() {
        Validation::Pass
    } else {
        Validation::Failed(errors)
    }
}

/// Check that a log's implied contact rate is plausible
///
/// Uses the earliest and latest `qso_date` + `time_on` across all records.
/// Passes only when the span is positive and the rate of all records over
/// that span stays below the threshold.
pub fn check_duration<'a>(records: impl IntoIterator<Item = &'a Record>) -> bool {
    let mut count = 0usize;
    let mut earliest: Option<NaiveDateTime> = None;
    let mut latest: Option<NaiveDateTime> = None;

    for record in records {
        count += 1;
        let Some(stamp) = record_timestamp(record) else {
            continue;
        };
        if earliest.is_none_or(|current| stamp < current) {
            earliest = Some(stamp);
        }
        if latest.is_none_or(|current| stamp > current) {
            latest = Some(stamp);
        }
    }

    let (Some(earliest), Some(latest)) = (earliest, latest) else {
        return false;
    };
    let span = (latest - earliest).num_seconds();

    span > 0 && (count as f64 / span as f64) < MAX_QSO_PER_SECOND
}
