//! ADIF field specification
//!
//! Process-wide immutable domain tables and the predicates every pipeline
//! stage consults: the field registry, band plan, modes and submodes, DXCC
//! entities, status enumerations and the reference/locator format checks.
//!
//! # Architecture
//!
//! - [`tables`] - Static data, declared as slices with lazily built indices
//! - [`predicates`] - Pure format and membership checks over the tables

pub mod predicates;
pub mod tables;

#[cfg(test)]
pub mod tests;

pub use predicates::{
    band_from_freq, band_range, dxcc_name, is_ant_path, is_arrl_section, is_band, is_callsign,
    is_continent, is_date, is_dxcc, is_field, is_freq, is_iota_ref, is_lat, is_lon,
    is_maidenhead, is_mode, is_pota_ref, is_propagation, is_qsl_rcvd, is_qsl_sent, is_qsl_via,
    is_qso_download, is_qso_upload, is_sota_ref, is_submode, is_time, is_wwff_ref,
};
pub use tables::{
    KNOWN_FIELDS, POTA_FIELDS, POTA_OPTIONAL_FIELDS, POTA_REQUIRED_FIELD, REQUIRED_FIELDS,
    UNIQUE_KEY_FIELDS,
};

/// Check whether a field belongs to the POTA allow-list
pub fn is_pota_field(name: &str) -> bool {
    tables::POTA_FIELD_SET.contains(name)
}

/// Required field set for a processing mode
pub fn required_fields(pota_mode: bool) -> Vec<&'static str> {
    let mut fields = REQUIRED_FIELDS.to_vec();
    if pota_mode {
        fields.push(POTA_REQUIRED_FIELD);
    }
    fields
}
