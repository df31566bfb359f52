//! Application constants for the ADIF processor
//!
//! This module contains format markers, pipeline thresholds, synthetic error
//! markers and the default values used throughout the ADIF processor.

// =============================================================================
// ADIF Format Markers
// =============================================================================

/// End-of-header marker (matched case-insensitively)
pub const END_OF_HEADER: &str = "<eoh>";

/// End-of-record marker (matched case-insensitively)
pub const END_OF_RECORD: &str = "<eor>";

/// Opening character of every ADIF tag
pub const TAG_OPEN: char = '<';

/// ADIF specification version written into generated headers
pub const ADIF_VERSION: &str = "3.1.6";

/// Program identifier written into generated headers
pub const PROGRAM_ID: &str = "ADIF-PROCESSOR";

/// Program version written into generated headers
pub const PROGRAM_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Pipeline Thresholds
// =============================================================================

/// Maximum plausible contact rate for a whole log (QSOs per second, exclusive)
pub const MAX_QSO_PER_SECOND: f64 = 5.0;

/// Earliest year accepted for any ADIF date field
pub const MIN_QSO_YEAR: i32 = 1930;

/// Default upper bound for a single output chunk, in serialized bytes
pub const CHUNK_MAX_SIZE: usize = 2_000_000;

/// Fixed decimal places used when normalizing frequencies
pub const FREQUENCY_DECIMALS: usize = 6;

/// Width that time fields are right-padded to (HHMMSS)
pub const TIME_WIDTH: usize = 6;

// =============================================================================
// Error And Audit Markers
// =============================================================================

/// Key of the document-level bucket in the error map
pub const DOCUMENT_ERROR_KEY: &str = "@";

/// Marker recorded when `call` and `operator` are not two distinct values
pub const SELF_QSO_MARKER: &str = "@self";

/// Marker recorded when the document's QSO rate is implausible
pub const QPS_MARKER: &str = "qps";

/// Header bucket holding free-form header lines
pub const HEADER_STRINGS_KEY: &str = "strings";

/// Message reported by the linter for structurally broken input
pub const LINT_BAD_FORM: &str = "ADIF requires <eoh> and at least one <eor>";

/// Dedupe fingerprint separator
pub const UNIQUE_KEY_SEPARATOR: &str = "|";

/// Dedupe fingerprint placeholder for absent fields
pub const UNIQUE_KEY_PLACEHOLDER: &str = "-";

// =============================================================================
// Timer Names
// =============================================================================

/// Stage timer names, recorded in milliseconds
pub mod timers {
    pub const PARSE: &str = "parse";
    pub const SANITIZE: &str = "sanitize";
    pub const VALIDATE: &str = "validate";
    pub const DEDUPE: &str = "dedupe";
    pub const MORPH: &str = "morph";
    pub const UNROLL: &str = "unroll_pota_refs";
    pub const CHUNK: &str = "chunk";
    pub const LINT: &str = "lint";
    pub const TO_ADIF: &str = "toadif";
    pub const TO_JSON: &str = "tojson";
    /// Synthetic sum of every other timer
    pub const TOTAL: &str = "total";
}

// =============================================================================
// Synthesized POTA Fields
// =============================================================================

/// Field names produced by the POTA reference unroller
pub mod pota {
    pub const MY_POTA_REF: &str = "my_pota_ref";
    pub const POTA_REF: &str = "pota_ref";
    pub const MY_SIG_INFO: &str = "my_sig_info";
    pub const SIG_INFO: &str = "sig_info";
    pub const MY_PARK_REF: &str = "pota_my_park_ref";
    pub const MY_LOCATION: &str = "pota_my_location";
    pub const PARK_REF: &str = "pota_park_ref";
    pub const LOCATION: &str = "pota_location";
    pub const UNROLLED_FROM: &str = "pota_unrolled_from_rec";

    /// Separator between references of a multi-park ("n-fer") activation
    pub const REF_SEPARATOR: char = ',';

    /// Separator between a park reference and its location suffix
    pub const LOCATION_SEPARATOR: char = '@';
}

// =============================================================================
// Configuration
// =============================================================================

/// Directory name under the user config directory
pub const CONFIG_DIR_NAME: &str = "adif-processor";

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "config.json";
