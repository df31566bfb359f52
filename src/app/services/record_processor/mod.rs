//! Record processing module for ADIF documents
//!
//! This module provides the pipeline that runs after parsing: value
//! normalization, validation, duplicate removal and record restructuring.
//!
//! # Architecture
//!
//! The module is organized into logical components:
//! - [`processor`] - Main RecordProcessor struct and pipeline orchestration
//! - [`sanitizer`] - Per-field type coercion and normalization
//! - [`validator`] - Per-field domain checks and the contact-rate heuristic
//! - [`deduplication`] - Fingerprint-based duplicate removal
//! - [`morph`] - Field-set projection and POTA reference unrolling
//! - [`stats`] - Processing statistics
//!
//! # Processing Pipeline
//!
//! 1. **Sanitize**: coerce every known field into its typed, normalized form
//! 2. **Validate**: collect failing field names per record; never drops data
//! 3. **Dedupe**: keep the first record of every fingerprint
//! 4. **Morph**: apply the configured projections and unrolls in order
//!
//! Validation findings and duplicates are stored on the document as data.
//! Only parse failures are returned as errors.

pub mod deduplication;
pub mod morph;
pub mod processor;
pub mod sanitizer;
pub mod stats;
pub mod validator;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use processor::{RecordProcessor, create_processing_progress_bar};
pub use stats::ProcessingStats;

pub use deduplication::{are_duplicates, deduplicate_records, fingerprint};
pub use morph::{ParkRef, Unrolled, morph_records, project_records, unroll_pota_refs, unroll_record};
pub use sanitizer::{SanitizeRule, filter, sanitize_record};
pub use validator::{Validation, check_duration, validate_record, validate_record_with};
