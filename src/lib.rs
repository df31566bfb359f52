//! ADIF Processor Library
//!
//! A Rust library for cleaning up amateur-radio logbooks exchanged in the
//! ADIF (Amateur Data Interchange Format) tagged text format.
//!
//! This library provides tools for:
//! - Leniently parsing ADIF header and record sections
//! - Sanitizing field values into typed, normalized form
//! - Validating fields against the ADIF domain tables and QSO-rate plausibility
//! - Removing duplicate contacts with an O(n) fingerprint pass
//! - Projecting field sets and unrolling multi-park POTA contacts
//! - Merging several logs and rendering ADIF or JSON output

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod adif_parser;
        pub mod adif_writer;
        pub mod field_spec;
        pub mod linter;
        pub mod merge;
        pub mod record_processor;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Document, FieldValue, Record};
pub use config::{PipelineConfig, ProcessingMode};

/// Result type alias for the ADIF processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for ADIF processing operations
///
/// Only input, configuration and output failures are errors. Validation
/// findings and duplicates are recorded on the document as data.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input path does not exist or is not a file
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Input has no recognizable header or record markers
    #[error("Malformed input: {message}")]
    MalformedInput { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// JSON serialization or deserialization failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Input glob pattern could not be compiled
    #[error("Invalid input pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a malformed input error
    pub fn malformed_input(message: impl Into<String>) -> Self {
        Self::MalformedInput {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create an invalid glob pattern error
    pub fn invalid_pattern(pattern: impl Into<String>, source: glob::PatternError) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}
