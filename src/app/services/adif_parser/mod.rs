//! Lenient ADIF tokenizer and parser
//!
//! ADIF files in the wild rarely follow the formal grammar, so the parser
//! works with tolerant pattern matching rather than a strict lexer. It
//! splits the input on the end-of-header marker, reads `<tag:len>value`
//! pairs from the header block and from every end-of-record chunk, and
//! tracks the chronologically first and last contacts on the way.
//!
//! ## Architecture
//!
//! - [`parser`] - Section splitting and parse orchestration
//! - [`header`] - Header tag and free-text extraction
//! - [`record_parser`] - Field extraction for a single record chunk
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use adif_processor::app::services::adif_parser::AdifParser;
//!
//! # fn example() -> adif_processor::Result<()> {
//! let parser = AdifParser::new();
//! let result = parser.parse("Test\n<eoh>\n<call:5>W1AW<eor>")?;
//!
//! assert_eq!(result.records.len(), 1);
//! assert_eq!(result.records[0].text("call").as_deref(), Some("w1aw"));
//! # Ok(())
//! # }
//! ```

pub mod header;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use header::parse_headers;
pub use parser::AdifParser;
pub use record_parser::{parse_record_chunk, record_timestamp};
pub use stats::{ParseResult, ParseStats};
