//! Output rendering for processed ADIF documents
//!
//! Turns a document's live records back into ADIF text or into a JSON
//! report carrying timers, counts, headers, duplicates and errors.
//!
//! # Architecture
//!
//! - [`adif`] - Header block and `<name:len>value` record rendering
//! - [`json`] - Borrowing JSON view of a document
//! - [`chunking`] - Greedy size-bounded partitioning of the record list
//!
//! # Basic Usage
//!
//! ```rust
//! use adif_processor::app::models::{Document, Record};
//! use adif_processor::app::services::adif_writer::{JsonDocument, render_adif};
//!
//! # fn example() -> adif_processor::Result<()> {
//! let mut document = Document::new();
//! let mut record = Record::new();
//! record.insert("call", "w1aw");
//! document.add_record(record);
//!
//! let adif = render_adif(&document);
//! assert!(adif.contains("<call:4>w1aw"));
//!
//! let json = JsonDocument::new(&document).render(false)?;
//! assert!(json.contains("\"entries\""));
//! # Ok(())
//! # }
//! ```

pub mod adif;
pub mod chunking;
pub mod json;

#[cfg(test)]
pub mod tests;

pub use adif::{render_adif, render_header, render_key_value, render_record};
pub use chunking::plan_chunks;
pub use json::JsonDocument;
