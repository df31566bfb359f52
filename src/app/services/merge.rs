//! Multi-document merge
//!
//! Several parsed logs become one document. Each input contributes a
//! provenance entry, its parse time and its records; validation results and
//! duplicates are not carried over since the pipeline runs after the merge.

use tracing::info;

use crate::app::models::Document;
use crate::constants::timers;

/// Provenance entry for one merged input
///
/// `fn=<filename>` and `ec=<record count>`, then `pn=` / `pv=` from the
/// input's `programid` / `programversion` headers when present.
pub fn source_entry(document: &Document) -> Vec<String> {
    let mut source = vec![
        format!("fn={}", document.filename()),
        format!("ec={}", document.record_count()),
    ];

    let program_id = document.header("programid");
    if !program_id.is_empty() {
        source.push(format!("pn={}", program_id));
    }
    let program_version = document.header("programversion");
    if !program_version.is_empty() {
        source.push(format!("pv={}", program_version));
    }
    source
}

/// Merge parsed documents into one
///
/// A single document is returned unchanged and an empty list yields an
/// empty document.
pub fn merge(documents: Vec<Document>) -> Document {
    if documents.len() <= 1 {
        return documents.into_iter().next().unwrap_or_default();
    }

    let inputs = documents.len();
    let mut merged = Document::new();

    for mut document in documents {
        merged.add_timer(timers::PARSE, document.timer(timers::PARSE));
        merged.add_source(source_entry(&document));
        let records = document.take_records();
        merged.add_records(records.into_iter().map(|entry| entry.record));
    }

    info!(
        "Merged {} documents into {} records",
        inputs,
        merged.record_count()
    );
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::Record;

    fn document_with(filename: &str, calls: &[&str], program: Option<(&str, &str)>) -> Document {
        let mut document = Document::new();
        document.set_filename(filename);
        for call in calls {
            let mut record = Record::new();
            record.insert("call", *call);
            document.add_record(record);
        }
        if let Some((id, version)) = program {
            document.add_header_field("programid", id);
            document.add_header_field("programversion", version);
        }
        document.add_timer(timers::PARSE, 1.5);
        document
    }

    #[test]
    fn test_single_document_unchanged() {
        let document = document_with("one.adi", &["w1aw"], None);
        let merged = merge(vec![document]);

        assert_eq!(merged.filename(), "one.adi");
        assert_eq!(merged.record_count(), 1);
        assert!(merged.sources().is_empty());
    }

    #[test]
    fn test_empty_list_yields_empty_document() {
        let merged = merge(Vec::new());
        assert_eq!(merged.record_count(), 0);
    }

    #[test]
    fn test_merge_concatenates_records_with_fresh_indices() {
        let a = document_with("a.adi", &["w1aw", "k1ab"], None);
        let b = document_with("b.adi", &["n0call"], None);
        let merged = merge(vec![a, b]);

        assert_eq!(merged.record_count(), 3);
        let indices: Vec<usize> = merged.records().iter().map(|entry| entry.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(
            merged.record(2).and_then(|record| record.text("call")).as_deref(),
            Some("n0call")
        );
    }

    #[test]
    fn test_merge_records_provenance_and_parse_time() {
        let a = document_with("a.adi", &["w1aw"], Some(("LOGGER", "1.2")));
        let b = document_with("b.adi", &["k1ab", "n0call"], None);
        let merged = merge(vec![a, b]);

        assert_eq!(
            merged.sources(),
            &[
                vec!["fn=a.adi", "ec=1", "pn=LOGGER", "pv=1.2"],
                vec!["fn=b.adi", "ec=2"],
            ]
        );
        assert_eq!(merged.timer(timers::PARSE), 3.0);
    }
}
