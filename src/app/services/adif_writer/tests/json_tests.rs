//! Tests for JSON rendering

use super::*;
use crate::app::services::adif_writer::JsonDocument;
use serde_json::Value;

fn render(document: &Document) -> Value {
    let json = JsonDocument::new(document).render(false).unwrap();
    serde_json::from_str(&json).unwrap()
}

#[test]
fn test_json_top_level_shape() {
    let mut document = create_test_document(&["W1AW"]);
    document.add_header_field("adif_ver", "3.1.4");
    document.add_timer("parse", 1.25);

    let value = render(&document);

    assert_eq!(value["meta"]["count"], 1);
    assert_eq!(value["meta"]["duplicates"], 0);
    assert_eq!(value["meta"]["errors"], 0);
    assert!(value["meta"].get("sources").is_none());
    assert!(value["meta"].get("chunks").is_none());
    assert_eq!(value["headers"]["adif_ver"], "3.1.4");
    assert_eq!(value["entries"][0]["call"], "W1AW");
    assert_eq!(value["timers"]["parse"], 1.25);
    assert_eq!(value["timers"]["total"], 1.25);
    assert!(value.get("duplicates").is_none());
    assert!(value.get("errors").is_none());
}

#[test]
fn test_json_chunked_entries() {
    let mut document = create_test_document(&["W1AW", "K1AB", "N0CALL"]);
    document.set_chunks(vec![vec![0, 1], vec![2]]);

    let value = render(&document);

    assert_eq!(value["meta"]["chunks"], 2);
    assert_eq!(value["entries"][0].as_array().map(Vec::len), Some(2));
    assert_eq!(value["entries"][1][0]["call"], "N0CALL");
}

#[test]
fn test_json_errors_and_sources() {
    let mut document = create_test_document(&["W1AW"]);
    document.set_record_errors(0, vec!["band".to_string()]);
    document.add_document_error("qps");
    document.add_source(vec!["fn=a.adi".to_string()]);

    let value = render(&document);

    assert_eq!(value["meta"]["errors"], 2);
    assert_eq!(value["errors"]["@"][0], "qps");
    assert_eq!(value["errors"]["0"][0], "band");
    assert_eq!(value["meta"]["sources"][0][0], "fn=a.adi");
}

#[test]
fn test_with_timer_updates_total() {
    let mut document = create_test_document(&["W1AW"]);
    document.add_timer("parse", 2.0);

    let json = JsonDocument::new(&document).with_timer("ToJson", 0.5);

    assert_eq!(json.timers().get("tojson"), Some(&0.5));
    assert_eq!(json.timers().get("total"), Some(&2.5));
}

#[test]
fn test_pretty_output_is_multiline() {
    let document = create_test_document(&["W1AW"]);
    let pretty = JsonDocument::new(&document).render(true).unwrap();
    let compact = JsonDocument::new(&document).render(false).unwrap();

    assert!(pretty.lines().count() > 1);
    assert_eq!(compact.lines().count(), 1);
    assert!(compact.ends_with('\n'));
}
