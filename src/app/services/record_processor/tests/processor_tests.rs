//! Tests for the main RecordProcessor and pipeline scenarios

use super::*;
use crate::Error;
use crate::app::models::{ErrorKey, FieldValue};
use crate::app::services::record_processor::RecordProcessor;
use crate::config::{MorphMode, PipelineConfig, ProcessingMode};

fn quiet_config() -> PipelineConfig {
    PipelineConfig::default().with_check_qps(false)
}

fn adif_text(records: &[&str]) -> String {
    let mut text = String::from("Test log\n<adif_ver:5>3.1.4\n<eoh>\n");
    for record in records {
        text.push_str(record);
        text.push_str("<eor>\n");
    }
    text
}

#[test]
fn test_record_processor_new() {
    let processor = RecordProcessor::new(quiet_config().with_mode(ProcessingMode::Pota));
    assert!(processor.config().mode.is_pota());
    assert!(!processor.config().check_qps);
}

#[test]
fn test_parse_minimal_document() {
    let processor = RecordProcessor::default();
    let mut document = Document::from_text("Test\n<eoh>\n<call:5>W1AW<eor>");

    let stats = processor.parse(&mut document).unwrap();

    assert_eq!(stats.records_parsed, 1);
    assert_eq!(document.record_count(), 1);
    assert_eq!(
        document.records()[0].record.text("call").as_deref(),
        Some("w1aw")
    );
    assert!(document.timers().contains_key("parse"));
}

#[test]
fn test_parse_twice_replaces_records() {
    let processor = RecordProcessor::default();
    let mut document = Document::from_text("h<eoh><call:4>w1aw<eor><call:4>k1ab<eor>");

    processor.parse(&mut document).unwrap();
    assert_eq!(document.record_count(), 2);

    processor.parse(&mut document).unwrap();
    assert_eq!(document.record_count(), 2);
    let indices: Vec<usize> = document.records().iter().map(|entry| entry.index).collect();
    assert_eq!(indices, vec![0, 1]);
    // Repeating the stage still accumulates its timer
    assert!(document.timers().contains_key("parse"));
}

#[test]
fn test_parse_discards_previous_pipeline_state() {
    let processor = RecordProcessor::new(quiet_config());
    let mut document = Document::from_text("h<eoh><call:4>w1aw<eor><call:4>w1aw<eor>");

    processor.parse(&mut document).unwrap();
    processor.validate(&mut document, None);
    processor.dedupe(&mut document, None);
    processor.chunk(&mut document, 1);
    assert!(document.has_errors());
    assert!(document.has_dupes());
    assert!(!document.chunks().is_empty());

    processor.parse(&mut document).unwrap();

    assert_eq!(document.record_count(), 2);
    assert!(!document.has_errors());
    assert!(!document.has_dupes());
    assert!(document.chunks().is_empty());
}

#[test]
fn test_parse_failure_keeps_document() {
    let processor = RecordProcessor::default();
    let mut document = create_test_document(vec![create_valid_record("k1ab", "1200")]);

    assert!(processor.parse(&mut document).is_err());
    assert_eq!(document.record_count(), 1);
}

#[test]
fn test_parse_malformed_input() {
    let processor = RecordProcessor::default();
    let mut document = Document::from_text("this is not adif <eor");

    let result = processor.parse(&mut document);
    assert!(matches!(result, Err(Error::MalformedInput { .. })));
}

#[test]
fn test_parse_applies_overrides() {
    let processor = RecordProcessor::new(quiet_config().with_override("Operator", "N0CALL"));
    let text = adif_text(&["<call:4>K1AB<operator:4>W1AW", "<call:4>K2AB"]);
    let mut document = Document::from_text(text);

    processor.parse(&mut document).unwrap();

    for entry in document.records() {
        assert_eq!(entry.record.text("operator").as_deref(), Some("N0CALL"));
    }
}

#[test]
fn test_parse_tracks_chronology() {
    let processor = RecordProcessor::default();
    let text = adif_text(&[
        "<call:4>K1AB<qso_date:8>20240102<time_on:4>1200",
        "<call:4>K2AB<qso_date:8>20240101<time_on:4>0900",
        "<call:4>K3AB<qso_date:8>20240103<time_on:4>0000",
    ]);
    let mut document = Document::from_text(text);

    processor.parse(&mut document).unwrap();

    let first = document.first_entry().and_then(|record| record.text("call"));
    let last = document.last_entry().and_then(|record| record.text("call"));
    assert_eq!(first.as_deref(), Some("k2ab"));
    assert_eq!(last.as_deref(), Some("k3ab"));
}

#[test]
fn test_load_raw_text() {
    let processor = RecordProcessor::default();
    let document = processor.load("h\n<eoh>\n<call:4>K1AB<eor>").unwrap();
    assert_eq!(document.record_count(), 1);
}

#[test]
fn test_sanitize_stage() {
    let processor = RecordProcessor::default();
    let mut document = create_test_document(vec![create_test_record(&[
        ("band", "INVALID"),
        ("freq", "14.074"),
    ])]);

    let count = processor.sanitize(&mut document, None);

    assert_eq!(count, 1);
    assert_eq!(
        document.records()[0].record.text("band").as_deref(),
        Some("20M")
    );
    assert!(document.timers().contains_key("sanitize"));
}

#[test]
fn test_validate_stores_errors_by_stable_index() {
    let processor = RecordProcessor::new(quiet_config());
    let mut bad = create_valid_record("k2ab", "1201");
    bad.remove("call");
    let mut document = create_test_document(vec![
        create_valid_record("k1ab", "1200"),
        bad,
        create_valid_record("k3ab", "1202"),
    ]);

    let invalid = processor.validate(&mut document, None);

    assert_eq!(invalid, 1);
    assert!(document.record_errors(0).is_none());
    let errors = document.record_errors(1).unwrap();
    assert!(errors.contains(&"call".to_string()));
    assert!(!document.errors().contains_key(&ErrorKey::Document));
    // Validation never drops records
    assert_eq!(document.record_count(), 3);
}

#[test]
fn test_validate_pota_mode_strips_optional_failures() {
    let processor = RecordProcessor::new(quiet_config().with_mode(ProcessingMode::Pota));
    let mut record = create_valid_record("k1ab", "1200");
    record.insert("pota_my_park_ref", "us-0001");
    record.insert("gridsquare", "zz99");
    let mut document = create_test_document(vec![record]);

    let invalid = processor.validate(&mut document, None);

    assert_eq!(invalid, 0);
    assert!(!document.has_errors());
    assert!(!document.records()[0].record.contains("gridsquare"));
}

#[test]
fn test_validate_pota_mode_keeps_required_failures() {
    let processor = RecordProcessor::new(quiet_config().with_mode(ProcessingMode::Pota));
    let mut record = create_valid_record("k1ab", "1200");
    record.insert("gridsquare", "zz99");
    let mut document = create_test_document(vec![record]);

    let invalid = processor.validate(&mut document, None);

    assert_eq!(invalid, 1);
    assert_eq!(
        document.record_errors(0),
        Some(&["pota_my_park_ref".to_string()][..])
    );
    assert!(!document.records()[0].record.contains("gridsquare"));
}

#[test]
fn test_validate_flags_implausible_rate() {
    let processor = RecordProcessor::default();
    let records = (0..10)
        .map(|i| create_valid_record(&format!("k{}ab", i), "1200"))
        .collect();
    let mut document = create_test_document(records);

    processor.validate(&mut document, None);

    assert_eq!(
        document.errors().get(&ErrorKey::Document),
        Some(&vec!["qps".to_string()])
    );
}

#[test]
fn test_validate_rate_check_can_be_disabled() {
    let processor = RecordProcessor::new(quiet_config());
    let mut document = create_test_document(vec![create_valid_record("k1ab", "1200")]);

    processor.validate(&mut document, None);

    assert!(!document.has_errors());
}

#[test]
fn test_revalidation_clears_fixed_records() {
    let processor = RecordProcessor::new(quiet_config());
    let mut record = create_valid_record("k1ab", "1200");
    record.insert("band", "bogus");
    let mut document = create_test_document(vec![record]);

    processor.validate(&mut document, None);
    assert!(document.record_errors(0).is_some());

    processor.sanitize(&mut document, None);
    processor.validate(&mut document, None);
    assert!(document.record_errors(0).is_none());
}

#[test]
fn test_dedupe_stage() {
    let processor = RecordProcessor::default();
    let mut document = create_test_document(vec![
        create_valid_record("k1ab", "1200"),
        create_valid_record("k1ab", "1200"),
    ]);

    assert_eq!(processor.dedupe(&mut document, None), 1);
    assert_eq!(document.record_count(), 1);
    assert_eq!(document.duplicates().len(), 1);
    assert!(document.timers().contains_key("dedupe"));
}

#[test]
fn test_morph_stage_timer_names() {
    let processor = RecordProcessor::default();
    let mut document = create_test_document(vec![create_test_record(&[(
        "my_pota_ref",
        "us-0001,us-0002",
    )])]);

    processor.morph(&mut document, MorphMode::PotaRefs, None);
    processor.morph(&mut document, MorphMode::Strict, None);

    let timers = document.timers();
    assert!(timers.contains_key("unroll_pota_refs"));
    assert!(timers.contains_key("morph"));
}

#[test]
fn test_chunk_stage() {
    let processor = RecordProcessor::default();
    let mut document = create_spaced_document(4);

    assert_eq!(processor.chunk(&mut document, 2_000_000), 1);
    assert_eq!(document.chunks(), &[vec![0usize, 1, 2, 3]]);

    assert_eq!(processor.chunk(&mut document, 1), 4);
    assert_eq!(document.chunks().len(), 4);
}

#[test]
fn test_lint_stage() {
    let processor = RecordProcessor::default();
    let mut document = Document::from_text("no markers here");

    let findings = processor.lint(&mut document);

    assert!(findings.contains_key(&ErrorKey::Document));
    assert!(document.timers().contains_key("lint"));
}

#[test]
fn test_render_adif_stage() {
    let processor = RecordProcessor::default();
    let mut document = create_test_document(vec![create_test_record(&[("call", "W1AW")])]);

    let adif = processor.render_adif(&mut document);

    assert!(adif.contains("<eoh>"));
    assert!(adif.contains("<call:4>W1AW\n<eor>"));
    assert!(document.timers().contains_key("toadif"));
}

#[test]
fn test_render_json_stage() {
    let processor = RecordProcessor::default();
    let mut document = create_test_document(vec![
        create_valid_record("k1ab", "1200"),
        create_valid_record("k1ab", "1200"),
    ]);
    processor.dedupe(&mut document, None);

    let json = processor.render_json(&mut document, false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["meta"]["count"], 1);
    assert_eq!(value["meta"]["duplicates"], 1);
    assert_eq!(value["entries"].as_array().map(Vec::len), Some(1));
    assert!(value["duplicates"]["1"].is_object());
    assert!(value["timers"]["tojson"].is_number());
    assert!(value["timers"]["total"].is_number());
    assert!(document.timers().contains_key("tojson"));
}

#[test]
fn test_run_full_pipeline() {
    let processor = RecordProcessor::new(PipelineConfig::default());
    let mut records = vec![
        create_valid_record("k1ab", "1200"),
        create_valid_record("k2ab", "1210"),
        create_valid_record("k3ab", "1220"),
        create_valid_record("k1ab", "1230"),
    ];
    records[1].insert("mode", "usb");
    let mut document = create_test_document(records);

    let stats = processor.run(&mut document).unwrap();

    assert_eq!(stats.total_input, 4);
    assert_eq!(stats.sanitized, 4);
    assert_eq!(stats.invalid_records, 0);
    assert!(!stats.qps_flagged);
    assert_eq!(stats.duplicates_removed, 1);
    assert_eq!(stats.final_output, 3);

    let record = document.record(1).unwrap();
    assert_eq!(record.text("mode").as_deref(), Some("SSB"));
    assert_eq!(record.text("submode").as_deref(), Some("USB"));
    assert_eq!(record.get("freq"), Some(&FieldValue::from("14.250000")));
}

#[test]
fn test_run_with_pota_unroll_and_chunks() {
    let config = quiet_config()
        .with_morph(MorphMode::PotaRefs)
        .with_chunk_size(2_000_000);
    let processor = RecordProcessor::new(config);
    let mut record = create_valid_record("k1ab", "1200");
    record.insert("my_pota_ref", "us-0001,us-0002");
    let mut document = create_test_document(vec![record]);

    let stats = processor.run(&mut document).unwrap();

    assert_eq!(stats.records_unrolled, 1);
    assert_eq!(stats.final_output, 2);
    assert_eq!(stats.chunks, 1);
}

#[test]
fn test_run_honors_skip_flags() {
    let config = quiet_config()
        .without_sanitize()
        .without_validate()
        .without_dedupe();
    let processor = RecordProcessor::new(config);
    let mut document = create_test_document(vec![
        create_valid_record("k1ab", "1200"),
        create_valid_record("k1ab", "1200"),
    ]);

    let stats = processor.run(&mut document).unwrap();

    assert_eq!(stats.final_output, 2);
    assert_eq!(stats.sanitized, 0);
    assert_eq!(
        document.records()[0].record.text("call").as_deref(),
        Some("k1ab")
    );
    assert!(!document.timers().contains_key("sanitize"));
}

#[test]
fn test_run_rejects_invalid_config() {
    let processor = RecordProcessor::new(PipelineConfig::default().with_chunk_size(0));
    let mut document = create_spaced_document(2);

    let result = processor.run(&mut document);
    assert!(matches!(result, Err(Error::Configuration { .. })));
}
