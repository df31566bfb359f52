//! Main record processor implementation and pipeline orchestration
//!
//! This module contains the RecordProcessor struct, which runs each stage
//! against a document and records the stage's wall-clock time on it.

use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{debug, info};

use super::{
    deduplication::deduplicate_records,
    morph::morph_records,
    sanitizer::{filter, sanitize_record},
    stats::ProcessingStats,
    validator::{Validation, check_duration, validate_record_with},
};
use crate::Result;
use crate::app::models::{Document, ErrorKey, IndexedRecord};
use crate::app::services::adif_parser::{AdifParser, ParseStats};
use crate::app::services::adif_writer::{JsonDocument, plan_chunks, render_adif};
use crate::app::services::field_spec::{POTA_OPTIONAL_FIELDS, required_fields};
use crate::app::services::linter;
use crate::config::{MorphMode, PipelineConfig};
use crate::constants::{QPS_MARKER, timers};

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Record processor for ADIF documents
///
/// Owns the pipeline configuration and applies parse, sanitize, validate,
/// dedupe, morph and chunk to a document in place.
///
/// # Example
///
/// ```rust
/// use adif_processor::app::models::Document;
/// use adif_processor::app::services::record_processor::RecordProcessor;
/// use adif_processor::config::PipelineConfig;
///
/// # fn example() -> adif_processor::Result<()> {
/// let processor = RecordProcessor::new(PipelineConfig::default().with_check_qps(false));
/// let mut document = Document::from_text("Test\n<eoh>\n<call:5>W1AW<eor>");
///
/// processor.parse(&mut document)?;
/// let stats = processor.run(&mut document)?;
/// println!("{}", stats.summary());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordProcessor {
    config: PipelineConfig,
}

impl RecordProcessor {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Get the pipeline configuration used by this processor
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Load an input (raw text or file path) and parse it
    pub fn load(&self, input: &str) -> Result<Document> {
        let mut document = Document::from_input(input)?;
        self.parse(&mut document)?;
        Ok(document)
    }

    /// Parse the document's raw text into headers and records
    ///
    /// Parsed records replace any previous ones, taking stable indices from
    /// zero with the configured overrides applied. Errors, duplicates and
    /// chunks from an earlier run are discarded. A failed parse leaves the
    /// document unchanged.
    pub fn parse(&self, document: &mut Document) -> Result<ParseStats> {
        let start = Instant::now();
        let parser = AdifParser::with_overrides(&self.config.overrides);
        let result = parser.parse(document.raw())?;

        document.clear_records();
        let range = document.add_records(result.records);
        let offset = range.start;
        document.set_headers(result.headers);
        document.set_chronology(
            result.first_entry.map(|position| offset + position),
            result.last_entry.map(|position| offset + position),
        );
        document.add_timer(timers::PARSE, elapsed_ms(start));

        info!("{}", result.stats.summary());
        Ok(result.stats)
    }

    /// Normalize every live record
    pub fn sanitize(&self, document: &mut Document, progress_bar: Option<&ProgressBar>) -> usize {
        let start = Instant::now();
        let records = document.take_records();
        let count = records.len();

        let sanitized: Vec<IndexedRecord> = records
            .into_iter()
            .enumerate()
            .map(|(position, entry)| {
                if let Some(pb) = progress_bar {
                    pb.set_position(position as u64);
                }
                IndexedRecord::new(entry.index, sanitize_record(entry.record))
            })
            .collect();

        document.replace_records(sanitized);
        document.add_timer(timers::SANITIZE, elapsed_ms(start));
        debug!("Sanitized {} records", count);
        count
    }

    /// Validate every live record and, when enabled, the contact rate
    ///
    /// # Returns
    ///
    /// Number of records left with validation failures
    pub fn validate(&self, document: &mut Document, progress_bar: Option<&ProgressBar>) -> usize {
        let start = Instant::now();
        let pota_mode = self.config.mode.is_pota();
        let required = required_fields(pota_mode);
        let records = document.take_records();
        let mut validated = Vec::with_capacity(records.len());
        let mut invalid = 0;

        for (position, entry) in records.into_iter().enumerate() {
            if let Some(pb) = progress_bar {
                pb.set_position(position as u64);
            }

            let IndexedRecord { index, record } = entry;
            let (record, errors) = match validate_record_with(&record, &required) {
                Validation::Pass => (record, Vec::new()),
                Validation::Failed(errors) if pota_mode => {
                    filter(record, errors, POTA_OPTIONAL_FIELDS)
                }
                Validation::Failed(errors) => (record, errors),
            };

            if errors.is_empty() {
                document.clear_record_errors(index);
            } else {
                debug!("Record {} failed validation: {:?}", index, errors);
                document.set_record_errors(index, errors);
                invalid += 1;
            }
            validated.push(IndexedRecord::new(index, record));
        }

        document.replace_records(validated);

        if self.config.check_qps {
            self.check_qps(document);
        }

        document.add_timer(timers::VALIDATE, elapsed_ms(start));
        info!(
            "Validation complete: {} of {} records with failures",
            invalid,
            document.record_count()
        );
        invalid
    }

    /// Flag the document when its implied contact rate is implausible
    ///
    /// Returns true when the check passes.
    pub fn check_qps(&self, document: &mut Document) -> bool {
        let passed = check_duration(document.records().iter().map(|entry| &entry.record));
        if !passed {
            debug!("Document failed the contact-rate check");
            document.add_document_error(QPS_MARKER);
        }
        passed
    }

    /// Move duplicate records into the duplicate map
    pub fn dedupe(&self, document: &mut Document, progress_bar: Option<&ProgressBar>) -> usize {
        let start = Instant::now();
        let removed = deduplicate_records(document, progress_bar);
        document.add_timer(timers::DEDUPE, elapsed_ms(start));
        removed
    }

    /// Apply one morph mode
    pub fn morph(
        &self,
        document: &mut Document,
        mode: MorphMode,
        progress_bar: Option<&ProgressBar>,
    ) -> usize {
        let start = Instant::now();
        let changed = morph_records(document, mode, progress_bar);
        document.add_timer(mode.timer_name(), elapsed_ms(start));
        changed
    }

    /// Plan size-bounded output chunks over the live records
    ///
    /// Returns the number of chunks planned.
    pub fn chunk(&self, document: &mut Document, max_bytes: usize) -> usize {
        let start = Instant::now();
        let chunks = plan_chunks(document.records(), max_bytes);
        let count = chunks.len();
        document.set_chunks(chunks);
        document.add_timer(timers::CHUNK, elapsed_ms(start));
        debug!("Planned {} chunks of at most {} bytes", count, max_bytes);
        count
    }

    /// Structurally check the document's raw text
    pub fn lint(&self, document: &mut Document) -> BTreeMap<ErrorKey, Vec<String>> {
        let start = Instant::now();
        let findings = linter::lint(document.raw(), self.config.mode);
        document.add_timer(timers::LINT, elapsed_ms(start));
        findings
    }

    /// Render the document as ADIF text
    pub fn render_adif(&self, document: &mut Document) -> String {
        let start = Instant::now();
        let rendered = render_adif(document);
        document.add_timer(timers::TO_ADIF, elapsed_ms(start));
        rendered
    }

    /// Render the document as JSON
    ///
    /// The `tojson` timer covers assembling the output and is included in
    /// the rendered timers.
    pub fn render_json(&self, document: &mut Document, pretty: bool) -> Result<String> {
        let start = Instant::now();
        let json = JsonDocument::new(document);
        let assembled = elapsed_ms(start);
        let rendered = json.with_timer(timers::TO_JSON, assembled).render(pretty)?;
        document.add_timer(timers::TO_JSON, assembled);
        Ok(rendered)
    }

    /// Run the configured pipeline on a parsed document
    ///
    /// Stages run in order: sanitize, validate, dedupe, each configured
    /// morph, then chunk planning when a chunk size is set. Skip flags
    /// leave the document untouched by that stage.
    ///
    /// # Returns
    ///
    /// `ProcessingStats` describing the run
    pub fn run(&self, document: &mut Document) -> Result<ProcessingStats> {
        self.config.validate()?;

        let mut stats = ProcessingStats::new();
        stats.total_input = document.record_count();

        info!(
            "Starting record pipeline for {} records \
             (sanitize: {}, validate: {}, dedupe: {}, morph: {:?})",
            stats.total_input,
            !self.config.skip_sanitize,
            !self.config.skip_validate,
            !self.config.skip_dedupe,
            self.config.morph
        );

        if !self.config.skip_sanitize {
            let pb = self.stage_progress_bar(document.record_count(), "Sanitizing");
            stats.sanitized = self.sanitize(document, pb.as_ref());
            if let Some(pb) = pb {
                pb.finish_with_message(format!("Sanitized {} records", stats.sanitized));
            }
        }

        if !self.config.skip_validate {
            let pb = self.stage_progress_bar(document.record_count(), "Validating");
            stats.invalid_records = self.validate(document, pb.as_ref());
            stats.qps_flagged = document
                .errors()
                .get(&ErrorKey::Document)
                .is_some_and(|markers| markers.iter().any(|marker| marker == QPS_MARKER));
            if let Some(pb) = pb {
                pb.finish_with_message(format!(
                    "Validation complete: {} invalid",
                    stats.invalid_records
                ));
            }
        }

        if !self.config.skip_dedupe {
            let pb = self.stage_progress_bar(document.record_count(), "Deduplicating");
            stats.duplicates_removed = self.dedupe(document, pb.as_ref());
            if let Some(pb) = pb {
                pb.finish_with_message(format!(
                    "Deduplication complete: {} duplicates",
                    stats.duplicates_removed
                ));
            }
        }

        for mode in &self.config.morph {
            let pb = self.stage_progress_bar(document.record_count(), "Morphing");
            let changed = self.morph(document, *mode, pb.as_ref());
            if *mode == MorphMode::PotaRefs {
                stats.records_unrolled += changed;
            }
            if let Some(pb) = pb {
                pb.finish_with_message(format!("Morph {:?} complete", mode));
            }
        }

        if let Some(max_bytes) = self.config.chunk_size {
            stats.chunks = self.chunk(document, max_bytes);
        }

        stats.final_output = document.record_count();
        info!("{}", stats.summary());

        Ok(stats)
    }

    fn stage_progress_bar(&self, total: usize, operation: &str) -> Option<ProgressBar> {
        self.config
            .show_progress
            .then(|| create_processing_progress_bar(total as u64, operation))
    }
}

/// Create a progress bar for processing operations
pub fn create_processing_progress_bar(total: u64, operation: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg} [{per_sec}] ETA: {eta}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb.set_message(operation.to_string());
    pb
}
