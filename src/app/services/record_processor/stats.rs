//! Processing statistics for the record pipeline
//!
//! Counts gathered while a document moves through sanitize, validate,
//! dedupe and morph, summarized for logging and the CLI report.

/// Statistics for record processing operations
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingStats {
    /// Number of live records when the pipeline started
    pub total_input: usize,
    /// Number of records passed through the sanitizer
    pub sanitized: usize,
    /// Number of records with remaining validation failures
    pub invalid_records: usize,
    /// Number of records moved to the duplicate map
    pub duplicates_removed: usize,
    /// Number of records expanded by the POTA reference unroll
    pub records_unrolled: usize,
    /// Whether the document failed the contact-rate check
    pub qps_flagged: bool,
    /// Number of output chunks planned
    pub chunks: usize,
    /// Final number of live records
    pub final_output: usize,
}

impl ProcessingStats {
    /// Create new empty processing statistics
    pub fn new() -> Self {
        Self {
            total_input: 0,
            sanitized: 0,
            invalid_records: 0,
            duplicates_removed: 0,
            records_unrolled: 0,
            qps_flagged: false,
            chunks: 0,
            final_output: 0,
        }
    }

    /// Percentage of final records without validation failures
    pub fn success_rate(&self) -> f64 {
        if self.final_output == 0 {
            100.0
        } else {
            let valid = self.final_output.saturating_sub(self.invalid_records);
            (valid as f64 / self.final_output as f64) * 100.0
        }
    }

    /// Check that no record or document-level finding was recorded
    pub fn is_clean(&self) -> bool {
        self.invalid_records == 0 && !self.qps_flagged
    }

    /// Get summary of processing pipeline statistics
    pub fn summary(&self) -> String {
        format!(
            "Processing Summary: {} -> {} records ({:.1}% valid) | \
             Invalid: {} | Duplicates: {} | Unrolled: {} | QPS flagged: {}",
            self.total_input,
            self.final_output,
            self.success_rate(),
            self.invalid_records,
            self.duplicates_removed,
            self.records_unrolled,
            self.qps_flagged
        )
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}
