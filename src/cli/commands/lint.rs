//! Lint command implementation for the ADIF processor CLI
//!
//! Runs the structural linter over each input's raw text. Inputs are not
//! parsed, so a log the parser would reject still gets a report.

use super::shared::{expand_inputs, load_configuration, setup_logging};
use crate::app::models::Document;
use crate::app::services::record_processor::RecordProcessor;
use crate::cli::args::LintArgs;
use anyhow::{Context, Result};
use colored::*;
use tracing::{debug, info};

/// Lint command runner
///
/// # Returns
///
/// Number of inputs with at least one finding
pub fn run_lint(args: &LintArgs) -> Result<usize> {
    setup_logging(&args.pipeline)?;
    info!("Starting ADIF lint");

    let config = load_configuration(&args.pipeline)?;
    let inputs = expand_inputs(&args.pipeline.inputs)?;
    let processor = RecordProcessor::new(config);
    let mut failing = 0;

    for input in &inputs {
        let mut document =
            Document::from_input(input).with_context(|| format!("Failed to read {}", input))?;
        let findings = processor.lint(&mut document);
        debug!("Linted {} with {} findings", input, findings.len());

        if findings.is_empty() {
            if !args.pipeline.quiet {
                println!("{} {}", "ok".bright_green().bold(), input);
            }
            continue;
        }

        failing += 1;
        println!("{} {}", "fail".bright_red().bold(), input);
        for (key, problems) in &findings {
            println!("  {}: {}", key.to_string().bright_yellow(), problems.join(", "));
        }
    }

    info!("Lint complete: {} of {} inputs failed", failing, inputs.len());
    Ok(failing)
}
