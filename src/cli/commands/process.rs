//! Process command implementation for the ADIF processor CLI
//!
//! Loads and parses every input, merges them, runs the record pipeline and
//! writes ADIF or JSON output.

use super::shared::{create_progress_bar, expand_inputs, load_configuration, setup_logging};
use crate::app::models::Document;
use crate::app::services::merge::merge;
use crate::app::services::record_processor::{ProcessingStats, RecordProcessor};
use crate::cli::args::{OutputFormat, ProcessArgs};
use crate::constants::timers;
use anyhow::{Context, Result};
use colored::*;
use indicatif::HumanDuration;
use std::fs;
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info};

/// Process command runner
///
/// This function orchestrates the processing workflow:
/// 1. Set up logging and configuration
/// 2. Load and parse each input, then merge
/// 3. Run the record pipeline
/// 4. Render and write output, then report a summary on stderr
pub fn run_process(args: &ProcessArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(&args.pipeline)?;
    info!("Starting ADIF processor");
    debug!("Command line arguments: {:?}", args);

    let config = load_configuration(&args.pipeline)?;
    let inputs = expand_inputs(&args.pipeline.inputs)?;
    let processor = RecordProcessor::new(config);

    let documents = load_documents(&processor, &inputs)?;
    let mut document = merge(documents);

    let stats = processor.run(&mut document)?;

    let rendered = match args.output_format {
        OutputFormat::Adif => processor.render_adif(&mut document),
        OutputFormat::Json => processor.render_json(&mut document, args.pretty)?,
    };
    write_output(args, &rendered)?;

    if !args.pipeline.quiet {
        print_summary(&document, &stats, start_time);
    }

    Ok(stats)
}

/// Load and parse every input in order
fn load_documents(processor: &RecordProcessor, inputs: &[String]) -> Result<Vec<Document>> {
    let pb = processor
        .config()
        .show_progress
        .then(|| create_progress_bar(inputs.len() as u64, "Loading inputs"));

    let mut documents = Vec::with_capacity(inputs.len());
    for input in inputs {
        let document = processor
            .load(input)
            .with_context(|| format!("Failed to load {}", input))?;
        debug!(
            "Loaded {} with {} records",
            document.filename(),
            document.record_count()
        );
        documents.push(document);
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message(format!("Loaded {} inputs", documents.len()));
    }
    Ok(documents)
}

fn write_output(args: &ProcessArgs, rendered: &str) -> Result<()> {
    match &args.output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            info!("Wrote {} bytes to {}", rendered.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .context("Failed to write output to stdout")?;
            stdout.flush().context("Failed to flush stdout")?;
        }
    }
    Ok(())
}

/// Print the processing summary to stderr
fn print_summary(document: &Document, stats: &ProcessingStats, start_time: Instant) {
    eprintln!("\n{}", "Processing Summary".bright_green().bold());
    eprintln!(
        "  Records: {} -> {}",
        stats.total_input.to_string().bright_white().bold(),
        stats.final_output.to_string().bright_white().bold()
    );
    eprintln!(
        "  Duplicates removed: {}",
        stats.duplicates_removed.to_string().bright_yellow()
    );

    if stats.invalid_records > 0 {
        eprintln!(
            "  Records with findings: {}",
            stats.invalid_records.to_string().bright_red().bold()
        );
    } else {
        eprintln!("  Records with findings: {}", "0".bright_green());
    }
    if stats.qps_flagged {
        eprintln!("  {}", "Contact rate is implausible for this log".bright_red());
    }
    if stats.records_unrolled > 0 {
        eprintln!("  POTA records unrolled: {}", stats.records_unrolled);
    }
    if stats.chunks > 0 {
        eprintln!("  Output chunks: {}", stats.chunks);
    }

    eprintln!("  Timers (ms):");
    for (name, milliseconds) in document.timers() {
        if name != timers::TOTAL {
            eprintln!("    {:<18} {:>10.3}", name, milliseconds);
        }
    }
    eprintln!(
        "    {:<18} {:>10.3}",
        timers::TOTAL.bold(),
        document.sum_timers()
    );
    eprintln!(
        "  Completed in {}",
        HumanDuration(start_time.elapsed()).to_string().bright_cyan()
    );
}
