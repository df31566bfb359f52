//! Command-line argument definitions for the ADIF processor
//!
//! This module defines the CLI interface using the clap derive API. Both
//! subcommands share [`PipelineArgs`], which maps onto [`PipelineConfig`].

use crate::config::{MorphMode, PipelineConfig, ProcessingMode};
use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the ADIF processor
///
/// Cleans up amateur-radio logbooks: parses ADIF, normalizes and validates
/// values, removes duplicate contacts and restructures POTA records.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "adif-processor",
    version,
    about = "Parse, clean, validate and deduplicate ADIF amateur-radio logbooks",
    long_about = "A lenient ADIF logbook processor. Reads one or more ADIF logs, normalizes \
                  field values, records validation findings per record, removes duplicate \
                  contacts and optionally unrolls multi-park POTA contacts. Output is \
                  written as ADIF or as a JSON report with timers, findings and duplicates."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the ADIF processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run the processing pipeline and write ADIF or JSON output
    Process(ProcessArgs),
    /// Structurally check raw ADIF text without parsing it
    Lint(LintArgs),
}

/// Validation profile selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Default,
    Pota,
}

impl From<ModeArg> for ProcessingMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Default => ProcessingMode::Default,
            ModeArg::Pota => ProcessingMode::Pota,
        }
    }
}

/// Morph modes selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MorphArg {
    /// Keep only registered ADIF fields
    Strict,
    /// Keep only the fields a POTA upload carries
    PotaOnly,
    /// Expand multi-park references into one record per pairing
    PotaRefs,
}

impl From<MorphArg> for MorphMode {
    fn from(morph: MorphArg) -> Self {
        match morph {
            MorphArg::Strict => MorphMode::Strict,
            MorphArg::PotaOnly => MorphMode::PotaOnly,
            MorphArg::PotaRefs => MorphMode::PotaRefs,
        }
    }
}

/// Output formats for processed logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ADIF text with a regenerated header
    Adif,
    /// JSON report with timers, meta, entries, duplicates and errors
    Json,
}

/// Options shared by every subcommand
#[derive(Debug, Clone, ClapArgs)]
pub struct PipelineArgs {
    /// Input ADIF files or glob patterns
    ///
    /// Several inputs are merged into one document before processing.
    #[arg(value_name = "INPUT", required = true, num_args = 1..)]
    pub inputs: Vec<String>,

    /// Validation profile
    #[arg(
        long = "mode",
        value_enum,
        value_name = "MODE",
        help = "Validation profile (default or pota)"
    )]
    pub mode: Option<ModeArg>,

    /// Disable the contact-rate plausibility check
    #[arg(long = "no-qps", help = "Disable the contact-rate plausibility check")]
    pub no_qps: bool,

    /// Field values forced onto every parsed record
    ///
    /// May be given several times, e.g. --override operator=N0CALL
    #[arg(
        long = "override",
        value_name = "FIELD=VALUE",
        value_parser = parse_override,
        help = "Force a field value onto every record (repeatable)"
    )]
    pub overrides: Vec<(String, String)>,

    /// Morph modes applied in order after deduplication
    #[arg(
        long = "morph",
        value_enum,
        value_name = "MORPH",
        help = "Restructure records after deduplication (repeatable, applied in order)"
    )]
    pub morph: Vec<MorphArg>,

    #[arg(long = "skip-sanitize", help = "Skip value normalization")]
    pub skip_sanitize: bool,

    #[arg(long = "skip-validate", help = "Skip validation and the contact-rate check")]
    pub skip_validate: bool,

    #[arg(long = "skip-dedupe", help = "Skip duplicate removal")]
    pub skip_dedupe: bool,

    /// Partition output into chunks of at most this many serialized bytes
    #[arg(
        long = "chunk-size",
        value_name = "BYTES",
        help = "Partition output into size-bounded chunks"
    )]
    pub chunk_size: Option<usize>,

    /// Path to configuration file
    ///
    /// JSON configuration file. If not specified, looks for
    /// <config dir>/adif-processor/config.json
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(short = 'q', long = "quiet", help = "Suppress all output except errors")]
    pub quiet: bool,

    #[arg(long = "progress", help = "Show progress bars for each pipeline stage")]
    pub progress: bool,
}

/// Arguments for the process command
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    #[command(flatten)]
    pub pipeline: PipelineArgs,

    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "adif",
        help = "Output format"
    )]
    pub output_format: OutputFormat,

    #[arg(long = "pretty", help = "Pretty-print JSON output")]
    pub pretty: bool,

    /// Output file; stdout when omitted
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file (defaults to stdout)"
    )]
    pub output: Option<PathBuf>,
}

/// Arguments for the lint command
#[derive(Debug, Clone, Parser)]
pub struct LintArgs {
    #[command(flatten)]
    pub pipeline: PipelineArgs,
}

/// Parse a FIELD=VALUE override
pub fn parse_override(raw: &str) -> Result<(String, String)> {
    let (field, value) = raw
        .split_once('=')
        .ok_or_else(|| Error::configuration(format!("Override '{}' must be FIELD=VALUE", raw)))?;

    let field = field.trim().to_lowercase();
    if field.is_empty() {
        return Err(Error::configuration(format!(
            "Override '{}' has an empty field name",
            raw
        )));
    }
    Ok((field, value.to_string()))
}

impl Args {
    /// Get the command to execute
    pub fn get_command(&self) -> Option<&Commands> {
        self.command.as_ref()
    }
}

impl PipelineArgs {
    /// Get the logging level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if progress bars should be drawn
    pub fn show_progress(&self) -> bool {
        self.progress && !self.quiet
    }

    /// Layer the command-line options over a loaded configuration
    ///
    /// Only options given explicitly replace configured values. Morph modes
    /// from the command line replace the configured list.
    pub fn apply_to(&self, mut config: PipelineConfig) -> PipelineConfig {
        if let Some(mode) = self.mode {
            config.mode = mode.into();
        }
        if self.no_qps {
            config.check_qps = false;
        }
        for (field, value) in &self.overrides {
            config = config.with_override(field.as_str(), value.as_str());
        }
        if !self.morph.is_empty() {
            config.morph = self.morph.iter().copied().map(MorphMode::from).collect();
        }
        config.skip_sanitize |= self.skip_sanitize;
        config.skip_validate |= self.skip_validate;
        config.skip_dedupe |= self.skip_dedupe;
        if let Some(max_bytes) = self.chunk_size {
            config.chunk_size = Some(max_bytes);
        }
        config.show_progress = self.show_progress();
        config
    }
}
