//! Shared utilities for CLI commands
//!
//! Logging setup, layered configuration loading, input expansion and
//! progress reporting used by both subcommands.

use crate::cli::args::PipelineArgs;
use crate::config::PipelineConfig;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Set up structured logging based on CLI arguments
pub fn setup_logging(args: &PipelineArgs) -> Result<()> {
    let log_level = args.get_log_level();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("adif_processor={}", log_level)));

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = if args.quiet {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    };

    // A subscriber installed earlier (tests, embedding) keeps precedence
    if let Err(e) = result {
        eprintln!("Logging already initialized: {}", e);
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (file -> args)
pub fn load_configuration(args: &PipelineArgs) -> Result<PipelineConfig> {
    match &args.config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => debug!("No explicit config file, checking the user config directory"),
    }

    let config = PipelineConfig::load_layered(args.config_file.as_deref())?;
    let config = args.apply_to(config);

    // Final validation
    config.validate()?;

    debug!("Effective configuration: {:?}", config);
    Ok(config)
}

/// Expand input arguments into concrete inputs
///
/// Arguments containing glob metacharacters are expanded and sorted;
/// anything else is passed through unchanged so a missing file surfaces as
/// a file-not-found error when loaded.
pub fn expand_inputs(inputs: &[String]) -> Result<Vec<String>> {
    let mut expanded = Vec::new();

    for input in inputs {
        if !input.contains(['*', '?', '[']) || Path::new(input).is_file() {
            expanded.push(input.clone());
            continue;
        }

        let paths = glob::glob(input).map_err(|e| Error::invalid_pattern(input.as_str(), e))?;
        let mut matched: Vec<String> = paths
            .filter_map(|entry| match entry {
                Ok(path) if path.is_file() => Some(path.display().to_string()),
                Ok(_) => None,
                Err(e) => {
                    warn!("Skipping unreadable path: {}", e);
                    None
                }
            })
            .collect();
        matched.sort();

        if matched.is_empty() {
            return Err(Error::file_not_found(input.as_str()));
        }
        debug!("Pattern {} matched {} files", input, matched.len());
        expanded.extend(matched);
    }

    Ok(expanded)
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg} [{per_sec}] ETA: {eta}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_expand_plain_inputs_pass_through() {
        let inputs = vec!["missing.adi".to_string()];
        assert_eq!(expand_inputs(&inputs).unwrap(), inputs);
    }

    #[test]
    fn test_expand_glob_sorted() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["b.adi", "a.adi", "notes.txt"] {
            fs::write(temp_dir.path().join(name), "<call:4>W1AW<eor>").unwrap();
        }

        let pattern = format!("{}/*.adi", temp_dir.path().display());
        let expanded = expand_inputs(&[pattern]).unwrap();

        assert_eq!(expanded.len(), 2);
        assert!(expanded[0].ends_with("a.adi"));
        assert!(expanded[1].ends_with("b.adi"));
    }

    #[test]
    fn test_expand_glob_without_matches() {
        let temp_dir = TempDir::new().unwrap();
        let pattern = format!("{}/*.adi", temp_dir.path().display());
        let result = expand_inputs(&[pattern]);
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }

    #[test]
    fn test_expand_invalid_pattern() {
        let result = expand_inputs(&["logs/[".to_string()]);
        assert!(matches!(result, Err(Error::InvalidPattern { .. })));
    }

    #[test]
    fn test_progress_bar_creation() {
        let pb = create_progress_bar(10, "Loading");
        assert_eq!(pb.length(), Some(10));
    }
}
