//! Configuration management and validation.
//!
//! Provides the pipeline configuration used by the record processor and
//! the layered loader used by the CLI: defaults, then an optional JSON
//! configuration file, then command-line overrides.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::{Error, Result};

/// Validation profile applied to every record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingMode {
    /// General ADIF validation
    #[default]
    Default,
    /// Parks on the Air activation rules
    Pota,
}

impl ProcessingMode {
    pub fn is_pota(&self) -> bool {
        matches!(self, ProcessingMode::Pota)
    }
}

/// Record restructuring applied after deduplication
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MorphMode {
    /// Keep only registered ADIF fields
    Strict,
    /// Keep only the fields a POTA upload carries
    PotaOnly,
    /// Expand multi-park references into one record per pairing
    PotaRefs,
}

impl MorphMode {
    /// Timer name recorded for this morph
    pub fn timer_name(&self) -> &'static str {
        match self {
            MorphMode::Strict | MorphMode::PotaOnly => crate::constants::timers::MORPH,
            MorphMode::PotaRefs => crate::constants::timers::UNROLL,
        }
    }
}

/// Configuration for a pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Validation profile
    pub mode: ProcessingMode,

    /// Flag documents whose implied contact rate is implausible
    pub check_qps: bool,

    /// Field values forced onto every parsed record
    pub overrides: BTreeMap<String, String>,

    /// Morph modes applied in order after deduplication
    pub morph: Vec<MorphMode>,

    /// Skip value normalization
    pub skip_sanitize: bool,

    /// Skip per-record validation and the rate check
    pub skip_validate: bool,

    /// Skip duplicate removal
    pub skip_dedupe: bool,

    /// Partition output into batches of at most this many serialized bytes
    pub chunk_size: Option<usize>,

    /// Draw progress bars for per-record stages
    pub show_progress: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            mode: ProcessingMode::Default,
            check_qps: true,
            overrides: BTreeMap::new(),
            morph: Vec::new(),
            skip_sanitize: false,
            skip_validate: false,
            skip_dedupe: false,
            chunk_size: None,
            show_progress: false,
        }
    }
}

impl PipelineConfig {
    /// Set the validation profile
    pub fn with_mode(mut self, mode: ProcessingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Enable or disable the contact-rate check
    pub fn with_check_qps(mut self, check_qps: bool) -> Self {
        self.check_qps = check_qps;
        self
    }

    /// Force a field value onto every parsed record
    pub fn with_override(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides
            .insert(field.into().trim().to_lowercase(), value.into());
        self
    }

    /// Append a morph mode to the morph list
    pub fn with_morph(mut self, mode: MorphMode) -> Self {
        self.morph.push(mode);
        self
    }

    pub fn without_sanitize(mut self) -> Self {
        self.skip_sanitize = true;
        self
    }

    pub fn without_validate(mut self) -> Self {
        self.skip_validate = true;
        self
    }

    pub fn without_dedupe(mut self) -> Self {
        self.skip_dedupe = true;
        self
    }

    /// Partition output into size-bounded chunks
    pub fn with_chunk_size(mut self, max_bytes: usize) -> Self {
        self.chunk_size = Some(max_bytes);
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Check the configuration for values the pipeline cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == Some(0) {
            return Err(Error::configuration("chunk_size must be greater than zero"));
        }
        if self.overrides.keys().any(|field| field.trim().is_empty()) {
            return Err(Error::configuration("override field names must not be empty"));
        }
        Ok(())
    }

    /// Load a configuration from a JSON file
    ///
    /// Missing keys take their default values.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read config {}", path.display()), e))?;
        let config: Self = serde_json::from_str(&text).map_err(|e| {
            Error::serialization(format!("Failed to parse config {}", path.display()), e)
        })?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Location of the per-user configuration file
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Resolve the configuration file layer
    ///
    /// An explicit path must exist. Without one, the per-user file is used
    /// when present and defaults otherwise.
    pub fn load_layered(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(Error::file_not_found(path.display().to_string()));
            }
            return Self::load_from_file(path);
        }

        match Self::default_config_path() {
            Some(path) if path.is_file() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.mode, ProcessingMode::Default);
        assert!(config.check_qps);
        assert!(config.morph.is_empty());
        assert!(config.chunk_size.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = PipelineConfig::default()
            .with_mode(ProcessingMode::Pota)
            .with_check_qps(false)
            .with_override(" Operator ", "N0CALL")
            .with_morph(MorphMode::PotaRefs)
            .with_morph(MorphMode::PotaOnly)
            .without_dedupe()
            .with_chunk_size(1024);

        assert!(config.mode.is_pota());
        assert!(!config.check_qps);
        assert_eq!(config.overrides.get("operator").map(String::as_str), Some("N0CALL"));
        assert_eq!(config.morph, vec![MorphMode::PotaRefs, MorphMode::PotaOnly]);
        assert!(config.skip_dedupe);
        assert!(!config.skip_sanitize);
        assert_eq!(config.chunk_size, Some(1024));
    }

    #[test]
    fn test_validate_rejects_zero_chunk_size() {
        let config = PipelineConfig::default().with_chunk_size(0);
        assert!(matches!(config.validate(), Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_validate_rejects_empty_override_field() {
        let mut config = PipelineConfig::default();
        config.overrides.insert("  ".to_string(), "x".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_partial_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"mode": "pota", "morph": ["pota-refs", "strict"]}}"#).unwrap();

        let config = PipelineConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.mode, ProcessingMode::Pota);
        assert_eq!(config.morph, vec![MorphMode::PotaRefs, MorphMode::Strict]);
        assert!(config.check_qps);
    }

    #[test]
    fn test_load_invalid_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = PipelineConfig::load_from_file(file.path());
        assert!(matches!(result, Err(Error::Serialization { .. })));
    }

    #[test]
    fn test_load_layered_missing_explicit_path() {
        let result = PipelineConfig::load_layered(Some(Path::new("/nonexistent/config.json")));
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }

    #[test]
    fn test_morph_timer_names() {
        assert_eq!(MorphMode::Strict.timer_name(), "morph");
        assert_eq!(MorphMode::PotaRefs.timer_name(), "unroll_pota_refs");
    }
}
