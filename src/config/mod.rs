//! Configuration loading
//!
//! Settings come from a `.secguard.toml` file, discovered in the scan target
//! (or given explicitly with `--config`). Every field has a default, so a
//! missing file is not an error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;
use crate::rules::Severity;
use crate::scanner::entropy;

/// Default configuration file name, looked up in the scan target.
pub const CONFIG_FILE_NAME: &str = ".secguard.toml";

/// User-facing settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path substrings excluded from every scan.
    pub ignore: Vec<String>,
    /// Entropy analysis threshold in bits per character.
    pub entropy_threshold: f64,
    /// Hide findings below this severity in terminal output.
    pub min_severity: Option<Severity>,
    /// Directory of additional rule sources, loaded after the builtin ones.
    pub rules_dir: Option<PathBuf>,
    /// Scan build output and bundle artifacts too.
    pub include_bundles: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignore: Vec::new(),
            entropy_threshold: entropy::DEFAULT_THRESHOLD,
            min_severity: None,
            rules_dir: None,
            include_bundles: false,
        }
    }
}

impl Config {
    /// Load configuration from an explicit file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        let config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        debug!(config = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Resolve configuration for a scan target.
    ///
    /// An explicit `--config` path must exist and parse; otherwise the target
    /// directory is probed for [`CONFIG_FILE_NAME`] and defaults apply when
    /// it is absent.
    pub fn resolve(explicit: Option<&Path>, target: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        let probe = if target.is_dir() {
            target.join(CONFIG_FILE_NAME)
        } else {
            target
                .parent()
                .map(|p| p.join(CONFIG_FILE_NAME))
                .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
        };

        if probe.is_file() {
            Self::load_from_file(&probe)
        } else {
            Ok(Self::default())
        }
    }
}
