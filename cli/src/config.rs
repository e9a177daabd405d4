//! numclass configuration loading
//!
//! Loads `~/.config/numclass/numclass.toml` (or `NUMCLASS_CONFIG`, or the
//! `--config` flag). A missing file at the default or env location means
//! defaults; a missing file named by `--config` is an error.

use std::path::Path;
use std::path::PathBuf;

use numclass_core::MAX_SUPPORTED_EXPONENT;
use numclass_core::MIN_EXPONENT;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Root configuration for the `numclass` binary
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct NumclassConfig {
    /// Print `Execution time: N ms` after every section
    #[serde(default = "default_show_timings")]
    pub show_timings: bool,

    /// Lower clamp for the derived exponent bound
    #[serde(default = "default_min_exponent")]
    pub min_exponent: u32,

    /// Upper clamp for the derived exponent bound
    #[serde(default = "default_max_exponent")]
    pub max_exponent: u32,
}

fn default_show_timings() -> bool {
    true
}

fn default_min_exponent() -> u32 {
    MIN_EXPONENT
}

fn default_max_exponent() -> u32 {
    MAX_SUPPORTED_EXPONENT
}

impl Default for NumclassConfig {
    fn default() -> Self {
        Self {
            show_timings: default_show_timings(),
            min_exponent: default_min_exponent(),
            max_exponent: default_max_exponent(),
        }
    }
}

impl NumclassConfig {
    /// Environment variable for config path override
    pub const ENV_CONFIG_PATH: &'static str = "NUMCLASS_CONFIG";

    /// Default config filename
    pub const DEFAULT_CONFIG_FILENAME: &'static str = "numclass.toml";

    /// Load configuration.
    ///
    /// Resolution order:
    /// 1. `explicit` (the `--config` flag), which must exist
    /// 2. `NUMCLASS_CONFIG` environment variable
    /// 3. `~/.config/numclass/numclass.toml`
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        let path = resolve_config_path(
            std::env::var(Self::ENV_CONFIG_PATH).ok(),
            dirs::home_dir(),
        );
        if !path.exists() {
            tracing::info!(path = %path.display(), "numclass config not found, using defaults");
            return Ok(Self::default());
        }

        Self::load_from_path(&path)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded numclass config");
        Self::parse(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let cfg: NumclassConfig = toml::from_str(contents)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_exponent > MAX_SUPPORTED_EXPONENT {
            return Err(ConfigError::Invalid(format!(
                "max_exponent {} exceeds the supported maximum of {MAX_SUPPORTED_EXPONENT}",
                self.max_exponent
            )));
        }
        if self.min_exponent > self.max_exponent {
            return Err(ConfigError::Invalid(format!(
                "min_exponent {} is greater than max_exponent {}",
                self.min_exponent, self.max_exponent
            )));
        }
        Ok(())
    }

    /// Clamp a derived exponent bound into `[min_exponent, max_exponent]`.
    pub fn clamp_exponent(&self, derived: u32) -> u32 {
        let clamped = derived.clamp(self.min_exponent, self.max_exponent);
        if clamped < derived {
            tracing::warn!(
                derived,
                max_exponent = self.max_exponent,
                "exponent bound capped by configuration"
            );
        }
        clamped
    }
}

fn resolve_config_path(env_override: Option<String>, home: Option<PathBuf>) -> PathBuf {
    if let Some(path) = env_override {
        return PathBuf::from(path);
    }

    home.map(|h| {
        h.join(".config")
            .join("numclass")
            .join(NumclassConfig::DEFAULT_CONFIG_FILENAME)
    })
    .unwrap_or_else(|| PathBuf::from(NumclassConfig::DEFAULT_CONFIG_FILENAME))
}
