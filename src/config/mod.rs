// src/config/mod.rs
pub mod types;

pub use self::types::{Config, OutputConfig, SimulationConfig};

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::stats::TrialOptions;

/// Name of the optional settings file looked up in the working directory.
pub const CONFIG_FILE: &str = "percolate.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `percolate.toml` from the working directory, or defaults if absent.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Loads settings from `path`, or defaults if the file does not exist.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse_toml(&content).with_context(|| format!("Invalid TOML in {}", path.display()))
    }

    /// # Errors
    /// Returns error if `content` is not a valid `percolate.toml`.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    #[must_use]
    pub fn trial_options(&self) -> TrialOptions {
        TrialOptions {
            seed: self.simulation.seed,
            parallel: self.simulation.parallel,
        }
    }
}
