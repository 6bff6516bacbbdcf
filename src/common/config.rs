//! Configuration file handling
//!
//! An optional `config.toml` can override the timeout ceilings and the
//! simulator candidate list; every key has a compiled-in default.

use serde::Deserialize;

use super::paths::config_path;
use super::Result;

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Timeout settings
    #[serde(default)]
    pub timeouts: Timeouts,

    /// Simulator location settings
    #[serde(default)]
    pub simulator: SimulatorConfig,
}

/// Timeout ceilings in seconds
#[derive(Debug, Deserialize)]
pub struct Timeouts {
    /// Ceiling for a verification run of one case
    #[serde(default = "default_verify")]
    pub verify_secs: u64,

    /// Ceiling for a baseline-generation run of one case
    #[serde(default = "default_generate")]
    pub generate_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            verify_secs: default_verify(),
            generate_secs: default_generate(),
        }
    }
}

fn default_verify() -> u64 {
    10
}
fn default_generate() -> u64 {
    30
}

/// Simulator location settings
#[derive(Debug, Deserialize)]
pub struct SimulatorConfig {
    /// Candidate filenames tried in order, relative to the current directory
    #[serde(default = "default_candidates")]
    pub candidates: Vec<String>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            candidates: default_candidates(),
        }
    }
}

fn default_candidates() -> Vec<String> {
    ["./sim.exe", "sim.exe", "./sim", "sim"]
        .map(String::from)
        .to_vec()
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if the file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = config_path() {
            if path.exists() {
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| super::Error::file_read(&path, &e))?;
                return toml::from_str(&content)
                    .map_err(|e| super::Error::ConfigParse(e.to_string()));
            }
        }
        Ok(Self::default())
    }
}
