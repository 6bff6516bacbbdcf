//! Error types for the harness CLI
//!
//! Fatal conditions (no simulator, no test root) abort the whole run;
//! everything per-case is reported on that case's status line instead.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the harness CLI
#[derive(Error, Debug)]
pub enum Error {
    // === Simulator Errors ===
    #[error("Simulator not found. Searched: {searched}. Run 'make' first")]
    SimulatorNotFound { searched: String },

    #[error("Failed to launch simulator '{path}': {error}")]
    SimulatorLaunch { path: String, error: String },

    #[error("Simulator output is not valid UTF-8: {0}")]
    OutputDecode(String),

    // === Test Root Errors ===
    #[error("Test directory '{0}' not found")]
    TestRootMissing(String),

    // === Case Errors ===
    #[error("Failed to read parameter file '{path}': {error}")]
    ParamsRead { path: String, error: String },

    #[error("Parameter file '{0}' contains no valid entries")]
    ParamsEmpty(String),

    #[error("Failed to write baseline '{path}': {error}")]
    BaselineWrite { path: String, error: String },

    // === Configuration Errors ===
    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create a simulator not found error with the searched candidates
    pub fn simulator_not_found<S: AsRef<str>>(candidates: &[S]) -> Self {
        Self::SimulatorNotFound {
            searched: candidates
                .iter()
                .map(|s| s.as_ref())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// Create a file read error
    pub fn file_read(path: &std::path::Path, error: &io::Error) -> Self {
        Self::FileRead {
            path: path.display().to_string(),
            error: error.to_string(),
        }
    }
}
