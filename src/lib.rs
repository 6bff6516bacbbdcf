//! Conformance test harness for the VM/cache simulator
//!
//! This library drives an external simulator binary through directory-backed
//! test cases: parameter files are translated into command-line arguments,
//! the simulator runs as a subprocess under a timeout, and its output is
//! compared against stored expected-output baselines.

pub mod cli;
pub mod commands;
pub mod common;
pub mod harness;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use harness::compare::CaseOutcome;
