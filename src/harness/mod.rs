//! Harness engine
//!
//! Drives one test case at a time through the pipeline:
//! parameter translation → simulator invocation → output resolution →
//! comparison. The runner module ties the pipeline to on-disk discovery
//! and tallies the outcomes.

pub mod case;
pub mod compare;
pub mod locate;
pub mod output;
pub mod params;
pub mod process;
pub mod runner;

pub use compare::CaseOutcome;
pub use runner::{GenerateSummary, RunOptions, Tally};
