//! Pass/fail comparison policy
//!
//! The simulator signals configuration errors via non-zero exit plus a
//! fixed diagnostic string; legitimate runs signal success via zero exit
//! plus full output equality. A crash for an unrelated reason must never
//! be conflated with a correctly rejected invalid configuration — the
//! exact stderr match is the discriminator.

use crate::harness::output::ExpectedOutput;
use crate::harness::process::Invocation;

/// Diagnostic the simulator emits when it rejects its configuration
pub const INVALID_CONFIG: &str = "Invalid configuration";

/// Exactly one outcome per executed case
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    Pass,
    /// Zero exit but output differs from the baseline
    Mismatch,
    /// Non-zero exit that is not an accepted invalid-configuration case
    Crash { status: Option<i32> },
    /// Still running at the timeout ceiling
    Timeout,
    /// No decoding strategy could read the stored baseline
    UnreadableExpected,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, CaseOutcome::Pass)
    }

    /// Short reason shown after the case name on failure
    pub fn describe(&self) -> String {
        match self {
            CaseOutcome::Pass => String::new(),
            CaseOutcome::Mismatch => "Output mismatch".to_string(),
            CaseOutcome::Crash { status: Some(code) } => {
                format!("Crashed (exit {code})")
            }
            CaseOutcome::Crash { status: None } => "Crashed (no exit code)".to_string(),
            CaseOutcome::Timeout => "Timeout".to_string(),
            CaseOutcome::UnreadableExpected => "Cannot read output file".to_string(),
        }
    }
}

/// Apply the comparison policy, in order:
/// timeout, unreadable baseline, invalid-configuration discriminator on
/// non-zero exit, trimmed whole-blob equality on zero exit.
pub fn compare(invocation: &Invocation, expected: &ExpectedOutput) -> CaseOutcome {
    if invocation.timed_out {
        return CaseOutcome::Timeout;
    }

    let expected = match expected {
        ExpectedOutput::Text(text) => text,
        ExpectedOutput::Unreadable => return CaseOutcome::UnreadableExpected,
    };

    let invalid_config_case = expected.trim() == INVALID_CONFIG;

    if !invocation.success() {
        if invalid_config_case && invocation.stderr.trim() == INVALID_CONFIG {
            return CaseOutcome::Pass;
        }
        return CaseOutcome::Crash {
            status: invocation.status,
        };
    }

    if invocation.stdout.trim() == expected.trim() {
        CaseOutcome::Pass
    } else {
        CaseOutcome::Mismatch
    }
}
