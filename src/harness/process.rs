//! Simulator subprocess execution
//!
//! Runs the simulator once per case with piped stdio and a wall-clock
//! ceiling. A timeout is a distinct result, not an error: the comparator
//! turns it into its own outcome while launch failures abort the case.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tokio::time::timeout;

use crate::common::{Error, Result};
use crate::harness::output::normalize_newlines;

/// Captured result of one simulator invocation
#[derive(Debug)]
pub struct Invocation {
    /// Decoded standard output, line endings normalized
    pub stdout: String,
    /// Decoded standard error, line endings normalized
    pub stderr: String,
    /// Exit status code; None when the process died without one
    pub status: Option<i32>,
    /// True when the ceiling elapsed before the process exited
    pub timed_out: bool,
}

impl Invocation {
    /// True for a clean zero exit
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Run the simulator to completion or to the timeout ceiling.
///
/// The child is killed when the ceiling is crossed. A single attempt is
/// the full contract; no retry happens here or anywhere above.
pub async fn run(program: &Path, args: &[String], ceiling: Duration) -> Result<Invocation> {
    tracing::debug!(program = %program.display(), ?ceiling, "spawning simulator");

    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| Error::SimulatorLaunch {
            path: program.display().to_string(),
            error: e.to_string(),
        })?;

    // Dropping the wait future on timeout drops the child, and
    // kill_on_drop reaps it.
    let output = match timeout(ceiling, child.wait_with_output()).await {
        Ok(output) => output?,
        Err(_) => {
            tracing::debug!(program = %program.display(), "simulator timed out");
            return Ok(Invocation {
                stdout: String::new(),
                stderr: String::new(),
                status: None,
                timed_out: true,
            });
        }
    };

    Ok(Invocation {
        stdout: decode_captured(output.stdout)?,
        stderr: decode_captured(output.stderr)?,
        status: output.status.code(),
        timed_out: false,
    })
}

/// Strict UTF-8 decode of a captured stream, with universal newlines
fn decode_captured(bytes: Vec<u8>) -> Result<String> {
    let text =
        String::from_utf8(bytes).map_err(|e| Error::OutputDecode(e.to_string()))?;
    Ok(normalize_newlines(&text))
}
