//! Discovery, aggregation, and reporting
//!
//! Walks the test root, drives each eligible case through the
//! translate → run → resolve → compare pipeline, and tallies outcomes
//! into a value returned to the caller. Cases run strictly one at a
//! time in sorted order; one case's failure never touches its siblings.

use std::path::{Path, PathBuf};
use std::time::Duration;

use colored::Colorize;

use crate::common::config::Config;
use crate::common::{Error, Result};
use crate::harness::case::{self, TestCase};
use crate::harness::compare::{self, CaseOutcome};
use crate::harness::locate;
use crate::harness::output;
use crate::harness::params;
use crate::harness::process;

const BANNER_WIDTH: usize = 70;

/// Options shared by the harness entry points
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Root directory containing `testcase*` subdirectories
    pub tests_dir: PathBuf,
    /// Explicit simulator path; None means search the candidate list
    pub simulator: Option<PathBuf>,
    /// Echo each case's full invocation
    pub verbose: bool,
}

/// Running pass/total tally for a verification run
#[derive(Debug, Default)]
pub struct Tally {
    pub passed: usize,
    pub total: usize,
}

impl Tally {
    fn record(&mut self, passed: bool) {
        self.total += 1;
        if passed {
            self.passed += 1;
        }
    }

    /// True when nothing failed (vacuously true for zero cases)
    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

/// Result counts for a baseline-generation run
#[derive(Debug, Default)]
pub struct GenerateSummary {
    pub generated: usize,
    pub discovered: usize,
    pub failed: usize,
}

/// What one generation attempt produced
enum Generated {
    /// Normal baseline from stdout
    Baseline,
    /// Rejection diagnostic from stderr (invalid configuration)
    Diagnostic,
    /// Nothing written: still running at the ceiling
    TimedOut,
}

/// Verification mode: run every complete case and compare against its
/// stored baseline. Returns the tally; the caller maps it to an exit code.
pub async fn run_all(config: &Config, opts: &RunOptions) -> Result<Tally> {
    banner("VM/Cache Simulator Test Suite");

    let simulator = locate::locate(opts.simulator.as_deref(), &config.simulator.candidates)?;
    println!("{} Using: {}\n", "[INFO]".blue(), simulator.display());

    let cases = case::discover(&opts.tests_dir)?;
    if cases.is_empty() {
        println!(
            "{} No test cases found in {}/",
            "[WARN]".yellow(),
            opts.tests_dir.display()
        );
        return Ok(Tally::default());
    }
    println!("{} Found {} test cases\n", "[INFO]".blue(), cases.len());

    let ceiling = Duration::from_secs(config.timeouts.verify_secs);
    let mut tally = Tally::default();

    for case in &cases {
        if !case.is_complete(true) {
            tracing::debug!(
                case = %case.name,
                missing = ?case.missing_files(true),
                "skipping incomplete case"
            );
            continue;
        }

        match verify_case(&simulator, case, ceiling, opts.verbose).await {
            Ok(outcome) => {
                if outcome.passed() {
                    println!("{} {}", "[PASS]".green(), case.name);
                } else {
                    println!("{} {}: {}", "[FAIL]".red(), case.name, outcome.describe());
                }
                tally.record(outcome.passed());
            }
            Err(e) => {
                // Unreadable params, spawn failure, undecodable capture:
                // local to this case, reported and counted as a failure.
                println!("{} {}: {}", "[FAIL]".red(), case.name, e);
                tally.record(false);
            }
        }
    }

    summary(&tally);
    Ok(tally)
}

/// One case through the full pipeline
async fn verify_case(
    simulator: &Path,
    case: &TestCase,
    ceiling: Duration,
    verbose: bool,
) -> Result<CaseOutcome> {
    let args = case_args(case)?;
    if verbose {
        println!(
            "  $ {} {}",
            simulator.display(),
            args.join(" ").dimmed()
        );
    }

    let invocation = process::run(simulator, &args, ceiling).await?;
    let expected = output::load_expected(&case.expected_path())?;
    Ok(compare::compare(&invocation, &expected))
}

/// Generation mode: run every case with a trace and parameters, and store
/// the authoritative output as its new baseline.
pub async fn generate_all(config: &Config, opts: &RunOptions) -> Result<GenerateSummary> {
    let simulator = locate::locate(opts.simulator.as_deref(), &config.simulator.candidates)?;
    println!("Using simulator: {}\n", simulator.display());

    let cases = case::discover(&opts.tests_dir)?;
    let ceiling = Duration::from_secs(config.timeouts.generate_secs);
    let mut summary = GenerateSummary {
        discovered: cases.len(),
        ..Default::default()
    };

    for case in &cases {
        if !case.is_complete(false) {
            tracing::debug!(case = %case.name, "skipping case without trace or params");
            continue;
        }

        let args = match case_args(case) {
            Ok(args) => args,
            Err(Error::ParamsEmpty(_)) => {
                // Nothing to invoke; leave any existing baseline alone
                tracing::debug!(case = %case.name, "skipping case with empty params");
                continue;
            }
            Err(e) => {
                println!("{} {}: {}", "[ERR]".red(), case.name, e);
                summary.failed += 1;
                continue;
            }
        };

        match generate_case(&simulator, case, &args, ceiling).await {
            Ok(Generated::Baseline) => {
                println!("{} {}", "[OK]".green(), case.name);
                summary.generated += 1;
            }
            Ok(Generated::Diagnostic) => {
                println!("{} {} (invalid config)", "[OK]".green(), case.name);
                summary.generated += 1;
            }
            Ok(Generated::TimedOut) => {
                println!(
                    "{} {}: Timeout after {}s",
                    "[ERR]".red(),
                    case.name,
                    config.timeouts.generate_secs
                );
                summary.failed += 1;
            }
            Err(e) => {
                println!("{} {}: {}", "[ERR]".red(), case.name, e);
                summary.failed += 1;
            }
        }
    }

    println!("\nGenerated: {}/{}", summary.generated, summary.discovered);
    Ok(summary)
}

/// Run one case and write its baseline as UTF-8 with `\n` line endings
async fn generate_case(
    simulator: &Path,
    case: &TestCase,
    args: &[String],
    ceiling: Duration,
) -> Result<Generated> {
    let invocation = process::run(simulator, args, ceiling).await?;
    if invocation.timed_out {
        return Ok(Generated::TimedOut);
    }

    let text = output::authoritative_text(&invocation.stdout, &invocation.stderr);
    let path = case.expected_path();
    std::fs::write(&path, text).map_err(|e| Error::BaselineWrite {
        path: path.display().to_string(),
        error: e.to_string(),
    })?;

    if invocation.success() {
        Ok(Generated::Baseline)
    } else {
        Ok(Generated::Diagnostic)
    }
}

/// List discovered cases and their verification eligibility
pub fn list_all(opts: &RunOptions) -> Result<bool> {
    let cases = case::discover(&opts.tests_dir)?;
    if cases.is_empty() {
        println!(
            "{} No test cases found in {}/",
            "[WARN]".yellow(),
            opts.tests_dir.display()
        );
        return Ok(true);
    }

    for case in &cases {
        let missing = case.missing_files(true);
        if missing.is_empty() {
            println!("{} {}", "[ OK ]".green(), case.name);
        } else {
            println!(
                "{} {} (missing: {})",
                "[SKIP]".yellow(),
                case.name,
                missing.join(", ")
            );
        }
    }
    println!("\n{} case(s) discovered", cases.len());
    Ok(true)
}

/// Parameter tokens followed by the fixed `-t <trace>` and `-v` suffix.
/// The suffix placement is part of the simulator's output contract.
fn case_args(case: &TestCase) -> Result<Vec<String>> {
    let mut args = params::translate(&case.params_path())?;
    args.push("-t".to_string());
    args.push(case.input_path().display().to_string());
    args.push("-v".to_string());
    Ok(args)
}

fn banner(title: &str) {
    let rule = "=".repeat(BANNER_WIDTH);
    println!("\n{}", rule.magenta().bold());
    println!(
        "{}",
        format!("{title:^width$}", width = BANNER_WIDTH).magenta().bold()
    );
    println!("{}\n", rule.magenta().bold());
}

fn summary(tally: &Tally) {
    banner("Summary");
    if tally.all_passed() {
        println!(
            "{}",
            format!("All tests passed! ({}/{})", tally.passed, tally.total)
                .green()
                .bold()
        );
        println!("{}\n", "*".repeat(BANNER_WIDTH).green());
    } else {
        println!(
            "{}",
            format!("Tests passed: {}/{}", tally.passed, tally.total)
                .red()
                .bold()
        );
        println!("{}\n", "!".repeat(BANNER_WIDTH).red());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_tally_record() {
        let mut tally = Tally::default();
        tally.record(true);
        tally.record(false);
        tally.record(true);
        assert_eq!(tally.passed, 2);
        assert_eq!(tally.total, 3);
        assert!(!tally.all_passed());
    }

    #[test]
    fn test_empty_tally_counts_as_all_passed() {
        assert!(Tally::default().all_passed());
    }

    #[test]
    fn test_case_args_suffix_order() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("testcase01");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join(case::PARAMS_FILE), "S - 1024\nT - 4\n").unwrap();
        fs::write(dir.join(case::INPUT_FILE), "R 0x1000\n").unwrap();

        let case = TestCase {
            name: "testcase01".to_string(),
            dir: dir.clone(),
        };
        let args = case_args(&case).unwrap();

        let trace = dir.join(case::INPUT_FILE).display().to_string();
        assert_eq!(args[0..4], ["-S", "1024", "-T", "4"]);
        assert_eq!(args[4], "-t");
        assert_eq!(args[5], trace);
        assert_eq!(args[6], "-v");
        assert_eq!(args.len(), 7);
    }
}
