//! CLI command definitions
//!
//! Defines the clap commands for the harness CLI.

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Run every test case and compare against the stored baselines
    #[command(alias = "verify")]
    Run {
        /// Root directory containing testcase subdirectories
        #[arg(long, default_value = "tests")]
        tests_dir: PathBuf,

        /// Simulator binary (default: search ./sim.exe, sim.exe, ./sim, sim)
        #[arg(long)]
        simulator: Option<PathBuf>,

        /// Show the full argument list for each case
        #[arg(long, short)]
        verbose: bool,
    },

    /// Regenerate the expected-output baseline for every test case
    #[command(alias = "gen")]
    Generate {
        /// Root directory containing testcase subdirectories
        #[arg(long, default_value = "tests")]
        tests_dir: PathBuf,

        /// Simulator binary (default: search ./sim.exe, sim.exe, ./sim, sim)
        #[arg(long)]
        simulator: Option<PathBuf>,
    },

    /// List discovered test cases and their eligibility without running them
    List {
        /// Root directory containing testcase subdirectories
        #[arg(long, default_value = "tests")]
        tests_dir: PathBuf,
    },
}
