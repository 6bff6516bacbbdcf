//! CLI command handling
//!
//! Dispatches CLI commands to the harness engine and maps the result to
//! an overall success flag for the process exit code.

use crate::commands::Commands;
use crate::common::config::Config;
use crate::common::Result;
use crate::harness::runner::{self, RunOptions};

/// Dispatch a CLI command. Returns true when the run counts as a success.
pub async fn dispatch(command: Commands) -> Result<bool> {
    let config = Config::load()?;

    match command {
        Commands::Run {
            tests_dir,
            simulator,
            verbose,
        } => {
            let opts = RunOptions {
                tests_dir,
                simulator,
                verbose,
            };
            let tally = runner::run_all(&config, &opts).await?;
            Ok(tally.all_passed())
        }

        Commands::Generate {
            tests_dir,
            simulator,
        } => {
            let opts = RunOptions {
                tests_dir,
                simulator,
                verbose: false,
            };
            let summary = runner::generate_all(&config, &opts).await?;
            Ok(summary.failed == 0)
        }

        Commands::List { tests_dir } => runner::list_all(&RunOptions {
            tests_dir,
            simulator: None,
            verbose: false,
        }),
    }
}
