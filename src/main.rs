//! Conformance test harness for the VM/cache simulator
//!
//! Discovers `testcase*` directories, runs the simulator under test against
//! each one, and compares the captured output with the stored baseline.

use clap::Parser;
use simtest::{cli, commands::Commands, common};

#[derive(Parser)]
#[command(name = "simtest", about = "Conformance test harness for the VM/cache simulator")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    common::logging::init();

    let cli = Cli::parse();

    match cli::dispatch(cli.command).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
