//! Example Plugin - VoltMind demonstration plugin executable

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = example_plugin::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
