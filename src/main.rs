use std::process::ExitCode;
use suite_runner::cli;

#[tokio::main]
async fn main() -> ExitCode {
    // Parse command line arguments and dispatch the selected subcommand
    match cli::run().await {
        Ok(code) => {
            // Aggregate exit codes are summed across units; clamp to the
            // process exit range only here, at the boundary.
            ExitCode::from(code.clamp(0, 255) as u8)
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
