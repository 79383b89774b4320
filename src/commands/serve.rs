// src/commands/serve.rs

use anyhow::Result;
use std::path::PathBuf;

use crate::core::config::SuiteConfig;
use crate::core::lifecycle::Lifecycle;
use crate::infra::command::StreamedRunner;
use crate::reporting::console;

/// Runs the full serve lifecycle and maps its terminal state to an exit code:
/// `Stopped` is 0, `Failed` surfaces the service's own code, halted states
/// surface the error taxonomy's code.
pub async fn execute(config_path: PathBuf) -> Result<i32> {
    let config = SuiteConfig::load(&config_path)?;

    console::serve_banner();

    let mut runner = StreamedRunner::new();
    let mut lifecycle = Lifecycle::new(&mut runner, &config);

    match lifecycle.execute().await {
        Ok(outcome) => Ok(outcome.exit_code()),
        Err(e) => {
            console::fatal(&e);
            Ok(e.exit_code())
        }
    }
}
