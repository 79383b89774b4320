// src/commands/test.rs

use anyhow::Result;
use std::path::PathBuf;

use crate::core::config::SuiteConfig;
use crate::core::engine::{Engine, Mode};
use crate::core::models::OrchestratorError;
use crate::infra::command::StreamedRunner;
use crate::reporting::console;

/// Drives one orchestration run and maps its outcome to a process exit code.
/// Fatal categories print a label and remedy; the summary always echoes the
/// numeric aggregate so the output stays scriptable.
pub async fn execute(mode: Mode, config_path: PathBuf) -> Result<i32> {
    let config = SuiteConfig::load(&config_path)?;

    console::banner();

    let mut runner = StreamedRunner::new();
    let mut engine = Engine::new(&mut runner, &config);

    // The toolchain probe runs once, before any mode: a missing toolchain is
    // a setup failure and no unit may be attempted.
    if let Err(e) = engine.preflight().await {
        console::fatal(&e);
        return Ok(e.exit_code());
    }

    match engine.execute(&mode).await {
        Ok(report) => {
            console::summary(&report);
            Ok(report.aggregate_exit_code)
        }
        Err(OrchestratorError::Interrupted) => {
            console::interrupted();
            Ok(OrchestratorError::Interrupted.exit_code())
        }
        Err(e) => {
            console::fatal(&e);
            Ok(e.exit_code())
        }
    }
}
