//! # Command Execution Module / 命令执行模块
//!
//! The leaf primitive everything above builds on: spawn one external command,
//! relay its streams, and hand back a structured outcome. Interrupts are a
//! first-class outcome here, never a generic failure.
//!
//! 上层一切所依赖的叶子原语：派生一个外部命令、转发其流，
//! 并返回结构化结果。中断在这里是一等结果，绝不是普通失败。

use std::io::ErrorKind;
use tokio::signal;

use crate::core::models::{CapturedOutput, CommandSpec, OrchestratorError, RunOutcome};

/// The seam between the orchestration layers and the operating system. The
/// engine and lifecycle manager are generic over this so tests can substitute
/// a scripted spy.
///
/// 编排层与操作系统之间的接缝。引擎和生命周期管理器对其泛型化，
/// 以便测试可以替换为脚本化的 spy。
#[allow(async_fn_in_trait)]
pub trait ProcessRunner {
    /// Executes `spec` with inherited standard streams, blocking until the
    /// child terminates or the operator interrupts it.
    async fn run(&mut self, spec: &CommandSpec) -> Result<RunOutcome, OrchestratorError>;

    /// Executes `spec` with captured output, for quick probes such as the
    /// toolchain version check.
    async fn capture(&mut self, spec: &CommandSpec) -> Result<CapturedOutput, OrchestratorError>;
}

/// The real runner: children inherit this process's streams so test and build
/// output appears live, unbuffered.
///
/// 真实的运行器：子进程继承本进程的流，
/// 因此测试和构建输出是实时、无缓冲的。
#[derive(Debug, Default)]
pub struct StreamedRunner;

impl StreamedRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for StreamedRunner {
    async fn run(&mut self, spec: &CommandSpec) -> Result<RunOutcome, OrchestratorError> {
        let mut child = build_command(spec)
            .spawn()
            .map_err(|e| spawn_error(spec, &e))?;

        // Race completion against Ctrl-C. The terminal delivers the interrupt
        // to the whole foreground process group, so the child receives it as
        // well; we still wait the child out so its streams flush before the
        // orchestrator unwinds.
        // 将完成与 Ctrl-C 竞争。终端将中断传递给整个前台进程组，
        // 因此子进程也会收到；我们仍然等待子进程结束，
        // 以便在编排器回退之前刷新其流。
        tokio::select! {
            status = child.wait() => {
                let status = status.map_err(|e| spawn_error(spec, &e))?;
                // A signal-terminated child has no code; that is a failure,
                // not an interrupt, since no operator interrupt was seen.
                Ok(RunOutcome::Completed { exit_code: status.code().unwrap_or(1) })
            }
            _ = signal::ctrl_c() => {
                let _ = child.wait().await;
                Ok(RunOutcome::Interrupted)
            }
        }
    }

    async fn capture(&mut self, spec: &CommandSpec) -> Result<CapturedOutput, OrchestratorError> {
        let output = build_command(spec)
            .output()
            .await
            .map_err(|e| spawn_error(spec, &e))?;

        Ok(CapturedOutput {
            outcome: RunOutcome::Completed {
                exit_code: output.status.code().unwrap_or(1),
            },
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
        })
    }
}

fn build_command(spec: &CommandSpec) -> tokio::process::Command {
    let mut cmd = tokio::process::Command::new(&spec.program);
    cmd.args(&spec.args);
    if let Some(dir) = &spec.working_dir {
        cmd.current_dir(dir);
    }
    cmd
}

/// Maps a spawn failure to the error taxonomy. A program that cannot be
/// spawned at all (not found, not executable) is a setup failure, distinct
/// from a found-and-run program exiting non-zero.
fn spawn_error(spec: &CommandSpec, e: &std::io::Error) -> OrchestratorError {
    if e.kind() != ErrorKind::NotFound {
        eprintln!("Failed to run '{}': {e}", spec.program);
    }
    OrchestratorError::ToolUnavailable {
        program: spec.program.clone(),
    }
}
