//! # Lifecycle Manager Module / 生命周期管理模块
//!
//! The "start a long-running service for manual testing" flow, as an ordered
//! state machine:
//!
//! `CheckPrerequisites → CheckProjectExists → KillStaleInstances → Build →
//! PrintEndpoints → RunBlocking`
//!
//! Pre-flight failures halt before any cleanup or build; cleanup failures are
//! swallowed; a build failure is terminal; an operator interrupt during the
//! blocking run is a clean stop.
//!
//! "启动长驻服务以进行手动测试" 的流程，作为有序状态机。
//! 预检失败会在任何清理或构建之前停止；清理失败被吞掉；
//! 构建失败是终止性的；阻塞运行期间的操作员中断是正常停止。

use crate::core::config::SuiteConfig;
use crate::core::models::{CommandSpec, OrchestratorError, RunOutcome, ServeOutcome};
use crate::infra::command::ProcessRunner;
use crate::infra::process;
use crate::reporting::console;

/// Drives the serve flow over a [`ProcessRunner`].
pub struct Lifecycle<'a, R: ProcessRunner> {
    runner: &'a mut R,
    config: &'a SuiteConfig,
}

impl<'a, R: ProcessRunner> Lifecycle<'a, R> {
    pub fn new(runner: &'a mut R, config: &'a SuiteConfig) -> Self {
        Self { runner, config }
    }

    /// Runs the full state machine to one of its terminal states. Errors are
    /// the halted states; `Ok` carries the outcome of the blocking run.
    ///
    /// 将完整状态机运行到某个终止状态。错误即停止状态；
    /// `Ok` 携带阻塞运行的结果。
    pub async fn execute(&mut self) -> Result<ServeOutcome, OrchestratorError> {
        self.check_prerequisites().await?;
        self.check_project_exists()?;
        self.kill_stale_instances().await;
        self.build().await?;
        console::server_info(&self.config.server_url);
        self.run_blocking().await
    }

    /// Verifies the toolchain is present and reports its version. A version
    /// mismatch against the pinned prefix warns but proceeds.
    async fn check_prerequisites(&mut self) -> Result<(), OrchestratorError> {
        let spec = CommandSpec::new(self.config.toolchain.as_str()).arg("--version");
        let probe = self.runner.capture(&spec).await?;
        console::toolchain_version(
            &probe.stdout,
            &self.config.pinned_version_prefix,
            &self.config.pinned_version,
        );
        Ok(())
    }

    /// Absence of the entry-point artifact is fatal and terminal: the state
    /// machine halts here without attempting cleanup or build.
    /// 入口点产物不存在是致命且终止性的：状态机在此停止，
    /// 不尝试清理或构建。
    fn check_project_exists(&self) -> Result<(), OrchestratorError> {
        if !self.config.project_path.exists() {
            return Err(OrchestratorError::ProjectMissing {
                path: self.config.project_path.clone(),
            });
        }
        Ok(())
    }

    async fn kill_stale_instances(&mut self) {
        console::cleanup_started();
        process::terminate_stale_instances(
            self.runner,
            &self.config.stale_pattern,
            self.config.settle_secs,
        )
        .await;
    }

    async fn build(&mut self) -> Result<(), OrchestratorError> {
        console::project_build_started();
        let spec = CommandSpec::new(self.config.toolchain.as_str())
            .arg("build")
            .arg(self.config.project_path.display().to_string());

        match self.runner.run(&spec).await? {
            RunOutcome::Completed { exit_code: 0 } => {
                console::build_succeeded();
                Ok(())
            }
            RunOutcome::Completed { exit_code } => {
                Err(OrchestratorError::BuildFailure { exit_code })
            }
            RunOutcome::Interrupted => Err(OrchestratorError::Interrupted),
        }
    }

    /// Blocks until the service exits or the operator interrupts it. An
    /// interrupt (or a clean exit) is `Stopped`; the service dying with a
    /// non-zero code on its own is `Failed` with that code surfaced.
    async fn run_blocking(&mut self) -> Result<ServeOutcome, OrchestratorError> {
        let spec = CommandSpec::new(self.config.toolchain.as_str())
            .arg("run")
            .arg("--project")
            .arg(self.config.project_path.display().to_string());

        match self.runner.run(&spec).await? {
            RunOutcome::Interrupted | RunOutcome::Completed { exit_code: 0 } => {
                console::server_stopped();
                Ok(ServeOutcome::Stopped)
            }
            RunOutcome::Completed { exit_code } => {
                console::server_failed(exit_code);
                Ok(ServeOutcome::Failed { exit_code })
            }
        }
    }
}
