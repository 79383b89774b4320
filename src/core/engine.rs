//! # Orchestration Engine Module / 编排引擎模块
//!
//! Each operating mode is a sequencing + aggregation policy over the registry:
//! build-then-test with continue-past-failure for "all", a single resolved
//! scope, one consolidated coverage or fast invocation, or the long-lived
//! watch loop. Dispatch is strictly sequential; build artifacts and the
//! coverage directory are shared resources, so nothing runs concurrently.
//!
//! 每种操作模式都是注册表上的一种排序与聚合策略：
//! "all" 模式先构建后测试并在失败后继续；单一范围直接解析执行；
//! coverage 和 fast 为单次合并调用；watch 为长驻循环。
//! 调度严格顺序执行；构建产物和覆盖率目录是共享资源，因此不允许并发。

use crate::core::config::SuiteConfig;
use crate::core::models::{
    CommandSpec, ExecutionResult, OrchestratorError, RunOutcome, RunReport,
};
use crate::core::registry::{self, RunnableUnit};
use crate::infra::command::ProcessRunner;
use crate::reporting::console;

/// The selected operating mode, decided once at CLI parse time.
/// 选定的操作模式，在 CLI 解析时一次性确定。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Build once, then every registry unit in order, no fail-fast.
    All,
    /// One resolved scope, invoked directly.
    Scope(String),
    /// One consolidated invocation with coverage collection.
    Coverage,
    /// Skip the build entirely; trust prior artifacts.
    Fast,
    /// Long-lived self-restarting invocation until interrupted.
    Watch,
}

/// Sequences process-runner invocations per the selected mode's policy and
/// aggregates their results into a [`RunReport`].
pub struct Engine<'a, R: ProcessRunner> {
    runner: &'a mut R,
    config: &'a SuiteConfig,
}

impl<'a, R: ProcessRunner> Engine<'a, R> {
    pub fn new(runner: &'a mut R, config: &'a SuiteConfig) -> Self {
        Self { runner, config }
    }

    /// Probes the toolchain once before any mode runs, printing its version
    /// and a pin-mismatch warning. A missing toolchain aborts here, before a
    /// single unit is attempted.
    ///
    /// 在任何模式运行之前探测一次工具链，打印其版本和版本固定不匹配的警告。
    /// 工具链缺失会在此处中止，在尝试任何单元之前。
    pub async fn preflight(&mut self) -> Result<(), OrchestratorError> {
        let spec = CommandSpec::new(self.config.toolchain.as_str()).arg("--version");
        let probe = self.runner.capture(&spec).await?;
        console::toolchain_version(
            &probe.stdout,
            &self.config.pinned_version_prefix,
            &self.config.pinned_version,
        );
        Ok(())
    }

    pub async fn execute(&mut self, mode: &Mode) -> Result<RunReport, OrchestratorError> {
        match mode {
            Mode::All => self.run_all().await,
            Mode::Scope(scope) => self.run_scope(scope).await,
            Mode::Coverage => self.run_coverage().await,
            Mode::Fast => self.run_fast().await,
            Mode::Watch => self.run_watch().await,
        }
    }

    /// Build once; a failed build makes every test result meaningless, so it
    /// gates all units. Afterwards every unit runs in registry order and
    /// failures are recorded, not propagated, so one invocation yields a
    /// complete cross-scope report.
    async fn run_all(&mut self) -> Result<RunReport, OrchestratorError> {
        console::run_all_started();
        self.build_solution().await?;

        let mut report = RunReport::new();
        for unit in registry::all() {
            let result = self.run_unit(unit, true).await?;
            report.record(result);
        }
        Ok(report)
    }

    /// A single scope runs without a preceding solution build; the toolchain
    /// builds incrementally as part of its own invocation.
    async fn run_scope(&mut self, scope: &str) -> Result<RunReport, OrchestratorError> {
        let unit = registry::resolve(scope)?;
        let result = self.run_unit(unit, false).await?;
        Ok(RunReport::single(result))
    }

    /// One consolidated invocation across all units with coverage collection;
    /// the exit code is passed through unchanged.
    async fn run_coverage(&mut self) -> Result<RunReport, OrchestratorError> {
        console::coverage_started();
        let spec = CommandSpec::new(self.config.toolchain.as_str())
            .arg("test")
            .arg("--configuration")
            .arg(self.config.configuration.as_str())
            .arg("--collect:XPlat Code Coverage")
            .arg("--results-directory")
            .arg(self.config.results_dir.display().to_string())
            .args(["--logger", "trx;LogFileName=TestResults.trx"])
            .args(["--verbosity", "normal"])
            .args(self.config.extra_args());

        let exit_code = self.run_to_completion(&spec).await?;
        if exit_code == 0 {
            console::coverage_locations(&self.config.results_dir);
        }
        Ok(RunReport::single(ExecutionResult::new(None, exit_code)))
    }

    /// Skips the build step entirely, trusting prior build artifacts.
    /// Intended for iterative development, not CI.
    async fn run_fast(&mut self) -> Result<RunReport, OrchestratorError> {
        console::fast_mode_started();
        let spec = CommandSpec::new(self.config.toolchain.as_str())
            .args(["test", "--no-build", "--verbosity", "normal"])
            .args(self.config.extra_args());

        let exit_code = self.run_to_completion(&spec).await?;
        Ok(RunReport::single(ExecutionResult::new(None, exit_code)))
    }

    /// The watch loop is delegated entirely to the toolchain as one blocking
    /// collaborator invocation; an operator interrupt is a clean stop, not a
    /// failure.
    ///
    /// watch 循环完全委托给工具链，作为一次阻塞的协作调用；
    /// 操作员中断是正常停止，不是失败。
    async fn run_watch(&mut self) -> Result<RunReport, OrchestratorError> {
        console::watch_mode_started();
        let spec = CommandSpec::new(self.config.toolchain.as_str())
            .args(["watch", "test", "--verbosity", "normal"]);

        match self.runner.run(&spec).await? {
            RunOutcome::Interrupted => {
                console::watch_mode_stopped();
                Ok(RunReport::single(ExecutionResult::new(None, 0)))
            }
            RunOutcome::Completed { exit_code } => {
                Ok(RunReport::single(ExecutionResult::new(None, exit_code)))
            }
        }
    }

    async fn build_solution(&mut self) -> Result<(), OrchestratorError> {
        console::build_started();
        let spec = CommandSpec::new(self.config.toolchain.as_str())
            .arg("build")
            .arg("--configuration")
            .arg(self.config.configuration.as_str());

        let exit_code = self.run_to_completion(&spec).await?;
        if exit_code != 0 {
            return Err(OrchestratorError::BuildFailure { exit_code });
        }
        console::build_succeeded();
        Ok(())
    }

    /// Runs one registry unit and returns its immutable result. `no_build`
    /// is set when a solution build has already run this invocation.
    async fn run_unit(
        &mut self,
        unit: &RunnableUnit,
        no_build: bool,
    ) -> Result<ExecutionResult, OrchestratorError> {
        console::unit_header(unit);

        let mut spec = CommandSpec::new(self.config.toolchain.as_str())
            .arg("test")
            .arg(unit.location)
            .args(["--verbosity", "normal"])
            .args(["--logger", "console;verbosity=normal"])
            .arg("--configuration")
            .arg(self.config.configuration.as_str());
        if no_build {
            spec = spec.arg("--no-build");
        }
        spec = spec
            .arg("--collect:XPlat Code Coverage")
            .args(self.config.extra_args());

        let exit_code = self.run_to_completion(&spec).await?;
        console::unit_result(unit, exit_code);
        Ok(ExecutionResult::new(Some(unit.id), exit_code))
    }

    /// An interrupt mid-unit aborts the remaining units; no partial summary
    /// is synthesized for units not yet attempted.
    /// 单元执行中的中断会中止剩余单元；不会为尚未尝试的单元合成部分摘要。
    async fn run_to_completion(&mut self, spec: &CommandSpec) -> Result<i32, OrchestratorError> {
        match self.runner.run(spec).await? {
            RunOutcome::Completed { exit_code } => Ok(exit_code),
            RunOutcome::Interrupted => Err(OrchestratorError::Interrupted),
        }
    }
}
