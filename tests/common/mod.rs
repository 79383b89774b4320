//! Shared test helpers: a scripted spy [`ProcessRunner`] that records every
//! invocation, and configuration fixtures.
//!
//! 共享测试辅助：记录每次调用的脚本化 spy [`ProcessRunner`]，以及配置夹具。
#![allow(dead_code)] // not every test binary uses every helper

use std::collections::VecDeque;

use suite_runner::core::config::SuiteConfig;
use suite_runner::core::models::{CapturedOutput, CommandSpec, OrchestratorError, RunOutcome};
use suite_runner::infra::command::ProcessRunner;

/// Records every [`CommandSpec`] handed to it and plays back scripted
/// outcomes for streamed invocations, in order. When the script runs dry,
/// everything succeeds with exit code 0.
#[derive(Default)]
pub struct SpyRunner {
    /// Every invocation, streamed and captured, in call order.
    pub invocations: Vec<CommandSpec>,
    scripted: VecDeque<Result<RunOutcome, OrchestratorError>>,
    version: String,
    fail_probe: bool,
    fail_kill: bool,
}

impl SpyRunner {
    pub fn new() -> Self {
        Self {
            version: "8.0.406".to_string(),
            ..Self::default()
        }
    }

    /// Changes the version string the toolchain probe reports.
    pub fn with_version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }

    /// Queues one outcome for the next streamed invocation.
    pub fn script(mut self, outcome: Result<RunOutcome, OrchestratorError>) -> Self {
        self.scripted.push_back(outcome);
        self
    }

    pub fn script_exit(self, exit_code: i32) -> Self {
        self.script(Ok(RunOutcome::Completed { exit_code }))
    }

    pub fn script_interrupt(self) -> Self {
        self.script(Ok(RunOutcome::Interrupted))
    }

    /// Makes the `--version` probe fail as if the toolchain were absent.
    pub fn without_toolchain(mut self) -> Self {
        self.fail_probe = true;
        self
    }

    /// Makes the stale-instance kill command fail.
    pub fn failing_kill(mut self) -> Self {
        self.fail_kill = true;
        self
    }

    /// The streamed invocations only (build/test/run), excluding probes and
    /// cleanup captures.
    pub fn streamed(&self) -> Vec<&CommandSpec> {
        self.invocations
            .iter()
            .filter(|s| !is_probe(s) && !is_kill(s))
            .collect()
    }

    pub fn invoked_subcommand(&self, subcommand: &str) -> bool {
        self.invocations
            .iter()
            .any(|s| s.args.first().map(String::as_str) == Some(subcommand))
    }
}

fn is_probe(spec: &CommandSpec) -> bool {
    spec.args == ["--version"]
}

fn is_kill(spec: &CommandSpec) -> bool {
    spec.program == "pkill" || spec.program == "taskkill"
}

impl ProcessRunner for SpyRunner {
    async fn run(&mut self, spec: &CommandSpec) -> Result<RunOutcome, OrchestratorError> {
        self.invocations.push(spec.clone());
        self.scripted
            .pop_front()
            .unwrap_or(Ok(RunOutcome::Completed { exit_code: 0 }))
    }

    async fn capture(&mut self, spec: &CommandSpec) -> Result<CapturedOutput, OrchestratorError> {
        self.invocations.push(spec.clone());
        if is_probe(spec) && self.fail_probe {
            return Err(OrchestratorError::ToolUnavailable {
                program: spec.program.clone(),
            });
        }
        if is_kill(spec) && self.fail_kill {
            return Err(OrchestratorError::ToolUnavailable {
                program: spec.program.clone(),
            });
        }
        Ok(CapturedOutput {
            outcome: RunOutcome::Completed { exit_code: 0 },
            stdout: self.version.clone(),
        })
    }
}

/// A default configuration with the settle delay zeroed so lifecycle tests
/// do not sleep.
pub fn test_config() -> SuiteConfig {
    SuiteConfig {
        settle_secs: 0,
        ..SuiteConfig::default()
    }
}
