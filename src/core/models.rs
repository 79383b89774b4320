//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the suite
//! runner: command specifications, execution outcomes, aggregated run reports
//! and the orchestrator error taxonomy.
//!
//! 此模块定义了整个套件运行器中使用的核心数据结构：
//! 命令规格、执行结果、聚合运行报告和编排器错误分类。

use std::fmt;
use std::path::PathBuf;

/// Describes one external invocation: a program, an ordered argument list and
/// an optional working directory. Constructed immediately before execution and
/// never persisted.
///
/// 描述一次外部调用：程序、有序参数列表和可选的工作目录。
/// 在执行前立即构建，从不持久化。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// The program to invoke (e.g. "dotnet").
    /// 要调用的程序（例如 "dotnet"）。
    pub program: String,
    /// Ordered argument list passed verbatim to the program.
    /// 按原样传递给程序的有序参数列表。
    pub args: Vec<String>,
    /// Optional working directory for the child process.
    /// 子进程的可选工作目录。
    pub working_dir: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Renders the invocation as a single shell-like line for progress output.
    /// 将调用渲染为单行（类似 shell）用于进度输出。
    pub fn display_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            if arg.contains(' ') {
                line.push('"');
                line.push_str(arg);
                line.push('"');
            } else {
                line.push_str(arg);
            }
        }
        line
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_line())
    }
}

/// The terminal state of one child process: it either ran to completion with
/// a real exit code, or the operator interrupted it.
///
/// 一个子进程的终止状态：要么运行完成并带有真实的退出码，
/// 要么被操作员中断。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The child terminated on its own with the given exit code.
    /// 子进程自行终止，带有给定的退出码。
    Completed { exit_code: i32 },
    /// The operator interrupted the child (Ctrl-C); the child has been waited
    /// on and its streams flushed before this is produced.
    /// 操作员中断了子进程（Ctrl-C）；在产生此结果之前，
    /// 子进程已被等待且其流已刷新。
    Interrupted,
}

impl RunOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, RunOutcome::Completed { exit_code: 0 })
    }
}

/// Output of a captured (non-streamed) invocation, used for quick probes such
/// as the toolchain version check.
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    pub outcome: RunOutcome,
    pub stdout: String,
}

/// The result of running one unit of work. Immutable once produced; owned by
/// the orchestration engine for the duration of one run and discarded after
/// reporting.
///
/// 运行一个工作单元的结果。一旦产生即不可变；
/// 在一次运行期间由编排引擎持有，报告后丢弃。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// The registry id of the unit this result belongs to, if any. Aggregate
    /// invocations (coverage, fast) carry `None`.
    /// 此结果所属单元的注册表 id（如果有）。
    /// 聚合调用（coverage、fast）为 `None`。
    pub unit_id: Option<String>,
    /// The child's real exit code.
    /// 子进程的真实退出码。
    pub exit_code: i32,
    /// Whether the invocation succeeded (`exit_code == 0`).
    /// 调用是否成功（`exit_code == 0`）。
    pub succeeded: bool,
}

impl ExecutionResult {
    pub fn new(unit_id: Option<&str>, exit_code: i32) -> Self {
        Self {
            unit_id: unit_id.map(str::to_string),
            exit_code,
            succeeded: exit_code == 0,
        }
    }
}

/// An ordered collection of execution results plus the aggregate exit code,
/// built incrementally as each unit completes.
///
/// The aggregate is the arithmetic sum of per-unit exit codes (saturating),
/// preserving the CLI contract of the original scripts: non-zero iff any unit
/// failed. Clamping to the 1..=255 process range happens only at the process
/// boundary.
///
/// 执行结果的有序集合加上聚合退出码，随着每个单元完成而增量构建。
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub results: Vec<ExecutionResult>,
    pub aggregate_exit_code: i32,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a single result, passing its exit code through unchanged.
    pub fn single(result: ExecutionResult) -> Self {
        let aggregate_exit_code = result.exit_code;
        Self {
            results: vec![result],
            aggregate_exit_code,
        }
    }

    /// Records one unit's result and folds its exit code into the aggregate.
    /// 记录一个单元的结果并将其退出码折叠到聚合值中。
    pub fn record(&mut self, result: ExecutionResult) {
        self.aggregate_exit_code = self.aggregate_exit_code.saturating_add(result.exit_code);
        self.results.push(result);
    }

    pub fn is_success(&self) -> bool {
        self.aggregate_exit_code == 0
    }

    pub fn failed_units(&self) -> impl Iterator<Item = &ExecutionResult> {
        self.results.iter().filter(|r| !r.succeeded)
    }
}

/// Terminal states of the serve lifecycle's blocking run step.
/// serve 生命周期阻塞运行步骤的终止状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeOutcome {
    /// The operator stopped the service (Ctrl-C), or it exited cleanly.
    /// 操作员停止了服务（Ctrl-C），或服务正常退出。
    Stopped,
    /// The service terminated on its own with a non-zero exit code.
    /// 服务自行终止，退出码非零。
    Failed { exit_code: i32 },
}

impl ServeOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            ServeOutcome::Stopped => 0,
            ServeOutcome::Failed { exit_code } => *exit_code,
        }
    }
}

/// The orchestrator's fatal error taxonomy. Per-unit test failures are not in
/// here: they are recorded in the [`RunReport`] and never abort sibling units.
///
/// 编排器的致命错误分类。每个单元的测试失败不在此处：
/// 它们被记录在 [`RunReport`] 中，且从不中止同级单元。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrchestratorError {
    /// The external toolchain program could not be spawned (not found).
    /// A setup failure, never to be conflated with a test failure.
    /// 无法派生外部工具链程序（未找到）。
    /// 这是环境问题，绝不能与测试失败混淆。
    ToolUnavailable { program: String },
    /// The service's entry-point artifact is absent.
    /// 服务的入口点产物不存在。
    ProjectMissing { path: PathBuf },
    /// The build step exited non-zero; nothing downstream is attempted.
    /// 构建步骤退出码非零；不再尝试任何后续步骤。
    BuildFailure { exit_code: i32 },
    /// An unrecognized scope identifier was selected.
    /// 选择了无法识别的范围标识符。
    UnknownScope { given: String, valid: Vec<String> },
    /// The operator interrupted a non-watch invocation mid-flight.
    /// 操作员在非 watch 调用进行中发出了中断。
    Interrupted,
}

impl OrchestratorError {
    /// The process exit code this error maps to. Pre-flight failures use a
    /// distinguished code so callers can tell a broken environment from a
    /// failing suite.
    pub fn exit_code(&self) -> i32 {
        match self {
            OrchestratorError::ToolUnavailable { .. }
            | OrchestratorError::ProjectMissing { .. }
            | OrchestratorError::UnknownScope { .. } => 2,
            OrchestratorError::BuildFailure { exit_code } => (*exit_code).max(1),
            OrchestratorError::Interrupted => 130,
        }
    }

    /// A suggested remedy to print alongside the error, when one exists.
    /// 与错误一起打印的建议补救措施（如果存在）。
    pub fn remedy(&self) -> Option<String> {
        match self {
            OrchestratorError::ToolUnavailable { program } => Some(format!(
                "Install the '{program}' toolchain and make sure it is on your PATH."
            )),
            OrchestratorError::ProjectMissing { .. } => {
                Some("Make sure you are running from the repository root.".to_string())
            }
            OrchestratorError::BuildFailure { .. } => {
                Some("Check the build errors above.".to_string())
            }
            OrchestratorError::UnknownScope { valid, .. } => {
                Some(format!("Available scopes: {}", valid.join(", ")))
            }
            OrchestratorError::Interrupted => None,
        }
    }
}

impl fmt::Display for OrchestratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrchestratorError::ToolUnavailable { program } => {
                write!(f, "required toolchain '{program}' not found")
            }
            OrchestratorError::ProjectMissing { path } => {
                write!(f, "project entry point not found: {}", path.display())
            }
            OrchestratorError::BuildFailure { exit_code } => {
                write!(f, "build failed with exit code {exit_code}")
            }
            OrchestratorError::UnknownScope { given, .. } => {
                write!(f, "unknown test scope: {given}")
            }
            OrchestratorError::Interrupted => write!(f, "interrupted by user"),
        }
    }
}

impl std::error::Error for OrchestratorError {}
