//! # Lifecycle Manager Tests / 生命周期管理器测试
//!
//! Asserts the serve state machine's ordering and terminal states against a
//! scripted spy runner: pre-flight short-circuits, swallowed cleanup
//! failures, terminal build failures and interrupt-as-clean-stop semantics.

mod common;

use common::SpyRunner;
use std::fs;
use std::path::PathBuf;
use suite_runner::core::config::SuiteConfig;
use suite_runner::core::lifecycle::Lifecycle;
use suite_runner::core::models::{OrchestratorError, ServeOutcome};

/// A config whose entry-point artifact actually exists, backed by a scratch
/// directory that lives as long as the returned guard.
fn config_with_project() -> (SuiteConfig, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let project = dir.path().join("Server.csproj");
    fs::write(&project, "<Project />").unwrap();

    let mut config = common::test_config();
    config.project_path = project;
    (config, dir)
}

#[tokio::test]
async fn missing_project_halts_before_cleanup_and_build() {
    let mut config = common::test_config();
    config.project_path = PathBuf::from("does/not/exist/Server.csproj");

    let mut spy = SpyRunner::new();
    let err = Lifecycle::new(&mut spy, &config).execute().await.unwrap_err();

    assert!(matches!(err, OrchestratorError::ProjectMissing { .. }));
    // Only the toolchain probe ran: no kill, no build, no run.
    assert_eq!(spy.invocations.len(), 1);
    assert_eq!(spy.invocations[0].args, ["--version"]);
}

#[tokio::test]
async fn missing_toolchain_halts_before_everything() {
    let (config, _guard) = config_with_project();
    let mut spy = SpyRunner::new().without_toolchain();
    let err = Lifecycle::new(&mut spy, &config).execute().await.unwrap_err();

    assert!(matches!(err, OrchestratorError::ToolUnavailable { .. }));
    assert_eq!(spy.invocations.len(), 1);
}

#[tokio::test]
async fn interrupt_during_blocking_run_is_a_clean_stop() {
    let (config, _guard) = config_with_project();
    // Build succeeds; the blocking run is interrupted by the operator.
    let mut spy = SpyRunner::new().script_exit(0).script_interrupt();
    let outcome = Lifecycle::new(&mut spy, &config).execute().await.unwrap();

    assert_eq!(outcome, ServeOutcome::Stopped);
    assert_eq!(outcome.exit_code(), 0);
}

#[tokio::test]
async fn service_exiting_nonzero_surfaces_its_code() {
    let (config, _guard) = config_with_project();
    let mut spy = SpyRunner::new().script_exit(0).script_exit(3);
    let outcome = Lifecycle::new(&mut spy, &config).execute().await.unwrap();

    assert_eq!(outcome, ServeOutcome::Failed { exit_code: 3 });
    assert_eq!(outcome.exit_code(), 3);
}

#[tokio::test]
async fn build_failure_is_terminal_and_never_runs_the_service() {
    let (config, _guard) = config_with_project();
    let mut spy = SpyRunner::new().script_exit(1);
    let err = Lifecycle::new(&mut spy, &config).execute().await.unwrap_err();

    assert_eq!(err, OrchestratorError::BuildFailure { exit_code: 1 });
    assert!(spy.invoked_subcommand("build"));
    assert!(!spy.invoked_subcommand("run"));
}

#[tokio::test]
async fn stale_cleanup_failure_is_swallowed() {
    let (config, _guard) = config_with_project();
    // The kill command itself is unavailable; the flow proceeds regardless.
    let mut spy = SpyRunner::new().failing_kill().script_exit(0).script_exit(0);
    let outcome = Lifecycle::new(&mut spy, &config).execute().await.unwrap();

    assert_eq!(outcome, ServeOutcome::Stopped);
    assert!(spy.invoked_subcommand("build"));
    assert!(spy.invoked_subcommand("run"));
}

#[tokio::test]
async fn version_mismatch_warns_but_proceeds() {
    let (config, _guard) = config_with_project();
    let mut spy = SpyRunner::new()
        .with_version("9.0.100")
        .script_exit(0)
        .script_exit(0);
    let outcome = Lifecycle::new(&mut spy, &config).execute().await.unwrap();

    assert_eq!(outcome, ServeOutcome::Stopped);
}

#[tokio::test]
async fn steps_run_in_declared_order() {
    let (config, _guard) = config_with_project();
    let mut spy = SpyRunner::new().script_exit(0).script_exit(0);
    Lifecycle::new(&mut spy, &config).execute().await.unwrap();

    // probe → kill → build → run, each only after the previous finished.
    assert_eq!(spy.invocations.len(), 4);
    assert_eq!(spy.invocations[0].args, ["--version"]);
    assert!(["pkill", "taskkill"].contains(&spy.invocations[1].program.as_str()));
    assert_eq!(spy.invocations[2].args.first().map(String::as_str), Some("build"));
    assert_eq!(spy.invocations[3].args.first().map(String::as_str), Some("run"));
}
