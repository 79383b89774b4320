//! # Console Reporting Module / 控制台报告模块
//!
//! All user-facing output lives here: banners, per-unit progress lines,
//! fatal-error remedies and the final pass/fail summary. Purely a function of
//! the data handed in; no side effects beyond printing.
//!
//! 所有面向用户的输出都在这里：横幅、每个单元的进度行、
//! 致命错误的补救提示和最终的通过/失败摘要。
//! 纯粹是输入数据的函数；除打印外没有副作用。

use colored::*;
use std::path::Path;

use crate::core::models::{OrchestratorError, RunReport};
use crate::core::registry::RunnableUnit;

/// Prints the test-runner banner.
pub fn banner() {
    println!("🧪 Suite Runner — Test Orchestrator");
    println!("{}", "=".repeat(37));
}

/// Prints the serve banner.
pub fn serve_banner() {
    println!("🚀 Starting service for local manual testing");
    println!("{}", "=".repeat(50));
}

/// Prints the detected toolchain version, and a warning when it does not
/// match the pinned version prefix. A mismatch is advisory only; the flow
/// proceeds either way.
///
/// 打印检测到的工具链版本；当它与固定版本前缀不匹配时打印警告。
/// 不匹配仅为提示；流程无论如何都会继续。
pub fn toolchain_version(version: &str, pinned_prefix: &str, pinned_version: &str) {
    println!("📊 Toolchain version: {version}");
    if !version.starts_with(pinned_prefix) {
        println!(
            "{}",
            format!("⚠️  Warning: toolchain reports {version}, expected {pinned_prefix}x").yellow()
        );
        println!(
            "{}",
            format!("   The repository pins version {pinned_version}").yellow()
        );
    }
    println!();
}

/// Prints the header for one unit invocation: scope name, description and
/// location, mirroring a running checklist.
pub fn unit_header(unit: &RunnableUnit) {
    println!("🔍 Running {} tests...", unit.id.cyan());
    println!("   Description: {}", unit.description);
    println!("   Path: {}", unit.location);
}

/// Prints the per-unit pass/fail line.
pub fn unit_result(unit: &RunnableUnit, exit_code: i32) {
    if exit_code == 0 {
        println!("{}", format!("✅ {} tests PASSED", unit.id).green());
    } else {
        println!(
            "{}",
            format!("❌ {} tests FAILED (exit code: {exit_code})", unit.id).red()
        );
    }
    println!();
}

pub fn run_all_started() {
    println!("🎯 Running ALL test projects...");
    println!();
}

pub fn build_started() {
    println!("🏗️  Building solution first...");
}

pub fn build_succeeded() {
    println!("{}", "✅ Build successful!".green());
    println!();
}

pub fn coverage_started() {
    println!("📈 Running all tests with code coverage...");
    println!();
}

/// Prints where the coverage artifacts landed. The runner treats them as
/// opaque output of the external toolchain.
pub fn coverage_locations(results_dir: &Path) {
    println!();
    println!("📊 Test results saved to: {}", results_dir.display());
    println!(
        "🔍 Coverage reports generated in: {}",
        results_dir.join("*/coverage.cobertura.xml").display()
    );
}

pub fn fast_mode_started() {
    println!("🏃 Running tests without building (fast mode)...");
    println!();
}

pub fn watch_mode_started() {
    println!("👀 Running tests in watch mode...");
    println!("   Press Ctrl+C to stop watching");
    println!();
}

pub fn watch_mode_stopped() {
    println!("\n{}", "🛑 Watch mode stopped by user".yellow());
}

/// Prints the final summary block for an orchestration run, always echoing
/// the numeric aggregate exit code so the output stays scriptable.
///
/// 打印编排运行的最终摘要块，始终回显数字聚合退出码，
/// 以便输出可用于脚本化。
pub fn summary(report: &RunReport) {
    println!();
    println!("{}", "=".repeat(47));
    if report.is_success() {
        println!("{}", "🎉 ALL TESTS PASSED! ✅".green().bold());
    } else {
        println!("{}", "❌ SOME TESTS FAILED!".red().bold());
        for failed in report.failed_units() {
            if let Some(id) = &failed.unit_id {
                println!("   {} tests failed (exit code: {})", id, failed.exit_code);
            }
        }
        println!("   Please check the test output above for details");
    }
    println!("   Exit code: {}", report.aggregate_exit_code);
    println!("{}", "=".repeat(47));
}

/// Prints a fatal error with its category label and suggested remedy.
/// 打印致命错误及其类别标签和建议的补救措施。
pub fn fatal(error: &OrchestratorError) {
    eprintln!("{}", format!("❌ {error}").red().bold());
    if let Some(remedy) = error.remedy() {
        eprintln!("   {remedy}");
    }
}

pub fn interrupted() {
    println!("\n{}", "🛑 Interrupted — remaining steps skipped".yellow());
}

pub fn cleanup_started() {
    println!("🧹 Cleaning up any existing service instances...");
}

pub fn project_build_started() {
    println!("🔨 Building the project...");
}

/// Prints the endpoint listing and Ctrl-C hint before the blocking run.
/// 在阻塞运行之前打印端点列表和 Ctrl-C 提示。
pub fn server_info(server_url: &str) {
    println!("\n🌐 Starting server on {server_url}");
    println!("📝 Server logs will be displayed below...");
    println!("⏹️  Press Ctrl+C to stop the server");
    println!("\nAvailable endpoints:");
    println!("  🏥 Health:  {server_url}/health");
    println!("  ℹ️  Info:    {server_url}/info");
    println!("  📋 Swagger: {server_url}/swagger");
    println!("  🔗 RPC:     {server_url}/rpc");
    println!("\nReady for manual testing! 🚀");
    println!();
}

pub fn server_stopped() {
    println!("\n{}", "🛑 Server stopped by user".yellow());
}

pub fn server_failed(exit_code: i32) {
    println!(
        "{}",
        format!("❌ Server exited with code {exit_code}").red()
    );
}
