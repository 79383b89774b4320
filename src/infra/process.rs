//! # Stale Process Cleanup Module / 过期进程清理模块
//!
//! Best-effort termination of previously started service instances, keyed by
//! a command-line pattern. Absence of a stale process is the common, successful
//! case, so failures here are logged and swallowed, never escalated.
//!
//! 尽力终止先前启动的服务实例，按命令行模式匹配。
//! 不存在过期进程是常见的成功情况，因此此处的失败只记录并吞掉，从不上报。

use colored::*;
use std::env;
use std::time::Duration;

use crate::core::models::CommandSpec;
use crate::infra::command::ProcessRunner;

/// Terminates any running instance matching `pattern`, using the host OS's
/// native mechanism, then waits `settle_secs` so the OS releases bound ports
/// before the caller binds them again.
///
/// 使用宿主操作系统的原生机制终止任何匹配 `pattern` 的运行实例，
/// 然后等待 `settle_secs`，让操作系统在调用者重新绑定端口之前释放它们。
pub async fn terminate_stale_instances<R: ProcessRunner>(
    runner: &mut R,
    pattern: &str,
    settle_secs: u64,
) {
    let spec = kill_spec(pattern);

    // Captured, not streamed: the kill tools are noisy when nothing matches.
    // 捕获而非转发输出：没有匹配项时这些终止工具会产生噪音。
    if let Err(e) = runner.capture(&spec).await {
        println!("   {}", format!("(cleanup skipped: {e})").dimmed());
    }

    if settle_secs > 0 {
        tokio::time::sleep(Duration::from_secs(settle_secs)).await;
    }
}

/// Selects the platform termination command at runtime. Windows has no
/// pattern-matching kill, so the whole toolchain host process is targeted
/// there, matching the behavior the service's developers rely on locally.
fn kill_spec(pattern: &str) -> CommandSpec {
    match env::consts::OS {
        "windows" => CommandSpec::new("taskkill").args(["/f", "/im", "dotnet.exe"]),
        _ => CommandSpec::new("pkill").args(["-f", pattern]),
    }
}
