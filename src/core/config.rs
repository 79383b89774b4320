//! # Configuration Module / 配置模块
//!
//! The explicit configuration struct handed to the orchestration engine and
//! lifecycle manager at construction. Loaded from an optional
//! `SuiteRunner.toml`; every field has a default so the file can be absent.
//!
//! 在构造时传递给编排引擎和生命周期管理器的显式配置结构。
//! 从可选的 `SuiteRunner.toml` 加载；每个字段都有默认值，因此文件可以不存在。

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Runner-wide configuration. Components receive this by reference; the paths
/// in here are never read back from ambient process state.
///
/// 运行器范围的配置。组件通过引用接收它；
/// 此处的路径从不从进程环境状态中读取。
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteConfig {
    /// The external toolchain program every invocation goes through.
    /// 每次调用都经过的外部工具链程序。
    #[serde(default = "default_toolchain")]
    pub toolchain: String,
    /// Build configuration passed to build/test invocations.
    #[serde(default = "default_configuration")]
    pub configuration: String,
    /// The service's entry-point project, used by `serve`.
    #[serde(default = "default_project_path")]
    pub project_path: PathBuf,
    /// Where coverage runs collect their structured results.
    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,
    /// Expected toolchain major version prefix (e.g. "8."). A mismatch is a
    /// warning, not a hard failure.
    /// 期望的工具链主版本前缀（例如 "8."）。不匹配只是警告，不是硬性失败。
    #[serde(default = "default_pinned_prefix")]
    pub pinned_version_prefix: String,
    /// The exact pinned version named in the mismatch warning.
    #[serde(default = "default_pinned_version")]
    pub pinned_version: String,
    /// Base URL the service binds to, used for the endpoint printout.
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// Command-line pattern identifying stale service instances to terminate.
    /// 用于识别要终止的过期服务实例的命令行模式。
    #[serde(default = "default_stale_pattern")]
    pub stale_pattern: String,
    /// Seconds to wait after stale-instance cleanup so the OS releases bound
    /// ports before the next step binds them.
    #[serde(default = "default_settle_secs")]
    pub settle_secs: u64,
    /// Extra arguments appended to every test invocation, shell-style.
    /// 附加到每次测试调用的额外参数（shell 风格）。
    #[serde(default)]
    pub extra_test_args: Option<String>,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            toolchain: default_toolchain(),
            configuration: default_configuration(),
            project_path: default_project_path(),
            results_dir: default_results_dir(),
            pinned_version_prefix: default_pinned_prefix(),
            pinned_version: default_pinned_version(),
            server_url: default_server_url(),
            stale_pattern: default_stale_pattern(),
            settle_secs: default_settle_secs(),
            extra_test_args: None,
        }
    }
}

impl SuiteConfig {
    /// Loads the configuration from `path` if it exists, falling back to the
    /// built-in defaults otherwise. A present-but-malformed file is an error;
    /// silently ignoring it would mask typos.
    ///
    /// 如果 `path` 存在则从中加载配置，否则回退到内置默认值。
    /// 文件存在但格式错误是一个错误；静默忽略会掩盖拼写错误。
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Splits `extra_test_args` shell-style. Unparseable input (e.g. an
    /// unclosed quote) yields nothing rather than a half-split argument list.
    pub fn extra_args(&self) -> Vec<String> {
        self.extra_test_args
            .as_deref()
            .and_then(shlex::split)
            .unwrap_or_default()
    }
}

fn default_toolchain() -> String {
    "dotnet".to_string()
}

fn default_configuration() -> String {
    "Release".to_string()
}

fn default_project_path() -> PathBuf {
    PathBuf::from("src/Server/Server.csproj")
}

fn default_results_dir() -> PathBuf {
    PathBuf::from("./TestResults")
}

fn default_pinned_prefix() -> String {
    "8.".to_string()
}

fn default_pinned_version() -> String {
    "8.0.406".to_string()
}

fn default_server_url() -> String {
    "http://localhost:5070".to_string()
}

fn default_stale_pattern() -> String {
    "dotnet.*Server".to_string()
}

fn default_settle_secs() -> u64 {
    2
}
