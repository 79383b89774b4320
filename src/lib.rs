//! # Suite Runner Library / Suite Runner 库
//!
//! This library provides the core functionality for the suite-runner tool:
//! a scope-aware orchestrator that runs a multi-project test suite through an
//! external toolchain and manages the lifecycle of a long-running service for
//! local manual testing.
//!
//! 此库为 suite-runner 工具提供核心功能：
//! 一个按范围编排的运行器，通过外部工具链运行多项目测试套件，
//! 并管理用于本地手动测试的长驻服务的生命周期。
//!
//! ## Modules / 模块
//!
//! - `core` - Data models, configuration, project registry, orchestration
//!   engine and serve lifecycle
//! - `infra` - Infrastructure services: command execution, process cleanup
//! - `reporting` - Console progress and summary rendering
//! - `cli` - Command-line interface and subcommands
//!
//! - `core` - 数据模型、配置、项目注册表、编排引擎和 serve 生命周期
//! - `infra` - 基础设施服务：命令执行、进程清理
//! - `reporting` - 控制台进度和摘要渲染
//! - `cli` - 命令行接口和子命令

pub mod cli;
pub mod commands;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use self::core::config;
pub use self::core::engine;
pub use self::core::models;
pub use self::core::registry;
