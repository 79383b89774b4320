//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the suite runner:
//! data models, configuration, the project registry, the orchestration
//! engine and the serve lifecycle.
//!
//! 此模块包含套件运行器的核心功能：
//! 数据模型、配置、项目注册表、编排引擎和 serve 生命周期。

pub mod config;
pub mod engine;
pub mod lifecycle;
pub mod models;
pub mod registry;

// Re-exports
pub use config::SuiteConfig;
pub use engine::{Engine, Mode};
pub use models::{ExecutionResult, OrchestratorError, RunReport};
