//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for the suite runner:
//! external command execution and platform-specific process cleanup.
//!
//! 此模块为套件运行器提供基础设施服务：
//! 外部命令执行和平台相关的进程清理。

pub mod command;
pub mod process;
