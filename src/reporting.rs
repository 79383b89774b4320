//! # Reporting Module / 报告模块
//!
//! Console rendering of progress lines, fatal-error remedies and the final
//! pass/fail summary.
//!
//! 控制台渲染：进度行、致命错误补救提示和最终的通过/失败摘要。

pub mod console;

// Re-export common reporting functions
pub use console::{fatal, summary};
