//! # Project Registry Module / 项目注册表模块
//!
//! The static catalogue of runnable test scopes. Registry order is the
//! canonical execution order for "run all": cheaper, more localized failures
//! surface before expensive end-to-end ones.
//!
//! 可运行测试范围的静态目录。注册表顺序是 "run all" 的规范执行顺序：
//! 更便宜、更局部的失败先于昂贵的端到端失败出现。

use once_cell::sync::Lazy;

use crate::core::models::OrchestratorError;

/// One independently invocable test scope: an identifier, the location the
/// toolchain is pointed at, and a human description for progress output.
///
/// 一个可独立调用的测试范围：标识符、工具链指向的位置，
/// 以及用于进度输出的人类可读描述。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnableUnit {
    pub id: &'static str,
    pub location: &'static str,
    pub description: &'static str,
}

/// The fixed four-entry catalogue, smallest/fastest to broadest/slowest.
/// 固定的四条目目录，从最小/最快到最广/最慢。
static UNITS: Lazy<Vec<RunnableUnit>> = Lazy::new(|| {
    vec![
        RunnableUnit {
            id: "unit",
            location: "tests/UnitTests",
            description: "Core business logic and utility function tests",
        },
        RunnableUnit {
            id: "service",
            location: "tests/ServiceTests",
            description: "Service layer tests",
        },
        RunnableUnit {
            id: "integration",
            location: "tests/IntegrationTests",
            description: "End-to-end API and HTTP endpoint tests",
        },
        RunnableUnit {
            id: "stdio",
            location: "tests/StdioTests",
            description: "Standard I/O mode and wire protocol tests",
        },
    ]
});

/// Returns every unit in canonical execution order.
pub fn all() -> &'static [RunnableUnit] {
    &UNITS
}

/// The list of valid scope identifiers, in registry order.
pub fn valid_scopes() -> Vec<String> {
    UNITS.iter().map(|u| u.id.to_string()).collect()
}

/// Resolves a scope identifier to its unit. Unknown identifiers fail with
/// [`OrchestratorError::UnknownScope`] listing the valid ones; a silent no-op
/// is never an acceptable answer here.
///
/// 将范围标识符解析为其单元。未知标识符会以
/// [`OrchestratorError::UnknownScope`] 失败并列出有效标识符。
pub fn resolve(scope: &str) -> Result<&'static RunnableUnit, OrchestratorError> {
    UNITS
        .iter()
        .find(|u| u.id == scope)
        .ok_or_else(|| OrchestratorError::UnknownScope {
            given: scope.to_string(),
            valid: valid_scopes(),
        })
}
