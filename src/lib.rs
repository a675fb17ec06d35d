//! # Unity Validate Library / Unity Validate 库
//!
//! This library drives the Unity editor's batch-mode test runner in a
//! deterministic, agent-friendly way. It normalizes paths between the Unix
//! and Windows namespaces when running under WSL, builds the runner's
//! command line for the `single`, `suite` and `full` validation modes, and
//! names every result and log file predictably.
//!
//! 此库以确定性、便于代理使用的方式驱动 Unity 编辑器的批处理测试运行器。
//! 在 WSL 下运行时，它会在 Unix 和 Windows 命名空间之间规范化路径，
//! 为 `single`、`suite` 和 `full` 验证模式构建运行器命令行，并以可预测的方式命名所有结果和日志文件。
//!
//! ## Modules / 模块
//!
//! - `core` - Data models, configuration, resolution, invocation building and execution
//! - `infra` - Host detection, path translation, child processes, file system, logging
//! - `reporting` - Console progress output
//! - `commands` - The `run` and `init` commands
//! - `cli` - Command-line interface
//!
//! - `core` - 数据模型、配置、解析、调用构建和执行
//! - `infra` - 宿主检测、路径转换、子进程、文件系统、日志
//! - `reporting` - 控制台进度输出
//! - `commands` - `run` 和 `init` 命令
//! - `cli` - 命令行接口

pub mod cli;
pub mod commands;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use core::config;
pub use core::error::{ValidateError, ValidateResult};
pub use core::models;

/// Picks the best available UI locale for a requested language tag.
///
/// It attempts to match the full locale (e.g., "zh-CN"), then just the
/// language code (e.g., "en" from "en-US"), and finally falls back to "en".
pub fn resolve_locale(requested: &str) -> String {
    let available_locales = rust_i18n::available_locales!();

    if available_locales.contains(&requested) {
        return requested.to_string();
    }

    requested
        .split(['-', '_'])
        .next()
        .filter(|lang_code| available_locales.contains(lang_code))
        .unwrap_or("en")
        .to_string()
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
