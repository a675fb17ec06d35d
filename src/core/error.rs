//! # Error Taxonomy Module / 错误分类模块
//!
//! Every failure the orchestrator can hit is fatal. Inner components return
//! these values instead of exiting so they stay testable; only `main` turns
//! one into a process exit.
//!
//! 编排器可能遇到的每个失败都是致命的。内部组件返回这些值而不是直接退出，
//! 只有 `main` 会将其转换为进程退出。

use std::io;
use thiserror::Error;

/// Convenience alias used across `core` and `infra`.
pub type ValidateResult<T> = std::result::Result<T, ValidateError>;

#[derive(Debug, Error)]
pub enum ValidateError {
    /// A required input is missing (executable path, platform, filter).
    /// 缺少必需的输入（可执行文件路径、平台、过滤器）。
    #[error("{0}")]
    Configuration(String),

    /// The external path converter `tool` failed for `path`. `reason` is
    /// always a single line.
    /// 外部路径转换器 `tool` 转换 `path` 失败。`reason` 始终为单行。
    #[error("failed to convert path via {tool}: {path} ({reason})")]
    PathConversion {
        tool: String,
        path: String,
        reason: String,
    },

    /// The resolved runner executable is not a regular file.
    #[error("Unity editor not found at '{0}'.")]
    ExecutableNotFound(String),

    /// The runner exited with a non-zero status.
    /// 运行器以非零状态退出。
    #[error("Unity test run failed with {}.", describe_exit(.code))]
    RunnerFailed { code: Option<i32> },

    /// The runner process could not be started at all.
    #[error("failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl ValidateError {
    /// Shorthand for [`ValidateError::Configuration`].
    pub fn configuration(message: impl Into<String>) -> Self {
        ValidateError::Configuration(message.into())
    }

    /// The runner's exit code, if this is a [`ValidateError::RunnerFailed`].
    pub fn runner_exit_code(&self) -> Option<i32> {
        match self {
            ValidateError::RunnerFailed { code } => *code,
            _ => None,
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by a signal)".to_string(),
    }
}
