//! # Command Execution Module / 命令执行模块
//!
//! This module owns every child process the orchestrator starts: the
//! short-lived path converter and the Unity runner itself. Both sit behind
//! traits so the layers above can be exercised with fakes.
//!
//! 此模块负责编排器启动的所有子进程：短生命周期的路径转换器以及 Unity 运行器本身。
//! 两者都位于 trait 之后，以便上层可以使用伪实现进行测试。

use std::future::Future;
use std::process::Stdio;
use tracing::debug;

use crate::core::error::{ValidateError, ValidateResult};
use crate::core::models::Invocation;

/// Default name of the WSL path converter.
pub const DEFAULT_PATH_CONVERTER: &str = "wslpath";

/// Which namespace a converted path should end up in.
/// 转换后的路径应处于哪个命名空间。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionDirection {
    /// Windows path to Unix path (`-u`).
    ToUnix,
    /// Unix path to Windows path (`-w`).
    ToWindows,
}

impl ConversionDirection {
    /// The converter flag for this direction.
    pub fn flag(&self) -> &'static str {
        match self {
            ConversionDirection::ToUnix => "-u",
            ConversionDirection::ToWindows => "-w",
        }
    }
}

/// Converts a path string between the two namespaces.
///
/// Implementations are expected to be deterministic: a failure means the host
/// is misconfigured, so callers never retry.
pub trait PathConverter {
    fn convert(
        &self,
        direction: ConversionDirection,
        path: &str,
    ) -> impl Future<Output = ValidateResult<String>>;
}

/// Runs `<tool> <-u|-w> <path>` and returns its trimmed standard output.
///
/// 运行 `<tool> <-u|-w> <path>` 并返回去除尾部空白的标准输出。
#[derive(Debug, Clone)]
pub struct WslPathConverter {
    tool: String,
}

impl WslPathConverter {
    pub fn new(tool: impl Into<String>) -> Self {
        Self { tool: tool.into() }
    }

    pub fn tool(&self) -> &str {
        &self.tool
    }
}

impl Default for WslPathConverter {
    fn default() -> Self {
        Self::new(DEFAULT_PATH_CONVERTER)
    }
}

impl PathConverter for WslPathConverter {
    async fn convert(&self, direction: ConversionDirection, path: &str) -> ValidateResult<String> {
        debug!(tool = %self.tool, flag = direction.flag(), path, "converting path");

        let output = tokio::process::Command::new(&self.tool)
            .arg(direction.flag())
            .arg(path)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| ValidateError::PathConversion {
                tool: self.tool.clone(),
                path: path.to_string(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = first_line(&stderr).unwrap_or_else(|| output.status.to_string());
            return Err(ValidateError::PathConversion {
                tool: self.tool.clone(),
                path: path.to_string(),
                reason,
            });
        }

        let converted = String::from_utf8_lossy(&output.stdout).trim_end().to_string();
        debug!(converted = %converted, "path converted");
        Ok(converted)
    }
}

/// The first non-blank line of a tool's diagnostic output, trimmed.
/// Error messages are printed on one line, so the rest is dropped.
fn first_line(output: &str) -> Option<String> {
    output
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

/// Launches a built runner invocation and reports its exit code.
///
/// `Ok(None)` means the child ended without an exit code (killed by a signal).
pub trait RunnerLauncher {
    fn launch(&self, invocation: &Invocation) -> impl Future<Output = ValidateResult<Option<i32>>>;
}

/// Spawns the runner as a child process that inherits the standard streams,
/// then waits for it. There is no timeout.
///
/// 以继承标准流的子进程方式启动运行器并等待其结束。没有超时。
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessLauncher;

impl RunnerLauncher for ProcessLauncher {
    async fn launch(&self, invocation: &Invocation) -> ValidateResult<Option<i32>> {
        debug!(executable = %invocation.executable, args = ?invocation.args, "launching runner");

        let status = tokio::process::Command::new(&invocation.executable)
            .args(&invocation.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| ValidateError::Launch {
                program: invocation.executable.clone(),
                source,
            })?;

        debug!(%status, "runner exited");
        Ok(status.code())
    }
}
