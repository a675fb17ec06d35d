//! # Host Environment Detection / 宿主环境检测
//!
//! Decides whether the process runs inside WSL, where the Unity editor is a
//! Windows program that expects Windows-style paths.
//!
//! 判断进程是否运行在 WSL 中。在 WSL 中，Unity 编辑器是一个 Windows 程序，
//! 需要 Windows 风格的路径。

use std::env;

/// Variables that only a WSL runtime exports.
pub const WSL_SIGNALS: [&str; 2] = ["WSL_DISTRO_NAME", "WSL_INTEROP"];

/// The path namespace the orchestrator is executing in.
/// 编排器所在的路径命名空间。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HostEnvironment {
    /// Plain host: paths are passed through untouched.
    #[default]
    Native,
    /// Inside WSL: paths for the runner must be converted with `wslpath`.
    Wsl,
}

impl HostEnvironment {
    /// Detects the host from the current process environment.
    pub fn detect() -> Self {
        Self::detect_with(|name| env::var_os(name).is_some())
    }

    /// Detects the host using `is_set` to test for each signal variable.
    /// Absence of every signal means `Native`.
    ///
    /// 使用 `is_set` 检测每个信号变量。所有信号都不存在时为 `Native`。
    pub fn detect_with<F>(is_set: F) -> Self
    where
        F: Fn(&str) -> bool,
    {
        if WSL_SIGNALS.iter().any(|name| is_set(name)) {
            HostEnvironment::Wsl
        } else {
            HostEnvironment::Native
        }
    }

    pub fn is_wsl(&self) -> bool {
        matches!(self, HostEnvironment::Wsl)
    }
}
