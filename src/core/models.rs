//! # Data Models Module / 数据模型模块
//!
//! This module defines the transient values that flow through one invocation
//! of the orchestrator: platforms, validation modes, run requests, outcomes,
//! the shared timestamp, and the fully built runner invocation.
//!
//! 此模块定义了编排器单次调用中流转的临时值：平台、验证模式、运行请求、
//! 运行结果、共享时间戳以及完整构建的运行器调用。

use chrono::{Local, NaiveDateTime};
use clap::ValueEnum;
use std::fmt;
use std::path::PathBuf;

/// The test platform passed to the runner via `-testPlatform`.
/// 通过 `-testPlatform` 传递给运行器的测试平台。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Platform {
    /// Editor-only tests / 仅编辑器测试
    #[value(name = "EditMode")]
    EditMode,
    /// Tests that enter play mode / 进入运行模式的测试
    #[value(name = "PlayMode")]
    PlayMode,
}

impl Platform {
    /// The exact spelling the runner expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::EditMode => "EditMode",
            Platform::PlayMode => "PlayMode",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three validation modes offered on the command line.
/// 命令行提供的三种验证模式。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// One filtered run on one platform.
    Single,
    /// One unfiltered run on one platform.
    Suite,
    /// EditMode suite followed by PlayMode suite.
    Full,
}

impl ValidationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationMode::Single => "single",
            ValidationMode::Suite => "suite",
            ValidationMode::Full => "full",
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The tag embedded in artifact names. `full` mode issues `Suite` runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunKind {
    Single,
    Suite,
}

impl RunKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunKind::Single => "single",
            RunKind::Suite => "suite",
        }
    }
}

/// A local-clock timestamp in `YYYYMMDD-HHMMSS` form, captured once per
/// top-level command and shared by every run it issues.
///
/// 本地时钟时间戳，格式为 `YYYYMMDD-HHMMSS`，每个顶层命令只捕获一次，
/// 并由其发出的所有运行共享。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTimestamp(String);

impl RunTimestamp {
    pub const FORMAT: &'static str = "%Y%m%d-%H%M%S";

    pub fn now() -> Self {
        Self(Local::now().format(Self::FORMAT).to_string())
    }

    pub fn from_datetime(datetime: NaiveDateTime) -> Self {
        Self(datetime.format(Self::FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RunTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything needed to launch the runner once. Built fresh per launch.
/// 启动一次运行器所需的全部信息。每次启动都会重新构建。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    /// Runner executable, in the host namespace / 运行器可执行文件（宿主命名空间）
    pub executable: String,
    /// Absolute project directory, in the host namespace / 项目绝对路径（宿主命名空间）
    pub project_path: String,
    pub platform: Platform,
    /// Result report destination / 结果报告路径
    pub results_file: PathBuf,
    /// Runner log destination / 运行器日志路径
    pub log_file: PathBuf,
    /// Optional `-testFilter` value / 可选的 `-testFilter` 值
    pub filter: Option<String>,
    /// Print the command instead of launching it / 仅打印命令而不执行
    pub dry_run: bool,
}

/// The result of one executor call. A non-zero exit never becomes an
/// outcome; it is reported as `ValidateError::RunnerFailed` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The runner exited with status 0.
    Passed,
    /// Dry-run: nothing was launched. Holds the printed command line.
    Simulated { command_line: String },
}

/// A fully built runner invocation: the executable followed by its arguments.
///
/// 完整构建的运行器调用：可执行文件及其后的参数。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub executable: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(executable: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            executable: executable.into(),
            args,
        }
    }

    /// Renders the invocation with every element individually double-quoted,
    /// e.g. `"/opt/Unity" "-batchmode" "-projectPath" "/work/game"`.
    ///
    /// 渲染调用，每个元素单独用双引号包裹。
    pub fn command_line(&self) -> String {
        std::iter::once(&self.executable)
            .chain(self.args.iter())
            .map(|part| format!("\"{}\"", part.replace('"', "\\\"")))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
