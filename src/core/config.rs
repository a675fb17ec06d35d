//! # Configuration Module / 配置模块
//!
//! Configuration comes from three places, merged once at startup into a
//! [`RunSettings`] that is threaded through the rest of the program:
//!
//! 1. command-line flags,
//! 2. the process environment (`UNITY_EDITOR_PATH`, WSL detection),
//! 3. an optional `Validation.toml` file.
//!
//! Flags win over the environment, which wins over the file, which wins over
//! the built-in defaults. Inner components never read the environment
//! themselves.
//!
//! 配置来自三个来源，在启动时合并为一个 [`RunSettings`]：命令行参数、进程环境、
//! 可选的 `Validation.toml` 文件。内部组件从不自行读取环境变量。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::models::{Platform, ValidationMode};
use crate::infra::command::DEFAULT_PATH_CONVERTER;
use crate::infra::environment::HostEnvironment;
use crate::infra::t;

/// Environment variable consulted when `--unity` is not given.
pub const EDITOR_PATH_ENV: &str = "UNITY_EDITOR_PATH";
/// Configuration file looked up in the current directory by default.
pub const DEFAULT_CONFIG_FILE: &str = "Validation.toml";
pub const DEFAULT_RESULTS_DIR: &str = "Temp/AIValidation";
pub const DEFAULT_LOGS_DIR: &str = "Temp/AIValidation/logs";

/// The on-disk configuration file. Every field is optional.
///
/// 磁盘上的配置文件。所有字段都是可选的。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ValidationConfig {
    /// UI language for human-facing messages (e.g. "en", "zh-CN").
    /// 面向用户消息的界面语言（例如 "en", "zh-CN"）。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Fallback Unity editor path, used after `--unity` and `UNITY_EDITOR_PATH`.
    /// 后备 Unity 编辑器路径，在 `--unity` 和 `UNITY_EDITOR_PATH` 之后使用。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_path: Option<String>,

    /// Default project directory. The current directory when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_path: Option<String>,

    #[serde(default = "default_results_dir")]
    pub results_dir: String,

    #[serde(default = "default_logs_dir")]
    pub logs_dir: String,

    /// Name or path of the `wslpath`-compatible converter.
    /// `wslpath` 兼容转换器的名称或路径。
    #[serde(default = "default_path_converter")]
    pub path_converter: String,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            language: None,
            editor_path: None,
            project_path: None,
            results_dir: default_results_dir(),
            logs_dir: default_logs_dir(),
            path_converter: default_path_converter(),
        }
    }
}

fn default_results_dir() -> String {
    DEFAULT_RESULTS_DIR.to_string()
}

fn default_logs_dir() -> String {
    DEFAULT_LOGS_DIR.to_string()
}

fn default_path_converter() -> String {
    DEFAULT_PATH_CONVERTER.to_string()
}

impl ValidationConfig {
    /// Parses a configuration document and expands `~` and `$VAR` in its
    /// path-like values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ValidationConfig = toml::from_str(content)?;
        config.expanded()
    }

    fn expanded(self) -> Result<Self> {
        Ok(Self {
            language: self.language,
            editor_path: self.editor_path.as_deref().map(expand).transpose()?,
            project_path: self.project_path.as_deref().map(expand).transpose()?,
            results_dir: expand(&self.results_dir)?,
            logs_dir: expand(&self.logs_dir)?,
            path_converter: expand(&self.path_converter)?,
        })
    }
}

fn expand(value: &str) -> Result<String> {
    shellexpand::full(value)
        .map(|expanded| expanded.into_owned())
        .with_context(|| format!("Failed to expand configuration value: {value}"))
}

/// Loads the configuration file.
///
/// With `explicit = None` the default file is read if it exists and silently
/// skipped otherwise. An explicitly requested file must exist.
///
/// # Arguments
/// * `explicit` - The path given with `--config`, if any
/// * `locale` - Language for error context messages
///
/// # Returns
/// The parsed configuration, or the defaults when no file applies
pub fn load_config(explicit: Option<&Path>, locale: &str) -> Result<ValidationConfig> {
    let (path, required) = match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    if !required && !path.exists() {
        debug!(path = %path.display(), "no configuration file, using defaults");
        return Ok(ValidationConfig::default());
    }

    let content = fs::read_to_string(&path).with_context(|| {
        t!("config_read_failed_path", locale = locale, path = path.display()).to_string()
    })?;
    let config = ValidationConfig::from_toml_str(&content).with_context(|| {
        t!("config_parse_failed", locale = locale, path = path.display()).to_string()
    })?;

    debug!(path = %path.display(), ?config, "configuration loaded");
    Ok(config)
}

/// Values taken from the process environment, captured exactly once.
///
/// 从进程环境中获取的值，只捕获一次。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    /// Value of `UNITY_EDITOR_PATH`, if set and non-empty.
    pub editor_path: Option<String>,
    pub host: HostEnvironment,
}

impl EnvSnapshot {
    pub fn capture() -> Self {
        Self {
            editor_path: env::var(EDITOR_PATH_ENV).ok().filter(|v| !v.is_empty()),
            host: HostEnvironment::detect(),
        }
    }
}

/// The raw values of a validation command as parsed from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub mode: ValidationMode,
    pub platform: Option<Platform>,
    pub filter: Option<String>,
    pub unity: Option<String>,
    pub project_path: Option<PathBuf>,
    pub results_dir: Option<PathBuf>,
    pub logs_dir: Option<PathBuf>,
    pub dry_run: bool,
}

impl RunOptions {
    pub fn new(mode: ValidationMode) -> Self {
        Self {
            mode,
            platform: None,
            filter: None,
            unity: None,
            project_path: None,
            results_dir: None,
            logs_dir: None,
            dry_run: false,
        }
    }
}

/// Candidate sources for the runner executable, highest priority first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorPathSources {
    /// `--unity`
    pub explicit: Option<String>,
    /// `UNITY_EDITOR_PATH`
    pub environment: Option<String>,
    /// `editor_path` in the configuration file
    pub config: Option<String>,
}

impl EditorPathSources {
    /// The first non-empty source, if any.
    pub fn first(&self) -> Option<&str> {
        [&self.explicit, &self.environment, &self.config]
            .into_iter()
            .filter_map(|source| source.as_deref())
            .find(|value| !value.is_empty())
    }
}

/// Fully merged settings for one validation command.
///
/// 一次验证命令的完整合并设置。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub mode: ValidationMode,
    pub platform: Option<Platform>,
    pub filter: Option<String>,
    pub editor: EditorPathSources,
    /// Project directory as given; made absolute later.
    pub project_path: PathBuf,
    pub results_dir: PathBuf,
    pub logs_dir: PathBuf,
    pub dry_run: bool,
    pub path_converter: String,
    pub host: HostEnvironment,
}

impl RunSettings {
    /// Merges command-line options, the environment snapshot and the file
    /// configuration. Flags > environment > file > defaults.
    pub fn merge(options: RunOptions, env: EnvSnapshot, config: ValidationConfig) -> Self {
        Self {
            mode: options.mode,
            platform: options.platform,
            filter: options.filter,
            editor: EditorPathSources {
                explicit: options.unity,
                environment: env.editor_path,
                config: config.editor_path,
            },
            project_path: options
                .project_path
                .or_else(|| config.project_path.map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(".")),
            results_dir: options
                .results_dir
                .unwrap_or_else(|| PathBuf::from(config.results_dir)),
            logs_dir: options
                .logs_dir
                .unwrap_or_else(|| PathBuf::from(config.logs_dir)),
            dry_run: options.dry_run,
            path_converter: config.path_converter,
            host: env.host,
        }
    }
}
