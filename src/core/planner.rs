//! # Run Planning Module / 运行计划模块
//!
//! This module maps a validation mode onto the ordered list of runner
//! launches it requires, and names each launch's artifacts.
//!
//! 此模块将验证模式映射为所需的有序运行器启动列表，并为每次启动的产物命名。
//!
//! | mode     | runs                                   | tag      |
//! |----------|----------------------------------------|----------|
//! | `single` | one, on `--platform`, with `--filter`  | `single` |
//! | `suite`  | one, on `--platform`, no filter        | `suite`  |
//! | `full`   | `EditMode` then `PlayMode`, no filter  | `suite`  |

use std::path::{Path, PathBuf};

use crate::core::error::{ValidateError, ValidateResult};
use crate::core::models::{Platform, RunKind, RunRequest, RunTimestamp, ValidationMode};

/// One launch in a plan, before paths and timestamp are attached.
/// 计划中的一次启动（尚未附加路径和时间戳）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRun {
    pub platform: Platform,
    pub kind: RunKind,
    pub filter: Option<String>,
}

impl PlannedRun {
    /// Artifact stem shared by the result and log file:
    /// `<platform>-<kind>-<timestamp>`.
    pub fn artifact_stem(&self, timestamp: &RunTimestamp) -> String {
        format!("{}-{}-{}", self.platform, self.kind.as_str(), timestamp)
    }
}

/// Where the runs of a plan write to and what they launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    pub executable: String,
    pub project_path: String,
    pub results_dir: PathBuf,
    pub logs_dir: PathBuf,
    pub dry_run: bool,
}

/// The validated, ordered list of runs for one command.
/// 一个命令经过验证的有序运行列表。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    pub mode: ValidationMode,
    pub runs: Vec<PlannedRun>,
}

impl RunPlan {
    /// Validates the inputs required by `mode` and lays out its runs.
    ///
    /// `single` and `suite` need a platform; `single` also needs a non-empty
    /// filter. `full` ignores both. This never touches the filesystem or
    /// spawns anything, so it can run before executable resolution.
    ///
    /// # Arguments
    /// * `mode` - The requested validation mode
    /// * `platform` - `--platform`, if given
    /// * `filter` - `--filter`, if given
    ///
    /// # Returns
    /// The plan, or a `Configuration` error naming the missing flag
    pub fn for_mode(
        mode: ValidationMode,
        platform: Option<Platform>,
        filter: Option<&str>,
    ) -> ValidateResult<Self> {
        let runs = match mode {
            ValidationMode::Single => {
                let platform = require_platform(mode, platform)?;
                let filter = filter
                    .filter(|f| !f.is_empty())
                    .ok_or_else(|| ValidateError::configuration("single requires --filter."))?;
                vec![PlannedRun {
                    platform,
                    kind: RunKind::Single,
                    filter: Some(filter.to_string()),
                }]
            }
            ValidationMode::Suite => vec![PlannedRun {
                platform: require_platform(mode, platform)?,
                kind: RunKind::Suite,
                filter: None,
            }],
            ValidationMode::Full => [Platform::EditMode, Platform::PlayMode]
                .into_iter()
                .map(|platform| PlannedRun {
                    platform,
                    kind: RunKind::Suite,
                    filter: None,
                })
                .collect(),
        };

        Ok(Self { mode, runs })
    }

    /// Expands the plan into concrete requests. Every request shares the same
    /// timestamp, so the artifacts of one command are grouped but distinct.
    ///
    /// 将计划展开为具体请求。所有请求共享同一个时间戳。
    pub fn requests(&self, context: &RunContext, timestamp: &RunTimestamp) -> Vec<RunRequest> {
        self.runs
            .iter()
            .map(|run| {
                let stem = run.artifact_stem(timestamp);
                RunRequest {
                    executable: context.executable.clone(),
                    project_path: context.project_path.clone(),
                    platform: run.platform,
                    results_file: artifact_path(&context.results_dir, &stem, "xml"),
                    log_file: artifact_path(&context.logs_dir, &stem, "log"),
                    filter: run.filter.clone(),
                    dry_run: context.dry_run,
                }
            })
            .collect()
    }
}

fn require_platform(mode: ValidationMode, platform: Option<Platform>) -> ValidateResult<Platform> {
    platform.ok_or_else(|| ValidateError::configuration(format!("{} requires --platform.", mode)))
}

fn artifact_path(dir: &Path, stem: &str, extension: &str) -> PathBuf {
    dir.join(format!("{stem}.{extension}"))
}
