//! # Executable Resolver / 可执行文件解析
//!
//! Finds the Unity editor binary from the configured sources and normalizes
//! it into the host namespace.

use std::path::Path;
use tracing::debug;

use crate::core::config::EditorPathSources;
use crate::core::error::{ValidateError, ValidateResult};
use crate::infra::command::PathConverter;
use crate::infra::paths::PathTranslator;

/// Resolves the runner executable.
///
/// The first non-empty source wins (`--unity`, then `UNITY_EDITOR_PATH`, then
/// the configuration file). The value is converted with `to_unix`, and unless
/// `simulate` is set it must name an existing regular file. Dry runs skip the
/// check so the command can be inspected without Unity installed.
///
/// 第一个非空来源优先。路径会经过 `to_unix` 转换，除非处于模拟模式，
/// 否则必须指向一个已存在的普通文件。
pub async fn resolve_executable<C: PathConverter>(
    sources: &EditorPathSources,
    translator: &PathTranslator<C>,
    simulate: bool,
) -> ValidateResult<String> {
    let raw = sources.first().ok_or_else(|| {
        ValidateError::configuration(
            "Unity path is required. Use --unity or set UNITY_EDITOR_PATH.",
        )
    })?;

    let executable = translator.to_unix(raw).await?;
    debug!(raw, executable = %executable, simulate, "resolved runner executable");

    if !simulate && !Path::new(&executable).is_file() {
        return Err(ValidateError::ExecutableNotFound(executable));
    }

    Ok(executable)
}
