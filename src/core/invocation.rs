//! # Invocation Builder / 调用构建器
//!
//! Assembles the argument list for one Unity batch-mode test run.
//!
//! The order is fixed: the runner only honours `-quit` reliably when it
//! trails the other toggles, and `-testFilter` must only appear when a filter
//! was actually requested.
//!
//! 参数顺序是固定的：`-quit` 必须位于其他开关之后，
//! 并且只有在确实请求了过滤器时才会出现 `-testFilter`。

use std::path::Path;

use crate::core::error::ValidateResult;
use crate::core::models::Platform;
use crate::infra::command::PathConverter;
use crate::infra::paths::PathTranslator;

pub const FLAG_BATCH_MODE: &str = "-batchmode";
pub const FLAG_PROJECT_PATH: &str = "-projectPath";
pub const FLAG_RUN_TESTS: &str = "-runTests";
pub const FLAG_TEST_PLATFORM: &str = "-testPlatform";
pub const FLAG_TEST_RESULTS: &str = "-testResults";
pub const FLAG_LOG_FILE: &str = "-logFile";
pub const FLAG_QUIT: &str = "-quit";
pub const FLAG_TEST_FILTER: &str = "-testFilter";

/// Builds the runner arguments (without the executable itself).
///
/// `project_path`, `results_file` and `log_file` are converted to the
/// Windows namespace first, which is a no-op on a native host. An empty
/// filter is treated like no filter.
///
/// # Arguments
/// * `translator` - Namespace-aware path translator
/// * `project_path` - Absolute Unity project directory
/// * `platform` - `EditMode` or `PlayMode`
/// * `results_file` - Destination of the XML result report
/// * `log_file` - Destination of the runner log
/// * `filter` - Optional test name filter
///
/// # Returns
/// The ordered argument list, or the first path conversion error
pub async fn build_args<C: PathConverter>(
    translator: &PathTranslator<C>,
    project_path: &str,
    platform: Platform,
    results_file: &Path,
    log_file: &Path,
    filter: Option<&str>,
) -> ValidateResult<Vec<String>> {
    let project_path = translator.to_windows(project_path).await?;
    let results_file = translator
        .to_windows(&results_file.to_string_lossy())
        .await?;
    let log_file = translator.to_windows(&log_file.to_string_lossy()).await?;

    let mut args: Vec<String> = vec![
        FLAG_BATCH_MODE.into(),
        FLAG_PROJECT_PATH.into(),
        project_path,
        FLAG_RUN_TESTS.into(),
        FLAG_TEST_PLATFORM.into(),
        platform.as_str().into(),
        FLAG_TEST_RESULTS.into(),
        results_file,
        FLAG_LOG_FILE.into(),
        log_file,
        FLAG_QUIT.into(),
    ];

    if let Some(filter) = filter.filter(|f| !f.is_empty()) {
        args.push(FLAG_TEST_FILTER.into());
        args.push(filter.to_string());
    }

    Ok(args)
}
