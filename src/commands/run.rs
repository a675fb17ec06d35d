//! # Run Command Module / 运行命令模块
//!
//! This module implements the `single`, `suite` and `full` commands: it
//! validates the requested mode, resolves the Unity editor, prepares the
//! output directories and drives the planned runs in order.
//!
//! 此模块实现 `single`、`suite` 和 `full` 命令：验证所请求的模式、解析 Unity 编辑器、
//! 准备输出目录并按顺序执行计划的运行。

use anyhow::Result;
use std::path::Path;
use tracing::debug;

use crate::{
    core::{
        config::RunSettings,
        execution::execute_plan,
        models::{RunOutcome, RunTimestamp},
        planner::{RunContext, RunPlan},
        resolver::resolve_executable,
    },
    infra::{
        command::{PathConverter, ProcessLauncher, RunnerLauncher, WslPathConverter},
        fs::{absolute_path, prepare_output_dirs},
        paths::PathTranslator,
    },
    reporting::console::print_done,
};

/// Executes a validation command with the real `wslpath` converter and
/// process launcher.
///
/// # Arguments
/// * `settings` - Merged settings for this command
///
/// # Returns
/// A Result indicating success or the first fatal error
pub async fn execute(settings: RunSettings) -> Result<()> {
    let translator = PathTranslator::new(
        settings.host,
        WslPathConverter::new(settings.path_converter.clone()),
    );
    execute_with(&settings, &translator, &ProcessLauncher, RunTimestamp::now()).await?;
    Ok(())
}

/// Executes a validation command with injected collaborators.
///
/// The steps run in a fixed order: mode validation first (nothing is spawned
/// if a flag is missing), then executable resolution, project path
/// normalization, output directory creation, and finally the runs
/// themselves. The first failing run aborts the rest.
///
/// # Arguments
/// * `settings` - Merged settings for this command
/// * `translator` - Path translator for the detected host
/// * `launcher` - Starts the runner process
/// * `timestamp` - Shared by every artifact this command produces
///
/// # Returns
/// The outcome of every run, in order
pub async fn execute_with<C, L>(
    settings: &RunSettings,
    translator: &PathTranslator<C>,
    launcher: &L,
    timestamp: RunTimestamp,
) -> Result<Vec<RunOutcome>>
where
    C: PathConverter,
    L: RunnerLauncher,
{
    let plan = RunPlan::for_mode(settings.mode, settings.platform, settings.filter.as_deref())?;
    let executable = resolve_executable(&settings.editor, translator, settings.dry_run).await?;

    let project_path = translator
        .to_unix(&settings.project_path.to_string_lossy())
        .await?;
    let project_path = absolute_path(Path::new(&project_path))?;

    prepare_output_dirs(&settings.results_dir, &settings.logs_dir)?;

    let context = RunContext {
        executable,
        project_path: project_path.to_string_lossy().into_owned(),
        results_dir: settings.results_dir.clone(),
        logs_dir: settings.logs_dir.clone(),
        dry_run: settings.dry_run,
    };
    let requests = plan.requests(&context, &timestamp);
    debug!(mode = %plan.mode, runs = requests.len(), %timestamp, "starting validation");

    let outcomes = execute_plan(&requests, translator, launcher).await?;

    print_done();
    Ok(outcomes)
}
