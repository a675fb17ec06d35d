//! # Run Execution Module / 运行执行模块
//!
//! This module launches the Unity runner for each request of a plan, one at a
//! time, and maps the child's exit status onto success or a fatal error.
//!
//! 此模块为计划中的每个请求依次启动 Unity 运行器，并将子进程的退出状态映射为成功或致命错误。

use tracing::info;

use crate::core::error::{ValidateError, ValidateResult};
use crate::core::invocation::build_args;
use crate::core::models::{Invocation, RunOutcome, RunRequest};
use crate::infra::command::{PathConverter, RunnerLauncher};
use crate::infra::paths::PathTranslator;
use crate::reporting::console::{print_dry_run, print_run_header};

/// Executes a single run request.
///
/// Builds the invocation, prints the run header, then either prints the
/// quoted command line (dry run) or launches the runner and waits for it.
/// A dry run never launches anything and never writes to disk.
///
/// # Arguments
/// * `request` - The run to perform
/// * `translator` - Converts paths for the runner's namespace
/// * `launcher` - Starts the runner process
///
/// # Returns
/// `RunOutcome::Passed` on exit code 0, `RunOutcome::Simulated` for a dry
/// run, or `ValidateError::RunnerFailed` for any other exit
pub async fn execute_run<C, L>(
    request: &RunRequest,
    translator: &PathTranslator<C>,
    launcher: &L,
) -> ValidateResult<RunOutcome>
where
    C: PathConverter,
    L: RunnerLauncher,
{
    let args = build_args(
        translator,
        &request.project_path,
        request.platform,
        &request.results_file,
        &request.log_file,
        request.filter.as_deref(),
    )
    .await?;
    let invocation = Invocation::new(request.executable.clone(), args);

    print_run_header(request);

    if request.dry_run {
        let command_line = invocation.command_line();
        print_dry_run(&command_line);
        return Ok(RunOutcome::Simulated { command_line });
    }

    match launcher.launch(&invocation).await? {
        Some(0) => {
            info!(platform = %request.platform, "runner finished successfully");
            Ok(RunOutcome::Passed)
        }
        code => Err(ValidateError::RunnerFailed { code }),
    }
}

/// Executes requests strictly in order and stops at the first failure, so a
/// later run never starts after an earlier one failed.
///
/// 严格按顺序执行请求，并在第一次失败时停止。
pub async fn execute_plan<C, L>(
    requests: &[RunRequest],
    translator: &PathTranslator<C>,
    launcher: &L,
) -> ValidateResult<Vec<RunOutcome>>
where
    C: PathConverter,
    L: RunnerLauncher,
{
    let mut outcomes = Vec::with_capacity(requests.len());
    for request in requests {
        outcomes.push(execute_run(request, translator, launcher).await?);
    }
    Ok(outcomes)
}
