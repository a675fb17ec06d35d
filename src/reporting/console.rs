//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints operator-facing progress on stdout. The line formats are
//! stable so agents driving the tool can follow a run without reading the
//! result files; only the bracketed prefixes are coloured.
//!
//! 此模块在 stdout 上打印面向操作者的进度信息。行格式是稳定的，
//! 以便驱动此工具的代理无需读取结果文件即可跟踪运行；只有方括号前缀带颜色。

use colored::*;

use crate::core::models::RunRequest;

const VALIDATE_TAG: &str = "[validate]";
const DRY_RUN_TAG: &str = "[dry-run]";

/// Prints the platform, result file and log file of a run about to start.
///
/// # Output Format / 输出格式
/// ```text
/// [validate] platform=EditMode
/// [validate] results=Temp/AIValidation/EditMode-suite-20250101-120000.xml
/// [validate] log=Temp/AIValidation/logs/EditMode-suite-20250101-120000.log
/// ```
pub fn print_run_header(request: &RunRequest) {
    println!("{} platform={}", VALIDATE_TAG.cyan(), request.platform);
    println!("{} results={}", VALIDATE_TAG.cyan(), request.results_file.display());
    println!("{} log={}", VALIDATE_TAG.cyan(), request.log_file.display());
}

/// Prints the command a dry run would have launched.
pub fn print_dry_run(command_line: &str) {
    println!("{} {}", DRY_RUN_TAG.yellow(), command_line);
}

/// Prints the completion marker after every run succeeded.
pub fn print_done() {
    println!("{} {}", VALIDATE_TAG.cyan(), "done".green().bold());
}
