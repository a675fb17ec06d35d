//! # Reporting Module / 报告模块
//!
//! This module handles everything the orchestrator prints for operators:
//! per-run progress, dry-run command lines, and the completion marker.
//!
//! 此模块处理编排器为操作者打印的所有内容：每次运行的进度、模拟运行的命令行以及完成标记。

pub mod console;

// Re-export common reporting functions
pub use console::{print_done, print_dry_run, print_run_header};
