//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides the few filesystem touches the orchestrator makes:
//! preparing the output directories and resolving the project directory.
//!
//! 此模块提供编排器涉及的少量文件系统操作：准备输出目录以及解析项目目录。

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Creates the results and logs directories if they are missing.
/// Existing directories are left alone and never cleaned.
///
/// # Arguments
/// * `results_dir` - Directory for `.xml` result reports
/// * `logs_dir` - Directory for `.log` runner logs
///
/// # Returns
/// A `Result` indicating success or failure
pub fn prepare_output_dirs(results_dir: &Path, logs_dir: &Path) -> Result<()> {
    for dir in [results_dir, logs_dir] {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    }
    Ok(())
}

/// Gets the absolute path from a potentially relative path.
///
/// Existing paths are canonicalized; a path that does not exist yet is made
/// absolute against the current directory instead of failing, so a dry run
/// can be inspected before the project is checked out.
///
/// # Arguments
/// * `path` - Path to resolve
///
/// # Returns
/// Absolute path, or an error if the current directory cannot be read
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    match fs::canonicalize(path) {
        Ok(canonical) => Ok(canonical),
        Err(_) => std::path::absolute(path)
            .with_context(|| format!("Failed to resolve path: {}", path.display())),
    }
}
