//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for the orchestrator:
//! host detection, path translation, child process execution, file system
//! operations, diagnostics, and i18n support.
//!
//! 此模块为编排器提供基础设施服务：
//! 宿主检测、路径转换、子进程执行、文件系统操作、诊断日志以及国际化支持。

pub mod command;
pub mod environment;
pub mod fs;
pub mod logging;
pub mod paths;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
