//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the orchestrator:
//! data models, configuration, executable resolution, invocation building,
//! run planning and run execution.
//!
//! 此模块包含编排器的核心功能：
//! 数据模型、配置、可执行文件解析、调用构建、运行计划和运行执行。

pub mod config;
pub mod error;
pub mod execution;
pub mod invocation;
pub mod models;
pub mod planner;
pub mod resolver;

// Re-exports
pub use error::{ValidateError, ValidateResult};
pub use execution::{execute_plan, execute_run};
pub use models::{Platform, RunOutcome, RunRequest, ValidationMode};
