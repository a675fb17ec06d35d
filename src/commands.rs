//! # Commands Module / 命令模块
//!
//! One submodule per top-level command.
//!
//! - `run` - `single`, `suite` and `full` validation
//! - `init` - `Validation.toml` generation
//!
//! - `run` - `single`、`suite` 和 `full` 验证
//! - `init` - 生成 `Validation.toml`

pub mod init;
pub mod run;
