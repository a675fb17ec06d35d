//! # Configuration Initialization Module / 配置初始化模块
//!
//! This module writes a `Validation.toml` for the current project, either
//! through a short interactive wizard or, with `--non-interactive`, straight
//! from the defaults.
//!
//! 此模块为当前项目生成 `Validation.toml`，可以通过简短的交互式向导，
//! 或者使用 `--non-interactive` 直接从默认值生成。
//!
//! ## Features / 功能特性
//!
//! - **Editor Detection**: pre-fills the editor path from `UNITY_EDITOR_PATH`
//! - **Overwrite Protection**: asks before replacing an existing file
//!
//! - **编辑器检测**: 从 `UNITY_EDITOR_PATH` 预填编辑器路径
//! - **覆盖保护**: 替换现有文件前进行确认

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use std::fs;
use std::path::Path;

use crate::core::config::{EnvSnapshot, ValidationConfig};
use crate::infra::t;

/// Runs the wizard (or its non-interactive shortcut) and writes `config_path`.
///
/// 运行向导（或其非交互式快捷方式）并写入 `config_path`。
pub fn run_init_wizard(
    config_path: &Path,
    env: &EnvSnapshot,
    language: &str,
    non_interactive: bool,
) -> Result<()> {
    let defaults = default_config(env, language);

    if non_interactive {
        return write_config(config_path, &defaults, language);
    }

    let theme = ColorfulTheme::default();
    println!("\n{}", t!("init_wizard_welcome", locale = language).cyan().bold());
    println!("{}", t!("init_wizard_description", locale = language));

    if config_path.exists() {
        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(t!(
                "init_overwrite_prompt",
                locale = language,
                path = config_path.display()
            ))
            .default(false)
            .interact()
            .context(t!("init_user_confirmation_failed", locale = language).to_string())?;
        if !confirmation {
            println!("{}", t!("init_aborted", locale = language));
            return Ok(());
        }
    }

    if let Some(editor) = &defaults.editor_path {
        println!(
            "{}",
            t!("init_detected_editor", locale = language, path = editor.green())
        );
    }

    let editor_path: String = Input::with_theme(&theme)
        .with_prompt(t!("init_editor_path_prompt", locale = language))
        .default(defaults.editor_path.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()
        .context(t!("init_user_confirmation_failed", locale = language).to_string())?;

    let results_dir: String = Input::with_theme(&theme)
        .with_prompt(t!("init_results_dir_prompt", locale = language))
        .default(defaults.results_dir.clone())
        .interact_text()
        .context(t!("init_user_confirmation_failed", locale = language).to_string())?;

    let logs_dir: String = Input::with_theme(&theme)
        .with_prompt(t!("init_logs_dir_prompt", locale = language))
        .default(defaults.logs_dir.clone())
        .interact_text()
        .context(t!("init_user_confirmation_failed", locale = language).to_string())?;

    let config = ValidationConfig {
        editor_path: Some(editor_path).filter(|p| !p.trim().is_empty()),
        results_dir,
        logs_dir,
        ..defaults
    };

    write_config(config_path, &config, language)
}

/// The configuration `init --non-interactive` writes: built-in defaults, the
/// chosen language, and the editor path from `UNITY_EDITOR_PATH` when set.
pub fn default_config(env: &EnvSnapshot, language: &str) -> ValidationConfig {
    ValidationConfig {
        language: Some(language.to_string()),
        editor_path: env.editor_path.clone(),
        ..ValidationConfig::default()
    }
}

/// Serializes `config` to `path`, replacing any existing file.
pub fn write_config(path: &Path, config: &ValidationConfig, language: &str) -> Result<()> {
    let toml_string = toml::to_string_pretty(config)
        .context(t!("init_serialize_failed", locale = language).to_string())?;

    fs::write(path, toml_string).with_context(|| {
        t!("init_write_failed", locale = language, path = path.display()).to_string()
    })?;

    println!(
        "\n{} {}",
        "✔".green(),
        t!("init_success_created", locale = language, path = path.display()).bold()
    );
    println!("{}", t!("init_usage_hint", locale = language));

    Ok(())
}
