// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueEnum};
use std::{env, ffi::OsString, path::PathBuf};

use crate::{
    commands,
    core::{
        config::{self, DEFAULT_CONFIG_FILE, EnvSnapshot, RunOptions, RunSettings},
        models::{Platform, ValidationMode},
    },
    infra::{logging, t},
    resolve_locale,
};

/// The positional command selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CommandName {
    Single,
    Suite,
    Full,
    Init,
}

/// What the user asked for, after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Validate(RunOptions),
    Init { non_interactive: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub command: CliCommand,
    /// `--config`, if given.
    pub config: Option<PathBuf>,
    /// `--lang`, if given.
    pub lang: Option<String>,
}

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language(args: &[OsString]) -> Option<String> {
    let pos = args.iter().position(|arg| arg == "--lang")?;
    args.get(pos + 1).map(|lang| lang.to_string_lossy().into_owned())
}

fn system_language() -> String {
    sys_locale::get_locale().unwrap_or_else(|| "en".to_string())
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("unity-validate")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .arg(
            Arg::new("command")
                .help(t!("arg_command", locale = locale).to_string())
                .value_name("COMMAND")
                .required(true)
                .value_parser(clap::value_parser!(CommandName))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("platform")
                .long("platform")
                .help(t!("arg_platform", locale = locale).to_string())
                .value_name("PLATFORM")
                .value_parser(clap::value_parser!(Platform))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("filter")
                .long("filter")
                .help(t!("arg_filter", locale = locale).to_string())
                .value_name("FILTER")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("unity")
                .long("unity")
                .help(t!("arg_unity", locale = locale).to_string())
                .value_name("UNITY")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("project-path")
                .long("project-path")
                .help(t!("arg_project_path", locale = locale).to_string())
                .value_name("PROJECT_PATH")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("results-dir")
                .long("results-dir")
                .help(t!("arg_results_dir", locale = locale, value = config::DEFAULT_RESULTS_DIR).to_string())
                .value_name("RESULTS_DIR")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("logs-dir")
                .long("logs-dir")
                .help(t!("arg_logs_dir", locale = locale, value = config::DEFAULT_LOGS_DIR).to_string())
                .value_name("LOGS_DIR")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help(t!("arg_dry_run", locale = locale).to_string())
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(t!("arg_config", locale = locale, value = DEFAULT_CONFIG_FILE).to_string())
                .value_name("CONFIG")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("non-interactive")
                .long("non-interactive")
                .help(t!("arg_non_interactive", locale = locale).to_string())
                .action(ArgAction::SetTrue),
        )
}

fn from_matches(matches: &ArgMatches) -> CliArgs {
    let name = matches
        .get_one::<CommandName>("command")
        .copied()
        .unwrap_or(CommandName::Full); // Required by clap

    let command = match name {
        CommandName::Init => CliCommand::Init {
            non_interactive: matches.get_flag("non-interactive"),
        },
        CommandName::Single | CommandName::Suite | CommandName::Full => {
            let mode = match name {
                CommandName::Single => ValidationMode::Single,
                CommandName::Suite => ValidationMode::Suite,
                _ => ValidationMode::Full,
            };
            CliCommand::Validate(RunOptions {
                mode,
                platform: matches.get_one::<Platform>("platform").copied(),
                filter: matches.get_one::<String>("filter").cloned(),
                unity: matches.get_one::<String>("unity").cloned(),
                project_path: matches.get_one::<PathBuf>("project-path").cloned(),
                results_dir: matches.get_one::<PathBuf>("results-dir").cloned(),
                logs_dir: matches.get_one::<PathBuf>("logs-dir").cloned(),
                dry_run: matches.get_flag("dry-run"),
            })
        }
    };

    CliArgs {
        command,
        config: matches.get_one::<PathBuf>("config").cloned(),
        lang: matches.get_one::<String>("lang").cloned(),
    }
}

/// Parses an explicit argument list. Used by tests and by [`parse_args`].
pub fn try_parse_from<I, T>(args: I) -> Result<CliArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let language = resolve_locale(&pre_parse_language(&args).unwrap_or_else(system_language));
    let matches = build_cli(&language).try_get_matches_from(args)?;
    Ok(from_matches(&matches))
}

/// Parses the process arguments, printing help or usage errors and exiting
/// the way clap does.
pub fn parse_args() -> CliArgs {
    try_parse_from(env::args_os()).unwrap_or_else(|e| e.exit())
}

/// Runs the parsed command to completion.
pub async fn process_command(args: CliArgs) -> Result<()> {
    logging::init();
    let env = EnvSnapshot::capture();

    match args.command {
        CliCommand::Validate(options) => {
            let preliminary = resolve_locale(&args.lang.clone().unwrap_or_else(system_language));
            let file_config = config::load_config(args.config.as_deref(), &preliminary)?;
            let language = args
                .lang
                .clone()
                .or_else(|| file_config.language.clone())
                .map(|lang| resolve_locale(&lang))
                .unwrap_or(preliminary);
            rust_i18n::set_locale(&language);

            let settings = RunSettings::merge(options, env, file_config);
            commands::run::execute(settings).await
        }
        CliCommand::Init { non_interactive } => {
            let auto_detected = args.lang.is_none();
            let language = resolve_locale(&args.lang.unwrap_or_else(system_language));
            rust_i18n::set_locale(&language);

            // Show language detection message if it was auto-detected
            if !non_interactive && auto_detected {
                println!(
                    "🌐 {}",
                    t!("system_language_detected", locale = &language, lang = &language)
                );
            }
            let path = args
                .config
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
            commands::init::run_init_wizard(&path, &env, &language, non_interactive)
        }
    }
}
