//! CLI module graph and command dispatch.

pub mod banner;
pub mod check;
pub mod command;
pub mod config;
pub mod output;
pub mod report;
pub mod run;

use std::path::Path;

use self::command::{CheckCommand, Cli, Commands, ConfigCommand};
use self::output::OutputConfig;
use crate::error::Result;
use crate::infrastructure::config::settings::{Config, DEFAULT_CONFIG_PATH};

/// Load the config named on the command line, or the default file if it
/// exists, or built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Config::load_or_default(DEFAULT_CONFIG_PATH),
    }
}

/// Apply global flags and run the selected command.
pub async fn execute(cli: Cli) -> Result<()> {
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Run(args) => run::execute(config_path, &args).await,
        Commands::Report(args) => report::execute(config_path, &args).await,
        Commands::Check(CheckCommand::Config) => check::execute_config(config_path),
        Commands::Check(CheckCommand::Telegram) => check::execute_telegram(config_path).await,
        Commands::Check(CheckCommand::Sources) => check::execute_sources(config_path).await,
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(&args.path, args.force),
    }
}
