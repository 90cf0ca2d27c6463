//! Command-line interface definitions.
//!
//! Defines the CLI structure using `clap`: the long-running notifier, a
//! one-shot report, diagnostic checks and config scaffolding.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::ReportKind;

/// Scheduled market indicator reports over Telegram
#[derive(Parser, Debug)]
#[command(name = "market-notifier")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file [default: config.toml, used only if present]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the notifier until interrupted
    Run(RunArgs),

    /// Compose a single report now and print it
    Report(ReportArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration and show which credentials are set.
    Config,
    /// Send a test message to the configured chat.
    Telegram,
    /// Query every configured provider once.
    Sources,
}

/// Subcommands for `config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write a documented configuration template.
    Init(ConfigInitArgs),
}

/// Arguments for `run`.
#[derive(Parser, Debug, Default)]
pub struct RunArgs {
    /// Log reports instead of sending them
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the startup banner
    #[arg(long)]
    pub no_banner: bool,

    /// Log level filter (overrides [logging] level)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

/// Arguments for `report`.
#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Which report to compose
    #[arg(value_enum, default_value_t = ReportKindArg::Open)]
    pub kind: ReportKindArg,

    /// Deliver the report to Telegram as well as printing it
    #[arg(long)]
    pub send: bool,
}

/// Arguments for `config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Where to write the template
    #[arg(default_value = "config.toml")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Report kinds selectable on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportKindArg {
    Startup,
    Open,
    Close,
}

impl From<ReportKindArg> for ReportKind {
    fn from(arg: ReportKindArg) -> Self {
        match arg {
            ReportKindArg::Startup => Self::Startup,
            ReportKindArg::Open => Self::Open,
            ReportKindArg::Close => Self::Close,
        }
    }
}
