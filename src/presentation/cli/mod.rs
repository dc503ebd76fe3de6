pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use std::process::exit;
use std::sync::Arc;

use crate::common::style::{style_for_stdout, Style};
use crate::domain::entities::config::Config;
use crate::infrastructure::filesystem::config_store::ConfigStore;
use crate::infrastructure::process::{CommandRunner, SystemCommandRunner};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("FANOUT_GIT_HASH"),
    " ",
    env!("FANOUT_BUILD_DATE"),
    ")\ntarget: ",
    env!("FANOUT_BUILD_TARGET")
);

/// Output format options for status command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output (default)
    Text,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}

/// fanout - find git repositories and broadcast commands across them
#[derive(Parser)]
#[command(name = "fanout")]
#[command(about = "Find git repositories under a profile root and broadcast commands across them")]
#[command(version, long_version = LONG_VERSION)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Config file (defaults to ~/.fanout.json)
    #[arg(short, long, global = true, env = "FANOUT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show branch and cleanliness of every repository in a profile
    Status {
        /// Profile name from the config file
        profile: String,

        /// Output format (text, json, yaml)
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Run a command in every repository of a profile
    Broadcast {
        /// Profile name from the config file
        profile: String,

        /// Command to run; words are split on whitespace, quotes are not interpreted
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CliApp {
    pub fn new() -> Self {
        Self { cli: Cli::parse() }
    }

    pub fn from_cli(cli: Cli) -> Self {
        Self { cli }
    }

    pub fn verbose(&self) -> bool {
        self.cli.verbose
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let style: Arc<dyn Style> = Arc::from(style_for_stdout(!self.cli.no_color));

        match self.handle_command(style).await {
            Ok(_) => Ok(()),
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                exit(1);
            }
        }
    }

    async fn handle_command(&self, style: Arc<dyn Style>) -> anyhow::Result<()> {
        let config = self.load_config().await?;
        let runner: Arc<dyn CommandRunner> = Arc::new(SystemCommandRunner::new());

        match &self.cli.command {
            Commands::Status { profile, output } => {
                use crate::presentation::cli::commands::status::StatusCommand;

                StatusCommand::new(profile.clone(), *output, self.cli.verbose)
                    .execute(&config, runner, style)
                    .await
            }
            Commands::Broadcast { profile, command } => {
                use crate::presentation::cli::commands::broadcast::BroadcastCommand;

                BroadcastCommand::new(profile.clone(), command.join(" "), self.cli.verbose)
                    .execute(&config, runner, style)
                    .await
            }
        }
    }

    async fn load_config(&self) -> anyhow::Result<Config> {
        let store = ConfigStore::new();
        let config = store.load(self.cli.config.as_deref()).await?;
        Ok(config)
    }
}
