//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sitrep_core::config::{self, Config};

mod commands;

#[derive(Parser)]
#[command(name = "sitrep")]
#[command(version = "0.1")]
#[command(about = "Terminal status page for your systems")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Load configuration from this file instead of the default path
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Show the placeholder welcome screen
    Welcome,

    /// Print the systems catalog without starting the TUI
    Systems {
        /// Only systems with this status (operational, degraded, down,
        /// maintenance, unknown)
        #[arg(long, value_name = "STATUS")]
        status: Option<String>,

        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(config::paths::config_path);
    let config = Config::load_from(&config_path).context("load config")?;

    // default to the dashboard
    let Some(command) = cli.command else {
        return commands::dashboard::run(&config);
    };

    match command {
        Commands::Welcome => commands::welcome::run(&config),
        Commands::Systems { status, json } => {
            commands::systems::run(&config, status.as_deref(), json)
        }
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path(&config_path);
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(&config_path),
        },
    }
}
