//! # Sweet Words CLI
//!
//! The `sweetwords` binary is a terminal front-end for the generator.
//!
//! ## Commands
//!
//! - `sweetwords generate --name <NAME> [--style] [--scene] [--keywords] [--language]`
//! - `sweetwords config show|set|clear` - Manage the saved provider settings
//! - `sweetwords models [--provider]` - List the model catalog
//!
//! Exit status is 0 on success, 1 when generation fails and 2 when the
//! configuration is missing or invalid.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use sweetwords_core::config::ConfigError;

mod commands;

use commands::{ConfigCommand, GenerateArgs};

/// Sweet Words - Generate love messages with hosted LLMs
#[derive(Parser)]
#[command(name = "sweetwords")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Directory holding the saved provider settings
    #[arg(long, global = true, env = "SWEETWORDS_CONFIG_DIR", value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Deployment defaults file (YAML)
    #[arg(long, global = true, env = "SWEETWORDS_DEPLOYMENT", value_name = "FILE")]
    deployment: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "SWEETWORDS_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one message
    #[command(name = "generate")]
    Generate(GenerateArgs),

    /// Provider settings management
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// List the models offered for each provider
    #[command(name = "models")]
    Models {
        /// Only list models for this provider
        #[arg(long)]
        provider: Option<String>,
    },
}

/// Paths shared by every command
pub struct AppContext {
    pub config_dir: PathBuf,
    pub deployment: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli.log_level) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            if e.downcast_ref::<ConfigError>().is_some() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let ctx = AppContext {
        config_dir: match cli.config_dir {
            Some(dir) => dir,
            None => default_config_dir()?,
        },
        deployment: cli.deployment,
    };

    match cli.command {
        Commands::Generate(args) => commands::generate::execute(args, &ctx).await,
        Commands::Config { command } => {
            commands::config::handle_command(command, &ctx)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Models { provider } => {
            commands::models::execute(provider.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// `$HOME/.config/sweetwords`
fn default_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Cannot determine home directory; pass --config-dir")?;
    Ok(home.join(".config").join("sweetwords"))
}

/// Initialize tracing subscriber for logging
fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("Failed to create log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "sweetwords",
            "--config-dir",
            "/tmp/sw",
            "generate",
            "--name",
            "Alex",
            "--keywords",
            "sun, sea",
            "--language",
            "en",
        ])
        .unwrap();

        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/sw")));
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.name, "Alex");
                assert_eq!(args.keywords.as_deref(), Some("sun, sea"));
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_generate_requires_name() {
        assert!(Cli::try_parse_from(["sweetwords", "generate"]).is_err());
    }
}
