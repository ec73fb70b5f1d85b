//! Cypress configuration CLI
//!
//! Resolves the configuration, environment or test files for the project in
//! the current directory and prints them as JSON.

mod cli;
mod error;

use std::io;

use clap::Parser;
use colored::Colorize;
use cypress_config::RawOptions;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let options = RawOptions::new(std::env::current_dir()?)
        .with_argv(cli.command.cypress_args().iter().cloned())
        .with_env(unicode_env_vars());

    let output = execute_command(&cli.command, &options)?;
    println!("{output}");
    Ok(())
}

/// Process environment, skipping variables that are not valid Unicode.
fn unicode_env_vars() -> impl Iterator<Item = (String, String)> {
    std::env::vars_os()
        .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)))
}

/// Logs go to stderr so stdout carries only JSON.
fn init_logging(verbose: bool) -> Result<()> {
    if verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::Logging(e.into()))?;
        tracing::debug!("Verbose mode enabled");
    } else {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new("warn"))
            .map_err(|e| CliError::Logging(e.into()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init()
            .map_err(CliError::Logging)?;
    }
    Ok(())
}

fn execute_command(cmd: &Commands, options: &RawOptions) -> Result<String> {
    let output = match cmd {
        Commands::Config(_) => {
            let configuration = cypress_config::get_configuration(options)?;
            serde_json::to_string_pretty(&configuration)?
        }
        Commands::Env(_) => {
            let environment = cypress_config::get_environment(options)?;
            serde_json::to_string_pretty(&environment)?
        }
        Commands::TestFiles(_) => {
            let configuration = cypress_config::get_configuration(options)?;
            let files = cypress_config::get_test_files(&configuration)?;
            serde_json::to_string_pretty(&files)?
        }
    };
    Ok(output)
}
