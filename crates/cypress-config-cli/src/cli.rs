//! CLI argument parsing using clap derive

use clap::{Args, Parser, Subcommand};

/// Resolve Cypress configuration the way the Cypress CLI would
#[derive(Parser, Debug)]
#[command(name = "cypress-config")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the resolved configuration as JSON
    ///
    /// Examples:
    ///   cypress-config config
    ///   cypress-config config -- --config integrationFolder=features
    ///   cypress-config config -- --project e2e -C cypress.ci.json
    Config(CypressArgs),

    /// Print the resolved environment as JSON
    Env(CypressArgs),

    /// Print the test files selected by the resolved configuration
    TestFiles(CypressArgs),
}

impl Commands {
    pub fn cypress_args(&self) -> &[String] {
        match self {
            Self::Config(args) | Self::Env(args) | Self::TestFiles(args) => &args.argv,
        }
    }
}

/// Arguments forwarded verbatim to the resolver
#[derive(Args, Debug, Clone, PartialEq, Eq, Default)]
pub struct CypressArgs {
    /// Cypress command-line arguments, given after `--`
    #[arg(last = true, value_name = "CYPRESS_ARGS")]
    pub argv: Vec<String>,
}
