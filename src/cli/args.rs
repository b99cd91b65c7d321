//! CLI argument definitions using clap
//!
//! Commands:
//! - docledger init --config <path>
//! - docledger start --config <path>
//! - docledger request --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// docledger - document indexing and pagination over a key-value ledger
#[derive(Parser, Debug)]
#[command(name = "docledger")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize the data directory and seed the document counter
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./docledger.json")]
        config: PathBuf,
    },

    /// Serve JSON requests from stdin until EOF
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./docledger.json")]
        config: PathBuf,
    },

    /// Execute a single JSON request from stdin and exit
    Request {
        /// Path to configuration file
        #[arg(long, default_value = "./docledger.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
