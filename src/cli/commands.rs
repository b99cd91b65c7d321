//! CLI command implementations
//!
//! `init` seeds the counter exactly once; `start` and `request` refuse to
//! run against an uninitialized directory. All commands share one boot
//! path: open the file ledger (which replays and validates the log) and
//! hand it to the api handler.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::api::ApiHandler;
use crate::index::IndexCounter;
use crate::ledger::FileLedger;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{read_request, read_requests, write_error, write_json, write_response};

/// Name of the ledger log inside the data directory
const LEDGER_FILE: &str = "ledger.dat";

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Data directory (required)
    pub data_dir: String,

    /// Initial counter value written by `init` (optional, default 0)
    #[serde(default)]
    pub counter_seed: u64,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("invalid config JSON: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.data_dir.trim().is_empty() {
            return Err(CliError::config_error("data_dir must not be empty"));
        }
        Ok(())
    }

    /// Path of the ledger log file
    pub fn ledger_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join(LEDGER_FILE)
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Start { config } => start(&config),
        Command::Request { config } => request(&config),
    }
}

/// Initialize the data directory and seed the document counter.
///
/// Refuses to run twice: re-seeding a live ledger would reset the counter
/// below existing document keys and break the no-gaps invariant.
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let ledger_path = config.ledger_path();

    if ledger_path.exists() {
        return Err(CliError::already_initialized());
    }

    let mut ledger = open_ledger(&ledger_path)?;
    IndexCounter::seed(&mut ledger, config.counter_seed)
        .map_err(|e| CliError::boot_failed(format!("failed to seed counter: {}", e)))?;

    write_response(json!({
        "initialized": true,
        "counter_seed": config.counter_seed,
    }))?;

    Ok(())
}

/// Serve JSON requests from stdin until EOF.
pub fn start(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let ledger_path = config.ledger_path();

    if !ledger_path.exists() {
        return Err(CliError::not_initialized());
    }

    let mut ledger = open_ledger(&ledger_path)?;
    let handler = ApiHandler::new();

    for request_result in read_requests() {
        match request_result {
            Ok(value) => {
                let response = handler.handle(&value.to_string(), &mut ledger);
                write_json(&response.to_json())?;
            }
            Err(e) => {
                write_error(e.code_str(), e.message())?;
                break;
            }
        }
    }

    Ok(())
}

/// Execute a single JSON request from stdin and exit.
pub fn request(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let ledger_path = config.ledger_path();

    if !ledger_path.exists() {
        return Err(CliError::not_initialized());
    }

    let mut ledger = open_ledger(&ledger_path)?;
    let handler = ApiHandler::new();

    let value = read_request()?;
    let response = handler.handle(&value.to_string(), &mut ledger);
    write_json(&response.to_json())?;

    Ok(())
}

/// Open the file ledger, replaying and validating the log.
///
/// Any failure here is fatal for the command: a ledger that cannot be
/// replayed cleanly is never served from.
fn open_ledger(ledger_path: &Path) -> CliResult<FileLedger> {
    FileLedger::open(ledger_path)
        .map_err(|e| CliError::boot_failed(format!("failed to open ledger: {}", e)))
}
