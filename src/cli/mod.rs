//! CLI module for docledger
//!
//! Provides the command-line surface:
//! - init: create the data directory and seed the document counter
//! - start: open the ledger and serve JSON requests from stdin
//! - request: execute a single JSON request and exit

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{init, request, run, run_command, start, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_request, read_requests, write_error, write_json, write_response};
