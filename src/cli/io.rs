//! JSON I/O handling for the CLI
//!
//! One JSON object per line on stdin, one JSON object per line on stdout.
//! Log output goes to stderr and never interleaves with responses.

use std::io::{self, BufRead, Write};

use serde_json::Value;

use super::errors::{CliError, CliResult};

/// Read a single JSON request from stdin
pub fn read_request() -> CliResult<Value> {
    let stdin = io::stdin();
    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;

    if line.trim().is_empty() {
        return Err(CliError::io_error("empty input"));
    }

    Ok(serde_json::from_str(&line)?)
}

/// Read JSON requests from stdin line-by-line (for the serving loop).
///
/// Blank lines are skipped rather than treated as errors so interactive
/// sessions can separate requests visually.
pub fn read_requests() -> impl Iterator<Item = CliResult<Value>> {
    let stdin = io::stdin();
    stdin
        .lock()
        .lines()
        .filter(|line| match line {
            Ok(l) => !l.trim().is_empty(),
            Err(_) => true,
        })
        .map(|line| {
            let line = line.map_err(CliError::from)?;
            serde_json::from_str(&line).map_err(CliError::from)
        })
}

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });
    write_json(&response.to_string())
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    });
    write_json(&response.to_string())
}

/// Write one JSON line to stdout
pub fn write_json(json_str: &str) -> CliResult<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", json_str)?;
    stdout.flush()?;
    Ok(())
}
