//! Logging bootstrap for the command-line shell.
//!
//! # Responsibility
//! - Start a stderr logger for the `log` facade used throughout the library.
//!
//! # Invariants
//! - Only the five standard levels are accepted.
//! - Initialization must not panic.

use flexi_logger::{Logger, LoggerHandle};
use log::info;

/// Level used when none is given on the command line.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Starts the stderr logger at `level`.
///
/// The returned handle must be kept alive for as long as logging is needed.
///
/// # Errors
/// - Returns an error when `level` is unsupported.
/// - Returns an error when the logger backend fails to start.
pub fn init_logging(level: &str) -> Result<LoggerHandle, String> {
    let normalized_level = normalize_level(level)?;

    let handle = Logger::try_with_str(normalized_level)
        .map_err(|err| format!("invalid log level `{normalized_level}`: {err}"))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    info!(
        "event=app_start module=logging status=ok level={} version={}",
        normalized_level,
        env!("CARGO_PKG_VERSION")
    );

    Ok(handle)
}

/// Maps user input to one of the supported level names.
pub fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}
