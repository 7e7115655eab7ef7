// src/logging.rs
// =============================================================================
// Sets up logging.
//
// Logs go to stderr: stdout carries the exported links, and piping them into
// another tool must not pick up log lines.
//
// RUST_LOG wins when set (e.g. RUST_LOG=link_harvest=trace). Otherwise the
// level follows the number of -v flags: warn, info, debug.
// =============================================================================

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

pub fn init(verbosity: u8) -> Result<()> {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))?;

    Ok(())
}
