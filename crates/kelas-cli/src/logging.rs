use std::{fs::File, path::Path, sync::Mutex};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Where log events are written.
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    /// No subscriber is installed; used while the terminal UI owns the screen.
    Disabled,
}

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `default_level`.
pub fn init(default_level: &str, target: LogTarget<'_>) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_level)
            .with_context(|| format!("Invalid log level: {default_level}"))?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);
    let result = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Disabled => return Ok(()),
    };
    result.map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))
}
