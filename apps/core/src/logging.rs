use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Installs the global `tracing` subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over `default_filter`. Calling this again
/// after a subscriber is installed is a no-op.
pub fn init(default_filter: &str) -> Result<(), String> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }

    let filter = build_filter(default_filter)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| format!("failed to install log subscriber: {e}"))?;

    let _ = INSTALLED.set(());
    Ok(())
}

fn build_filter(default_filter: &str) -> Result<EnvFilter, String> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_filter)
            .map_err(|e| format!("invalid log filter '{default_filter}': {e}")),
    }
}
