//! Structured logging for the obfuscator binary.
//!
//! Library code only emits `tracing` events; the binary installs a subscriber
//! once at startup. Logs go to stderr so stdout carries nothing but the
//! obfuscated layout.
//!
//! The `RUST_LOG` environment variable overrides the default level, e.g.
//! `RUST_LOG=divmod_obfuscator=debug` shows the character set and run
//! sequence of each input.

use std::io::IsTerminal;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, EnvFilter};

/// Tracks whether a global subscriber has been installed
static LOGGING_INITIALIZED: OnceLock<()> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("logging already initialized")]
    AlreadyInitialized,

    #[error("invalid log filter: {0}")]
    InvalidFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("failed to set global subscriber: {0}")]
    SetSubscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Builds the filter: `RUST_LOG` when set, `default_level` otherwise.
fn build_filter(default_level: &str) -> Result<EnvFilter, LogError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(default_level)?),
    }
}

/// Installs the global stderr subscriber.
///
/// Returns [`LogError::AlreadyInitialized`] on any call after the first.
pub fn init_logging(default_level: &str) -> Result<(), LogError> {
    if LOGGING_INITIALIZED.set(()).is_err() {
        return Err(LogError::AlreadyInitialized);
    }

    let subscriber = fmt()
        .with_env_filter(build_filter(default_level)?)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
