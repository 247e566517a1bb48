//! Logging setup.
//!
//! Installs a `tracing` subscriber that writes to stderr so rendered output
//! on stdout stays clean. `RUST_LOG` takes precedence over the verbosity
//! passed in from the command line.

use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Errors raised while installing the subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("logger already initialized")]
    AlreadyInitialized,

    #[error("failed to initialize logger: {reason}")]
    InitializationFailed { reason: String },
}

/// Log verbosity selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Error,
    #[default]
    Warning,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Maps `-q` and repeated `-v` flags to a level.
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return LogLevel::Error;
        }
        match verbose {
            0 => LogLevel::Warning,
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }

    fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warning => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Installs the global subscriber.
pub fn init(level: LogLevel) -> Result<(), LoggerError> {
    if INITIALIZED.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("deptrace={}", level.as_filter())));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| LoggerError::InitializationFailed {
            reason: e.to_string(),
        })?;

    INITIALIZED
        .set(())
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    tracing::debug!(level = level.as_filter(), "logger initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_flags() {
        assert_eq!(LogLevel::from_flags(0, false), LogLevel::Warning);
        assert_eq!(LogLevel::from_flags(1, false), LogLevel::Info);
        assert_eq!(LogLevel::from_flags(2, false), LogLevel::Debug);
        assert_eq!(LogLevel::from_flags(7, false), LogLevel::Trace);
        assert_eq!(LogLevel::from_flags(3, true), LogLevel::Error);
    }

    #[test]
    fn test_level_filters() {
        assert_eq!(LogLevel::Warning.as_filter(), "warn");
        assert_eq!(LogLevel::Trace.as_filter(), "trace");
    }
}
