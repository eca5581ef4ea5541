//! Logging configuration utilities
//!
//! Thin setup around `tracing-subscriber`. Output always goes to stderr so
//! that stdout carries only rendered views. `RUST_LOG`, when set, takes
//! precedence over the configured level.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    pub const fn to_tracing_level(self) -> Level {
        match self {
            Self::Trace => Level::TRACE,
            Self::Debug => Level::DEBUG,
            Self::Info => Level::INFO,
            Self::Warn => Level::WARN,
            Self::Error => Level::ERROR,
        }
    }
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        level.to_tracing_level()
    }
}

impl std::str::FromStr for LogLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(Error::Config(format!("invalid log level: {}", s))),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: LogLevel,
    /// Include the module path of each event
    pub target: bool,
    /// Colorize output
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            target: false,
            ansi: true,
        }
    }
}

impl LogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub const fn with_target(mut self, enabled: bool) -> Self {
        self.target = enabled;
        self
    }

    #[must_use]
    pub const fn with_ansi(mut self, enabled: bool) -> Self {
        self.ansi = enabled;
        self
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.level.to_string()))
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(config: &LogConfig) -> Result<()> {
    let subscriber = tracing_subscriber::registry().with(config.filter()).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(config.target)
            .with_ansi(config.ansi),
    );
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Logging(e.to_string()))
}

/// Install the global subscriber unless one already exists
///
/// Useful in tests, where several cases may race to initialize logging.
pub fn try_init(config: &LogConfig) {
    let _ = init(config);
}
