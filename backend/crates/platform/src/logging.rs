//! Logging helpers
//!
//! Process-wide `tracing` subscriber setup (configured once) and named
//! [`Logger`] handles for modules that want a logger object rather than the
//! bare macros.

use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static LOGGING: OnceLock<()> = OnceLock::new();

/// Logger configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is not set
    pub default_filter: String,
    /// Include the event target in each line
    pub with_target: bool,
    /// Colorize output
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_filter: "info".to_string(),
            with_target: true,
            ansi: true,
        }
    }
}

impl LogConfig {
    /// Plain output for log files and CI
    pub fn plain() -> Self {
        Self {
            ansi: false,
            ..Self::default()
        }
    }
}

/// Install the global subscriber
///
/// Only the first call does anything. If the host application already
/// installed its own global subscriber, that one is left in place.
pub fn init_logging(config: &LogConfig) {
    LOGGING.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

        let installed = tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(config.with_target)
                    .with_ansi(config.ansi),
            )
            .try_init();

        if installed.is_err() {
            tracing::debug!("Global subscriber already set, keeping it");
        }
    });
}

/// Return a named logger, configuring the global subscriber on first use
///
/// Safe to call repeatedly with different names.
///
/// ## Examples
/// ```rust
/// use platform::logging::get_logger;
///
/// let logger = get_logger("market.pricing");
/// assert_eq!(logger.name(), "market.pricing");
/// logger.info("pricing started");
/// ```
pub fn get_logger(name: impl Into<Cow<'static, str>>) -> Logger {
    init_logging(&LogConfig::default());
    Logger { name: name.into() }
}

/// Named logger handle
///
/// Events go through the regular `tracing` pipeline with the logger name
/// attached as the `logger` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logger {
    name: Cow<'static, str>,
}

impl Logger {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn debug(&self, message: impl fmt::Display) {
        tracing::debug!(logger = %self.name, "{message}");
    }

    pub fn info(&self, message: impl fmt::Display) {
        tracing::info!(logger = %self.name, "{message}");
    }

    pub fn warn(&self, message: impl fmt::Display) {
        tracing::warn!(logger = %self.name, "{message}");
    }

    pub fn error(&self, message: impl fmt::Display) {
        tracing::error!(logger = %self.name, "{message}");
    }
}
