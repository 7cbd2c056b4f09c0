//! Global subscriber installation

use crate::filter::build_filter;
use protoshadow_core::LogLevel;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Options for the stderr subscriber
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingOptions {
    /// Default level for every target
    pub level: LogLevel,

    /// Extra directives in `RUST_LOG` syntax
    pub directives: Option<String>,

    /// Emit ANSI colors
    pub ansi: bool,

    /// Include the event target (module path)
    pub with_target: bool,
}

impl LoggingOptions {
    /// Options for `level`, picking up `RUST_LOG` from the environment
    pub fn from_env(level: LogLevel) -> Self {
        Self {
            level,
            directives: std::env::var(EnvFilter::DEFAULT_ENV).ok(),
            ..Self::default()
        }
    }
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            directives: None,
            ansi: false,
            with_target: true,
        }
    }
}

/// Initialize logging to stderr at `level`
///
/// `RUST_LOG` directives, when set, are layered on top of the level.
/// Call this once at startup; later calls are ignored.
pub fn init_logging(level: LogLevel) {
    init_logging_with(&LoggingOptions::from_env(level));
}

/// Initialize logging with explicit options
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_logging_with(options: &LoggingOptions) -> bool {
    let filter = build_filter(options.level, options.directives.as_deref());
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(options.ansi)
        .with_target(options.with_target);

    let subscriber = tracing_subscriber::registry().with(filter).with(layer);

    // Try to set as global default (ignore error if already set)
    tracing::subscriber::set_global_default(subscriber).is_ok()
}
