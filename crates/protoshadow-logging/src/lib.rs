//! protoshadow-logging - Tracing subscriber setup
//!
//! This crate provides:
//! - [`init_logging`] to install a stderr subscriber for the CLI
//! - [`build_filter`] to combine a [`LogLevel`] with `RUST_LOG` directives
//! - [`convert_level_to_filter`] for mapping [`LogLevel`] onto tracing filters

mod filter;
mod subscriber;

pub use filter::{build_filter, convert_level_to_filter};
pub use protoshadow_core::LogLevel;
pub use subscriber::{LoggingOptions, init_logging, init_logging_with};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LogLevel, LoggingOptions, init_logging};
}
