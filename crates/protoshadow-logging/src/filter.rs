//! Level filters and `RUST_LOG` directive handling

use protoshadow_core::LogLevel;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Convert LogLevel to tracing LevelFilter
pub fn convert_level_to_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Off => LevelFilter::OFF,
    }
}

/// Build the event filter for a run
///
/// `level` is the default for every target. Non-empty `directives` (the
/// `RUST_LOG` syntax, e.g. `protoshadow_codegen=trace`) are layered on top;
/// directives that fail to parse are dropped.
pub fn build_filter(level: LogLevel, directives: Option<&str>) -> EnvFilter {
    let builder = EnvFilter::builder().with_default_directive(convert_level_to_filter(level).into());

    match directives.map(str::trim) {
        Some(directives) if !directives.is_empty() => builder.parse_lossy(directives),
        _ => builder.parse_lossy(""),
    }
}
