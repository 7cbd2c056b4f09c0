//! Analyze command: report diagnostics for a declaration model

use crate::input::{load_config, load_graph};
use anyhow::{Context, Result};
use clap::ValueEnum;
use protoshadow_codegen::{Diagnostic, Generator};

/// Diagnostic output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `file(line,col): severity ProtoNN: message` line per diagnostic
    Text,
    /// A JSON array of diagnostics
    Json,
}

/// Analyze command implementation
///
/// Returns whether any Error diagnostic was reported.
pub fn run(input: &str, config: Option<String>, format: OutputFormat) -> Result<bool> {
    let graph = load_graph(input)?;
    let config = load_config(config.as_deref())?;
    let generator = Generator::new(&graph, config).context("Invalid generator configuration")?;

    let diagnostics = generator.diagnostics();
    println!("{}", render(&diagnostics, format)?);

    Ok(diagnostics.iter().any(Diagnostic::is_error))
}

/// Render diagnostics in the requested format
pub fn render(diagnostics: &[Diagnostic], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(diagnostics).context("Failed to serialize diagnostics")
        }
        OutputFormat::Text => {
            let mut lines: Vec<String> = diagnostics.iter().map(ToString::to_string).collect();
            let errors = diagnostics.iter().filter(|d| d.is_error()).count();
            lines.push(format!(
                "{} diagnostic(s), {} error(s)",
                diagnostics.len(),
                errors
            ));
            Ok(lines.join("\n"))
        }
    }
}

#[cfg(test)]
#[path = "analyze/analyze_tests.rs"]
mod analyze_tests;
