//! Generate command: write one source file per generation root

use crate::input::{load_config, load_graph};
use anyhow::{Context, Result};
use protoshadow_codegen::{GenerationReport, GenerationUnit, Generator, Severity};
use protoshadow_core::CancellationToken;
use std::path::{Path, PathBuf};
use tracing::info;

/// Generate command implementation
pub fn run(input: &str, output: &str, config: Option<String>, dry_run: bool) -> Result<()> {
    let graph = load_graph(input)?;
    let config = load_config(config.as_deref())?;
    let generator = Generator::new(&graph, config).context("Invalid generator configuration")?;

    for diagnostic in generator.diagnostics() {
        if diagnostic.severity != Severity::Info {
            eprintln!("{diagnostic}");
        }
    }

    let report = generator.generate(&CancellationToken::none());

    if dry_run {
        for unit in &report.units {
            println!("{}", Path::new(output).join(&unit.output_key).display());
        }
    } else {
        let written = write_units(&report.units, output)?;
        info!(files = written.len(), output, "Wrote generated sources");
        println!("Generated {} file(s) in {}", written.len(), output);
    }

    check_failures(&report)
}

/// Write every unit to `<output>/<output_key>`, creating the directory
pub fn write_units(units: &[GenerationUnit], output: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let output = output.as_ref();
    std::fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {output:?}"))?;

    units
        .iter()
        .map(|unit| {
            let path = output.join(&unit.output_key);
            std::fs::write(&path, &unit.text)
                .with_context(|| format!("Failed to write {path:?}"))?;
            Ok(path)
        })
        .collect()
}

/// Fail the command when any root could not be generated
fn check_failures(report: &GenerationReport) -> Result<()> {
    for failure in &report.failures {
        eprintln!("error: {}: {}", failure.root, failure.error);
    }

    if !report.is_success() {
        anyhow::bail!("{} root(s) failed to generate", report.failures.len());
    }
    Ok(())
}
