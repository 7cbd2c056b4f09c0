//! Check command: validate a protoshadow.toml configuration

use crate::input::DEFAULT_CONFIG;
use anyhow::{Context, Result};
use protoshadow_core::{GeneratorConfig, NamespaceStyle};

/// Check command implementation
pub fn run(config_path: Option<String>) -> Result<()> {
    let path = config_path.unwrap_or_else(|| DEFAULT_CONFIG.to_string());

    println!("Checking configuration: {}", path);

    let config = GeneratorConfig::from_file(&path)
        .with_context(|| format!("Failed to load configuration: {path}"))?;
    config.validate().context("Invalid configuration")?;

    println!("{}", summary(&config));
    println!("\nConfiguration is valid!");

    Ok(())
}

/// Human-readable summary of the effective settings
pub fn summary(config: &GeneratorConfig) -> String {
    let section = &config.generator;
    let namespace = match section.namespace_style {
        NamespaceStyle::FileScoped => "file-scoped",
        NamespaceStyle::Block => "block",
    };
    let workers = section
        .worker_threads
        .map_or_else(|| "default".to_string(), |threads| threads.to_string());

    [
        format!(
            "✓ Shadow: {}<Name>, presence: {}<Name>",
            section.shadow_prefix, section.presence_prefix
        ),
        format!(
            "✓ Output: {}<Type>{} ({namespace} namespace)",
            section.output_prefix, section.output_extension
        ),
        format!("✓ Contract marker: {}", config.attributes.contract),
        format!("✓ Member marker: {}", config.attributes.member),
        format!("✓ Parallel: {} (workers: {workers})", section.parallel),
    ]
    .join("\n")
}
