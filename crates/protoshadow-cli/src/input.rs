//! Loading of declaration models and configuration files

use anyhow::{Context, Result};
use protoshadow_core::{DeclarationGraph, GeneratorConfig};
use std::path::Path;
use tracing::debug;

/// Configuration file picked up from the working directory
pub const DEFAULT_CONFIG: &str = "protoshadow.toml";

/// Load a declaration model from a JSON file
pub fn load_graph(path: impl AsRef<Path>) -> Result<DeclarationGraph> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read declaration model: {path:?}"))?;

    let graph = DeclarationGraph::from_json(&content)
        .with_context(|| format!("Failed to parse declaration model: {path:?}"))?;
    debug!(path = %path.display(), types = graph.len(), "Loaded declaration model");
    Ok(graph)
}

/// Resolve the configuration for a run
///
/// An explicit path must exist. Without one, `protoshadow.toml` in the
/// working directory is used when present and the defaults otherwise.
pub fn load_config(path: Option<&str>) -> Result<GeneratorConfig> {
    let path = match path {
        Some(path) => path,
        None if Path::new(DEFAULT_CONFIG).is_file() => DEFAULT_CONFIG,
        None => {
            debug!("No configuration file, using defaults");
            return Ok(GeneratorConfig::default());
        }
    };

    let config = GeneratorConfig::from_file(path)
        .with_context(|| format!("Failed to load configuration: {path}"))?;
    config
        .validate()
        .with_context(|| format!("Invalid configuration: {path}"))?;
    debug!(path, "Loaded configuration");
    Ok(config)
}
