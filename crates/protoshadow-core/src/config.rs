//! Generator configuration types

use crate::error::{GeneratorError, GeneratorResult};
use crate::vocabulary::AttributeVocabulary;
use serde::{Deserialize, Serialize};

/// Generator configuration, usually loaded from `protoshadow.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Naming, output, and scheduling settings
    #[serde(default)]
    pub generator: GeneratorSection,

    /// Marker attribute names
    #[serde(default)]
    pub attributes: AttributeVocabulary,
}

/// How the namespace wrapper is written in generated files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamespaceStyle {
    /// `namespace Ns;`
    #[default]
    FileScoped,
    /// `namespace Ns { ... }`
    Block,
}

/// `[generator]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSection {
    /// Prefix of the forwarding shadow property (`Value` -> `ProtoValue`)
    #[serde(default = "default_shadow_prefix")]
    pub shadow_prefix: String,

    /// Prefix of the collection presence flag (`Items` -> `ProtoIsEmptyItems`)
    #[serde(default = "default_presence_prefix")]
    pub presence_prefix: String,

    /// Prefix of generated file names
    #[serde(default = "default_output_prefix")]
    pub output_prefix: String,

    /// Extension of generated file names, including the leading dot
    #[serde(default = "default_output_extension")]
    pub output_extension: String,

    #[serde(default)]
    pub namespace_style: NamespaceStyle,

    /// Generate independent roots on a thread pool
    #[serde(default = "default_parallel")]
    pub parallel: bool,

    /// Number of worker threads (default: number of CPU cores)
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

fn default_shadow_prefix() -> String {
    "Proto".to_string()
}

fn default_presence_prefix() -> String {
    "ProtoIsEmpty".to_string()
}

fn default_output_prefix() -> String {
    "Proto".to_string()
}

fn default_output_extension() -> String {
    ".g.cs".to_string()
}

fn default_parallel() -> bool {
    true
}

impl Default for GeneratorSection {
    fn default() -> Self {
        Self {
            shadow_prefix: default_shadow_prefix(),
            presence_prefix: default_presence_prefix(),
            output_prefix: default_output_prefix(),
            output_extension: default_output_extension(),
            namespace_style: NamespaceStyle::default(),
            parallel: default_parallel(),
            worker_threads: None,
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text. Empty input yields the defaults.
    pub fn from_toml(content: &str) -> GeneratorResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> GeneratorResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            GeneratorError::ConfigError(format!("failed to read {:?}: {e}", path.as_ref()))
        })?;
        Self::from_toml(&content)
    }

    /// Validate the configuration
    pub fn validate(&self) -> GeneratorResult<()> {
        let section = &self.generator;

        for (key, prefix) in [
            ("shadow_prefix", &section.shadow_prefix),
            ("presence_prefix", &section.presence_prefix),
        ] {
            if !is_identifier(prefix) {
                return Err(GeneratorError::ConfigError(format!(
                    "{key} must be a C# identifier, got '{prefix}'"
                )));
            }
        }

        if section.shadow_prefix == section.presence_prefix {
            return Err(GeneratorError::ConfigError(
                "shadow_prefix and presence_prefix must differ".to_string(),
            ));
        }

        if !section.output_extension.starts_with('.') || section.output_extension.len() < 2 {
            return Err(GeneratorError::ConfigError(format!(
                "output_extension must start with '.', got '{}'",
                section.output_extension
            )));
        }

        if section.output_prefix.contains(['/', '\\']) {
            return Err(GeneratorError::ConfigError(
                "output_prefix cannot contain path separators".to_string(),
            ));
        }

        if section.worker_threads == Some(0) {
            return Err(GeneratorError::ConfigError(
                "worker_threads must be greater than zero".to_string(),
            ));
        }

        for (key, name) in self.attributes.entries() {
            if name.trim().is_empty() {
                return Err(GeneratorError::ConfigError(format!(
                    "attributes.{key} cannot be empty"
                )));
            }
        }

        Ok(())
    }
}

fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}
