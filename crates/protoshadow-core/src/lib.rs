//! protoshadow-core - Declaration model, configuration, and error types
//!
//! This crate provides the foundational types shared by the generator and the CLI:
//! - [`DeclarationGraph`] the immutable type/property/attribute model consumed by codegen
//! - [`AttributeVocabulary`] for recognizing serialization markers
//! - [`GeneratorConfig`] for generator configuration
//! - [`GeneratorError`] for error handling
//! - [`CancellationHandle`] for cooperative cancellation of a generation pass

mod cancel;
mod config;
mod error;
mod model;
mod vocabulary;

pub use cancel::{CancellationHandle, CancellationToken};
pub use config::{GeneratorConfig, GeneratorSection, NamespaceStyle};
pub use error::{GeneratorError, GeneratorResult};
pub use model::{
    Accessor, AccessorBody, AttributeData, AttributeValue, DeclarationDocument, DeclarationGraph,
    Location, PropertyDecl, TypeDecl, TypeId, TypeKind, TypeNode, TypeRef, TypeRefKind,
};
pub use vocabulary::{AttributeVocabulary, normalize_type_name};

/// Log levels understood by the CLI and the logging crate
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Off = 5,
}

impl LogLevel {
    /// Parse a level name, case-insensitively. Unknown names map to `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            "off" | "none" => Some(LogLevel::Off),
            _ => None,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AttributeVocabulary, CancellationHandle, CancellationToken, DeclarationGraph,
        GeneratorConfig, GeneratorError, GeneratorResult, LogLevel, PropertyDecl, TypeDecl,
        TypeNode, TypeRef,
    };
}
