//! Marker attribute parsing.
//!
//! Stateless helpers that read the serialization markers off declarations.
//! Absent or malformed arguments are treated as "not present"; nothing here
//! fails.

use protoshadow_core::{AttributeData, AttributeValue, AttributeVocabulary, TypeDecl, normalize_type_name};

/// Explicit tagging state of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagMarker {
    /// No manual-tag or ignore marker
    Untagged,
    /// Manual-tag or ignore marker present; `tag` is the claimed number, if any
    Explicit { tag: Option<u32> },
}

/// Options marker state of a type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsMarker {
    Absent,
    /// Alternate attribute type to stamp on generated members
    AttributeType(String),
    /// Marker present, but the alternate attribute argument is missing or not a type
    Malformed,
}

/// A parsed include marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeMarker {
    pub slot: Option<i64>,
    /// Qualified name of the included derived type
    pub derived: Option<String>,
}

/// Whether the attribute list carries the contract marker
pub fn has_contract(attributes: &[AttributeData], vocabulary: &AttributeVocabulary) -> bool {
    attributes.iter().any(|a| vocabulary.is_contract(&a.name))
}

/// Contract marker and partial modifier
pub fn is_generation_root(decl: &TypeDecl, vocabulary: &AttributeVocabulary) -> bool {
    decl.is_partial && has_contract(&decl.attributes, vocabulary)
}

/// Read the manual-tag / ignore markers of a property
///
/// The claimed tag is the first integer constructor argument, when it is a
/// valid tag (>= 1).
pub fn explicit_tag(attributes: &[AttributeData], vocabulary: &AttributeVocabulary) -> TagMarker {
    let mut marker = TagMarker::Untagged;
    for attribute in attributes {
        if !(vocabulary.is_member(&attribute.name) || vocabulary.is_ignore(&attribute.name)) {
            continue;
        }
        let tag = attribute.arguments.iter().find_map(|value| match value {
            AttributeValue::Int(tag) => u32::try_from(*tag).ok().filter(|tag| *tag >= 1),
            _ => None,
        });
        marker = match (marker, tag) {
            (TagMarker::Explicit { tag: Some(existing) }, _) => TagMarker::Explicit {
                tag: Some(existing),
            },
            (_, tag) => TagMarker::Explicit { tag },
        };
    }
    marker
}

/// Read the options marker of a type
pub fn options_marker(decl: &TypeDecl, vocabulary: &AttributeVocabulary) -> OptionsMarker {
    let Some(attribute) = decl
        .attributes
        .iter()
        .find(|a| vocabulary.is_options(&a.name))
    else {
        return OptionsMarker::Absent;
    };

    match attribute.named.get(&vocabulary.options_property) {
        Some(AttributeValue::Type(name)) if !name.trim().is_empty() => {
            OptionsMarker::AttributeType(normalize_type_name(name))
        }
        _ => OptionsMarker::Malformed,
    }
}

/// Alternate attribute type, falling back to `None` when absent or malformed
pub fn custom_attribute_type(decl: &TypeDecl, vocabulary: &AttributeVocabulary) -> Option<String> {
    match options_marker(decl, vocabulary) {
        OptionsMarker::AttributeType(name) => Some(name),
        OptionsMarker::Absent | OptionsMarker::Malformed => None,
    }
}

/// All include markers on a type
pub fn include_markers(decl: &TypeDecl, vocabulary: &AttributeVocabulary) -> Vec<IncludeMarker> {
    decl.attributes
        .iter()
        .filter(|a| vocabulary.is_include(&a.name))
        .map(|attribute| {
            let slot = attribute.arguments.iter().find_map(|value| match value {
                AttributeValue::Int(slot) => Some(*slot),
                _ => None,
            });
            let derived = attribute.arguments.iter().find_map(|value| match value {
                AttributeValue::Type(name) => Some(normalize_type_name(name)),
                // "Ns.Type, Assembly" names the type before the comma
                AttributeValue::String(name) => name
                    .split(',')
                    .next()
                    .map(normalize_type_name)
                    .filter(|name| !name.is_empty()),
                _ => None,
            });
            IncludeMarker { slot, derived }
        })
        .collect()
}

/// Whether the type carries the contract marker and includes `derived`
pub fn includes_derived(decl: &TypeDecl, derived: &str, vocabulary: &AttributeVocabulary) -> bool {
    has_contract(&decl.attributes, vocabulary)
        && include_markers(decl, vocabulary)
            .iter()
            .any(|marker| marker.derived.as_deref() == Some(derived))
}
