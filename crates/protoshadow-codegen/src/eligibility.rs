//! Eligibility analysis
//!
//! Decides, for every property of a generation root, whether a shadow is
//! synthesized for it. Every property maps to exactly one [`PropertyVerdict`];
//! the decision is local and total, so malformed markers never abort a root.

use crate::attributes::{TagMarker, custom_attribute_type, explicit_tag, is_generation_root};
use crate::shape::{ShapeDecision, ShapeKind, classify};
use protoshadow_core::{
    AttributeVocabulary, CancellationToken, DeclarationGraph, GeneratorResult, PropertyDecl,
    TypeNode,
};
use std::collections::BTreeSet;
use tracing::trace;

/// Outcome of evaluating one property
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyVerdict {
    /// Static properties are never serialized
    Static,
    /// Manually tagged or ignored; `tag` is reserved when present
    Skipped { tag: Option<u32> },
    /// Declared type is a named class/struct lacking contract and partial
    MissingContract { type_name: String },
    /// An accessor has a block or expression body
    NotAutoImplemented,
    /// No getter, no setter, or a read-only setter
    MissingAccessor,
    Generate { shape: ShapeKind, is_init_only: bool },
}

impl PropertyVerdict {
    /// Verdicts that leave the property without a shadow and without an explicit tag
    pub fn is_non_generating(&self) -> bool {
        matches!(
            self,
            PropertyVerdict::NotAutoImplemented | PropertyVerdict::MissingAccessor
        )
    }
}

/// Evaluate a property of a generation root
pub fn evaluate_property(
    graph: &DeclarationGraph,
    property: &PropertyDecl,
    vocabulary: &AttributeVocabulary,
) -> PropertyVerdict {
    if property.is_static {
        return PropertyVerdict::Static;
    }

    if let TagMarker::Explicit { tag } = explicit_tag(&property.attributes, vocabulary) {
        return PropertyVerdict::Skipped { tag };
    }

    let shape = match classify(&property.ty, graph, vocabulary) {
        ShapeDecision::Shape(shape) => shape,
        ShapeDecision::MissingContract { type_name } => {
            return PropertyVerdict::MissingContract { type_name };
        }
    };

    structural_miss(property).unwrap_or(PropertyVerdict::Generate {
        shape,
        is_init_only: property.is_init_only(),
    })
}

/// `NotAutoImplemented` or `MissingAccessor` when the property cannot be
/// shadowed regardless of its type
pub fn structural_miss(property: &PropertyDecl) -> Option<PropertyVerdict> {
    if !property.is_auto_implemented() {
        return Some(PropertyVerdict::NotAutoImplemented);
    }

    match (&property.getter, &property.setter) {
        (Some(_), Some(setter)) if !setter.is_read_only => None,
        _ => Some(PropertyVerdict::MissingAccessor),
    }
}

/// A property that will receive shadow members
#[derive(Debug, Clone)]
pub struct PropertyCandidate<'g> {
    pub property: &'g PropertyDecl,
    pub shape: ShapeKind,
    pub is_init_only: bool,
}

/// Eligibility facts of one generation root
#[derive(Debug, Clone)]
pub struct RootAnalysis<'g> {
    pub node: &'g TypeNode,

    /// Every explicit tag on any property of the type
    pub claimed_tags: BTreeSet<u32>,

    /// Generating properties, in declaration order
    pub candidates: Vec<PropertyCandidate<'g>>,

    /// Alternate attribute type from the options marker
    pub custom_attribute_type: Option<String>,
}

/// Analyze a type; `None` when it is not a generation root
///
/// The cancellation token is checked before each property.
pub fn analyze_root<'g>(
    graph: &'g DeclarationGraph,
    node: &'g TypeNode,
    vocabulary: &AttributeVocabulary,
    token: &CancellationToken,
) -> GeneratorResult<Option<RootAnalysis<'g>>> {
    if !is_generation_root(&node.decl, vocabulary) {
        return Ok(None);
    }

    let mut claimed_tags = BTreeSet::new();
    let mut candidates = Vec::new();

    for property in &node.decl.properties {
        token.check()?;

        let verdict = evaluate_property(graph, property, vocabulary);
        trace!(
            root = %node.qualified_name,
            property = %property.name,
            ?verdict,
            "Evaluated property"
        );

        match verdict {
            PropertyVerdict::Skipped { tag: Some(tag) } => {
                claimed_tags.insert(tag);
            }
            PropertyVerdict::Generate {
                shape,
                is_init_only,
            } => candidates.push(PropertyCandidate {
                property,
                shape,
                is_init_only,
            }),
            PropertyVerdict::Static
            | PropertyVerdict::Skipped { tag: None }
            | PropertyVerdict::MissingContract { .. }
            | PropertyVerdict::NotAutoImplemented
            | PropertyVerdict::MissingAccessor => {}
        }
    }

    Ok(Some(RootAnalysis {
        node,
        claimed_tags,
        candidates,
        custom_attribute_type: custom_attribute_type(&node.decl, vocabulary),
    }))
}

#[cfg(test)]
#[path = "eligibility/eligibility_tests.rs"]
mod eligibility_tests;
