//! Property shape classification
//!
//! The shape of a property decides which shadow members are synthesized for
//! it. Scalars and contract types forward through a single `Plain` shadow;
//! collections additionally get a presence helper whose implementation
//! depends on whether the declared type is concrete, an abstract sequence,
//! an abstract map, or a lazily enumerated sequence.

use crate::attributes::is_generation_root;
use protoshadow_core::{AttributeVocabulary, DeclarationGraph, TypeKind, TypeRef, TypeRefKind};
use serde::Serialize;
use std::fmt;

/// Closed set of shadow property shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ShapeKind {
    /// Forwards get/set to the source property
    Plain,
    /// Presence flag over a constructible collection type
    ConcreteCollectionHelper,
    /// Presence flag over an abstract single-argument collection
    AbstractSequenceHelper,
    /// Presence flag over an abstract two-argument map
    AbstractMapHelper,
    /// Presence flag over a deferred sequence
    LazySequenceHelper,
}

impl ShapeKind {
    /// Whether the shape is a presence helper (emitted after a `Plain` shadow)
    pub fn is_helper(self) -> bool {
        !matches!(self, ShapeKind::Plain)
    }

    /// Number of element type arguments the emitter needs for this shape
    pub fn element_arity(self) -> usize {
        match self {
            ShapeKind::Plain | ShapeKind::ConcreteCollectionHelper => 0,
            ShapeKind::AbstractSequenceHelper | ShapeKind::LazySequenceHelper => 1,
            ShapeKind::AbstractMapHelper => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Plain => "Plain",
            ShapeKind::ConcreteCollectionHelper => "ConcreteCollectionHelper",
            ShapeKind::AbstractSequenceHelper => "AbstractSequenceHelper",
            ShapeKind::AbstractMapHelper => "AbstractMapHelper",
            ShapeKind::LazySequenceHelper => "LazySequenceHelper",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of classifying a declared property type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeDecision {
    Shape(ShapeKind),
    /// Named class/struct without contract marker and partial modifier
    MissingContract { type_name: String },
}

const ENUMERABLE: &str = "System.Collections.Generic.IEnumerable`1";

const SEQUENCE_INTERFACES: &[&str] = &[
    "System.Collections.Generic.IList`1",
    "System.Collections.Generic.ICollection`1",
    "System.Collections.Generic.IReadOnlyList`1",
    "System.Collections.Generic.IReadOnlyCollection`1",
];

const MAP_INTERFACES: &[&str] = &[
    "System.Collections.Generic.IDictionary`2",
    "System.Collections.Generic.IReadOnlyDictionary`2",
];

/// Well-known BCL collections and the collection contracts they implement
const KNOWN_COLLECTIONS: &[(&str, &str)] = &[
    ("System.Collections.Generic.List`1", "System.Collections.Generic.IList`1"),
    ("System.Collections.Generic.HashSet`1", "System.Collections.Generic.ICollection`1"),
    ("System.Collections.Generic.SortedSet`1", "System.Collections.Generic.ICollection`1"),
    ("System.Collections.Generic.LinkedList`1", "System.Collections.Generic.ICollection`1"),
    ("System.Collections.Generic.Queue`1", "System.Collections.Generic.IReadOnlyCollection`1"),
    ("System.Collections.Generic.Stack`1", "System.Collections.Generic.IReadOnlyCollection`1"),
    ("System.Collections.Generic.Dictionary`2", "System.Collections.Generic.IDictionary`2"),
    ("System.Collections.Generic.SortedDictionary`2", "System.Collections.Generic.IDictionary`2"),
    ("System.Collections.Generic.SortedList`2", "System.Collections.Generic.IDictionary`2"),
    ("System.Collections.ObjectModel.Collection`1", "System.Collections.Generic.IList`1"),
    ("System.Collections.ObjectModel.ObservableCollection`1", "System.Collections.Generic.IList`1"),
    ("System.Collections.Concurrent.ConcurrentDictionary`2", "System.Collections.Generic.IDictionary`2"),
    ("System.Collections.Concurrent.ConcurrentBag`1", "System.Collections.Generic.IReadOnlyCollection`1"),
];

/// Classify the declared type of a property
pub fn classify(
    ty: &TypeRef,
    graph: &DeclarationGraph,
    vocabulary: &AttributeVocabulary,
) -> ShapeDecision {
    match ty.kind {
        TypeRefKind::Primitive
        | TypeRefKind::Enum
        | TypeRefKind::TypeParameter
        | TypeRefKind::Array => return ShapeDecision::Shape(ShapeKind::Plain),
        TypeRefKind::Class | TypeRefKind::Struct | TypeRefKind::Interface => {}
    }

    if ty.is_generic()
        && let Some(shape) = classify_generic(ty)
    {
        return ShapeDecision::Shape(shape);
    }

    classify_named(ty, graph, vocabulary)
}

fn classify_generic(ty: &TypeRef) -> Option<ShapeKind> {
    let definition = ty.open_definition();

    if definition == ENUMERABLE {
        return Some(ShapeKind::LazySequenceHelper);
    }

    if ty.kind == TypeRefKind::Interface {
        if SEQUENCE_INTERFACES.contains(&definition.as_str()) {
            return Some(ShapeKind::AbstractSequenceHelper);
        }
        if MAP_INTERFACES.contains(&definition.as_str()) {
            return Some(ShapeKind::AbstractMapHelper);
        }
        // No constructible default for other interfaces (sets included)
        return None;
    }

    let contracts = collection_contracts(ty, &definition);
    if contracts.iter().any(|contract| {
        SEQUENCE_INTERFACES.contains(contract) || MAP_INTERFACES.contains(contract)
    }) {
        return Some(ShapeKind::ConcreteCollectionHelper);
    }
    if contracts.contains(&ENUMERABLE) {
        return Some(ShapeKind::LazySequenceHelper);
    }

    None
}

/// Collection contracts implemented by the definition, from the catalog and
/// from the interfaces carried on the reference
fn collection_contracts<'a>(ty: &'a TypeRef, definition: &str) -> Vec<&'a str> {
    let mut contracts: Vec<&'a str> = KNOWN_COLLECTIONS
        .iter()
        .filter(|(known, _)| *known == definition)
        .map(|(_, contract)| *contract)
        .collect();
    contracts.extend(
        ty.interfaces
            .iter()
            .map(|name| name.trim_start_matches("global::")),
    );
    contracts
}

fn classify_named(
    ty: &TypeRef,
    graph: &DeclarationGraph,
    vocabulary: &AttributeVocabulary,
) -> ShapeDecision {
    if ty.kind == TypeRefKind::Interface {
        return ShapeDecision::Shape(ShapeKind::Plain);
    }

    let name = ty.qualified_name();
    if is_system_type(&name) {
        return ShapeDecision::Shape(ShapeKind::Plain);
    }

    match graph.lookup(&name) {
        Some(node) if node.decl.kind == TypeKind::Enum => ShapeDecision::Shape(ShapeKind::Plain),
        Some(node) if is_generation_root(&node.decl, vocabulary) => {
            ShapeDecision::Shape(ShapeKind::Plain)
        }
        _ => ShapeDecision::MissingContract { type_name: name },
    }
}

fn is_system_type(name: &str) -> bool {
    name == "System" || name.starts_with("System.")
}
