//! Diagnostic analysis
//!
//! Runs over the same declaration graph as generation but independently of
//! it: a diagnostic never suppresses a generation unit, and generation never
//! depends on the diagnostics.
//!
//! | id | severity | rule |
//! |---|---|---|
//! | Proto01 | Error | property type is a named class/struct lacking contract + partial |
//! | Proto02 | Error | contract-marked nested type with a non-partial enclosing type |
//! | Proto03 | Info | property is not auto-implemented or lacks a getter/setter |
//! | Proto04 | Info | base chain is not declared through include markers |
//! | Proto05 | Warning | two properties claim the same explicit tag |
//! | Proto06 | Warning | options marker without a type-valued alternate attribute |
//! | Proto07 | Warning | a synthesized member name collides with another member of the root |

use crate::attributes::{
    OptionsMarker, TagMarker, explicit_tag, has_contract, includes_derived, is_generation_root,
    options_marker,
};
use crate::eligibility::{PropertyVerdict, evaluate_property, structural_miss};
use crate::property_emitter::member_name;
use crate::shape::{ShapeDecision, ShapeKind, classify};
use crate::walker::walk;
use protoshadow_core::{
    AttributeVocabulary, DeclarationGraph, GeneratorConfig, Location, TypeNode, normalize_type_name,
};
use serde::Serialize;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Base types that terminate a base chain walk
const UNIVERSAL_BASES: &[&str] = &["System.Object", "System.ValueType", "System.Enum", "object"];

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// Diagnostic rule identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum RuleId {
    #[serde(rename = "Proto01")]
    MissingContract,
    #[serde(rename = "Proto02")]
    NestedParentNotPartial,
    #[serde(rename = "Proto03")]
    NonGeneratingProperty,
    #[serde(rename = "Proto04")]
    BaseTypeNotChained,
    #[serde(rename = "Proto05")]
    DuplicateTag,
    #[serde(rename = "Proto06")]
    MalformedOptions,
    #[serde(rename = "Proto07")]
    DuplicateMemberName,
}

impl RuleId {
    pub fn code(self) -> &'static str {
        match self {
            RuleId::MissingContract => "Proto01",
            RuleId::NestedParentNotPartial => "Proto02",
            RuleId::NonGeneratingProperty => "Proto03",
            RuleId::BaseTypeNotChained => "Proto04",
            RuleId::DuplicateTag => "Proto05",
            RuleId::MalformedOptions => "Proto06",
            RuleId::DuplicateMemberName => "Proto07",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            RuleId::MissingContract | RuleId::NestedParentNotPartial => Severity::Error,
            RuleId::DuplicateTag | RuleId::MalformedOptions | RuleId::DuplicateMemberName => {
                Severity::Warning
            }
            RuleId::NonGeneratingProperty | RuleId::BaseTypeNotChained => Severity::Info,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            RuleId::MissingContract => "Property type is not a partial contract type",
            RuleId::NestedParentNotPartial => "Enclosing type of a contract type is not partial",
            RuleId::NonGeneratingProperty => "Property cannot be shadowed",
            RuleId::BaseTypeNotChained => "Base type does not include the derived type",
            RuleId::DuplicateTag => "Explicit tag is claimed more than once",
            RuleId::MalformedOptions => "Generator options do not name an attribute type",
            RuleId::DuplicateMemberName => "Synthesized member name is already in use",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A reported rule violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub rule: RuleId,
    pub severity: Severity,
    pub location: Location,
    pub message: String,
}

impl Diagnostic {
    pub fn new(rule: RuleId, location: &Location, message: impl Into<String>) -> Self {
        Self {
            rule,
            severity: rule.severity(),
            location: location.clone(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {}: {}",
            self.location, self.severity, self.rule, self.message
        )
    }
}

/// Run every rule over the graph; results are ordered by location, then rule
pub fn analyze(graph: &DeclarationGraph, config: &GeneratorConfig) -> Vec<Diagnostic> {
    let vocabulary = &config.attributes;
    let mut diagnostics = Vec::new();

    walk(graph, |node, enclosing| {
        check_nested_parents(node, enclosing, vocabulary, &mut diagnostics);
        check_duplicate_tags(node, vocabulary, &mut diagnostics);
        check_options(node, vocabulary, &mut diagnostics);

        if is_generation_root(&node.decl, vocabulary) {
            check_properties(graph, node, vocabulary, &mut diagnostics);
            check_base_chain(graph, node, vocabulary, &mut diagnostics);
            check_member_names(graph, node, config, &mut diagnostics);
        }
    });

    diagnostics.sort_by(|a, b| a.location.cmp(&b.location).then(a.rule.cmp(&b.rule)));
    diagnostics
}

fn check_properties(
    graph: &DeclarationGraph,
    node: &TypeNode,
    vocabulary: &AttributeVocabulary,
    diagnostics: &mut Vec<Diagnostic>,
) {
    for property in &node.decl.properties {
        if property.is_static
            || explicit_tag(&property.attributes, vocabulary) != TagMarker::Untagged
        {
            continue;
        }

        if let ShapeDecision::MissingContract { type_name } =
            classify(&property.ty, graph, vocabulary)
        {
            diagnostics.push(Diagnostic::new(
                RuleId::MissingContract,
                &property.location,
                format!(
                    "Property '{}' has type '{type_name}', which must be a partial type marked with the contract attribute",
                    property.name
                ),
            ));
        }

        if structural_miss(property).is_some() {
            diagnostics.push(Diagnostic::new(
                RuleId::NonGeneratingProperty,
                &property.location,
                format!(
                    "Property '{}' is not an auto-implemented property with a getter and setter; mark it with an explicit tag or ignore it",
                    property.name
                ),
            ));
        }
    }
}

fn check_nested_parents(
    node: &TypeNode,
    enclosing: &[&TypeNode],
    vocabulary: &AttributeVocabulary,
    diagnostics: &mut Vec<Diagnostic>,
) {
    if enclosing.is_empty() || !has_contract(&node.decl.attributes, vocabulary) {
        return;
    }

    if let Some(parent) = enclosing.iter().find(|parent| !parent.decl.is_partial) {
        diagnostics.push(Diagnostic::new(
            RuleId::NestedParentNotPartial,
            &node.decl.location,
            format!(
                "Type '{}' is nested in '{}', which must be declared partial",
                node.qualified_name, parent.qualified_name
            ),
        ));
    }
}

fn check_base_chain(
    graph: &DeclarationGraph,
    node: &TypeNode,
    vocabulary: &AttributeVocabulary,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let mut derived = node.qualified_name.clone();
    let mut base = node.decl.base_type.as_deref().map(normalize_type_name);
    let mut visited = HashSet::from([derived.clone()]);

    while let Some(base_name) = base {
        if UNIVERSAL_BASES.contains(&base_name.as_str()) || !visited.insert(base_name.clone()) {
            return;
        }

        let chained = graph
            .lookup(&base_name)
            .filter(|ancestor| includes_derived(&ancestor.decl, &derived, vocabulary));
        let Some(ancestor) = chained else {
            diagnostics.push(Diagnostic::new(
                RuleId::BaseTypeNotChained,
                &node.decl.location,
                format!(
                    "Base type '{base_name}' must be marked with the contract attribute and include '{derived}'"
                ),
            ));
            return;
        };

        derived = base_name;
        base = ancestor.decl.base_type.as_deref().map(normalize_type_name);
    }
}

fn check_duplicate_tags(
    node: &TypeNode,
    vocabulary: &AttributeVocabulary,
    diagnostics: &mut Vec<Diagnostic>,
) {
    if !has_contract(&node.decl.attributes, vocabulary) {
        return;
    }

    let mut claimed: BTreeMap<u32, &str> = BTreeMap::new();
    for property in node.decl.properties.iter().filter(|p| !p.is_static) {
        let TagMarker::Explicit { tag: Some(tag) } = explicit_tag(&property.attributes, vocabulary)
        else {
            continue;
        };
        match claimed.entry(tag) {
            Entry::Vacant(entry) => {
                entry.insert(&property.name);
            }
            Entry::Occupied(entry) => diagnostics.push(Diagnostic::new(
                RuleId::DuplicateTag,
                &property.location,
                format!(
                    "Tag {tag} on property '{}' is already claimed by '{}'",
                    property.name,
                    entry.get()
                ),
            )),
        }
    }
}

fn check_member_names(
    graph: &DeclarationGraph,
    node: &TypeNode,
    config: &GeneratorConfig,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let declared: HashSet<&str> = node.decl.properties.iter().map(|p| p.name.as_str()).collect();
    let mut synthesized: BTreeMap<String, &str> = BTreeMap::new();

    for property in &node.decl.properties {
        let PropertyVerdict::Generate { shape, .. } =
            evaluate_property(graph, property, &config.attributes)
        else {
            continue;
        };

        let mut shapes = vec![ShapeKind::Plain];
        if shape.is_helper() {
            shapes.push(shape);
        }

        for shape in shapes {
            let name = member_name(shape, &property.name, config);
            let clash = if declared.contains(name.as_str()) {
                Some(format!("declared property '{name}'"))
            } else {
                match synthesized.entry(name.clone()) {
                    Entry::Vacant(entry) => {
                        entry.insert(&property.name);
                        None
                    }
                    Entry::Occupied(entry) => {
                        Some(format!("the member generated for '{}'", entry.get()))
                    }
                }
            };

            if let Some(clash) = clash {
                diagnostics.push(Diagnostic::new(
                    RuleId::DuplicateMemberName,
                    &property.location,
                    format!(
                        "Member '{name}' generated for property '{}' collides with {clash}; rename the property or mark it with an explicit tag",
                        property.name
                    ),
                ));
            }
        }
    }
}

fn check_options(node: &TypeNode, vocabulary: &AttributeVocabulary, diagnostics: &mut Vec<Diagnostic>) {
    if options_marker(&node.decl, vocabulary) == OptionsMarker::Malformed {
        diagnostics.push(Diagnostic::new(
            RuleId::MalformedOptions,
            &node.decl.location,
            format!(
                "Generator options on '{}' must set '{}' to an attribute type; the default member attribute is used",
                node.qualified_name, vocabulary.options_property
            ),
        ));
    }
}
