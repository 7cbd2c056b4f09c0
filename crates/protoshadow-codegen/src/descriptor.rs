//! Generation model
//!
//! A [`TypeDescriptor`] is the emitter-facing view of one generation root:
//! its synthesized [`PropertyDescriptor`]s with assigned tags, and a singly
//! linked chain of property-less descriptors for its enclosing types.

use crate::csharp::render_type;
use crate::eligibility::{PropertyCandidate, RootAnalysis};
use crate::shape::ShapeKind;
use crate::tags::TagAllocator;
use protoshadow_core::{
    CancellationToken, DeclarationGraph, GeneratorError, GeneratorResult, TypeDecl, TypeKind,
    TypeNode,
};
use serde::Serialize;
use std::collections::BTreeSet;

/// Declared kind of a type as it is re-declared in generated code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeclarationKind {
    Class,
    Struct,
    RecordClass,
    RecordStruct,
    Interface,
}

impl DeclarationKind {
    /// Kind of a declaration; enums cannot be re-declared partially
    pub fn of(decl: &TypeDecl) -> GeneratorResult<Self> {
        match (decl.kind, decl.is_record) {
            (TypeKind::Class, false) => Ok(DeclarationKind::Class),
            (TypeKind::Class, true) => Ok(DeclarationKind::RecordClass),
            (TypeKind::Struct, false) => Ok(DeclarationKind::Struct),
            (TypeKind::Struct, true) => Ok(DeclarationKind::RecordStruct),
            (TypeKind::Interface, _) => Ok(DeclarationKind::Interface),
            (TypeKind::Enum, _) => Err(GeneratorError::InvalidGraph(format!(
                "enum '{}' cannot be declared partial",
                decl.name
            ))),
        }
    }

    /// Keyword(s) used in a `partial` declaration
    pub fn keyword(self) -> &'static str {
        match self {
            DeclarationKind::Class => "class",
            DeclarationKind::Struct => "struct",
            DeclarationKind::RecordClass => "record class",
            DeclarationKind::RecordStruct => "record struct",
            DeclarationKind::Interface => "interface",
        }
    }
}

/// One synthesized shadow member
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyDescriptor {
    /// Source property name
    pub identifier: String,

    /// Rendered source type, nullability preserved
    pub declared_type_name: String,

    pub shape: ShapeKind,

    /// Rendered first element type argument, for helper shapes
    pub element_type_argument0: Option<String>,

    /// Rendered second element type argument, for map shapes
    pub element_type_argument1: Option<String>,

    pub is_init_only: bool,

    /// Alternate attribute type from the options marker of the containing type
    pub custom_attribute_type_name: Option<String>,

    pub tag: u32,
}

/// A type in the generated nesting chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDescriptor {
    pub name: String,
    pub namespace: String,
    pub kind: DeclarationKind,
    pub type_parameters: Vec<String>,
    pub is_record: bool,
    pub is_reference_type: bool,

    /// Synthesized members; empty for enclosing types
    pub owned_properties: Vec<PropertyDescriptor>,

    /// Explicit tags claimed by properties of the type
    pub claimed_tags: BTreeSet<u32>,

    /// Lexically enclosing type
    pub parent: Option<Box<TypeDescriptor>>,
}

impl TypeDescriptor {
    fn describe(node: &TypeNode, parent: Option<Box<TypeDescriptor>>) -> GeneratorResult<Self> {
        Ok(Self {
            name: node.decl.name.clone(),
            namespace: node.namespace.clone(),
            kind: DeclarationKind::of(&node.decl)?,
            type_parameters: node.decl.type_parameters.clone(),
            is_record: node.decl.is_record,
            is_reference_type: node.decl.is_reference_type(),
            owned_properties: Vec::new(),
            claimed_tags: BTreeSet::new(),
            parent,
        })
    }

    /// Enclosing descriptors from the innermost outward
    pub fn ancestors(&self) -> impl Iterator<Item = &TypeDescriptor> {
        std::iter::successors(self.parent.as_deref(), |d| d.parent.as_deref())
    }

    /// Name with generic arity, `Entity` or ``Box`1``
    pub fn metadata_name(&self) -> String {
        if self.type_parameters.is_empty() {
            self.name.clone()
        } else {
            format!("{}`{}", self.name, self.type_parameters.len())
        }
    }
}

/// Build the descriptor chain for an analyzed generation root
///
/// Collection-shaped candidates yield a `Plain` shadow followed by their
/// presence helper; tags are allocated in that order.
pub fn build_type_descriptor(
    graph: &DeclarationGraph,
    analysis: &RootAnalysis<'_>,
    token: &CancellationToken,
) -> GeneratorResult<TypeDescriptor> {
    let mut parent = None;
    for enclosing in graph.enclosing(analysis.node).into_iter().rev() {
        parent = Some(Box::new(TypeDescriptor::describe(enclosing, parent)?));
    }

    let mut root = TypeDescriptor::describe(analysis.node, parent)?;
    root.claimed_tags = analysis.claimed_tags.clone();

    let mut allocator = TagAllocator::new(analysis.claimed_tags.clone());
    for candidate in &analysis.candidates {
        token.check()?;

        let helper = candidate.shape.is_helper().then_some(candidate.shape);
        for shape in std::iter::once(ShapeKind::Plain).chain(helper) {
            root.owned_properties.push(property_descriptor(
                candidate,
                shape,
                analysis.custom_attribute_type.clone(),
                allocator.allocate(),
            ));
        }
    }

    Ok(root)
}

fn property_descriptor(
    candidate: &PropertyCandidate<'_>,
    shape: ShapeKind,
    custom_attribute_type_name: Option<String>,
    tag: u32,
) -> PropertyDescriptor {
    let property = candidate.property;
    let mut element_types = property.ty.arguments.iter().map(render_type);
    let (element_type_argument0, element_type_argument1) = if shape.is_helper() {
        (element_types.next(), element_types.next())
    } else {
        (None, None)
    };

    PropertyDescriptor {
        identifier: property.name.clone(),
        declared_type_name: render_type(&property.ty),
        shape,
        element_type_argument0,
        element_type_argument1,
        is_init_only: candidate.is_init_only,
        custom_attribute_type_name,
        tag,
    }
}
