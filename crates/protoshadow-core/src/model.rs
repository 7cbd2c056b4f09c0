//! Declaration model consumed by the generator.
//!
//! The model is a pre-resolved, immutable view of C# type declarations as a
//! compiler front end would see them: types with their namespace, nesting,
//! base type, attributes and properties. It is supplied as a JSON
//! [`DeclarationDocument`] and flattened into a [`DeclarationGraph`] arena.
//!
//! # Structure
//!
//! - [`TypeDecl`]: one declared class/struct/record/interface/enum
//! - [`PropertyDecl`]: one declared property with its accessors
//! - [`TypeRef`]: a resolved reference to a type (with generic arguments)
//! - [`AttributeData`]: an attribute with constructor and named arguments
//!
//! Nested types are declared inline through [`TypeDecl::nested_types`], so the
//! parent chain of every node mirrors lexical nesting and cannot be cyclic.
//!
//! # Examples
//!
//! ```rust
//! use protoshadow_core::DeclarationGraph;
//!
//! let graph = DeclarationGraph::from_json(r#"{
//!     "types": [{
//!         "name": "Entity",
//!         "namespace": "Test",
//!         "is_partial": true,
//!         "attributes": [{ "name": "ProtoBuf.ProtoContract" }],
//!         "properties": [{
//!             "name": "Id",
//!             "type": { "name": "System.Int32", "kind": "primitive" },
//!             "getter": {},
//!             "setter": {}
//!         }]
//!     }]
//! }"#).unwrap();
//!
//! let entity = graph.lookup("Test.Entity").unwrap();
//! assert_eq!(entity.decl.properties[0].name, "Id");
//! ```

use crate::error::{GeneratorError, GeneratorResult};
use crate::vocabulary::normalize_type_name;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Top-level input document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeclarationDocument {
    #[serde(default)]
    pub types: Vec<TypeDecl>,
}

/// The declared kind of a type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    #[default]
    Class,
    Struct,
    Interface,
    Enum,
}

/// A declared type
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeDecl {
    /// Simple name, without type parameters
    pub name: String,

    /// Containing namespace; empty for the global namespace. Ignored on nested types.
    #[serde(default)]
    pub namespace: String,

    #[serde(default)]
    pub kind: TypeKind,

    #[serde(default)]
    pub is_record: bool,

    #[serde(default)]
    pub is_partial: bool,

    #[serde(default)]
    pub is_static: bool,

    /// Type parameter names, in declaration order
    #[serde(default)]
    pub type_parameters: Vec<String>,

    /// Fully qualified name of the direct base type, if any
    #[serde(default)]
    pub base_type: Option<String>,

    #[serde(default)]
    pub attributes: Vec<AttributeData>,

    /// Declared properties, in declaration order
    #[serde(default)]
    pub properties: Vec<PropertyDecl>,

    /// Types declared inside this one
    #[serde(default)]
    pub nested_types: Vec<TypeDecl>,

    #[serde(default)]
    pub location: Location,
}

impl TypeDecl {
    /// Reference types are classes, interfaces, and record classes
    pub fn is_reference_type(&self) -> bool {
        matches!(self.kind, TypeKind::Class | TypeKind::Interface)
    }
}

/// A declared property
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertyDecl {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: TypeRef,

    #[serde(default)]
    pub getter: Option<Accessor>,

    #[serde(default)]
    pub setter: Option<Accessor>,

    #[serde(default)]
    pub is_static: bool,

    #[serde(default)]
    pub attributes: Vec<AttributeData>,

    #[serde(default)]
    pub location: Location,
}

impl PropertyDecl {
    /// Auto-implemented: every declared accessor lacks a body and an expression body
    pub fn is_auto_implemented(&self) -> bool {
        let accessors = [self.getter.as_ref(), self.setter.as_ref()];
        accessors.iter().any(Option::is_some)
            && accessors
                .iter()
                .flatten()
                .all(|accessor| accessor.body == AccessorBody::Auto)
    }

    pub fn is_init_only(&self) -> bool {
        self.setter.as_ref().is_some_and(|setter| setter.is_init_only)
    }
}

/// How an accessor is implemented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessorBody {
    /// `get;` / `set;`
    #[default]
    Auto,
    /// `get { ... }`
    Block,
    /// `get => ...;`
    Expression,
}

/// A property accessor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accessor {
    #[serde(default)]
    pub body: AccessorBody,

    /// `init;` instead of `set;`
    #[serde(default)]
    pub is_init_only: bool,

    /// `readonly` accessor
    #[serde(default)]
    pub is_read_only: bool,
}

/// Classification of a referenced type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRefKind {
    /// Built-in special type (`int`, `string`, `decimal`, ...)
    Primitive,
    Enum,
    #[default]
    Class,
    Struct,
    Interface,
    TypeParameter,
    /// `T[]`; the element type is the single argument
    Array,
}

/// A resolved reference to a type
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    /// Fully qualified name without generic arity (`System.Collections.Generic.List`)
    pub name: String,

    #[serde(default)]
    pub kind: TypeRefKind,

    /// Generic type arguments, in order
    #[serde(default)]
    pub arguments: Vec<TypeRef>,

    /// Nullable annotation (`int?`, `string?`)
    #[serde(default)]
    pub nullable: bool,

    /// Open generic interfaces implemented by the definition
    /// (``System.Collections.Generic.ICollection`1``)
    #[serde(default)]
    pub interfaces: Vec<String>,
}

impl TypeRef {
    /// Create a reference of the given kind with no arguments
    pub fn new(name: impl Into<String>, kind: TypeRefKind) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Self::default()
        }
    }

    /// Create a closed generic reference
    pub fn generic(name: impl Into<String>, kind: TypeRefKind, arguments: Vec<TypeRef>) -> Self {
        Self {
            name: name.into(),
            kind,
            arguments,
            ..Self::default()
        }
    }

    /// Mark the reference as nullable
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Qualified name with the `global::` alias removed
    pub fn qualified_name(&self) -> String {
        normalize_type_name(&self.name)
    }

    /// Metadata name of the open definition (``System.Collections.Generic.List`1``)
    pub fn open_definition(&self) -> String {
        let name = self.qualified_name();
        if self.arguments.is_empty() || self.kind == TypeRefKind::Array {
            name
        } else {
            format!("{}`{}", name, self.arguments.len())
        }
    }

    pub fn is_generic(&self) -> bool {
        self.kind != TypeRefKind::Array && !self.arguments.is_empty()
    }
}

/// An attribute applied to a type or property
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeData {
    /// Fully qualified attribute class name
    pub name: String,

    /// Positional constructor arguments
    #[serde(default)]
    pub arguments: Vec<AttributeValue>,

    /// Named arguments
    #[serde(default)]
    pub named: BTreeMap<String, AttributeValue>,
}

impl AttributeData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_argument(mut self, value: AttributeValue) -> Self {
        self.arguments.push(value);
        self
    }

    pub fn with_named(mut self, name: impl Into<String>, value: AttributeValue) -> Self {
        self.named.insert(name.into(), value);
        self
    }
}

/// A constant attribute argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeValue {
    Int(i64),
    String(String),
    /// `typeof(T)`, as the fully qualified name of `T`
    Type(String),
    Bool(bool),
    Null,
}

/// Opaque source location carried through to diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub file: String,
    #[serde(default)]
    pub line: u32,
    #[serde(default)]
    pub column: u32,
}

impl Location {
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.file.is_empty() {
            write!(f, "({},{})", self.line, self.column)
        } else {
            write!(f, "{}({},{})", self.file, self.line, self.column)
        }
    }
}

/// Index of a type in a [`DeclarationGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeId(usize);

impl TypeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A type in the arena, with its lexical links
#[derive(Debug, Clone)]
pub struct TypeNode {
    pub id: TypeId,

    /// The declaration; `nested_types` is always empty here, see `children`
    pub decl: TypeDecl,

    /// Lexically enclosing type
    pub parent: Option<TypeId>,

    /// Lexically nested types, in declaration order
    pub children: Vec<TypeId>,

    /// `Ns.Outer.Inner`
    pub qualified_name: String,

    /// Namespace of the outermost enclosing type
    pub namespace: String,
}

/// Immutable, arena-backed declaration graph
#[derive(Debug, Clone, Default)]
pub struct DeclarationGraph {
    nodes: Vec<TypeNode>,
    top_level: Vec<TypeId>,
    by_name: HashMap<String, TypeId>,
}

impl DeclarationGraph {
    /// Flatten declarations into an arena
    ///
    /// Fails with [`GeneratorError::InvalidGraph`] on empty or duplicate qualified names.
    pub fn from_types(types: Vec<TypeDecl>) -> GeneratorResult<Self> {
        let mut graph = Self::default();
        for decl in types {
            let namespace = normalize_type_name(&decl.namespace);
            let id = graph.insert(decl, None, &namespace, None)?;
            graph.top_level.push(id);
        }
        Ok(graph)
    }

    /// Parse a JSON [`DeclarationDocument`] into a graph
    pub fn from_json(content: &str) -> GeneratorResult<Self> {
        let document: DeclarationDocument = serde_json::from_str(content)?;
        Self::from_types(document.types)
    }

    fn insert(
        &mut self,
        mut decl: TypeDecl,
        parent: Option<TypeId>,
        namespace: &str,
        parent_name: Option<&str>,
    ) -> GeneratorResult<TypeId> {
        if decl.name.trim().is_empty() {
            return Err(GeneratorError::InvalidGraph(
                "type declaration with empty name".to_string(),
            ));
        }

        let qualified_name = match parent_name {
            Some(parent_name) => format!("{parent_name}.{}", decl.name),
            None if namespace.is_empty() => decl.name.clone(),
            None => format!("{namespace}.{}", decl.name),
        };

        if self.by_name.contains_key(&qualified_name) {
            return Err(GeneratorError::InvalidGraph(format!(
                "duplicate type '{qualified_name}'"
            )));
        }

        let nested = std::mem::take(&mut decl.nested_types);
        let id = TypeId(self.nodes.len());
        self.nodes.push(TypeNode {
            id,
            decl,
            parent,
            children: Vec::new(),
            qualified_name: qualified_name.clone(),
            namespace: namespace.to_string(),
        });
        self.by_name.insert(qualified_name.clone(), id);

        for child in nested {
            let child_id = self.insert(child, Some(id), namespace, Some(&qualified_name))?;
            self.nodes[id.0].children.push(child_id);
        }

        Ok(id)
    }

    pub fn node(&self, id: TypeId) -> &TypeNode {
        &self.nodes[id.0]
    }

    /// Find a type by qualified name (a leading `global::` is ignored)
    pub fn lookup(&self, qualified_name: &str) -> Option<&TypeNode> {
        self.by_name
            .get(&normalize_type_name(qualified_name))
            .map(|id| self.node(*id))
    }

    /// Types declared directly in a namespace, in document order
    pub fn top_level(&self) -> impl DoubleEndedIterator<Item = &TypeNode> {
        self.top_level.iter().map(|id| self.node(*id))
    }

    /// All types, parents before their nested types
    pub fn iter(&self) -> impl Iterator<Item = &TypeNode> {
        self.nodes.iter()
    }

    pub fn parent(&self, node: &TypeNode) -> Option<&TypeNode> {
        node.parent.map(|id| self.node(id))
    }

    /// Enclosing types from the innermost outward
    pub fn enclosing(&self, node: &TypeNode) -> Vec<&TypeNode> {
        let mut chain = Vec::new();
        let mut current = self.parent(node);
        while let Some(parent) = current {
            chain.push(parent);
            current = self.parent(parent);
        }
        chain
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
