//! Fixture builders shared by unit tests

use protoshadow_core::{
    Accessor, AccessorBody, AttributeData, AttributeValue, DeclarationGraph, Location,
    PropertyDecl, TypeDecl, TypeKind, TypeRef, TypeRefKind,
};

pub(crate) fn contract() -> AttributeData {
    AttributeData::new("ProtoBuf.ProtoContract")
}

pub(crate) fn member(tag: i64) -> AttributeData {
    AttributeData::new("global::ProtoBuf.ProtoMember").with_argument(AttributeValue::Int(tag))
}

pub(crate) fn ignore() -> AttributeData {
    AttributeData::new("ProtoBuf.ProtoIgnore")
}

pub(crate) fn include_type(slot: i64, derived: &str) -> AttributeData {
    AttributeData::new("ProtoBuf.ProtoInclude")
        .with_argument(AttributeValue::Int(slot))
        .with_argument(AttributeValue::Type(derived.to_string()))
}

pub(crate) fn include_name(slot: i64, derived: &str) -> AttributeData {
    AttributeData::new("ProtoBuf.ProtoInclude")
        .with_argument(AttributeValue::Int(slot))
        .with_argument(AttributeValue::String(derived.to_string()))
}

pub(crate) fn options(value: AttributeValue) -> AttributeData {
    AttributeData::new("ProtobufSourceGenerator.GeneratorOptions")
        .with_named("PropertyAttributeType", value)
}

pub(crate) fn int() -> TypeRef {
    TypeRef::new("System.Int32", TypeRefKind::Primitive)
}

pub(crate) fn string() -> TypeRef {
    TypeRef::new("System.String", TypeRefKind::Primitive)
}

pub(crate) fn class_ref(name: &str) -> TypeRef {
    TypeRef::new(name, TypeRefKind::Class)
}

pub(crate) fn generic(name: &str, kind: TypeRefKind, arguments: Vec<TypeRef>) -> TypeRef {
    TypeRef::generic(name, kind, arguments)
}

pub(crate) fn list_of(element: TypeRef) -> TypeRef {
    generic("System.Collections.Generic.List", TypeRefKind::Class, vec![element])
}

pub(crate) fn auto_property(name: &str, ty: TypeRef) -> PropertyDecl {
    PropertyDecl {
        name: name.to_string(),
        ty,
        getter: Some(Accessor::default()),
        setter: Some(Accessor::default()),
        ..PropertyDecl::default()
    }
}

pub(crate) fn init_property(name: &str, ty: TypeRef) -> PropertyDecl {
    PropertyDecl {
        setter: Some(Accessor {
            is_init_only: true,
            ..Accessor::default()
        }),
        ..auto_property(name, ty)
    }
}

pub(crate) fn get_only_property(name: &str, ty: TypeRef) -> PropertyDecl {
    PropertyDecl {
        setter: None,
        ..auto_property(name, ty)
    }
}

pub(crate) fn computed_property(name: &str, ty: TypeRef) -> PropertyDecl {
    PropertyDecl {
        getter: Some(Accessor {
            body: AccessorBody::Expression,
            ..Accessor::default()
        }),
        setter: Some(Accessor {
            body: AccessorBody::Block,
            ..Accessor::default()
        }),
        ..auto_property(name, ty)
    }
}

pub(crate) fn with_attribute(mut property: PropertyDecl, attribute: AttributeData) -> PropertyDecl {
    property.attributes.push(attribute);
    property
}

pub(crate) fn at(mut property: PropertyDecl, line: u32, column: u32) -> PropertyDecl {
    property.location = Location::new("Test.cs", line, column);
    property
}

pub(crate) fn plain_class(name: &str) -> TypeDecl {
    TypeDecl {
        name: name.to_string(),
        namespace: "Test".to_string(),
        kind: TypeKind::Class,
        ..TypeDecl::default()
    }
}

pub(crate) fn partial_class(name: &str) -> TypeDecl {
    TypeDecl {
        is_partial: true,
        ..plain_class(name)
    }
}

/// `[ProtoContract] partial class` in namespace `Test`
pub(crate) fn root_class(name: &str, properties: Vec<PropertyDecl>) -> TypeDecl {
    TypeDecl {
        attributes: vec![contract()],
        properties,
        ..partial_class(name)
    }
}

pub(crate) fn graph(types: Vec<TypeDecl>) -> DeclarationGraph {
    DeclarationGraph::from_types(types).unwrap()
}
