//! Shape-specific shadow property emission
//!
//! Each [`PropertyDescriptor`] becomes one private C# property decorated with
//! a single tag attribute:
//!
//! | shape | type | getter | setter |
//! |---|---|---|---|
//! | `Plain` | source type | `=> X` | `=> X = value` |
//! | `ConcreteCollectionHelper` | `bool` | `=> X?.Count == 0` | `if (value) X = new();` |
//! | `AbstractSequenceHelper` | `bool` | `=> X?.Count == 0` | `if (value) X = new List<T>();` |
//! | `AbstractMapHelper` | `bool` | `=> X?.Count == 0` | `if (value) X = new Dictionary<K, V>();` |
//! | `LazySequenceHelper` | `bool` | `=> X != null && !Enumerable.Any(X)` | `if (value) X = Enumerable.Empty<T>();` |
//!
//! Helpers read `true` when the collection is present but empty; the contents
//! travel through the `Plain` shadow, so an empty collection and an absent one
//! stay distinguishable on the wire.

use crate::descriptor::PropertyDescriptor;
use crate::shape::ShapeKind;
use protoshadow_core::{GeneratorConfig, GeneratorError, GeneratorResult};

const LIST_TYPE: &str = "global::System.Collections.Generic.List";
const DICTIONARY_TYPE: &str = "global::System.Collections.Generic.Dictionary";
const ENUMERABLE_TYPE: &str = "global::System.Linq.Enumerable";

/// Rendered shadow member: attribute line and declaration line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedProperty {
    pub attribute: String,
    pub declaration: String,
}

/// Name of the shadow member for a descriptor
pub fn shadow_name(descriptor: &PropertyDescriptor, config: &GeneratorConfig) -> String {
    member_name(descriptor.shape, &descriptor.identifier, config)
}

/// Name of the member synthesized in `shape` for the source property `identifier`
pub fn member_name(shape: ShapeKind, identifier: &str, config: &GeneratorConfig) -> String {
    let prefix = if shape.is_helper() {
        &config.generator.presence_prefix
    } else {
        &config.generator.shadow_prefix
    };
    format!("{prefix}{identifier}")
}

/// Emit the shadow property for a descriptor
///
/// Fails with [`GeneratorError::UnsupportedShape`] when a helper shape lacks
/// the element type arguments it needs.
pub fn emit_property(
    descriptor: &PropertyDescriptor,
    config: &GeneratorConfig,
) -> GeneratorResult<EmittedProperty> {
    let source = &descriptor.identifier;
    let name = shadow_name(descriptor, config);
    let setter = if descriptor.is_init_only { "init" } else { "set" };

    let declaration = match descriptor.shape {
        ShapeKind::Plain => format!(
            "private {} {name} {{ get => {source}; {setter} => {source} = value; }}",
            descriptor.declared_type_name
        ),
        ShapeKind::ConcreteCollectionHelper => {
            presence_flag(&name, &counted(source), setter, source, "new()")
        }
        ShapeKind::AbstractSequenceHelper => {
            let element = element_argument(descriptor, descriptor.element_type_argument0.as_deref())?;
            presence_flag(
                &name,
                &counted(source),
                setter,
                source,
                &format!("new {LIST_TYPE}<{element}>()"),
            )
        }
        ShapeKind::AbstractMapHelper => {
            let key = element_argument(descriptor, descriptor.element_type_argument0.as_deref())?;
            let value = element_argument(descriptor, descriptor.element_type_argument1.as_deref())?;
            presence_flag(
                &name,
                &counted(source),
                setter,
                source,
                &format!("new {DICTIONARY_TYPE}<{key}, {value}>()"),
            )
        }
        ShapeKind::LazySequenceHelper => {
            let element = element_argument(descriptor, descriptor.element_type_argument0.as_deref())?;
            presence_flag(
                &name,
                &format!("{source} != null && !{ENUMERABLE_TYPE}.Any({source})"),
                setter,
                source,
                &format!("{ENUMERABLE_TYPE}.Empty<{element}>()"),
            )
        }
    };

    Ok(EmittedProperty {
        attribute: tag_attribute(descriptor, config),
        declaration,
    })
}

fn counted(source: &str) -> String {
    format!("{source}?.Count == 0")
}

fn presence_flag(name: &str, getter: &str, setter: &str, source: &str, empty: &str) -> String {
    format!("private bool {name} {{ get => {getter}; {setter} {{ if (value) {source} = {empty}; }} }}")
}

fn element_argument<'d>(
    descriptor: &PropertyDescriptor,
    argument: Option<&'d str>,
) -> GeneratorResult<&'d str> {
    argument.ok_or_else(|| GeneratorError::UnsupportedShape {
        property: descriptor.identifier.clone(),
        shape: descriptor.shape.to_string(),
    })
}

fn tag_attribute(descriptor: &PropertyDescriptor, config: &GeneratorConfig) -> String {
    let attribute = match &descriptor.custom_attribute_type_name {
        Some(custom) => format!("global::{custom}"),
        None => config.attributes.member_attribute_syntax(),
    };
    format!("[{attribute}({})]", descriptor.tag)
}
