//! Class text emission
//!
//! Wraps the synthesized members of a root in its partial declaration, one
//! empty partial declaration per enclosing type, and the namespace:
//!
//! ```text
//! // <auto-generated/>
//! #nullable enable
//!
//! namespace Test;
//!
//! partial class Outer
//! {
//!     partial class Entity
//!     {
//!         [global::ProtoBuf.ProtoMember(1)]
//!         private int ProtoId { get => Id; set => Id = value; }
//!     }
//! }
//! ```

use crate::csharp::CodeWriter;
use crate::descriptor::TypeDescriptor;
use crate::property_emitter::emit_property;
use protoshadow_core::{GeneratorConfig, GeneratorResult, GeneratorSection, NamespaceStyle};
use serde::Serialize;

const HEADER: &str = "// <auto-generated/>";
const NULLABLE: &str = "#nullable enable";

/// One generated source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationUnit {
    /// Stable file name, unique per root
    pub output_key: String,
    pub text: String,
}

/// `{output_prefix}{Ns.Outer.Name}{output_extension}`, generic arity included
pub fn output_key(root: &TypeDescriptor, section: &GeneratorSection) -> String {
    let mut segments: Vec<String> = root.ancestors().map(TypeDescriptor::metadata_name).collect();
    segments.reverse();
    segments.push(root.metadata_name());
    if !root.namespace.is_empty() {
        segments.insert(0, root.namespace.clone());
    }

    format!(
        "{}{}{}",
        section.output_prefix,
        segments.join("."),
        section.output_extension
    )
}

/// Render a root descriptor into a generation unit
pub fn emit_unit(root: &TypeDescriptor, config: &GeneratorConfig) -> GeneratorResult<GenerationUnit> {
    let mut members = Vec::with_capacity(root.owned_properties.len());
    for property in &root.owned_properties {
        members.push(emit_property(property, config)?);
    }

    let mut chain: Vec<&TypeDescriptor> = root.ancestors().collect();
    chain.reverse();
    chain.push(root);

    let mut writer = CodeWriter::new();
    writer.line(HEADER);
    writer.line(NULLABLE);
    writer.blank_line();

    let block_namespace = !root.namespace.is_empty()
        && config.generator.namespace_style == NamespaceStyle::Block;
    if block_namespace {
        writer.open_block(&format!("namespace {}", root.namespace));
    } else if !root.namespace.is_empty() {
        writer.line(&format!("namespace {};", root.namespace));
        writer.blank_line();
    }

    for descriptor in &chain {
        writer.open_block(&declaration_header(descriptor));
    }
    for (index, member) in members.iter().enumerate() {
        if index > 0 {
            writer.blank_line();
        }
        writer.line(&member.attribute);
        writer.line(&member.declaration);
    }
    for _ in &chain {
        writer.close_block();
    }

    if block_namespace {
        writer.close_block();
    }

    Ok(GenerationUnit {
        output_key: output_key(root, &config.generator),
        text: writer.into_string(),
    })
}

fn declaration_header(descriptor: &TypeDescriptor) -> String {
    let mut header = format!("partial {} {}", descriptor.kind.keyword(), descriptor.name);
    if !descriptor.type_parameters.is_empty() {
        header.push('<');
        header.push_str(&descriptor.type_parameters.join(", "));
        header.push('>');
    }
    header
}
