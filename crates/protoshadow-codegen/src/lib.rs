//! protoshadow-codegen - Shadow property generation for C# serialization contracts
//!
//! Given a [`DeclarationGraph`](protoshadow_core::DeclarationGraph), this crate
//! decides which properties of each `[ProtoContract] partial` type receive a
//! private, tag-numbered shadow property and emits the C# source for them.
//!
//! # Architecture
//!
//! ```text
//! DeclarationGraph
//!     ↓
//!  [eligibility] ─ shape, attributes
//!     ↓
//!  [tags] → [descriptor] (TypeDescriptor chain)
//!     ↓
//!  [property_emitter] → [class_emitter]
//!     ↓
//!  GenerationUnit (output_key, text)
//!
//! DeclarationGraph → [walker] → [diagnostics] → Diagnostic list
//! ```
//!
//! Generation and diagnostics read the same graph independently.
//! [`Generator`] drives the generation side, one root per rayon task.
//!
//! # Example
//!
//! ```rust
//! use protoshadow_codegen::Generator;
//! use protoshadow_core::{CancellationToken, DeclarationGraph, GeneratorConfig};
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
//! let generator = Generator::new(&graph, GeneratorConfig::default()).unwrap();
//! let report = generator.generate(&CancellationToken::none());
//!
//! assert_eq!(report.units[0].output_key, "ProtoTest.Entity.g.cs");
//! assert!(report.units[0].text.contains("private int ProtoId { get => Id; set => Id = value; }"));
//! ```

pub mod attributes;
pub mod class_emitter;
pub mod csharp;
pub mod descriptor;
pub mod diagnostics;
pub mod eligibility;
pub mod pipeline;
pub mod property_emitter;
pub mod shape;
pub mod tags;
pub mod walker;

#[cfg(test)]
mod test_support;

pub use class_emitter::{GenerationUnit, emit_unit, output_key};
pub use descriptor::{DeclarationKind, PropertyDescriptor, TypeDescriptor, build_type_descriptor};
pub use diagnostics::{Diagnostic, RuleId, Severity, analyze};
pub use eligibility::{PropertyVerdict, RootAnalysis, analyze_root, evaluate_property};
pub use pipeline::{GenerationReport, Generator, RootFailure};
pub use property_emitter::{EmittedProperty, emit_property};
pub use shape::{ShapeDecision, ShapeKind, classify};
pub use tags::{TagAllocator, assign_tags};
