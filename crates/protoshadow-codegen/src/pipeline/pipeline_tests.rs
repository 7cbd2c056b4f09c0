#![allow(non_snake_case)]

use super::*;
use crate::diagnostics::RuleId;
use crate::test_support::*;
use protoshadow_core::{CancellationHandle, Location, TypeDecl, TypeKind, TypeRefKind};

fn generate(types: Vec<TypeDecl>) -> GenerationReport {
    let graph = graph(types);
    let generator = Generator::new(&graph, GeneratorConfig::default()).unwrap();
    generator.generate(&CancellationToken::none())
}

#[test]
fn Generator___single_int_property___one_unit_with_tag_one() {
    let report = generate(vec![root_class("Entity", vec![auto_property("Id", int())])]);

    assert!(report.is_success());
    assert_eq!(report.units.len(), 1);
    let unit = &report.units[0];
    assert_eq!(unit.output_key, "ProtoTest.Entity.g.cs");
    assert!(unit.text.contains(
        "    [global::ProtoBuf.ProtoMember(1)]\n    private int ProtoId { get => Id; set => Id = value; }\n"
    ));
}

#[test]
fn Generator___manually_tagged_property___only_other_property_with_next_tag() {
    let report = generate(vec![root_class(
        "Entity",
        vec![
            with_attribute(auto_property("Id", int()), member(1)),
            auto_property("Value", string()),
        ],
    )]);

    let text = &report.units[0].text;
    assert!(!text.contains("ProtoId"));
    assert!(text.contains(
        "    [global::ProtoBuf.ProtoMember(2)]\n    private string ProtoValue { get => Value; set => Value = value; }\n"
    ));
}

#[test]
fn Generator___init_only_property___init_accessor() {
    let report = generate(vec![root_class("Entity", vec![init_property("Id", int())])]);

    assert!(
        report.units[0]
            .text
            .contains("private int ProtoId { get => Id; init => Id = value; }")
    );
}

#[test]
fn Generator___collection_property___shadow_and_presence_flag() {
    let report = generate(vec![root_class(
        "Entity",
        vec![auto_property("Items", list_of(string()).nullable())],
    )]);

    let text = &report.units[0].text;
    assert!(text.contains(
        "    [global::ProtoBuf.ProtoMember(1)]\n    private global::System.Collections.Generic.List<string>? ProtoItems { get => Items; set => Items = value; }\n"
    ));
    assert!(text.contains(
        "    [global::ProtoBuf.ProtoMember(2)]\n    private bool ProtoIsEmptyItems { get => Items?.Count == 0; set { if (value) Items = new(); } }\n"
    ));
}

#[test]
fn Generator___set_interface_property___plain_shadow_without_list_assignment() {
    let report = generate(vec![root_class(
        "Entity",
        vec![auto_property(
            "Tags",
            generic("System.Collections.Generic.ISet", TypeRefKind::Interface, vec![int()]),
        )],
    )]);

    let text = &report.units[0].text;
    assert!(text.contains(
        "    [global::ProtoBuf.ProtoMember(1)]\n    private global::System.Collections.Generic.ISet<int> ProtoTags { get => Tags; set => Tags = value; }\n"
    ));
    assert!(!text.contains("ProtoIsEmptyTags"));
    assert!(!text.contains("List<int>"));
}

#[test]
fn Generator___hash_set_property___presence_flag_uses_target_typed_new() {
    let report = generate(vec![root_class(
        "Entity",
        vec![auto_property(
            "Tags",
            generic("System.Collections.Generic.HashSet", TypeRefKind::Class, vec![int()]),
        )],
    )]);

    assert!(report.units[0].text.contains(
        "private bool ProtoIsEmptyTags { get => Tags?.Count == 0; set { if (value) Tags = new(); } }"
    ));
}

#[test]
fn Generator___root_without_eligible_properties___no_unit() {
    let report = generate(vec![root_class(
        "Entity",
        vec![with_attribute(auto_property("Id", int()), member(1))],
    )]);

    assert!(report.is_success());
    assert!(report.units.is_empty());
}

#[test]
fn Generator___non_roots___skipped() {
    let report = generate(vec![
        partial_class("Plain"),
        TypeDecl {
            properties: vec![auto_property("Id", int())],
            ..plain_class("NotPartial")
        },
    ]);

    assert!(report.units.is_empty());
}

#[test]
fn Generator___root_in_non_partial_parent___generates_and_diagnoses() {
    let mut outer = plain_class("Outer");
    let mut inner = root_class("Inner", vec![auto_property("Id", int())]);
    inner.location = Location::new("Outer.cs", 7, 5);
    outer.nested_types.push(inner);
    let graph = graph(vec![outer]);
    let generator = Generator::new(&graph, GeneratorConfig::default()).unwrap();

    let report = generator.generate(&CancellationToken::none());
    let diagnostics = generator.diagnostics();

    assert_eq!(report.units.len(), 1);
    assert_eq!(report.units[0].output_key, "ProtoTest.Outer.Inner.g.cs");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].rule, RuleId::NestedParentNotPartial);
    assert_eq!(diagnostics[0].location, Location::new("Outer.cs", 7, 5));
}

#[test]
fn Generator___nested_two_levels___wraps_in_declared_kinds() {
    let mut outer = partial_class("Outer");
    let mut middle = partial_class("Middle");
    middle.kind = TypeKind::Struct;
    let mut inner = root_class("Inner", vec![auto_property("Id", int())]);
    inner.is_record = true;
    middle.nested_types.push(inner);
    outer.nested_types.push(middle);

    let report = generate(vec![outer]);

    let text = &report.units[0].text;
    assert!(text.contains("partial class Outer\n{\n    partial struct Middle\n    {\n        partial record class Inner\n"));
    assert_eq!(text.matches("partial ").count(), 3);
}

#[test]
fn Generator___failing_root___isolated_from_others() {
    let mut broken = root_class("Color", vec![auto_property("Id", int())]);
    broken.kind = TypeKind::Enum;
    let report = generate(vec![
        broken,
        root_class("Entity", vec![auto_property("Id", int())]),
    ]);

    assert_eq!(report.units.len(), 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].root, "Test.Color");
    assert!(matches!(
        report.failures[0].error,
        GeneratorError::InvalidGraph(_)
    ));
    assert!(!report.was_cancelled());
}

#[test]
fn Generator___cancelled___no_units_and_cancelled_failures() {
    let graph = graph(vec![
        root_class("First", vec![auto_property("Id", int())]),
        root_class("Second", vec![auto_property("Id", int())]),
    ]);
    let generator = Generator::new(&graph, GeneratorConfig::default()).unwrap();
    let handle = CancellationHandle::new();
    handle.cancel();

    let report = generator.generate(&handle.token());

    assert!(report.units.is_empty());
    assert_eq!(report.failures.len(), 2);
    assert!(report.was_cancelled());
}

#[test]
fn Generator___parallel_and_sequential___identical_units() {
    let types: Vec<TypeDecl> = (0..24)
        .map(|index| {
            root_class(
                &format!("Entity{index}"),
                vec![
                    auto_property("Id", int()),
                    auto_property("Items", list_of(int())),
                ],
            )
        })
        .collect();
    let graph = graph(types);
    let mut sequential = GeneratorConfig::default();
    sequential.generator.parallel = false;
    let mut pooled = GeneratorConfig::default();
    pooled.generator.worker_threads = Some(2);

    let parallel_units = Generator::new(&graph, GeneratorConfig::default())
        .unwrap()
        .generate(&CancellationToken::none())
        .units;
    let sequential_units = Generator::new(&graph, sequential)
        .unwrap()
        .generate(&CancellationToken::none())
        .units;
    let pooled_units = Generator::new(&graph, pooled)
        .unwrap()
        .generate(&CancellationToken::none())
        .units;

    assert_eq!(parallel_units.len(), 24);
    assert_eq!(parallel_units, sequential_units);
    assert_eq!(parallel_units, pooled_units);
    assert_eq!(parallel_units[3].output_key, "ProtoTest.Entity3.g.cs");
}

#[test]
fn Generator___repeated_runs___identical_output() {
    let graph = graph(vec![root_class(
        "Entity",
        vec![
            with_attribute(auto_property("Key", int()), member(2)),
            auto_property("Id", int()),
            auto_property("Name", string()),
        ],
    )]);
    let generator = Generator::new(&graph, GeneratorConfig::default()).unwrap();

    let first = generator.generate(&CancellationToken::none());
    let second = generator.generate(&CancellationToken::none());

    assert_eq!(first.units, second.units);
    assert!(first.units[0].text.contains("ProtoMember(1)]\n    private int ProtoId"));
    assert!(first.units[0].text.contains("ProtoMember(3)]\n    private string ProtoName"));
}

#[test]
fn Generator___new___rejects_invalid_config() {
    let graph = graph(vec![]);
    let mut config = GeneratorConfig::default();
    config.generator.output_extension = "cs".to_string();

    assert!(matches!(
        Generator::new(&graph, config),
        Err(GeneratorError::ConfigError(_))
    ));
}

#[test]
fn Generator___roots___document_order() {
    let mut outer = root_class("Outer", vec![]);
    outer.nested_types.push(root_class("Inner", vec![]));
    let graph = graph(vec![outer, partial_class("Plain"), root_class("Last", vec![])]);
    let generator = Generator::new(&graph, GeneratorConfig::default()).unwrap();

    let names: Vec<&str> = generator
        .roots()
        .iter()
        .map(|node| node.qualified_name.as_str())
        .collect();

    assert_eq!(names, vec!["Test.Outer", "Test.Outer.Inner", "Test.Last"]);
}
