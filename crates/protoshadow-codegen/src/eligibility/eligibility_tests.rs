#![allow(non_snake_case)]

use super::*;
use crate::test_support::*;
use protoshadow_core::{Accessor, AttributeValue, CancellationHandle};

fn verdict(property: PropertyDecl) -> PropertyVerdict {
    evaluate_property(&graph(vec![]), &property, &AttributeVocabulary::default())
}

// evaluate_property tests

#[test]
fn evaluate_property___auto_property___generates_plain() {
    assert_eq!(
        verdict(auto_property("Id", int())),
        PropertyVerdict::Generate {
            shape: ShapeKind::Plain,
            is_init_only: false
        }
    );
}

#[test]
fn evaluate_property___init_only_setter___generates_init_only() {
    assert_eq!(
        verdict(init_property("Id", int())),
        PropertyVerdict::Generate {
            shape: ShapeKind::Plain,
            is_init_only: true
        }
    );
}

#[test]
fn evaluate_property___static___static() {
    let mut property = auto_property("Count", int());
    property.is_static = true;

    assert_eq!(verdict(property), PropertyVerdict::Static);
}

#[test]
fn evaluate_property___manual_tag___skipped_with_tag() {
    let property = with_attribute(auto_property("Id", int()), member(1));

    assert_eq!(verdict(property), PropertyVerdict::Skipped { tag: Some(1) });
}

#[test]
fn evaluate_property___ignore_marker___skipped_without_tag() {
    let property = with_attribute(auto_property("Cache", int()), ignore());

    assert_eq!(verdict(property), PropertyVerdict::Skipped { tag: None });
}

#[test]
fn evaluate_property___manual_tag_on_non_auto___skipped() {
    let property = with_attribute(computed_property("Total", int()), member(4));

    assert_eq!(verdict(property), PropertyVerdict::Skipped { tag: Some(4) });
}

#[test]
fn evaluate_property___expression_bodied___not_auto_implemented() {
    assert_eq!(
        verdict(computed_property("Total", int())),
        PropertyVerdict::NotAutoImplemented
    );
}

#[test]
fn evaluate_property___get_only___missing_accessor() {
    assert_eq!(
        verdict(get_only_property("Id", int())),
        PropertyVerdict::MissingAccessor
    );
}

#[test]
fn evaluate_property___read_only_setter___missing_accessor() {
    let mut property = auto_property("Id", int());
    property.setter = Some(Accessor {
        is_read_only: true,
        ..Accessor::default()
    });

    assert_eq!(verdict(property), PropertyVerdict::MissingAccessor);
}

#[test]
fn evaluate_property___set_only___missing_accessor() {
    let mut property = auto_property("Id", int());
    property.getter = None;

    assert_eq!(verdict(property), PropertyVerdict::MissingAccessor);
}

#[test]
fn evaluate_property___type_without_contract___missing_contract() {
    let property = auto_property("Address", class_ref("Test.Address"));

    assert_eq!(
        verdict(property),
        PropertyVerdict::MissingContract {
            type_name: "Test.Address".to_string()
        }
    );
}

#[test]
fn evaluate_property___collection___generates_helper_shape() {
    assert_eq!(
        verdict(auto_property("Items", list_of(int()))),
        PropertyVerdict::Generate {
            shape: ShapeKind::ConcreteCollectionHelper,
            is_init_only: false
        }
    );
}

#[test]
fn PropertyVerdict___is_non_generating___only_for_structural_misses() {
    assert!(PropertyVerdict::NotAutoImplemented.is_non_generating());
    assert!(PropertyVerdict::MissingAccessor.is_non_generating());
    assert!(!PropertyVerdict::Static.is_non_generating());
    assert!(!PropertyVerdict::Skipped { tag: None }.is_non_generating());
}

// analyze_root tests

#[test]
fn analyze_root___non_root___none() {
    let graph = graph(vec![partial_class("Entity")]);
    let node = graph.lookup("Test.Entity").unwrap();

    let analysis = analyze_root(
        &graph,
        node,
        &AttributeVocabulary::default(),
        &CancellationToken::none(),
    )
    .unwrap();

    assert!(analysis.is_none());
}

#[test]
fn analyze_root___collects_claims_and_candidates_in_order() {
    let graph = graph(vec![root_class(
        "Entity",
        vec![
            with_attribute(auto_property("Id", int()), member(1)),
            auto_property("Value", string()),
            computed_property("Total", int()),
            with_attribute(auto_property("Legacy", int()), member(5)),
            auto_property("Items", list_of(int())),
        ],
    )]);
    let node = graph.lookup("Test.Entity").unwrap();

    let analysis = analyze_root(
        &graph,
        node,
        &AttributeVocabulary::default(),
        &CancellationToken::none(),
    )
    .unwrap()
    .unwrap();

    assert_eq!(analysis.claimed_tags, BTreeSet::from([1, 5]));
    let names: Vec<&str> = analysis
        .candidates
        .iter()
        .map(|c| c.property.name.as_str())
        .collect();
    assert_eq!(names, vec!["Value", "Items"]);
    assert_eq!(
        analysis.candidates[1].shape,
        ShapeKind::ConcreteCollectionHelper
    );
    assert_eq!(analysis.custom_attribute_type, None);
}

#[test]
fn analyze_root___options_marker___custom_attribute_type() {
    let mut entity = root_class("Entity", vec![auto_property("Id", int())]);
    entity.attributes.push(options(AttributeValue::Type(
        "Acme.WireMemberAttribute".to_string(),
    )));
    let graph = graph(vec![entity]);
    let node = graph.lookup("Test.Entity").unwrap();

    let analysis = analyze_root(
        &graph,
        node,
        &AttributeVocabulary::default(),
        &CancellationToken::none(),
    )
    .unwrap()
    .unwrap();

    assert_eq!(
        analysis.custom_attribute_type.as_deref(),
        Some("Acme.WireMemberAttribute")
    );
}

#[test]
fn analyze_root___cancelled___returns_cancelled() {
    let graph = graph(vec![root_class("Entity", vec![auto_property("Id", int())])]);
    let node = graph.lookup("Test.Entity").unwrap();
    let handle = CancellationHandle::new();
    handle.cancel();

    let result = analyze_root(
        &graph,
        node,
        &AttributeVocabulary::default(),
        &handle.token(),
    );

    assert!(matches!(result, Err(e) if e.is_cancellation()));
}
