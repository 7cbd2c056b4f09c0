#![allow(non_snake_case)]

use super::*;
use protoshadow_codegen::RuleId;
use protoshadow_core::Location;

fn sample() -> Vec<Diagnostic> {
    vec![
        Diagnostic::new(
            RuleId::MissingContract,
            &Location::new("Order.cs", 4, 9),
            "Customer is not a partial contract type",
        ),
        Diagnostic::new(
            RuleId::DuplicateTag,
            &Location::new("Order.cs", 9, 9),
            "tag 2 is already claimed",
        ),
    ]
}

#[test]
fn render___text___one_line_per_diagnostic_and_summary() {
    let text = render(&sample(), OutputFormat::Text).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Order.cs(4,9): error Proto01:"));
    assert!(lines[1].starts_with("Order.cs(9,9): warning Proto05:"));
    assert_eq!(lines[2], "2 diagnostic(s), 1 error(s)");
}

#[test]
fn render___text_without_diagnostics___summary_only() {
    let text = render(&[], OutputFormat::Text).unwrap();

    assert_eq!(text, "0 diagnostic(s), 0 error(s)");
}

#[test]
fn render___json___rule_codes_and_severities() {
    let json = render(&sample(), OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value[0]["rule"], "Proto01");
    assert_eq!(value[0]["severity"], "error");
    assert_eq!(value[0]["location"]["line"], 4);
    assert_eq!(value[1]["rule"], "Proto05");
    assert_eq!(value[1]["severity"], "warning");
}
