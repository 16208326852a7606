//! JSON shape of the serializable values.
#![expect(clippy::expect_used, reason = "tests assert JSON conversion succeeds")]

use scenario_diff::{build_scenario_index, diff_scenarios, parse};
use serde_json::json;

#[test]
fn document_serializes_with_step_spelling() {
    let doc = parse("Feature: Cart\nScenario: Add\n  given an item");
    let value = serde_json::to_value(&doc).expect("document should serialize");
    assert_eq!(
        value,
        json!({
            "feature_name": "Cart",
            "background": null,
            "scenarios": [{
                "title": "Add",
                "steps": [{ "kind": "Given", "keyword": "given", "text": "an item" }],
            }],
            "rules": [],
        })
    );
}

#[test]
fn index_serializes_in_first_appearance_order() {
    let index = build_scenario_index("Scenario: B\n  Given b\nScenario: A\n  Given a\nScenario: B");
    let text = serde_json::to_string(&index).expect("index should serialize");
    assert_eq!(
        text,
        r#"{"scenarios":{"B":"","A":"Given a"},"ambiguous":["B"]}"#
    );
}

#[test]
fn diff_serializes_all_lists() {
    let diff = diff_scenarios("Scenario: A\nScenario: B", "Scenario: B\n  Given x\nScenario: C");
    let value = serde_json::to_value(&diff).expect("diff should serialize");
    assert_eq!(
        value,
        json!({
            "added": ["C"],
            "modified": ["B"],
            "removed": ["A"],
            "ambiguous": [],
        })
    );
}
