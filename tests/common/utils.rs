#![allow(dead_code)]

use serde_json::{Value, json};

/// A scenario element with one step per status.
pub fn scenario(name: &str, statuses: &[&str]) -> Value {
    element("scenario", name, statuses)
}

pub fn background(statuses: &[&str]) -> Value {
    element("background", "", statuses)
}

pub fn element(kind: &str, name: &str, statuses: &[&str]) -> Value {
    let steps: Vec<Value> = statuses
        .iter()
        .map(|s| json!({ "keyword": "Given ", "name": "a step", "result": { "status": s } }))
        .collect();
    json!({ "type": kind, "name": name, "steps": steps })
}

pub fn feature(name: &str, elements: Vec<Value>) -> Value {
    json!({
        "name": name,
        "uri": format!("features/{}.feature", name.to_lowercase().replace(' ', "_")),
        "elements": elements,
    })
}

/// A feature with no `elements` field.
pub fn empty_feature(name: &str) -> Value {
    json!({ "name": name, "uri": "features/empty.feature" })
}

/// Feature A passes its only scenario, feature B fails its only scenario.
pub fn two_feature_doc() -> Value {
    json!([
        feature("Feature A", vec![scenario("a1", &["passed", "passed"])]),
        feature("Feature B", vec![scenario("b1", &["passed", "failed"])]),
    ])
}
