use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

// ============================================================================
// Cucumber JSON results (cucumber-js / cucumber-ruby `--format json`)
// ============================================================================

/// Status string a step must carry to count as passing.
pub const PASSED_STATUS: &str = "passed";

/// Element `type` value that marks a scenario (as opposed to a background).
pub const SCENARIO_TYPE: &str = "scenario";

/// One feature file's results.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Feature {
    /// Feature title
    #[serde(default)]
    pub name: String,

    /// Path of the `.feature` file the results came from
    #[serde(default)]
    pub uri: String,

    /// Scenarios and backgrounds. Absent when the formatter emitted none.
    #[serde(default)]
    pub elements: Option<Vec<Element>>,
}

/// A step container: scenario, scenario outline example, or background.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Element {
    /// `"scenario"` or `"background"`
    #[serde(rename = "type", default)]
    pub element_type: Option<String>,

    /// Gherkin keyword as written in the source (`Scenario`, `Background`, ...)
    #[serde(default)]
    pub keyword: Option<String>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub steps: Vec<Step>,
}

/// Step fields are read leniently: a value of the wrong type becomes `None`
/// so one malformed step fails its scenario rather than the whole document.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Step {
    #[serde(default, deserialize_with = "lenient")]
    pub keyword: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,

    /// Missing on malformed output; treated as a failed step.
    #[serde(default, deserialize_with = "lenient")]
    pub result: Option<StepResult>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct StepResult {
    /// `passed`, `failed`, `skipped`, `pending`, `undefined`, ...
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,

    /// Step duration in nanoseconds
    #[serde(default, deserialize_with = "lenient")]
    pub duration: Option<u64>,
}

/// Deserialize any JSON value, keeping it only if it has the expected shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl Element {
    /// Whether this element is a scenario. Backgrounds and untyped elements
    /// are never counted.
    pub fn is_scenario(&self) -> bool {
        self.element_type.as_deref() == Some(SCENARIO_TYPE)
    }
}

impl Step {
    /// Whether the step result status is exactly `passed`.
    pub fn passed(&self) -> bool {
        self.result
            .as_ref()
            .and_then(|r| r.status.as_deref())
            == Some(PASSED_STATUS)
    }
}

impl Feature {
    /// True when the feature carries no `elements` array at all. An empty
    /// array is not the same thing: it is a feature with zero scenarios.
    pub fn is_empty(&self) -> bool {
        self.elements.is_none()
    }
}
