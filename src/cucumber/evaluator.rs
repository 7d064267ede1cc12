use crate::cucumber::cucumber_model::{Element, Step};

// ============================================================================
// Scenario evaluation
// ============================================================================

/// A scenario passes when every one of its steps passed.
///
/// Zero steps is a pass. A step without a result (or without a status) is a
/// failure, so malformed output fails the scenario instead of the run.
pub fn scenario_passed(steps: &[Step]) -> bool {
    steps.iter().all(Step::passed)
}

/// Evaluate a scenario element. `None` for backgrounds and anything else
/// that is not a scenario.
pub fn evaluate(element: &Element) -> Option<bool> {
    element
        .is_scenario()
        .then(|| scenario_passed(&element.steps))
}
