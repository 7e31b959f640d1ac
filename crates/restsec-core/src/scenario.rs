//! Scripted scenarios: an ordered list of steps with a canned outcome

use serde::Serialize;

use crate::error::{Error, Result};
use crate::tone::Tone;

/// A scripted case the simulators reveal one step at a time.
///
/// Steps are totally ordered; step `i` is only shown once every step
/// before it is.
#[derive(Debug, Serialize)]
pub struct ScenarioCase<S: 'static> {
    pub id: &'static str,
    pub label: &'static str,
    pub tone: Tone,
    pub steps: &'static [S],
    pub result: &'static str,
}

impl<S: 'static> ScenarioCase<S> {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The first `revealed` steps, clamped to the step count.
    pub fn revealed(&self, revealed: usize) -> &'static [S] {
        &self.steps[..revealed.min(self.steps.len())]
    }
}

/// Look up a case by id in one of the scenario tables.
pub fn find<'a, T>(
    table: &'a [T],
    kind: &'static str,
    id: &str,
    id_of: impl Fn(&T) -> &str,
) -> Result<&'a T> {
    table
        .iter()
        .find(|item| id_of(item) == id)
        .ok_or_else(|| Error::unknown(kind, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    static STEPS: [u8; 3] = [1, 2, 3];

    fn case() -> ScenarioCase<u8> {
        ScenarioCase {
            id: "demo",
            label: "Demo",
            tone: Tone::Slate,
            steps: &STEPS,
            result: "done",
        }
    }

    #[test]
    fn test_revealed_prefix_is_clamped() {
        let c = case();
        assert!(c.revealed(0).is_empty());
        assert_eq!(c.revealed(2), &[1, 2]);
        assert_eq!(c.revealed(10), &[1, 2, 3]);
    }

    #[test]
    fn test_find_reports_unknown_id() {
        let table = [case()];
        assert!(find(&table, "demo case", "demo", |c| c.id).is_ok());
        let err = find(&table, "demo case", "other", |c| c.id).unwrap_err();
        assert_eq!(err.to_string(), "Unknown demo case: other");
    }
}
