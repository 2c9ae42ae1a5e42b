use serde::{Deserialize, Serialize};
use strum::Display;

/// Terminal state of an evaluated check.
///
/// A check is conceptually pending until it is evaluated; only terminal
/// states are ever materialized in results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EvalState {
    Passed,
    Failed,
    Skipped,
}

/// The expected/actual/hint text explaining a check's outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rationale {
    expected: String,
    actual: String,
    hint: Option<String>,
}

const SKIPPED_VALUE: &str = "(skipped)";

impl Rationale {
    pub fn new(
        expected: impl Into<String>,
        actual: impl Into<String>,
        hint: Option<String>,
    ) -> Self {
        Self {
            expected: expected.into(),
            actual: actual.into(),
            hint,
        }
    }

    /// The rationale recorded for checks that were never executed.
    pub fn skipped() -> Self {
        Self::new(SKIPPED_VALUE, SKIPPED_VALUE, None)
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }

    pub fn actual(&self) -> &str {
        &self.actual
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }
}

/// A produced evaluation result: name, state, rationale and, for compound
/// evaluations, the ordered results of the children.
///
/// Produced fresh on every `evaluate()` call and immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluated {
    name: String,
    state: EvalState,
    rationale: Rationale,
    children: Vec<Evaluated>,
}

impl Evaluated {
    pub(crate) fn leaf(name: String, state: EvalState, rationale: Rationale) -> Self {
        Self {
            name,
            state,
            rationale,
            children: Vec::new(),
        }
    }

    pub(crate) fn compound(name: String, state: EvalState, children: Vec<Evaluated>) -> Self {
        let rationale = if state == EvalState::Skipped {
            Rationale::skipped()
        } else {
            let (passed, failed, skipped) = count_states(&children);
            Rationale::new(
                "All children must pass",
                format!("Passed: {passed}, Failed: {failed}, Skipped: {skipped}"),
                None,
            )
        };

        Self {
            name,
            state,
            rationale,
            children,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> EvalState {
        self.state
    }

    pub fn rationale(&self) -> &Rationale {
        &self.rationale
    }

    pub fn children(&self) -> &[Evaluated] {
        &self.children
    }

    pub fn is_passed(&self) -> bool {
        self.state == EvalState::Passed
    }

    pub fn is_failed(&self) -> bool {
        self.state == EvalState::Failed
    }

    pub fn is_skipped(&self) -> bool {
        self.state == EvalState::Skipped
    }

    /// Number of direct children that passed.
    pub fn passed(&self) -> usize {
        self.count(EvalState::Passed)
    }

    /// Number of direct children that failed.
    pub fn failed(&self) -> usize {
        self.count(EvalState::Failed)
    }

    /// Number of direct children that were skipped.
    pub fn skipped(&self) -> usize {
        self.count(EvalState::Skipped)
    }

    pub fn total(&self) -> usize {
        self.children.len()
    }

    fn count(&self, state: EvalState) -> usize {
        self.children
            .iter()
            .filter(|child| child.state == state)
            .count()
    }
}

fn count_states(children: &[Evaluated]) -> (usize, usize, usize) {
    let mut passed = 0;
    let mut failed = 0;
    let mut skipped = 0;

    for child in children {
        match child.state {
            EvalState::Passed => passed += 1,
            EvalState::Failed => failed += 1,
            EvalState::Skipped => skipped += 1,
        }
    }

    (passed, failed, skipped)
}
