//! The evaluation chain: named checks, nullity-first ordering and
//! skip-after-failure semantics.

use std::fmt;

use tracing::debug;

use super::result::{EvalState, Evaluated, Rationale};

type Predicate<'a, T> = Box<dyn Fn(Option<&T>) -> bool + 'a>;
type Formatter<'a, T> = Box<dyn Fn(Option<&T>) -> String + 'a>;

/// Renders a possibly absent subject for rationale text.
pub fn stringify<T: fmt::Debug>(subject: Option<&T>) -> String {
    match subject {
        Some(value) => format!("{value:?}"),
        None => "(none)".to_string(),
    }
}

/// A single named check against a subject.
///
/// The nullability flag states whether the test tolerates an absent subject:
/// a non-nullable evaluation fails an absent subject without the predicate
/// ever being invoked.
pub struct Evaluation<'a, T> {
    name: String,
    nullable: bool,
    test: Predicate<'a, T>,
    expected: Formatter<'a, T>,
    actual: Formatter<'a, T>,
    hint: Option<Formatter<'a, T>>,
}

impl<'a, T: fmt::Debug + 'a> Evaluation<'a, T> {
    /// Creates an evaluation whose test assumes a present subject.
    pub fn new(name: impl Into<String>, test: impl Fn(&T) -> bool + 'a) -> Self {
        Self::from_parts(
            name.into(),
            false,
            Box::new(move |subject: Option<&T>| subject.map_or(false, |value| test(value))),
        )
    }

    /// Creates an evaluation whose test may receive an absent subject.
    pub fn nullable(name: impl Into<String>, test: impl Fn(Option<&T>) -> bool + 'a) -> Self {
        Self::from_parts(name.into(), true, Box::new(test))
    }

    fn from_parts(name: String, nullable: bool, test: Predicate<'a, T>) -> Self {
        Self {
            name,
            nullable,
            test,
            expected: Box::new(|_| "<not set>".to_string()),
            actual: Box::new(|subject| stringify(subject)),
            hint: None,
        }
    }

    pub fn expected(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.expected = Box::new(move |_| text.clone());
        self
    }

    pub fn expected_with(mut self, formatter: impl Fn(Option<&T>) -> String + 'a) -> Self {
        self.expected = Box::new(formatter);
        self
    }

    pub fn actual(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.actual = Box::new(move |_| text.clone());
        self
    }

    pub fn actual_with(mut self, formatter: impl Fn(Option<&T>) -> String + 'a) -> Self {
        self.actual = Box::new(formatter);
        self
    }

    pub fn hint(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.hint = Some(Box::new(move |_| text.clone()));
        self
    }

    pub fn hint_with(mut self, formatter: impl Fn(Option<&T>) -> String + 'a) -> Self {
        self.hint = Some(Box::new(formatter));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    fn evaluate(&self, subject: Option<&T>) -> Evaluated {
        let satisfied = if subject.is_none() && !self.nullable {
            false
        } else {
            (self.test)(subject)
        };

        let state = if satisfied {
            EvalState::Passed
        } else {
            EvalState::Failed
        };
        let hint = self.hint.as_ref().map(|hint| hint(subject));
        let rationale = Rationale::new((self.expected)(subject), (self.actual)(subject), hint);

        Evaluated::leaf(self.name.clone(), state, rationale)
    }

    /// Records the evaluation as skipped without performing it.
    fn skip(&self) -> Evaluated {
        Evaluated::leaf(self.name.clone(), EvalState::Skipped, Rationale::skipped())
    }
}

impl<T> fmt::Debug for Evaluation<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Evaluation")
            .field("name", &self.name)
            .field("nullable", &self.nullable)
            .finish()
    }
}

/// An ordered group of evaluations aggregated into one result.
///
/// The chain is a two-bucket structure: one optional slot for the nullity
/// check plus one ordered list for everything else. The nullity check is
/// always evaluated first regardless of when it was added, since every
/// non-nullable check is meaningless against an absent subject.
pub struct EvaluationChain<'a, T> {
    name: String,
    nullity: Option<Evaluation<'a, T>>,
    checks: Vec<Evaluation<'a, T>>,
}

impl<'a, T: fmt::Debug + 'a> EvaluationChain<'a, T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nullity: None,
            checks: Vec::new(),
        }
    }

    /// Adds a check to the end of the chain.
    pub fn append(&mut self, evaluation: Evaluation<'a, T>) {
        self.checks.push(evaluation);
    }

    /// Fills the nullity slot. A chain holds at most one nullity check; a
    /// second call replaces the first.
    pub fn set_nullity(&mut self, evaluation: Evaluation<'a, T>) {
        self.nullity = Some(evaluation);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.checks.len() + usize::from(self.nullity.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Runs the checks in effective order: nullity first, then insertion
    /// order. Once a check fails, every remaining check is recorded as
    /// skipped rather than executed. When `skipped` is true the whole
    /// compound is recorded as skipped and nothing is executed.
    pub fn evaluate(&self, subject: Option<&T>, skipped: bool) -> Evaluated {
        let mut children = Vec::with_capacity(self.len());
        let mut failed = false;

        for evaluation in self.nullity.iter().chain(self.checks.iter()) {
            if skipped || failed {
                children.push(evaluation.skip());
                continue;
            }

            let result = evaluation.evaluate(subject);
            debug!(name = %evaluation.name(), state = %result.state(), "check evaluated");
            failed = result.is_failed();
            children.push(result);
        }

        let state = if skipped {
            EvalState::Skipped
        } else if failed {
            EvalState::Failed
        } else {
            EvalState::Passed
        };
        debug!(name = %self.name, state = %state, "chain evaluated");

        Evaluated::compound(self.name.clone(), state, children)
    }
}

impl<T> fmt::Debug for EvaluationChain<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvaluationChain")
            .field("name", &self.name)
            .field("nullity", &self.nullity)
            .field("checks", &self.checks)
            .finish()
    }
}
