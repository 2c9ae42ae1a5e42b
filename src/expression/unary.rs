//! The fluent builder over a single subject.

use std::any::{type_name, TypeId};
use std::fmt;
use std::sync::Arc;

use crate::eval::{stringify, Evaluated, Evaluation, EvaluationChain};

const PREDICATE_SATISFIED: &str = "predicate satisfied";
const PREDICATE_UNSATISFIED: &str = "predicate unsatisfied";

/// An expression that can be evaluated.
pub trait Expression {
    /// Evaluates the expression, producing the result tree.
    fn evaluate(&self) -> Evaluated;
}

/// An expression over a single subject.
pub trait UnaryExpression<T>: Expression {
    /// The subject under evaluation, if present.
    fn subject(&self) -> Option<&T>;

    /// Consumes the expression, yielding the subject.
    fn into_subject(self) -> Option<T>;
}

/// A fluent chain of named checks against one subject.
///
/// Checks are evaluated in the order they are chained, with one exception:
/// [`UnaryExpr::is_not_null`] is always evaluated first, because every
/// non-nullable check would otherwise fail against an absent subject for the
/// wrong reason.
pub struct UnaryExpr<'a, T> {
    subject: Option<T>,
    chain: EvaluationChain<'a, T>,
}

/// Starts an expression over a present subject.
pub fn that<'a, T: fmt::Debug + 'a>(subject: T) -> UnaryExpr<'a, T> {
    UnaryExpr::new(Some(subject))
}

/// Starts an expression over a possibly absent subject.
pub fn that_opt<'a, T: fmt::Debug + 'a>(subject: Option<T>) -> UnaryExpr<'a, T> {
    UnaryExpr::new(subject)
}

impl<'a, T: fmt::Debug + 'a> UnaryExpr<'a, T> {
    fn new(subject: Option<T>) -> Self {
        let name = format!("subject[{}] evaluation", stringify(subject.as_ref()));
        Self {
            subject,
            chain: EvaluationChain::new(name),
        }
    }

    pub(crate) fn check(mut self, evaluation: Evaluation<'a, T>) -> Self {
        self.chain.append(evaluation);
        self
    }

    /// Checks that the subject is present.
    ///
    /// This check takes precedence over all others: wherever it appears in
    /// the chain, it is evaluated first.
    pub fn is_not_null(mut self) -> Self {
        self.chain.set_nullity(
            Evaluation::nullable("is_not_null", |subject: Option<&T>| subject.is_some())
                .expected("not[(none)]"),
        );
        self
    }

    /// Checks that the subject is absent.
    pub fn is_null(self) -> Self {
        self.check(
            Evaluation::nullable("is_null", |subject: Option<&T>| subject.is_none())
                .expected("(none)"),
        )
    }

    /// Checks that the subject equals `other`. An absent subject never
    /// equals a present value.
    pub fn is_equal_to(self, other: T) -> Self
    where
        T: PartialEq,
    {
        let name = format!("is_equal_to[{other:?}]");
        let expected = format!("{other:?}");
        let hint = format!("subject should equal {other:?}");
        self.check(
            Evaluation::nullable(name, move |subject: Option<&T>| {
                subject.map_or(false, |value| *value == other)
            })
            .expected(expected)
            .hint(hint),
        )
    }

    /// Checks that the subject does not equal `other`. An absent subject is
    /// never equal, so it passes.
    pub fn is_not_equal_to(self, other: T) -> Self
    where
        T: PartialEq,
    {
        let name = format!("is_not_equal_to[{other:?}]");
        let expected = format!("not[{other:?}]");
        self.check(
            Evaluation::nullable(name, move |subject: Option<&T>| {
                subject.map_or(true, |value| *value != other)
            })
            .expected(expected),
        )
    }

    /// Checks that the subject is exactly of type `E`.
    ///
    /// Rust has no subtype relation between concrete types, so this is an
    /// exact `TypeId` comparison.
    pub fn is_type<E: 'static>(self) -> Self
    where
        T: 'static,
    {
        let matches = TypeId::of::<T>() == TypeId::of::<E>();
        self.check(
            Evaluation::new(format!("is_type[{}]", type_name::<E>()), move |_: &T| matches)
                .expected(type_name::<E>())
                .actual_with(|subject: Option<&T>| match subject {
                    Some(_) => type_name::<T>().to_string(),
                    None => "(none)".to_string(),
                })
                .hint(format!("subject should be exactly of type {}", type_name::<E>())),
        )
    }

    /// Checks that the subject is not of type `E`.
    pub fn is_not_type<E: 'static>(self) -> Self
    where
        T: 'static,
    {
        let matches = TypeId::of::<T>() == TypeId::of::<E>();
        self.check(
            Evaluation::new(
                format!("is_not_type[{}]", type_name::<E>()),
                move |_: &T| !matches,
            )
            .expected(format!("not[{}]", type_name::<E>()))
            .actual_with(|subject: Option<&T>| match subject {
                Some(_) => type_name::<T>().to_string(),
                None => "(none)".to_string(),
            }),
        )
    }

    /// Checks that the supplied predicate holds for the subject.
    pub fn satisfies(self, predicate: impl Fn(&T) -> bool + 'a) -> Self {
        let predicate = Arc::new(predicate);
        let probe = Arc::clone(&predicate);
        self.check(
            Evaluation::new("satisfies[predicate]", move |value: &T| (*predicate)(value))
                .expected(PREDICATE_SATISFIED)
                .actual_with(move |subject: Option<&T>| match subject {
                    Some(value) if (*probe)(value) => PREDICATE_SATISFIED.to_string(),
                    Some(_) => PREDICATE_UNSATISFIED.to_string(),
                    None => "(none)".to_string(),
                }),
        )
    }

    /// Checks that the supplied predicate does not hold for the subject.
    pub fn does_not_satisfy(self, predicate: impl Fn(&T) -> bool + 'a) -> Self {
        let predicate = Arc::new(predicate);
        let probe = Arc::clone(&predicate);
        self.check(
            Evaluation::new("does_not_satisfy[predicate]", move |value: &T| {
                !(*predicate)(value)
            })
            .expected(PREDICATE_UNSATISFIED)
            .actual_with(move |subject: Option<&T>| match subject {
                Some(value) if (*probe)(value) => PREDICATE_SATISFIED.to_string(),
                Some(_) => PREDICATE_UNSATISFIED.to_string(),
                None => "(none)".to_string(),
            }),
        )
    }

    /// Checks that the subject's `Display` rendering equals `expected`.
    pub fn displays_as(self, expected: impl Into<String>) -> Self
    where
        T: fmt::Display,
    {
        let expected = expected.into();
        let name = format!("displays_as[{expected}]");
        let want = expected.clone();
        self.check(
            Evaluation::new(name, move |value: &T| value.to_string() == want)
                .expected(expected)
                .actual_with(|subject: Option<&T>| match subject {
                    Some(value) => value.to_string(),
                    None => "(none)".to_string(),
                }),
        )
    }

    /// Evaluates the chain, producing the result tree.
    pub fn evaluate(&self) -> Evaluated {
        self.chain.evaluate(self.subject.as_ref(), false)
    }

    /// The subject under evaluation, if present.
    pub fn subject(&self) -> Option<&T> {
        self.subject.as_ref()
    }
}

impl<'a, T: fmt::Debug + 'a> Expression for UnaryExpr<'a, T> {
    fn evaluate(&self) -> Evaluated {
        UnaryExpr::evaluate(self)
    }
}

impl<'a, T: fmt::Debug + 'a> UnaryExpression<T> for UnaryExpr<'a, T> {
    fn subject(&self) -> Option<&T> {
        self.subject.as_ref()
    }

    fn into_subject(self) -> Option<T> {
        self.subject
    }
}

impl<T: fmt::Debug> fmt::Debug for UnaryExpr<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnaryExpr")
            .field("subject", &self.subject)
            .field("chain", &self.chain)
            .finish()
    }
}
