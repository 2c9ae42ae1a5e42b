//! Precondition terminals: collapse an evaluated expression into the
//! subject or an error value.

use thiserror::Error;
use tracing::debug;

use crate::eval::Evaluated;
use crate::expression::UnaryExpression;

use super::message::render;

const DEFAULT_MESSAGE: &str = "precondition failed";

/// A failed precondition.
///
/// The error kind depends solely on whether the subject under test was
/// absent at failure time.
#[derive(Error, Debug)]
pub enum PreconditionError {
    /// The evaluation failed and the subject was absent.
    #[error("required subject was absent\n{rationale}")]
    NullSubject { rationale: String },

    /// The evaluation failed and the subject was present.
    #[error("required subject did not satisfy its evaluation\n{rationale}")]
    InvalidValue { rationale: String },

    /// The evaluation passed, but there is no subject to hand back. This is
    /// a usage error: chains that legitimately pass without a subject (such
    /// as `is_null()`) should end in [`verify`] instead of [`require`].
    #[error("evaluation passed but no subject is available to return; use verify() for subject-less chains")]
    MissingSubject,
}

/// Evaluates the expression and returns its subject on success.
///
/// On failure the error kind is selected by subject presence:
/// [`PreconditionError::NullSubject`] for an absent subject,
/// [`PreconditionError::InvalidValue`] otherwise. Both embed the rendered
/// rationale for every check in the chain.
///
/// ```
/// use avow::{require, that};
///
/// let title = require(that("An Example Title").is_not_null().is_populated())?;
/// assert_eq!(title, "An Example Title");
/// # Ok::<(), avow::PreconditionError>(())
/// ```
pub fn require<T, E>(expression: E) -> Result<T, PreconditionError>
where
    E: UnaryExpression<T>,
{
    require_with(expression, DEFAULT_MESSAGE)
}

/// Like [`require`], with a caller-supplied message prepended to the
/// rendered rationale.
pub fn require_with<T, E>(expression: E, message: &str) -> Result<T, PreconditionError>
where
    E: UnaryExpression<T>,
{
    let evaluated = expression.evaluate();
    if evaluated.is_failed() {
        return Err(failure(&expression, &evaluated, message));
    }

    expression
        .into_subject()
        .ok_or(PreconditionError::MissingSubject)
}

/// Evaluates the expression, discarding the subject. The terminal for
/// chains that may legitimately pass with an absent subject.
pub fn verify<T, E>(expression: E) -> Result<(), PreconditionError>
where
    E: UnaryExpression<T>,
{
    verify_with(expression, DEFAULT_MESSAGE)
}

/// Like [`verify`], with a caller-supplied message.
pub fn verify_with<T, E>(expression: E, message: &str) -> Result<(), PreconditionError>
where
    E: UnaryExpression<T>,
{
    let evaluated = expression.evaluate();
    if evaluated.is_failed() {
        return Err(failure(&expression, &evaluated, message));
    }

    Ok(())
}

fn failure<T, E>(expression: &E, evaluated: &Evaluated, message: &str) -> PreconditionError
where
    E: UnaryExpression<T>,
{
    let rationale = render(evaluated, message);
    debug!(name = %evaluated.name(), "precondition failed");

    match expression.subject() {
        None => PreconditionError::NullSubject { rationale },
        Some(_) => PreconditionError::InvalidValue { rationale },
    }
}
