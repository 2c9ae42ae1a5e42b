//! Fluent expression evaluation and precondition assertions.
//!
//! Callers build a chain of named checks against a subject value, then
//! either evaluate the chain into a tree of pass/fail/skip results with
//! expected/actual/hint rationales, or collapse it into a precondition that
//! hands back the subject on success:
//!
//! ```
//! use avow::{require, that};
//!
//! let title = require(that("Instrumenting Rust").is_not_null().is_populated())?;
//! assert_eq!(title, "Instrumenting Rust");
//! # Ok::<(), avow::PreconditionError>(())
//! ```
//!
//! Checks run in the order they are chained, with one exception: the
//! `is_not_null` check always runs first, so that an absent subject fails
//! for the right reason instead of cascading through every later check.
//! Once any check fails, the remaining checks are recorded as skipped
//! rather than executed:
//!
//! ```
//! use avow::{that_opt, EvalState};
//!
//! let result = that_opt::<String>(None).is_populated().is_not_null().evaluate();
//!
//! assert_eq!(result.children()[0].name(), "is_not_null");
//! assert_eq!(result.children()[0].state(), EvalState::Failed);
//! assert_eq!(result.children()[1].state(), EvalState::Skipped);
//! ```

pub mod assertion;
pub mod domain;
pub mod error;
pub mod eval;
pub mod expression;

// Re-exports
pub use assertion::{render, require, require_with, verify, verify_with, PreconditionError};
pub use error::{Error, Result};
pub use eval::{EvalState, Evaluated, Evaluation, EvaluationChain, Rationale};
pub use expression::{that, that_opt, Expression, UnaryExpr, UnaryExpression};
