//! Evaluation chain engine: named checks, compound evaluation and the
//! produced result tree.

mod chain;
mod result;

pub use chain::{stringify, Evaluation, EvaluationChain};
pub use result::{EvalState, Evaluated, Rationale};
