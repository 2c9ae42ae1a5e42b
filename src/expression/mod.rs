//! Fluent expression builders over a single subject.

mod string;
mod unary;

pub use unary::{that, that_opt, Expression, UnaryExpr, UnaryExpression};
