//! Precondition layer: turn a failed evaluation into an error value.

mod message;
mod require;

pub use message::render;
pub use require::{require, require_with, verify, verify_with, PreconditionError};
