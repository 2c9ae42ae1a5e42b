use thiserror::Error;

use crate::assertion::PreconditionError;
use crate::domain::DomainError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Precondition error: {0}")]
    Precondition(#[from] PreconditionError),
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

pub type Result<T> = std::result::Result<T, Error>;
