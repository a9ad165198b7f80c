use thiserror::Error;
use tl_core::TlError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] TlError),

    #[error("{what} length {got} does not match lattice length {expected}")]
    LengthMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },
}

pub type SimResult<T> = Result<T, SimError>;
