//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `TlError` as one variant
//! via `#[from]`, so a parameter problem detected in `tl-core` surfaces
//! unchanged at the `run_simulation` boundary.

use thiserror::Error;

/// The top-level error type for `tl-core` and a common base for sub-crates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TlError {
    /// A configuration value is out of its admissible range.  Raised before
    /// the first tick; the simulation never starts.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name:   &'static str,
        reason: String,
    },

    /// A finite pre-generated variate stream ran dry mid-run.
    #[error("random stream exhausted after {consumed} variates")]
    ExhaustedRandomness { consumed: usize },
}

impl TlError {
    /// Shorthand for an [`InvalidParameter`](TlError::InvalidParameter) error.
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        TlError::InvalidParameter { name, reason: reason.into() }
    }
}

/// Shorthand result type for all `tl-*` crates.
pub type TlResult<T> = Result<T, TlError>;
