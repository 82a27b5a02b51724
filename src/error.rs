use std::collections::TryReserveError;
use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A node or result cell could not be allocated. The structure that was being modified is
    /// left as it was before the call.
    #[error("allocation failed: {0}")]
    Alloc(#[from] TryReserveError),

    #[error("radius must be a non-negative number, got {0}")]
    InvalidRadius(f64),

    #[error("range lower bound is greater than its upper bound")]
    InvertedRange,

    #[error("got {points} points but {values} values")]
    LengthMismatch { points: usize, values: usize },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed trip on line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

impl Error {
    /// Whether the caller broke a precondition, as opposed to running out of memory or reading
    /// bad input.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::InvalidRadius(_) | Self::InvertedRange | Self::LengthMismatch { .. }
        )
    }
}

/// Ball queries take the radius as given by the caller; reject anything that is not `>= 0`.
pub(crate) fn check_radius(radius: f64) -> Result<()> {
    if radius >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidRadius(radius))
    }
}
