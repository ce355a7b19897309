//! Conversion errors.

use crate::MAX_MAGNITUDE;

/// Errors from number-to-words conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertError {
    /// The absolute value exceeds [`MAX_MAGNITUDE`].
    OutOfRange { value: i128 },
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { value } => {
                write!(
                    f,
                    "number out of range: {value} (max magnitude {MAX_MAGNITUDE})"
                )
            }
        }
    }
}

impl std::error::Error for ConvertError {}
