//! Error types for sizing input construction.

use thiserror::Error;
use tj_core::error::TjError;

/// Precondition violations for [`crate::SizingInputs`].
///
/// Exceeding the tip speed limit is not an error; it is reported through
/// [`crate::TipSpeedVerdict::StructuralFailure`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SizingError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Value out of range for {what}: {value}")]
    OutOfRange { what: &'static str, value: f64 },

    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

impl From<TjError> for SizingError {
    fn from(e: TjError) -> Self {
        match e {
            TjError::NonFinite { what, value } => SizingError::NonFinite { what, value },
            TjError::OutOfRange { what, value } => SizingError::OutOfRange { what, value },
            TjError::InvalidArg { what } => SizingError::InvalidArg { what },
        }
    }
}

impl From<SizingError> for TjError {
    fn from(e: SizingError) -> Self {
        match e {
            SizingError::InvalidArg { what } => TjError::InvalidArg { what },
            SizingError::OutOfRange { what, value } => TjError::OutOfRange { what, value },
            SizingError::NonFinite { what, value } => TjError::NonFinite { what, value },
        }
    }
}
