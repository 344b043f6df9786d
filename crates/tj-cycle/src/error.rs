//! Error types for cycle input construction.

use thiserror::Error;
use tj_core::error::TjError;

/// Errors raised while building cycle inputs or configuration.
///
/// Infeasible operating points are not errors; they are reported through
/// [`crate::CycleResult::Infeasible`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CycleError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Value out of range for {what}: {value}")]
    OutOfRange { what: &'static str, value: f64 },

    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

impl From<TjError> for CycleError {
    fn from(e: TjError) -> Self {
        match e {
            TjError::NonFinite { what, value } => CycleError::NonFinite { what, value },
            TjError::OutOfRange { what, value } => CycleError::OutOfRange { what, value },
            TjError::InvalidArg { what } => CycleError::InvalidArg { what },
        }
    }
}

impl From<CycleError> for TjError {
    fn from(e: CycleError) -> Self {
        match e {
            CycleError::InvalidArg { what } => TjError::InvalidArg { what },
            CycleError::OutOfRange { what, value } => TjError::OutOfRange { what, value },
            CycleError::NonFinite { what, value } => TjError::NonFinite { what, value },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CycleError::OutOfRange {
            what: "pressure ratio",
            value: 0.5,
        };
        assert!(err.to_string().contains("pressure ratio"));
    }

    #[test]
    fn error_conversion() {
        let cycle_err = CycleError::InvalidArg { what: "test" };
        let tj_err: TjError = cycle_err.into();
        assert!(matches!(tj_err, TjError::InvalidArg { .. }));

        let back: CycleError = TjError::NonFinite {
            what: "tit",
            value: f64::NAN,
        }
        .into();
        assert!(matches!(back, CycleError::NonFinite { what: "tit", .. }));
    }
}
