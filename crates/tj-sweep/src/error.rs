//! Sweep errors.

use thiserror::Error;
use tj_cycle::CycleError;

/// Errors in sweep definition or execution.
///
/// Infeasible operating points are not errors; they are skipped and listed in
/// [`crate::CycleSeries::skipped`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SweepError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid design point {index} (pressure ratio {pressure_ratio}): {source}")]
    InvalidPoint {
        index: usize,
        pressure_ratio: f64,
        #[source]
        source: CycleError,
    },

    #[error("Invalid turbine inlet temperature {value} K: {source}")]
    InvalidTemperature {
        value: f64,
        #[source]
        source: CycleError,
    },
}

pub type SweepResult<T> = Result<T, SweepError>;
