//! tj-sweep: design-space exploration around the cycle evaluator.
//!
//! Provides:
//! - sweep definitions (linear / logarithmic sampling)
//! - series collection with infeasible points skipped, never zero-filled
//! - sequential and rayon-parallel execution with identical output
//! - an illustrative thrust-to-weight index for ranking points

pub mod definition;
pub mod error;
pub mod executor;
pub mod weight;

pub use definition::{SweepDefinition, SweepSpacing};
pub use error::{SweepError, SweepResult};
pub use executor::{
    CycleSeries, DesignSpaceSweep, SkippedPoint, collect_series, collect_series_parallel,
};
pub use weight::{thrust_to_weight_index, weight_factor};
