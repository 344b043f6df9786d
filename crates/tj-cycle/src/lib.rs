//! tj-cycle: steady-state single-spool turbojet cycle evaluation.
//!
//! The evaluator walks the gas path station by station:
//! - compressor (isentropic efficiency)
//! - combustor (prescribed turbine inlet temperature, fixed pressure loss)
//! - turbine (work balance with the compressor)
//! - nozzle (ideal expansion to ambient)
//!
//! and returns either [`PerformanceMetrics`] or a typed [`Infeasibility`].
//! All inputs are immutable values passed per call; nothing is cached
//! between evaluations.
//!
//! # Example
//!
//! ```
//! use tj_cycle::{CycleConfig, CycleInputs, CycleResult};
//! use tj_core::units::k;
//!
//! let engine = CycleConfig::reference();
//! let inputs = CycleInputs::new(4.0, k(1300.0)).unwrap();
//!
//! match engine.evaluate(inputs) {
//!     CycleResult::Success(m) => println!("F/mdot = {:.1} N·s/kg", m.specific_thrust),
//!     CycleResult::Infeasible(reason) => println!("infeasible: {reason}"),
//! }
//! ```

pub mod ambient;
pub mod efficiency;
pub mod error;
pub mod evaluator;
pub mod gas;
pub mod outcome;

mod combustor;
mod common;
mod compressor;
mod nozzle;
mod station;
mod turbine;

// Re-exports
pub use ambient::AmbientConditions;
pub use common::COMBUSTOR_PRESSURE_LOSS;
pub use efficiency::{ComponentEfficiencies, JET_FUEL_LHV, TurbineLoss};
pub use error::CycleError;
pub use evaluator::{CycleConfig, CycleInputs, evaluate};
pub use gas::GasProperties;
pub use outcome::{CycleResult, Infeasibility, PerformanceMetrics};
