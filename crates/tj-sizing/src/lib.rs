//! tj-sizing: inverse sizing of the turbojet rotor.
//!
//! Given the specific work a compressor must absorb and the rotor diameter
//! the package allows, computes the tip speed and shaft speed the rotor has
//! to run at and checks the tip speed against a structural limit.

pub mod error;
pub mod solver;

// Re-exports for public API
pub use error::SizingError;
pub use solver::{
    DEFAULT_MAX_TIP_SPEED_MPS, DEFAULT_ROTOR_DIAMETER_M, DEFAULT_WORK_FACTOR, SizingInputs,
    SizingResult, TipSpeedVerdict, solve_sizing,
};
