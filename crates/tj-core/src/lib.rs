//! tj-core: stable foundation for the turbojet toolkit.
//!
//! Contains:
//! - units (uom SI types + constructors + reference constants)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::TjError;
pub use numeric::*;
pub use units::*;
