//! Thermodynamic station bookkeeping.
//!
//! Stations along the gas path:
//! - 2: compressor inlet (ambient, inlet velocity neglected)
//! - 3: compressor exit
//! - 4: turbine inlet
//! - 5: turbine exit
//! - 8: nozzle exit

/// Temperature and pressure at one station.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct StationState {
    /// Temperature (K)
    pub temperature_k: f64,
    /// Pressure (Pa)
    pub pressure_pa: f64,
}

impl StationState {
    pub fn new(temperature_k: f64, pressure_pa: f64) -> Self {
        Self {
            temperature_k,
            pressure_pa,
        }
    }
}
