//! Free-stream ambient state.

use crate::error::CycleError;
use tj_core::constants::{SEA_LEVEL_PRESSURE_PA, SEA_LEVEL_TEMPERATURE_K};
use tj_core::numeric::ensure_positive;
use tj_core::units::{Pressure, Temperature, kelvin_of, pascal_of};

/// Static temperature and pressure the engine ingests and exhausts to.
///
/// Defaults to ISA sea level. Inlet velocity is neglected, so these are also
/// the compressor-face (station 2) conditions.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AmbientConditions {
    temperature_k: f64,
    pressure_pa: f64,
}

impl AmbientConditions {
    /// # Errors
    /// Returns error if either value is non-finite or not positive.
    pub fn new(temperature: Temperature, pressure: Pressure) -> Result<Self, CycleError> {
        let temperature_k = ensure_positive(kelvin_of(temperature), "ambient temperature")?;
        let pressure_pa = ensure_positive(pascal_of(pressure), "ambient pressure")?;
        Ok(Self {
            temperature_k,
            pressure_pa,
        })
    }

    pub fn sea_level() -> Self {
        Self {
            temperature_k: SEA_LEVEL_TEMPERATURE_K,
            pressure_pa: SEA_LEVEL_PRESSURE_PA,
        }
    }

    pub fn temperature_k(&self) -> f64 {
        self.temperature_k
    }

    pub fn pressure_pa(&self) -> f64 {
        self.pressure_pa
    }
}

impl Default for AmbientConditions {
    fn default() -> Self {
        Self::sea_level()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tj_core::units::{k, pa};

    #[test]
    fn default_is_sea_level() {
        let a = AmbientConditions::default();
        assert_eq!(a.temperature_k(), 288.15);
        assert_eq!(a.pressure_pa(), 101_325.0);
    }

    #[test]
    fn overridable_location() {
        // Roughly 5 km altitude
        let a = AmbientConditions::new(k(255.7), pa(54_048.0)).unwrap();
        assert_eq!(a.temperature_k(), 255.7);
        assert_eq!(a.pressure_pa(), 54_048.0);
    }

    #[test]
    fn rejects_non_physical_state() {
        assert!(AmbientConditions::new(k(0.0), pa(101_325.0)).is_err());
        assert!(AmbientConditions::new(k(288.15), pa(-1.0)).is_err());
        assert!(AmbientConditions::new(k(f64::NAN), pa(101_325.0)).is_err());
    }
}
