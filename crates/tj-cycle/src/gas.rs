//! Calorically perfect gas properties.

use crate::error::CycleError;
use tj_core::numeric::{ensure_finite, ensure_positive};

/// Constant specific heat and heat-capacity ratio for one side of the cycle.
///
/// The cold side (compressor) and hot side (turbine, nozzle) carry separate
/// sets because combustion products differ from air.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GasProperties {
    gamma: f64,
    cp: f64,
}

impl GasProperties {
    /// Create a gas property set.
    ///
    /// # Arguments
    /// * `gamma` - Heat capacity ratio, must be > 1
    /// * `cp` - Specific heat at constant pressure (J/(kg·K)), must be > 0
    ///
    /// # Errors
    /// Returns error if either value is out of physical bounds.
    pub fn new(gamma: f64, cp: f64) -> Result<Self, CycleError> {
        ensure_finite(gamma, "heat capacity ratio")?;
        if gamma <= 1.0 {
            return Err(CycleError::OutOfRange {
                what: "heat capacity ratio",
                value: gamma,
            });
        }
        let cp = ensure_positive(cp, "specific heat")?;
        Ok(Self { gamma, cp })
    }

    /// Air entering the compressor: γ = 1.4, cp = 1004 J/(kg·K).
    pub fn cold_air() -> Self {
        Self {
            gamma: 1.4,
            cp: 1004.0,
        }
    }

    /// Combustion products: γ = 1.33, cp = 1150 J/(kg·K).
    pub fn hot_gas() -> Self {
        Self {
            gamma: 1.33,
            cp: 1150.0,
        }
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn cp(&self) -> f64 {
        self.cp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_sets() {
        assert_eq!(GasProperties::cold_air().gamma(), 1.4);
        assert_eq!(GasProperties::cold_air().cp(), 1004.0);
        assert_eq!(GasProperties::hot_gas().gamma(), 1.33);
        assert_eq!(GasProperties::hot_gas().cp(), 1150.0);
    }

    #[test]
    fn rejects_gamma_not_above_one() {
        assert!(GasProperties::new(1.0, 1004.0).is_err());
        assert!(GasProperties::new(0.9, 1004.0).is_err());
        assert!(GasProperties::new(f64::NAN, 1004.0).is_err());
    }

    #[test]
    fn rejects_non_positive_cp() {
        assert!(GasProperties::new(1.4, 0.0).is_err());
        assert!(GasProperties::new(1.4, -5.0).is_err());
    }
}
