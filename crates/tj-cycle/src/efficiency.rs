//! Component efficiencies and fuel properties.

use crate::error::CycleError;
use tj_core::numeric::{ensure_fraction, ensure_positive};

/// Kerosene-type jet fuel lower heating value (J/kg).
pub const JET_FUEL_LHV: f64 = 43e6;

/// How turbine losses enter the expansion.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TurbineLoss {
    /// Exit pressure follows the actual temperature drop; no separate
    /// turbine efficiency is applied.
    #[default]
    FoldedIntoWorkBalance,
    /// Exit pressure follows the ideal temperature drop, i.e. the actual drop
    /// divided by this isentropic efficiency.
    Isentropic(f64),
}

/// Efficiency factors and fuel heating value for one engine.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComponentEfficiencies {
    compressor: f64,
    combustion: f64,
    turbine: TurbineLoss,
    fuel_lhv: f64,
}

impl ComponentEfficiencies {
    /// Create an efficiency set.
    ///
    /// # Arguments
    /// * `compressor` - Compressor isentropic efficiency (0 < eta <= 1)
    /// * `combustion` - Combustion efficiency (0 < eta <= 1)
    /// * `turbine` - Turbine loss treatment; an isentropic efficiency must be in (0,1]
    /// * `fuel_lhv` - Fuel lower heating value (J/kg), must be positive
    ///
    /// # Errors
    /// Returns error if any factor is out of bounds.
    pub fn new(
        compressor: f64,
        combustion: f64,
        turbine: TurbineLoss,
        fuel_lhv: f64,
    ) -> Result<Self, CycleError> {
        let compressor = ensure_fraction(compressor, "compressor efficiency")?;
        let combustion = ensure_fraction(combustion, "combustion efficiency")?;
        if let TurbineLoss::Isentropic(eta) = turbine {
            ensure_fraction(eta, "turbine efficiency")?;
        }
        let fuel_lhv = ensure_positive(fuel_lhv, "fuel lower heating value")?;

        Ok(Self {
            compressor,
            combustion,
            turbine,
            fuel_lhv,
        })
    }

    pub fn compressor(&self) -> f64 {
        self.compressor
    }

    pub fn combustion(&self) -> f64 {
        self.combustion
    }

    pub fn turbine(&self) -> TurbineLoss {
        self.turbine
    }

    pub fn fuel_lhv(&self) -> f64 {
        self.fuel_lhv
    }

    /// Same factors with a different turbine treatment.
    ///
    /// # Errors
    /// Returns error if the turbine efficiency is out of bounds.
    pub fn with_turbine(self, turbine: TurbineLoss) -> Result<Self, CycleError> {
        Self::new(self.compressor, self.combustion, turbine, self.fuel_lhv)
    }
}

impl Default for ComponentEfficiencies {
    /// Micro-turbine values: η_c = 0.85, η_b = 0.98, folded turbine, Jet-A.
    fn default() -> Self {
        Self {
            compressor: 0.85,
            combustion: 0.98,
            turbine: TurbineLoss::FoldedIntoWorkBalance,
            fuel_lhv: JET_FUEL_LHV,
        }
    }
}
