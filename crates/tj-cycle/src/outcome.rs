//! Cycle evaluation outcomes.

use thiserror::Error;

/// Performance of a feasible cycle, per unit air mass flow.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerformanceMetrics {
    /// Specific thrust (N per kg/s of air)
    pub specific_thrust: f64,
    /// Thrust-specific fuel consumption (kg fuel per N thrust per hour)
    pub tsfc: f64,
    /// Compressor specific work (J/kg)
    pub compressor_work: f64,
    /// Fuel mass per unit air mass
    pub fuel_air_ratio: f64,
    /// Jet kinetic energy over heat added
    pub thermal_efficiency: f64,
}

impl PerformanceMetrics {
    pub(crate) fn all_finite(&self) -> bool {
        [
            self.specific_thrust,
            self.tsfc,
            self.compressor_work,
            self.fuel_air_ratio,
            self.thermal_efficiency,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Why an operating point produces no usable jet.
#[derive(Error, Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Infeasibility {
    #[error(
        "turbine inlet temperature {turbine_inlet_k:.1} K does not exceed compressor exit temperature {compressor_exit_k:.1} K"
    )]
    NoCombustorTemperatureRise {
        compressor_exit_k: f64,
        turbine_inlet_k: f64,
    },

    #[error(
        "turbine cannot drop {required_drop_k:.1} K from an inlet of {turbine_inlet_k:.1} K"
    )]
    TurbineWorkExceedsEnthalpy {
        turbine_inlet_k: f64,
        required_drop_k: f64,
    },

    #[error(
        "turbine exit pressure {turbine_exit_pa:.0} Pa is below ambient {ambient_pa:.0} Pa"
    )]
    NozzleUnderpressure {
        turbine_exit_pa: f64,
        ambient_pa: f64,
    },

    #[error("jet velocity {exit_velocity_mps:e} m/s is too small to define fuel consumption")]
    VanishingThrust { exit_velocity_mps: f64 },

    #[error("non-finite {what}")]
    NonFinite { what: &'static str },
}

/// Tagged outcome of one cycle evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CycleResult {
    Success(PerformanceMetrics),
    Infeasible(Infeasibility),
}

impl CycleResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn metrics(&self) -> Option<&PerformanceMetrics> {
        match self {
            Self::Success(m) => Some(m),
            Self::Infeasible(_) => None,
        }
    }

    pub fn infeasibility(&self) -> Option<&Infeasibility> {
        match self {
            Self::Success(_) => None,
            Self::Infeasible(reason) => Some(reason),
        }
    }

    /// Convert into a `Result` so callers can use `?`.
    pub fn into_result(self) -> Result<PerformanceMetrics, Infeasibility> {
        self.into()
    }
}

impl From<Result<PerformanceMetrics, Infeasibility>> for CycleResult {
    fn from(r: Result<PerformanceMetrics, Infeasibility>) -> Self {
        match r {
            Ok(m) => Self::Success(m),
            Err(reason) => Self::Infeasible(reason),
        }
    }
}

impl From<CycleResult> for Result<PerformanceMetrics, Infeasibility> {
    fn from(r: CycleResult) -> Self {
        match r {
            CycleResult::Success(m) => Ok(m),
            CycleResult::Infeasible(reason) => Err(reason),
        }
    }
}
