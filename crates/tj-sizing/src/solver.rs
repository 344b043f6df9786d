//! Rotor speed and tip speed from an aerodynamic work requirement.

use crate::error::SizingError;
use std::f64::consts::PI;
use std::fmt;
use tj_core::constants::SECONDS_PER_MINUTE;
use tj_core::numeric::{ensure_finite, ensure_positive};
use tj_core::units::{Length, Velocity, meters_of, mps_of};
use tj_cycle::PerformanceMetrics;

/// Typical loading coefficient relating specific work to tip speed squared.
pub const DEFAULT_WORK_FACTOR: f64 = 0.9;

/// Tip speed limit for a small cast or machined impeller (m/s).
pub const DEFAULT_MAX_TIP_SPEED_MPS: f64 = 550.0;

/// Packaging diameter of the reference micro-turbojet rotor (m).
pub const DEFAULT_ROTOR_DIAMETER_M: f64 = 0.08;

/// Validated inputs to [`solve_sizing`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SizingInputs {
    required_work: f64,
    rotor_diameter_m: f64,
    work_factor: f64,
    max_tip_speed_mps: f64,
}

impl SizingInputs {
    /// Create sizing inputs.
    ///
    /// # Arguments
    /// * `required_work` - Specific work the rotor must absorb (J/kg), >= 0
    /// * `rotor_diameter` - Tip diameter, must be positive
    /// * `work_factor` - Loading coefficient `w = work_factor * U^2`, must be positive
    /// * `max_tip_speed` - Structural tip speed limit, must be positive
    ///
    /// # Errors
    /// Returns error if any value is non-finite or out of bounds, or if the
    /// resulting rotor speed overflows.
    pub fn new(
        required_work: f64,
        rotor_diameter: Length,
        work_factor: f64,
        max_tip_speed: Velocity,
    ) -> Result<Self, SizingError> {
        ensure_finite(required_work, "required specific work")?;
        if required_work < 0.0 {
            return Err(SizingError::OutOfRange {
                what: "required specific work",
                value: required_work,
            });
        }
        let rotor_diameter_m = ensure_positive(meters_of(rotor_diameter), "rotor diameter")?;
        let work_factor = ensure_positive(work_factor, "work factor")?;
        let max_tip_speed_mps = ensure_positive(mps_of(max_tip_speed), "maximum tip speed")?;

        let (_, rpm) = rotor_speeds(required_work, work_factor, rotor_diameter_m);
        ensure_finite(rpm, "rotor speed")?;

        Ok(Self {
            required_work,
            rotor_diameter_m,
            work_factor,
            max_tip_speed_mps,
        })
    }

    /// Size the rotor for the compressor work of an evaluated cycle.
    ///
    /// # Errors
    /// Returns error if the geometry or limits are out of bounds.
    pub fn from_metrics(
        metrics: &PerformanceMetrics,
        rotor_diameter: Length,
        work_factor: f64,
        max_tip_speed: Velocity,
    ) -> Result<Self, SizingError> {
        Self::new(
            metrics.compressor_work,
            rotor_diameter,
            work_factor,
            max_tip_speed,
        )
    }

    pub fn required_work(&self) -> f64 {
        self.required_work
    }

    pub fn rotor_diameter_m(&self) -> f64 {
        self.rotor_diameter_m
    }

    pub fn work_factor(&self) -> f64 {
        self.work_factor
    }

    pub fn max_tip_speed_mps(&self) -> f64 {
        self.max_tip_speed_mps
    }
}

/// Structural outcome of a sizing run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TipSpeedVerdict {
    /// Tip speed strictly below the limit.
    Ok,
    /// Tip speed at or above the limit.
    StructuralFailure,
}

impl fmt::Display for TipSpeedVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::StructuralFailure => write!(f, "STRUCTURAL FAILURE"),
        }
    }
}

/// Required rotor speed for a given work and diameter.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SizingResult {
    /// Rotational speed (rev/min)
    pub rpm: f64,
    /// Blade tip speed (m/s)
    pub tip_speed_mps: f64,
    pub verdict: TipSpeedVerdict,
}

impl SizingResult {
    /// Fraction of the tip speed limit in use.
    pub fn tip_speed_utilization(&self, inputs: &SizingInputs) -> f64 {
        self.tip_speed_mps / inputs.max_tip_speed_mps
    }
}

/// Invert `w = work_factor * U^2` and convert tip speed to shaft speed.
///
/// ```text
/// U   = sqrt(w / work_factor)
/// RPM = U * 60 / (pi * D)
/// ```
///
/// Never fails: an over-speed rotor is a verdict, not an error.
pub fn solve_sizing(inputs: &SizingInputs) -> SizingResult {
    let (tip_speed_mps, rpm) = rotor_speeds(
        inputs.required_work,
        inputs.work_factor,
        inputs.rotor_diameter_m,
    );

    let verdict = if tip_speed_mps < inputs.max_tip_speed_mps {
        TipSpeedVerdict::Ok
    } else {
        TipSpeedVerdict::StructuralFailure
    };

    SizingResult {
        rpm,
        tip_speed_mps,
        verdict,
    }
}

/// Tip speed (m/s) and shaft speed (rev/min).
fn rotor_speeds(required_work: f64, work_factor: f64, rotor_diameter_m: f64) -> (f64, f64) {
    let tip_speed_mps = (required_work / work_factor).sqrt();
    let rpm = tip_speed_mps * SECONDS_PER_MINUTE / (PI * rotor_diameter_m);
    (tip_speed_mps, rpm)
}
