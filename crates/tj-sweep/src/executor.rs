//! Design-space sweep execution.
//!
//! Evaluates the cycle over pressure-ratio samples crossed with a set of
//! turbine inlet temperatures and collects feasible points into parallel
//! vectors ready for plotting. Infeasible points are dropped, so plotted
//! curves show gaps instead of substitute values.

use crate::definition::SweepDefinition;
use crate::error::{SweepError, SweepResult};
use crate::weight::thrust_to_weight_index;
use rayon::prelude::*;
use tj_core::units::k;
use tj_cycle::{CycleConfig, CycleInputs, CycleResult, Infeasibility, PerformanceMetrics};

/// Operating point left out of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkippedPoint {
    pub pressure_ratio: f64,
    pub reason: Infeasibility,
}

/// Feasible points at one turbine inlet temperature, in sweep order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CycleSeries {
    /// Turbine inlet temperature shared by every point (K)
    pub turbine_inlet_k: f64,
    pub pressure_ratio: Vec<f64>,
    /// N per kg/s
    pub specific_thrust: Vec<f64>,
    /// kg/(N·h)
    pub tsfc: Vec<f64>,
    /// J/kg
    pub compressor_work: Vec<f64>,
    pub thermal_efficiency: Vec<f64>,
    /// Illustrative only, see [`crate::weight`]
    pub thrust_to_weight_index: Vec<f64>,
    /// Infeasible points, in sweep order
    pub skipped: Vec<SkippedPoint>,
}

impl CycleSeries {
    fn new(turbine_inlet_k: f64) -> Self {
        Self {
            turbine_inlet_k,
            ..Self::default()
        }
    }

    /// Number of feasible points collected.
    pub fn len(&self) -> usize {
        self.pressure_ratio.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pressure_ratio.is_empty()
    }

    fn push(&mut self, pressure_ratio: f64, m: &PerformanceMetrics) {
        self.pressure_ratio.push(pressure_ratio);
        self.specific_thrust.push(m.specific_thrust);
        self.tsfc.push(m.tsfc);
        self.compressor_work.push(m.compressor_work);
        self.thermal_efficiency.push(m.thermal_efficiency);
        self.thrust_to_weight_index.push(thrust_to_weight_index(
            m.specific_thrust,
            pressure_ratio,
            self.turbine_inlet_k,
        ));
    }

    /// Feasible point with the highest specific thrust.
    pub fn max_specific_thrust(&self) -> Option<(f64, f64)> {
        self.pressure_ratio
            .iter()
            .zip(&self.specific_thrust)
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(opr, f)| (*opr, *f))
    }

    /// Feasible point with the lowest fuel consumption.
    pub fn min_tsfc(&self) -> Option<(f64, f64)> {
        self.pressure_ratio
            .iter()
            .zip(&self.tsfc)
            .min_by(|a, b| a.1.total_cmp(b.1))
            .map(|(opr, sfc)| (*opr, *sfc))
    }
}

/// Pressure-ratio sweep crossed with turbine inlet temperature candidates.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignSpaceSweep {
    pressure_ratios: SweepDefinition,
    turbine_inlet_temperatures_k: Vec<f64>,
}

impl DesignSpaceSweep {
    /// # Errors
    /// Returns error if the temperature list is empty or holds a value that
    /// is not a valid turbine inlet temperature.
    pub fn new(
        pressure_ratios: SweepDefinition,
        turbine_inlet_temperatures_k: Vec<f64>,
    ) -> SweepResult<Self> {
        if turbine_inlet_temperatures_k.is_empty() {
            return Err(SweepError::InvalidConfiguration(
                "At least one turbine inlet temperature is required".to_string(),
            ));
        }
        for &t in &turbine_inlet_temperatures_k {
            CycleInputs::new(1.0, k(t))
                .map_err(|source| SweepError::InvalidTemperature { value: t, source })?;
        }

        Ok(Self {
            pressure_ratios,
            turbine_inlet_temperatures_k,
        })
    }

    /// OPR 2 to 16 in 50 linear steps at 1100, 1300 and 1500 K.
    pub fn reference() -> SweepResult<Self> {
        Self::new(
            SweepDefinition::linear(2.0, 16.0, 50)?,
            vec![1100.0, 1300.0, 1500.0],
        )
    }

    pub fn pressure_ratios(&self) -> &SweepDefinition {
        &self.pressure_ratios
    }

    pub fn turbine_inlet_temperatures_k(&self) -> &[f64] {
        &self.turbine_inlet_temperatures_k
    }

    /// Evaluate every point on the calling thread.
    pub fn execute(&self, config: &CycleConfig) -> SweepResult<Vec<CycleSeries>> {
        let oprs = self.pressure_ratios.generate_points();
        self.turbine_inlet_temperatures_k
            .iter()
            .map(|&tit| collect_series(config, &oprs, tit))
            .collect()
    }

    /// Evaluate every point on the rayon pool.
    ///
    /// Output is identical to [`Self::execute`], including point order.
    pub fn execute_parallel(&self, config: &CycleConfig) -> SweepResult<Vec<CycleSeries>> {
        let oprs = self.pressure_ratios.generate_points();
        self.turbine_inlet_temperatures_k
            .par_iter()
            .map(|&tit| collect_series_parallel(config, &oprs, tit))
            .collect()
    }
}

fn design_point(index: usize, pressure_ratio: f64, tit: f64) -> SweepResult<CycleInputs> {
    CycleInputs::new(pressure_ratio, k(tit)).map_err(|source| SweepError::InvalidPoint {
        index,
        pressure_ratio,
        source,
    })
}

/// Evaluate a series at one turbine inlet temperature, skipping infeasible points.
///
/// # Errors
/// Returns error if a pressure ratio or the temperature is not a valid input;
/// infeasible points are not errors.
pub fn collect_series(
    config: &CycleConfig,
    pressure_ratios: &[f64],
    turbine_inlet_k: f64,
) -> SweepResult<CycleSeries> {
    let outcomes = pressure_ratios
        .iter()
        .enumerate()
        .map(|(i, &opr)| design_point(i, opr, turbine_inlet_k).map(|p| config.evaluate(p)))
        .collect::<SweepResult<Vec<_>>>()?;
    Ok(assemble(pressure_ratios, turbine_inlet_k, &outcomes))
}

/// [`collect_series`] with the points evaluated on the rayon pool.
///
/// # Errors
/// Same as [`collect_series`].
pub fn collect_series_parallel(
    config: &CycleConfig,
    pressure_ratios: &[f64],
    turbine_inlet_k: f64,
) -> SweepResult<CycleSeries> {
    let outcomes = pressure_ratios
        .par_iter()
        .enumerate()
        .map(|(i, &opr)| design_point(i, opr, turbine_inlet_k).map(|p| config.evaluate(p)))
        .collect::<SweepResult<Vec<_>>>()?;
    Ok(assemble(pressure_ratios, turbine_inlet_k, &outcomes))
}

fn assemble(
    pressure_ratios: &[f64],
    turbine_inlet_k: f64,
    outcomes: &[CycleResult],
) -> CycleSeries {
    let mut series = CycleSeries::new(turbine_inlet_k);

    for (&opr, outcome) in pressure_ratios.iter().zip(outcomes) {
        match outcome {
            CycleResult::Success(m) => series.push(opr, m),
            CycleResult::Infeasible(reason) => {
                tracing::debug!(
                    pressure_ratio = opr,
                    turbine_inlet_k,
                    %reason,
                    "skipping infeasible design point"
                );
                series.skipped.push(SkippedPoint {
                    pressure_ratio: opr,
                    reason: *reason,
                });
            }
        }
    }

    tracing::info!(
        turbine_inlet_k,
        feasible = series.len(),
        skipped = series.skipped.len(),
        "sweep series complete"
    );
    series
}
