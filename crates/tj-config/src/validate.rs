//! Validation of configuration files into evaluator inputs.

use crate::schema::{EngineConfigDef, LATEST_VERSION, SizingDef, SpacingDef};
use tj_core::units::{Length, Velocity, k, m, mps, pa};
use tj_cycle::{
    AmbientConditions, ComponentEfficiencies, CycleConfig, CycleInputs, GasProperties,
    PerformanceMetrics, TurbineLoss,
};
use tj_sizing::{SizingError, SizingInputs};
use tj_sweep::{DesignSpaceSweep, SweepDefinition, SweepSpacing};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} ({reason})")]
    InvalidValue { field: &'static str, reason: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(field: &'static str) -> impl FnOnce(String) -> ValidationError {
    move |reason| ValidationError::InvalidValue { field, reason }
}

/// Rotor packaging and design-point choices for the sizing workflow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingParams {
    pub rotor_diameter: Length,
    pub work_factor: f64,
    pub max_tip_speed: Velocity,
    pub default_pressure_ratio: f64,
    pub design_turbine_inlet_k: f64,
}

impl SizingParams {
    /// Sizing inputs for the compressor work of an evaluated cycle.
    ///
    /// # Errors
    /// Returns error if the stored geometry is out of bounds.
    pub fn inputs_for(&self, metrics: &PerformanceMetrics) -> Result<SizingInputs, SizingError> {
        SizingInputs::from_metrics(
            metrics,
            self.rotor_diameter,
            self.work_factor,
            self.max_tip_speed,
        )
    }

    /// Same parameters with a different rotor diameter.
    pub fn with_diameter(self, rotor_diameter: Length) -> Self {
        Self {
            rotor_diameter,
            ..self
        }
    }
}

/// A configuration file checked and converted into typed inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub name: String,
    pub cycle: CycleConfig,
    pub sizing: SizingParams,
    pub sweep: DesignSpaceSweep,
}

pub fn validate(def: &EngineConfigDef) -> Result<EngineConfig, ValidationError> {
    if def.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: def.version,
        });
    }

    let ambient = AmbientConditions::new(k(def.ambient.temperature_k), pa(def.ambient.pressure_pa))
        .map_err(|e| invalid("ambient")(e.to_string()))?;
    let cold_gas = GasProperties::new(def.cold_gas.gamma, def.cold_gas.cp)
        .map_err(|e| invalid("cold_gas")(e.to_string()))?;
    let hot_gas = GasProperties::new(def.hot_gas.gamma, def.hot_gas.cp)
        .map_err(|e| invalid("hot_gas")(e.to_string()))?;

    let eff = &def.efficiencies;
    let turbine = eff
        .turbine
        .map_or(TurbineLoss::FoldedIntoWorkBalance, TurbineLoss::Isentropic);
    let efficiencies =
        ComponentEfficiencies::new(eff.compressor, eff.combustion, turbine, eff.fuel_lhv)
            .map_err(|e| invalid("efficiencies")(e.to_string()))?;

    let sizing = validate_sizing(&def.sizing)?;

    let spacing = match def.sweep.spacing {
        SpacingDef::Linear => SweepSpacing::Linear,
        SpacingDef::Logarithmic => SweepSpacing::Logarithmic,
    };
    let pressure_ratios = SweepDefinition::new(
        def.sweep.pressure_ratio_start,
        def.sweep.pressure_ratio_end,
        def.sweep.num_points,
        spacing,
    )
    .map_err(|e| invalid("sweep")(e.to_string()))?;
    if pressure_ratios.start().min(pressure_ratios.end()) < 1.0 {
        return Err(invalid("sweep")(
            "pressure ratio bounds must be at least 1".to_string(),
        ));
    }
    let sweep = DesignSpaceSweep::new(
        pressure_ratios,
        def.sweep.turbine_inlet_temperatures_k.clone(),
    )
    .map_err(|e| invalid("sweep")(e.to_string()))?;

    Ok(EngineConfig {
        name: def.name.clone(),
        cycle: CycleConfig {
            ambient,
            cold_gas,
            hot_gas,
            efficiencies,
        },
        sizing,
        sweep,
    })
}

fn validate_sizing(def: &SizingDef) -> Result<SizingParams, ValidationError> {
    let params = SizingParams {
        rotor_diameter: m(def.rotor_diameter_m),
        work_factor: def.work_factor,
        max_tip_speed: mps(def.max_tip_speed_mps),
        default_pressure_ratio: def.default_pressure_ratio,
        design_turbine_inlet_k: def.design_turbine_inlet_k,
    };

    // Zero work exercises every geometric precondition
    SizingInputs::new(
        0.0,
        params.rotor_diameter,
        params.work_factor,
        params.max_tip_speed,
    )
    .map_err(|e| invalid("sizing")(e.to_string()))?;
    CycleInputs::new(
        params.default_pressure_ratio,
        k(params.design_turbine_inlet_k),
    )
    .map_err(|e| invalid("sizing")(e.to_string()))?;

    Ok(params)
}
