//! Station-by-station cycle evaluation.

use crate::ambient::AmbientConditions;
use crate::efficiency::ComponentEfficiencies;
use crate::error::CycleError;
use crate::gas::GasProperties;
use crate::outcome::{CycleResult, Infeasibility, PerformanceMetrics};
use crate::station::StationState;
use crate::{combustor, compressor, nozzle, turbine};
use tj_core::constants::SECONDS_PER_HOUR;
use tj_core::numeric::{ensure_finite, ensure_positive};
use tj_core::units::{Temperature, kelvin_of};

/// Design point for one evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CycleInputs {
    pressure_ratio: f64,
    turbine_inlet_k: f64,
}

impl CycleInputs {
    /// # Arguments
    /// * `pressure_ratio` - Compressor pressure ratio (>= 1)
    /// * `turbine_inlet` - Turbine inlet temperature, finite and positive
    ///
    /// # Errors
    /// Returns error if either value violates its bound.
    pub fn new(pressure_ratio: f64, turbine_inlet: Temperature) -> Result<Self, CycleError> {
        ensure_finite(pressure_ratio, "pressure ratio")?;
        if pressure_ratio < 1.0 {
            return Err(CycleError::OutOfRange {
                what: "pressure ratio",
                value: pressure_ratio,
            });
        }
        let turbine_inlet_k =
            ensure_positive(kelvin_of(turbine_inlet), "turbine inlet temperature")?;

        Ok(Self {
            pressure_ratio,
            turbine_inlet_k,
        })
    }

    pub fn pressure_ratio(&self) -> f64 {
        self.pressure_ratio
    }

    pub fn turbine_inlet_k(&self) -> f64 {
        self.turbine_inlet_k
    }
}

/// Everything about an engine that stays fixed across a design sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CycleConfig {
    pub ambient: AmbientConditions,
    pub cold_gas: GasProperties,
    pub hot_gas: GasProperties,
    pub efficiencies: ComponentEfficiencies,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self::reference()
    }
}

impl CycleConfig {
    /// Reference micro-turbojet: sea level, standard gases, default efficiencies.
    pub fn reference() -> Self {
        Self {
            ambient: AmbientConditions::sea_level(),
            cold_gas: GasProperties::cold_air(),
            hot_gas: GasProperties::hot_gas(),
            efficiencies: ComponentEfficiencies::default(),
        }
    }

    pub fn evaluate(&self, inputs: CycleInputs) -> CycleResult {
        evaluate(
            &self.ambient,
            &self.cold_gas,
            &self.hot_gas,
            &self.efficiencies,
            inputs,
        )
    }
}

/// Evaluate the cycle at one design point.
///
/// Pure: identical arguments give bit-identical results. Operating points that
/// cannot produce a jet come back as [`CycleResult::Infeasible`], never as a
/// zero-thrust success.
pub fn evaluate(
    ambient: &AmbientConditions,
    cold_gas: &GasProperties,
    hot_gas: &GasProperties,
    efficiencies: &ComponentEfficiencies,
    inputs: CycleInputs,
) -> CycleResult {
    run_stations(ambient, cold_gas, hot_gas, efficiencies, inputs).into()
}

fn run_stations(
    ambient: &AmbientConditions,
    cold_gas: &GasProperties,
    hot_gas: &GasProperties,
    efficiencies: &ComponentEfficiencies,
    inputs: CycleInputs,
) -> Result<PerformanceMetrics, Infeasibility> {
    let inlet = StationState::new(ambient.temperature_k(), ambient.pressure_pa());

    let compression = compressor::compress(
        inlet,
        inputs.pressure_ratio(),
        cold_gas,
        efficiencies.compressor(),
    );
    let combustion = combustor::burn(
        compression.exit,
        inputs.turbine_inlet_k(),
        hot_gas,
        efficiencies,
    )?;
    let turbine_exit = turbine::expand(
        combustion.exit,
        compression.specific_work,
        hot_gas,
        efficiencies.turbine(),
    )?;
    // Inlet velocity neglected: specific thrust is the jet velocity.
    let specific_thrust =
        nozzle::expand_to_ambient(turbine_exit, ambient.pressure_pa(), hot_gas)?;
    let metrics = PerformanceMetrics {
        specific_thrust,
        tsfc: combustion.fuel_air_ratio / specific_thrust * SECONDS_PER_HOUR,
        compressor_work: compression.specific_work,
        fuel_air_ratio: combustion.fuel_air_ratio,
        thermal_efficiency: 0.5 * specific_thrust * specific_thrust / combustion.heat_added,
    };

    if !metrics.all_finite() {
        return Err(Infeasibility::NonFinite {
            what: "performance metric",
        });
    }
    Ok(metrics)
}
