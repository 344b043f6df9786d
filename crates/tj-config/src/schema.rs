//! Engine configuration file schema.
//!
//! Every section is optional in the file; missing values fall back to the
//! reference micro-turbojet.

use serde::{Deserialize, Serialize};
use tj_core::constants::{SEA_LEVEL_PRESSURE_PA, SEA_LEVEL_TEMPERATURE_K};
use tj_cycle::JET_FUEL_LHV;
use tj_sizing::{DEFAULT_MAX_TIP_SPEED_MPS, DEFAULT_ROTOR_DIAMETER_M, DEFAULT_WORK_FACTOR};

pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfigDef {
    pub version: u32,
    pub name: String,
    pub ambient: AmbientDef,
    pub cold_gas: GasDef,
    pub hot_gas: GasDef,
    pub efficiencies: EfficienciesDef,
    pub sizing: SizingDef,
    pub sweep: SweepDef,
}

impl Default for EngineConfigDef {
    fn default() -> Self {
        Self {
            version: LATEST_VERSION,
            name: "Micro-Jet-01".to_string(),
            ambient: AmbientDef::default(),
            cold_gas: GasDef::cold_air(),
            hot_gas: GasDef::hot_gas(),
            efficiencies: EfficienciesDef::default(),
            sizing: SizingDef::default(),
            sweep: SweepDef::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AmbientDef {
    pub temperature_k: f64,
    pub pressure_pa: f64,
}

impl Default for AmbientDef {
    fn default() -> Self {
        Self {
            temperature_k: SEA_LEVEL_TEMPERATURE_K,
            pressure_pa: SEA_LEVEL_PRESSURE_PA,
        }
    }
}

/// A gas section without both fields is rejected rather than half-defaulted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GasDef {
    pub gamma: f64,
    pub cp: f64,
}

impl GasDef {
    pub fn cold_air() -> Self {
        Self {
            gamma: 1.4,
            cp: 1004.0,
        }
    }

    pub fn hot_gas() -> Self {
        Self {
            gamma: 1.33,
            cp: 1150.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EfficienciesDef {
    pub compressor: f64,
    pub combustion: f64,
    /// Isentropic turbine efficiency; absent folds turbine losses into the
    /// work balance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turbine: Option<f64>,
    pub fuel_lhv: f64,
}

impl Default for EfficienciesDef {
    fn default() -> Self {
        Self {
            compressor: 0.85,
            combustion: 0.98,
            turbine: None,
            fuel_lhv: JET_FUEL_LHV,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SizingDef {
    pub rotor_diameter_m: f64,
    pub work_factor: f64,
    pub max_tip_speed_mps: f64,
    /// Used when the interactive prompt gets no usable answer.
    pub default_pressure_ratio: f64,
    pub design_turbine_inlet_k: f64,
}

impl Default for SizingDef {
    fn default() -> Self {
        Self {
            rotor_diameter_m: DEFAULT_ROTOR_DIAMETER_M,
            work_factor: DEFAULT_WORK_FACTOR,
            max_tip_speed_mps: DEFAULT_MAX_TIP_SPEED_MPS,
            default_pressure_ratio: 4.0,
            design_turbine_inlet_k: 1300.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SpacingDef {
    #[default]
    Linear,
    Logarithmic,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SweepDef {
    pub pressure_ratio_start: f64,
    pub pressure_ratio_end: f64,
    pub num_points: usize,
    pub spacing: SpacingDef,
    pub turbine_inlet_temperatures_k: Vec<f64>,
}

impl Default for SweepDef {
    fn default() -> Self {
        Self {
            pressure_ratio_start: 2.0,
            pressure_ratio_end: 16.0,
            num_points: 50,
            spacing: SpacingDef::Linear,
            turbine_inlet_temperatures_k: vec![1100.0, 1300.0, 1500.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_reference_engine() {
        let def: EngineConfigDef = serde_yaml::from_str("{}").unwrap();
        assert_eq!(def, EngineConfigDef::default());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let yaml = "efficiencies:\n  turbine: 0.9\nsizing:\n  rotor_diameter_m: 0.1\n";
        let def: EngineConfigDef = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(def.efficiencies.turbine, Some(0.9));
        assert_eq!(def.efficiencies.compressor, 0.85);
        assert_eq!(def.sizing.rotor_diameter_m, 0.1);
        assert_eq!(def.sizing.work_factor, 0.9);
    }

    #[test]
    fn incomplete_gas_section_is_rejected() {
        let r: Result<EngineConfigDef, _> = serde_yaml::from_str("hot_gas:\n  gamma: 1.3\n");
        assert!(r.is_err());
    }

    #[test]
    fn spacing_is_lowercase() {
        let def: SweepDef = serde_yaml::from_str("spacing: logarithmic\n").unwrap();
        assert_eq!(def.spacing, SpacingDef::Logarithmic);
    }
}
