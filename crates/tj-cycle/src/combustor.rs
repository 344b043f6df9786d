//! Combustor station model.

use crate::common::COMBUSTOR_PRESSURE_LOSS;
use crate::efficiency::ComponentEfficiencies;
use crate::gas::GasProperties;
use crate::outcome::Infeasibility;
use crate::station::StationState;

/// Turbine inlet state plus the heat and fuel that produced it.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Combustion {
    pub exit: StationState,
    /// Heat added per unit air mass (J/kg)
    pub heat_added: f64,
    /// Fuel mass per unit air mass
    pub fuel_air_ratio: f64,
}

/// Constant-pressure heat addition up to a prescribed turbine inlet temperature.
///
/// ```text
/// q_in = cp_h * (T4 - T3)
/// f    = q_in / (LHV * eta_b)
/// P4   = P3 * (1 - 0.04)
/// ```
///
/// A turbine inlet temperature at or below compressor exit temperature leaves
/// nothing to burn and is reported as infeasible.
pub(crate) fn burn(
    inlet: StationState,
    turbine_inlet_k: f64,
    hot: &GasProperties,
    efficiencies: &ComponentEfficiencies,
) -> Result<Combustion, Infeasibility> {
    let t3 = inlet.temperature_k;
    if turbine_inlet_k <= t3 {
        return Err(Infeasibility::NoCombustorTemperatureRise {
            compressor_exit_k: t3,
            turbine_inlet_k,
        });
    }

    let heat_added = hot.cp() * (turbine_inlet_k - t3);
    let fuel_air_ratio = heat_added / (efficiencies.fuel_lhv() * efficiencies.combustion());
    let p4 = inlet.pressure_pa * (1.0 - COMBUSTOR_PRESSURE_LOSS);

    Ok(Combustion {
        exit: StationState::new(turbine_inlet_k, p4),
        heat_added,
        fuel_air_ratio,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compressor_exit() -> StationState {
        StationState::new(460.0, 405_300.0)
    }

    #[test]
    fn applies_fixed_pressure_loss() {
        let c = burn(
            compressor_exit(),
            1300.0,
            &GasProperties::hot_gas(),
            &ComponentEfficiencies::default(),
        )
        .unwrap();
        assert!((c.exit.pressure_pa - 0.96 * 405_300.0).abs() < 1e-6);
        assert_eq!(c.exit.temperature_k, 1300.0);
    }

    #[test]
    fn combustion_losses_inflate_fuel() {
        let hot = GasProperties::hot_gas();
        let perfect = ComponentEfficiencies::new(
            0.85,
            1.0,
            crate::TurbineLoss::FoldedIntoWorkBalance,
            43e6,
        )
        .unwrap();
        let lossy = ComponentEfficiencies::default();

        let a = burn(compressor_exit(), 1300.0, &hot, &perfect).unwrap();
        let b = burn(compressor_exit(), 1300.0, &hot, &lossy).unwrap();
        assert_eq!(a.heat_added, b.heat_added);
        assert!((b.fuel_air_ratio * 0.98 - a.fuel_air_ratio).abs() < 1e-15);
    }

    #[test]
    fn no_temperature_rise_is_infeasible() {
        let r = burn(
            compressor_exit(),
            460.0,
            &GasProperties::hot_gas(),
            &ComponentEfficiencies::default(),
        );
        assert!(matches!(
            r,
            Err(Infeasibility::NoCombustorTemperatureRise { .. })
        ));
    }
}
