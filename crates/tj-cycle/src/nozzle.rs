//! Nozzle station model.

use crate::common::{EPSILON_VELOCITY, temperature_exponent};
use crate::gas::GasProperties;
use crate::outcome::Infeasibility;
use crate::station::StationState;

/// Ideal full expansion to ambient pressure, returning the jet velocity (m/s).
///
/// ```text
/// T8 = T5 * (Pa/P5)^((γh-1)/γh)
/// V  = sqrt(2 * cp_h * (T5 - T8))
/// ```
///
/// Turbine exit pressure below ambient cannot drive the jet and is rejected
/// before the square root. A jet that comes out with no velocity is rejected
/// too, since thrust-specific quantities divide by it. Overflow to a
/// non-finite velocity is reported as such.
pub(crate) fn expand_to_ambient(
    inlet: StationState,
    ambient_pa: f64,
    hot: &GasProperties,
) -> Result<f64, Infeasibility> {
    let p5 = inlet.pressure_pa;
    if p5 < ambient_pa {
        return Err(Infeasibility::NozzleUnderpressure {
            turbine_exit_pa: p5,
            ambient_pa,
        });
    }

    let t5 = inlet.temperature_k;
    let t8 = t5 * (ambient_pa / p5).powf(temperature_exponent(hot.gamma()));
    let velocity_mps = (2.0 * hot.cp() * (t5 - t8)).sqrt();

    if !velocity_mps.is_finite() {
        return Err(Infeasibility::NonFinite {
            what: "jet velocity",
        });
    }
    if velocity_mps < EPSILON_VELOCITY {
        return Err(Infeasibility::VanishingThrust {
            exit_velocity_mps: velocity_mps,
        });
    }

    Ok(velocity_mps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_to_ambient() {
        let inlet = StationState::new(1150.0, 200_000.0);
        let v = expand_to_ambient(inlet, 101_325.0, &GasProperties::hot_gas()).unwrap();
        assert!(v > 0.0);
        let t8 = 1150.0 * (101_325.0_f64 / 200_000.0).powf(0.33 / 1.33);
        let recomputed = (2.0 * 1150.0 * (1150.0 - t8)).sqrt();
        assert!((v - recomputed).abs() < 1e-9);
    }

    #[test]
    fn overflowing_jet_is_non_finite_not_vanishing() {
        let inlet = StationState::new(1e308, 1e6);
        let r = expand_to_ambient(inlet, 101_325.0, &GasProperties::hot_gas());
        assert!(matches!(
            r,
            Err(Infeasibility::NonFinite {
                what: "jet velocity"
            })
        ));
    }

    #[test]
    fn subambient_turbine_exit_is_infeasible() {
        let inlet = StationState::new(1150.0, 97_000.0);
        let r = expand_to_ambient(inlet, 101_325.0, &GasProperties::hot_gas());
        assert!(matches!(r, Err(Infeasibility::NozzleUnderpressure { .. })));
    }

    #[test]
    fn exactly_ambient_gives_no_thrust() {
        let inlet = StationState::new(1150.0, 101_325.0);
        let r = expand_to_ambient(inlet, 101_325.0, &GasProperties::hot_gas());
        assert!(matches!(r, Err(Infeasibility::VanishingThrust { .. })));
    }
}
