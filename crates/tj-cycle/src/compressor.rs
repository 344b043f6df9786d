//! Compressor station model.

use crate::common::temperature_exponent;
use crate::gas::GasProperties;
use crate::station::StationState;

/// Compressor exit state and the shaft work it absorbed.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Compression {
    pub exit: StationState,
    /// Specific work input (J/kg), non-negative
    pub specific_work: f64,
}

/// Adiabatic compression with an isentropic efficiency.
///
/// ```text
/// T3s = T2 * OPR^((γc-1)/γc)
/// T3  = T2 + (T3s - T2) / eta
/// w   = cp_c * (T3 - T2)
/// P3  = P2 * OPR
/// ```
///
/// Efficiency below one raises the real temperature rise above the ideal one.
pub(crate) fn compress(
    inlet: StationState,
    pressure_ratio: f64,
    gas: &GasProperties,
    eta: f64,
) -> Compression {
    let t2 = inlet.temperature_k;
    let t3_ideal = t2 * pressure_ratio.powf(temperature_exponent(gas.gamma()));
    let t3 = t2 + (t3_ideal - t2) / eta;
    let specific_work = gas.cp() * (t3 - t2);

    Compression {
        exit: StationState::new(t3, inlet.pressure_pa * pressure_ratio),
        specific_work,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inlet() -> StationState {
        StationState::new(288.15, 101_325.0)
    }

    #[test]
    fn unit_pressure_ratio_does_no_work() {
        let c = compress(inlet(), 1.0, &GasProperties::cold_air(), 0.85);
        assert_eq!(c.specific_work, 0.0);
        assert_eq!(c.exit.temperature_k, 288.15);
        assert_eq!(c.exit.pressure_pa, 101_325.0);
    }

    #[test]
    fn losses_raise_exit_temperature() {
        let ideal = compress(inlet(), 4.0, &GasProperties::cold_air(), 1.0);
        let real = compress(inlet(), 4.0, &GasProperties::cold_air(), 0.85);
        assert!(real.exit.temperature_k > ideal.exit.temperature_k);
        assert!(real.specific_work > ideal.specific_work);
        // Real rise is the ideal rise over eta
        let ideal_rise = ideal.exit.temperature_k - 288.15;
        let real_rise = real.exit.temperature_k - 288.15;
        assert!((real_rise - ideal_rise / 0.85).abs() < 1e-9);
    }

    #[test]
    fn exit_pressure_scales_with_ratio() {
        let c = compress(inlet(), 4.0, &GasProperties::cold_air(), 0.85);
        assert_eq!(c.exit.pressure_pa, 405_300.0);
    }
}
