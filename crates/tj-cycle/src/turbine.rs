//! Turbine station model.

use crate::common::pressure_exponent;
use crate::efficiency::TurbineLoss;
use crate::gas::GasProperties;
use crate::outcome::Infeasibility;
use crate::station::StationState;

/// Single-spool turbine expansion.
///
/// The turbine delivers exactly the compressor work:
///
/// ```text
/// T5 = T4 - w_comp / cp_h
/// P5 = P4 * (T5x / T4)^(γh/(γh-1))
/// ```
///
/// where `T5x = T5` when losses are folded into the work balance and
/// `T5x = T4 - (T4 - T5) / eta_t` for an isentropic turbine efficiency
/// (a lossy turbine needs a larger pressure drop for the same work).
pub(crate) fn expand(
    inlet: StationState,
    compressor_work: f64,
    hot: &GasProperties,
    loss: TurbineLoss,
) -> Result<StationState, Infeasibility> {
    let t4 = inlet.temperature_k;
    let drop = compressor_work / hot.cp();
    let t5 = t4 - drop;

    let t5_pressure_basis = match loss {
        TurbineLoss::FoldedIntoWorkBalance => t5,
        TurbineLoss::Isentropic(eta) => t4 - drop / eta,
    };

    if t5 <= 0.0 || t5_pressure_basis <= 0.0 {
        return Err(Infeasibility::TurbineWorkExceedsEnthalpy {
            turbine_inlet_k: t4,
            required_drop_k: drop,
        });
    }

    let p5 = inlet.pressure_pa * (t5_pressure_basis / t4).powf(pressure_exponent(hot.gamma()));

    Ok(StationState::new(t5, p5))
}
