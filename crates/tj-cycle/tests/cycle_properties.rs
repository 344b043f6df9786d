//! Behavioural checks of the cycle evaluator over the design space.

use proptest::prelude::*;
use tj_core::numeric::{Tolerances, nearly_equal};
use tj_core::units::{k, pa};
use tj_cycle::{
    AmbientConditions, ComponentEfficiencies, CycleConfig, CycleInputs, CycleResult,
    GasProperties, Infeasibility, TurbineLoss, evaluate,
};

fn point(opr: f64, tit: f64) -> CycleInputs {
    CycleInputs::new(opr, k(tit)).unwrap()
}

/// Compressor exit temperature of the reference engine.
fn reference_t3(opr: f64) -> f64 {
    let t2 = 288.15;
    t2 + (t2 * opr.powf(0.4 / 1.4) - t2) / 0.85
}

fn infeasibility_is_finite(reason: &Infeasibility) -> bool {
    match *reason {
        Infeasibility::NoCombustorTemperatureRise {
            compressor_exit_k,
            turbine_inlet_k,
        } => compressor_exit_k.is_finite() && turbine_inlet_k.is_finite(),
        Infeasibility::TurbineWorkExceedsEnthalpy {
            turbine_inlet_k,
            required_drop_k,
        } => turbine_inlet_k.is_finite() && required_drop_k.is_finite(),
        Infeasibility::NozzleUnderpressure {
            turbine_exit_pa,
            ambient_pa,
        } => turbine_exit_pa.is_finite() && ambient_pa.is_finite(),
        Infeasibility::VanishingThrust { exit_velocity_mps } => exit_velocity_mps.is_finite(),
        Infeasibility::NonFinite { .. } => false,
    }
}

#[test]
fn reference_design_point_regression() {
    let ambient = AmbientConditions::new(k(288.15), pa(101_325.0)).unwrap();
    let cold = GasProperties::new(1.4, 1004.0).unwrap();
    let hot = GasProperties::new(1.33, 1150.0).unwrap();
    let eff =
        ComponentEfficiencies::new(0.85, 0.98, TurbineLoss::FoldedIntoWorkBalance, 43e6).unwrap();

    let m = evaluate(&ambient, &cold, &hot, &eff, point(4.0, 1300.0))
        .into_result()
        .unwrap();

    let tol = Tolerances {
        abs: 1e-12,
        rel: 1e-9,
    };
    assert!(nearly_equal(m.specific_thrust, 719.605_680_486_377_1, tol));
    assert!(nearly_equal(m.tsfc, 0.115_649_790_515_995_21, tol));
    assert!(nearly_equal(m.compressor_work, 165_411.072_273_495_17, tol));
    assert!(nearly_equal(m.fuel_air_ratio, 0.023_117_290_611_769_356, tol));
    assert!(nearly_equal(m.thermal_efficiency, 0.265_783_310_386_559_33, tol));
    assert!(m.tsfc > 0.05 && m.tsfc < 0.15);
}

#[test]
fn isentropic_turbine_regression() {
    let mut cfg = CycleConfig::reference();
    cfg.efficiencies = cfg
        .efficiencies
        .with_turbine(TurbineLoss::Isentropic(0.9))
        .unwrap();

    let m = cfg.evaluate(point(4.0, 1300.0)).into_result().unwrap();
    let tol = Tolerances {
        abs: 1e-12,
        rel: 1e-9,
    };
    assert!(nearly_equal(m.specific_thrust, 698.439_300_745_710_5, tol));
    assert!(nearly_equal(m.tsfc, 0.119_154_586_681_354_92, tol));
}

#[test]
fn compressor_work_rises_with_pressure_ratio() {
    let cfg = CycleConfig::reference();
    let low = cfg.evaluate(point(2.0, 1300.0)).into_result().unwrap();
    let high = cfg.evaluate(point(4.0, 1300.0)).into_result().unwrap();
    assert!(high.compressor_work > low.compressor_work);
}

#[test]
fn repeated_evaluation_is_bit_identical() {
    let cfg = CycleConfig::reference();
    let a = cfg.evaluate(point(7.3, 1234.5)).into_result().unwrap();
    let b = cfg.evaluate(point(7.3, 1234.5)).into_result().unwrap();
    assert_eq!(a.specific_thrust.to_bits(), b.specific_thrust.to_bits());
    assert_eq!(a.tsfc.to_bits(), b.tsfc.to_bits());
    assert_eq!(a.compressor_work.to_bits(), b.compressor_work.to_bits());
    assert_eq!(a.thermal_efficiency.to_bits(), b.thermal_efficiency.to_bits());
}

#[test]
fn upper_feasibility_limit_is_crossed_once() {
    // At 700 K the turbine can no longer hold P5 above ambient near OPR 13.9.
    let cfg = CycleConfig::reference();
    let outcomes: Vec<bool> = (0..=1600)
        .map(|i| 4.0 + 0.01 * i as f64)
        .map(|opr| cfg.evaluate(point(opr, 700.0)).is_success())
        .collect();

    assert!(outcomes[0], "OPR 4 should be feasible at 700 K");
    assert!(!outcomes[outcomes.len() - 1], "OPR 20 should be infeasible at 700 K");

    let flips = outcomes.windows(2).filter(|w| w[0] != w[1]).count();
    assert_eq!(flips, 1, "feasibility must change exactly once");

    let first_bad = outcomes.iter().position(|ok| !ok).unwrap();
    let opr_limit = 4.0 + 0.01 * first_bad as f64;
    assert!(opr_limit > 13.8 && opr_limit < 14.0, "limit at {opr_limit}");
}

#[test]
fn infeasible_point_is_not_a_zero_thrust_success() {
    let r = CycleConfig::reference().evaluate(point(15.0, 700.0));
    match r {
        CycleResult::Infeasible(Infeasibility::NozzleUnderpressure {
            turbine_exit_pa,
            ambient_pa,
        }) => assert!(turbine_exit_pa < ambient_pa),
        other => panic!("expected nozzle underpressure, got {other:?}"),
    }
}

proptest! {
    #[test]
    fn outputs_are_finite_across_design_space(
        opr in 1.0_f64..=40.0,
        excess in 1.0_f64..1500.0,
    ) {
        let tit = reference_t3(opr) + excess;
        match CycleConfig::reference().evaluate(point(opr, tit)) {
            CycleResult::Success(m) => {
                prop_assert!(m.specific_thrust > 0.0 && m.specific_thrust.is_finite());
                prop_assert!(m.tsfc > 0.0 && m.tsfc.is_finite());
                prop_assert!(m.compressor_work.is_finite());
                prop_assert!(m.thermal_efficiency.is_finite());
            }
            CycleResult::Infeasible(reason) => {
                prop_assert!(infeasibility_is_finite(&reason), "{:?}", reason);
            }
        }
    }

    #[test]
    fn evaluation_is_pure(opr in 1.0_f64..=40.0, tit in 300.0_f64..2000.0) {
        let cfg = CycleConfig::reference();
        let a = cfg.evaluate(point(opr, tit));
        let b = cfg.evaluate(point(opr, tit));
        prop_assert_eq!(a, b);
    }
}
