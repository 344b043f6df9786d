//! Illustrative thrust-to-weight index.
//!
//! A first-order heuristic for ranking micro-turbine design points: engine
//! weight is taken to grow with pressure ratio (heavier compressor) and with
//! turbine inlet temperature (heavier hot-section materials). The weight
//! factor has no physical derivation and is not part of the cycle model;
//! use it to compare points within one sweep, never as an absolute figure.

/// Weight factor `0.5 * OPR + 0.001 * TIT`.
pub fn weight_factor(pressure_ratio: f64, turbine_inlet_k: f64) -> f64 {
    0.5 * pressure_ratio + 0.001 * turbine_inlet_k
}

/// Specific thrust divided by [`weight_factor`].
pub fn thrust_to_weight_index(
    specific_thrust: f64,
    pressure_ratio: f64,
    turbine_inlet_k: f64,
) -> f64 {
    specific_thrust / weight_factor(pressure_ratio, turbine_inlet_k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_at_reference_point() {
        // 0.5*4 + 0.001*1300 = 3.3
        assert!((weight_factor(4.0, 1300.0) - 3.3).abs() < 1e-12);
        assert!((thrust_to_weight_index(660.0, 4.0, 1300.0) - 200.0).abs() < 1e-9);
    }
}
