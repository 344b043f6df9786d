//! Common utilities for station calculations.

/// Fixed fractional total-pressure loss across the combustor.
pub const COMBUSTOR_PRESSURE_LOSS: f64 = 0.04;

/// Exit velocities below this are treated as no thrust (m/s).
pub const EPSILON_VELOCITY: f64 = 1e-9;

/// Isentropic temperature exponent `(γ-1)/γ`.
#[inline]
pub fn temperature_exponent(gamma: f64) -> f64 {
    (gamma - 1.0) / gamma
}

/// Isentropic pressure exponent `γ/(γ-1)`.
#[inline]
pub fn pressure_exponent(gamma: f64) -> f64 {
    gamma / (gamma - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exponents_are_reciprocal() {
        let g = 1.33;
        assert!((temperature_exponent(g) * pressure_exponent(g) - 1.0).abs() < 1e-15);
        assert!((temperature_exponent(1.4) - 0.4 / 1.4).abs() < 1e-15);
    }
}
