//! Parameter sweep generation.
//!
//! Generates ordered samples of one design parameter (typically the
//! compressor pressure ratio) between two bounds.

use crate::error::{SweepError, SweepResult};
use std::fmt;

/// Type of sweep progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepSpacing {
    /// Uniformly spaced points
    #[default]
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

/// Definition of a single parameter sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepDefinition {
    start: f64,
    end: f64,
    num_points: usize,
    spacing: SweepSpacing,
}

impl SweepDefinition {
    /// Create a sweep between two bounds.
    ///
    /// # Errors
    /// Returns error for fewer than 2 points, identical or non-finite bounds,
    /// or non-positive bounds with logarithmic spacing.
    pub fn new(
        start: f64,
        end: f64,
        num_points: usize,
        spacing: SweepSpacing,
    ) -> SweepResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(SweepError::InvalidConfiguration(
                "Sweep bounds must be finite".to_string(),
            ));
        }

        if num_points < 2 {
            return Err(SweepError::InvalidConfiguration(
                "Sweep must have at least 2 points".to_string(),
            ));
        }

        if (start - end).abs() < 1e-12 {
            return Err(SweepError::InvalidConfiguration(
                "Start and end values must be different".to_string(),
            ));
        }

        if spacing == SweepSpacing::Logarithmic && (start <= 0.0 || end <= 0.0) {
            return Err(SweepError::InvalidConfiguration(
                "Logarithmic sweep bounds must be positive".to_string(),
            ));
        }

        Ok(Self {
            start,
            end,
            num_points,
            spacing,
        })
    }

    /// Evenly spaced samples, like a fixed-count `linspace`.
    pub fn linear(start: f64, end: f64, num_points: usize) -> SweepResult<Self> {
        Self::new(start, end, num_points, SweepSpacing::Linear)
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    pub fn spacing(&self) -> SweepSpacing {
        self.spacing
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<f64> {
        match self.spacing {
            SweepSpacing::Linear => self.generate_linear(),
            SweepSpacing::Logarithmic => self.generate_logarithmic(),
        }
    }

    fn generate_linear(&self) -> Vec<f64> {
        let mut points = Vec::with_capacity(self.num_points);
        let delta = (self.end - self.start) / (self.num_points - 1) as f64;

        for i in 0..self.num_points {
            points.push(self.start + i as f64 * delta);
        }

        // Ensure exact endpoint
        points[self.num_points - 1] = self.end;
        points
    }

    fn generate_logarithmic(&self) -> Vec<f64> {
        let mut points = Vec::with_capacity(self.num_points);
        let log_start = self.start.ln();
        let log_end = self.end.ln();
        let log_delta = (log_end - log_start) / (self.num_points - 1) as f64;

        for i in 0..self.num_points {
            let log_val = log_start + i as f64 * log_delta;
            points.push(log_val.exp());
        }

        // Ensure exact endpoints
        points[0] = self.start;
        points[self.num_points - 1] = self.end;
        points
    }
}

impl fmt::Display for SweepSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep from {} to {} ({} points, {})",
            self.start, self.end, self.num_points, self.spacing
        )
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn linear_points_are_ordered(
            start in 1.0_f64..10.0,
            span in 0.1_f64..30.0,
            n in 2_usize..200,
        ) {
            let points = SweepDefinition::linear(start, start + span, n)
                .unwrap()
                .generate_points();
            prop_assert_eq!(points.len(), n);
            prop_assert!(points.windows(2).all(|w| w[1] > w[0]));
            prop_assert_eq!(points[n - 1], start + span);
        }
    }
}
