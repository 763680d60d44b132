//! Analysis configuration
//!
//! The reference workflow rounds at three different places (equation text,
//! R², final results). Those precisions live together in [`Precision`] so the
//! output contract is stated once.

use serde::{Deserialize, Serialize};

use crate::data::{DataError, Property, Result, SampleSeries};

/// Named precision levels for reported numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Precision {
    /// Decimals of each coefficient in the equation text
    pub equation_decimals: u32,
    /// Decimals of the reported R²
    pub r_squared_decimals: u32,
    /// Decimals of the optimum asphalt content and predicted properties
    pub result_decimals: u32,
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            equation_decimals: 4,
            r_squared_decimals: 5,
            result_decimals: 2,
        }
    }
}

impl Precision {
    /// Largest number of decimals an `f64` can meaningfully carry
    pub const MAX_DECIMALS: u32 = 15;

    /// Check every precision level against [`Precision::MAX_DECIMALS`]
    pub fn validate(&self) -> Result<()> {
        let levels = [
            ("equation_decimals", self.equation_decimals),
            ("r_squared_decimals", self.r_squared_decimals),
            ("result_decimals", self.result_decimals),
        ];
        for (name, decimals) in levels {
            if decimals > Self::MAX_DECIMALS {
                return Err(DataError::InvalidParameter(format!(
                    "{name} must be at most {}, got {decimals}",
                    Self::MAX_DECIMALS
                )));
            }
        }
        Ok(())
    }

    /// Round an R² value for reporting
    pub fn round_r_squared(&self, value: f64) -> f64 {
        round_to(value, self.r_squared_decimals)
    }

    /// Round an optimum or predicted property for reporting
    pub fn round_result(&self, value: f64) -> f64 {
        round_to(value, self.result_decimals)
    }
}

/// Round half away from zero to a fixed number of decimals
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Analysis configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Reporting precision
    pub precision: Precision,
    /// Number of points in each rendered curve
    pub curve_points: usize,
    /// Minimum specimens required by an analysis
    pub min_samples: usize,
    /// Property solved for the optimum
    pub target_property: Property,
    /// Target value used when a request does not supply one
    pub default_target_voids: f64,
    /// Open interval a target value must fall in
    pub target_bounds: (f64, f64),
    /// Relative tolerance for zero tests in the root solve
    pub root_tolerance: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            precision: Precision::default(),
            curve_points: 100,
            min_samples: 4,
            target_property: Property::AirVoids,
            default_target_voids: 4.0,
            target_bounds: (0.0, 10.0),
            root_tolerance: 1e-9,
        }
    }
}

impl AnalysisConfig {
    /// Check the configuration for values no analysis can run with
    pub fn validate(&self) -> Result<()> {
        self.precision.validate()?;

        if self.curve_points < 2 {
            return Err(DataError::InvalidParameter(format!(
                "curve_points must be at least 2, got {}",
                self.curve_points
            )));
        }

        if self.min_samples < SampleSeries::MIN_LEN {
            return Err(DataError::InvalidParameter(format!(
                "min_samples must be at least {}, got {}",
                SampleSeries::MIN_LEN,
                self.min_samples
            )));
        }

        let (lo, hi) = self.target_bounds;
        if !(lo.is_finite() && hi.is_finite() && lo < hi) {
            return Err(DataError::InvalidParameter(format!(
                "target_bounds ({lo}, {hi}) is not a valid interval"
            )));
        }

        if !(self.root_tolerance.is_finite() && self.root_tolerance >= 0.0) {
            return Err(DataError::InvalidParameter(format!(
                "root_tolerance must be a non-negative number, got {}",
                self.root_tolerance
            )));
        }

        self.validate_target(self.default_target_voids)
    }

    /// Check a target value against the open interval `target_bounds`
    pub fn validate_target(&self, target: f64) -> Result<()> {
        let (lo, hi) = self.target_bounds;
        if target.is_finite() && target > lo && target < hi {
            Ok(())
        } else {
            Err(DataError::InvalidParameter(format!(
                "target value {target} must lie strictly between {lo} and {hi}"
            )))
        }
    }
}
