//! Per-property regression result

use ndarray::Array1;
use serde::Serialize;

use mo_core::config::AnalysisConfig;
use mo_core::data::{DataError, SampleSeries};

use crate::base::{ModelError, Points, Result};
use crate::poly::{r_squared, QuadraticModel};

/// Regression of one property against asphalt content
///
/// Serializes to the `regression_curves` entries of the response payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegressionResult {
    /// Fitted model
    #[serde(skip)]
    pub model: QuadraticModel,
    /// Equation text for display
    pub equation: String,
    /// Unrounded R²
    #[serde(skip)]
    pub r_squared: f64,
    /// R² rounded to the configured precision
    pub r2_score: f64,
    /// Measured points
    pub original_points: Points,
    /// Densely sampled fitted curve
    pub curve_points: Points,
}

impl RegressionResult {
    /// Fit, score and sample one series
    pub fn from_series(series: &SampleSeries, config: &AnalysisConfig) -> Result<Self> {
        let model = QuadraticModel::fit_series(series)?;
        let r_squared = r_squared(&model, series)?;
        let curve_points = sample_curve(&model, series, config.curve_points)?;

        log::debug!("R² = {r_squared:.6} for {}", model.equation(6));

        Ok(Self {
            model,
            equation: model.equation(config.precision.equation_decimals),
            r_squared,
            r2_score: config.precision.round_r_squared(r_squared),
            original_points: Points::from_arrays(series.x(), series.y()),
            curve_points,
        })
    }
}

/// Sample `n_points` equally spaced x values over `[min(x), max(x)]`,
/// both ends included, with the fitted y at each.
pub fn sample_curve(
    model: &QuadraticModel,
    series: &SampleSeries,
    n_points: usize,
) -> Result<Points> {
    if n_points < 2 {
        return Err(ModelError::Data(DataError::InvalidParameter(format!(
            "a curve needs at least 2 points, got {n_points}"
        ))));
    }

    let (lo, hi) = series.x_range();
    let mut x = Array1::linspace(lo, hi, n_points);
    // Pin the end point; accumulated steps can land an ulp short
    x[n_points - 1] = hi;
    let y = model.evaluate_many(&x);

    log::trace!("sampled {n_points} curve points over [{lo}, {hi}]");

    Ok(Points::from_arrays(&x, &y))
}
