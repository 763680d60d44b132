//! Coefficient of determination
//!
//! R² = 1 − RSS / TSS. Two cases make that ratio meaningless and are
//! reported as [`ModelError::DegenerateFit`] instead:
//!
//! - a saturated fit (three points, three coefficients), where RSS is zero
//!   whatever the data;
//! - a constant response (TSS = 0) the curve does not reproduce.
//!
//! A constant response reproduced by the curve scores exactly 1. Sums of
//! squares that overflow are a [`ModelError::NumericalError`].

use mo_core::data::SampleSeries;

use crate::base::{ModelError, Result};
use crate::error::DegenerateReason;
use crate::poly::QuadraticModel;

/// R² of a model against raw x and y values
pub fn score(model: &QuadraticModel, x: &[f64], y: &[f64]) -> Result<f64> {
    let series = SampleSeries::from_slices(x, y)?;
    r_squared(model, &series)
}

/// R² of a model against a sample series
pub fn r_squared(model: &QuadraticModel, series: &SampleSeries) -> Result<f64> {
    let n = series.len();
    if n <= QuadraticModel::N_COEFFICIENTS {
        return Err(ModelError::DegenerateFit {
            reason: DegenerateReason::Saturated { n_samples: n },
        });
    }

    let y = series.y();
    let rss: f64 = series
        .points()
        .map(|(xi, yi)| (yi - model.evaluate(xi)).powi(2))
        .sum();
    if !rss.is_finite() {
        return Err(ModelError::numerical(
            format!("residual sum of squares is {rss}"),
            "score",
        ));
    }

    let (y_min, y_max) = series.y_range();
    if y_min == y_max {
        let sum_sq: f64 = y.iter().map(|v| v * v).sum();
        let tolerance = f64::EPSILON * n as f64 * (1.0 + sum_sq);
        return if rss <= tolerance {
            Ok(1.0)
        } else {
            log::warn!("constant response with residual sum of squares {rss:e}");
            Err(ModelError::DegenerateFit {
                reason: DegenerateReason::ConstantResponse,
            })
        };
    }

    let mean = y.mean().unwrap_or(0.0);
    let tss: f64 = y.iter().map(|&yi| (yi - mean).powi(2)).sum();

    if !tss.is_finite() {
        return Err(ModelError::numerical(
            format!("total sum of squares is {tss}"),
            "score",
        ));
    }

    let r2 = 1.0 - rss / tss;
    if r2.is_finite() {
        Ok(r2)
    } else {
        Err(ModelError::numerical(format!("R² is {r2}"), "score"))
    }
}
