//! Least-squares quadratic model

use nalgebra::{DMatrix, DVector};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

use mo_core::data::SampleSeries;

use crate::base::{ModelError, Result};
use crate::error::DegenerateReason;

/// Relative cutoff below which a singular value counts as zero
const SINGULAR_EPS: f64 = 1e-12;

/// Quadratic model `a·x² + b·x + c`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadraticModel {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl QuadraticModel {
    /// Number of fitted coefficients
    pub const N_COEFFICIENTS: usize = 3;

    /// Create a model from known coefficients
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Fit to raw x and y values.
    ///
    /// Requires equal lengths and at least three points. Three points give an
    /// exact interpolation; callers wanting a meaningful R² should supply four
    /// or more.
    pub fn fit(x: &[f64], y: &[f64]) -> Result<Self> {
        let series = SampleSeries::from_slices(x, y)?;
        Self::fit_series(&series)
    }

    /// Fit to a validated sample series
    pub fn fit_series(series: &SampleSeries) -> Result<Self> {
        let n = series.len();
        if n < Self::N_COEFFICIENTS {
            return Err(ModelError::InsufficientData {
                n_samples: n,
                required: Self::N_COEFFICIENTS,
            });
        }

        // Design matrix with columns x², x, 1
        let design = DMatrix::from_fn(n, Self::N_COEFFICIENTS, |i, j| {
            series.x()[i].powi((Self::N_COEFFICIENTS - 1 - j) as i32)
        });
        let response = DVector::from_iterator(n, series.y().iter().copied());

        let svd = design.svd(true, true);
        let eps = svd.singular_values.max() * SINGULAR_EPS;

        let rank = svd.rank(eps);
        if rank < Self::N_COEFFICIENTS {
            log::warn!("quadratic fit is rank deficient (rank {rank})");
            return Err(ModelError::DegenerateFit {
                reason: DegenerateReason::RankDeficient { rank },
            });
        }

        let beta = svd
            .solve(&response, eps)
            .map_err(|e| ModelError::numerical(format!("SVD least squares failed: {e}"), "fit"))?;

        if beta.iter().any(|v| !v.is_finite()) {
            return Err(ModelError::numerical(
                "least squares produced non-finite coefficients",
                "fit",
            ));
        }

        let model = Self::new(beta[0], beta[1], beta[2]);
        log::debug!(
            "fitted quadratic on {} points: a={:.6}, b={:.6}, c={:.6}",
            n,
            model.a,
            model.b,
            model.c
        );

        Ok(model)
    }

    /// Coefficients in descending degree order
    pub fn coefficients(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    /// Evaluate at one point
    pub fn evaluate(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }

    /// Evaluate at every point of an array
    pub fn evaluate_many(&self, x: &Array1<f64>) -> Array1<f64> {
        x.mapv(|v| self.evaluate(v))
    }

    /// Model of `f(x) - target`, used to solve `f(x) = target`
    pub fn shifted(&self, target: f64) -> Self {
        Self {
            c: self.c - target,
            ..*self
        }
    }

    /// Render as `$y = ax^2 +bx +c$` with a fixed number of decimals.
    ///
    /// Non-negative second and third coefficients get an explicit `+`;
    /// negative ones carry their own sign.
    pub fn equation(&self, decimals: u32) -> String {
        fn sign(v: f64) -> &'static str {
            if v >= 0.0 {
                "+"
            } else {
                ""
            }
        }

        format!(
            "$y = {:.d$}x^2 {}{:.d$}x {}{:.d$}$",
            self.a,
            sign(self.b),
            self.b,
            sign(self.c),
            self.c,
            d = decimals as usize
        )
    }
}
