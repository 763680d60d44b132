//! Sample series: paired (x, y) measurements for one property
//!
//! A `SampleSeries` is immutable once built. Construction validates the
//! invariants every regression relies on: equal lengths, at least
//! [`SampleSeries::MIN_LEN`] points and finite values only.

use super::*;

/// Ordered (x, y) pairs, one per tested specimen
#[derive(Clone, Debug, PartialEq)]
pub struct SampleSeries {
    x: FloatArray,
    y: FloatArray,
}

impl SampleSeries {
    /// A degree-2 fit is underdetermined below three points.
    pub const MIN_LEN: usize = 3;

    /// Create a validated series
    pub fn new(x: impl Into<FloatArray>, y: impl Into<FloatArray>) -> Result<Self> {
        let x = x.into();
        let y = y.into();

        if x.len() != y.len() {
            return Err(DataError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        if x.len() < Self::MIN_LEN {
            return Err(DataError::TooFewSamples {
                n_samples: x.len(),
                required: Self::MIN_LEN,
            });
        }

        ensure_finite(&x, "x")?;
        ensure_finite(&y, "y")?;

        Ok(Self { x, y })
    }

    /// Create a series from slices
    pub fn from_slices(x: &[f64], y: &[f64]) -> Result<Self> {
        Self::new(x.to_vec(), y.to_vec())
    }

    /// Independent values (asphalt content)
    pub fn x(&self) -> &FloatArray {
        &self.x
    }

    /// Dependent values (measured property)
    pub fn y(&self) -> &FloatArray {
        &self.y
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false for a validated series
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Closed range `[min(x), max(x)]`
    pub fn x_range(&self) -> (f64, f64) {
        bounds(&self.x)
    }

    /// Closed range `[min(y), max(y)]`
    pub fn y_range(&self) -> (f64, f64) {
        bounds(&self.y)
    }

    /// Whether `x` lies in the tested range
    pub fn covers(&self, x: f64) -> bool {
        let (lo, hi) = self.x_range();
        x >= lo && x <= hi
    }

    /// Iterate over (x, y) pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}
