//! Data structures for Marshall test results
//!
//! A Marshall test produces one row per compacted specimen: the asphalt
//! content it was prepared with and the six properties measured on it.
//! This module stores those measurements column-wise, one `ndarray` vector
//! per property, all sharing the asphalt-content axis.

mod builder;
mod dataset;
mod property;
mod series;

#[cfg(test)]
mod tests;

// Re-exports
pub use builder::MarshallDatasetBuilder;
pub use dataset::MarshallDataset;
pub use property::Property;
pub use series::SampleSeries;

pub type FloatArray = ndarray::Array1<f64>;

/// Error types specific to data operations
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DataError {
    #[error("Length mismatch: x has {x_len} values, y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("Too few samples: got {n_samples}, at least {required} required")]
    TooFewSamples { n_samples: usize, required: usize },

    #[error("Non-finite value in {axis} at index {index}")]
    NonFinite { axis: &'static str, index: usize },

    #[error("Property '{0}' is missing from the dataset")]
    MissingProperty(Property),

    #[error("Duplicate property: {0}")]
    DuplicateProperty(Property),

    #[error("Unknown property identifier '{0}'")]
    UnknownProperty(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for data operations
pub type Result<T> = std::result::Result<T, DataError>;

/// Minimum and maximum of a non-empty array.
///
/// Returns `(NaN, NaN)`-free bounds as long as the array only holds finite
/// values, which `SampleSeries` guarantees.
pub(crate) fn bounds(values: &FloatArray) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

/// Check that every value is finite, naming the offending axis otherwise.
pub(crate) fn ensure_finite(values: &FloatArray, axis: &'static str) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(DataError::NonFinite { axis, index }),
        None => Ok(()),
    }
}
