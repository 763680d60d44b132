//! Core types shared by the models

use ndarray::Array1;
use serde::{Deserialize, Serialize};

pub use crate::error::ModelError;

/// Result type for model operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Parallel x and y coordinates, as sent to renderers
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Points {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Points {
    /// Build from two arrays of equal length
    pub fn from_arrays(x: &Array1<f64>, y: &Array1<f64>) -> Self {
        Self {
            x: x.to_vec(),
            y: y.to_vec(),
        }
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}
