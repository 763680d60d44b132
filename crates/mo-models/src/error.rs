//! Model-related error types

use std::fmt;

use thiserror::Error;

use mo_core::data::DataError;

/// Model-related errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// Data-related error
    #[error("Data error: {0}")]
    Data(DataError),

    /// Too few samples for a quadratic fit
    #[error("Not enough data: {n_samples} samples, at least {required} required")]
    InsufficientData {
        /// Number of samples
        n_samples: usize,
        /// Minimum number of samples
        required: usize,
    },

    /// x and y series of different lengths
    #[error("Not enough data: x has {x_len} values but y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    /// Goodness of fit is undefined for this series
    #[error("Degenerate fit: {reason}")]
    DegenerateFit { reason: DegenerateReason },

    /// No real root of the target equation inside the tested range
    #[error(
        "No optimum asphalt content reaches the target value {target} within the tested range \
         [{x_min}, {x_max}] (real roots found: {candidates:?})"
    )]
    NoValidOptimum {
        /// Target value that was solved for
        target: f64,
        /// Lowest tested asphalt content
        x_min: f64,
        /// Highest tested asphalt content
        x_max: f64,
        /// Real roots found before range filtering, ascending
        candidates: Vec<f64>,
    },

    /// Requested asphalt content lies outside the tested range
    #[error("Asphalt content {x} is outside the tested range [{x_min}, {x_max}]")]
    OutOfRange { x: f64, x_min: f64, x_max: f64 },

    /// Numerical computation error
    #[error("Numerical error: {message} (operation: {operation})")]
    NumericalError {
        /// Error message
        message: String,
        /// Operation that failed
        operation: String,
    },
}

/// Why a fit cannot be scored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateReason {
    /// As many points as coefficients: residuals are zero by construction
    Saturated { n_samples: usize },
    /// Zero-variance response that the curve does not reproduce
    ConstantResponse,
    /// Fewer than three distinct x values
    RankDeficient { rank: usize },
}

impl fmt::Display for DegenerateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegenerateReason::Saturated { n_samples } => write!(
                f,
                "saturated fit ({n_samples} points for 3 coefficients), R² is not informative"
            ),
            DegenerateReason::ConstantResponse => {
                write!(f, "response has zero variance but non-zero residuals")
            }
            DegenerateReason::RankDeficient { rank } => {
                write!(f, "design matrix has rank {rank}, need 3 distinct x values")
            }
        }
    }
}

/// Which side of a request/response boundary an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad or unusable input; the caller can fix it
    Client,
    /// Unexpected failure inside the computation
    Server,
}

impl ModelError {
    /// Classify the error for a request/response boundary
    pub fn kind(&self) -> ErrorKind {
        match self {
            ModelError::NumericalError { .. } => ErrorKind::Server,
            _ => ErrorKind::Client,
        }
    }

    /// Whether the input series were too short or mismatched
    pub fn is_insufficient_data(&self) -> bool {
        matches!(
            self,
            ModelError::InsufficientData { .. } | ModelError::LengthMismatch { .. }
        )
    }

    pub(crate) fn numerical(message: impl Into<String>, operation: &str) -> Self {
        ModelError::NumericalError {
            message: message.into(),
            operation: operation.to_string(),
        }
    }
}

impl From<DataError> for ModelError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::TooFewSamples {
                n_samples,
                required,
            } => ModelError::InsufficientData {
                n_samples,
                required,
            },
            DataError::LengthMismatch { x_len, y_len } => {
                ModelError::LengthMismatch { x_len, y_len }
            }
            other => ModelError::Data(other),
        }
    }
}
