//! Quadratic regression
//!
//! Every Marshall property is modelled as a degree-2 polynomial of the
//! asphalt content, fitted by ordinary least squares:
//!
//! ```text
//! y = a·x² + b·x + c
//! ```
//!
//! This module provides the fit itself, the R² score, the dense curve used
//! for rendering and the per-property [`RegressionResult`].

pub mod quadratic;
pub mod result;
pub mod score;


pub use quadratic::QuadraticModel;
pub use result::{sample_curve, RegressionResult};
pub use score::{r_squared, score};
