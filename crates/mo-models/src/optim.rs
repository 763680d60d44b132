//! Optimum binder content
//!
//! The optimum is the asphalt content at which the fitted air-void curve
//! reaches the design target. It is found by solving
//!
//! ```text
//! a·x² + b·x + (c − target) = 0
//! ```
//!
//! in closed form and keeping the smallest real root inside the tested
//! range. Every property curve is then evaluated at that content.

pub mod analysis;
pub mod optimizer;
pub mod roots;


pub use analysis::{analyze, AnalysisResult};
pub use optimizer::{OptimizationResult, Optimizer};
pub use roots::QuadraticRoots;
