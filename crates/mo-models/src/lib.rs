//! # mo-models
//!
//! Regression and optimization models for Marshall mix design.
//!
//! - [`poly`]: least-squares quadratic fits, R² scoring and curve sampling
//! - [`optim`]: closed-form root solving and the optimum binder content
//! - [`schema`]: request and response payloads for outer layers
//!
//! ```no_run
//! use mo_core::{AnalysisConfig, MarshallDataset, Property};
//! use mo_models::optim::analyze;
//!
//! let dataset = MarshallDataset::builder(vec![4.5, 5.0, 5.5, 6.0])
//!     .with_property(Property::AirVoids, vec![7.1, 5.8, 4.1, 2.3])?
//!     .build()?;
//! let result = analyze(&dataset, 4.0, &AnalysisConfig::default())?;
//! println!("{}", result.optimization_results.optimum_asphalt_content);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod base;
pub mod error;
pub mod optim;
pub mod poly;
pub mod schema;

pub use base::{Points, Result};
pub use error::{DegenerateReason, ErrorKind, ModelError};
pub use optim::{analyze, AnalysisResult, OptimizationResult, Optimizer, QuadraticRoots};
pub use poly::{QuadraticModel, RegressionResult};
pub use schema::{ErrorResponse, MarshallInput, MarshallOutput};
