//! # mo-core
//!
//! Core data structures for MarshallOxide.
//!
//! This crate holds the data layer shared by the regression and optimization
//! models: the Marshall properties, validated sample series, the dataset that
//! ties every property to one asphalt-content axis, and the analysis
//! configuration with its named precision levels.

pub mod config;
pub mod data;

pub use config::{AnalysisConfig, Precision};
pub use data::{DataError, MarshallDataset, MarshallDatasetBuilder, Property, SampleSeries};
