//! Request and response payloads
//!
//! An outer layer (HTTP service, CLI) accepts a [`MarshallInput`], runs
//! [`MarshallInput::analyze`] and returns either the serialized
//! [`MarshallOutput`] or an [`ErrorResponse`] classified by [`ErrorKind`].

use serde::{Deserialize, Serialize};

use mo_core::config::AnalysisConfig;
use mo_core::data::{MarshallDataset, Property};

use crate::base::{ModelError, Result};
use crate::error::ErrorKind;
use crate::optim::{analyze, AnalysisResult};

/// Response payload
pub type MarshallOutput = AnalysisResult;

/// Marshall test data as submitted by a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarshallInput {
    /// Asphalt content of each specimen (%)
    pub asphalt_content: Vec<f64>,
    /// Unit weight (g/cm³)
    pub unit_weight: Vec<f64>,
    /// Air voids (%)
    pub voids_percentage: Vec<f64>,
    /// Voids in mineral aggregate (%)
    pub vma_percentage: Vec<f64>,
    /// Voids filled with asphalt (%)
    pub vfa_percentage: Vec<f64>,
    /// Stability (kg)
    pub stability: Vec<f64>,
    /// Flow (mm)
    pub flow: Vec<f64>,
    /// Target air voids (%), strictly between 0 and 10
    #[serde(default = "default_target_voids")]
    pub target_voids: f64,
}

fn default_target_voids() -> f64 {
    AnalysisConfig::default().default_target_voids
}

impl MarshallInput {
    /// Reference dataset from a four-specimen laboratory campaign
    pub fn example() -> Self {
        Self {
            asphalt_content: vec![4.5, 5.0, 5.5, 6.0],
            unit_weight: vec![2.459, 2.476, 2.496, 2.520],
            voids_percentage: vec![7.1, 5.8, 4.1, 2.3],
            vma_percentage: vec![16.61, 16.47, 16.26, 15.90],
            vfa_percentage: vec![57.17, 64.84, 75.55, 85.46],
            stability: vec![1110.0, 1157.0, 1159.0, 1128.0],
            flow: vec![2.85, 3.12, 3.35, 3.42],
            target_voids: default_target_voids(),
        }
    }

    /// Property columns in report order
    fn columns(&self) -> [(Property, &Vec<f64>); 6] {
        [
            (Property::UnitWeight, &self.unit_weight),
            (Property::AirVoids, &self.voids_percentage),
            (Property::Vma, &self.vma_percentage),
            (Property::Vfa, &self.vfa_percentage),
            (Property::Stability, &self.stability),
            (Property::Flow, &self.flow),
        ]
    }

    /// Validate lengths and values and build the dataset
    pub fn to_dataset(&self) -> Result<MarshallDataset> {
        let builder = self.columns().into_iter().try_fold(
            MarshallDataset::builder(self.asphalt_content.clone()),
            |builder, (property, values)| builder.with_property(property, values.clone()),
        )?;

        Ok(builder.build()?)
    }

    /// Run the full analysis on this payload
    pub fn analyze(&self, config: &AnalysisConfig) -> Result<MarshallOutput> {
        let dataset = self.to_dataset()?;
        analyze(&dataset, self.target_voids, config)
    }
}

/// Error payload returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    /// Build the payload for an error together with its classification.
    ///
    /// Client errors carry the full message so the caller can adjust the
    /// input; anything else gets a generic prefix.
    pub fn from_error(err: &ModelError) -> (ErrorKind, Self) {
        let kind = err.kind();
        let detail = match kind {
            ErrorKind::Client => err.to_string(),
            ErrorKind::Server => format!("An unexpected error occurred: {err}"),
        };
        (kind, Self { detail })
    }
}
