//! Optimum asphalt content solver

use indexmap::IndexMap;
use serde::Serialize;

use mo_core::config::AnalysisConfig;
use mo_core::data::{DataError, MarshallDataset, Property};

use crate::base::{ModelError, Result};
use crate::optim::QuadraticRoots;
use crate::poly::QuadraticModel;

/// Optimum asphalt content and the mix properties predicted there
///
/// Serializes to the `optimization_results` block of the response payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationResult {
    /// Property the optimum was solved for
    #[serde(skip)]
    pub target_property: Property,
    /// Target value of that property
    pub target_air_voids: f64,
    /// Unrounded optimum
    #[serde(skip)]
    pub optimum: f64,
    /// Optimum rounded to the result precision
    pub optimum_asphalt_content: f64,
    /// Every property predicted at the unrounded optimum, rounded
    pub final_properties: IndexMap<Property, f64>,
    /// Real roots of the target equation before range filtering, ascending
    #[serde(skip)]
    pub candidate_roots: Vec<f64>,
}

/// Solves for the asphalt content that reaches a target property value
#[derive(Debug, Clone, Default)]
pub struct Optimizer {
    config: AnalysisConfig,
}

impl Optimizer {
    /// Create an optimizer with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    /// Solve for a different property than the configured one
    pub fn target_property(mut self, property: Property) -> Self {
        self.config.target_property = property;
        self
    }

    /// Find the optimum asphalt content for `target` and predict every
    /// property of the dataset there.
    ///
    /// Only roots inside the tested asphalt-content range qualify. A root
    /// off an endpoint by no more than `root_tolerance` times the range width
    /// (at least 1) is clamped onto it. When two qualify, the smaller one is
    /// taken.
    pub fn optimize(&self, dataset: &MarshallDataset, target: f64) -> Result<OptimizationResult> {
        if !target.is_finite() {
            return Err(DataError::InvalidParameter(format!(
                "target value must be finite, got {target}"
            ))
            .into());
        }

        let property = self.config.target_property;
        let series = dataset.series(property)?;
        let (x_min, x_max) = series.x_range();

        let model = QuadraticModel::fit_series(&series)?;
        let roots = QuadraticRoots::solve(&model.shifted(target), self.config.root_tolerance);
        let candidate_roots = roots.to_vec();

        log::debug!(
            "{property} = {target}: real roots {candidate_roots:?}, tested range [{x_min}, {x_max}]"
        );

        let slack = self.config.root_tolerance * (x_max - x_min).max(1.0);
        let optimum = roots.first_within(x_min, x_max, slack).ok_or_else(|| {
            log::warn!("no root of {property} = {target} inside [{x_min}, {x_max}]");
            ModelError::NoValidOptimum {
                target,
                x_min,
                x_max,
                candidates: candidate_roots.clone(),
            }
        })?;

        let final_properties = self.predict_all(dataset, optimum)?;

        log::info!("optimum asphalt content {optimum:.4} for {property} = {target}");

        Ok(OptimizationResult {
            target_property: property,
            target_air_voids: target,
            optimum,
            optimum_asphalt_content: self.config.precision.round_result(optimum),
            final_properties,
            candidate_roots,
        })
    }

    /// Predict every property at a chosen asphalt content inside the tested
    /// range
    pub fn properties_at(
        &self,
        dataset: &MarshallDataset,
        asphalt_content: f64,
    ) -> Result<IndexMap<Property, f64>> {
        let (x_min, x_max) = dataset.asphalt_range();
        if !(asphalt_content >= x_min && asphalt_content <= x_max) {
            return Err(ModelError::OutOfRange {
                x: asphalt_content,
                x_min,
                x_max,
            });
        }

        self.predict_all(dataset, asphalt_content)
    }

    /// Fit each property on its own and evaluate it at `x`
    fn predict_all(&self, dataset: &MarshallDataset, x: f64) -> Result<IndexMap<Property, f64>> {
        dataset
            .iter_series()
            .map(|entry| -> Result<_> {
                let (property, series) = entry?;
                let model = QuadraticModel::fit_series(&series)?;
                let value = model.evaluate(x);
                if !value.is_finite() {
                    return Err(ModelError::numerical(
                        format!("{property} evaluates to {value} at {x}"),
                        "predict",
                    ));
                }
                Ok((property, self.config.precision.round_result(value)))
            })
            .collect()
    }
}
