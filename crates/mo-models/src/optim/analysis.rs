//! Full Marshall analysis: one regression per property plus the optimum

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use mo_core::config::AnalysisConfig;
use mo_core::data::{MarshallDataset, Property};

use crate::base::{ModelError, Result};
use crate::optim::{OptimizationResult, Optimizer};
use crate::poly::RegressionResult;

/// Regression curves for every property and the optimization block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// One regression per property, in dataset order
    pub regression_curves: IndexMap<Property, RegressionResult>,
    /// Optimum asphalt content and predicted properties
    pub optimization_results: OptimizationResult,
}

/// Analyze a Marshall dataset for a target air-void percentage
pub fn analyze(
    dataset: &MarshallDataset,
    target_voids: f64,
    config: &AnalysisConfig,
) -> Result<AnalysisResult> {
    config.validate()?;
    config.validate_target(target_voids)?;

    let n = dataset.n_samples();
    if n < config.min_samples {
        return Err(ModelError::InsufficientData {
            n_samples: n,
            required: config.min_samples,
        });
    }

    log::info!(
        "analyzing {} specimens over asphalt content {:?}, target {} = {}",
        n,
        dataset.asphalt_range(),
        config.target_property,
        target_voids
    );

    let regression_curves = dataset
        .iter_series()
        .map(|entry| -> Result<_> {
            let (property, series) = entry?;
            Ok((property, RegressionResult::from_series(&series, config)?))
        })
        .collect::<Result<IndexMap<_, _>>>()?;

    let optimization_results = Optimizer::new()
        .config(config.clone())
        .optimize(dataset, target_voids)?;

    Ok(AnalysisResult {
        regression_curves,
        optimization_results,
    })
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Marshall Analysis")?;
        writeln!(f, "=================")?;
        writeln!(f)?;

        writeln!(f, "Regression Curves:")?;
        writeln!(f, "{:<20} {:<44} {:>10}", "Property", "Equation", "R²")?;
        writeln!(f, "{:-<20} {:-<44} {:-<10}", "", "", "")?;
        for (property, curve) in &self.regression_curves {
            writeln!(
                f,
                "{:<20} {:<44} {:>10.5}",
                property.label(),
                curve.equation.trim_matches('$'),
                curve.r2_score
            )?;
        }
        writeln!(f)?;

        let opt = &self.optimization_results;
        writeln!(f, "Optimization:")?;
        writeln!(
            f,
            "  Target {}: {} {}",
            opt.target_property.label(),
            opt.target_air_voids,
            opt.target_property.unit()
        )?;
        writeln!(f, "  Optimum asphalt content: {:.2} %", opt.optimum_asphalt_content)?;
        for (property, value) in &opt.final_properties {
            writeln!(f, "  {:<18} {:>12} {}", property.label(), value, property.unit())?;
        }

        Ok(())
    }
}
