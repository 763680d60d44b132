//! Marshall dataset: every measured property over one asphalt-content axis

use indexmap::IndexMap;

use super::*;

/// Measurements from one Marshall test campaign
///
/// All property columns share the asphalt-content axis and its length.
/// Property order is insertion order, which is the order reports use.
#[derive(Clone, Debug, PartialEq)]
pub struct MarshallDataset {
    pub(super) asphalt_content: FloatArray,
    pub(super) properties: IndexMap<Property, FloatArray>,
}

impl MarshallDataset {
    /// Start building a dataset over the given asphalt contents
    pub fn builder(asphalt_content: impl Into<FloatArray>) -> MarshallDatasetBuilder {
        MarshallDatasetBuilder::new(asphalt_content)
    }

    /// Asphalt content of each specimen (%)
    pub fn asphalt_content(&self) -> &FloatArray {
        &self.asphalt_content
    }

    /// Number of specimens
    pub fn n_samples(&self) -> usize {
        self.asphalt_content.len()
    }

    /// Closed range of tested asphalt contents
    pub fn asphalt_range(&self) -> (f64, f64) {
        bounds(&self.asphalt_content)
    }

    /// Properties present, in insertion order
    pub fn properties(&self) -> impl Iterator<Item = Property> + '_ {
        self.properties.keys().copied()
    }

    /// Whether a property was measured
    pub fn contains(&self, property: Property) -> bool {
        self.properties.contains_key(&property)
    }

    /// Raw values of one property
    pub fn values(&self, property: Property) -> Result<&FloatArray> {
        self.properties
            .get(&property)
            .ok_or(DataError::MissingProperty(property))
    }

    /// Sample series (asphalt content vs property)
    pub fn series(&self, property: Property) -> Result<SampleSeries> {
        let y = self.values(property)?;
        SampleSeries::new(self.asphalt_content.clone(), y.clone())
    }

    /// Every property paired with its sample series
    pub fn iter_series(&self) -> impl Iterator<Item = Result<(Property, SampleSeries)>> + '_ {
        self.properties
            .keys()
            .map(move |&p| self.series(p).map(|s| (p, s)))
    }
}
