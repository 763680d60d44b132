//! Builder for constructing Marshall datasets

use indexmap::IndexMap;

use super::*;

/// Builder for [`MarshallDataset`]
#[derive(Debug)]
pub struct MarshallDatasetBuilder {
    asphalt_content: FloatArray,
    properties: IndexMap<Property, FloatArray>,
}

impl MarshallDatasetBuilder {
    /// Create a builder over the given asphalt contents
    pub fn new(asphalt_content: impl Into<FloatArray>) -> Self {
        Self {
            asphalt_content: asphalt_content.into(),
            properties: IndexMap::new(),
        }
    }

    /// Add a property column
    pub fn with_property(
        mut self,
        property: Property,
        values: impl Into<FloatArray>,
    ) -> Result<Self> {
        if self.properties.contains_key(&property) {
            return Err(DataError::DuplicateProperty(property));
        }

        let values = values.into();
        if values.len() != self.asphalt_content.len() {
            return Err(DataError::LengthMismatch {
                x_len: self.asphalt_content.len(),
                y_len: values.len(),
            });
        }

        ensure_finite(&values, property.id())?;

        self.properties.insert(property, values);
        Ok(self)
    }

    /// Build the dataset
    pub fn build(self) -> Result<MarshallDataset> {
        let n = self.asphalt_content.len();
        if n < SampleSeries::MIN_LEN {
            return Err(DataError::TooFewSamples {
                n_samples: n,
                required: SampleSeries::MIN_LEN,
            });
        }

        ensure_finite(&self.asphalt_content, "asphalt_content")?;

        if self.properties.is_empty() {
            return Err(DataError::InvalidParameter(
                "dataset needs at least one property".to_string(),
            ));
        }

        log::trace!(
            "built Marshall dataset: {} specimens, {} properties",
            n,
            self.properties.len()
        );

        Ok(MarshallDataset {
            asphalt_content: self.asphalt_content,
            properties: self.properties,
        })
    }
}
