//! Marshall mix properties and their wire identifiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DataError;

/// A property measured on each Marshall specimen.
///
/// The serialized form is the identifier used in request and response
/// payloads (`peso_unitario`, `porcentaje_vacios`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Property {
    /// Unit weight of the compacted mix (g/cm³)
    #[serde(rename = "peso_unitario")]
    UnitWeight,
    /// Air voids in the compacted mix (%)
    #[serde(rename = "porcentaje_vacios")]
    AirVoids,
    /// Voids in mineral aggregate (%)
    #[serde(rename = "vam")]
    Vma,
    /// Voids filled with asphalt (%)
    #[serde(rename = "vfa")]
    Vfa,
    /// Marshall stability (kg)
    #[serde(rename = "estabilidad")]
    Stability,
    /// Marshall flow (mm)
    #[serde(rename = "flujo")]
    Flow,
}

impl Property {
    /// Every property, in the order they appear in reports.
    pub const ALL: [Property; 6] = [
        Property::UnitWeight,
        Property::AirVoids,
        Property::Vma,
        Property::Vfa,
        Property::Stability,
        Property::Flow,
    ];

    /// Identifier used in payloads
    pub fn id(self) -> &'static str {
        match self {
            Property::UnitWeight => "peso_unitario",
            Property::AirVoids => "porcentaje_vacios",
            Property::Vma => "vam",
            Property::Vfa => "vfa",
            Property::Stability => "estabilidad",
            Property::Flow => "flujo",
        }
    }

    /// Human-readable label for summaries
    pub fn label(self) -> &'static str {
        match self {
            Property::UnitWeight => "Unit weight",
            Property::AirVoids => "Air voids",
            Property::Vma => "VMA",
            Property::Vfa => "VFA",
            Property::Stability => "Stability",
            Property::Flow => "Flow",
        }
    }

    /// Measurement unit
    pub fn unit(self) -> &'static str {
        match self {
            Property::UnitWeight => "g/cm³",
            Property::AirVoids | Property::Vma | Property::Vfa => "%",
            Property::Stability => "kg",
            Property::Flow => "mm",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Property {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Property::ALL
            .into_iter()
            .find(|p| p.id() == s)
            .ok_or_else(|| DataError::UnknownProperty(s.to_string()))
    }
}
