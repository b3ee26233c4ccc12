//! Engine spec sheet
//!
//! [`EngineSpecs`] maps four fixed labels to an engine's attribute values.
//! It serializes to a JSON object keyed by those labels.

use crate::types::{EngineStatus, SpecValue};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const LABEL_DISPLACEMENT: &str = "Displacement (L)";
pub const LABEL_CYLINDERS: &str = "Cylinders";
pub const LABEL_FUEL_TYPE: &str = "Fuel Type";
pub const LABEL_STATUS: &str = "Status";

/// All labels in display order
pub const LABELS: [&str; 4] = [
    LABEL_DISPLACEMENT,
    LABEL_CYLINDERS,
    LABEL_FUEL_TYPE,
    LABEL_STATUS,
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSpecs {
    #[serde(rename = "Displacement (L)")]
    pub displacement: f64,
    #[serde(rename = "Cylinders")]
    pub cylinders: u32,
    #[serde(rename = "Fuel Type")]
    pub fuel_type: String,
    #[serde(rename = "Status")]
    pub status: EngineStatus,
}

impl EngineSpecs {
    /// Label/value pairs in display order
    pub fn entries(&self) -> [(&'static str, SpecValue); 4] {
        [
            (LABEL_DISPLACEMENT, SpecValue::Liters(self.displacement)),
            (LABEL_CYLINDERS, SpecValue::Count(self.cylinders)),
            (LABEL_FUEL_TYPE, SpecValue::Text(self.fuel_type.clone())),
            (LABEL_STATUS, SpecValue::Text(self.status.to_string())),
        ]
    }

    /// Look up a value by its label
    pub fn get(&self, label: &str) -> Option<SpecValue> {
        self.entries()
            .into_iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v)
    }
}

/// `{'Displacement (L)': 2.0, 'Cylinders': 4, 'Fuel Type': 'Gasoline', 'Status': 'Stopped'}`
impl fmt::Display for EngineSpecs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (label, value)) in self.entries().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{}': {}", label, value)?;
        }
        f.write_str("}")
    }
}
