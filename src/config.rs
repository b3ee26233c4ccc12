//! Engine definition files
//!
//! Engines can be described in a JSON file and loaded in bulk:
//!
//! ```json
//! {
//!   "engines": [
//!     { "displacement_liters": 2.0, "cylinders": 4 },
//!     { "displacement_liters": 6.2, "cylinders": 8, "fuel_type": "Diesel" }
//!   ]
//! }
//! ```
//!
//! `cylinders` is kept as a raw JSON number until an engine is built so that
//! `4.0` is rejected the same way `4.5` is.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::engine::{self, Engine};
use crate::types::DEFAULT_FUEL_TYPE;

/// One engine definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub displacement_liters: f64,
    pub cylinders: serde_json::Number,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
}

impl EngineConfig {
    pub fn new(displacement_liters: f64, cylinders: i64, fuel_type: Option<String>) -> Self {
        Self {
            displacement_liters,
            cylinders: cylinders.into(),
            fuel_type,
        }
    }

    /// Fuel type, falling back to the default
    pub fn fuel_type(&self) -> &str {
        self.fuel_type.as_deref().unwrap_or(DEFAULT_FUEL_TYPE)
    }

    /// Build a stopped engine from this definition.
    ///
    /// Validation order matches [`Engine::new`]: displacement first.
    pub fn build(&self) -> crate::error::Result<Engine> {
        let displacement = engine::validate_displacement(self.displacement_liters)?;
        let cylinders = engine::validate_cylinder_number(&self.cylinders)?;
        Engine::new(displacement, i64::from(cylinders), self.fuel_type())
    }
}

/// A file of engine definitions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineFile {
    pub engines: Vec<EngineConfig>,
}

impl EngineFile {
    /// Save to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize engine definitions to JSON")?;

        fs::write(&path, json).with_context(|| {
            format!("Failed to write engine definitions to {:?}", path.as_ref())
        })?;

        Ok(())
    }

    /// Load from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).with_context(|| {
            format!("Failed to read engine definitions from {:?}", path.as_ref())
        })?;

        let file: Self =
            serde_json::from_str(&content).context("Failed to parse engine definitions JSON")?;

        tracing::debug!(
            count = file.engines.len(),
            path = ?path.as_ref(),
            "loaded engine definitions"
        );
        Ok(file)
    }

    /// Check that the file defines at least one engine and that every
    /// definition builds.
    pub fn validate(&self) -> Result<()> {
        if self.engines.is_empty() {
            anyhow::bail!("Engine file must define at least one engine");
        }
        for (index, config) in self.engines.iter().enumerate() {
            config
                .build()
                .with_context(|| format!("Engine #{} is invalid", index))?;
        }
        Ok(())
    }

    /// Build every engine, stopping at the first invalid definition
    pub fn build_all(&self) -> Result<Vec<Engine>> {
        self.engines
            .iter()
            .enumerate()
            .map(|(index, config)| {
                config
                    .build()
                    .with_context(|| format!("Engine #{} is invalid", index))
            })
            .collect()
    }
}
