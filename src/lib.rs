//! engine-state Library
//!
//! A small model of a vehicle engine: validated construction, start/stop
//! toggling and a spec-sheet accessor, plus JSON engine definition files and
//! the scripted demonstration used by the binary.

pub mod cli;
pub mod config;
pub mod demo;
pub mod engine;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use config::{EngineConfig, EngineFile};
pub use demo::run_demo;
pub use engine::{Engine, EngineSpecs, Notice};
pub use error::{EngineError, Result};
pub use types::{DEFAULT_FUEL_TYPE, EngineStatus, SpecValue};
