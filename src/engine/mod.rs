//! Engine model
//!
//! An [`Engine`] holds four attributes: displacement and cylinder count are
//! validated once at construction, the fuel type defaults to
//! [`DEFAULT_FUEL_TYPE`], and the running flag is the only mutable field.
//!
//! # State Flow
//!
//! ```text
//! Stopped ──start()──▶ Running
//!    ▲                    │
//!    └──────stop()────────┘
//! ```
//!
//! Both transitions are no-ops when the engine is already in the target
//! state; they never fail.

pub mod notice;
pub mod specs;

pub use notice::Notice;
pub use specs::EngineSpecs;

use crate::error::{EngineError, Result};
use crate::types::{DEFAULT_FUEL_TYPE, EngineStatus};
use tracing::{debug, info};

const DISPLACEMENT_MSG: &str = "Displacement must be positive.";
const CYLINDERS_MSG: &str = "Cylinders must be a positive integer.";

/// A vehicle engine with a two-state running status.
///
/// # Example
///
/// ```
/// use engine_state::engine::{Engine, Notice};
///
/// let mut engine = Engine::with_default_fuel(2.0, 4).unwrap();
/// assert!(!engine.is_running());
///
/// assert!(matches!(engine.start(), Notice::Started { .. }));
/// assert_eq!(engine.start(), Notice::AlreadyRunning);
/// assert_eq!(engine.specs().status.to_string(), "Running");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    displacement: f64,
    cylinders: u32,
    fuel_type: String,
    is_running: bool,
}

impl Engine {
    /// Create a stopped engine.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `displacement_liters` is not a finite number
    /// greater than zero, or if `cylinders` is not a positive integer.
    /// Displacement is checked first.
    pub fn new(
        displacement_liters: f64,
        cylinders: i64,
        fuel_type: impl Into<String>,
    ) -> Result<Self> {
        let displacement = validate_displacement(displacement_liters)?;
        let cylinders = validate_cylinders(cylinders)?;
        let fuel_type = fuel_type.into();

        debug!(displacement, cylinders, fuel_type = %fuel_type, "engine constructed");

        Ok(Self {
            displacement,
            cylinders,
            fuel_type,
            is_running: false,
        })
    }

    /// Create a stopped engine burning [`DEFAULT_FUEL_TYPE`]
    pub fn with_default_fuel(displacement_liters: f64, cylinders: i64) -> Result<Self> {
        Self::new(displacement_liters, cylinders, DEFAULT_FUEL_TYPE)
    }

    #[inline]
    pub fn displacement(&self) -> f64 {
        self.displacement
    }

    #[inline]
    pub fn cylinders(&self) -> u32 {
        self.cylinders
    }

    #[inline]
    pub fn fuel_type(&self) -> &str {
        &self.fuel_type
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.is_running
    }

    #[inline]
    pub fn status(&self) -> EngineStatus {
        EngineStatus::from_running(self.is_running)
    }

    /// Start the engine.
    ///
    /// Returns [`Notice::Started`] on a Stopped → Running transition, or
    /// [`Notice::AlreadyRunning`] with no state change.
    pub fn start(&mut self) -> Notice {
        let notice = if self.is_running {
            Notice::AlreadyRunning
        } else {
            self.is_running = true;
            Notice::Started {
                fuel_type: self.fuel_type.clone(),
                displacement: self.displacement,
                cylinders: self.cylinders,
            }
        };
        info!(status = %self.status(), "{}", notice);
        notice
    }

    /// Stop the engine.
    ///
    /// Returns [`Notice::Stopped`] on a Running → Stopped transition, or
    /// [`Notice::AlreadyStopped`] with no state change.
    pub fn stop(&mut self) -> Notice {
        let notice = if self.is_running {
            self.is_running = false;
            Notice::Stopped
        } else {
            Notice::AlreadyStopped
        };
        info!(status = %self.status(), "{}", notice);
        notice
    }

    /// Snapshot of the engine's specifications
    pub fn specs(&self) -> EngineSpecs {
        EngineSpecs {
            displacement: self.displacement,
            cylinders: self.cylinders,
            fuel_type: self.fuel_type.clone(),
            status: self.status(),
        }
    }
}

/// Check that a displacement is a finite number greater than zero
pub fn validate_displacement(value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(EngineError::invalid_argument(DISPLACEMENT_MSG))
    }
}

/// Check that a cylinder count is a positive integer that fits a `u32`
pub fn validate_cylinders(value: i64) -> Result<u32> {
    if value <= 0 {
        return Err(EngineError::invalid_argument(CYLINDERS_MSG));
    }
    u32::try_from(value).map_err(|_| EngineError::invalid_argument(CYLINDERS_MSG))
}

/// Validate a cylinder count that arrived as an untyped JSON number.
///
/// Only integer literals are accepted: `4` is valid, `4.0` and `4.5` are not.
pub fn validate_cylinder_number(value: &serde_json::Number) -> Result<u32> {
    match value.as_i64() {
        Some(n) => validate_cylinders(n),
        None => Err(EngineError::invalid_argument(CYLINDERS_MSG)),
    }
}

/// Parse a cylinder count from text (CLI input).
///
/// Anything other than an integer literal, including `"4.0"`, is rejected
/// with `InvalidArgument`.
pub fn parse_cylinders(input: &str) -> Result<u32> {
    match input.trim().parse::<i64>() {
        Ok(n) => validate_cylinders(n),
        Err(_) => Err(EngineError::invalid_argument(CYLINDERS_MSG)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine_is_stopped() {
        let engine = Engine::with_default_fuel(2.0, 4).unwrap();
        assert!(!engine.is_running());
        assert_eq!(engine.status(), EngineStatus::Stopped);
        assert_eq!(engine.fuel_type(), "Gasoline");
        assert_eq!(engine.cylinders(), 4);
        assert_eq!(engine.displacement(), 2.0);
    }

    #[test]
    fn test_rejects_non_positive_displacement() {
        for bad in [0.0, -0.0, -1.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = Engine::with_default_fuel(bad, 4).unwrap_err();
            assert!(err.is_invalid_argument(), "{} should be rejected", bad);
            assert!(err.to_string().contains("Displacement must be positive."));
        }
    }

    #[test]
    fn test_rejects_non_positive_cylinders() {
        for bad in [0, -1, i64::MIN, i64::from(u32::MAX) + 1] {
            let err = Engine::with_default_fuel(2.0, bad).unwrap_err();
            assert!(err.to_string().contains("Cylinders must be a positive integer."));
        }
    }

    #[test]
    fn test_displacement_checked_before_cylinders() {
        let err = Engine::with_default_fuel(0.0, 0).unwrap_err();
        assert!(err.to_string().contains("Displacement"));
    }

    #[test]
    fn test_start_stop_cycle() {
        let mut engine = Engine::new(6.2, 8, "Diesel").unwrap();

        assert_eq!(
            engine.start(),
            Notice::Started {
                fuel_type: "Diesel".to_string(),
                displacement: 6.2,
                cylinders: 8,
            }
        );
        assert!(engine.is_running());
        assert_eq!(engine.start(), Notice::AlreadyRunning);
        assert!(engine.is_running());

        assert_eq!(engine.stop(), Notice::Stopped);
        assert!(!engine.is_running());
        assert_eq!(engine.stop(), Notice::AlreadyStopped);
        assert!(!engine.is_running());
    }

    #[test]
    fn test_stop_on_new_engine_is_noop() {
        let mut engine = Engine::with_default_fuel(1.6, 3).unwrap();
        assert_eq!(engine.stop(), Notice::AlreadyStopped);
        assert!(!engine.is_running());
    }

    #[test]
    fn test_specs_track_status() {
        let mut engine = Engine::new(6.2, 8, "Diesel").unwrap();
        assert_eq!(engine.specs().status, EngineStatus::Stopped);
        engine.start();
        assert_eq!(engine.specs().status, EngineStatus::Running);
    }

    #[test]
    fn test_cylinder_number_rejects_floats() {
        let int: serde_json::Number = 6.into();
        assert_eq!(validate_cylinder_number(&int).unwrap(), 6);

        let float = serde_json::Number::from_f64(6.0).unwrap();
        assert!(validate_cylinder_number(&float).is_err());
    }

    #[test]
    fn test_parse_cylinders() {
        assert_eq!(parse_cylinders("8").unwrap(), 8);
        assert_eq!(parse_cylinders(" 12 ").unwrap(), 12);
        for bad in ["0", "-4", "4.0", "4.5", "four", ""] {
            assert!(parse_cylinders(bad).is_err(), "{:?} should be rejected", bad);
        }
    }
}
