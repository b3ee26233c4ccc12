//! Start/stop notices
//!
//! Every call to `start()` or `stop()` yields a [`Notice`]; its `Display`
//! form is the line shown to the user.

use crate::types::format_liters;
use std::fmt;

/// Outcome of a start or stop request
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// Stopped → Running
    Started {
        fuel_type: String,
        displacement: f64,
        cylinders: u32,
    },
    /// `start()` on a running engine
    AlreadyRunning,
    /// Running → Stopped
    Stopped,
    /// `stop()` on a stopped engine
    AlreadyStopped,
}

impl Notice {
    /// Returns true if the request changed the engine's state
    #[inline]
    pub const fn is_transition(&self) -> bool {
        matches!(self, Self::Started { .. } | Self::Stopped)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started {
                fuel_type,
                displacement,
                cylinders,
            } => write!(
                f,
                "Starting the {} engine ({}L, {} cyl)... Vroom!",
                fuel_type,
                format_liters(*displacement),
                cylinders
            ),
            Self::AlreadyRunning => f.write_str("The engine is already running."),
            Self::Stopped => f.write_str("Stopping the engine... Clunk."),
            Self::AlreadyStopped => f.write_str("The engine is already stopped."),
        }
    }
}
