//! Value types shared by the engine model
//!
//! The running status is a proper enum rather than a bare boolean so that
//! its string form ("Running" / "Stopped") has a single definition.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumIter, EnumString};

/// Default fuel type used when none is given
pub const DEFAULT_FUEL_TYPE: &str = "Gasoline";

/// Running status of an engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum EngineStatus {
    #[default]
    #[strum(serialize = "Stopped")]
    Stopped,
    #[strum(serialize = "Running")]
    Running,
}

impl EngineStatus {
    /// Status corresponding to an `is_running` flag
    #[inline]
    pub const fn from_running(is_running: bool) -> Self {
        if is_running {
            Self::Running
        } else {
            Self::Stopped
        }
    }

    #[inline]
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }
}

/// A single value in an engine's spec sheet
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SpecValue {
    Liters(f64),
    Count(u32),
    Text(String),
}

impl SpecValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Liters(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Self::Count(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Renders a literal the way the spec sheet shows it: floats always carry a
/// fractional digit and text is quoted.
impl fmt::Display for SpecValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Liters(v) => f.write_str(&format_liters(*v)),
            Self::Count(v) => write!(f, "{}", v),
            Self::Text(s) => f.write_str(&quote_text(s)),
        }
    }
}

/// Format a displacement so whole numbers keep their `.0` (`2.0`, not `2`).
///
/// Very small or large values use scientific notation with a signed exponent
/// of at least two digits: `1e-05`, `1e+16`.
pub fn format_liters(value: f64) -> String {
    let shortest = format!("{:?}", value);
    let Some((mantissa, exponent)) = shortest.split_once('e') else {
        return shortest;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{}e{}{:0>2}", mantissa, sign, digits)
}

/// Quote text for the spec sheet.
///
/// Single quotes are used unless the text contains a single quote and no
/// double quote; the chosen quote and backslashes are escaped inside.
pub fn quote_text(text: &str) -> String {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_status_strings() {
        assert_eq!(EngineStatus::Running.to_string(), "Running");
        assert_eq!(EngineStatus::Stopped.to_string(), "Stopped");
        assert_eq!("Running".parse::<EngineStatus>().ok(), Some(EngineStatus::Running));
    }

    #[test]
    fn test_status_default_is_stopped() {
        assert_eq!(EngineStatus::default(), EngineStatus::Stopped);
        assert_eq!(EngineStatus::iter().count(), 2);
    }

    #[test]
    fn test_status_from_running() {
        assert_eq!(EngineStatus::from_running(true), EngineStatus::Running);
        assert!(!EngineStatus::from_running(false).is_running());
    }

    #[test]
    fn test_format_liters_keeps_fraction() {
        assert_eq!(format_liters(2.0), "2.0");
        assert_eq!(format_liters(6.2), "6.2");
        assert_eq!(format_liters(0.0001), "0.0001");
    }

    #[test]
    fn test_format_liters_exponent_is_signed_and_padded() {
        assert_eq!(format_liters(1e-5), "1e-05");
        assert_eq!(format_liters(1.5e-5), "1.5e-05");
        assert_eq!(format_liters(1e16), "1e+16");
        assert_eq!(format_liters(2.5e120), "2.5e+120");
    }

    #[test]
    fn test_quote_text_picks_quote() {
        assert_eq!(quote_text("Diesel"), "'Diesel'");
        assert_eq!(quote_text("O'Brien"), "\"O'Brien\"");
        assert_eq!(quote_text("say \"hi\""), "'say \"hi\"'");
        assert_eq!(quote_text("it's \"x\""), "'it\\'s \"x\"'");
        assert_eq!(quote_text("a\\b"), "'a\\\\b'");
        assert_eq!(quote_text("line\nbreak"), "'line\\nbreak'");
    }

    #[test]
    fn test_spec_value_display() {
        assert_eq!(SpecValue::Liters(2.0).to_string(), "2.0");
        assert_eq!(SpecValue::Count(8).to_string(), "8");
        assert_eq!(SpecValue::Text("Diesel".into()).to_string(), "'Diesel'");
        assert_eq!(SpecValue::Text("O'Brien".into()).to_string(), "\"O'Brien\"");
    }

    #[test]
    fn test_spec_value_serializes_untagged() {
        assert_eq!(serde_json::to_value(SpecValue::Liters(6.2)).unwrap(), serde_json::json!(6.2));
        assert_eq!(serde_json::to_value(SpecValue::Count(8)).unwrap(), serde_json::json!(8));
        assert_eq!(
            serde_json::to_value(SpecValue::Text("Diesel".into())).unwrap(),
            serde_json::json!("Diesel")
        );
    }
}
