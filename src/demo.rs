//! Scripted demonstration
//!
//! Builds two engines and walks them through a fixed sequence of
//! operations, writing one human-readable line per step.

use std::io::Write;

use crate::engine::Engine;
use crate::error::Result;

const RULE: &str = "-------------------------";

/// Run the demonstration, writing its output to `out`.
///
/// # Errors
///
/// Propagates construction failures (none for the built-in values) and
/// write errors from `out`.
pub fn run_demo<W: Write>(out: &mut W) -> Result<()> {
    let mut my_engine = Engine::with_default_fuel(2.0, 4)?;
    let mut big_engine = Engine::new(6.2, 8, "Diesel")?;

    writeln!(out, "--- My Engine Specs ---")?;
    writeln!(out, "{}", my_engine.specs())?;
    writeln!(out, "{}", RULE)?;

    writeln!(out, "{}", my_engine.start())?;
    writeln!(out, "{}", RULE)?;

    // second start is a no-op
    writeln!(out, "{}", my_engine.start())?;
    writeln!(out, "{}", RULE)?;

    writeln!(out, "--- My Engine Updated Specs ---")?;
    writeln!(out, "{}", my_engine.specs())?;
    writeln!(out, "{}", RULE)?;

    writeln!(out, "--- Big Engine Actions ---")?;
    writeln!(out, "Big Engine Fuel: {}", big_engine.fuel_type())?;
    writeln!(out, "{}", big_engine.start())?;
    writeln!(out, "{}", big_engine.stop())?;
    writeln!(out, "{}", RULE)?;

    writeln!(out, "{}", my_engine.stop())?;
    writeln!(out, "{}", RULE)?;

    writeln!(out, "{}", my_engine.stop())?;

    Ok(())
}
