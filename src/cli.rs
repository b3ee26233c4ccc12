use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// engine-state - model a vehicle engine's running state
#[derive(Parser)]
#[command(name = "engine-state")]
#[command(about = "Build engines, start and stop them, and print their specs")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the scripted two-engine demonstration (default)
    Demo,
    /// Build a single engine and print its specs
    Specs {
        /// Displacement in liters (must be positive)
        #[arg(short, long, allow_negative_numbers = true)]
        displacement: f64,
        /// Number of cylinders (must be a positive integer)
        #[arg(short, long, allow_hyphen_values = true)]
        cylinders: String,
        /// Fuel type label
        #[arg(short, long, default_value = "Gasoline")]
        fuel_type: String,
        /// Start the engine before printing
        #[arg(long)]
        start: bool,
        /// Print specs as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate an engine definition file
    Validate {
        /// Path to the JSON engine definition file
        file: PathBuf,
    },
    /// Start and stop every engine in a definition file
    Run {
        /// Path to the JSON engine definition file
        file: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
