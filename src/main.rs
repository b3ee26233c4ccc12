//! engine-state - Main entry point
//!
//! Runs the engine demonstration by default; subcommands build engines from
//! flags or definition files.

use anyhow::{Context, Result};
use std::io::{self, Write};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use engine_state::cli::{Cli, Commands};
use engine_state::config::EngineFile;
use engine_state::engine::{self, Engine};
use engine_state::run_demo;

/// Initialize the logger. Output goes to stderr so stdout stays clean.
fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    // RUST_LOG overrides the flag
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse_args();
    init_logger(cli.verbose);
    debug!("CLI arguments parsed");

    if let Err(e) = run(cli.command.unwrap_or(Commands::Demo)) {
        error!("{:#}", e);
        eprintln!("✗ {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Demo => {
            info!("Running engine demonstration");
            run_demo(&mut out)?;
        }
        Commands::Specs {
            displacement,
            cylinders,
            fuel_type,
            start,
            json,
        } => {
            let displacement = engine::validate_displacement(displacement)?;
            let cylinders = engine::parse_cylinders(&cylinders)?;
            let mut engine = Engine::new(displacement, i64::from(cylinders), fuel_type)?;
            if start {
                writeln!(out, "{}", engine.start())?;
            }
            print_specs(&mut out, &engine, json)?;
        }
        Commands::Validate { file } => {
            info!("Validating engine definition file: {:?}", file);
            let defs = EngineFile::load_from_file(&file)?;
            defs.validate()?;
            writeln!(out, "✓ {:?} defines {} valid engine(s)", file, defs.engines.len())?;
        }
        Commands::Run { file } => {
            let engines = EngineFile::load_from_file(&file)?.build_all()?;
            for (index, mut engine) in engines.into_iter().enumerate() {
                writeln!(out, "--- Engine #{} ---", index)?;
                writeln!(out, "{}", engine.start())?;
                writeln!(out, "{}", engine.stop())?;
            }
        }
    }

    out.flush().context("Failed to flush stdout")?;
    Ok(())
}

fn print_specs<W: Write>(out: &mut W, engine: &Engine, json: bool) -> Result<()> {
    let specs = engine.specs();
    if json {
        let rendered =
            serde_json::to_string_pretty(&specs).context("Failed to serialize specs to JSON")?;
        writeln!(out, "{}", rendered)?;
    } else {
        writeln!(out, "{}", specs)?;
    }
    Ok(())
}
