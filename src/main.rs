use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use rocket_configuration::*;

#[derive(Parser)]
#[command(name = "Rocket Config")]
#[command(bin_name = "main")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Check whether two JSON documents are structurally equal")]
    Compare { left: PathBuf, right: PathBuf },
    #[command(about = "Load and validate a simulation config")]
    Validate { config: PathBuf },
    #[command(about = "Check whether a flight name is usable")]
    CheckName { name: String },
    #[command(about = "List stored flights, newest first")]
    ListFlights { dir: PathBuf },
}

fn read_value(path: &Path) -> Result<Value> {
    let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Value::from_json_str(&json).with_context(|| format!("parsing {}", path.display()))
}

fn main() -> Result<ExitCode> {
    let _ = env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compare { left, right } => {
            if equals(&read_value(&left)?, &read_value(&right)?) {
                println!("equal");
            } else {
                println!("different");
                return Ok(ExitCode::from(1));
            }
        }
        Commands::Validate { config } => {
            let config = SimulationConfig::load(&config)
                .with_context(|| format!("validating {}", config.display()))?;
            let curve = &config.thrust_curve;
            println!(
                "Motor {:?}: {} samples, burn time {:.2} s",
                curve.name(),
                curve.len(),
                curve.burn_time()
            );
            println!(
                "Mass {:.3} kg, Cd {:.3} (+{:.3} at full deflection), control {}",
                config.mass,
                config.base_cd,
                config.control_cd,
                if config.control { "on" } else { "off" }
            );
        }
        Commands::CheckName { name } => {
            if is_valid_flight_name(&name) {
                println!("{:?} is a valid flight name", name);
            } else {
                println!("{:?} is not a valid flight name", name);
                return Ok(ExitCode::from(1));
            }
        }
        Commands::ListFlights { dir } => {
            for flight in list_flights(&dir)? {
                println!("{}", flight);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
