use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use log::info;

use crate::constants::FLIGHT_FILE_EXTENSION;
use crate::errors::ConfigError;
use crate::telemetry_system::simulation_series::SimulationSeries;
use crate::utils::naming::invalid_url;

fn flight_path(dir: &Path, name: &str) -> Result<PathBuf, ConfigError> {
    if invalid_url(name) {
        return Err(ConfigError::InvalidName(name.to_string()));
    }
    Ok(dir.join(format!("{}.{}", name, FLIGHT_FILE_EXTENSION)))
}

pub fn save_flight(
    dir: impl AsRef<Path>,
    name: &str,
    series: &SimulationSeries,
) -> Result<PathBuf, ConfigError> {
    let path = flight_path(dir.as_ref(), name)?;
    let file = File::create(&path).map_err(|e| ConfigError::file(&path, e))?;
    series.write_csv(BufWriter::new(file))?;
    info!("Saved flight {:?} ({} samples)", name, series.len());
    Ok(path)
}

pub fn load_flight(dir: impl AsRef<Path>, name: &str) -> Result<SimulationSeries, ConfigError> {
    let path = flight_path(dir.as_ref(), name)?;
    let file = File::open(&path).map_err(|e| ConfigError::file(&path, e))?;
    SimulationSeries::read_csv(file)
}

fn recorded_at(path: &Path) -> SystemTime {
    fs::metadata(path)
        .and_then(|metadata| metadata.created().or_else(|_| metadata.modified()))
        .unwrap_or_else(|_| SystemTime::now())
}

pub fn list_flights(dir: impl AsRef<Path>) -> Result<Vec<String>, ConfigError> {
    let dir = dir.as_ref();
    let mut entries = fs::read_dir(dir)
        .and_then(|entries| {
            entries
                .map(|entry| entry.map(|e| e.path()))
                .collect::<Result<Vec<_>, _>>()
        })
        .map_err(|e| ConfigError::file(dir, e))?;

    entries.retain(|path| {
        path.is_file()
            && path
                .extension()
                .is_some_and(|extension| extension == FLIGHT_FILE_EXTENSION)
    });
    entries.sort_by_cached_key(|path| recorded_at(path));

    Ok(entries
        .iter()
        .rev()
        .filter_map(|path| path.file_stem())
        .filter_map(|stem| stem.to_str().map(String::from))
        .collect())
}
