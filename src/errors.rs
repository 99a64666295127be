use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot access {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("CSV error at line {line}: {reason}")]
    Csv { line: usize, reason: String },

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Conflicting control drag: canardCd = {canard}, finCd = {fin}")]
    AmbiguousControlDrag { canard: f64, fin: f64 },

    #[error("Thrust curve has {times} time samples but {forces} force samples")]
    ThrustCurveLengthMismatch { times: usize, forces: usize },

    #[error("Thrust curve time decreases at index {index}")]
    ThrustCurveNotMonotonic { index: usize },

    #[error("Series column {column} has {found} samples, expected {expected}")]
    SeriesLengthMismatch {
        column: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Actuator index {0} is out of range (expected 1..=3)")]
    InvalidActuator(usize),

    #[error("Invalid flight name: {0:?}")]
    InvalidName(String),
}

impl ConfigError {
    pub(crate) fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::File {
            path: path.into(),
            source,
        }
    }
}

impl From<csv::Error> for ConfigError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map_or(0, |position| position.line() as usize);
        let reason = error.to_string();
        match error.into_kind() {
            csv::ErrorKind::Io(source) => ConfigError::Io(source),
            _ => ConfigError::Csv { line, reason },
        }
    }
}
