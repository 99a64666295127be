use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::constants::SERIES_CSV_HEADER;
use crate::equality::Value;
use crate::errors::ConfigError;
use crate::impl_structural_eq;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub time: f64, // s
    #[serde(rename = "alt")]
    pub altitude: f64, // m
    pub vz: f64,       // m/s
    pub vx: f64,       // m/s
    pub az: f64,       // m/s²
    pub angle: f64,    // deg, control-surface deflection
}

impl_structural_eq!(TrajectoryPoint {
    time,
    altitude,
    vz,
    vx,
    az,
    angle,
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationSeries {
    pub time: Vec<f64>,
    pub alt: Vec<f64>,
    pub vz: Vec<f64>,
    pub vx: Vec<f64>,
    pub az: Vec<f64>,
    pub angle: Vec<f64>,
}

impl_structural_eq!(SimulationSeries {
    time,
    alt,
    vz,
    vx,
    az,
    angle,
});

impl SimulationSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        SimulationSeries {
            time: Vec::with_capacity(capacity),
            alt: Vec::with_capacity(capacity),
            vz: Vec::with_capacity(capacity),
            vx: Vec::with_capacity(capacity),
            az: Vec::with_capacity(capacity),
            angle: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, point: TrajectoryPoint) {
        self.time.push(point.time);
        self.alt.push(point.altitude);
        self.vz.push(point.vz);
        self.vx.push(point.vx);
        self.az.push(point.az);
        self.angle.push(point.angle);
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    fn columns(&self) -> [(&'static str, &Vec<f64>); 6] {
        [
            ("time", &self.time),
            ("alt", &self.alt),
            ("vz", &self.vz),
            ("vx", &self.vx),
            ("az", &self.az),
            ("angle", &self.angle),
        ]
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let expected = self.time.len();
        match self
            .columns()
            .into_iter()
            .find(|(_, column)| column.len() != expected)
        {
            Some((column, samples)) => Err(ConfigError::SeriesLengthMismatch {
                column,
                expected,
                found: samples.len(),
            }),
            None => Ok(()),
        }
    }

    pub fn point(&self, index: usize) -> Option<TrajectoryPoint> {
        Some(TrajectoryPoint {
            time: *self.time.get(index)?,
            altitude: *self.alt.get(index)?,
            vz: *self.vz.get(index)?,
            vx: *self.vx.get(index)?,
            az: *self.az.get(index)?,
            angle: *self.angle.get(index)?,
        })
    }

    pub fn points(&self) -> impl Iterator<Item = TrajectoryPoint> + '_ {
        (0..self.len()).map_while(|i| self.point(i))
    }

    pub fn apogee(&self) -> Option<TrajectoryPoint> {
        self.points()
            .max_by(|a, b| a.altitude.total_cmp(&b.altitude))
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), ConfigError> {
        self.validate()?;
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        csv_writer.write_record(SERIES_CSV_HEADER.split(','))?;
        for point in self.points() {
            csv_writer.serialize(point)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    pub fn read_csv<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?;
        if !headers.iter().eq(SERIES_CSV_HEADER.split(',')) {
            return Err(ConfigError::Csv {
                line: 1,
                reason: format!(
                    "expected header {:?}, found {:?}",
                    SERIES_CSV_HEADER,
                    headers.iter().collect::<Vec<_>>().join(",")
                ),
            });
        }

        let mut series = SimulationSeries::new();
        for point in csv_reader.deserialize::<TrajectoryPoint>() {
            series.push(point?);
        }
        Ok(series)
    }
}

impl From<&SimulationSeries> for Value {
    fn from(series: &SimulationSeries) -> Self {
        Value::named(
            "SimulationSeries",
            series
                .columns()
                .into_iter()
                .map(|(name, column)| (name, Value::from(column.as_slice()))),
        )
    }
}
