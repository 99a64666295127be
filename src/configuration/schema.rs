//! On-disk shape of a simulation config and the migration between its
//! historical variants.
//!
//! Older files name the control-surface drag term `finCd`; current files name
//! it `canardCd`. Both load into the same canonical [`SimulationConfig`].

use serde::{Deserialize, Serialize};

use crate::configuration::simulation_config::SimulationConfig;
use crate::configuration::thrust_curve::ThrustCurve;
use crate::errors::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVersion {
    /// `finCd`
    Fin,
    /// `canardCd`
    Canard,
}

impl SchemaVersion {
    pub const CURRENT: SchemaVersion = SchemaVersion::Canard;

    /// Schema a record was written with, or `None` when it carries neither drag field.
    pub fn detect(record: &SimulationConfigRecord) -> Option<Self> {
        match (record.canard_cd, record.fin_cd) {
            (Some(_), _) => Some(SchemaVersion::Canard),
            (None, Some(_)) => Some(SchemaVersion::Fin),
            (None, None) => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SimulationConfigRecord {
    pub rho: f64,
    #[serde(rename = "A")]
    pub area: f64,
    pub mass: f64,
    pub base_cd: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canard_cd: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fin_cd: Option<f64>,
    pub thrust_curve_time: Vec<f64>,
    pub thrust_curve_force: Vec<f64>,
    pub thrust_curve_name: String,
    pub control: bool,
    pub start_time: f64,
    pub param: f64,
    #[serde(rename = "P")]
    pub p: f64,
}

impl SimulationConfigRecord {
    fn control_cd(&self) -> Result<f64, ConfigError> {
        match (self.canard_cd, self.fin_cd) {
            (Some(canard), Some(fin)) if canard != fin => {
                Err(ConfigError::AmbiguousControlDrag { canard, fin })
            }
            (Some(cd), _) | (None, Some(cd)) => Ok(cd),
            (None, None) => Err(ConfigError::MissingField("canardCd")),
        }
    }
}

impl TryFrom<SimulationConfigRecord> for SimulationConfig {
    type Error = ConfigError;

    fn try_from(record: SimulationConfigRecord) -> Result<Self, Self::Error> {
        let control_cd = record.control_cd()?;
        let thrust_curve = ThrustCurve::new(
            record.thrust_curve_name,
            record.thrust_curve_time,
            record.thrust_curve_force,
        )?;

        Ok(SimulationConfig {
            rho: record.rho,
            area: record.area,
            mass: record.mass,
            base_cd: record.base_cd,
            control_cd,
            thrust_curve,
            control: record.control,
            start_time: record.start_time,
            param: record.param,
            p: record.p,
        })
    }
}

// Always writes the current schema.
impl From<SimulationConfig> for SimulationConfigRecord {
    fn from(config: SimulationConfig) -> Self {
        let (thrust_curve_name, thrust_curve_time, thrust_curve_force) =
            config.thrust_curve.into_parts();

        SimulationConfigRecord {
            rho: config.rho,
            area: config.area,
            mass: config.mass,
            base_cd: config.base_cd,
            canard_cd: Some(config.control_cd),
            fin_cd: None,
            thrust_curve_time,
            thrust_curve_force,
            thrust_curve_name,
            control: config.control,
            start_time: config.start_time,
            param: config.param,
            p: config.p,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(canard_cd: Option<f64>, fin_cd: Option<f64>) -> SimulationConfigRecord {
        SimulationConfigRecord {
            rho: 1.225,
            area: 0.008,
            mass: 0.6,
            base_cd: 0.5,
            canard_cd,
            fin_cd,
            thrust_curve_time: vec![0.0, 1.0],
            thrust_curve_force: vec![10.0, 0.0],
            thrust_curve_name: "A8".to_string(),
            control: false,
            start_time: 0.0,
            param: 0.0,
            p: 0.0,
        }
    }

    #[test]
    fn test_detect_schema() {
        assert_eq!(
            SchemaVersion::detect(&record(Some(0.3), None)),
            Some(SchemaVersion::Canard)
        );
        assert_eq!(
            SchemaVersion::detect(&record(None, Some(0.3))),
            Some(SchemaVersion::Fin)
        );
        assert_eq!(
            SchemaVersion::detect(&record(Some(0.3), Some(0.3))),
            Some(SchemaVersion::CURRENT)
        );
        assert_eq!(SchemaVersion::detect(&record(None, None)), None);
    }

    #[test]
    fn test_round_trip_writes_current_schema() {
        let config = SimulationConfig::try_from(record(None, Some(0.25))).unwrap();
        let written = SimulationConfigRecord::from(config);
        assert_eq!(written.canard_cd, Some(0.25));
        assert_eq!(written.fin_cd, None);
        assert_eq!(written.thrust_curve_name, "A8");
    }
}
