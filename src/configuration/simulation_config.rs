use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::configuration::schema::{SchemaVersion, SimulationConfigRecord};
use crate::configuration::thrust_curve::ThrustCurve;
use crate::constants::{
    AIR_DENSITY_SEA_LEVEL, DEFAULT_BASE_CD, DEFAULT_CONTROL_CD, DEFAULT_MASS,
    DEFAULT_REFERENCE_AREA,
};
use crate::equality::Value;
use crate::errors::ConfigError;
use crate::impl_structural_eq;

/// Inputs for one simulated flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    try_from = "SimulationConfigRecord",
    into = "SimulationConfigRecord"
)]
pub struct SimulationConfig {
    pub rho: f64,        // kg/m³
    pub area: f64,       // m², reference area
    pub mass: f64,       // kg
    pub base_cd: f64,
    pub control_cd: f64, // drag added at full control-surface deflection
    pub thrust_curve: ThrustCurve,
    pub control: bool,
    pub start_time: f64, // s, control becomes active after this
    pub param: f64,
    pub p: f64,
}

impl_structural_eq!(SimulationConfig {
    rho,
    area,
    mass,
    base_cd,
    control_cd,
    thrust_curve,
    control,
    start_time,
    param,
    p,
});

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            rho: AIR_DENSITY_SEA_LEVEL,
            area: DEFAULT_REFERENCE_AREA,
            mass: DEFAULT_MASS,
            base_cd: DEFAULT_BASE_CD,
            control_cd: DEFAULT_CONTROL_CD,
            thrust_curve: ThrustCurve::default(),
            control: false,
            start_time: 0.0,
            param: 0.0,
            p: 0.0,
        }
    }
}

impl SimulationConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let record: SimulationConfigRecord = serde_json::from_str(json)?;
        if SchemaVersion::detect(&record) == Some(SchemaVersion::Fin) {
            info!("Migrating legacy finCd config to canardCd");
        }
        record.try_into()
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| ConfigError::file(path, e))?;
        let config = Self::from_json_str(&json)?;
        info!(
            "Loaded simulation config from {} (motor {:?})",
            path.display(),
            config.thrust_curve.name()
        );
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        fs::write(path, self.to_json_string()?).map_err(|e| ConfigError::file(path, e))?;
        info!("Saved simulation config to {}", path.display());
        Ok(())
    }

    /// Drag coefficient with the control surfaces deflected by `angle` degrees (0..=90).
    pub fn drag_coefficient(&self, angle: f64) -> f64 {
        self.base_cd + self.control_cd * (angle / 90.0)
    }
}

impl From<&SimulationConfig> for Value {
    fn from(config: &SimulationConfig) -> Self {
        Value::named(
            "SimulationConfig",
            [
                ("rho", config.rho.into()),
                ("A", config.area.into()),
                ("mass", config.mass.into()),
                ("baseCd", config.base_cd.into()),
                ("canardCd", config.control_cd.into()),
                ("thrustCurveTime", config.thrust_curve.times().into()),
                ("thrustCurveForce", config.thrust_curve.forces().into()),
                ("thrustCurveName", config.thrust_curve.name().into()),
                ("control", config.control.into()),
                ("startTime", config.start_time.into()),
                ("param", config.param.into()),
                ("P", config.p.into()),
            ],
        )
    }
}
