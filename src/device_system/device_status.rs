use serde::{Deserialize, Serialize};

use crate::constants::ACTUATOR_COUNT;
use crate::equality::Value;
use crate::errors::ConfigError;
use crate::impl_structural_eq;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActuatorLimits {
    pub min: i32,
    pub max: i32,
}

impl_structural_eq!(ActuatorLimits { min, max });

impl ActuatorLimits {
    pub fn new(min: i32, max: i32) -> Self {
        ActuatorLimits { min, max }
    }

    pub fn travel(&self) -> i64 {
        i64::from(self.max) - i64::from(self.min)
    }

    pub fn clamp(&self, position: i32) -> i32 {
        if self.min > self.max {
            return self.min;
        }
        position.clamp(self.min, self.max)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "DeviceConfigRecord", into = "DeviceConfigRecord")]
pub struct DeviceConfig {
    pub alpha: f64,
    pub start_time: f64,
    pub p: f64,
    pub control: bool,
    pub mass: f64,
    pub param: f64,
    pub actuators: [ActuatorLimits; ACTUATOR_COUNT],
    pub init: u32,
}

impl_structural_eq!(DeviceConfig {
    alpha,
    start_time,
    p,
    control,
    mass,
    param,
    actuators,
    init,
});

impl DeviceConfig {
    // Actuators are numbered from 1, as on the airframe.
    pub fn actuator(&self, index: usize) -> Result<&ActuatorLimits, ConfigError> {
        index
            .checked_sub(1)
            .and_then(|i| self.actuators.get(i))
            .ok_or(ConfigError::InvalidActuator(index))
    }

    pub fn actuator_mut(&mut self, index: usize) -> Result<&mut ActuatorLimits, ConfigError> {
        index
            .checked_sub(1)
            .and_then(|i| self.actuators.get_mut(i))
            .ok_or(ConfigError::InvalidActuator(index))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct DeviceConfigRecord {
    alpha: f64,
    starttime: f64,
    #[serde(rename = "P")]
    p: f64,
    control: bool,
    mass: f64,
    param: f64,
    s1min: i32,
    s2min: i32,
    s3min: i32,
    s1max: i32,
    s2max: i32,
    s3max: i32,
    init: u32,
}

impl From<DeviceConfigRecord> for DeviceConfig {
    fn from(record: DeviceConfigRecord) -> Self {
        DeviceConfig {
            alpha: record.alpha,
            start_time: record.starttime,
            p: record.p,
            control: record.control,
            mass: record.mass,
            param: record.param,
            actuators: [
                ActuatorLimits::new(record.s1min, record.s1max),
                ActuatorLimits::new(record.s2min, record.s2max),
                ActuatorLimits::new(record.s3min, record.s3max),
            ],
            init: record.init,
        }
    }
}

impl From<DeviceConfig> for DeviceConfigRecord {
    fn from(config: DeviceConfig) -> Self {
        let [s1, s2, s3] = config.actuators;
        DeviceConfigRecord {
            alpha: config.alpha,
            starttime: config.start_time,
            p: config.p,
            control: config.control,
            mass: config.mass,
            param: config.param,
            s1min: s1.min,
            s2min: s2.min,
            s3min: s3.min,
            s1max: s1.max,
            s2max: s2.max,
            s3max: s3.max,
            init: config.init,
        }
    }
}

// `config` is only meaningful when `has_data` is set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceStatus {
    pub has_data: bool,
    pub config: DeviceConfig,
}

impl_structural_eq!(DeviceStatus { has_data, config });

impl DeviceStatus {
    pub fn with_config(config: DeviceConfig) -> Self {
        DeviceStatus {
            has_data: true,
            config,
        }
    }

    pub fn config(&self) -> Option<&DeviceConfig> {
        self.has_data.then_some(&self.config)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<&DeviceConfig> for Value {
    fn from(config: &DeviceConfig) -> Self {
        let mut fields: Vec<(String, Value)> = vec![
            ("alpha".to_string(), config.alpha.into()),
            ("starttime".to_string(), config.start_time.into()),
            ("P".to_string(), config.p.into()),
            ("control".to_string(), config.control.into()),
            ("mass".to_string(), config.mass.into()),
            ("param".to_string(), config.param.into()),
            ("init".to_string(), config.init.into()),
        ];
        for (i, limits) in config.actuators.iter().enumerate() {
            fields.push((format!("s{}min", i + 1), limits.min.into()));
            fields.push((format!("s{}max", i + 1), limits.max.into()));
        }
        Value::named("DeviceConfig", fields)
    }
}

impl From<&DeviceStatus> for Value {
    fn from(status: &DeviceStatus) -> Self {
        Value::named(
            "DeviceStatus",
            [
                ("has_data", status.has_data.into()),
                ("config", Value::from(&status.config)),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equality::equals;

    const STATUS_JSON: &str = r#"{
        "has_data": true,
        "config": {
            "alpha": 0.8, "starttime": 1500, "P": 0.02, "control": true,
            "mass": 0.62, "param": 300,
            "s1min": 1000, "s2min": 1010, "s3min": 990,
            "s1max": 2000, "s2max": 1990, "s3max": 2010,
            "init": 1
        }
    }"#;

    #[test]
    fn test_parse_wire_status() {
        let status = DeviceStatus::from_json_str(STATUS_JSON).unwrap();
        let config = status.config().unwrap();
        assert_eq!(config.actuator(1).unwrap(), &ActuatorLimits::new(1000, 2000));
        assert_eq!(config.actuator(2).unwrap(), &ActuatorLimits::new(1010, 1990));
        assert_eq!(config.actuator(3).unwrap(), &ActuatorLimits::new(990, 2010));
        assert_eq!(config.init, 1);
    }

    #[test]
    fn test_config_hidden_without_data() {
        let mut status = DeviceStatus::from_json_str(STATUS_JSON).unwrap();
        status.has_data = false;
        assert!(status.config().is_none());
        assert!(DeviceStatus::default().config().is_none());
    }

    #[test]
    fn test_actuator_index_range() {
        let mut config = DeviceConfig::default();
        assert!(matches!(config.actuator(0), Err(ConfigError::InvalidActuator(0))));
        assert!(matches!(config.actuator(4), Err(ConfigError::InvalidActuator(4))));

        config.actuator_mut(3).unwrap().max = 1800;
        assert_eq!(config.actuators[2].max, 1800);
    }

    #[test]
    fn test_serializes_flat_limits() {
        let status = DeviceStatus::from_json_str(STATUS_JSON).unwrap();
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["config"]["s2max"], 1990);
        assert_eq!(json["config"]["starttime"], 1500.0);

        let reparsed: DeviceStatus = serde_json::from_value(json).unwrap();
        assert!(equals(&status, &reparsed));
    }

    #[test]
    fn test_polled_status_change_detection() {
        let a = DeviceStatus::from_json_str(STATUS_JSON).unwrap();
        let b = DeviceStatus::from_json_str(STATUS_JSON).unwrap();
        assert!(equals(&a, &b));

        let mut c = b.clone();
        c.config.actuators[0].min = 1001;
        assert!(!equals(&a, &c));

        let mut d = b.clone();
        d.has_data = false;
        assert!(!equals(&a, &d));
    }

    #[test]
    fn test_actuator_limits() {
        let limits = ActuatorLimits::new(1000, 2000);
        assert_eq!(limits.travel(), 1000);
        assert_eq!(limits.clamp(500), 1000);
        assert_eq!(limits.clamp(2500), 2000);
        assert_eq!(limits.clamp(1500), 1500);
        assert_eq!(ActuatorLimits::new(10, 5).clamp(7), 10);
    }

    #[test]
    fn test_named_values() {
        let status = DeviceStatus::from_json_str(STATUS_JSON).unwrap();
        let value = Value::from(&status);
        assert!(equals(&value, &Value::from(&status.clone())));
        assert!(matches!(
            value.get("config").and_then(|c| c.get("s3max")),
            Some(Value::Number(n)) if *n == 2010.0
        ));
    }
}
