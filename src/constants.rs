// Physical Constants
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225; // kg/m³

// Default airframe
pub const DEFAULT_REFERENCE_AREA: f64 = 0.008; // m² (≈ 100 mm body tube)
pub const DEFAULT_MASS: f64 = 0.6; // kg
pub const DEFAULT_BASE_CD: f64 = 0.5;
pub const DEFAULT_CONTROL_CD: f64 = 0.3;

// Device Constants
pub const ACTUATOR_COUNT: usize = 3;

// Telemetry storage
pub const FLIGHT_FILE_EXTENSION: &str = "csv";
pub const SERIES_CSV_HEADER: &str = "time,alt,vz,vx,az,angle";
