pub mod configuration;
pub mod constants;
pub mod device_system;
pub mod equality;
pub mod errors;
pub mod telemetry_system;
pub mod utils;

pub use constants::*;
pub use errors::ConfigError;

// Re-export the comparator and its helpers
pub use equality::{equals, ChangeTracker, Kind, StructuralEq, Value};

// Re-export commonly used items from configuration
pub use configuration::schema::SchemaVersion;
pub use configuration::simulation_config::SimulationConfig;
pub use configuration::thrust_curve::ThrustCurve;

// Re-export commonly used items from device_system
pub use device_system::device_status::{ActuatorLimits, DeviceConfig, DeviceStatus};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::flight_logs::{list_flights, load_flight, save_flight};
pub use telemetry_system::simulation_series::{SimulationSeries, TrajectoryPoint};

// Re-export commonly used utilities
pub use utils::naming::{invalid_url, is_valid_flight_name};
