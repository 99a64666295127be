pub mod schema;
pub mod simulation_config;
pub mod thrust_curve;
