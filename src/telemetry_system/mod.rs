pub mod flight_logs;
pub mod simulation_series;
