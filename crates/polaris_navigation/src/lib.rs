pub mod refresh;
pub mod telemetry;
