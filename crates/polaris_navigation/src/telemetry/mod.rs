pub mod reroute_event;
pub mod telemetry_event;
