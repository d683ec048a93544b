use serde::{Deserialize, Serialize};

use crate::leg_annotation::LegAnnotation;

/// One maneuver-to-maneuver stretch inside a leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    /// Step distance in meters
    pub distance: f64,

    /// Step travel time in seconds
    pub duration: f64,

    /// Encoded polyline of the step
    pub geometry: String,

    /// Name of the road the step travels along
    #[serde(default)]
    pub name: String,
}

/// One waypoint-to-waypoint segment of a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    /// Leg distance in meters
    pub distance: f64,

    /// Leg travel time in seconds
    pub duration: f64,

    /// Names of the most prominent roads along the leg
    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub steps: Vec<RouteStep>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<LegAnnotation>,
}
