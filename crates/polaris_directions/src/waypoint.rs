use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    #[serde(default)]
    pub name: String,

    /// Snapped coordinate as [longitude, latitude]
    pub location: [f64; 2],
}
