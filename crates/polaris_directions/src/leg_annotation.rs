use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Congestion {
    Unknown,
    Low,
    Moderate,
    Heavy,
    Severe,
}

/// Per-coordinate-pair metrics aligned with a leg's geometry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LegAnnotation {
    /// Distance between each pair of coordinates in meters
    #[serde(default)]
    pub distance: Vec<f64>,

    /// Travel time between each pair of coordinates in seconds
    #[serde(default)]
    pub duration: Vec<f64>,

    /// Speed between each pair of coordinates in meters per second
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<Vec<f64>>,

    /// Congestion level between each pair of coordinates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub congestion: Option<Vec<Congestion>>,
}

impl LegAnnotation {
    /// Number of coordinate pairs the annotation covers.
    pub fn entry_count(&self) -> usize {
        self.distance.len()
    }

    /// True when every present metric array covers the same number of
    /// coordinate pairs. A directions response upholds this; callers can
    /// check it before merging a fetched annotation into a route.
    pub fn is_aligned(&self) -> bool {
        let entries = self.distance.len();

        self.duration.len() == entries
            && self.speed.as_ref().is_none_or(|speed| speed.len() == entries)
            && self
                .congestion
                .as_ref()
                .is_none_or(|congestion| congestion.len() == entries)
    }
}
