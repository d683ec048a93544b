use serde::{Deserialize, Serialize};

use crate::{route_leg::RouteLeg, waypoint::Waypoint};

/// A computed path from origin to destination, as returned by a directions
/// service.
///
/// `legs` is non-empty and its order is the waypoint order established at
/// request time. A route is never mutated in place: every transformation
/// produces a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Total route distance in meters
    pub distance: f64,

    /// Total route travel time in seconds
    pub duration: f64,

    /// Encoded polyline of the full route
    pub geometry: String,

    /// Routing profile the route was computed for
    #[serde(default)]
    pub profile: String,

    pub legs: Vec<RouteLeg>,

    #[serde(default)]
    pub waypoints: Vec<Waypoint>,
}

impl Route {
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Distance in meters left to travel from the start of the given leg.
    pub fn remaining_distance(&self, from_leg: usize) -> f64 {
        self.legs.iter().skip(from_leg).map(|leg| leg.distance).sum()
    }

    /// Travel time in seconds left from the start of the given leg.
    pub fn remaining_duration(&self, from_leg: usize) -> f64 {
        self.legs.iter().skip(from_leg).map(|leg| leg.duration).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leg_annotation::Congestion;

    #[test]
    fn test_remaining_figures_sum_from_leg() {
        let route: Route = serde_json::from_str(FIXTURE).unwrap();

        assert_eq!(route.leg_count(), 2);
        assert_eq!(route.remaining_distance(0), 1321.3 + 1139.5);
        assert_eq!(route.remaining_distance(1), 1139.5);
        assert_eq!(route.remaining_duration(1), 171.8);
    }

    #[test]
    fn test_remaining_figures_past_last_leg_are_zero() {
        let route: Route = serde_json::from_str(FIXTURE).unwrap();

        assert_eq!(route.remaining_distance(2), 0.0);
        assert_eq!(route.remaining_duration(5), 0.0);
    }

    #[test]
    fn test_deserialize_directions_response_route() {
        let route: Route = serde_json::from_str(FIXTURE).unwrap();

        assert_eq!(route.profile, "driving-traffic");
        assert_eq!(route.legs[0].summary, "Rue de la Loi, Avenue de Tervueren");
        assert_eq!(route.legs[0].steps.len(), 2);
        assert_eq!(route.waypoints.len(), 3);

        let annotation = route.legs[0].annotation.as_ref().unwrap();
        assert!(annotation.is_aligned());
        assert_eq!(
            annotation.congestion.as_ref().unwrap()[1],
            Congestion::Moderate
        );
    }

    const FIXTURE: &str = r#"{
        "distance": 2460.8,
        "duration": 401.1,
        "geometry": "ihs~Hlm~UxGkPlDmJ",
        "profile": "driving-traffic",
        "legs": [
            {
                "distance": 1321.3,
                "duration": 229.3,
                "summary": "Rue de la Loi, Avenue de Tervueren",
                "steps": [
                    {
                        "distance": 801.9,
                        "duration": 141.0,
                        "geometry": "ihs~Hlm~UxGkP",
                        "name": "Rue de la Loi"
                    },
                    {
                        "distance": 519.4,
                        "duration": 88.3,
                        "geometry": "o_s~H`|}UlDmJ",
                        "name": "Avenue de Tervueren"
                    }
                ],
                "annotation": {
                    "distance": [420.1, 381.8, 519.4],
                    "duration": [70.2, 70.8, 88.3],
                    "congestion": ["low", "moderate", "low"]
                }
            },
            {
                "distance": 1139.5,
                "duration": 171.8,
                "summary": "Boulevard du Souverain",
                "steps": [
                    {
                        "distance": 1139.5,
                        "duration": 171.8,
                        "geometry": "ayt~Hdp|UnS{B",
                        "name": "Boulevard du Souverain"
                    }
                ]
            }
        ],
        "waypoints": [
            { "name": "Rue de la Loi", "location": [4.3672, 50.8442] },
            { "name": "Avenue de Tervueren", "location": [4.4039, 50.8406] },
            { "name": "Boulevard du Souverain", "location": [4.4175, 50.8128] }
        ]
    }"#;
}
