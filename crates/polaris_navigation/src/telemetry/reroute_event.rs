use std::sync::Arc;

use polaris_directions::route::Route;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::telemetry::telemetry_event::TelemetryEvent;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("event {event_id} already carries a replacement route")]
    AlreadyAttached { event_id: String },

    #[error("event {event_id} was already handed off")]
    Sealed { event_id: String },
}

/// Replacement-route figures captured at the moment a reroute resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementRoute {
    geometry: String,
    duration_remaining: u32,
    distance_remaining: u32,
}

impl ReplacementRoute {
    pub fn new(geometry: String, duration_remaining: u32, distance_remaining: u32) -> Self {
        ReplacementRoute {
            geometry,
            duration_remaining,
            distance_remaining,
        }
    }

    /// Captures a freshly computed route's totals. A replacement route
    /// starts at the traveler's current position, so its whole distance and
    /// duration are the remaining figures.
    pub fn from_route(route: &Route) -> Self {
        ReplacementRoute {
            geometry: route.geometry.clone(),
            duration_remaining: route.duration.max(0.0).round() as u32,
            distance_remaining: route.distance.max(0.0).round() as u32,
        }
    }

    /// Encoded polyline of the replacement route.
    pub fn geometry(&self) -> &str {
        &self.geometry
    }

    /// Remaining travel time in seconds.
    pub fn duration_remaining(&self) -> u32 {
        self.duration_remaining
    }

    /// Remaining distance in meters.
    pub fn distance_remaining(&self) -> u32 {
        self.distance_remaining
    }
}

/// Telemetry record of a single route replacement.
///
/// An event is created the instant a reroute decision is made, before the
/// replacement route may even be known. The replacement route is attached
/// exactly once when it becomes available, the session snapshot may be
/// swapped until the event is sealed at hand-off, and a sealed event never
/// changes again. Each reroute produces a new event with a new identifier.
pub struct RerouteEvent<S> {
    event_id: String,
    session_state: Arc<S>,
    replacement: Option<ReplacementRoute>,
    sealed: bool,
}

impl<S> RerouteEvent<S> {
    pub fn new(session_state: Arc<S>) -> Self {
        RerouteEvent {
            event_id: Uuid::new_v4().to_string(),
            session_state,
            replacement: None,
            sealed: false,
        }
    }

    /// Records the replacement route. A route can be attached once: a
    /// second attachment is rejected rather than overwriting the first.
    pub fn attach_route(&mut self, replacement: ReplacementRoute) -> Result<(), EventError> {
        if self.sealed {
            return Err(EventError::Sealed {
                event_id: self.event_id.clone(),
            });
        }

        if self.replacement.is_some() {
            return Err(EventError::AlreadyAttached {
                event_id: self.event_id.clone(),
            });
        }

        debug!("attached replacement route to reroute event {}", self.event_id);
        self.replacement = Some(replacement);

        Ok(())
    }

    /// Replaces the session snapshot, for sessions finalized after the
    /// event was created. Forbidden once the event is sealed.
    pub fn update_session_state(&mut self, session_state: Arc<S>) -> Result<(), EventError> {
        if self.sealed {
            return Err(EventError::Sealed {
                event_id: self.event_id.clone(),
            });
        }

        self.session_state = session_state;

        Ok(())
    }

    /// Marks the event as handed off to the telemetry consumer. Sealing is
    /// idempotent; every later mutation attempt fails.
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    pub fn replacement(&self) -> Option<&ReplacementRoute> {
        self.replacement.as_ref()
    }

    /// Encoded polyline of the replacement route, once attached.
    pub fn new_route_geometry(&self) -> Option<&str> {
        self.replacement
            .as_ref()
            .map(|replacement| replacement.geometry())
    }

    /// Travel time in seconds remaining on the replacement route, once
    /// attached.
    pub fn new_duration_remaining(&self) -> Option<u32> {
        self.replacement
            .as_ref()
            .map(ReplacementRoute::duration_remaining)
    }

    /// Distance in meters remaining on the replacement route, once
    /// attached.
    pub fn new_distance_remaining(&self) -> Option<u32> {
        self.replacement
            .as_ref()
            .map(ReplacementRoute::distance_remaining)
    }
}

impl<S> TelemetryEvent for RerouteEvent<S> {
    type State = S;

    fn event_id(&self) -> &str {
        &self.event_id
    }

    fn session_state(&self) -> &S {
        &self.session_state
    }
}
