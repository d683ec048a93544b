/// Surface shared by session-scoped telemetry events.
pub trait TelemetryEvent {
    /// Session context captured by the event.
    type State;

    /// Identifier assigned when the event was created.
    fn event_id(&self) -> &str;

    /// Snapshot of the session the event belongs to.
    fn session_state(&self) -> &Self::State;
}
