use serde::Deserialize;

/// Cumulative event list returned by `/liveclientdata/eventdata`.
///
/// Each poll returns a superset of everything that has happened so far in
/// the match. Filtering out events that were already surfaced happens in
/// [`crate::context::CommentaryContext`]. A payload missing the `Events`
/// key, or with a malformed element, fails deserialization as a whole and
/// is treated by the caller as "no data this tick".
#[derive(Debug, Clone, Deserialize)]
pub struct EventFeed {
    #[serde(rename = "Events")]
    pub events: Vec<GameEvent>,
}

/// One immutable record from the live event feed.
///
/// `event_name` is an open set; unrecognized names still format (the raw
/// name is used verbatim as the caption body).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameEvent {
    #[serde(rename = "EventID")]
    pub event_id: u64,
    pub event_name: String,
    /// Game clock in seconds since match start.
    #[serde(default)]
    pub event_time: f64,
    #[serde(default)]
    pub killer_name: Option<String>,
    #[serde(default)]
    pub victim_name: Option<String>,
    /// Name of the destroyed turret, present on `TurretKilled` events.
    #[serde(default)]
    pub turret_killed: Option<String>,
    #[serde(default)]
    pub dragon_type: Option<String>,
}
