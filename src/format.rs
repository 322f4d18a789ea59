use crate::model::GameEvent;

/// Render the game clock as `MM:SS` with integer truncation. Minutes are
/// deliberately not capped at 60; a 62-minute mark renders as `62:05`
/// rather than rolling over into hours.
fn game_clock(seconds: f64) -> String {
    let total = seconds as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Convert a raw game event into a one-line caption with a game-clock
/// timestamp, e.g. `[10:00] Faker killed Doublelift`.
///
/// Total over the open set of event names: anything unrecognized falls
/// back to the raw name verbatim. The exact wording per event name is a
/// contract for commentary continuity, not arbitrary.
pub fn format_event(event: &GameEvent) -> String {
    let killer = || event.killer_name.as_deref().unwrap_or("?");
    let description = match event.event_name.as_str() {
        "GameStart" => "The game has started!".to_string(),
        "MinionsSpawning" => "Minions have spawned.".to_string(),
        "ChampionKill" => format!(
            "{} killed {}",
            killer(),
            event.victim_name.as_deref().unwrap_or("?")
        ),
        "TurretKilled" => format!(
            "{} destroyed {}",
            killer(),
            event.turret_killed.as_deref().unwrap_or("a turret")
        ),
        "DragonKill" => format!(
            "{} killed a {} dragon",
            killer(),
            event.dragon_type.as_deref().unwrap_or("dragon")
        ),
        "BaronKill" => format!("{} killed Baron Nashor", killer()),
        other => other.to_string(),
    };
    format!("[{}] {}", game_clock(event.event_time), description)
}
