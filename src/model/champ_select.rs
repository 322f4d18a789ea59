use serde::Deserialize;

/// Snapshot of the champion select session from the LCU API.
///
/// Only the latest snapshot matters; no history is kept. An empty
/// `my_team` means the session has not formed yet (or the fetch raced the
/// lobby), never that champion select finished with nobody on our side.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampSelectSession {
    #[serde(default)]
    pub my_team: Vec<ChampSelectSlot>,
    #[serde(default)]
    pub their_team: Vec<ChampSelectSlot>,
}

/// One player slot within champion select.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampSelectSlot {
    #[serde(default)]
    pub cell_id: i64,
    #[serde(default)]
    pub champion_id: i64,
    #[serde(default)]
    pub assigned_position: String,
    #[serde(default)]
    pub puuid: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_session_payload() {
        let session: ChampSelectSession = serde_json::from_value(serde_json::json!({
            "myTeam": [
                { "cellId": 0, "championId": 103, "assignedPosition": "middle", "puuid": "abc" }
            ],
            "theirTeam": [],
            "timer": { "phase": "FINALIZATION" }
        }))
        .unwrap();
        assert_eq!(session.my_team.len(), 1);
        assert_eq!(session.my_team[0].champion_id, 103);
        assert!(session.their_team.is_empty());
    }

    #[test]
    fn missing_rosters_default_to_empty() {
        let session: ChampSelectSession = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(session.my_team.is_empty());
        assert!(session.their_team.is_empty());
    }
}
