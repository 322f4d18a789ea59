use serde::Deserialize;

/// The summoner logged into the client (`/lol-summoner/v1/current-summoner`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summoner {
    #[serde(default)]
    pub game_name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub tag_line: Option<String>,
    #[serde(default)]
    pub summoner_level: u32,
}

impl Summoner {
    /// Best available display name. Newer clients populate `gameName`,
    /// older ones `displayName`.
    pub fn name(&self) -> &str {
        self.game_name
            .as_deref()
            .or(self.display_name.as_deref())
            .unwrap_or("Unknown Summoner")
    }
}
