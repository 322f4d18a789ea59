use serde::Deserialize;

/// Per-player entry from `/liveclientdata/playerlist`.
///
/// Every field is optional or defaulted so a partial payload early in the
/// game still parses; placeholder text is substituted at the point the
/// snapshot is summarized.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    #[serde(default)]
    pub summoner_name: Option<String>,
    #[serde(default)]
    pub champion_name: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub scores: Scores,
    #[serde(default)]
    pub runes: RunePage,
    #[serde(default)]
    pub summoner_spells: SummonerSpells,
}

/// Kills, deaths and assists for one player.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
    #[serde(default)]
    pub kills: u32,
    #[serde(default)]
    pub deaths: u32,
    #[serde(default)]
    pub assists: u32,
}

/// Keystone and primary tree display names, shared between the roster
/// (`runes`) and active-player (`fullRunes`) payload shapes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunePage {
    #[serde(default)]
    pub keystone: Option<Rune>,
    #[serde(default)]
    pub primary_rune_tree: Option<Rune>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rune {
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerSpells {
    #[serde(default)]
    pub summoner_spell_one: Option<SummonerSpell>,
    #[serde(default)]
    pub summoner_spell_two: Option<SummonerSpell>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerSpell {
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Detailed stats for the player currently being observed
/// (`/liveclientdata/activeplayer`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivePlayerSnapshot {
    #[serde(default)]
    pub summoner_name: Option<String>,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub current_gold: f64,
    #[serde(default)]
    pub champion_stats: ChampionStats,
    #[serde(default)]
    pub full_runes: RunePage,
    #[serde(default)]
    pub abilities: Abilities,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionStats {
    #[serde(default)]
    pub current_health: f64,
    #[serde(default)]
    pub max_health: f64,
    #[serde(default)]
    pub attack_damage: f64,
    #[serde(default)]
    pub ability_power: f64,
    #[serde(default)]
    pub armor: f64,
    #[serde(default)]
    pub magic_resist: f64,
    #[serde(default)]
    pub move_speed: f64,
}

/// The four ability slots, keyed `Q`/`W`/`E`/`R` in the payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Abilities {
    #[serde(default, rename = "Q")]
    pub q: Option<Ability>,
    #[serde(default, rename = "W")]
    pub w: Option<Ability>,
    #[serde(default, rename = "E")]
    pub e: Option<Ability>,
    #[serde(default, rename = "R")]
    pub r: Option<Ability>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    #[serde(default)]
    pub display_name: Option<String>,
}
