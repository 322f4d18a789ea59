//! Prose summaries of roster and active-player snapshots, used as LLM
//! input on ticks with no new events. Stateless: snapshots are never
//! diffed against prior state.

use crate::model::{Ability, ActivePlayerSnapshot, PlayerSnapshot, RunePage};

fn rune_names(runes: &RunePage) -> (&str, &str) {
    let keystone = runes
        .keystone
        .as_ref()
        .and_then(|r| r.display_name.as_deref())
        .unwrap_or("Unknown Keystone");
    let tree = runes
        .primary_rune_tree
        .as_ref()
        .and_then(|r| r.display_name.as_deref())
        .unwrap_or("Unknown Rune Tree");
    (keystone, tree)
}

fn ability_name<'a>(ability: &'a Option<Ability>, fallback: &'a str) -> &'a str {
    ability
        .as_ref()
        .and_then(|a| a.display_name.as_deref())
        .unwrap_or(fallback)
}

/// Format the roster into per-player text blocks, one blank line between
/// players. An empty roster yields an empty string.
pub fn summarize_roster(players: &[PlayerSnapshot]) -> String {
    let mut out = String::new();
    for player in players {
        let summoner = player.summoner_name.as_deref().unwrap_or("Unknown Summoner");
        let champion = player.champion_name.as_deref().unwrap_or("Unknown Champion");
        let team = player.team.as_deref().unwrap_or("Unknown Team");
        let position = player.position.as_deref().unwrap_or("NONE");
        let scores = &player.scores;
        let (keystone, tree) = rune_names(&player.runes);
        let spells = &player.summoner_spells;
        let spell_one = spells
            .summoner_spell_one
            .as_ref()
            .and_then(|s| s.display_name.as_deref())
            .unwrap_or("Unknown Spell");
        let spell_two = spells
            .summoner_spell_two
            .as_ref()
            .and_then(|s| s.display_name.as_deref())
            .unwrap_or("Unknown Spell");

        out.push_str(&format!(
            "Player: {summoner} ({champion}) on team {team}.\n\
             Role: {position}.\n\
             Scores: {}/{}/{}, Level: {}.\n\
             Keystone Rune: {keystone} ({tree} tree).\n\
             Summoner Spells: {spell_one} and {spell_two}.\n\n",
            scores.kills, scores.deaths, scores.assists, player.level
        ));
    }
    out
}

/// Format the actively observed player's stat sheet, numeric fields to
/// one decimal place. `None` (a failed fetch) yields an empty string.
pub fn summarize_active_player(active: Option<&ActivePlayerSnapshot>) -> String {
    let Some(active) = active else {
        return String::new();
    };

    let summoner = active.summoner_name.as_deref().unwrap_or("Unknown Summoner");
    let stats = &active.champion_stats;
    let (keystone, tree) = rune_names(&active.full_runes);
    let abilities = &active.abilities;

    format!(
        "Active Player: {summoner} (Level {})\n\
         Health: {:.1}/{:.1}\n\
         Gold: {:.1}\n\
         Stats:\n \
         - AD: {:.1}, AP: {:.1}\n \
         - Armor: {:.1}, Magic Resist: {:.1}\n \
         - Move Speed: {:.1}\n\
         Runes: {keystone} ({tree} tree)\n\
         Abilities:\n \
         - Q: {}\n \
         - W: {}\n \
         - E: {}\n \
         - R: {}\n",
        active.level,
        stats.current_health,
        stats.max_health,
        active.current_gold,
        stats.attack_damage,
        stats.ability_power,
        stats.armor,
        stats.magic_resist,
        stats.move_speed,
        ability_name(&abilities.q, "Q Ability"),
        ability_name(&abilities.w, "W Ability"),
        ability_name(&abilities.e, "E Ability"),
        ability_name(&abilities.r, "R Ability"),
    )
}
