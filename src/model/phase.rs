/// Coarse game-state label reported by the League client.
///
/// The set of phase strings is open; anything this crate does not know
/// about lands in [`GameflowPhase::Other`] with the raw string preserved.
#[derive(Debug, Clone, PartialEq, Eq, strum_macros::Display, strum_macros::EnumString)]
pub enum GameflowPhase {
    None,
    Lobby,
    Matchmaking,
    ReadyCheck,
    ChampSelect,
    GameStart,
    InProgress,
    WaitingForStats,
    PreEndOfGame,
    EndOfGame,
    #[strum(default)]
    Other(String),
}

impl GameflowPhase {
    /// Phases during which champion select may still be in progress.
    pub fn is_pregame(&self) -> bool {
        matches!(self, Self::Lobby | Self::Matchmaking | Self::ChampSelect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_phases() {
        assert_eq!(
            "InProgress".parse::<GameflowPhase>().ok(),
            Some(GameflowPhase::InProgress)
        );
        assert_eq!(
            "ChampSelect".parse::<GameflowPhase>().ok(),
            Some(GameflowPhase::ChampSelect)
        );
    }

    #[test]
    fn unknown_phase_is_preserved() {
        let phase: GameflowPhase = "TerminatedInError".parse().unwrap_or(GameflowPhase::None);
        assert_eq!(phase, GameflowPhase::Other("TerminatedInError".to_string()));
        assert!(!phase.is_pregame());
    }

    #[test]
    fn pregame_covers_exactly_the_lobby_phases() {
        assert!(GameflowPhase::Lobby.is_pregame());
        assert!(GameflowPhase::Matchmaking.is_pregame());
        assert!(GameflowPhase::ChampSelect.is_pregame());
        assert!(!GameflowPhase::ReadyCheck.is_pregame());
        assert!(!GameflowPhase::InProgress.is_pregame());
    }
}
