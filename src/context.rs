use std::collections::HashSet;

use crate::model::{ChampSelectSession, ChampSelectSlot, EventFeed, GameEvent};

/// Per-match commentary state: which event ids have already been surfaced
/// and whether champion select has been reported complete.
///
/// One instance lives for the whole process run; nothing is persisted.
/// The seen-id registry only ever grows, so if the upstream feed resets
/// mid-process (a new match without a restart) early events of the new
/// match would be suppressed. Known limitation.
#[derive(Debug, Default)]
pub struct CommentaryContext {
    seen_event_ids: HashSet<u64>,
    champ_select_done: bool,
    players_info: Vec<ChampSelectSlot>,
    teams_info: Option<ChampSelectSession>,
}

impl CommentaryContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether champion select has already been reported complete.
    pub fn champ_select_done(&self) -> bool {
        self.champ_select_done
    }

    /// Our team's slots from the last recorded champ-select snapshot.
    pub fn players_info(&self) -> &[ChampSelectSlot] {
        &self.players_info
    }

    /// Both rosters from the last recorded champ-select snapshot.
    pub fn teams_info(&self) -> Option<&ChampSelectSession> {
        self.teams_info.as_ref()
    }

    /// Record a champ-select snapshot.
    ///
    /// An empty `myTeam` roster means the session is still forming and
    /// changes nothing. A non-empty roster stores both teams and latches
    /// `champ_select_done`; the latch never resets. Returns `true` only on
    /// the call that flips the latch, so the caller can announce the
    /// completion exactly once.
    pub fn record_champ_select(&mut self, session: &ChampSelectSession) -> bool {
        if session.my_team.is_empty() {
            return false;
        }
        self.players_info = session.my_team.clone();
        self.teams_info = Some(session.clone());
        let flipped = !self.champ_select_done;
        self.champ_select_done = true;
        flipped
    }

    /// Filter the cumulative feed down to the events not yet surfaced, in
    /// feed order, marking each one seen before returning. Each id is
    /// delivered at most once per context lifetime.
    pub fn record_new_events(&mut self, feed: &EventFeed) -> Vec<GameEvent> {
        feed.events
            .iter()
            .filter(|e| self.seen_event_ids.insert(e.event_id))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: u64) -> GameEvent {
        GameEvent {
            event_id: id,
            event_name: "ChampionKill".to_string(),
            event_time: id as f64,
            killer_name: None,
            victim_name: None,
            turret_killed: None,
            dragon_type: None,
        }
    }

    fn feed(ids: &[u64]) -> EventFeed {
        EventFeed {
            events: ids.iter().copied().map(event).collect(),
        }
    }

    #[test]
    fn first_poll_surfaces_everything_in_order() {
        let mut ctx = CommentaryContext::new();
        let new = ctx.record_new_events(&feed(&[1, 2, 3]));
        let ids: Vec<u64> = new.iter().map(|e| e.event_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn growing_feed_yields_only_the_new_tail() {
        let mut ctx = CommentaryContext::new();
        assert_eq!(ctx.record_new_events(&feed(&[1, 2, 3])).len(), 3);
        assert!(ctx.record_new_events(&feed(&[1, 2, 3])).is_empty());
        let new = ctx.record_new_events(&feed(&[1, 2, 3, 4]));
        assert_eq!(new.len(), 1);
        assert_eq!(new[0].event_id, 4);
    }

    #[test]
    fn fresh_contexts_agree_on_the_same_feed() {
        let mut a = CommentaryContext::new();
        let mut b = CommentaryContext::new();
        let from_a: Vec<u64> = a
            .record_new_events(&feed(&[5, 6]))
            .iter()
            .map(|e| e.event_id)
            .collect();
        let from_b: Vec<u64> = b
            .record_new_events(&feed(&[5, 6]))
            .iter()
            .map(|e| e.event_id)
            .collect();
        assert_eq!(from_a, from_b);
    }

    fn session(my_team_size: usize) -> ChampSelectSession {
        ChampSelectSession {
            my_team: (0..my_team_size)
                .map(|i| ChampSelectSlot {
                    cell_id: i as i64,
                    ..Default::default()
                })
                .collect(),
            their_team: Vec::new(),
        }
    }

    #[test]
    fn empty_roster_never_flips_the_latch() {
        let mut ctx = CommentaryContext::new();
        assert!(!ctx.record_champ_select(&session(0)));
        assert!(!ctx.record_champ_select(&session(0)));
        assert!(!ctx.champ_select_done());
        assert!(ctx.players_info().is_empty());
    }

    #[test]
    fn latch_flips_once_and_stays_set() {
        let mut ctx = CommentaryContext::new();
        assert!(ctx.record_champ_select(&session(5)));
        assert!(ctx.champ_select_done());
        assert_eq!(ctx.players_info().len(), 5);

        // Subsequent snapshots update the rosters but never re-announce.
        assert!(!ctx.record_champ_select(&session(4)));
        assert!(ctx.champ_select_done());
        assert_eq!(ctx.players_info().len(), 4);

        // An empty snapshot after the latch leaves everything alone.
        assert!(!ctx.record_champ_select(&session(0)));
        assert!(ctx.champ_select_done());
        assert_eq!(ctx.players_info().len(), 4);
    }
}
