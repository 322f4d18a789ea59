//! The commentary loop: one discrete, fail-open step per poll.
//!
//! Every collaborator failure collapses to "no data this tick"; nothing
//! a collaborator does can fail a tick or terminate the loop.

use std::time::Duration;

use itertools::Itertools;
use tracing::debug;

use crate::client::{LcuClient, LiveClient};
use crate::commentator::Commentator;
use crate::context::CommentaryContext;
use crate::format::format_event;
use crate::model::GameflowPhase;
use crate::speech::Speaker;
use crate::summary::{summarize_active_player, summarize_roster};

/// Opening line spoken once at startup, before any game data is polled.
/// Goes straight to the speech output, not through the LLM.
pub const WELCOME_SCRIPT: &str = "Welcome, everyone, to the ultimate battleground where \
legends are made! I'm your host, bringing you the fastest plays and sharpest calls from \
today's high-stakes tournament. Get ready for insane strategies and jaw-dropping action \
as our top contenders prove they're the best in the game.";

const CHAMP_SELECT_DONE_TEXT: &str = "Champ select is done. Teams and bans are set.";

/// Owns every collaborator plus the per-match context, and sequences one
/// poll cycle at a time. Single logical thread of control: one blocking
/// call in flight at any moment, no background tasks.
pub struct CommentaryDriver {
    lcu: LcuClient,
    live: LiveClient,
    commentator: Commentator,
    speaker: Speaker,
    ctx: CommentaryContext,
    poll_interval: Duration,
    ambient_every: u32,
    idle_ticks: u32,
    welcomed: bool,
}

impl CommentaryDriver {
    pub fn new(
        lcu: LcuClient,
        live: LiveClient,
        commentator: Commentator,
        speaker: Speaker,
        poll_interval: Duration,
        ambient_every: u32,
    ) -> Self {
        Self {
            lcu,
            live,
            commentator,
            speaker,
            ctx: CommentaryContext::new(),
            poll_interval,
            ambient_every: ambient_every.max(1),
            idle_ticks: 0,
            welcomed: false,
        }
    }

    /// Run until the process is terminated. Graceful shutdown, if wanted,
    /// happens between iterations via a process signal.
    pub async fn run(mut self) {
        loop {
            for line in self.tick().await {
                println!("{line}");
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// One loop iteration, synchronous with one poll of the game APIs.
    /// Returns the lines emitted this tick so tests (and `run`) can
    /// observe them; an uneventful tick returns an empty vec.
    pub async fn tick(&mut self) -> Vec<String> {
        let mut emitted = Vec::new();

        if !self.welcomed {
            self.welcomed = true;
            self.speaker.speak(WELCOME_SCRIPT).await;
            emitted.push(WELCOME_SCRIPT.to_string());
        }

        let phase = match self.lcu.get_gameflow_phase().await {
            Ok(phase) => phase,
            Err(e) => {
                debug!(error = %e, "gameflow phase unavailable this tick");
                return emitted;
            }
        };

        if phase.is_pregame() && !self.ctx.champ_select_done() {
            if let Ok(session) = self.lcu.get_champ_select_session().await {
                if self.ctx.record_champ_select(&session) {
                    let caption = self.commentator.caption(CHAMP_SELECT_DONE_TEXT).await;
                    self.speaker.speak(&caption).await;
                    emitted.push(caption);
                }
            }
        }

        if phase == GameflowPhase::InProgress {
            let new_events = match self.live.get_event_feed().await {
                Ok(feed) => self.ctx.record_new_events(&feed),
                Err(e) => {
                    debug!(error = %e, "event feed unavailable this tick");
                    Vec::new()
                }
            };

            if !new_events.is_empty() {
                // Major events take priority over ambient chatter.
                self.idle_ticks = 0;
                let block = new_events.iter().map(format_event).join("\n");
                let caption = self.commentator.caption(&block).await;
                self.speaker.speak(&caption).await;
                emitted.push(caption);
            } else {
                self.idle_ticks = self.idle_ticks.wrapping_add(1);
                if self.idle_ticks % self.ambient_every == 0 {
                    let roster = match self.live.get_player_list().await {
                        Ok(players) => summarize_roster(&players),
                        Err(_) => String::new(),
                    };
                    let active = self.live.get_active_player().await.ok();
                    let active = summarize_active_player(active.as_ref());

                    let caption = self.commentator.caption(&format!("{roster}\n{active}")).await;
                    self.speaker.speak(&caption).await;
                    emitted.push(caption);
                }
            }
        }

        emitted
    }
}
