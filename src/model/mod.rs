mod champ_select;
mod event;
mod phase;
mod player;
mod summoner;

pub use champ_select::*;
pub use event::*;
pub use phase::*;
pub use player::*;
pub use summoner::*;
