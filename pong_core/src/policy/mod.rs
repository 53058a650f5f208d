pub mod heuristic;
pub mod model;

pub use heuristic::*;
pub use model::*;

use crate::{Intent, MatchState, PlayerId};

/// Something that decides what a player does each tick.
///
/// Policies may keep their own state between ticks (counters, random
/// draws) but only ever read the match.
pub trait ControllerPolicy {
    /// Prepare for a new point or episode
    fn reset(&mut self);

    /// Intent for `player` given the current state
    fn intent(&mut self, player: PlayerId, state: &MatchState) -> Intent;
}
