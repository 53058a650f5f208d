//! Reward hooks driven by the stepper.
//!
//! A hook tracks one player. The stepper reports game events to it and the
//! hook folds them into a running total that a training loop reads back.

use std::fmt;

use crate::{MatchState, PlayerId};

/// Game events that carry a reward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardEvent {
    PreServe,
    Serve,
    HitPaddle,
    ConcedePoint,
    ScorePoint,
    PaddleMovement,
    EndEpisode,
}

impl RewardEvent {
    /// Reward earned by `player` for this event in the given state
    pub fn amount(self, player: PlayerId, state: &MatchState) -> f32 {
        match self {
            RewardEvent::PreServe => -0.05,
            // Steeper serves pay off, flat ones cost
            RewardEvent::Serve => state.ball.vel.y * state.ball.vel.y - 30.0,
            RewardEvent::HitPaddle => 50.0,
            RewardEvent::ConcedePoint => {
                let paddle = state.paddle(player);
                -((state.ball.pos.y - (paddle.y + paddle.height)).abs() / 8.0)
            }
            RewardEvent::ScorePoint => 200.0,
            RewardEvent::PaddleMovement => 0.0,
            RewardEvent::EndEpisode => {
                // Never serving is the worst way to run out the clock
                if state.ball.serve_mode && player == state.server {
                    -200.0
                } else {
                    200.0
                }
            }
        }
    }
}

impl fmt::Display for RewardEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RewardEvent::PreServe => "pre_serve",
            RewardEvent::Serve => "serve",
            RewardEvent::HitPaddle => "hit_paddle",
            RewardEvent::ConcedePoint => "concede_point",
            RewardEvent::ScorePoint => "score_point",
            RewardEvent::PaddleMovement => "paddle_movement",
            RewardEvent::EndEpisode => "end_episode",
        };
        f.write_str(name)
    }
}

/// Event-driven reward accumulator.
///
/// Implementors only provide [`RewardHook::record`] and the bookkeeping
/// accessors; the per-event methods route through `record`.
pub trait RewardHook {
    fn rewarded_player(&self) -> PlayerId;

    /// Reward accumulated since the last `reset`
    fn total_reward(&self) -> f32;

    /// Number of `reset` calls so far. A driver that resets the hook
    /// every step, as `pong_env` does, sees a step count here.
    fn episodes(&self) -> u64;

    /// Zero the accumulator and count a new episode
    fn reset(&mut self);

    fn record(&mut self, event: RewardEvent, player: PlayerId, state: &MatchState);

    fn pre_serve_reward(&mut self, player: PlayerId, state: &MatchState) {
        self.record(RewardEvent::PreServe, player, state);
    }

    fn serve_reward(&mut self, player: PlayerId, state: &MatchState) {
        self.record(RewardEvent::Serve, player, state);
    }

    fn hit_paddle_reward(&mut self, player: PlayerId, state: &MatchState) {
        self.record(RewardEvent::HitPaddle, player, state);
    }

    fn concede_point_reward(&mut self, player: PlayerId, state: &MatchState) {
        self.record(RewardEvent::ConcedePoint, player, state);
    }

    fn score_point_reward(&mut self, player: PlayerId, state: &MatchState) {
        self.record(RewardEvent::ScorePoint, player, state);
    }

    /// Always +0 with the shipped hooks. Kept so custom hooks can reward
    /// paddle motion without touching the stepper.
    fn paddle_movement_reward(&mut self, player: PlayerId, state: &MatchState) {
        self.record(RewardEvent::PaddleMovement, player, state);
    }

    fn end_episode(&mut self, player: PlayerId, state: &MatchState) {
        self.record(RewardEvent::EndEpisode, player, state);
    }
}

/// Shared bookkeeping for the shipped hooks
#[derive(Debug, Clone)]
struct Ledger {
    rewarded_player: PlayerId,
    total: f32,
    episodes: u64,
}

impl Ledger {
    fn new(rewarded_player: PlayerId) -> Self {
        Self {
            rewarded_player,
            total: 0.0,
            episodes: 0,
        }
    }

    /// Credit the event if it concerns the rewarded player
    fn credit(&mut self, event: RewardEvent, player: PlayerId, state: &MatchState) -> Option<f32> {
        if player != self.rewarded_player {
            return None;
        }
        let amount = event.amount(player, state);
        self.total += amount;
        Some(amount)
    }

    fn reset(&mut self) {
        self.total = 0.0;
        self.episodes += 1;
    }
}

/// Accumulates rewards without any output
#[derive(Debug, Clone)]
pub struct SilentReward {
    ledger: Ledger,
}

impl SilentReward {
    pub fn new(rewarded_player: PlayerId) -> Self {
        Self {
            ledger: Ledger::new(rewarded_player),
        }
    }
}

impl RewardHook for SilentReward {
    fn rewarded_player(&self) -> PlayerId {
        self.ledger.rewarded_player
    }

    fn total_reward(&self) -> f32 {
        self.ledger.total
    }

    fn episodes(&self) -> u64 {
        self.ledger.episodes
    }

    fn reset(&mut self) {
        self.ledger.reset();
    }

    fn record(&mut self, event: RewardEvent, player: PlayerId, state: &MatchState) {
        self.ledger.credit(event, player, state);
    }
}

/// Same arithmetic as [`SilentReward`], but logs point outcomes and warns
/// whenever an event is routed to a player it doesn't track.
#[derive(Debug, Clone)]
pub struct DiagnosticReward {
    ledger: Ledger,
}

impl DiagnosticReward {
    pub fn new(rewarded_player: PlayerId) -> Self {
        Self {
            ledger: Ledger::new(rewarded_player),
        }
    }
}

impl RewardHook for DiagnosticReward {
    fn rewarded_player(&self) -> PlayerId {
        self.ledger.rewarded_player
    }

    fn total_reward(&self) -> f32 {
        self.ledger.total
    }

    fn episodes(&self) -> u64 {
        self.ledger.episodes
    }

    fn reset(&mut self) {
        self.ledger.reset();
    }

    fn record(&mut self, event: RewardEvent, player: PlayerId, state: &MatchState) {
        match self.ledger.credit(event, player, state) {
            Some(amount) => match event {
                RewardEvent::ScorePoint => {
                    log::info!("{player} scored a point ({amount:+})");
                }
                RewardEvent::EndEpisode => {
                    log::info!("Ended episode for {player} with {amount:+}");
                }
                _ => log::trace!("{event} reward {amount:+} for {player}"),
            },
            None => log::warn!(
                "{event} reward routed to {player}, but this hook tracks {}",
                self.ledger.rewarded_player
            ),
        }
    }
}
