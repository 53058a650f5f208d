use crate::PlayerId;

/// Contract violations reported by the simulation.
///
/// None of these are recoverable game situations; they mean the caller
/// handed the core something it must never see.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimError {
    #[error("player id {0} is out of range (expected 1 or 2)")]
    InvalidPlayer(u8),

    #[error("no intent supplied for {0}")]
    MissingIntent(PlayerId),

    #[error("paddle direction for {0} is not a finite number")]
    InvalidIntent(PlayerId),

    #[error("delta time must be finite and non-negative, got {0}")]
    InvalidDeltaTime(f32),

    #[error("{0} cannot be both the tracked player and the opponent")]
    PlayerIsOpponent(PlayerId),
}
