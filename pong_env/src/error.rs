use pong_core::SimError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EnvError {
    #[error(transparent)]
    Sim(#[from] SimError),

    #[error("expected {expected} actions, one per environment, got {got}")]
    ActionCount { expected: usize, got: usize },
}
