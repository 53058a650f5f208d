use crate::{Config, MatchState, Params, PlayerId};

pub const OBSERVATION_SIZE: usize = 8;

/// Feature vector handed to a model each tick
pub type Observation = [f32; OBSERVATION_SIZE];

/// Nominal range of each feature, for declaring an observation space.
/// Values are not clamped to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationBounds {
    pub low: Observation,
    pub high: Observation,
}

/// Projects a match onto the features one player's model sees
pub trait Observer {
    fn bounds(&self) -> ObservationBounds;

    fn observe(&self, player: PlayerId, state: &MatchState) -> Observation;
}

/// The default eight-feature encoding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardObserver {
    court_width: f32,
    court_height: f32,
}

impl StandardObserver {
    pub fn new(config: &Config) -> Self {
        Self {
            court_width: config.court_width,
            court_height: config.court_height,
        }
    }
}

impl Observer for StandardObserver {
    fn bounds(&self) -> ObservationBounds {
        ObservationBounds {
            low: [0.0, 0.0, -1.0, -1.0, 0.0, 0.0, 0.0, 0.0],
            high: [1.0; OBSERVATION_SIZE],
        }
    }

    /// Layout:
    ///
    /// | idx | feature                               |
    /// |-----|---------------------------------------|
    /// | 0   | ball x / court width                  |
    /// | 1   | ball y / court height                 |
    /// | 2   | ball dx / 40                          |
    /// | 3   | ball dy / 40                          |
    /// | 4   | own side (0 = left, 1 = right)        |
    /// | 5   | own paddle y / court height           |
    /// | 6   | 1 while the ball is held for a serve  |
    /// | 7   | 1 if `player` is serving              |
    fn observe(&self, player: PlayerId, state: &MatchState) -> Observation {
        let ball = &state.ball;
        let paddle = state.paddle(player);
        let flag = |on: bool| if on { 1.0 } else { 0.0 };

        [
            ball.pos.x / self.court_width,
            ball.pos.y / self.court_height,
            ball.vel.x / Params::OBSERVATION_VELOCITY_SCALE,
            ball.vel.y / Params::OBSERVATION_VELOCITY_SCALE,
            flag(!state.side_of(player).is_left()),
            paddle.y / self.court_height,
            flag(ball.serve_mode),
            flag(state.server == player),
        ]
    }
}

/// Encode `state` from `player`'s point of view with the standard observer
pub fn encode_observation(state: &MatchState, config: &Config, player: PlayerId) -> Observation {
    StandardObserver::new(config).observe(player, state)
}
