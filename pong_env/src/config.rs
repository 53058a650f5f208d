use pong_core::MatchSetup;
use pong_core::PlayerId::{self, One, Two};
use rand::Rng;

/// Episode driver settings. Physics live in `pong_core::Config`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvConfig {
    pub delta_time: f32,
    /// Steps allowed before the episode is forced to end
    pub max_steps: u32,
    /// Seed for the match rng (receiver scatter under reversed positions)
    pub seed: u64,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            delta_time: 3.0,
            max_steps: 1000,
            seed: 0,
        }
    }
}

impl EnvConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps;
        self
    }
}

const fn starting_state(
    server: PlayerId,
    positions_reversed: bool,
    opponent: PlayerId,
    player: PlayerId,
) -> MatchSetup {
    MatchSetup {
        server,
        positions_reversed,
        player,
        opponent,
    }
}

/// Every serve/end/seat combination, cycled through on reset
pub const STARTING_STATES: [MatchSetup; 8] = [
    starting_state(One, false, One, Two),
    starting_state(Two, false, One, Two),
    starting_state(Two, true, One, Two),
    starting_state(One, true, One, Two),
    starting_state(One, false, Two, One),
    starting_state(Two, false, Two, One),
    starting_state(Two, true, Two, One),
    starting_state(One, true, Two, One),
];

/// Range of a raw `[button, direction]` model action
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionBounds {
    pub low: [f32; 2],
    pub high: [f32; 2],
}

impl Default for ActionBounds {
    fn default() -> Self {
        Self {
            low: [0.0, -1.0],
            high: [1.0, 1.0],
        }
    }
}

impl ActionBounds {
    /// Uniform random action, for smoke-testing an environment
    pub fn sample<R: Rng>(&self, rng: &mut R) -> [f32; 2] {
        [
            rng.gen_range(self.low[0]..=self.high[0]),
            rng.gen_range(self.low[1]..=self.high[1]),
        ]
    }

    pub fn contains(&self, action: [f32; 2]) -> bool {
        (0..2).all(|i| (self.low[i]..=self.high[i]).contains(&action[i]))
    }
}
