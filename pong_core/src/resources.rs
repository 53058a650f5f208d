/// Random number generator used for point setup
#[derive(Debug, Clone)]
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during the most recent tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Events {
    pub served: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub left_conceded: bool,
    pub right_conceded: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn point_decided(&self) -> bool {
        self.left_conceded || self.right_conceded
    }
}
