use crate::params::Params;

/// Physics configuration shared by every match. Immutable once a match starts.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    pub court_width: f32,
    pub court_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_gap: f32,
    pub serving_height_multiplier: f32,
    pub ball_radius: f32,
    pub initial_ball_speed: f32,
    pub speed_increment: f32,
    pub paddle_speed_divisor: f32,
    pub contact_boost_divisor: f32,
    pub score_pause_timeout: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            court_width: Params::COURT_WIDTH,
            court_height: Params::COURT_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_gap: Params::PADDLE_GAP,
            serving_height_multiplier: Params::SERVING_HEIGHT_MULTIPLIER,
            ball_radius: Params::BALL_RADIUS,
            initial_ball_speed: Params::INITIAL_BALL_SPEED,
            speed_increment: Params::SPEED_INCREMENT,
            paddle_speed_divisor: Params::PADDLE_SPEED_DIVISOR,
            contact_boost_divisor: Params::PADDLE_CONTACT_SPEED_BOOST_DIVISOR,
            score_pause_timeout: Params::SCORE_PAUSE_TIMEOUT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position of the paddle standing on the given side
    pub fn paddle_x(&self, side: crate::Side) -> f32 {
        match side {
            crate::Side::Left => self.paddle_gap,
            crate::Side::Right => self.court_width - self.paddle_width - self.paddle_gap,
        }
    }

    /// Height of the paddle while its owner serves
    pub fn serving_paddle_height(&self) -> f32 {
        self.paddle_height * self.serving_height_multiplier
    }

    /// Clamp paddle Y (top edge) so the whole paddle stays on court
    pub fn clamp_paddle_y(&self, y: f32, height: f32) -> f32 {
        if y < 0.0 {
            0.0
        } else if y + height > self.court_height {
            self.court_height - height
        } else {
            y
        }
    }
}
