use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Config, ControllerPolicy, Intent, MatchState, Params, PlayerId};

/// Scripted opponent: waits a random number of ticks before serving,
/// then chases the ball with a random aim offset along its paddle.
#[derive(Debug, Clone)]
pub struct HeuristicPolicy<R: Rng = StdRng> {
    rng: R,
    court_height: f32,
    paddle_height: f32, // base height, bounds the aim offset
    max_speed: i32,
    serve_delay: u32,
    serve_delay_counter: u32,
    direction: f32,
    offset: f32,
}

impl HeuristicPolicy<StdRng> {
    pub fn seeded(config: &Config, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> HeuristicPolicy<R> {
    pub fn new(config: &Config, rng: R) -> Self {
        let mut policy = Self {
            rng,
            court_height: config.court_height,
            paddle_height: config.paddle_height,
            max_speed: Params::MAX_COMPUTER_PADDLE_SPEED,
            serve_delay: 0,
            serve_delay_counter: 0,
            direction: 0.0,
            offset: 0.0,
        };
        policy.reset();
        policy
    }

    pub fn serve_delay(&self) -> u32 {
        self.serve_delay
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }
}

impl<R: Rng> ControllerPolicy for HeuristicPolicy<R> {
    fn reset(&mut self) {
        self.serve_delay = self.rng.gen_range(
            Params::MIN_COMPUTER_SERVE_DELAY..=Params::MAX_COMPUTER_SERVE_DELAY,
        );
        self.direction = self.rng.gen_range(-self.max_speed..=self.max_speed) as f32;
        let half = (self.paddle_height / 2.0) as i32;
        self.offset = self.rng.gen_range(-half..=half) as f32;
        self.serve_delay_counter = 0;
    }

    fn intent(&mut self, player: PlayerId, state: &MatchState) -> Intent {
        let ball = &state.ball;

        // Nothing to do until the point is reset
        if ball.score_mode {
            return Intent::default();
        }

        let paddle = state.paddle(player);

        if ball.serve_mode {
            // Bounce between the walls while waiting to serve
            if paddle.y <= 0.0 || paddle.y + paddle.height >= self.court_height {
                self.direction = -self.direction;
            }

            if self.serve_delay_counter > self.serve_delay {
                return Intent::new(true, self.direction);
            }
            self.serve_delay_counter += 1;
            return Intent::new(false, self.direction);
        }

        // Head towards the ball
        let max_speed = self.max_speed as f32;
        let target = (paddle.y + self.offset - ball.pos.y + paddle.height / 2.0)
            .clamp(-max_speed, max_speed);

        let direction = if state.side_of(player).is_left() {
            -target
        } else {
            target
        };
        Intent::new(false, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{new_match, GameRng, MatchSetup};

    fn setup_match(server: PlayerId) -> (MatchState, Config) {
        let config = Config::new();
        let setup = MatchSetup {
            server,
            positions_reversed: false,
            player: PlayerId::One,
            opponent: PlayerId::Two,
        };
        let state = new_match(&config, setup, &mut GameRng::default()).unwrap();
        (state, config)
    }

    #[test]
    fn test_reset_draws_within_bounds() {
        let config = Config::new();
        for seed in 0..50 {
            let policy = HeuristicPolicy::seeded(&config, seed);
            assert!((Params::MIN_COMPUTER_SERVE_DELAY..=Params::MAX_COMPUTER_SERVE_DELAY)
                .contains(&policy.serve_delay()));
            assert!(policy.offset().abs() <= config.paddle_height / 2.0);
            assert!(policy.direction.abs() <= Params::MAX_COMPUTER_PADDLE_SPEED as f32);
        }
    }

    #[test]
    fn test_idle_in_score_mode() {
        let (mut state, config) = setup_match(PlayerId::Two);
        state.ball.serve_mode = false;
        state.ball.score_mode = true;
        let mut policy = HeuristicPolicy::seeded(&config, 1);

        assert_eq!(policy.intent(PlayerId::Two, &state), Intent::default());
    }

    #[test]
    fn test_serves_after_delay() {
        let (state, config) = setup_match(PlayerId::Two);
        let mut policy = HeuristicPolicy::seeded(&config, 3);
        let delay = policy.serve_delay();

        for _ in 0..=delay {
            assert!(!policy.intent(PlayerId::Two, &state).button_pressed);
        }
        assert!(policy.intent(PlayerId::Two, &state).button_pressed);
    }

    #[test]
    fn test_direction_flips_at_court_edge() {
        let (mut state, config) = setup_match(PlayerId::Two);
        let mut policy = HeuristicPolicy::seeded(&config, 5);
        policy.direction = 7.0;

        state.paddle_mut(PlayerId::Two).y = 0.0;
        assert_eq!(policy.intent(PlayerId::Two, &state).paddle_direction, -7.0);

        state.paddle_mut(PlayerId::Two).y = 300.0;
        assert_eq!(policy.intent(PlayerId::Two, &state).paddle_direction, -7.0);
    }

    #[test]
    fn test_chases_ball_in_rally() {
        let (mut state, config) = setup_match(PlayerId::One);
        state.ball.serve_mode = false;
        let mut policy = HeuristicPolicy::seeded(&config, 9);
        policy.offset = 0.0;

        // Ball well above the right paddle: paddle needs to move up (negative dy),
        // the stepper flips right-side directions, so the intent is positive
        state.ball.pos.y = 50.0;
        let intent = policy.intent(PlayerId::Two, &state);
        assert_eq!(intent.paddle_direction, Params::MAX_COMPUTER_PADDLE_SPEED as f32);

        // Left paddle chasing the same ball gets the opposite sign
        let intent = policy.intent(PlayerId::One, &state);
        assert_eq!(intent.paddle_direction, -(Params::MAX_COMPUTER_PADDLE_SPEED as f32));
    }

    #[test]
    fn test_identical_seeds_identical_draws() {
        let config = Config::new();
        let a = HeuristicPolicy::seeded(&config, 42);
        let b = HeuristicPolicy::seeded(&config, 42);
        assert_eq!(a.serve_delay(), b.serve_delay());
        assert_eq!(a.offset(), b.offset());
        assert_eq!(a.direction, b.direction);
    }
}
