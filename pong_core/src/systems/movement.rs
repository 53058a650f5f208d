use crate::{Ball, Config, Intent, MatchState, PlayerId, Side};

/// Integrate ball position from its velocity
pub fn move_ball(ball: &mut Ball, dt: f32) {
    ball.pos += ball.vel * dt;
}

/// Apply paddle movement based on intents.
///
/// Directions are relative to the player's own end: on the left a positive
/// direction moves the paddle down the court, on the right it moves it up.
pub fn move_paddles(state: &mut MatchState, config: &Config, intents: &[Intent; 2], dt: f32) {
    for player in PlayerId::ALL {
        let direction = intents[player.index()].paddle_direction;
        // Left-positive on purpose. A model trained with the right paddle
        // keeping the sign instead will steer inverted here.
        let dy = match state.side_of(player) {
            Side::Left => direction,
            Side::Right => -direction,
        };

        let paddle = state.paddle_mut(player);
        paddle.dy = dy;
        paddle.y += dy * dt;

        // Clamp to court bounds
        paddle.y = config.clamp_paddle_y(paddle.y, paddle.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{new_match, GameRng, MatchSetup};
    use glam::Vec2;

    fn setup_match(positions_reversed: bool) -> (MatchState, Config) {
        let config = Config::new();
        let setup = MatchSetup {
            server: PlayerId::One,
            positions_reversed,
            player: PlayerId::One,
            opponent: PlayerId::Two,
        };
        let state = new_match(&config, setup, &mut GameRng::default()).unwrap();
        (state, config)
    }

    #[test]
    fn test_move_ball_integrates_velocity() {
        let mut ball = Ball::new(Vec2::new(100.0, 100.0), Vec2::new(8.0, -2.0), 12.0, 8.0);
        move_ball(&mut ball, 3.0);
        assert_eq!(ball.pos, Vec2::new(124.0, 94.0));
    }

    #[test]
    fn test_direction_is_mirrored_between_sides() {
        let (mut state, config) = setup_match(false);
        let before = [state.paddle(PlayerId::One).y, state.paddle(PlayerId::Two).y];
        let intents = [Intent::new(false, 5.0), Intent::new(false, 5.0)];

        move_paddles(&mut state, &config, &intents, 2.0);

        assert_eq!(state.paddle(PlayerId::One).dy, 5.0, "Left paddle keeps the sign");
        assert_eq!(state.paddle(PlayerId::Two).dy, -5.0, "Right paddle flips it");
        assert_eq!(state.paddle(PlayerId::One).y, before[0] + 10.0);
        assert_eq!(state.paddle(PlayerId::Two).y, before[1] - 10.0);
    }

    #[test]
    fn test_direction_follows_reversed_positions() {
        let (mut state, config) = setup_match(true);
        let intents = [Intent::new(false, 4.0), Intent::new(false, 4.0)];

        move_paddles(&mut state, &config, &intents, 1.0);

        assert_eq!(state.paddle(PlayerId::One).dy, -4.0, "Player one is on the right");
        assert_eq!(state.paddle(PlayerId::Two).dy, 4.0, "Player two is on the left");
    }

    #[test]
    fn test_paddles_are_clamped_to_court() {
        let (mut state, config) = setup_match(false);
        let intents = [Intent::new(false, -1000.0), Intent::new(false, -1000.0)];

        move_paddles(&mut state, &config, &intents, 5.0);

        assert_eq!(state.paddle(PlayerId::One).y, 0.0);
        let right = state.paddle(PlayerId::Two);
        assert_eq!(right.y, config.court_height - right.height);
    }
}
