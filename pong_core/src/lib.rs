pub mod components;
pub mod config;
pub mod court;
pub mod error;
pub mod observation;
pub mod params;
pub mod policy;
pub mod resources;
pub mod reward;
pub mod score;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use court::*;
pub use error::*;
pub use observation::*;
pub use params::*;
pub use policy::*;
pub use resources::*;
pub use reward::*;
pub use score::*;
pub use state::*;

use systems::*;

/// Advance the match by one tick. Returns true once the point is decided.
///
/// Explicit Euler with no sub-stepping: a large `delta_time` can carry the
/// ball through a paddle. Contract violations are reported before anything
/// is mutated.
pub fn step(
    state: &mut MatchState,
    config: &Config,
    intents: &Intents,
    delta_time: f32,
    rewards: &mut dyn RewardHook,
) -> Result<bool, SimError> {
    if !delta_time.is_finite() || delta_time < 0.0 {
        return Err(SimError::InvalidDeltaTime(delta_time));
    }
    let intents = [*intents.get(PlayerId::One)?, *intents.get(PlayerId::Two)?];
    for player in PlayerId::ALL {
        if !intents[player.index()].paddle_direction.is_finite() {
            return Err(SimError::InvalidIntent(player));
        }
    }

    // Clear events at start of tick
    state.events.clear();

    // 1. Point already decided, wait for reset_point
    if state.ball.score_mode {
        state.ball.score_mode_timeout += delta_time;
        return Ok(true);
    }

    if state.ball.serve_mode {
        // 2. Ball rides the serving paddle
        serve_tick(state, config, &intents, delta_time, rewards);
    } else {
        // 3. Rally: move, bounce, check for a miss
        move_ball(&mut state.ball, delta_time);
        if bounce_off_walls(&mut state.ball, config) {
            state.events.ball_hit_wall = true;
        }
        check_paddle_collisions(state, config, rewards);
        check_scoring(state, config, rewards);
    }

    // 4. Paddles always move
    move_paddles(state, config, &intents, delta_time);

    // 5. Reserved shaping hook
    rewards.paddle_movement_reward(state.player, state);

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (MatchState, Config, SilentReward) {
        let config = Config::new();
        let setup = MatchSetup {
            server: PlayerId::One,
            positions_reversed: false,
            player: PlayerId::One,
            opponent: PlayerId::Two,
        };
        let state = new_match(&config, setup, &mut GameRng::default()).unwrap();
        (state, config, SilentReward::new(PlayerId::One))
    }

    fn idle() -> Intents {
        Intents::new()
            .with(PlayerId::One, Intent::default())
            .with(PlayerId::Two, Intent::default())
    }

    #[test]
    fn test_rejects_bad_delta_time() {
        let (mut state, config, mut rewards) = setup();
        let before = state.clone();

        for dt in [f32::NAN, f32::INFINITY, -1.0] {
            let result = step(&mut state, &config, &idle(), dt, &mut rewards);
            assert!(matches!(result, Err(SimError::InvalidDeltaTime(_))));
        }
        assert_eq!(state, before, "State untouched on error");
    }

    #[test]
    fn test_rejects_missing_intent() {
        let (mut state, config, mut rewards) = setup();
        let intents = Intents::new().with(PlayerId::One, Intent::new(true, 0.0));
        let before = state.clone();

        let result = step(&mut state, &config, &intents, 3.0, &mut rewards);

        assert_eq!(result, Err(SimError::MissingIntent(PlayerId::Two)));
        assert_eq!(state, before);
        assert_eq!(rewards.total_reward(), 0.0, "No reward events on error");
    }

    #[test]
    fn test_rejects_non_finite_direction() {
        let (mut state, config, mut rewards) = setup();
        let before = state.clone();

        let nan = Intents::new()
            .with(PlayerId::One, Intent::from_prediction([0.0, f32::NAN], 30.0))
            .with(PlayerId::Two, Intent::default());
        let result = step(&mut state, &config, &nan, 3.0, &mut rewards);
        assert_eq!(result, Err(SimError::InvalidIntent(PlayerId::One)));

        // Infinite direction is caught even when dt would zero it out
        let inf = Intents::new()
            .with(PlayerId::One, Intent::default())
            .with(PlayerId::Two, Intent::new(false, f32::INFINITY));
        let result = step(&mut state, &config, &inf, 0.0, &mut rewards);
        assert_eq!(result, Err(SimError::InvalidIntent(PlayerId::Two)));

        assert_eq!(state, before, "State untouched on error");
        assert_eq!(rewards.total_reward(), 0.0);
    }

    #[test]
    fn test_score_mode_terminates_immediately() {
        let (mut state, config, mut rewards) = setup();
        state.ball.serve_mode = false;
        state.ball.score_mode = true;
        let ball = state.ball.pos;

        let terminated = step(&mut state, &config, &idle(), 3.0, &mut rewards).unwrap();

        assert!(terminated);
        assert_eq!(state.ball.pos, ball);
        assert_eq!(state.ball.score_mode_timeout, 3.0);
        assert_eq!(rewards.total_reward(), 0.0);
    }

    #[test]
    fn test_rally_tick_moves_ball_and_paddles() {
        let (mut state, config, mut rewards) = setup();
        state.ball.serve_mode = false;
        state.ball.pos = glam::Vec2::new(600.0, 400.0);
        state.ball.vel = glam::Vec2::new(8.0, 2.0);
        let intents = Intents::new()
            .with(PlayerId::One, Intent::new(false, 1.0))
            .with(PlayerId::Two, Intent::new(false, 1.0));
        let left_y = state.paddle(PlayerId::One).y;

        let terminated = step(&mut state, &config, &intents, 2.0, &mut rewards).unwrap();

        assert!(!terminated);
        assert_eq!(state.ball.pos, glam::Vec2::new(616.0, 404.0));
        assert_eq!(state.paddle(PlayerId::One).y, left_y + 2.0);
        assert_eq!(state.events, Events::new(), "Quiet tick");
    }

    #[test]
    fn test_wall_event_is_raised() {
        let (mut state, config, mut rewards) = setup();
        state.ball.serve_mode = false;
        state.ball.pos = glam::Vec2::new(600.0, 14.0);
        state.ball.vel = glam::Vec2::new(8.0, -4.0);

        step(&mut state, &config, &idle(), 1.0, &mut rewards).unwrap();

        assert!(state.events.ball_hit_wall);
        assert_eq!(state.ball.vel.y, 4.0);
    }
}
