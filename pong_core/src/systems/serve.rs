use crate::{Config, Intent, MatchState, RewardHook, Side};

/// One tick of the serve: the ball rides along with the serving paddle
/// until the server presses the button.
///
/// Release happens at most once per point; only `reset_point` puts the
/// ball back into serve mode.
pub fn serve_tick(
    state: &mut MatchState,
    config: &Config,
    intents: &[Intent; 2],
    dt: f32,
    rewards: &mut dyn RewardHook,
) {
    let server = state.server;
    let serving_side = state.side_of(server);
    let tracked_serving = state.tracked_on(serving_side);

    if tracked_serving {
        rewards.pre_serve_reward(state.player, state);
    }

    if intents[server.index()].button_pressed {
        release_serve(state, config, serving_side);
        if tracked_serving {
            rewards.serve_reward(state.player, state);
        }
    }

    // Ball drifts toward the centre of the serving paddle
    let paddle = *state.paddle(server);
    let ball = &mut state.ball;
    ball.vel.y = (paddle.center_y() - ball.pos.y) / config.paddle_speed_divisor;
    ball.pos.y += ball.vel.y * dt;
}

fn release_serve(state: &mut MatchState, config: &Config, serving_side: Side) {
    let ball = &mut state.ball;
    ball.speed = config.initial_ball_speed;
    ball.vel.x = match serving_side {
        Side::Left => config.initial_ball_speed,
        Side::Right => -config.initial_ball_speed,
    };
    ball.serve_mode = false;

    let stats = &mut state.stats;
    stats.rally_length += 1;
    stats.serve_speed = ball.vel.y.abs() + ball.vel.x.abs();
    stats.server = state.server;
    state.events.served = true;

    log::debug!(
        "{} served from the {:?} at {:.2}",
        state.server,
        serving_side,
        stats.serve_speed
    );
}
