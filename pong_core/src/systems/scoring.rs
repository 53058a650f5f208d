use crate::{Config, MatchState, RewardHook, Side};

/// Check if the ball left the court. Returns the side that conceded.
pub fn check_scoring(
    state: &mut MatchState,
    config: &Config,
    rewards: &mut dyn RewardHook,
) -> Option<Side> {
    let ball = &state.ball;
    let conceded = if ball.pos.x - ball.radius < 0.0 {
        Side::Left
    } else if ball.pos.x + ball.radius > config.court_width {
        Side::Right
    } else {
        return None;
    };

    state.ball.score_mode = true;
    match conceded {
        Side::Left => state.events.left_conceded = true,
        Side::Right => state.events.right_conceded = true,
    }
    log::debug!(
        "{} conceded after a rally of {}",
        state.player_on(conceded),
        state.stats.rally_length
    );

    if state.tracked_on(conceded) {
        rewards.concede_point_reward(state.player, state);
    } else {
        rewards.score_point_reward(state.player, state);
    }
    Some(conceded)
}
