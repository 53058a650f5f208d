use std::f32::consts::FRAC_PI_4;

use crate::{Aabb, Ball, Config, MatchState, Paddle, RewardHook, Side};

/// Angle imparted by a paddle, from where along it the ball landed.
///
/// Zero at the paddle's centre, +45° at its top edge, -45° at its bottom
/// edge. Contacts beyond the edges (the ball's radius still overlapping)
/// produce steeper angles.
pub fn bounce_angle(paddle_y: f32, paddle_height: f32, ball_y: f32) -> f32 {
    let half_height = paddle_height / 2.0;
    let relative_intersect_y = (paddle_y + half_height) - ball_y;
    relative_intersect_y / half_height * FRAC_PI_4
}

/// Reflect the ball off the top and bottom walls. Returns true on contact.
pub fn bounce_off_walls(ball: &mut Ball, config: &Config) -> bool {
    if ball.pos.y - ball.radius < 0.0 {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = ball.radius;
        true
    } else if ball.pos.y + ball.radius > config.court_height {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = config.court_height - ball.radius;
        true
    } else {
        false
    }
}

/// Is the ball touching the paddle standing on `side`?
///
/// The ball only needs to reach past the paddle's inner face; a ball that
/// has slipped behind the paddle still counts as a contact.
pub fn paddle_contact(ball: &Ball, paddle: &Paddle, side: Side) -> bool {
    let ball_box = Aabb::of_ball(ball);
    let paddle_box = Aabb::of_paddle(paddle);

    let reached = match side {
        Side::Left => ball_box.min.x < paddle_box.max.x,
        Side::Right => ball_box.max.x > paddle_box.min.x,
    };
    reached && paddle_box.overlaps_y(&ball_box)
}

/// Send the ball back toward the centre of the court and speed it up
pub fn deflect(ball: &mut Ball, paddle: &Paddle, side: Side, config: &Config) {
    let angle = bounce_angle(paddle.y, paddle.height, ball.pos.y);
    let contact_speed = ball.speed + paddle.dy.abs() / config.contact_boost_divisor;

    let (away, face_x) = match side {
        Side::Left => (1.0, paddle.x + paddle.width + ball.radius),
        Side::Right => (-1.0, paddle.x - ball.radius),
    };
    ball.vel.x = away * contact_speed * angle.cos();
    ball.vel.y = -contact_speed * angle.sin();

    // Sit flush against the paddle so it can't catch twice
    ball.pos.x = face_x;
    ball.speed += config.speed_increment;
}

/// Check the ball against both paddles, left first.
///
/// Returns the side of the paddle that was hit, if any.
pub fn check_paddle_collisions(
    state: &mut MatchState,
    config: &Config,
    rewards: &mut dyn RewardHook,
) -> Option<Side> {
    let side = [Side::Left, Side::Right]
        .into_iter()
        .find(|&side| paddle_contact(&state.ball, state.paddle_on(side), side))?;

    let paddle = *state.paddle_on(side);
    deflect(&mut state.ball, &paddle, side, config);
    state.stats.rally_length += 1;
    state.events.ball_hit_paddle = true;

    if state.tracked_on(side) {
        rewards.hit_paddle_reward(state.player, state);
    }
    Some(side)
}
