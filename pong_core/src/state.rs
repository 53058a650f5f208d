use glam::Vec2;
use rand::Rng;

use crate::{
    court_orientation, player_on_side, Ball, Colour, Config, Events, GameRng, Paddle, PlayerId,
    Side, SimError, Stats,
};

/// Who serves, which ends the players occupy, and whose rewards are tracked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSetup {
    pub server: PlayerId,
    pub positions_reversed: bool,
    pub player: PlayerId,
    pub opponent: PlayerId,
}

/// Where the current point is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointPhase {
    /// Ball held against the serving paddle
    Holding,
    /// Rally in progress
    Released,
    /// Point decided, waiting for `reset_point`
    Scored,
}

/// Complete state of a match in progress
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    pub server: PlayerId,
    pub positions_reversed: bool,
    pub player: PlayerId,   // tracked for rewards
    pub opponent: PlayerId, // the other controller
    pub paddles: [Paddle; 2],
    pub ball: Ball,
    pub stats: Stats,
    pub events: Events,
}

impl MatchState {
    pub fn paddle(&self, player: PlayerId) -> &Paddle {
        &self.paddles[player.index()]
    }

    pub fn paddle_mut(&mut self, player: PlayerId) -> &mut Paddle {
        &mut self.paddles[player.index()]
    }

    pub fn side_of(&self, player: PlayerId) -> Side {
        court_orientation(player, self.positions_reversed)
    }

    pub fn player_on(&self, side: Side) -> PlayerId {
        player_on_side(side, self.positions_reversed)
    }

    pub fn paddle_on(&self, side: Side) -> &Paddle {
        self.paddle(self.player_on(side))
    }

    /// Does the tracked player stand on `side`?
    pub fn tracked_on(&self, side: Side) -> bool {
        self.side_of(self.player) == side
    }

    pub fn phase(&self) -> PointPhase {
        if self.ball.score_mode {
            PointPhase::Scored
        } else if self.ball.serve_mode {
            PointPhase::Holding
        } else {
            PointPhase::Released
        }
    }

    /// True once the post-point pause has run its course
    pub fn score_pause_elapsed(&self, config: &Config) -> bool {
        self.ball.score_mode && self.ball.score_mode_timeout >= config.score_pause_timeout
    }
}

/// Build a match and set it up for the first serve
pub fn new_match(
    config: &Config,
    setup: MatchSetup,
    rng: &mut GameRng,
) -> Result<MatchState, SimError> {
    if setup.player == setup.opponent {
        return Err(SimError::PlayerIsOpponent(setup.player));
    }

    let start_y = config.court_height / 2.0 - config.paddle_height / 2.0;
    let paddle = |player: PlayerId| {
        Paddle::new(
            config.paddle_x(court_orientation(player, false)),
            start_y,
            config.paddle_width,
            config.paddle_height,
            Colour::for_player(player),
        )
    };

    let mut state = MatchState {
        server: setup.server,
        positions_reversed: setup.positions_reversed,
        player: setup.player,
        opponent: setup.opponent,
        paddles: [paddle(PlayerId::One), paddle(PlayerId::Two)],
        ball: Ball::new(
            Vec2::new(config.court_width / 2.0, config.court_height / 2.0),
            Vec2::splat(config.initial_ball_speed),
            config.ball_radius,
            config.initial_ball_speed,
        ),
        stats: Stats {
            rally_length: 0,
            serve_speed: config.initial_ball_speed,
            server: setup.server,
        },
        events: Events::new(),
    };

    reset_point(&mut state, config, rng);
    Ok(state)
}

/// Put paddles and ball back in their serving positions for a new point
pub fn reset_point(state: &mut MatchState, config: &Config, rng: &mut GameRng) {
    let server = state.server;
    let receiver = server.other();
    let reversed = state.positions_reversed;

    // Serving paddle is taller while its owner serves
    state.paddle_mut(server).height = config.serving_paddle_height();
    state.paddle_mut(receiver).height = config.paddle_height;

    for player in PlayerId::ALL {
        let side = court_orientation(player, reversed);
        state.paddle_mut(player).x = config.paddle_x(side);
    }

    // Only the reversed layout scatters the receiver
    if reversed {
        state.paddle_mut(receiver).y = rng.0.gen_range(0.0..=config.court_height);
    }

    let serving_paddle = *state.paddle(server);
    let ball = &mut state.ball;
    ball.pos.y = serving_paddle.center_y();
    ball.pos.x = match court_orientation(server, reversed) {
        Side::Left => serving_paddle.x + serving_paddle.width + ball.radius,
        Side::Right => serving_paddle.x - ball.radius,
    };
    ball.speed = config.initial_ball_speed;
    ball.serve_mode = true;
    ball.score_mode = false;
    ball.score_mode_timeout = 0.0;

    state.stats.rally_length = 0;
    state.events.clear();
}
