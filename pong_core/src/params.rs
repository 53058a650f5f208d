/// Match tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court
    pub const COURT_WIDTH: f32 = 1200.0;
    pub const COURT_HEIGHT: f32 = 800.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 90.0;
    pub const PADDLE_GAP: f32 = 10.0; // distance from the back wall
    pub const SERVING_HEIGHT_MULTIPLIER: f32 = 2.0;

    // Ball
    pub const BALL_RADIUS: f32 = 12.0;
    pub const INITIAL_BALL_SPEED: f32 = 8.0;
    pub const SPEED_INCREMENT: f32 = 0.25; // added on every paddle hit
    pub const PADDLE_SPEED_DIVISOR: f32 = 15.0; // ball follows the serving paddle
    pub const PADDLE_CONTACT_SPEED_BOOST_DIVISOR: f32 = 4.0;

    // Post-point pause before a front-end resets the ball
    pub const SCORE_PAUSE_TIMEOUT: f32 = 60.0;

    // Heuristic opponent
    pub const MAX_COMPUTER_PADDLE_SPEED: i32 = 15;
    pub const MIN_COMPUTER_SERVE_DELAY: u32 = 100;
    pub const MAX_COMPUTER_SERVE_DELAY: u32 = 200;

    // Match scoring
    pub const NUMBER_OF_SETS: u32 = 3;
    pub const SET_LENGTH: u32 = 6; // games needed to take a set
    pub const TIEBREAK_POINTS: u32 = 7;
    pub const TIEBREAK_END_CHANGE_INTERVAL: u32 = 6;
    pub const LONG_RALLY_ANNOUNCEMENT_THRESHOLD: u32 = 10;
    pub const WIN_STREAK_ANNOUNCEMENT_INTERVAL: u32 = 5;
    pub const DEUCE_COUNT_ANNOUNCEMENT_THRESHOLD: u32 = 3;

    // Observation / model output scaling
    pub const OBSERVATION_VELOCITY_SCALE: f32 = 40.0;
    pub const MODEL_DIRECTION_SCALE: f32 = 30.0;
    pub const BUTTON_THRESHOLD: f32 = 0.5;
}
