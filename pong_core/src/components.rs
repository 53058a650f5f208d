use std::fmt;

use glam::Vec2;

use crate::SimError;

/// Logical player identity. Which side of the court a player stands on is
/// decided separately by [`crate::court_orientation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    One = 1,
    Two = 2,
}

impl PlayerId {
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    pub fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Slot in per-player arrays
    pub fn index(self) -> usize {
        self as usize - 1
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = SimError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(PlayerId::One),
            2 => Ok(PlayerId::Two),
            other => Err(SimError::InvalidPlayer(other)),
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(id: PlayerId) -> u8 {
        id as u8
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", *self as u8)
    }
}

/// RGB paddle colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Colour(pub u8, pub u8, pub u8);

impl Colour {
    pub const RED: Colour = Colour(255, 0, 0);
    pub const DODGER_BLUE: Colour = Colour(30, 144, 255);

    pub fn for_player(player: PlayerId) -> Self {
        match player {
            PlayerId::One => Self::RED,
            PlayerId::Two => Self::DODGER_BLUE,
        }
    }
}

/// Paddle - `x`/`y` are the top-left corner, `dy` the last applied velocity
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub dy: f32,
    pub width: f32,
    pub height: f32,
    pub colour: Colour,
}

impl Paddle {
    pub fn new(x: f32, y: f32, width: f32, height: f32, colour: Colour) -> Self {
        Self {
            x,
            y,
            dy: 0.0,
            width,
            height,
            colour,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// The pong ball. `pos` is the centre.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub speed: f32,
    pub serve_mode: bool,
    pub score_mode: bool,
    pub score_mode_timeout: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            speed,
            serve_mode: true,
            score_mode: false,
            score_mode_timeout: 0.0,
        }
    }
}

/// Per-point statistics
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub rally_length: u32,
    pub serve_speed: f32,
    pub server: PlayerId,
}

/// A controller's requested action for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Intent {
    pub button_pressed: bool,
    pub paddle_direction: f32, // relative to the player's own facing
}

impl Intent {
    pub fn new(button_pressed: bool, paddle_direction: f32) -> Self {
        Self {
            button_pressed,
            paddle_direction,
        }
    }

    /// Map a two-value model prediction to an intent.
    ///
    /// `prediction[0]` is the serve button, `prediction[1]` the paddle
    /// direction, clamped to [-1, 1] before scaling.
    pub fn from_prediction(prediction: [f32; 2], direction_scale: f32) -> Self {
        Self {
            button_pressed: prediction[0] > crate::Params::BUTTON_THRESHOLD,
            paddle_direction: prediction[1].clamp(-1.0, 1.0) * direction_scale,
        }
    }
}

/// Intents for both players for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct Intents {
    slots: [Option<Intent>; 2],
}

impl Intents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, player: PlayerId, intent: Intent) -> Self {
        self.insert(player, intent);
        self
    }

    pub fn insert(&mut self, player: PlayerId, intent: Intent) {
        self.slots[player.index()] = Some(intent);
    }

    pub fn get(&self, player: PlayerId) -> Result<&Intent, SimError> {
        self.slots[player.index()]
            .as_ref()
            .ok_or(SimError::MissingIntent(player))
    }
}
