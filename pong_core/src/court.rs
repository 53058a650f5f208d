use glam::Vec2;

use crate::{Ball, Paddle, PlayerId};

/// Physical side of the court
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn is_left(self) -> bool {
        self == Side::Left
    }

    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Which side a logical player stands on.
///
/// Player one starts on the left; `positions_reversed` swaps the ends.
/// Every left/right decision in the crate goes through here.
pub fn court_orientation(player: PlayerId, positions_reversed: bool) -> Side {
    match (player, positions_reversed) {
        (PlayerId::One, false) | (PlayerId::Two, true) => Side::Left,
        (PlayerId::One, true) | (PlayerId::Two, false) => Side::Right,
    }
}

/// The player standing on `side`
pub fn player_on_side(side: Side, positions_reversed: bool) -> PlayerId {
    if court_orientation(PlayerId::One, positions_reversed) == side {
        PlayerId::One
    } else {
        PlayerId::Two
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn of_paddle(paddle: &Paddle) -> Self {
        Self {
            min: Vec2::new(paddle.x, paddle.y),
            max: Vec2::new(paddle.x + paddle.width, paddle.y + paddle.height),
        }
    }

    /// Square bounding the ball
    pub fn of_ball(ball: &Ball) -> Self {
        let half = Vec2::splat(ball.radius);
        Self {
            min: ball.pos - half,
            max: ball.pos + half,
        }
    }

    /// Strict vertical overlap (touching edges do not count)
    pub fn overlaps_y(&self, other: &Aabb) -> bool {
        self.max.y > other.min.y && self.min.y < other.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Colour;

    #[test]
    fn test_orientation_default_positions() {
        assert_eq!(court_orientation(PlayerId::One, false), Side::Left);
        assert_eq!(court_orientation(PlayerId::Two, false), Side::Right);
    }

    #[test]
    fn test_orientation_reversed_positions() {
        assert_eq!(court_orientation(PlayerId::One, true), Side::Right);
        assert_eq!(court_orientation(PlayerId::Two, true), Side::Left);
    }

    #[test]
    fn test_player_on_side_inverts_orientation() {
        for reversed in [false, true] {
            for player in PlayerId::ALL {
                let side = court_orientation(player, reversed);
                assert_eq!(player_on_side(side, reversed), player);
                assert_eq!(player_on_side(side.opposite(), reversed), player.other());
            }
        }
    }

    #[test]
    fn test_aabb_overlaps_y_is_strict() {
        let paddle = Paddle::new(10.0, 100.0, 15.0, 90.0, Colour::RED);
        let paddle_box = Aabb::of_paddle(&paddle);

        let touching = Aabb::new(Vec2::new(0.0, 190.0), Vec2::new(5.0, 200.0));
        assert!(!paddle_box.overlaps_y(&touching), "Touching edges don't overlap");

        let inside = Aabb::new(Vec2::new(0.0, 150.0), Vec2::new(5.0, 160.0));
        assert!(paddle_box.overlaps_y(&inside));
        assert!(inside.overlaps_y(&paddle_box));
    }
}
