use glam::Vec2;

use crate::components::{Ball, Movable};

/// Face of the paddle the ball struck, as seen from the penetration vector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// In tie-break order: the first maximum wins
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn axis(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, 1.0),
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::Down => Vec2::new(0.0, -1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
        }
    }
}

/// Result of a ball vs paddle test
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Collision {
    None,
    Hit {
        direction: Direction,
        /// Closest paddle point minus ball center
        penetration: Vec2,
    },
}

impl Collision {
    pub fn is_hit(&self) -> bool {
        matches!(self, Collision::Hit { .. })
    }
}

/// Circle vs axis-aligned box, closest-point method
pub fn check_collision(ball: &Ball, paddle: &Movable) -> Collision {
    let center = ball.center();
    let half_extents = paddle.half_extents();
    let aabb_center = paddle.center();

    let difference = center - aabb_center;
    let clamped = difference.clamp(-half_extents, half_extents);
    let closest = aabb_center + clamped;
    let penetration = closest - center;

    // Strict: a ball resting exactly on the surface is not a hit
    if penetration.length() < ball.radius {
        Collision::Hit {
            direction: vector_direction(penetration),
            penetration,
        }
    } else {
        Collision::None
    }
}

/// Classify a vector by the compass axis it points along most
pub fn vector_direction(target: Vec2) -> Direction {
    let target = target.normalize_or_zero();
    let mut best = Direction::Up;
    let mut max = f32::NEG_INFINITY;
    for direction in Direction::ALL {
        let dot = target.dot(direction.axis());
        if dot > max {
            max = dot;
            best = direction;
        }
    }
    best
}
