use glam::Vec2;

use crate::components::{Ball, Side};
use crate::params::Params;

/// A difficulty tier: two balls, one served from each side
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub name: &'static str,
    pub ball1: Ball, // served by player 1 (right paddle)
    pub ball2: Ball, // served by player 2 (left paddle)
    velocity: Vec2,
}

impl Level {
    /// Build a level whose balls travel at `velocity`.
    ///
    /// Ball 1 always heads left and ball 2 always heads right; the vertical
    /// component is shared.
    pub fn load(
        name: &'static str,
        ball1_pos: Vec2,
        ball2_pos: Vec2,
        radius: f32,
        velocity: Vec2,
    ) -> Self {
        let mut level = Self {
            name,
            ball1: Ball::new(ball1_pos, radius, Vec2::ZERO),
            ball2: Ball::new(ball2_pos, radius, Vec2::ZERO),
            velocity,
        };
        level.ball1.body.velocity = level.serve_velocity(Side::Right);
        level.ball2.body.velocity = level.serve_velocity(Side::Left);
        level
    }

    /// The configured velocity, before serve direction is applied
    pub fn base_velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Fresh velocity for a ball served from `side`
    pub fn serve_velocity(&self, side: Side) -> Vec2 {
        let vx = self.velocity.x.abs();
        match side {
            Side::Right => Vec2::new(-vx, self.velocity.y),
            Side::Left => Vec2::new(vx, self.velocity.y),
        }
    }

    pub fn ball(&self, side: Side) -> &Ball {
        match side {
            Side::Right => &self.ball1,
            Side::Left => &self.ball2,
        }
    }

    pub fn ball_mut(&mut self, side: Side) -> &mut Ball {
        match side {
            Side::Right => &mut self.ball1,
            Side::Left => &mut self.ball2,
        }
    }
}

/// Build all four difficulty tiers, balls parked at the given serve spots
pub fn build_levels(player1_serve: Vec2, player2_serve: Vec2) -> Vec<Level> {
    Params::LEVEL_NAMES
        .iter()
        .zip(Params::LEVEL_SPEED_SCALE)
        .map(|(name, scale)| {
            Level::load(
                name,
                player1_serve,
                player2_serve,
                Params::BALL_RADIUS,
                Params::INITIAL_BALL_VELOCITY * scale,
            )
        })
        .collect()
}

/// Step a level index forward or backward, wrapping around `count`
pub fn cycle_level(index: usize, count: usize, forward: bool) -> usize {
    if forward {
        (index + 1) % count
    } else {
        (index + count - 1) % count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_balls_serve_toward_opponent() {
        let level = Level::load(
            "Test",
            Vec2::new(700.0, 300.0),
            Vec2::new(45.0, 300.0),
            13.0,
            Vec2::new(100.0, -100.0),
        );
        assert!(level.ball1.body.velocity.x < 0.0, "Ball 1 heads left");
        assert!(level.ball2.body.velocity.x > 0.0, "Ball 2 heads right");
        assert_eq!(level.ball1.body.velocity.y, -100.0);
        assert!(level.ball1.stuck && level.ball2.stuck);
        assert_eq!(level.ball(Side::Right).body.position, Vec2::new(700.0, 300.0));
        assert_eq!(level.ball(Side::Left).body.position, Vec2::new(45.0, 300.0));
    }

    #[test]
    fn test_build_levels_scales_speed() {
        let levels = build_levels(Vec2::ZERO, Vec2::ZERO);
        assert_eq!(levels.len(), 4);
        assert_eq!(levels[0].name, "Amateur");
        assert_eq!(levels[3].name, "World Class");
        for pair in levels.windows(2) {
            assert!(
                pair[1].base_velocity().length() > pair[0].base_velocity().length(),
                "Each tier should be faster than the last"
            );
        }
    }

    #[test]
    fn test_cycle_level_wraps_both_ways() {
        assert_eq!(cycle_level(3, 4, true), 0);
        assert_eq!(cycle_level(0, 4, false), 3);
        assert_eq!(cycle_level(1, 4, true), 2);
        assert_eq!(cycle_level(2, 4, false), 1);
    }
}
