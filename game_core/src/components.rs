use glam::{Vec2, Vec3};

use crate::params::Params;
use crate::render::SpriteRenderer;

/// Which half of the court a paddle or serve belongs to
///
/// Player 1 plays the right paddle, player 2 the left one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Player number shown in the HUD
    pub fn player_number(self) -> u8 {
        match self {
            Side::Right => 1,
            Side::Left => 2,
        }
    }
}

/// Anything that has a sprite quad and can move: paddles and balls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Movable {
    pub position: Vec2, // top-left corner, y grows downward
    pub size: Vec2,
    pub velocity: Vec2,
    pub rotation: f32,
    pub color: Vec3,
    pub score: u32,
}

impl Movable {
    pub fn new(position: Vec2, size: Vec2, velocity: Vec2) -> Self {
        debug_assert!(size.x > 0.0 && size.y > 0.0, "size must be positive");
        Self {
            position,
            size,
            velocity,
            rotation: 0.0,
            color: Vec3::ONE,
            score: 0,
        }
    }

    pub fn half_extents(&self) -> Vec2 {
        self.size / 2.0
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.half_extents()
    }

    pub fn draw(&self, renderer: &mut impl SpriteRenderer, texture: &str) {
        renderer.draw_sprite(texture, self.position, self.size, self.rotation, self.color);
    }
}

/// The pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub body: Movable,
    pub radius: f32,
    pub stuck: bool, // held against the serving paddle
}

impl Ball {
    pub fn new(position: Vec2, radius: f32, velocity: Vec2) -> Self {
        Self {
            body: Movable::new(position, Vec2::splat(radius * 2.0), velocity),
            radius,
            stuck: true,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.body.position + Vec2::splat(self.radius)
    }

    /// Integrate velocity and bounce off the top and bottom walls.
    /// Returns true when a wall was hit.
    ///
    /// The left and right edges are left open: crossing them is a point,
    /// which the controller detects.
    pub fn move_ball(&mut self, dt: f32, screen_height: f32) -> bool {
        if self.stuck {
            return false;
        }

        let body = &mut self.body;
        body.position += body.velocity * dt;

        let max_y = screen_height - body.size.y;
        if body.position.y <= 0.0 {
            body.velocity.y = body.velocity.y.abs();
            body.position.y = 0.0;
            true
        } else if body.position.y >= max_y {
            body.velocity.y = -body.velocity.y.abs();
            body.position.y = max_y;
            true
        } else {
            false
        }
    }

    /// Hold the ball at a serve position with a fresh velocity
    pub fn reset(&mut self, position: Vec2, velocity: Vec2) {
        self.body.position = position;
        self.body.velocity = velocity;
        self.stuck = true;
    }

    /// Where a ball waits while stuck to the paddle on `side`
    pub fn serve_position(paddle: &Movable, side: Side, radius: f32) -> Vec2 {
        let y = paddle.position.y + paddle.size.y / 2.0 - radius;
        match side {
            Side::Left => Vec2::new(paddle.position.x + paddle.size.x, y),
            Side::Right => Vec2::new(paddle.position.x - radius * 2.0, y),
        }
    }

    pub fn draw(&self, renderer: &mut impl SpriteRenderer) {
        self.body.draw(renderer, crate::params::textures::BALL);
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new(Vec2::ZERO, Params::BALL_RADIUS, Params::INITIAL_BALL_VELOCITY)
    }
}
