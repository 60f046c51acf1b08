use crate::input::KeyBindings;
use crate::params::Params;
use crate::Side;
use glam::Vec2;

/// Game configuration
///
/// Physics (ball radius, velocities, paddle size) is fixed in [`Params`];
/// only the screen and cosmetic settings can vary per host.
#[derive(Debug, Clone)]
pub struct Config {
    pub width: f32,
    pub height: f32,
    pub particle_amount: usize,
    pub particle_spawn_per_frame: usize,
    pub bindings: KeyBindings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Params::SCREEN_WIDTH,
            height: Params::SCREEN_HEIGHT,
            particle_amount: Params::PARTICLE_AMOUNT,
            particle_spawn_per_frame: Params::PARTICLE_SPAWN_PER_FRAME,
            bindings: KeyBindings::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_screen(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Top-left corner of a paddle at the start of a match
    pub fn paddle_start(&self, side: Side) -> Vec2 {
        let y = self.height / 2.0 - Params::PLAYER_SIZE.y / 2.0;
        match side {
            Side::Left => Vec2::new(Params::PADDLE_MARGIN, y),
            Side::Right => Vec2::new(
                self.width - Params::PADDLE_MARGIN - Params::PLAYER_SIZE.x,
                y,
            ),
        }
    }

    /// Lowest top-edge a paddle may reach
    pub fn paddle_max_y(&self) -> f32 {
        self.height - Params::PLAYER_SIZE.y
    }

    /// Clamp a paddle's top edge to the screen
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(Params::PADDLE_MIN_Y, self.paddle_max_y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_start() {
        let config = Config::new();
        let left = config.paddle_start(Side::Left);
        let right = config.paddle_start(Side::Right);
        assert_eq!(left.x, 20.0, "Left paddle X position");
        assert_eq!(right.x, 755.0, "Right paddle X position");
        assert_eq!(left.y, right.y);
        assert_eq!(left.y + Params::PLAYER_SIZE.y / 2.0, config.height / 2.0);
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_y(-50.0), 0.0);
        assert_eq!(config.clamp_paddle_y(10_000.0), config.paddle_max_y());
        assert_eq!(config.clamp_paddle_y(200.0), 200.0);
    }
}
