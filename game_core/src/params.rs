use glam::{Vec2, Vec3};

/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PLAYER_SIZE: Vec2 = Vec2::new(25.0, 105.0);
    pub const PLAYER_VELOCITY: f32 = 500.0; // pixels per second
    pub const PADDLE_MARGIN: f32 = 20.0; // gap between screen edge and paddle
    pub const PADDLE_MIN_Y: f32 = 0.0;

    // Ball
    pub const BALL_RADIUS: f32 = 13.0;
    pub const INITIAL_BALL_VELOCITY: Vec2 = Vec2::new(100.0, -100.0);
    pub const BOUNCE_STRENGTH: f32 = 2.0; // how far paddle contact steers the rebound

    // Levels: Amateur, Pro, Expert, World Class
    pub const LEVEL_NAMES: [&'static str; 4] = ["Amateur", "Pro", "Expert", "World Class"];
    pub const LEVEL_SPEED_SCALE: [f32; 4] = [2.0, 3.0, 4.0, 5.0];

    // Score
    pub const WIN_SCORE: u32 = 11; // First to 11 wins

    // Particles
    pub const PARTICLE_AMOUNT: usize = 500;
    pub const PARTICLE_SPAWN_PER_FRAME: usize = 2;
    pub const PARTICLE_SIZE: f32 = 10.0;
    pub const PARTICLE_LIFE: f32 = 1.0;
    pub const PARTICLE_FADE_RATE: f32 = 2.5;

    // Physics
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps

    // Colors
    pub const WHITE: Vec3 = Vec3::ONE;
    pub const HUD_COLOR: Vec3 = Vec3::new(1.0, 1.0, 1.0);
    pub const BANNER_COLOR: Vec3 = Vec3::new(0.0, 1.0, 0.0);
}

/// Texture keys resolved by the host's resource manager
pub mod textures {
    pub const BACKGROUND: &str = "background";
    pub const BALL: &str = "ball";
    pub const PADDLE1: &str = "paddle1";
    pub const PADDLE2: &str = "paddle2";
    pub const PARTICLE: &str = "particle";

    pub const ALL: [&str; 5] = [BACKGROUND, BALL, PADDLE1, PADDLE2, PARTICLE];
}
