use crate::Side;

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub scored: Option<Side>, // side that won the point
    pub ball_hit_paddle: Option<Side>,
    pub ball_hit_wall: bool,
    pub served: bool,
    pub game_won: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
