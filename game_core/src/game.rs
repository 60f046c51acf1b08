use glam::Vec2;
use log::{debug, info};

use crate::collision::{check_collision, Collision, Direction};
use crate::components::{Ball, Movable, Side};
use crate::config::Config;
use crate::input::{Action, InputTracker, Keys};
use crate::level::{build_levels, cycle_level, Level};
use crate::params::{textures, Params};
use crate::particles::ParticleSystem;
use crate::render::{SpriteRenderer, TextRenderer};
use crate::resources::{Events, GameRng};

/// Where the match is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Active,
    Win,
}

/// Which ball is in play: resolved through the level table on every access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BallRef {
    pub level: usize,
    pub side: Side,
}

/// Owns every entity and drives one frame at a time
pub struct Game {
    config: Config,
    state: GameState,
    levels: Vec<Level>,
    level: usize,
    active_ball: BallRef,
    serving: Side,
    player1: Movable, // right paddle
    player2: Movable, // left paddle
    winner: Option<Side>,
    input: InputTracker,
    particles: ParticleSystem,
    events: Events,
}

impl Game {
    pub fn new(config: Config, seed: u64) -> Self {
        let player1 = Movable::new(config.paddle_start(Side::Right), Params::PLAYER_SIZE, Vec2::ZERO);
        let player2 = Movable::new(config.paddle_start(Side::Left), Params::PLAYER_SIZE, Vec2::ZERO);

        let levels = build_levels(
            Ball::serve_position(&player1, Side::Right, Params::BALL_RADIUS),
            Ball::serve_position(&player2, Side::Left, Params::BALL_RADIUS),
        );

        let input = InputTracker::new(config.bindings.clone());
        let particles = ParticleSystem::new(config.particle_amount, GameRng::new(seed));

        Self {
            config,
            state: GameState::Menu,
            levels,
            level: 0,
            active_ball: BallRef {
                level: 0,
                side: Side::Right,
            },
            serving: Side::Right,
            player1,
            player2,
            winner: None,
            input,
            particles,
            events: Events::new(),
        }
    }

    /// One full frame: input, simulation, then draw calls
    pub fn tick<R>(&mut self, dt: f32, keys: &Keys, renderer: &mut R)
    where
        R: SpriteRenderer + TextRenderer,
    {
        // Clamp dt to prevent large jumps
        let dt = dt.clamp(0.0, Params::MAX_DT);
        self.process_input(dt, keys);
        self.update(dt);
        self.render(renderer);
    }

    /// Sample the keyboard and apply this frame's actions. Starts a new frame
    /// of events.
    pub fn process_input(&mut self, dt: f32, keys: &Keys) {
        self.events.clear();
        self.input.sample(keys);

        match self.state {
            GameState::Menu => {
                if self.input.just_pressed(Action::Confirm) {
                    self.set_state(GameState::Active);
                }
                if self.input.just_pressed(Action::SelectPlayer1) {
                    self.select_server(Side::Right);
                }
                if self.input.just_pressed(Action::SelectPlayer2) {
                    self.select_server(Side::Left);
                }
                if self.input.just_pressed(Action::LevelUp) {
                    self.change_level(true);
                }
                if self.input.just_pressed(Action::LevelDown) {
                    self.change_level(false);
                }
            }
            GameState::Active => {
                let velocity = Params::PLAYER_VELOCITY * dt;
                if self.input.is_down(Action::Player1Up) {
                    self.move_paddle(Side::Right, -velocity);
                }
                if self.input.is_down(Action::Player1Down) {
                    self.move_paddle(Side::Right, velocity);
                }
                if self.input.is_down(Action::Player2Up) {
                    self.move_paddle(Side::Left, -velocity);
                }
                if self.input.is_down(Action::Player2Down) {
                    self.move_paddle(Side::Left, velocity);
                }
                if self.input.just_pressed(Action::Serve) && self.ball().stuck {
                    self.ball_mut().stuck = false;
                    self.events.served = true;
                    debug!("Player {} served", self.serving.player_number());
                }
            }
            GameState::Win => {
                if self.input.just_pressed(Action::Confirm) {
                    self.reset_game();
                }
            }
        }
    }

    /// Advance the simulation by `dt`. Only the active state moves anything.
    pub fn update(&mut self, dt: f32) {
        if self.state != GameState::Active {
            return;
        }

        let height = self.config.height;
        if self.ball_mut().move_ball(dt, height) {
            self.events.ball_hit_wall = true;
        }

        self.do_collisions();

        let ball = *self.ball();
        let offset = Vec2::splat(ball.radius / 2.0);
        self.particles
            .update(dt, &ball, self.config.particle_spawn_per_frame, offset);

        self.check_scoring();
        self.check_win();
    }

    /// Bounce the ball off either paddle it overlaps
    pub fn do_collisions(&mut self) {
        let base_velocity = self.current_level().base_velocity();
        for side in [Side::Right, Side::Left] {
            let paddle = *self.paddle(side);
            let ball = self.ball_mut();
            if ball.stuck {
                return;
            }
            if let Collision::Hit {
                direction,
                penetration,
            } = check_collision(ball, &paddle)
            {
                if resolve_paddle_hit(ball, &paddle, side, base_velocity, direction, penetration) {
                    self.events.ball_hit_paddle = Some(side);
                }
            }
        }
    }

    /// Award a point when the ball leaves through the left or right edge
    fn check_scoring(&mut self) {
        let x = self.ball().body.position.x;
        if x >= self.config.width {
            self.award_point(Side::Left);
            self.reset_player1();
        } else if x <= 0.0 {
            self.award_point(Side::Right);
            self.reset_player2();
        }
    }

    fn award_point(&mut self, side: Side) {
        let paddle = self.paddle_mut(side);
        paddle.score = (paddle.score + 1).min(Params::WIN_SCORE);
        self.events.scored = Some(side);
        info!(
            "Player {} scored ({} - {})",
            side.player_number(),
            self.player1.score,
            self.player2.score
        );
    }

    /// Enter the win state once a player reaches the winning score.
    /// Player 1 is checked first, so a tie at the limit goes to player 1.
    pub fn check_win(&mut self) {
        if self.state == GameState::Win {
            return;
        }
        let winner = if self.player1.score >= Params::WIN_SCORE {
            Some(Side::Right)
        } else if self.player2.score >= Params::WIN_SCORE {
            Some(Side::Left)
        } else {
            None
        };

        if let Some(side) = winner {
            self.winner = Some(side);
            self.events.game_won = Some(side);
            info!("Player {} won the match", side.player_number());
            self.set_state(GameState::Win);
        }
    }

    /// Re-serve from player 1 (right paddle)
    pub fn reset_player1(&mut self) {
        self.serve_from(Side::Right);
    }

    /// Re-serve from player 2 (left paddle)
    pub fn reset_player2(&mut self) {
        self.serve_from(Side::Left);
    }

    /// Start a new match: scores cleared, paddles home, player 1 serves
    pub fn reset_game(&mut self) {
        for side in [Side::Left, Side::Right] {
            let start = self.config.paddle_start(side);
            let paddle = self.paddle_mut(side);
            paddle.position = start;
            paddle.score = 0;
        }
        self.winner = None;
        self.particles.clear();
        self.reset_player1();
        self.set_state(GameState::Menu);
    }

    fn serve_from(&mut self, side: Side) {
        self.serving = side;
        self.active_ball = BallRef {
            level: self.level,
            side,
        };
        let position = Ball::serve_position(self.paddle(side), side, Params::BALL_RADIUS);
        let velocity = self.current_level().serve_velocity(side);
        self.ball_mut().reset(position, velocity);
    }

    fn select_server(&mut self, side: Side) {
        if self.serving != side {
            info!("Player {} will serve", side.player_number());
        }
        self.serve_from(side);
    }

    fn change_level(&mut self, forward: bool) {
        self.level = cycle_level(self.level, self.levels.len(), forward);
        info!("Level {} ({})", self.level, self.current_level().name);
        self.reset_player1();
    }

    /// Move a paddle vertically, dragging a stuck ball along on the serving side
    fn move_paddle(&mut self, side: Side, dy: f32) {
        let max_y = self.config.paddle_max_y();
        let paddle = self.paddle_mut(side);
        let old_y = paddle.position.y;
        paddle.position.y = (old_y + dy).clamp(Params::PADDLE_MIN_Y, max_y);
        let applied = paddle.position.y - old_y;

        if self.serving == side {
            let ball = self.ball_mut();
            if ball.stuck {
                ball.body.position.y += applied;
            }
        }
    }

    fn set_state(&mut self, state: GameState) {
        if self.state != state {
            info!("Game state: {:?} -> {:?}", self.state, state);
            self.state = state;
        }
    }

    /// Issue every draw call for the current frame
    pub fn render<R>(&self, renderer: &mut R)
    where
        R: SpriteRenderer + TextRenderer,
    {
        let (width, height) = (self.config.width, self.config.height);
        renderer.draw_sprite(
            textures::BACKGROUND,
            Vec2::ZERO,
            Vec2::new(width, height),
            0.0,
            Params::WHITE,
        );

        if self.state == GameState::Active {
            self.particles.draw(renderer);
        }
        self.ball().draw(renderer);
        self.player1.draw(renderer, textures::PADDLE1);
        self.player2.draw(renderer, textures::PADDLE2);

        let hud = Params::HUD_COLOR;
        renderer.render_text(&format!("Player 2: {}", self.score(Side::Left)), 5.0, 5.0, 1.0, hud);
        renderer.render_text(
            &format!("Player 1: {}", self.score(Side::Right)),
            width - 150.0,
            5.0,
            1.0,
            hud,
        );
        renderer.render_text(
            &format!("Level: {}", self.current_level().name),
            width / 2.0 - 80.0,
            5.0,
            1.0,
            hud,
        );

        match self.state {
            GameState::Menu => {
                renderer.render_text("Press ENTER to start", width / 2.0 - 125.0, height / 2.0, 1.0, hud);
                renderer.render_text(
                    "Press UP or DOWN to select level",
                    width / 2.0 - 160.0,
                    height / 2.0 + 25.0,
                    0.75,
                    hud,
                );
                renderer.render_text(
                    "Press LEFT or RIGHT to choose who serves",
                    width / 2.0 - 200.0,
                    height / 2.0 + 50.0,
                    0.75,
                    hud,
                );
            }
            GameState::Active => {
                if self.ball().stuck {
                    renderer.render_text(
                        &format!("Player {}: press SPACE to serve", self.serving.player_number()),
                        width / 2.0 - 170.0,
                        height - 40.0,
                        0.75,
                        hud,
                    );
                }
            }
            GameState::Win => {
                let number = self.winner.map(Side::player_number).unwrap_or(1);
                renderer.render_text(
                    &format!("Player {} WON!!!", number),
                    width / 2.0 - 100.0,
                    height / 2.0 - 20.0,
                    1.0,
                    Params::BANNER_COLOR,
                );
                renderer.render_text(
                    "Press ENTER to play again",
                    width / 2.0 - 150.0,
                    height / 2.0 + 20.0,
                    1.0,
                    hud,
                );
            }
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn level_index(&self) -> usize {
        self.level
    }

    pub fn current_level(&self) -> &Level {
        &self.levels[self.level]
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn active_ball(&self) -> BallRef {
        self.active_ball
    }

    pub fn serving(&self) -> Side {
        self.serving
    }

    pub fn ball(&self) -> &Ball {
        self.levels[self.active_ball.level].ball(self.active_ball.side)
    }

    pub fn ball_mut(&mut self) -> &mut Ball {
        self.levels[self.active_ball.level].ball_mut(self.active_ball.side)
    }

    pub fn paddle(&self, side: Side) -> &Movable {
        match side {
            Side::Right => &self.player1,
            Side::Left => &self.player2,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Movable {
        match side {
            Side::Right => &mut self.player1,
            Side::Left => &mut self.player2,
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        self.paddle(side).score
    }

    pub fn player1_score(&self) -> u32 {
        self.player1.score
    }

    pub fn player2_score(&self) -> u32 {
        self.player2.score
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn did_player1_win(&self) -> bool {
        self.winner == Some(Side::Right)
    }

    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Config::default(), 12345)
    }
}

/// Reflect the ball off a paddle, steering by where it struck.
///
/// The vertical component comes from the contact offset against the paddle
/// center (-1 at the top edge, 1 at the bottom) and the level's base speed;
/// the result is rescaled so the ball keeps its speed. Returns false and
/// leaves the ball untouched if it is not travelling toward the paddle or
/// has no speed to keep.
pub fn resolve_paddle_hit(
    ball: &mut Ball,
    paddle: &Movable,
    side: Side,
    base_velocity: Vec2,
    direction: Direction,
    penetration: Vec2,
) -> bool {
    let old_velocity = ball.body.velocity;
    let speed = old_velocity.length();
    if speed <= f32::EPSILON {
        return false;
    }

    let approaching = match side {
        Side::Left => old_velocity.x < 0.0,
        Side::Right => old_velocity.x > 0.0,
    };
    if !approaching {
        return false;
    }

    let distance = (ball.body.position.y + ball.radius) - paddle.center().y;
    let percentage = distance / paddle.half_extents().y;

    let steered = Vec2::new(
        -old_velocity.x,
        base_velocity.y * percentage * Params::BOUNCE_STRENGTH,
    );
    ball.body.velocity = match steered.try_normalize() {
        Some(dir) => dir * speed,
        None => Vec2::new(-old_velocity.x, old_velocity.y),
    };

    // Move the ball back out to the face it struck
    match direction {
        Direction::Left => ball.body.position.x += ball.radius - penetration.x.abs(),
        Direction::Right => ball.body.position.x -= ball.radius - penetration.x.abs(),
        Direction::Up => ball.body.position.y -= ball.radius - penetration.y.abs(),
        Direction::Down => ball.body.position.y += ball.radius - penetration.y.abs(),
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn left_paddle() -> Movable {
        Movable::new(Vec2::new(20.0, 200.0), Params::PLAYER_SIZE, Vec2::ZERO)
    }

    fn ball_at(center: Vec2, velocity: Vec2) -> Ball {
        let mut ball = Ball::new(center - Vec2::splat(Params::BALL_RADIUS), Params::BALL_RADIUS, velocity);
        ball.stuck = false;
        ball
    }

    fn hit(ball: &mut Ball, paddle: &Movable, side: Side) -> bool {
        match check_collision(ball, paddle) {
            Collision::Hit {
                direction,
                penetration,
            } => resolve_paddle_hit(
                ball,
                paddle,
                side,
                Params::INITIAL_BALL_VELOCITY,
                direction,
                penetration,
            ),
            Collision::None => false,
        }
    }

    #[test]
    fn test_paddle_hit_reverses_and_keeps_speed() {
        let paddle = left_paddle();
        for contact_y in [205.0, 230.0, 252.5, 280.0, 300.0] {
            let mut ball = ball_at(Vec2::new(50.0, contact_y), Vec2::new(-300.0, 120.0));
            let before = ball.body.velocity.length();
            assert!(hit(&mut ball, &paddle, Side::Left), "contact at {}", contact_y);
            assert!(ball.body.velocity.x > 0.0, "Ball should head right");
            let after = ball.body.velocity.length();
            assert!(
                (after - before).abs() < 1e-3,
                "Speed should be kept: {} vs {}",
                before,
                after
            );
        }
    }

    #[test]
    fn test_contact_offset_steers_rebound() {
        let paddle = left_paddle();

        // Base velocity points up (y < 0), so the rebound's vertical sign is
        // the opposite of the contact offset's sign
        let mut top = ball_at(Vec2::new(50.0, 210.0), Vec2::new(-300.0, 0.0));
        assert!(hit(&mut top, &paddle, Side::Left));
        assert!(top.body.velocity.y > 0.0, "Top contact should send the ball down");

        let mut bottom = ball_at(Vec2::new(50.0, 295.0), Vec2::new(-300.0, 0.0));
        assert!(hit(&mut bottom, &paddle, Side::Left));
        assert!(bottom.body.velocity.y < 0.0, "Bottom contact should send the ball up");

        // Contact 11 below center, with the unit test base velocity (100, -100)
        let mut below = ball_at(Vec2::new(50.0, 263.5), Vec2::new(-300.0, 0.0));
        let percentage = (below.body.position.y + below.radius - paddle.center().y) / paddle.half_extents().y;
        let expected = Vec2::new(300.0, -100.0 * percentage * Params::BOUNCE_STRENGTH).normalize() * 300.0;
        assert!(hit(&mut below, &paddle, Side::Left));
        assert!(
            (below.body.velocity - expected).length() < 1e-2,
            "Expected {:?}, got {:?}",
            expected,
            below.body.velocity
        );

        let mut middle = ball_at(Vec2::new(50.0, 252.5), Vec2::new(-300.0, 0.0));
        assert!(hit(&mut middle, &paddle, Side::Left));
        assert!(middle.body.velocity.y.abs() < 1e-3, "Center contact goes straight");
    }

    #[test]
    fn test_ball_pushed_back_to_face() {
        let paddle = left_paddle();
        let mut ball = ball_at(Vec2::new(50.0, 252.5), Vec2::new(-300.0, 0.0));
        assert!(hit(&mut ball, &paddle, Side::Left));
        let face = paddle.position.x + paddle.size.x;
        assert!((ball.center().x - (face + ball.radius)).abs() < 1e-3);
        assert!(!check_collision(&ball, &paddle).is_hit(), "Ball should rest outside the paddle");
    }

    #[test]
    fn test_receding_ball_not_reflected() {
        let paddle = left_paddle();
        let mut ball = ball_at(Vec2::new(50.0, 252.5), Vec2::new(300.0, 0.0));
        assert!(!hit(&mut ball, &paddle, Side::Left));
        assert_eq!(ball.body.velocity, Vec2::new(300.0, 0.0));
    }

    #[test]
    fn test_zero_velocity_is_left_alone() {
        let paddle = left_paddle();
        let mut ball = ball_at(Vec2::new(50.0, 252.5), Vec2::ZERO);
        assert!(!hit(&mut ball, &paddle, Side::Left));
        assert_eq!(ball.body.velocity, Vec2::ZERO);
        assert!(!ball.body.velocity.x.is_nan());
    }

    #[test]
    fn test_new_game_starts_in_menu() {
        let game = Game::default();
        assert_eq!(game.state(), GameState::Menu);
        assert_eq!(game.level_index(), 0);
        assert_eq!(game.serving(), Side::Right);
        assert_eq!(
            game.active_ball(),
            BallRef {
                level: 0,
                side: Side::Right
            }
        );
        assert!(game.ball().stuck);
        assert_eq!((game.player1_score(), game.player2_score()), (0, 0));
    }

    #[test]
    fn test_ball_ref_follows_level() {
        let mut game = Game::default();
        game.change_level(true);
        game.change_level(true);
        assert_eq!(game.active_ball().level, 2);
        assert_eq!(game.ball(), &game.levels()[2].ball1);
    }
}
