use glam::{Vec2, Vec4};
use hecs::World;
use rand::Rng;

use crate::components::Ball;
use crate::params::{textures, Params};
use crate::render::SpriteRenderer;
use crate::resources::GameRng;

/// A single trail particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub color: Vec4,
    pub life: f32, // seconds left
}

impl Particle {
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

/// Cosmetic trail that follows the ball. Nothing here feeds back into play.
pub struct ParticleSystem {
    world: World,
    amount: usize,
    rng: GameRng,
}

impl ParticleSystem {
    pub fn new(amount: usize, rng: GameRng) -> Self {
        Self {
            world: World::new(),
            amount,
            rng,
        }
    }

    /// Spawn `new_particles` at the ball, then age and cull the whole trail
    pub fn update(&mut self, dt: f32, ball: &Ball, new_particles: usize, offset: Vec2) {
        for _ in 0..new_particles {
            if self.len() >= self.amount {
                break;
            }
            let particle = self.respawn(ball, offset);
            self.world.spawn((particle,));
        }

        for (_entity, particle) in self.world.query_mut::<&mut Particle>() {
            particle.life -= dt;
            if particle.is_alive() {
                particle.position -= particle.velocity * dt;
                particle.color.w -= dt * Params::PARTICLE_FADE_RATE;
            }
        }

        self.gc();
    }

    fn respawn(&mut self, ball: &Ball, offset: Vec2) -> Particle {
        let jitter = Vec2::new(
            self.rng.0.gen_range(-5.0..5.0),
            self.rng.0.gen_range(-5.0..5.0),
        );
        let brightness = self.rng.0.gen_range(0.5..1.5);
        Particle {
            position: ball.body.position + jitter + offset,
            velocity: ball.body.velocity * 0.1,
            color: Vec4::new(brightness, brightness, brightness, 1.0),
            life: Params::PARTICLE_LIFE,
        }
    }

    /// Despawn expired particles
    fn gc(&mut self) {
        let expired: Vec<hecs::Entity> = self
            .world
            .query::<&Particle>()
            .iter()
            .filter(|(_e, p)| !p.is_alive())
            .map(|(e, _p)| e)
            .collect();

        for entity in expired {
            let _ = self.world.despawn(entity);
        }
    }

    pub fn draw(&self, renderer: &mut impl SpriteRenderer) {
        let size = Vec2::splat(Params::PARTICLE_SIZE);
        for (_entity, particle) in self.world.query::<&Particle>().iter() {
            renderer.draw_sprite_rgba(textures::PARTICLE, particle.position, size, particle.color);
        }
    }

    pub fn len(&self) -> usize {
        self.world.len() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.world.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DrawList;

    fn moving_ball() -> Ball {
        let mut ball = Ball::new(Vec2::new(100.0, 100.0), 13.0, Vec2::new(200.0, 0.0));
        ball.stuck = false;
        ball
    }

    #[test]
    fn test_spawns_particles_near_ball() {
        let mut particles = ParticleSystem::new(100, GameRng::new(1));
        let ball = moving_ball();
        particles.update(0.01, &ball, 2, Vec2::splat(6.5));

        assert_eq!(particles.len(), 2);
        for (_e, p) in particles.world.query::<&Particle>().iter() {
            let from_ball = p.position - ball.body.position;
            assert!(from_ball.x.abs() < 13.0 && from_ball.y.abs() < 13.0);
            assert!(p.color.w < 1.0, "Fresh particles already start fading");
        }
    }

    #[test]
    fn test_respects_amount_cap() {
        let mut particles = ParticleSystem::new(5, GameRng::new(1));
        let ball = moving_ball();
        for _ in 0..10 {
            particles.update(0.01, &ball, 2, Vec2::ZERO);
        }
        assert_eq!(particles.len(), 5);
    }

    #[test]
    fn test_particles_expire() {
        let mut particles = ParticleSystem::new(100, GameRng::new(1));
        let ball = moving_ball();
        particles.update(0.1, &ball, 3, Vec2::ZERO);
        assert_eq!(particles.len(), 3);

        particles.update(Params::PARTICLE_LIFE, &ball, 0, Vec2::ZERO);
        assert!(particles.is_empty(), "All particles should have died");
    }

    #[test]
    fn test_draw_emits_one_sprite_per_particle() {
        let mut particles = ParticleSystem::new(100, GameRng::new(1));
        particles.update(0.01, &moving_ball(), 4, Vec2::ZERO);

        let mut list = DrawList::new();
        particles.draw(&mut list);
        assert_eq!(list.sprites(textures::PARTICLE).count(), 4);
    }
}
