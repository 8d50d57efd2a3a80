// SPDX-License-Identifier: MPL-2.0
//! Confetti particle field.
//!
//! Pure simulation state: bursts spawn particles, ticks integrate them, and
//! the canvas overlay reads them for drawing. Positions live in unit space
//! (0..1 of the window) so the field is independent of window size.

use iced::{Color, Vector};
use rand::Rng;

/// Downward acceleration in unit-heights per second squared.
const GRAVITY: f32 = 1.6;
/// Velocity retained per second (air drag).
const DRAG: f32 = 0.55;
/// Initial speed range in unit-heights per second.
const MIN_SPEED: f32 = 0.45;
const MAX_SPEED: f32 = 1.15;
const MIN_LIFETIME: f32 = 1.2;
const MAX_LIFETIME: f32 = 2.2;
const MIN_SIZE: f32 = 5.0;
const MAX_SIZE: f32 = 10.0;

/// Parameters of one particle burst.
#[derive(Debug, Clone)]
pub struct BurstConfig {
    pub count: usize,
    /// Full spread angle in degrees, centered on straight up.
    pub spread: f32,
    /// Origin in unit window coordinates.
    pub origin: (f32, f32),
    pub colors: Vec<Color>,
}

/// One piece of confetti.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    /// Position in unit window coordinates.
    pub position: (f32, f32),
    velocity: Vector,
    pub color: Color,
    /// Edge length in logical pixels.
    pub size: f32,
    /// Spin rate in radians per second.
    pub spin: f32,
    pub age: f32,
    pub lifetime: f32,
}

impl Particle {
    /// 0.0 at spawn, 1.0 at expiry. The overlay uses this to fade out.
    #[must_use]
    pub fn progress(&self) -> f32 {
        (self.age / self.lifetime).clamp(0.0, 1.0)
    }

    /// Accumulated rotation in radians.
    #[must_use]
    pub fn rotation(&self) -> f32 {
        self.spin * self.age
    }
}

/// All live particles across bursts.
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Spawns `config.count` particles fanned across the spread angle.
    pub fn burst(&mut self, config: &BurstConfig) {
        if config.colors.is_empty() || config.count == 0 {
            return;
        }
        let mut rng = rand::thread_rng();
        let half_spread = (config.spread.to_radians() / 2.0).max(0.01);

        self.particles.reserve(config.count);
        for _ in 0..config.count {
            // Straight up is -PI/2 in screen coordinates.
            let angle = -std::f32::consts::FRAC_PI_2 + rng.gen_range(-half_spread..half_spread);
            let speed = rng.gen_range(MIN_SPEED..MAX_SPEED);
            let color = config.colors[rng.gen_range(0..config.colors.len())];

            self.particles.push(Particle {
                position: config.origin,
                velocity: Vector::new(angle.cos() * speed, angle.sin() * speed),
                color,
                size: rng.gen_range(MIN_SIZE..MAX_SIZE),
                spin: rng.gen_range(-8.0..8.0),
                age: 0.0,
                lifetime: rng.gen_range(MIN_LIFETIME..MAX_LIFETIME),
            });
        }
    }

    /// Integrates all particles by `dt` seconds and drops expired ones.
    pub fn step(&mut self, dt: f32) {
        for p in &mut self.particles {
            p.velocity.y += GRAVITY * dt;
            let damping = DRAG.powf(dt);
            p.velocity.x *= damping;
            p.velocity.y *= damping;
            p.position.0 += p.velocity.x * dt;
            p.position.1 += p.velocity.y * dt;
            p.age += dt;
        }
        self.particles
            .retain(|p| p.age < p.lifetime && p.position.1 < 1.3);
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Color;

    fn config(count: usize) -> BurstConfig {
        BurstConfig {
            count,
            spread: 100.0,
            origin: (0.5, 0.5),
            colors: vec![Color::WHITE, Color::BLACK],
        }
    }

    #[test]
    fn burst_spawns_requested_count() {
        let mut field = ParticleField::default();
        field.burst(&config(150));
        assert_eq!(field.len(), 150);
        assert!(field.is_active());
    }

    #[test]
    fn burst_with_no_colors_spawns_nothing() {
        let mut field = ParticleField::default();
        field.burst(&BurstConfig {
            count: 10,
            spread: 70.0,
            origin: (0.5, 0.5),
            colors: vec![],
        });
        assert!(!field.is_active());
    }

    #[test]
    fn particles_expire() {
        let mut field = ParticleField::default();
        field.burst(&config(20));
        for _ in 0..400 {
            field.step(0.016);
        }
        assert!(!field.is_active());
    }

    #[test]
    fn step_moves_particles() {
        let mut field = ParticleField::default();
        field.burst(&config(5));
        field.step(0.1);
        assert!(field.iter().all(|p| p.position != (0.5, 0.5)));
    }

    #[test]
    fn progress_is_clamped() {
        let mut field = ParticleField::default();
        field.burst(&config(1));
        field.step(0.5);
        let p = field.iter().next().unwrap();
        assert!(p.progress() > 0.0 && p.progress() <= 1.0);
    }
}
