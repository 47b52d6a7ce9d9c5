/*
 * Particle Module
 *
 * This module defines the Particle struct and its per-frame behaviour.
 * Each particle:
 * 1. Moves by its velocity every frame
 * 2. Re-seeds to a random in-bounds location when it leaves the viewport
 * 3. Is pushed out to the repulsion radius when the pointer comes too close
 */

use nannou::prelude::*;
use rand::Rng;

use crate::canvas::Canvas;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub color: Rgb,
    pub radius: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, color: Rgb) -> Self {
        Self {
            position,
            velocity,
            color,
            radius,
        }
    }

    // Create a particle at a random position inside the viewport
    pub fn random<R: Rng>(viewport: Vec2, radius: f32, color: Rgb, rng: &mut R) -> Self {
        let velocity = vec2(signed_unit(rng), signed_unit(rng));
        Self::new(random_position(viewport, rng), velocity, radius, color)
    }

    // Move the particle by its velocity
    pub fn integrate(&mut self) {
        self.position += self.velocity;
    }

    pub fn is_out_of_bounds(&self, viewport: Vec2) -> bool {
        let p = self.position;
        p.x < 0.0 || p.y < 0.0 || p.x > viewport.x || p.y > viewport.y
    }

    // Jump to a new random position and re-roll the sign of each velocity component
    pub fn reseed<R: Rng>(&mut self, viewport: Vec2, rng: &mut R) {
        self.position = random_position(viewport, rng);

        if rng.gen_bool(0.5) {
            self.velocity.x = -self.velocity.x;
        }
        if rng.gen_bool(0.5) {
            self.velocity.y = -self.velocity.y;
        }
    }

    // Hard clamp to `radius` away from `pointer` when closer than that.
    // Returns whether the particle was moved.
    pub fn repel_from(&mut self, pointer: Vec2, radius: f32) -> bool {
        let offset = self.position - pointer;
        let distance = offset.length();

        if distance >= radius {
            return false;
        }

        // A particle sitting exactly on the pointer has no direction, push it right
        let direction = if distance > 0.0 { offset / distance } else { vec2(1.0, 0.0) };
        self.position = pointer + direction * radius;
        true
    }

    // Keep the particle inside the viewport
    pub fn clamp_to(&mut self, viewport: Vec2) {
        self.position = self.position.max(Vec2::ZERO).min(viewport.max(Vec2::ZERO));
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C) {
        canvas.filled_circle(self.position, self.radius, self.color);
    }
}

// Uniform point in [0, w) x [0, h); collapses to the origin for an empty viewport
fn random_position<R: Rng>(viewport: Vec2, rng: &mut R) -> Vec2 {
    vec2(rng.gen::<f32>() * viewport.x, rng.gen::<f32>() * viewport.y)
}

// Uniform(0, 1) with a random sign
fn signed_unit<R: Rng>(rng: &mut R) -> f32 {
    let magnitude = rng.gen::<f32>();
    if rng.gen_bool(0.5) {
        magnitude
    } else {
        -magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn red() -> Rgb {
        rgb(1.0, 0.0, 0.0)
    }

    #[test]
    fn random_particles_start_inside_with_unit_speed_components() {
        let mut rng = StdRng::seed_from_u64(7);
        let viewport = vec2(640.0, 480.0);

        for _ in 0..500 {
            let particle = Particle::random(viewport, 3.4, red(), &mut rng);
            assert!(!particle.is_out_of_bounds(viewport));
            assert!(particle.velocity.x.abs() <= 1.0);
            assert!(particle.velocity.y.abs() <= 1.0);
        }
    }

    #[test]
    fn reseed_keeps_speed_magnitude() {
        let mut rng = StdRng::seed_from_u64(11);
        let viewport = vec2(200.0, 100.0);
        let mut particle = Particle::new(vec2(-5.0, 50.0), vec2(0.25, -0.75), 3.4, red());

        for _ in 0..50 {
            particle.reseed(viewport, &mut rng);
            assert!(!particle.is_out_of_bounds(viewport));
            assert_eq!(particle.velocity.x.abs(), 0.25);
            assert_eq!(particle.velocity.y.abs(), 0.75);
        }
    }

    #[test]
    fn boundary_is_inclusive() {
        let viewport = vec2(100.0, 100.0);
        let on_edge = Particle::new(vec2(100.0, 0.0), Vec2::ZERO, 1.0, red());
        let past_edge = Particle::new(vec2(100.01, 0.0), Vec2::ZERO, 1.0, red());
        assert!(!on_edge.is_out_of_bounds(viewport));
        assert!(past_edge.is_out_of_bounds(viewport));
    }

    #[test]
    fn repel_pushes_out_along_pointer_direction() {
        let mut particle = Particle::new(vec2(130.0, 140.0), Vec2::ZERO, 1.0, red());
        assert!(particle.repel_from(vec2(100.0, 100.0), 100.0));
        assert!((particle.position - vec2(160.0, 180.0)).length() < 1e-4);
    }

    #[test]
    fn repel_ignores_particles_at_or_beyond_radius() {
        let mut particle = Particle::new(vec2(200.0, 100.0), Vec2::ZERO, 1.0, red());
        assert!(!particle.repel_from(vec2(100.0, 100.0), 100.0));
        assert_eq!(particle.position, vec2(200.0, 100.0));
    }

    #[test]
    fn repel_from_exact_pointer_position_is_finite() {
        let mut particle = Particle::new(vec2(50.0, 50.0), Vec2::ZERO, 1.0, red());
        particle.repel_from(vec2(50.0, 50.0), 100.0);
        assert_eq!(particle.position, vec2(150.0, 50.0));
    }
}
