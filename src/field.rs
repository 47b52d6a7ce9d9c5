/*
 * Particle Field Module
 *
 * This module owns the animated background layer: a fixed number of
 * particles that drift across the viewport, get pushed away by the pointer
 * and are joined by fading lines whenever two of them are close.
 *
 * The proximity pass is a plain O(n²) walk over all unordered pairs with no
 * spatial index. Pairs at exactly the threshold distance are joined.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::canvas::Canvas;
use crate::params::FieldParams;
use crate::particle::Particle;

// A line between two particles that are within the proximity threshold
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProximityEdge {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    pub alpha: f32,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    params: FieldParams,
}

impl ParticleField {
    // Create the field once the viewport size is known
    pub fn new<R: Rng>(viewport: Vec2, params: FieldParams, rng: &mut R) -> Self {
        let particles = (0..params.count)
            .map(|_| Particle::random(viewport, params.particle_radius, params.particle_color, rng))
            .collect();

        Self { particles, params }
    }

    pub fn from_particles(particles: Vec<Particle>, params: FieldParams) -> Self {
        Self { particles, params }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    // Advance every particle by one frame
    pub fn update<R: Rng>(&mut self, pointer: Vec2, viewport: Vec2, rng: &mut R) {
        let repulsion_radius = self.params.repulsion_radius;

        for particle in &mut self.particles {
            particle.integrate();

            if particle.is_out_of_bounds(viewport) {
                particle.reseed(viewport, rng);
            }

            // The push can land outside when the pointer is near an edge
            if particle.repel_from(pointer, repulsion_radius) {
                particle.clamp_to(viewport);
            }
        }
    }

    // All unordered pairs within the proximity threshold
    pub fn edges(&self) -> Vec<ProximityEdge> {
        let threshold = self.params.proximity_threshold;
        let mut edges = Vec::new();

        for (i, first) in self.particles.iter().enumerate() {
            for (j, second) in self.particles.iter().enumerate().skip(i + 1) {
                let distance = first.position.distance(second.position);

                if distance <= threshold {
                    edges.push(ProximityEdge {
                        a: i,
                        b: j,
                        distance,
                        alpha: 1.0 - distance / threshold,
                    });
                }
            }
        }

        edges
    }

    // Lines first, then every particle on top of them
    pub fn render<C: Canvas>(&self, canvas: &mut C) {
        let line = self.params.line_color;

        for edge in self.edges() {
            canvas.line(
                self.particles[edge.a].position,
                self.particles[edge.b].position,
                rgba(line.red, line.green, line.blue, edge.alpha),
            );
        }

        for particle in &self.particles {
            particle.draw(canvas);
        }
    }
}
