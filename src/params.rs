/*
 * Overlay Parameters Module
 *
 * This module defines the fixed configuration of the overlay: the particle
 * field constants, the token board scale and the runtime toggles the
 * settings panel flips. Everything has a Default so the host can construct
 * the whole overlay without any configuration source.
 */

use nannou::color::{rgb, Rgb};

// Constants for the particle field
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldParams {
    pub count: usize,
    pub proximity_threshold: f32,
    pub repulsion_radius: f32,
    pub particle_radius: f32,
    pub particle_color: Rgb,
    pub line_color: Rgb,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count: 100,
            proximity_threshold: 73.0,
            repulsion_radius: 100.0,
            particle_radius: 3.4,
            particle_color: rgb(1.0, 0.0, 0.0),
            line_color: rgb(1.0, 1.0, 1.0),
        }
    }
}

// Constants for the token board
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardParams {
    // Edge length of the square token image, in logical pixels
    pub token_edge: f32,
}

impl Default for BoardParams {
    fn default() -> Self {
        Self { token_edge: 100.0 }
    }
}

// Everything the host needs to build and drive the overlay
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayParams {
    pub field: FieldParams,
    pub board: BoardParams,
    pub show_particles: bool,
    pub show_settings: bool,
    pub window_title: String,
    // Fraction of the primary monitor the window covers on startup
    pub window_scale: f32,
}

impl Default for OverlayParams {
    fn default() -> Self {
        Self {
            field: FieldParams::default(),
            board: BoardParams::default(),
            show_particles: true,
            show_settings: true,
            window_title: "Bingo Overlay".to_string(),
            window_scale: 0.8,
        }
    }
}

impl OverlayParams {
    pub fn toggle_particles(&mut self) -> bool {
        self.show_particles = !self.show_particles;
        self.show_particles
    }

    pub fn toggle_settings(&mut self) -> bool {
        self.show_settings = !self.show_settings;
        self.show_settings
    }
}
