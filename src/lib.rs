/*
 * Bingo Overlay - Module Definitions
 *
 * This file defines the module structure for the overlay: an animated
 * particle field drawn beneath a board of draggable chips placed over a
 * bingo card image.
 */

// Re-export key components for easier access
pub use app::Model;
pub use canvas::Canvas;
pub use error::OverlayError;
pub use field::{ParticleField, ProximityEdge};
pub use input::{FrameInput, PointerState};
pub use params::{BoardParams, FieldParams, OverlayParams};
pub use particle::Particle;
pub use token::{FramePlan, Token, TokenBoard, TokenOutcome};

// Define modules
pub mod app;
pub mod canvas;
pub mod debug;
pub mod error;
pub mod field;
pub mod images;
pub mod input;
pub mod layout;
pub mod params;
pub mod particle;
pub mod token;
pub mod ui;
