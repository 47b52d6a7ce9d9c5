/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct shown at the bottom of the
 * settings panel: frame rate, frame time and how much is on screen.
 */

use std::time::Duration;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub particles: usize,
    pub tokens: usize,
}

impl DebugInfo {
    pub fn summary(&self) -> String {
        format!(
            "FPS: {:.1} | Frame: {:.2} ms | Particles: {} | Tokens: {}",
            self.fps,
            self.frame_time.as_secs_f64() * 1000.0,
            self.particles,
            self.tokens
        )
    }
}
