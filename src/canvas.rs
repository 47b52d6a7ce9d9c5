/*
 * Canvas Module
 *
 * This module defines the drawing surface the overlay renders onto. All
 * coordinates handed to a Canvas are in viewport space (top-left origin,
 * y down). The nannou implementation converts them to nannou's centred,
 * y-up coordinates the same way a camera maps world space to screen space.
 */

use nannou::prelude::*;
use nannou::wgpu;

pub trait Canvas {
    type Image;

    fn line(&mut self, start: Vec2, end: Vec2, color: Rgba);
    fn filled_circle(&mut self, center: Vec2, radius: f32, color: Rgb);
    fn image(&mut self, image: &Self::Image, top_left: Vec2, size: Vec2);
}

// Canvas backed by a nannou Draw for the current window
pub struct NannouCanvas<'a> {
    draw: &'a Draw,
    window_rect: Rect,
}

impl<'a> NannouCanvas<'a> {
    pub fn new(draw: &'a Draw, window_rect: Rect) -> Self {
        Self { draw, window_rect }
    }

    // Convert a point from viewport space to nannou window space
    pub fn to_window(&self, point: Vec2) -> Point2 {
        pt2(
            self.window_rect.left() + point.x,
            self.window_rect.top() - point.y,
        )
    }
}

impl<'a> Canvas for NannouCanvas<'a> {
    type Image = wgpu::Texture;

    fn line(&mut self, start: Vec2, end: Vec2, color: Rgba) {
        self.draw
            .line()
            .start(self.to_window(start))
            .end(self.to_window(end))
            .weight(1.0)
            .color(color);
    }

    fn filled_circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
        self.draw
            .ellipse()
            .xy(self.to_window(center))
            .radius(radius)
            .color(color);
    }

    fn image(&mut self, image: &Self::Image, top_left: Vec2, size: Vec2) {
        // nannou positions textures by their centre
        let center = self.to_window(top_left + size * 0.5);
        self.draw.texture(image).xy(center).wh(size);
    }
}
