/*
 * Layout Module
 *
 * Places the background card in the window: scaled uniformly until it
 * touches the window on one axis, then centred on the other.
 */

use nannou::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageLayout {
    // Top-left corner in viewport space
    pub position: Vec2,
    pub size: Vec2,
}

pub fn stretch_to_fit(image_size: Vec2, window_size: Vec2) -> ImageLayout {
    if image_size.x <= 0.0 || image_size.y <= 0.0 {
        return ImageLayout {
            position: window_size * 0.5,
            size: Vec2::ZERO,
        };
    }

    let scale = f32::min(window_size.y / image_size.y, window_size.x / image_size.x);
    let size = image_size * scale;

    ImageLayout {
        position: (window_size - size) * 0.5,
        size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_image_fills_width_and_centres_vertically() {
        let layout = stretch_to_fit(vec2(400.0, 100.0), vec2(800.0, 600.0));
        assert_eq!(layout.size, vec2(800.0, 200.0));
        assert_eq!(layout.position, vec2(0.0, 200.0));
    }

    #[test]
    fn tall_image_fills_height_and_centres_horizontally() {
        let layout = stretch_to_fit(vec2(100.0, 300.0), vec2(800.0, 600.0));
        assert_eq!(layout.size, vec2(200.0, 600.0));
        assert_eq!(layout.position, vec2(300.0, 0.0));
    }

    #[test]
    fn aspect_ratio_is_preserved() {
        let layout = stretch_to_fit(vec2(1024.0, 768.0), vec2(1920.0, 1080.0));
        let ratio = layout.size.x / layout.size.y;
        assert!((ratio - 1024.0 / 768.0).abs() < 1e-5);
        assert_eq!(layout.size.y, 1080.0);
    }

    #[test]
    fn empty_image_collapses_to_window_centre() {
        let layout = stretch_to_fit(Vec2::ZERO, vec2(800.0, 600.0));
        assert_eq!(layout.size, Vec2::ZERO);
        assert_eq!(layout.position, vec2(400.0, 300.0));
    }
}
