/*
 * Input Module
 *
 * This module captures the per-frame input snapshot shared by the particle
 * field and the token board. The snapshot is taken once at the top of every
 * update so both subsystems see the same pointer state.
 *
 * Features:
 * - Pointer position in viewport space (top-left origin, y down)
 * - Button down state plus press-edges derived from the previous frame
 * - Frame-to-frame pointer delta for dragging
 */

use nannou::prelude::*;

// Pointer state for the current frame together with the previous frame's
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub primary_down: bool,
    pub secondary_down: bool,
    previous_position: Vec2,
    previous_primary_down: bool,
    previous_secondary_down: bool,
}

impl PointerState {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            previous_position: position,
            ..Default::default()
        }
    }

    // Roll the current state into the previous slot and record a new frame
    pub fn advance(&mut self, position: Vec2, primary_down: bool, secondary_down: bool) {
        self.previous_position = self.position;
        self.previous_primary_down = self.primary_down;
        self.previous_secondary_down = self.secondary_down;

        self.position = position;
        self.primary_down = primary_down;
        self.secondary_down = secondary_down;
    }

    pub fn delta(&self) -> Vec2 {
        self.position - self.previous_position
    }

    // True only on the frame the primary button went from up to down
    pub fn primary_pressed(&self) -> bool {
        self.primary_down && !self.previous_primary_down
    }

    pub fn secondary_pressed(&self) -> bool {
        self.secondary_down && !self.previous_secondary_down
    }
}

// Everything a subsystem may read during one frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub pointer: PointerState,
    pub viewport: Vec2,
    // False while the settings panel owns the pointer
    pub board_focused: bool,
}

impl FrameInput {
    pub fn new(pointer: PointerState, viewport: Vec2, board_focused: bool) -> Self {
        Self {
            pointer,
            viewport,
            board_focused,
        }
    }
}

// Convert a nannou window point (centre origin, y up) into viewport space
pub fn window_to_viewport(point: Vec2, window_rect: Rect) -> Vec2 {
    vec2(point.x - window_rect.left(), window_rect.top() - point.y)
}

// Capture the pointer from the nannou mouse for this frame
pub fn capture_pointer(app: &App, pointer: &mut PointerState) {
    let window_rect = app.window_rect();
    let position = window_to_viewport(vec2(app.mouse.x, app.mouse.y), window_rect);

    pointer.advance(
        position,
        app.mouse.buttons.left().is_down(),
        app.mouse.buttons.right().is_down(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_edge_only_on_first_down_frame() {
        let mut pointer = PointerState::new(vec2(10.0, 10.0));

        pointer.advance(vec2(10.0, 10.0), true, false);
        assert!(pointer.primary_pressed());

        pointer.advance(vec2(12.0, 10.0), true, false);
        assert!(pointer.primary_down);
        assert!(!pointer.primary_pressed());

        pointer.advance(vec2(12.0, 10.0), false, true);
        assert!(!pointer.primary_pressed());
        assert!(pointer.secondary_pressed());
    }

    #[test]
    fn delta_is_frame_to_frame() {
        let mut pointer = PointerState::new(vec2(0.0, 0.0));
        pointer.advance(vec2(5.0, -3.0), false, false);
        assert_eq!(pointer.delta(), vec2(5.0, -3.0));
        pointer.advance(vec2(6.0, -3.0), false, false);
        assert_eq!(pointer.delta(), vec2(1.0, 0.0));
    }

    #[test]
    fn window_points_map_to_top_left_origin() {
        let rect = Rect::from_w_h(800.0, 600.0);
        assert_eq!(window_to_viewport(vec2(-400.0, 300.0), rect), vec2(0.0, 0.0));
        assert_eq!(window_to_viewport(vec2(0.0, 0.0), rect), vec2(400.0, 300.0));
        assert_eq!(window_to_viewport(vec2(400.0, -300.0), rect), vec2(800.0, 600.0));
    }
}
