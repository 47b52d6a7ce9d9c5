/*
 * Application Module
 *
 * This module defines the nannou model for the overlay and wires the frame
 * loop together:
 * - update captures one input snapshot, runs the settings panel, then steps
 *   the particle field and the token board with that same snapshot
 * - view draws the card, the particle field, the tokens and finally egui
 */

use nannou::prelude::*;
use nannou_egui::Egui;
use tracing::{debug, info};

use crate::canvas::{Canvas, NannouCanvas};
use crate::debug::DebugInfo;
use crate::field::ParticleField;
use crate::images::ImageSlot;
use crate::input::{self, FrameInput, PointerState};
use crate::layout::stretch_to_fit;
use crate::params::OverlayParams;
use crate::token::TokenBoard;
use crate::ui::{self, UiCommand};

// Main model for the application
pub struct Model {
    pub params: OverlayParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub pointer: PointerState,
    pub frame_input: FrameInput,
    // Created on the first update, once the viewport size is known
    pub field: Option<ParticleField>,
    pub board: TokenBoard,
    pub card: ImageSlot,
    pub chip: ImageSlot,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let params = OverlayParams::default();

    // Escape toggles the settings panel instead of quitting
    app.set_exit_on_escape(false);

    // Size the window relative to the primary monitor when there is one
    let (window_width, window_height) = match app.primary_monitor() {
        Some(monitor) => {
            let size = monitor.size();
            (
                size.width as f32 * params.window_scale,
                size.height as f32 * params.window_scale,
            )
        }
        None => (1280.0, 720.0),
    };

    let window_id = app
        .new_window()
        .title(&params.window_title)
        .size(window_width as u32, window_height as u32)
        .view(view)
        .key_pressed(key_pressed)
        .raw_event(raw_window_event)
        .build()
        .unwrap();

    let window = app.window(window_id).unwrap();
    let egui = Egui::from_window(&window);

    info!(width = window_width, height = window_height, "overlay window created");

    Model {
        board: TokenBoard::new(params.board),
        params,
        egui,
        debug_info: DebugInfo::default(),
        pointer: PointerState::default(),
        frame_input: FrameInput::default(),
        field: None,
        card: ImageSlot::new("Card"),
        chip: ImageSlot::new("Chip"),
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    // One snapshot per frame, shared by everything below
    input::capture_pointer(app, &mut model.pointer);
    let viewport = app.window_rect().wh();

    let (commands, ui_wants_pointer) = ui::update_ui(
        &mut model.egui,
        model.params.show_settings,
        &mut model.card,
        &mut model.chip,
        &model.debug_info,
    );

    model.frame_input = FrameInput::new(model.pointer, viewport, !ui_wants_pointer);

    for command in commands {
        apply_command(app, model, command);
    }

    let field_params = model.params.field;
    let field = model.field.get_or_insert_with(|| {
        info!(count = field_params.count, width = viewport.x, height = viewport.y, "particle field created");
        ParticleField::new(viewport, field_params, &mut rand::thread_rng())
    });
    field.update(model.frame_input.pointer.position, viewport, &mut rand::thread_rng());

    // Without a chip image there is nothing to place or drag
    if model.chip.image().is_some() {
        model.board.update(&model.frame_input);
    }

    model.debug_info.particles = model.field.as_ref().map_or(0, |f| f.len());
    model.debug_info.tokens = model.board.len();
}

fn apply_command(app: &App, model: &mut Model, command: UiCommand) {
    match command {
        UiCommand::LoadCard => model.card.reload(app),
        UiCommand::LoadChip => model.chip.reload(app),
        UiCommand::ClearTokens => {
            info!(count = model.board.len(), "tokens cleared");
            model.board.clear();
        }
        UiCommand::ToggleParticles => {
            let visible = model.params.toggle_particles();
            debug!(visible, "particle field toggled");
        }
    }
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let window_rect = app.window_rect();
    let mut canvas = NannouCanvas::new(&draw, window_rect);

    if let Some(card) = model.card.image() {
        let layout = stretch_to_fit(card.size(), window_rect.wh());
        canvas.image(&card.texture, layout.position, layout.size);
    }

    if model.params.show_particles {
        if let Some(field) = &model.field {
            field.render(&mut canvas);
        }
    }

    if let Some(chip) = model.chip.image() {
        model.board.render(&mut canvas, &chip.texture);
    }

    draw.to_frame(app, &frame).unwrap();

    model.egui.draw_to_frame(&frame).unwrap();
}

// Escape shows or hides the settings panel
pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    if key == Key::Escape {
        let visible = model.params.toggle_settings();
        debug!(visible, "settings panel toggled");
    }
}

// Pass raw window events on to egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
