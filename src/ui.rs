/*
 * UI Module
 *
 * This module builds the settings panel with nannou_egui. The panel never
 * touches the overlay state directly: it returns the commands the user
 * issued and the app applies them once the egui frame has ended.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::images::ImageSlot;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiCommand {
    LoadCard,
    LoadChip,
    ClearTokens,
    ToggleParticles,
}

// Draw the settings panel and collect the commands the user triggered.
// The second value is true when egui wants the pointer for itself.
pub fn update_ui(
    egui: &mut Egui,
    show_settings: bool,
    card: &mut ImageSlot,
    chip: &mut ImageSlot,
    debug_info: &DebugInfo,
) -> (Vec<UiCommand>, bool) {
    let mut commands = Vec::new();

    let ctx = egui.begin_frame();

    if show_settings {
        egui::Window::new("Settings")
            .default_pos([10.0, 10.0])
            .show(&ctx, |ui| {
                if image_row(ui, "Open Card", card) {
                    commands.push(UiCommand::LoadCard);
                }
                if image_row(ui, "Open Chip", chip) {
                    commands.push(UiCommand::LoadChip);
                }

                ui.separator();

                if ui.button("Clear Tokens").clicked() {
                    commands.push(UiCommand::ClearTokens);
                }
                if ui.button("Toggle Particle Field").clicked() {
                    commands.push(UiCommand::ToggleParticles);
                }

                ui.separator();
                ui.label("Left click: place or drag a chip. Right click: remove it. Esc: hide this panel.");
                ui.label(debug_info.summary());
            });
    }

    let wants_pointer = ctx.wants_pointer_input();

    (commands, wants_pointer)
}

// Path field plus load button for one image slot; true when a load was requested
fn image_row(ui: &mut egui::Ui, button: &str, slot: &mut ImageSlot) -> bool {
    let mut load = false;

    ui.horizontal(|ui| {
        if ui.button(button).clicked() {
            load = true;
        }
        let response = ui.text_edit_singleline(&mut slot.path);
        if response.lost_focus() && ui.input().key_pressed(egui::Key::Enter) {
            load = true;
        }
        ui.label(slot.label);
    });

    if let Some(status) = &slot.status {
        ui.colored_label(egui::Color32::from_rgb(230, 80, 80), status);
    }

    load
}
