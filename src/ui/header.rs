//! Header panel UI rendering
//!
//! Handles the top bar with clock controls, the map toggle and the theme selector.

use eframe::egui;
use crate::app::AppState;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User clicked "Add Clock"
    OpenPickerRequested,
    /// User clicked "Clear All"
    ClearAllRequested,
    /// User clicked "Pause" / "Resume"
    RefreshToggleRequested,
}

/// Renders the application header.
///
/// The map toggle and theme selector only touch UI state and are applied
/// directly; clock operations are returned to the caller.
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("➕ Add Clock").on_hover_text("Ctrl+K").clicked() {
            interaction = Some(HeaderInteraction::OpenPickerRequested);
        }

        let has_clocks = !state.registry.is_empty();
        if ui
            .add_enabled(has_clocks, egui::Button::new("🗑 Clear All"))
            .on_hover_text("Ctrl+L")
            .clicked()
        {
            interaction = Some(HeaderInteraction::ClearAllRequested);
        }

        ui.separator();

        let toggle_label = if state.registry.is_running() { "⏸ Pause" } else { "▶ Resume" };
        if ui.button(toggle_label).clicked() {
            interaction = Some(HeaderInteraction::RefreshToggleRequested);
        }

        ui.checkbox(state.layout.show_map_mut(), "🗺 Map");

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(&mut current_theme, theme_name.to_string(), theme_name);
                    }
                });

            if old_theme != current_theme {
                state.theme.set_theme(current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    if let Some(status) = state.layout.status() {
        ui.colored_label(state.theme.colors().error, status);
    }

    interaction
}
