//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, cards, map, picker, status) and
//! collects their interactions for the application to apply after the frame
//! is drawn.

use crate::app::AppState;
use crate::ui::input::shortcuts::{self, ShortcutAction};
use crate::ui::{card_panel, header, map_panel, picker, status_bar};

/// Result of panel interactions that need to be handled by the application coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelInteraction {
    /// A map region was clicked
    AddZone { display_name: String, zone_id: String },
    /// A picker row was chosen
    PickerSelected { display_name: String, zone_id: String },
    /// A card's remove button was clicked
    RemoveZone { display_name: String, zone_id: String },
    /// "Clear All" button or shortcut
    ClearAll,
    OpenPicker,
    ClosePicker,
    /// Pause or resume the refresh loop
    ToggleRefresh,
}

impl From<ShortcutAction> for PanelInteraction {
    fn from(action: ShortcutAction) -> Self {
        match action {
            ShortcutAction::OpenPicker => PanelInteraction::OpenPicker,
            ShortcutAction::ClearAll => PanelInteraction::ClearAll,
            ShortcutAction::ClosePicker => PanelInteraction::ClosePicker,
        }
    }
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Vec<PanelInteraction> {
        let mut interactions: Vec<PanelInteraction> = shortcuts::read_shortcuts(ctx)
            .into_iter()
            .map(PanelInteraction::from)
            .collect();

        let theme_colors = state.theme.colors().clone();

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interactions.push(match header_interaction {
                    header::HeaderInteraction::OpenPickerRequested => PanelInteraction::OpenPicker,
                    header::HeaderInteraction::ClearAllRequested => PanelInteraction::ClearAll,
                    header::HeaderInteraction::RefreshToggleRequested => PanelInteraction::ToggleRefresh,
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        let panel_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(8))
            .fill(ctx.style().visuals.panel_fill);

        let mut card_interaction = None;

        if state.layout.show_map() {
            // Left panel: Cards
            let side = egui::SidePanel::left("card_panel")
                .default_width(state.layout.card_panel_width())
                .resizable(true)
                .frame(panel_frame)
                .show(ctx, |ui| {
                    ui.heading("Clocks");
                    ui.separator();
                    card_interaction = card_panel::render_card_panel(ui, state, &theme_colors);
                });
            state.layout.set_card_panel_width(side.response.rect.width());

            // Right panel: Map
            egui::CentralPanel::default().frame(panel_frame).show(ctx, |ui| {
                ui.heading("World Map");
                ui.separator();
                if let Some(map_panel::MapInteraction::RegionClicked { display_name, zone_id }) =
                    map_panel::render_map_panel(ui, state, &theme_colors)
                {
                    interactions.push(PanelInteraction::AddZone { display_name, zone_id });
                }
            });
        } else {
            egui::CentralPanel::default().frame(panel_frame).show(ctx, |ui| {
                ui.heading("Clocks");
                ui.separator();
                card_interaction = card_panel::render_card_panel(ui, state, &theme_colors);
            });
        }

        if let Some(card_panel::CardInteraction::RemoveRequested { display_name, zone_id }) = card_interaction {
            interactions.push(PanelInteraction::RemoveZone { display_name, zone_id });
        }

        // Picker floats above the panels
        match picker::render_picker(ctx, state, &theme_colors) {
            Some(picker::PickerInteraction::Selected { display_name, zone_id }) => {
                interactions.push(PanelInteraction::PickerSelected { display_name, zone_id });
            }
            Some(picker::PickerInteraction::Closed) => interactions.push(PanelInteraction::ClosePicker),
            None => {}
        }

        interactions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcuts_map_to_interactions() {
        assert_eq!(PanelInteraction::from(ShortcutAction::OpenPicker), PanelInteraction::OpenPicker);
        assert_eq!(PanelInteraction::from(ShortcutAction::ClearAll), PanelInteraction::ClearAll);
        assert_eq!(PanelInteraction::from(ShortcutAction::ClosePicker), PanelInteraction::ClosePicker);
    }
}
