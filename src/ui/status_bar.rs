//! Status bar UI rendering
//!
//! Handles the bottom status bar with clock count and refresh state.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;
use crate::utils::{format_last_refresh, get_current_memory_mb, format_memory_mb};

/// Renders the status panel at the bottom of the window
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        // Always show memory usage first
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());
        ui.label(RichText::new("|").strong());

        let registry = &state.registry;
        let clocks = match registry.len() {
            1 => "1 clock".to_string(),
            n => format!("{} clocks", n),
        };
        ui.label(RichText::new(clocks).strong());
        ui.label(RichText::new("|").strong());

        if registry.is_running() {
            ui.label(RichText::new("Running").strong());
        } else {
            ui.label(RichText::new("Paused").strong().color(state.theme.colors().warning));
        }
        ui.label(RichText::new("|").strong());

        ui.label(RichText::new(format_last_refresh(registry.last_refresh(), registry.refresh_count())).strong());
    });
}
