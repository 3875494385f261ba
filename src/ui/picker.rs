//! Catalog picker window
//!
//! A searchable list of the catalog cities. Rows whose clock is already shown
//! are drawn highlighted.

use eframe::egui;
use egui::{Key, RichText, ScrollArea};
use crate::app::AppState;
use worldclock::catalog;
use worldclock::ThemeColors;

/// Result of user interaction with the picker
pub enum PickerInteraction {
    /// User picked a catalog row
    Selected { display_name: String, zone_id: String },
    /// User closed the window
    Closed,
}

/// Renders the picker window if it is open.
pub fn render_picker(ctx: &egui::Context, state: &mut AppState, colors: &ThemeColors) -> Option<PickerInteraction> {
    if !state.picker.is_open() {
        return None;
    }

    let mut interaction = None;
    let mut open = true;
    let wants_focus = state.picker.take_focus_request();

    egui::Window::new("Add Clock")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(320.0)
        .anchor(egui::Align2::CENTER_TOP, [0.0, 60.0])
        .show(ctx, |ui| {
            let search = ui.add(
                egui::TextEdit::singleline(state.picker.query_mut())
                    .hint_text("Search city or zone")
                    .desired_width(f32::INFINITY),
            );
            if wants_focus {
                search.request_focus();
            }
            let submitted = search.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

            let matches = catalog::search(state.picker.query());
            if submitted {
                if let Some(first) = matches.first() {
                    interaction = Some(PickerInteraction::Selected {
                        display_name: first.display_name.to_string(),
                        zone_id: first.zone_id.to_string(),
                    });
                }
            }

            ui.separator();

            if matches.is_empty() {
                ui.label(RichText::new("No matching cities").color(colors.text_dim));
                return;
            }

            let highlights = state.highlights.borrow();
            ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
                for entry in matches {
                    let active = highlights.is_highlighted(entry.display_name);
                    let text = if active {
                        RichText::new(format!("● {}", entry.display_name)).color(colors.highlight).strong()
                    } else {
                        RichText::new(entry.display_name).color(colors.text)
                    };

                    let row = ui.horizontal(|ui| {
                        let clicked = ui.selectable_label(active, text).clicked();
                        ui.label(RichText::new(entry.zone_id).small().color(colors.text_dim));
                        clicked
                    });

                    if row.inner {
                        interaction = Some(PickerInteraction::Selected {
                            display_name: entry.display_name.to_string(),
                            zone_id: entry.zone_id.to_string(),
                        });
                    }
                }
            });
        });

    if !open {
        interaction = Some(PickerInteraction::Closed);
    }

    interaction
}
