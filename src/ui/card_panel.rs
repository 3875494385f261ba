//! Card panel UI rendering
//!
//! One framed card per clock, in the order the clocks were added.

use eframe::egui;
use egui::{Align, Layout, RichText, ScrollArea};
use crate::app::AppState;
use worldclock::ThemeColors;

/// Result of user interaction with a card
pub enum CardInteraction {
    /// User clicked a card's remove button
    RemoveRequested { display_name: String, zone_id: String },
}

/// Renders the clock cards.
pub fn render_card_panel(ui: &mut egui::Ui, state: &AppState, colors: &ThemeColors) -> Option<CardInteraction> {
    let mut interaction = None;
    let cards = state.cards.borrow();

    if cards.is_empty() {
        ui.add_space(12.0);
        ui.label(RichText::new("No clocks. Press Ctrl+K to add one.").color(colors.text_dim));
        return None;
    }

    ScrollArea::vertical()
        .id_salt("card_scroll_area")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for card in cards.cards() {
                egui::Frame::default()
                    .fill(colors.card_fill)
                    .stroke(egui::Stroke::new(1.0, colors.border))
                    .corner_radius(6.0)
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(&card.display_name)
                                    .strong()
                                    .size(16.0)
                                    .color(colors.text_strong),
                            );
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                if ui.small_button("✖").on_hover_text("Remove clock").clicked() {
                                    interaction = Some(CardInteraction::RemoveRequested {
                                        display_name: card.display_name.clone(),
                                        zone_id: card.zone_id.clone(),
                                    });
                                }
                            });
                        });
                        ui.label(RichText::new(&card.time).monospace().size(26.0).color(colors.card_accent));
                        ui.label(&card.date);
                        ui.label(
                            RichText::new(format!("{}  ·  {}", card.zone_id, card.utc_offset))
                                .small()
                                .color(colors.text_dim),
                        );
                    });
                ui.add_space(6.0);
            }
        });

    interaction
}
