//! Map panel UI rendering
//!
//! Draws an equirectangular world grid with:
//! - a clickable region for every catalog city (highlighted while its clock is shown)
//! - a marker with name and short time for every active clock

use eframe::egui;
use egui::{Align2, FontId, Pos2, Rect, Sense, Stroke, Vec2};
use crate::app::AppState;
use worldclock::catalog::{CatalogEntry, CATALOG};
use worldclock::{with_alpha, MapPosition, ThemeColors};

/// Radius of a catalog region dot, in points
const REGION_RADIUS: f32 = 4.0;
/// Pointer distance within which a click selects a region
const REGION_HIT_RADIUS: f32 = 10.0;
const MARKER_RADIUS: f32 = 5.0;
/// Graticule spacing in degrees
const GRID_STEP: usize = 30;

/// Result of user interaction with the map
pub enum MapInteraction {
    /// User clicked a catalog region
    RegionClicked { display_name: String, zone_id: String },
}

/// Converts a normalized map position to a screen position inside `rect`.
pub fn to_screen(rect: Rect, position: MapPosition) -> Pos2 {
    rect.min + Vec2::new(position.x * rect.width(), position.y * rect.height())
}

/// Finds the catalog region closest to `pointer`, if one is within hit range.
pub fn region_at(rect: Rect, pointer: Pos2) -> Option<&'static CatalogEntry> {
    CATALOG
        .iter()
        .map(|entry| {
            let center = to_screen(rect, MapPosition::from_coordinates(entry.latitude, entry.longitude));
            (entry, center.distance(pointer))
        })
        .filter(|(_, distance)| *distance <= REGION_HIT_RADIUS)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(entry, _)| entry)
}

/// Renders the map and returns a clicked region, if any.
pub fn render_map_panel(ui: &mut egui::Ui, state: &AppState, colors: &ThemeColors) -> Option<MapInteraction> {
    // Keep the 2:1 aspect of an equirectangular projection
    let available = ui.available_size();
    let height = (available.x / 2.0).min(available.y).max(0.0);
    let (rect, response) = ui.allocate_exact_size(Vec2::new(height * 2.0, height), Sense::click());
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, 4.0, colors.map_ocean);
    draw_graticule(&painter, rect, colors);

    let highlights = state.highlights.borrow();
    for entry in CATALOG.iter() {
        let center = to_screen(rect, MapPosition::from_coordinates(entry.latitude, entry.longitude));
        let color = if highlights.is_highlighted(entry.display_name) {
            colors.highlight
        } else {
            with_alpha(colors.map_region, 160)
        };
        painter.circle_filled(center, REGION_RADIUS, color);
    }

    let label_font = FontId::proportional(12.0);
    for marker in state.map.borrow().markers() {
        let center = to_screen(rect, marker.position);
        painter.circle_filled(center, MARKER_RADIUS, colors.marker);
        painter.circle_stroke(center, MARKER_RADIUS, Stroke::new(1.5, colors.text_strong));
        painter.text(
            center + Vec2::new(MARKER_RADIUS + 4.0, 0.0),
            Align2::LEFT_CENTER,
            format!("{} {}", marker.label, marker.time),
            label_font.clone(),
            colors.text_strong,
        );
    }

    if response.clicked() {
        if let Some(entry) = response.interact_pointer_pos().and_then(|p| region_at(rect, p)) {
            return Some(MapInteraction::RegionClicked {
                display_name: entry.display_name.to_string(),
                zone_id: entry.zone_id.to_string(),
            });
        }
    }

    if let Some(entry) = response.hover_pos().and_then(|p| region_at(rect, p)) {
        response.on_hover_text_at_pointer(format!("{} ({})", entry.display_name, entry.zone_id));
    }

    None
}

fn draw_graticule(painter: &egui::Painter, rect: Rect, colors: &ThemeColors) {
    let grid = Stroke::new(1.0, colors.map_grid);

    for longitude in (-180..=180).step_by(GRID_STEP) {
        let top = to_screen(rect, MapPosition::from_coordinates(90.0, longitude as f32));
        let bottom = to_screen(rect, MapPosition::from_coordinates(-90.0, longitude as f32));
        painter.line_segment([top, bottom], grid);
    }

    for latitude in (-90..=90).step_by(GRID_STEP) {
        let left = to_screen(rect, MapPosition::from_coordinates(latitude as f32, -180.0));
        let right = to_screen(rect, MapPosition::from_coordinates(latitude as f32, 180.0));
        let stroke = if latitude == 0 { Stroke::new(1.5, colors.map_region) } else { grid };
        painter.line_segment([left, right], stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_rect() -> Rect {
        Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::new(720.0, 360.0))
    }

    #[test]
    fn test_to_screen_corners() {
        let rect = map_rect();
        assert_eq!(to_screen(rect, MapPosition { x: 0.0, y: 0.0 }), rect.min);
        assert_eq!(to_screen(rect, MapPosition { x: 1.0, y: 1.0 }), rect.max);
        assert_eq!(to_screen(rect, MapPosition { x: 0.5, y: 0.5 }), rect.center());
    }

    #[test]
    fn test_region_hit_testing() {
        let rect = map_rect();
        let tokyo = CATALOG.iter().find(|e| e.display_name == "Tokyo").unwrap();
        let center = to_screen(rect, MapPosition::from_coordinates(tokyo.latitude, tokyo.longitude));

        let hit = region_at(rect, center + Vec2::new(2.0, -2.0)).unwrap();
        assert_eq!(hit.display_name, "Tokyo");

        // Middle of the South Pacific
        let open_ocean = to_screen(rect, MapPosition::from_coordinates(-45.0, -130.0));
        assert!(region_at(rect, open_ocean).is_none());
    }
}
