//! Map overlay visuals: one marker per clock on an equirectangular world map.

use crate::catalog;
use crate::format::ZoneReading;
use crate::registry::RegistryListener;
use crate::zone::{TimeZoneEntry, ZoneKey};

/// Position on the map, both axes normalized to `0.0..=1.0`
/// (`x` grows eastward from 180°W, `y` grows southward from 90°N).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPosition {
    pub x: f32,
    pub y: f32,
}

impl MapPosition {
    pub fn from_coordinates(latitude: f32, longitude: f32) -> Self {
        Self {
            x: ((longitude + 180.0) / 360.0).clamp(0.0, 1.0),
            y: ((90.0 - latitude) / 180.0).clamp(0.0, 1.0),
        }
    }

    /// Places a zone by its current UTC offset along the equator.
    /// Used for clocks that are not in the catalog.
    pub fn from_utc_offset(offset_seconds: i32) -> Self {
        let longitude = offset_seconds as f32 / 3600.0 * 15.0;
        Self::from_coordinates(0.0, longitude.clamp(-180.0, 180.0))
    }

    fn for_entry(entry: &TimeZoneEntry, reading: &ZoneReading) -> Self {
        match catalog::find(entry.display_name(), entry.zone_id()) {
            Some(c) => Self::from_coordinates(c.latitude, c.longitude),
            None => Self::from_utc_offset(reading.offset_seconds),
        }
    }
}

/// One marker on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub key: ZoneKey,
    pub label: String,
    pub time: String,
    pub position: MapPosition,
}

#[derive(Debug, Clone, Default)]
pub struct MapOverlay {
    markers: Vec<Marker>,
}

impl MapOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn get(&self, key: &ZoneKey) -> Option<&Marker> {
        self.markers.iter().find(|m| &m.key == key)
    }
}

impl RegistryListener for MapOverlay {
    fn entry_added(&mut self, entry: &TimeZoneEntry, reading: &ZoneReading) {
        let key = entry.key();
        if let Some(marker) = self.markers.iter_mut().find(|m| m.key == key) {
            marker.time.clone_from(&reading.overlay_time);
            return;
        }
        self.markers.push(Marker {
            key,
            label: entry.display_name().to_string(),
            time: reading.overlay_time.clone(),
            position: MapPosition::for_entry(entry, reading),
        });
    }

    fn entry_removed(&mut self, entry: &TimeZoneEntry) {
        let key = entry.key();
        self.markers.retain(|m| m.key != key);
    }

    fn cleared(&mut self) {
        self.markers.clear();
    }

    fn entry_refreshed(&mut self, entry: &TimeZoneEntry, reading: &ZoneReading) {
        let key = entry.key();
        if let Some(marker) = self.markers.iter_mut().find(|m| m.key == key) {
            marker.time.clone_from(&reading.overlay_time);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::format_reading;
    use chrono::{TimeZone, Utc};

    fn reading(zone: &str) -> ZoneReading {
        format_reading(zone, Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()).unwrap()
    }

    #[test]
    fn test_coordinates_normalize() {
        let center = MapPosition::from_coordinates(0.0, 0.0);
        assert_eq!(center, MapPosition { x: 0.5, y: 0.5 });

        let north_west = MapPosition::from_coordinates(90.0, -180.0);
        assert_eq!(north_west, MapPosition { x: 0.0, y: 0.0 });
    }

    #[test]
    fn test_catalog_entry_uses_city_location() {
        let mut overlay = MapOverlay::new();
        let tokyo = TimeZoneEntry::new("Tokyo", "Asia/Tokyo");
        overlay.entry_added(&tokyo, &reading("Asia/Tokyo"));

        let marker = overlay.get(&tokyo.key()).unwrap();
        assert_eq!(marker.time, "09:00 AM");
        assert!(marker.position.x > 0.85 && marker.position.x < 0.9);
        assert!(marker.position.y < 0.5);
    }

    #[test]
    fn test_unlisted_entry_placed_by_offset() {
        let mut overlay = MapOverlay::new();
        let office = TimeZoneEntry::new("Office", "Asia/Tokyo");
        overlay.entry_added(&office, &reading("Asia/Tokyo"));

        let marker = overlay.get(&office.key()).unwrap();
        assert_eq!(marker.position, MapPosition::from_coordinates(0.0, 135.0));
    }

    #[test]
    fn test_clear_removes_all_markers() {
        let mut overlay = MapOverlay::new();
        overlay.entry_added(&TimeZoneEntry::new("Cairo", "Africa/Cairo"), &reading("Africa/Cairo"));
        overlay.entry_added(&TimeZoneEntry::new("Dubai", "Asia/Dubai"), &reading("Asia/Dubai"));
        overlay.cleared();
        assert!(overlay.is_empty());
    }
}
