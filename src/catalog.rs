//! Static catalog of selectable clocks.
//!
//! The catalog is the only source the picker and the map regions draw from.
//! Coordinates are city locations in degrees and are used to place overlay
//! markers on the world map.

/// One selectable clock with its location on the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    pub display_name: &'static str,
    pub zone_id: &'static str,
    pub latitude: f32,
    pub longitude: f32,
}

impl CatalogEntry {
    const fn new(display_name: &'static str, zone_id: &'static str, latitude: f32, longitude: f32) -> Self {
        Self { display_name, zone_id, latitude, longitude }
    }
}

pub const CATALOG: [CatalogEntry; 25] = [
    // Americas
    CatalogEntry::new("Honolulu", "Pacific/Honolulu", 21.31, -157.86),
    CatalogEntry::new("Anchorage", "America/Anchorage", 61.22, -149.90),
    CatalogEntry::new("Los Angeles", "America/Los_Angeles", 34.05, -118.24),
    CatalogEntry::new("Denver", "America/Denver", 39.74, -104.99),
    CatalogEntry::new("Chicago", "America/Chicago", 41.88, -87.63),
    CatalogEntry::new("New York", "America/New_York", 40.71, -74.01),
    CatalogEntry::new("Mexico City", "America/Mexico_City", 19.43, -99.13),
    CatalogEntry::new("São Paulo", "America/Sao_Paulo", -23.55, -46.63),
    CatalogEntry::new("Buenos Aires", "America/Argentina/Buenos_Aires", -34.60, -58.38),
    // Europe & Africa
    CatalogEntry::new("London", "Europe/London", 51.51, -0.13),
    CatalogEntry::new("Paris", "Europe/Paris", 48.86, 2.35),
    CatalogEntry::new("Berlin", "Europe/Berlin", 52.52, 13.40),
    CatalogEntry::new("Moscow", "Europe/Moscow", 55.76, 37.62),
    CatalogEntry::new("Cairo", "Africa/Cairo", 30.04, 31.24),
    CatalogEntry::new("Lagos", "Africa/Lagos", 6.52, 3.38),
    CatalogEntry::new("Johannesburg", "Africa/Johannesburg", -26.20, 28.05),
    // Asia & Middle East
    CatalogEntry::new("Dubai", "Asia/Dubai", 25.20, 55.27),
    CatalogEntry::new("Mumbai", "Asia/Kolkata", 19.08, 72.88),
    CatalogEntry::new("Bangkok", "Asia/Bangkok", 13.76, 100.50),
    CatalogEntry::new("Singapore", "Asia/Singapore", 1.35, 103.82),
    CatalogEntry::new("Hong Kong", "Asia/Hong_Kong", 22.32, 114.17),
    CatalogEntry::new("Shanghai", "Asia/Shanghai", 31.23, 121.47),
    CatalogEntry::new("Tokyo", "Asia/Tokyo", 35.68, 139.69),
    // Oceania
    CatalogEntry::new("Sydney", "Australia/Sydney", -33.87, 151.21),
    CatalogEntry::new("Auckland", "Pacific/Auckland", -36.85, 174.76),
];

/// Clocks shown when the application starts.
pub const DEFAULT_ZONES: [(&str, &str); 3] = [
    ("New York", "America/New_York"),
    ("London", "Europe/London"),
    ("Tokyo", "Asia/Tokyo"),
];

/// Looks up a catalog entry by its display name and zone id.
pub fn find(display_name: &str, zone_id: &str) -> Option<&'static CatalogEntry> {
    CATALOG
        .iter()
        .find(|e| e.display_name == display_name && e.zone_id == zone_id)
}

/// Case-insensitive substring search over display names and zone ids, in catalog order.
pub fn search(query: &str) -> Vec<&'static CatalogEntry> {
    let needle = query.trim().to_lowercase();
    CATALOG
        .iter()
        .filter(|e| {
            needle.is_empty()
                || e.display_name.to_lowercase().contains(&needle)
                || e.zone_id.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Tz;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_zone_ids_are_valid() {
        for entry in CATALOG.iter() {
            assert!(
                entry.zone_id.parse::<Tz>().is_ok(),
                "catalog zone {} does not resolve",
                entry.zone_id
            );
        }
    }

    #[test]
    fn test_catalog_display_names_unique() {
        let names: HashSet<_> = CATALOG.iter().map(|e| e.display_name).collect();
        assert_eq!(names.len(), CATALOG.len());
    }

    #[test]
    fn test_defaults_come_from_catalog() {
        for (name, zone) in DEFAULT_ZONES {
            assert!(find(name, zone).is_some(), "{name} missing from catalog");
        }
    }

    #[test]
    fn test_search() {
        assert_eq!(search("").len(), CATALOG.len());
        let asia: Vec<_> = search("asia/").iter().map(|e| e.display_name).collect();
        assert!(asia.contains(&"Tokyo"));
        assert!(!asia.contains(&"London"));
        assert_eq!(search("LONDON").len(), 1);
    }
}
