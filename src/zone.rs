//! Time zone entries and their registry keys.

use std::fmt;

/// Uniqueness key of a [`TimeZoneEntry`]: the display name followed by the zone id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZoneKey(String);

impl ZoneKey {
    pub fn new(display_name: &str, zone_id: &str) -> Self {
        let mut key = String::with_capacity(display_name.len() + zone_id.len());
        key.push_str(display_name);
        key.push_str(zone_id);
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZoneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A clock shown to the user: a human label bound to an IANA zone identifier.
///
/// Two entries with the same label but different zone ids are distinct clocks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimeZoneEntry {
    display_name: String,
    zone_id: String,
}

impl TimeZoneEntry {
    pub fn new(display_name: impl Into<String>, zone_id: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            zone_id: zone_id.into(),
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn zone_id(&self) -> &str {
        &self.zone_id
    }

    pub fn key(&self) -> ZoneKey {
        ZoneKey::new(&self.display_name, &self.zone_id)
    }

    /// Parses a `"Name=Zone/Id"` pair as accepted on the command line.
    pub fn parse_pair(pair: &str) -> Option<Self> {
        let (name, zone) = pair.split_once('=')?;
        let (name, zone) = (name.trim(), zone.trim());
        if name.is_empty() || zone.is_empty() {
            return None;
        }
        Some(Self::new(name, zone))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_concatenates_name_and_zone() {
        let entry = TimeZoneEntry::new("Tokyo", "Asia/Tokyo");
        assert_eq!(entry.key().as_str(), "TokyoAsia/Tokyo");
    }

    #[test]
    fn test_same_name_different_zone_is_distinct() {
        let a = TimeZoneEntry::new("Portland", "America/Los_Angeles");
        let b = TimeZoneEntry::new("Portland", "America/New_York");
        assert_ne!(a.key(), b.key());
    }

    #[test]
    fn test_parse_pair() {
        let entry = TimeZoneEntry::parse_pair("New York = America/New_York").unwrap();
        assert_eq!(entry.display_name(), "New York");
        assert_eq!(entry.zone_id(), "America/New_York");

        assert!(TimeZoneEntry::parse_pair("Tokyo").is_none());
        assert!(TimeZoneEntry::parse_pair("=Asia/Tokyo").is_none());
        assert!(TimeZoneEntry::parse_pair("Tokyo=").is_none());
    }
}
