//! Card visuals: the list of clocks with full time and date.

use crate::format::ZoneReading;
use crate::registry::RegistryListener;
use crate::zone::{TimeZoneEntry, ZoneKey};

/// One clock card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub key: ZoneKey,
    pub display_name: String,
    pub zone_id: String,
    pub time: String,
    pub date: String,
    pub utc_offset: String,
}

impl Card {
    fn apply(&mut self, reading: &ZoneReading) {
        self.time.clone_from(&reading.card_time);
        self.date.clone_from(&reading.card_date);
        self.utc_offset.clone_from(&reading.utc_offset);
    }
}

/// Cards in the order their clocks were added.
#[derive(Debug, Clone, Default)]
pub struct CardList {
    cards: Vec<Card>,
}

impl CardList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, key: &ZoneKey) -> Option<&Card> {
        self.cards.iter().find(|c| &c.key == key)
    }

    fn get_mut(&mut self, key: &ZoneKey) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| &c.key == key)
    }
}

impl RegistryListener for CardList {
    fn entry_added(&mut self, entry: &TimeZoneEntry, reading: &ZoneReading) {
        let key = entry.key();
        if let Some(card) = self.get_mut(&key) {
            card.apply(reading);
            return;
        }
        let mut card = Card {
            key,
            display_name: entry.display_name().to_string(),
            zone_id: entry.zone_id().to_string(),
            time: String::new(),
            date: String::new(),
            utc_offset: String::new(),
        };
        card.apply(reading);
        self.cards.push(card);
    }

    fn entry_removed(&mut self, entry: &TimeZoneEntry) {
        let key = entry.key();
        self.cards.retain(|c| c.key != key);
    }

    fn cleared(&mut self) {
        self.cards.clear();
    }

    fn entry_refreshed(&mut self, entry: &TimeZoneEntry, reading: &ZoneReading) {
        if let Some(card) = self.get_mut(&entry.key()) {
            card.apply(reading);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::format_reading;
    use chrono::{TimeZone, Utc};

    fn reading(zone: &str, second: u32) -> ZoneReading {
        format_reading(zone, Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, second).unwrap()).unwrap()
    }

    #[test]
    fn test_add_refresh_remove() {
        let mut cards = CardList::new();
        let paris = TimeZoneEntry::new("Paris", "Europe/Paris");

        cards.entry_added(&paris, &reading("Europe/Paris", 0));
        assert_eq!(cards.len(), 1);
        assert_eq!(cards.cards()[0].time, "12:59:00 AM");
        assert_eq!(cards.cards()[0].date, "Thursday, January 1, 2026");

        cards.entry_refreshed(&paris, &reading("Europe/Paris", 30));
        assert_eq!(cards.get(&paris.key()).unwrap().time, "12:59:30 AM");

        cards.entry_removed(&paris);
        assert!(cards.is_empty());
    }

    #[test]
    fn test_refresh_of_unknown_key_creates_nothing() {
        let mut cards = CardList::new();
        let lagos = TimeZoneEntry::new("Lagos", "Africa/Lagos");
        cards.entry_refreshed(&lagos, &reading("Africa/Lagos", 0));
        assert!(cards.is_empty());
    }
}
