//! Active-state highlighting of the selectors (picker rows and map regions).

use crate::format::ZoneReading;
use crate::registry::RegistryListener;
use crate::zone::TimeZoneEntry;
use std::collections::BTreeMap;

/// Display names whose selector is currently shown as active.
///
/// Several clocks may share a display name with different zones; the name
/// stays highlighted until the last of them is removed.
#[derive(Debug, Clone, Default)]
pub struct SelectorHighlights {
    active: BTreeMap<String, usize>,
}

impl SelectorHighlights {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_highlighted(&self, display_name: &str) -> bool {
        self.active.contains_key(display_name)
    }

    /// Number of highlighted display names.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

impl RegistryListener for SelectorHighlights {
    fn entry_added(&mut self, entry: &TimeZoneEntry, _reading: &ZoneReading) {
        *self.active.entry(entry.display_name().to_string()).or_insert(0) += 1;
    }

    fn entry_removed(&mut self, entry: &TimeZoneEntry) {
        if let Some(count) = self.active.get_mut(entry.display_name()) {
            *count -= 1;
            if *count == 0 {
                self.active.remove(entry.display_name());
            }
        }
    }

    fn cleared(&mut self) {
        self.active.clear();
    }

    fn entry_refreshed(&mut self, _entry: &TimeZoneEntry, _reading: &ZoneReading) {}
}
