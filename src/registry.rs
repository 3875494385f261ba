//! The set of displayed clocks and its refresh loop.
//!
//! [`TimeZoneRegistry`] owns the active entries and is their only mutator.
//! Presentation surfaces never touch the set directly: they subscribe as
//! [`RegistryListener`]s and create, update or destroy their visuals when the
//! registry notifies them. Keeping membership changes and visual changes in
//! the same call is what keeps every surface in step with the set.
//!
//! The registry is single-threaded. Periodic refresh is driven by a
//! [`RefreshTicker`] whose ticks are consumed on the owning thread via
//! [`TimeZoneRegistry::pump`].

use crate::catalog::DEFAULT_ZONES;
use crate::format::{format_reading, ZoneReading};
use crate::ticker::{RefreshTicker, Waker};
use crate::time_source::{SystemClock, TimeSource};
use crate::zone::{TimeZoneEntry, ZoneKey};
use chrono::{DateTime, Utc};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Interval between periodic refreshes.
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(1000);

/// Observer of registry changes.
pub trait RegistryListener {
    /// A new entry was inserted; `reading` is its freshly formatted clock text.
    fn entry_added(&mut self, entry: &TimeZoneEntry, reading: &ZoneReading);

    /// An entry was removed.
    fn entry_removed(&mut self, entry: &TimeZoneEntry);

    /// All entries were removed at once.
    fn cleared(&mut self);

    /// An existing entry has new clock text.
    fn entry_refreshed(&mut self, entry: &TimeZoneEntry, reading: &ZoneReading);
}

impl<T: RegistryListener> RegistryListener for Rc<RefCell<T>> {
    fn entry_added(&mut self, entry: &TimeZoneEntry, reading: &ZoneReading) {
        self.borrow_mut().entry_added(entry, reading);
    }

    fn entry_removed(&mut self, entry: &TimeZoneEntry) {
        self.borrow_mut().entry_removed(entry);
    }

    fn cleared(&mut self) {
        self.borrow_mut().cleared();
    }

    fn entry_refreshed(&mut self, entry: &TimeZoneEntry, reading: &ZoneReading) {
        self.borrow_mut().entry_refreshed(entry, reading);
    }
}

/// Registry of displayed clocks.
pub struct TimeZoneRegistry {
    /// Active entries in insertion order, unique by key
    entries: Vec<TimeZoneEntry>,
    listeners: Vec<Box<dyn RegistryListener>>,
    clock: Box<dyn TimeSource>,
    interval: Duration,
    waker: Option<Waker>,
    /// Present while the periodic refresh is running
    ticker: Option<RefreshTicker>,
    refresh_count: u64,
    last_refresh: Option<DateTime<Utc>>,
}

impl std::fmt::Debug for TimeZoneRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimeZoneRegistry")
            .field("entries", &self.entries)
            .field("listeners", &self.listeners.len())
            .field("running", &self.is_running())
            .field("refresh_count", &self.refresh_count)
            .finish_non_exhaustive()
    }
}

impl Default for TimeZoneRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeZoneRegistry {
    /// Creates an empty registry reading the system clock.
    pub fn new() -> Self {
        Self::with_time_source(Box::new(SystemClock))
    }

    /// Creates an empty registry reading the given clock.
    pub fn with_time_source(clock: Box<dyn TimeSource>) -> Self {
        Self {
            entries: Vec::new(),
            listeners: Vec::new(),
            clock,
            interval: REFRESH_INTERVAL,
            waker: None,
            ticker: None,
            refresh_count: 0,
            last_refresh: None,
        }
    }

    /// Overrides the refresh interval. Takes effect on the next `start()`.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Sets a callback run from the ticker thread after each tick, typically
    /// a repaint request for the host event loop.
    pub fn with_waker(mut self, waker: Waker) -> Self {
        self.waker = Some(waker);
        self
    }

    /// Registers a listener. Entries already present are not replayed.
    pub fn subscribe(&mut self, listener: Box<dyn RegistryListener>) {
        self.listeners.push(listener);
    }

    // ===== Queries =====

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Active entries in insertion order.
    pub fn entries(&self) -> &[TimeZoneEntry] {
        &self.entries
    }

    pub fn contains(&self, display_name: &str, zone_id: &str) -> bool {
        self.position(&ZoneKey::new(display_name, zone_id)).is_some()
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// Number of completed `refresh_all()` passes.
    pub fn refresh_count(&self) -> u64 {
        self.refresh_count
    }

    /// Instant used by the most recent refresh.
    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        self.last_refresh
    }

    fn position(&self, key: &ZoneKey) -> Option<usize> {
        self.entries.iter().position(|e| &e.key() == key)
    }

    // ===== Mutations =====

    /// Adds a clock. Returns true if it was inserted.
    ///
    /// Adding a pair that is already present does nothing. A zone id that
    /// cannot be formatted is logged and leaves the registry unchanged.
    pub fn add(&mut self, display_name: &str, zone_id: &str) -> bool {
        let entry = TimeZoneEntry::new(display_name, zone_id);
        if self.position(&entry.key()).is_some() {
            tracing::trace!(key = %entry.key(), "clock already displayed");
            return false;
        }

        let reading = match format_reading(zone_id, self.clock.now()) {
            Ok(reading) => reading,
            Err(e) => {
                tracing::warn!(display_name, zone_id, error = %e, "rejecting clock");
                return false;
            }
        };

        for listener in self.listeners.iter_mut() {
            listener.entry_added(&entry, &reading);
        }
        tracing::debug!(display_name, zone_id, "clock added");
        self.entries.push(entry);
        true
    }

    /// Inserts the default clocks.
    pub fn seed_defaults(&mut self) {
        for (name, zone) in DEFAULT_ZONES {
            self.add(name, zone);
        }
    }

    /// Removes a clock. Returns true if it was present.
    pub fn remove(&mut self, display_name: &str, zone_id: &str) -> bool {
        let Some(index) = self.position(&ZoneKey::new(display_name, zone_id)) else {
            return false;
        };

        let entry = self.entries.remove(index);
        for listener in self.listeners.iter_mut() {
            listener.entry_removed(&entry);
        }
        tracing::debug!(display_name, zone_id, "clock removed");
        true
    }

    /// Removes every clock.
    pub fn clear(&mut self) {
        let removed = self.entries.len();
        self.entries.clear();
        for listener in self.listeners.iter_mut() {
            listener.cleared();
        }
        tracing::debug!(removed, "clocks cleared");
    }

    // ===== Refresh loop =====

    /// Recomputes the clock text of every entry from a single instant.
    ///
    /// An entry that fails to format is skipped; the others still refresh.
    pub fn refresh_all(&mut self) {
        let now = self.clock.now();
        for entry in &self.entries {
            match format_reading(entry.zone_id(), now) {
                Ok(reading) => {
                    for listener in self.listeners.iter_mut() {
                        listener.entry_refreshed(entry, &reading);
                    }
                }
                Err(e) => {
                    tracing::warn!(key = %entry.key(), error = %e, "skipping clock during refresh");
                }
            }
        }
        self.refresh_count += 1;
        self.last_refresh = Some(now);
    }

    /// Refreshes once now, then once per interval until [`stop`](Self::stop).
    ///
    /// Calling this while already running does nothing.
    pub fn start(&mut self) {
        if self.ticker.is_some() {
            tracing::trace!("refresh loop already running");
            return;
        }
        self.refresh_all();
        self.ticker = Some(RefreshTicker::spawn(self.interval, self.waker.clone()));
        tracing::debug!(interval_ms = self.interval.as_millis() as u64, "refresh loop started");
    }

    /// Cancels the periodic refresh. Safe to call when not running.
    pub fn stop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
            tracing::debug!("refresh loop stopped");
        }
    }

    /// Consumes pending ticks and refreshes once if any arrived.
    ///
    /// Call from the host loop, e.g. once per frame. Returns true if a refresh ran.
    pub fn pump(&mut self) -> bool {
        let ticks = match &self.ticker {
            Some(ticker) => ticker.drain(),
            None => return false,
        };
        if ticks == 0 {
            return false;
        }
        if ticks > 1 {
            tracing::trace!(ticks, "coalescing missed ticks");
        }
        self.refresh_all();
        true
    }
}

impl Drop for TimeZoneRegistry {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_source::ManualClock;
    use chrono::{TimeDelta, TimeZone};

    #[derive(Default)]
    struct Recorder {
        added: Vec<ZoneKey>,
        removed: Vec<ZoneKey>,
        clears: usize,
        refreshed: Vec<(ZoneKey, String)>,
    }

    impl RegistryListener for Recorder {
        fn entry_added(&mut self, entry: &TimeZoneEntry, _reading: &ZoneReading) {
            self.added.push(entry.key());
        }

        fn entry_removed(&mut self, entry: &TimeZoneEntry) {
            self.removed.push(entry.key());
        }

        fn cleared(&mut self) {
            self.clears += 1;
        }

        fn entry_refreshed(&mut self, entry: &TimeZoneEntry, reading: &ZoneReading) {
            self.refreshed.push((entry.key(), reading.card_time.clone()));
        }
    }

    fn registry() -> (TimeZoneRegistry, ManualClock, Rc<RefCell<Recorder>>) {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 7, 10, 20, 48, 5).unwrap());
        let mut registry = TimeZoneRegistry::with_time_source(Box::new(clock.clone()));
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        registry.subscribe(Box::new(Rc::clone(&recorder)));
        (registry, clock, recorder)
    }

    #[test]
    fn test_add_notifies_listeners() {
        let (mut registry, _clock, recorder) = registry();
        assert!(registry.add("Tokyo", "Asia/Tokyo"));
        assert_eq!(registry.len(), 1);
        assert_eq!(recorder.borrow().added, vec![ZoneKey::new("Tokyo", "Asia/Tokyo")]);
    }

    #[test]
    fn test_duplicate_add_is_noop() {
        let (mut registry, _clock, recorder) = registry();
        assert!(registry.add("Tokyo", "Asia/Tokyo"));
        assert!(!registry.add("Tokyo", "Asia/Tokyo"));
        assert_eq!(registry.len(), 1);
        assert_eq!(recorder.borrow().added.len(), 1);
    }

    #[test]
    fn test_invalid_zone_is_not_inserted() {
        let (mut registry, _clock, recorder) = registry();
        assert!(!registry.add("Nowhere", "Not/AZone"));
        assert!(registry.is_empty());
        assert!(recorder.borrow().added.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let (mut registry, _clock, recorder) = registry();
        registry.add("London", "Europe/London");
        assert!(!registry.remove("London", "Europe/Paris"));
        assert_eq!(registry.len(), 1);
        assert!(recorder.borrow().removed.is_empty());
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let (mut registry, _clock, _recorder) = registry();
        registry.add("Sydney", "Australia/Sydney");
        registry.add("Cairo", "Africa/Cairo");
        registry.add("Denver", "America/Denver");
        registry.remove("Cairo", "Africa/Cairo");
        let names: Vec<_> = registry.entries().iter().map(|e| e.display_name()).collect();
        assert_eq!(names, vec!["Sydney", "Denver"]);
    }

    #[test]
    fn test_clear_notifies_once() {
        let (mut registry, _clock, recorder) = registry();
        registry.seed_defaults();
        assert_eq!(registry.len(), 3);
        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(recorder.borrow().clears, 1);
    }

    #[test]
    fn test_refresh_uses_current_instant() {
        let (mut registry, clock, recorder) = registry();
        registry.add("Tokyo", "Asia/Tokyo");

        registry.refresh_all();
        clock.advance(TimeDelta::seconds(1));
        registry.refresh_all();

        let recorder = recorder.borrow();
        let times: Vec<_> = recorder.refreshed.iter().map(|(_, t)| t.as_str()).collect();
        assert_eq!(times, vec!["05:48:05 AM", "05:48:06 AM"]);
        assert_eq!(registry.refresh_count(), 2);
        assert_eq!(registry.last_refresh(), Some(clock.now()));
    }

    #[test]
    fn test_refresh_isolates_bad_entry() {
        let (mut registry, _clock, recorder) = registry();
        registry.add("London", "Europe/London");
        // Only reachable by bypassing `add`, which rejects unknown zones
        registry.entries.insert(0, TimeZoneEntry::new("Atlantis", "Ocean/Atlantis"));
        registry.add("Tokyo", "Asia/Tokyo");

        registry.refresh_all();

        let recorder = recorder.borrow();
        let keys: Vec<_> = recorder.refreshed.iter().map(|(k, _)| k.clone()).collect();
        assert_eq!(
            keys,
            vec![ZoneKey::new("London", "Europe/London"), ZoneKey::new("Tokyo", "Asia/Tokyo")]
        );
        assert_eq!(registry.refresh_count(), 1);
    }

    #[test]
    fn test_start_is_idempotent() {
        let (mut registry, _clock, _recorder) = registry();
        registry.start();
        registry.start();
        assert!(registry.is_running());
        assert_eq!(registry.refresh_count(), 1);
        registry.stop();
        registry.stop();
        assert!(!registry.is_running());
    }

    #[test]
    fn test_pump_when_stopped_does_nothing() {
        let (mut registry, _clock, _recorder) = registry();
        assert!(!registry.pump());
        assert_eq!(registry.refresh_count(), 0);
    }
}
