//! Application-level coordination of user actions.
//!
//! Every clock mutation coming from the UI (picker, map regions, card
//! buttons, shortcuts) goes through here so status reporting stays in one
//! place.

use crate::app::AppState;

/// Applies user actions to the clock registry.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Adds a clock. A zone that cannot be displayed leaves a status message.
    pub fn add_zone(state: &mut AppState, display_name: &str, zone_id: &str) {
        if state.registry.contains(display_name, zone_id) {
            return;
        }
        if state.registry.add(display_name, zone_id) {
            state.layout.clear_status();
        } else {
            state
                .layout
                .set_status(format!("Cannot show {}: unknown time zone '{}'", display_name, zone_id));
        }
    }

    /// Removes a clock; unknown clocks are ignored.
    pub fn remove_zone(state: &mut AppState, display_name: &str, zone_id: &str) {
        state.registry.remove(display_name, zone_id);
    }

    /// Removes every clock.
    pub fn clear_all(state: &mut AppState) {
        state.registry.clear();
        state.layout.clear_status();
    }

    /// Pauses or resumes the one-second refresh.
    pub fn toggle_refresh(state: &mut AppState) {
        if state.registry.is_running() {
            state.registry.stop();
        } else {
            state.registry.start();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LayoutPrefs;
    use chrono::{TimeZone, Utc};
    use worldclock::{ManualClock, TimeZoneRegistry};

    fn state() -> AppState {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap());
        let registry = TimeZoneRegistry::with_time_source(Box::new(clock));
        AppState::with_registry(registry, "Dark".to_string(), LayoutPrefs::default())
    }

    #[test]
    fn test_add_updates_every_surface() {
        let mut state = state();
        ApplicationCoordinator::add_zone(&mut state, "Berlin", "Europe/Berlin");

        assert_eq!(state.cards.borrow().len(), 1);
        assert_eq!(state.map.borrow().len(), 1);
        assert!(state.highlights.borrow().is_highlighted("Berlin"));
        assert!(state.layout.status().is_none());
    }

    #[test]
    fn test_unknown_zone_sets_status() {
        let mut state = state();
        ApplicationCoordinator::add_zone(&mut state, "Gotham", "America/Gotham");

        assert!(state.registry.is_empty());
        assert!(state.cards.borrow().is_empty());
        assert!(state.layout.status().unwrap().contains("America/Gotham"));
    }

    #[test]
    fn test_remove_clears_highlight() {
        let mut state = state();
        ApplicationCoordinator::add_zone(&mut state, "Cairo", "Africa/Cairo");
        ApplicationCoordinator::remove_zone(&mut state, "Cairo", "Africa/Cairo");

        assert!(state.cards.borrow().is_empty());
        assert!(state.map.borrow().is_empty());
        assert!(!state.highlights.borrow().is_highlighted("Cairo"));
    }

    #[test]
    fn test_toggle_refresh() {
        let mut state = state();
        ApplicationCoordinator::toggle_refresh(&mut state);
        assert!(state.registry.is_running());
        ApplicationCoordinator::toggle_refresh(&mut state);
        assert!(!state.registry.is_running());
    }
}
