//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the world clock:
//! - Header panel (add/clear controls, refresh toggle, map toggle, theme selector)
//! - Card panel (one card per clock)
//! - Map panel (world map with markers and clickable city regions)
//! - Picker window (searchable zone catalog)
//! - Status bar (clock count, refresh state, memory usage)
//! - Panel manager (panel orchestration and layout)
//! - Input handling (keyboard shortcuts)

pub mod header;
pub mod card_panel;
pub mod map_panel;
pub mod picker;
pub mod status_bar;
pub mod panel_manager;
pub mod input;
