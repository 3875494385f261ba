//! UI layout state management.

use serde::{Deserialize, Serialize};

/// Layout preferences persisted between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutPrefs {
    /// Whether the world map is shown next to the cards
    pub show_map: bool,
    /// Default width of the card panel when the map is shown
    pub card_panel_width: f32,
}

impl Default for LayoutPrefs {
    fn default() -> Self {
        Self {
            show_map: true,
            card_panel_width: 340.0,
        }
    }
}

/// State related to UI layout plus the transient status line.
#[derive(Debug, Clone, Default)]
pub struct LayoutState {
    prefs: LayoutPrefs,
    /// Message shown under the header (e.g. a rejected clock)
    status: Option<String>,
}

impl LayoutState {
    pub fn with_prefs(prefs: LayoutPrefs) -> Self {
        Self { prefs, status: None }
    }

    pub fn prefs(&self) -> LayoutPrefs {
        self.prefs.clone()
    }

    pub fn show_map(&self) -> bool {
        self.prefs.show_map
    }

    pub fn show_map_mut(&mut self) -> &mut bool {
        &mut self.prefs.show_map
    }

    pub fn card_panel_width(&self) -> f32 {
        self.prefs.card_panel_width
    }

    pub fn set_card_panel_width(&mut self, width: f32) {
        self.prefs.card_panel_width = width;
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, message: String) {
        self.status = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }
}
