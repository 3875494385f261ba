//! State management modules for the world clock window.
//!
//! This module contains state-only logic (no rendering):
//! - Picker state (open/closed, search query)
//! - Theme state (theme manager, current theme)
//! - Layout state (map visibility, panel width, status line)

mod picker_state;
mod theme_state;
mod layout_state;

pub use picker_state::PickerState;
pub use theme_state::ThemeState;
pub use layout_state::{LayoutPrefs, LayoutState};
