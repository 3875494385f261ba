//! Global keyboard shortcuts.
//!
//! - `Ctrl+K` (`Cmd+K` on macOS) opens the picker
//! - `Ctrl+L` (`Cmd+L`) clears all clocks
//! - `Escape` closes the picker

use eframe::egui;
use egui::{Key, Modifiers};

/// Action requested by a shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    OpenPicker,
    ClearAll,
    ClosePicker,
}

const BINDINGS: [(Modifiers, Key, ShortcutAction); 3] = [
    (Modifiers::COMMAND, Key::K, ShortcutAction::OpenPicker),
    (Modifiers::COMMAND, Key::L, ShortcutAction::ClearAll),
    (Modifiers::NONE, Key::Escape, ShortcutAction::ClosePicker),
];

/// Consumes this frame's shortcut key presses and returns the requested actions.
///
/// Keys are consumed so focused text fields do not also receive them.
pub fn read_shortcuts(ctx: &egui::Context) -> Vec<ShortcutAction> {
    ctx.input_mut(|input| {
        BINDINGS
            .iter()
            .filter(|(modifiers, key, _)| input.consume_key(*modifiers, *key))
            .map(|(_, _, action)| *action)
            .collect()
    })
}
