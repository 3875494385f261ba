//! Input handling subsystem for UI interactions.
//!
//! This module contains all input handling logic:
//! - Keyboard shortcuts

pub mod shortcuts;
