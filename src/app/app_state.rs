//! Centralized application state for the world clock.
//!
//! The registry is the only owner of the active clocks. The three
//! presentation surfaces are shared with it as listeners, so the panels can
//! read them while the registry keeps them current.

use crate::state::{LayoutPrefs, LayoutState, PickerState, ThemeState};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use worldclock::{CardList, MapOverlay, SelectorHighlights, TimeZoneRegistry, Waker};

/// Main application state composed of focused state components.
pub struct AppState {
    /// Active clocks and the refresh loop
    pub registry: TimeZoneRegistry,

    // ===== Presentation Surfaces (registry listeners) =====
    /// Card list model
    pub cards: Rc<RefCell<CardList>>,
    /// Map marker model
    pub map: Rc<RefCell<MapOverlay>>,
    /// Picker and map region highlight model
    pub highlights: Rc<RefCell<SelectorHighlights>>,

    // ===== UI State =====
    /// Catalog picker window
    pub picker: PickerState,
    /// Theme and styling state
    pub theme: ThemeState,
    /// UI layout state
    pub layout: LayoutState,
}

impl AppState {
    /// Creates the state with an empty registry whose ticks wake `ctx`.
    pub fn new(ctx: &egui::Context, theme_name: String, layout: LayoutPrefs) -> Self {
        let repaint_ctx = ctx.clone();
        let waker: Waker = Arc::new(move || repaint_ctx.request_repaint());
        Self::with_registry(TimeZoneRegistry::new().with_waker(waker), theme_name, layout)
    }

    /// Wires the presentation surfaces to `registry`.
    pub fn with_registry(mut registry: TimeZoneRegistry, theme_name: String, layout: LayoutPrefs) -> Self {
        let cards = Rc::new(RefCell::new(CardList::new()));
        let map = Rc::new(RefCell::new(MapOverlay::new()));
        let highlights = Rc::new(RefCell::new(SelectorHighlights::new()));

        registry.subscribe(Box::new(Rc::clone(&cards)));
        registry.subscribe(Box::new(Rc::clone(&map)));
        registry.subscribe(Box::new(Rc::clone(&highlights)));

        Self {
            registry,
            cards,
            map,
            highlights,
            picker: PickerState::new(),
            theme: ThemeState::with_theme(theme_name),
            layout: LayoutState::with_prefs(layout),
        }
    }
}
