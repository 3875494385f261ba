//! Presentation models kept in step with the registry.
//!
//! Each surface is a [`RegistryListener`](crate::registry::RegistryListener)
//! holding render-ready data with no UI toolkit types, so its bookkeeping can
//! be tested without a window:
//! - Card list (one card per clock, with time and date)
//! - Map overlay (one marker per clock, positioned on an equirectangular map)
//! - Selector highlights (which picker/map regions show as active)

mod card_list;
mod map_overlay;
mod highlights;

pub use card_list::{Card, CardList};
pub use map_overlay::{MapOverlay, MapPosition, Marker};
pub use highlights::SelectorHighlights;
