pub mod zone;
pub mod catalog;
pub mod format;
pub mod time_source;
pub mod ticker;
pub mod registry;
pub mod surfaces;
pub mod theme;
pub mod logging;
pub mod mailmerge;

// Export clock registry
pub use zone::{TimeZoneEntry, ZoneKey};
pub use catalog::{CatalogEntry, CATALOG, DEFAULT_ZONES};
pub use format::{FormatError, ZoneReading, format_reading};
pub use time_source::{TimeSource, SystemClock, ManualClock};
pub use ticker::{RefreshTicker, Waker};
pub use registry::{TimeZoneRegistry, RegistryListener, REFRESH_INTERVAL};

// Export presentation surfaces
pub use surfaces::{CardList, Card, MapOverlay, Marker, MapPosition, SelectorHighlights};

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, with_alpha};
