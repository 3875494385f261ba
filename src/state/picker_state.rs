//! Catalog picker window state.

/// State of the "Add clock" picker.
#[derive(Debug, Clone, Default)]
pub struct PickerState {
    open: bool,
    query: String,
    /// Set when the picker opens so the search field grabs focus once
    focus_pending: bool,
}

impl PickerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut String {
        &mut self.query
    }

    /// Opens the picker with an empty search.
    pub fn open(&mut self) {
        if !self.open {
            self.open = true;
            self.query.clear();
            self.focus_pending = true;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
        self.focus_pending = false;
    }

    /// Returns true once after each `open()`.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_pending)
    }
}
