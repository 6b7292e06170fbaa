//! Centralized constants for the property editor
//!
//! Defaults that settings can override live here alongside fixed layout
//! sizes, so the widgets and the settings file agree on them.

/// Defaults for the list and widgets (overridable through `EditorSettings`)
pub mod defaults {
    /// Debounce window for color picker write-back, in milliseconds
    pub const COLOR_DEBOUNCE_MS: u64 = 200;
    /// Height estimate for rows that have not been measured yet
    pub const ROW_HEIGHT: f32 = 100.0;
    /// Height of the virtualized property list
    pub const LIST_HEIGHT: f32 = 570.0;
    pub const UI_SCALE: f32 = 1.0;
}

/// Layout sizes of the property rows
pub mod sizes {
    /// Width of the label column in the property editor grid
    pub const LABEL_WIDTH: f32 = 100.0;
    /// Padding inside a property row frame
    pub const ROW_PADDING: i8 = 8;
    /// Vertical gap kept between rows
    pub const ROW_GAP: f32 = 8.0;
    pub const NUMBER_FIELD_WIDTH: f32 = 64.0;
}

/// Drag speeds of numeric inputs, following the input steps of the form
pub mod steps {
    pub const DEFAULT: f64 = 0.01;
    pub const COLOR_CHANNEL: f64 = 1.0;
    pub const ALPHA: f64 = 0.01;
}
