//! # Bevy Mate Editor
//!
//! An egui property list editor for material-like assets, as a Bevy plugin.
//!
//! ## Quick Start
//!
//! Insert the material to edit as a [`MateForm`] and add the plugin:
//!
//! ```no_run
//! use bevy::prelude::*;
//! use bevy_mate_editor::{MateEditorPlugin, MateForm, Material};
//!
//! fn main() {
//!     let material = Material::from_ron("(name: \"skin\")").unwrap_or_default();
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .insert_resource(MateForm::from_material(&material))
//!         .add_plugins(MateEditorPlugin::default())
//!         .run();
//! }
//! ```
//!
//! ## Property rows
//!
//! Each row is shown with the inputs its `propType` (and `subTag` for
//! textures) calls for. Rows are grouped under one header per type, in the
//! order types first appear, and only rows inside the scroll viewport are
//! laid out.
//!
//! Color rows get a picker next to the numeric R/G/B/A inputs. Picker edits
//! are shown immediately and written to the form once the picker has been
//! still for `color_debounce_ms` (200 ms by default).
//!
//! ## Settings
//!
//! `settings.ron` in the user's config directory (`bevy_mate_editor/`) can
//! override UI scale, debounce window, row height estimate, list height and
//! a label override file. See [`EditorSettings`].

pub mod constants;
pub mod debounce;
pub mod form;
pub mod locale;
pub mod settings;
pub mod ui;

mod plugin;

// Re-export the main plugin and configuration
pub use plugin::MateEditorPlugin;
pub use settings::{EditorSettings, SettingsPlugin};

// Re-export form and locale types
pub use form::{FieldPath, FieldWatcher, MateForm};
pub use locale::{Locale, LocalePlugin};

// Re-export widgets
pub use ui::{
    ColorSync, ColorSyncStates, MatePropertiesPlugin, PropertyListView, RowHeights,
    draw_property_editor, draw_property_list,
};

// Re-export the data model
pub use mate_model::{
    Field, FieldValue, Keyword, Material, MaterialProperty, PackedColor, PropType, Property,
    PropertyFilter, PropertyKind, RenderRow, SubTag,
};
