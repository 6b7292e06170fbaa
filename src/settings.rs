use bevy::prelude::*;
use bevy_egui::{EguiContext, EguiContextSettings};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::defaults;

/// Editor settings, read from the user's config directory
#[derive(Resource, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EditorSettings {
    /// UI scale factor (1.0 = default)
    #[serde(default = "default_ui_scale")]
    pub ui_scale: f32,
    /// Quiet period before color picker edits are written to the form
    #[serde(default = "default_color_debounce_ms")]
    pub color_debounce_ms: u64,
    /// Height estimate for property rows that have not been measured yet
    #[serde(default = "default_row_height")]
    pub default_row_height: f32,
    /// Height of the property list viewport
    #[serde(default = "default_list_height")]
    pub list_height: f32,
    /// RON map of label overrides, see `Locale`
    #[serde(default)]
    pub locale_file: Option<PathBuf>,
}

fn default_ui_scale() -> f32 {
    defaults::UI_SCALE
}

fn default_color_debounce_ms() -> u64 {
    defaults::COLOR_DEBOUNCE_MS
}

fn default_row_height() -> f32 {
    defaults::ROW_HEIGHT
}

fn default_list_height() -> f32 {
    defaults::LIST_HEIGHT
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            ui_scale: defaults::UI_SCALE,
            color_debounce_ms: defaults::COLOR_DEBOUNCE_MS,
            default_row_height: defaults::ROW_HEIGHT,
            list_height: defaults::LIST_HEIGHT,
            locale_file: None,
        }
    }
}

impl EditorSettings {
    /// Get the settings file path
    fn file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push("bevy_mate_editor");
            p.push("settings.ron");
            p
        })
    }

    /// Load settings from disk, or return defaults if missing or malformed
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };

        match fs::read_to_string(&path) {
            Ok(content) => Self::from_ron(&content).unwrap_or_else(|e| {
                warn!("Ignoring malformed settings {:?}: {}", path, e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn from_ron(content: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(content)
    }

    pub fn color_debounce(&self) -> Duration {
        Duration::from_millis(self.color_debounce_ms)
    }
}

pub struct SettingsPlugin {
    pub settings: Option<EditorSettings>,
}

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        let settings = self.settings.clone().unwrap_or_else(EditorSettings::load);
        info!(
            "Property editor settings: debounce {}ms, row estimate {}px",
            settings.color_debounce_ms, settings.default_row_height
        );
        app.insert_resource(settings)
            .add_systems(Update, apply_ui_scale);
    }
}

/// Apply UI scale to egui
fn apply_ui_scale(
    settings: Res<EditorSettings>,
    mut query: Query<&mut EguiContextSettings, With<EguiContext>>,
) {
    for mut ctx_settings in &mut query {
        if ctx_settings.scale_factor != settings.ui_scale {
            ctx_settings.scale_factor = settings.ui_scale;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let settings = EditorSettings::from_ron("(color_debounce_ms: 50)").unwrap();
        assert_eq!(settings.color_debounce(), Duration::from_millis(50));
        assert_eq!(settings.default_row_height, defaults::ROW_HEIGHT);
        assert_eq!(settings.list_height, defaults::LIST_HEIGHT);
        assert_eq!(settings.locale_file, None);
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(EditorSettings::from_ron("(color_debounce_ms: \"soon\")").is_err());
    }
}
