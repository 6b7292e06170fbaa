use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use crate::form::MateForm;
use crate::locale::LocalePlugin;
use crate::settings::{EditorSettings, SettingsPlugin};
use crate::ui::UiPlugin;

/// Main plugin that bundles the property editor.
///
/// Adds `EguiPlugin`; apps that already add it should use
/// [`crate::ui::MatePropertiesPlugin`] together with [`SettingsPlugin`] and
/// [`LocalePlugin`] instead.
#[derive(Default)]
pub struct MateEditorPlugin {
    /// Settings to use instead of the user's settings file
    pub settings: Option<EditorSettings>,
}

impl Plugin for MateEditorPlugin {
    fn build(&self, app: &mut App) {
        app
            // Third-party plugins
            .add_plugins(EguiPlugin::default())
            // Editor core
            .add_plugins(SettingsPlugin {
                settings: self.settings.clone(),
            })
            .add_plugins(LocalePlugin)
            .init_resource::<MateForm>()
            // UI
            .add_plugins(UiPlugin);
    }
}
