mod color_sync;
mod panel;
mod property_editor;
pub mod theme;
mod virtual_list;

pub use color_sync::*;
pub use panel::*;
pub use property_editor::*;
pub use virtual_list::*;

use bevy::prelude::*;

use theme::ThemePlugin;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(ThemePlugin)
            .add_plugins(MatePropertiesPlugin);
    }
}
