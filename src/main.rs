//! Main binary for running the property editor standalone on a sample
//! material.

use bevy::prelude::*;
use bevy_mate_editor::{MateEditorPlugin, MateForm, Material};

const SAMPLE_MATERIAL: &str = include_str!("../assets/materials/sample.ron");

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Bevy Mate Editor".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(MateEditorPlugin::default())
        .add_systems(Startup, (spawn_camera, load_sample_material))
        .run();
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn load_sample_material(mut form: ResMut<MateForm>) {
    match Material::from_ron(SAMPLE_MATERIAL) {
        Ok(material) => {
            form.load_material(&material);
            info!(
                "Loaded sample material '{}' with {} properties",
                material.name,
                form.len()
            );
        }
        Err(e) => error!("Failed to parse sample material: {}", e),
    }
}
