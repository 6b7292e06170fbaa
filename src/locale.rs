//! Display labels for type tags, field keys and editor captions.
//!
//! Labels come from a built-in English table. A RON map named by
//! `EditorSettings::locale_file` can override any of them; keys with no entry
//! fall back to the key itself.

use bevy::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use mate_model::{Field, PropType, SubTag};

use crate::settings::EditorSettings;

const ENGLISH: &[(&str, &str)] = &[
    // Type tags
    ("tex", "Texture"),
    ("col", "Color"),
    ("vec", "Vector"),
    ("f", "Float"),
    ("range", "Range"),
    ("tex_offset", "Texture offset"),
    ("tex_scale", "Texture scale"),
    ("keyword", "Keyword"),
    ("unknown", "Unknown"),
    // Sub-tags
    ("tex2d", "2D texture"),
    ("cube", "Cube texture"),
    ("texRT", "Render texture"),
    ("null", "Empty"),
    // Fields
    ("propType", "Property type"),
    ("propName", "Property name"),
    ("subTag", "Sub-tag"),
    ("tex2dName", "Texture name"),
    ("tex2dPath", "Texture path"),
    ("offsetX", "Offset X"),
    ("offsetY", "Offset Y"),
    ("scaleX", "Scale X"),
    ("scaleY", "Scale Y"),
    ("discardedStr1", "Unknown text 1"),
    ("discardedStr2", "Unknown text 2"),
    ("colorR", "R"),
    ("colorG", "G"),
    ("colorB", "B"),
    ("colorA", "A"),
    ("vec0", "X"),
    ("vec1", "Y"),
    ("vec2", "Z"),
    ("vec3", "W"),
    ("number", "Value"),
    // Captions
    ("color_picker", "Color picker"),
    ("keyword_key", "Keyword"),
    ("keyword_value", "Enabled"),
    ("add_keyword", "Add keyword"),
    ("add_property", "Add property"),
    ("remove_property", "Remove property"),
    ("copy_ron", "Copy as RON"),
    ("filter_all", "All types"),
    ("filter_name", "Search name"),
    ("unset", "(unset)"),
    ("no_properties", "No properties"),
    ("properties_title", "Material Properties"),
];

#[derive(Resource, Debug, Clone)]
pub struct Locale {
    labels: HashMap<String, String>,
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

impl Locale {
    pub fn english() -> Self {
        Self {
            labels: ENGLISH
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Label for `key`, or the key itself when there is none.
    pub fn label<'a>(&'a self, key: &'a str) -> &'a str {
        self.labels.get(key).map(String::as_str).unwrap_or(key)
    }

    pub fn prop_type(&self, prop_type: PropType) -> &str {
        self.label(prop_type.tag())
    }

    pub fn sub_tag(&self, sub_tag: SubTag) -> &str {
        self.label(sub_tag.tag())
    }

    pub fn field(&self, field: Field) -> &str {
        self.label(field.key())
    }

    /// Merge a RON `{ "key": "label" }` map over the current labels.
    pub fn merge_ron(&mut self, source: &str) -> Result<usize, ron::error::SpannedError> {
        let overrides: HashMap<String, String> = ron::from_str(source)?;
        let count = overrides.len();
        self.labels.extend(overrides);
        Ok(count)
    }

    fn load_overrides(&mut self, path: &Path) {
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                error!("Failed to read locale file {:?}: {}", path, e);
                return;
            }
        };
        match self.merge_ron(&source) {
            Ok(count) => info!("Loaded {} label overrides from {:?}", count, path),
            Err(e) => error!("Failed to parse locale file {:?}: {}", path, e),
        }
    }
}

pub struct LocalePlugin;

impl Plugin for LocalePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Locale>()
            .add_systems(Startup, load_locale_overrides);
    }
}

fn load_locale_overrides(settings: Res<EditorSettings>, mut locale: ResMut<Locale>) {
    if let Some(path) = &settings.locale_file {
        locale.load_overrides(path);
    }
}
