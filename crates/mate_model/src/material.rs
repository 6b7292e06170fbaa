//! Typed material model the flat form rows convert to and from.

use serde::{Deserialize, Serialize};

use crate::property::{Keyword, PropType, Property, SubTag};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    pub name: String,
    pub shader_name: String,
    pub shader_filename: String,
    pub properties: Vec<MaterialProperty>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TexImage {
    pub name: String,
    pub path: String,
    pub offset: [f32; 2],
    pub scale: [f32; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TexSlot {
    Tex2d(TexImage),
    Cube(TexImage),
    RenderTarget {
        discarded_str1: String,
        discarded_str2: String,
    },
    Null,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MaterialProperty {
    Tex { name: String, tex: TexSlot },
    Col { name: String, color: [f32; 4] },
    Vec { name: String, vector: [f32; 4] },
    F { name: String, number: f32 },
    Range { name: String, number: f32 },
    TexOffset { name: String, offset: [f32; 2] },
    TexScale { name: String, scale: [f32; 2] },
    Keyword { name: String, keywords: Vec<Keyword> },
}

impl Material {
    pub fn from_ron(source: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(source)
    }

    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }
}

impl Property {
    /// Typed form of this row. Texture rows without a sub-tag and rows of
    /// unknown type have no typed form.
    pub fn to_material(&self) -> Option<MaterialProperty> {
        let name = self.prop_name.clone();
        let prop = match self.group_key() {
            PropType::Tex => {
                let tex = match self.sub_tag? {
                    SubTag::Tex2d => TexSlot::Tex2d(self.tex_image()),
                    SubTag::Cube => TexSlot::Cube(self.tex_image()),
                    SubTag::TexRt => TexSlot::RenderTarget {
                        discarded_str1: self.discarded_str1.clone(),
                        discarded_str2: self.discarded_str2.clone(),
                    },
                    SubTag::Null => TexSlot::Null,
                };
                MaterialProperty::Tex { name, tex }
            }
            PropType::Col => {
                let c = self.color_channels();
                MaterialProperty::Col {
                    name,
                    color: [c.r, c.g, c.b, c.a],
                }
            }
            PropType::Vec => MaterialProperty::Vec {
                name,
                vector: [self.vec0, self.vec1, self.vec2, self.vec3].map(|v| v.unwrap_or(0.0)),
            },
            PropType::F => MaterialProperty::F {
                name,
                number: self.number.unwrap_or(0.0),
            },
            PropType::Range => MaterialProperty::Range {
                name,
                number: self.number.unwrap_or(0.0),
            },
            PropType::TexOffset => MaterialProperty::TexOffset {
                name,
                offset: self.offset(),
            },
            PropType::TexScale => MaterialProperty::TexScale {
                name,
                scale: self.scale(),
            },
            PropType::Keyword => MaterialProperty::Keyword {
                name,
                keywords: self.keywords.clone(),
            },
            PropType::Unknown => return None,
        };
        Some(prop)
    }

    pub fn from_material(prop: &MaterialProperty) -> Self {
        match prop {
            MaterialProperty::Tex { name, tex } => {
                let mut row = Self::named(PropType::Tex, name);
                match tex {
                    TexSlot::Tex2d(image) => row.set_tex_image(SubTag::Tex2d, image),
                    TexSlot::Cube(image) => row.set_tex_image(SubTag::Cube, image),
                    TexSlot::RenderTarget {
                        discarded_str1,
                        discarded_str2,
                    } => {
                        row.sub_tag = Some(SubTag::TexRt);
                        row.discarded_str1 = discarded_str1.clone();
                        row.discarded_str2 = discarded_str2.clone();
                    }
                    TexSlot::Null => row.sub_tag = Some(SubTag::Null),
                }
                row
            }
            MaterialProperty::Col { name, color } => {
                let mut row = Self::named(PropType::Col, name);
                let [r, g, b, a] = color.map(Some);
                (row.color_r, row.color_g, row.color_b, row.color_a) = (r, g, b, a);
                row
            }
            MaterialProperty::Vec { name, vector } => {
                let mut row = Self::named(PropType::Vec, name);
                let [v0, v1, v2, v3] = vector.map(Some);
                (row.vec0, row.vec1, row.vec2, row.vec3) = (v0, v1, v2, v3);
                row
            }
            MaterialProperty::F { name, number } => {
                let mut row = Self::named(PropType::F, name);
                row.number = Some(*number);
                row
            }
            MaterialProperty::Range { name, number } => {
                let mut row = Self::named(PropType::Range, name);
                row.number = Some(*number);
                row
            }
            MaterialProperty::TexOffset { name, offset } => {
                let mut row = Self::named(PropType::TexOffset, name);
                row.offset_x = Some(offset[0]);
                row.offset_y = Some(offset[1]);
                row
            }
            MaterialProperty::TexScale { name, scale } => {
                let mut row = Self::named(PropType::TexScale, name);
                row.scale_x = Some(scale[0]);
                row.scale_y = Some(scale[1]);
                row
            }
            MaterialProperty::Keyword { name, keywords } => {
                let mut row = Self::named(PropType::Keyword, name);
                row.keywords = keywords.clone();
                row
            }
        }
    }

    fn named(prop_type: PropType, name: &str) -> Self {
        Self {
            prop_type: Some(prop_type),
            prop_name: name.to_string(),
            ..Default::default()
        }
    }

    fn offset(&self) -> [f32; 2] {
        [self.offset_x.unwrap_or(0.0), self.offset_y.unwrap_or(0.0)]
    }

    fn scale(&self) -> [f32; 2] {
        [self.scale_x.unwrap_or(1.0), self.scale_y.unwrap_or(1.0)]
    }

    fn tex_image(&self) -> TexImage {
        TexImage {
            name: self.tex2d_name.clone(),
            path: self.tex2d_path.clone(),
            offset: self.offset(),
            scale: self.scale(),
        }
    }

    fn set_tex_image(&mut self, sub_tag: SubTag, image: &TexImage) {
        self.sub_tag = Some(sub_tag);
        self.tex2d_name = image.name.clone();
        self.tex2d_path = image.path.clone();
        self.offset_x = Some(image.offset[0]);
        self.offset_y = Some(image.offset[1]);
        self.scale_x = Some(image.scale[0]);
        self.scale_y = Some(image.scale[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn texture_defaults_fill_unset_offset_and_scale() {
        let mut row = Property::new(PropType::Tex);
        row.prop_name = "_MainTex".into();
        row.sub_tag = Some(SubTag::Tex2d);
        row.tex2d_path = "assets/body.tex".into();
        row.offset_x = Some(0.25);

        let Some(MaterialProperty::Tex {
            tex: TexSlot::Tex2d(image),
            ..
        }) = row.to_material()
        else {
            panic!("expected a tex2d property");
        };
        assert_eq!(image.offset, [0.25, 0.0]);
        assert_eq!(image.scale, [1.0, 1.0]);
        assert_eq!(image.path, "assets/body.tex");
    }

    #[test]
    fn rows_without_typed_form() {
        assert_eq!(Property::new(PropType::Tex).to_material(), None);
        assert_eq!(Property::default().to_material(), None);
    }

    #[test]
    fn unset_color_exports_opaque_white() {
        let row = Property::new(PropType::Col);
        assert_eq!(
            row.to_material(),
            Some(MaterialProperty::Col {
                name: String::new(),
                color: [255.0, 255.0, 255.0, 1.0],
            })
        );
    }

    #[test]
    fn typed_properties_survive_a_row_trip() {
        let props = vec![
            MaterialProperty::Tex {
                name: "_ToonRamp".into(),
                tex: TexSlot::RenderTarget {
                    discarded_str1: "a".into(),
                    discarded_str2: "b".into(),
                },
            },
            MaterialProperty::Vec {
                name: "_Dir".into(),
                vector: [0.0, 1.0, 0.0, 0.0],
            },
            MaterialProperty::Keyword {
                name: "_Keys".into(),
                keywords: vec![Keyword {
                    key: "_ALPHATEST_ON".into(),
                    value: true,
                }],
            },
        ];
        for prop in props {
            assert_eq!(Property::from_material(&prop).to_material(), Some(prop));
        }
    }

    #[test]
    fn material_ron_round_trip() {
        let material = Material {
            name: "skin".into(),
            shader_name: "CM3D2/Toony_Lighted".into(),
            shader_filename: "CM3D2__Toony_Lighted".into(),
            properties: vec![MaterialProperty::F {
                name: "_Shininess".into(),
                number: 0.5,
            }],
        };
        let text = material.to_ron().unwrap();
        assert_eq!(Material::from_ron(&text).unwrap(), material);
    }

    #[test]
    fn bundled_sample_material_parses() {
        let source = include_str!("../../../assets/materials/sample.ron");
        let material = Material::from_ron(source).unwrap();
        assert_eq!(material.name, "stone_wall");
        assert_eq!(material.properties.len(), 10);
        assert!(matches!(
            &material.properties[0],
            MaterialProperty::Tex { tex: TexSlot::Tex2d(_), .. }
        ));
        assert!(material
            .properties
            .iter()
            .all(|p| Property::from_material(p).to_material().as_ref() == Some(p)));
    }
}
