//! Flat property rows as they live in the editor form.
//!
//! A [`Property`] carries every field any property type can use. Which of
//! them matter is decided by the `prop_type` / `sub_tag` discriminants (see
//! [`crate::kind::PropertyKind`]); the rest are inert and kept as-is when the
//! type changes.

use serde::{Deserialize, Serialize};

use crate::color::ColorChannels;

/// Property type tag (`propType`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropType {
    Tex,
    Col,
    Vec,
    F,
    Range,
    TexOffset,
    TexScale,
    Keyword,
    #[default]
    #[serde(other)]
    Unknown,
}

impl PropType {
    pub const ALL: [PropType; 9] = [
        PropType::Tex,
        PropType::Col,
        PropType::Vec,
        PropType::F,
        PropType::Range,
        PropType::TexOffset,
        PropType::TexScale,
        PropType::Keyword,
        PropType::Unknown,
    ];

    /// Stable string form, also used as the locale key of the type label.
    pub fn tag(self) -> &'static str {
        match self {
            PropType::Tex => "tex",
            PropType::Col => "col",
            PropType::Vec => "vec",
            PropType::F => "f",
            PropType::Range => "range",
            PropType::TexOffset => "tex_offset",
            PropType::TexScale => "tex_scale",
            PropType::Keyword => "keyword",
            PropType::Unknown => "unknown",
        }
    }

    /// Parse a tag, degrading anything unrecognised to [`PropType::Unknown`].
    pub fn from_tag(tag: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.tag() == tag)
            .unwrap_or(PropType::Unknown)
    }
}

/// Texture sub-tag, only meaningful when the type is [`PropType::Tex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubTag {
    #[serde(rename = "tex2d")]
    Tex2d,
    #[serde(rename = "cube")]
    Cube,
    #[serde(rename = "texRT")]
    TexRt,
    #[serde(rename = "null")]
    Null,
}

impl SubTag {
    pub const ALL: [SubTag; 4] = [SubTag::Tex2d, SubTag::Cube, SubTag::TexRt, SubTag::Null];

    pub fn tag(self) -> &'static str {
        match self {
            SubTag::Tex2d => "tex2d",
            SubTag::Cube => "cube",
            SubTag::TexRt => "texRT",
            SubTag::Null => "null",
        }
    }
}

/// One shader keyword toggle of a `keyword` property.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Keyword {
    pub key: String,
    pub value: bool,
}

/// One entry of the property sequence.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Property {
    pub prop_type: Option<PropType>,
    pub prop_name: String,
    pub sub_tag: Option<SubTag>,
    pub tex2d_name: String,
    pub tex2d_path: String,
    pub offset_x: Option<f32>,
    pub offset_y: Option<f32>,
    pub scale_x: Option<f32>,
    pub scale_y: Option<f32>,
    pub discarded_str1: String,
    pub discarded_str2: String,
    pub color_r: Option<f32>,
    pub color_g: Option<f32>,
    pub color_b: Option<f32>,
    pub color_a: Option<f32>,
    pub vec0: Option<f32>,
    pub vec1: Option<f32>,
    pub vec2: Option<f32>,
    pub vec3: Option<f32>,
    pub number: Option<f32>,
    pub keywords: Vec<Keyword>,
}

/// Path of one scalar field inside a [`Property`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    PropType,
    PropName,
    SubTag,
    Tex2dName,
    Tex2dPath,
    OffsetX,
    OffsetY,
    ScaleX,
    ScaleY,
    DiscardedStr1,
    DiscardedStr2,
    ColorR,
    ColorG,
    ColorB,
    ColorA,
    Vec0,
    Vec1,
    Vec2,
    Vec3,
    Number,
}

impl Field {
    pub const COLOR: [Field; 4] = [Field::ColorR, Field::ColorG, Field::ColorB, Field::ColorA];

    /// Form key of the field, doubling as its locale label key.
    pub fn key(self) -> &'static str {
        match self {
            Field::PropType => "propType",
            Field::PropName => "propName",
            Field::SubTag => "subTag",
            Field::Tex2dName => "tex2dName",
            Field::Tex2dPath => "tex2dPath",
            Field::OffsetX => "offsetX",
            Field::OffsetY => "offsetY",
            Field::ScaleX => "scaleX",
            Field::ScaleY => "scaleY",
            Field::DiscardedStr1 => "discardedStr1",
            Field::DiscardedStr2 => "discardedStr2",
            Field::ColorR => "colorR",
            Field::ColorG => "colorG",
            Field::ColorB => "colorB",
            Field::ColorA => "colorA",
            Field::Vec0 => "vec0",
            Field::Vec1 => "vec1",
            Field::Vec2 => "vec2",
            Field::Vec3 => "vec3",
            Field::Number => "number",
        }
    }
}

/// A value read from or written to one [`Field`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(Option<f32>),
    PropType(Option<PropType>),
    SubTag(Option<SubTag>),
}

impl Property {
    pub fn new(prop_type: PropType) -> Self {
        Self {
            prop_type: Some(prop_type),
            ..Default::default()
        }
    }

    /// Type used for grouping; an unset type lands in the `unknown` bucket.
    pub fn group_key(&self) -> PropType {
        self.prop_type.unwrap_or_default()
    }

    /// Color components with the widget defaults applied (opaque white).
    pub fn color_channels(&self) -> ColorChannels {
        ColorChannels {
            r: self.color_r.unwrap_or(255.0),
            g: self.color_g.unwrap_or(255.0),
            b: self.color_b.unwrap_or(255.0),
            a: self.color_a.unwrap_or(1.0),
        }
    }

    pub fn text(&self, field: Field) -> Option<&str> {
        let slot = match field {
            Field::PropName => &self.prop_name,
            Field::Tex2dName => &self.tex2d_name,
            Field::Tex2dPath => &self.tex2d_path,
            Field::DiscardedStr1 => &self.discarded_str1,
            Field::DiscardedStr2 => &self.discarded_str2,
            _ => return None,
        };
        Some(slot.as_str())
    }

    pub fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::PropName => Some(&mut self.prop_name),
            Field::Tex2dName => Some(&mut self.tex2d_name),
            Field::Tex2dPath => Some(&mut self.tex2d_path),
            Field::DiscardedStr1 => Some(&mut self.discarded_str1),
            Field::DiscardedStr2 => Some(&mut self.discarded_str2),
            _ => None,
        }
    }

    /// Numeric slot of `field`; `None` when the field is not numeric.
    pub fn number(&self, field: Field) -> Option<Option<f32>> {
        let slot = match field {
            Field::OffsetX => self.offset_x,
            Field::OffsetY => self.offset_y,
            Field::ScaleX => self.scale_x,
            Field::ScaleY => self.scale_y,
            Field::ColorR => self.color_r,
            Field::ColorG => self.color_g,
            Field::ColorB => self.color_b,
            Field::ColorA => self.color_a,
            Field::Vec0 => self.vec0,
            Field::Vec1 => self.vec1,
            Field::Vec2 => self.vec2,
            Field::Vec3 => self.vec3,
            Field::Number => self.number,
            _ => return None,
        };
        Some(slot)
    }

    pub fn number_mut(&mut self, field: Field) -> Option<&mut Option<f32>> {
        match field {
            Field::OffsetX => Some(&mut self.offset_x),
            Field::OffsetY => Some(&mut self.offset_y),
            Field::ScaleX => Some(&mut self.scale_x),
            Field::ScaleY => Some(&mut self.scale_y),
            Field::ColorR => Some(&mut self.color_r),
            Field::ColorG => Some(&mut self.color_g),
            Field::ColorB => Some(&mut self.color_b),
            Field::ColorA => Some(&mut self.color_a),
            Field::Vec0 => Some(&mut self.vec0),
            Field::Vec1 => Some(&mut self.vec1),
            Field::Vec2 => Some(&mut self.vec2),
            Field::Vec3 => Some(&mut self.vec3),
            Field::Number => Some(&mut self.number),
            _ => None,
        }
    }

    pub fn get(&self, field: Field) -> FieldValue {
        match field {
            Field::PropType => FieldValue::PropType(self.prop_type),
            Field::SubTag => FieldValue::SubTag(self.sub_tag),
            _ => match self.text(field) {
                Some(text) => FieldValue::Text(text.to_string()),
                None => FieldValue::Number(self.number(field).flatten()),
            },
        }
    }

    /// Write `value` into `field`. Returns `true` when the stored value
    /// changed; a value of the wrong kind for the field is ignored.
    pub fn set(&mut self, field: Field, value: FieldValue) -> bool {
        match (field, value) {
            (Field::PropType, FieldValue::PropType(v)) => replace(&mut self.prop_type, v),
            (Field::SubTag, FieldValue::SubTag(v)) => replace(&mut self.sub_tag, v),
            (field, FieldValue::Text(v)) => self
                .text_mut(field)
                .is_some_and(|slot| replace(slot, v)),
            (field, FieldValue::Number(v)) => self
                .number_mut(field)
                .is_some_and(|slot| replace(slot, v)),
            _ => false,
        }
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for t in PropType::ALL {
            assert_eq!(PropType::from_tag(t.tag()), t);
        }
        assert_eq!(PropType::from_tag("mystery"), PropType::Unknown);
    }

    #[test]
    fn unrecognised_tag_deserializes_to_unknown() {
        let t: PropType = ron::from_str("tex_offset").unwrap();
        assert_eq!(t, PropType::TexOffset);
        let t: PropType = ron::from_str("mystery").unwrap();
        assert_eq!(t, PropType::Unknown);
    }

    #[test]
    fn missing_type_groups_as_unknown() {
        let p = Property::default();
        assert_eq!(p.group_key(), PropType::Unknown);
        assert_eq!(Property::new(PropType::Col).group_key(), PropType::Col);
    }

    #[test]
    fn set_reports_changes_only() {
        let mut p = Property::new(PropType::Vec);
        assert!(p.set(Field::Vec2, FieldValue::Number(Some(0.5))));
        assert!(!p.set(Field::Vec2, FieldValue::Number(Some(0.5))));
        assert_eq!(p.get(Field::Vec2), FieldValue::Number(Some(0.5)));

        assert!(p.set(Field::PropName, FieldValue::Text("_Color".into())));
        assert_eq!(p.get(Field::PropName), FieldValue::Text("_Color".into()));
    }

    #[test]
    fn mismatched_value_kind_is_ignored() {
        let mut p = Property::new(PropType::F);
        assert!(!p.set(Field::Number, FieldValue::Text("1.0".into())));
        assert!(!p.set(Field::PropName, FieldValue::Number(Some(1.0))));
        assert!(!p.set(Field::PropType, FieldValue::SubTag(Some(SubTag::Cube))));
        assert_eq!(p, Property::new(PropType::F));
    }

    #[test]
    fn color_channels_default_to_opaque_white() {
        let mut p = Property::new(PropType::Col);
        let c = p.color_channels();
        assert_eq!((c.r, c.g, c.b, c.a), (255.0, 255.0, 255.0, 1.0));

        p.color_g = Some(12.0);
        p.color_a = Some(0.5);
        let c = p.color_channels();
        assert_eq!((c.r, c.g, c.b, c.a), (255.0, 12.0, 255.0, 0.5));
    }
}
