//! Which editor fields a property shows, decided by its two discriminants.

use crate::property::{Field, PropType, Property, SubTag};

/// Editor layout of a property: the closed set of `propType` x `subTag`
/// combinations the editor distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    Texture2d,
    TextureCube,
    TextureRt,
    /// `tex` with sub-tag `null` or no sub-tag yet: only the selector.
    TextureEmpty,
    Color,
    Vector,
    Float,
    Range,
    TexOffset,
    TexScale,
    Keyword,
    Unknown,
}

const TEXTURE_IMAGE_FIELDS: &[Field] = &[
    Field::PropType,
    Field::PropName,
    Field::SubTag,
    Field::Tex2dName,
    Field::Tex2dPath,
    Field::OffsetX,
    Field::OffsetY,
    Field::ScaleX,
    Field::ScaleY,
];

const TEXTURE_RT_FIELDS: &[Field] = &[
    Field::PropType,
    Field::PropName,
    Field::SubTag,
    Field::DiscardedStr1,
    Field::DiscardedStr2,
];

const TEXTURE_EMPTY_FIELDS: &[Field] = &[Field::PropType, Field::PropName, Field::SubTag];

const COLOR_FIELDS: &[Field] = &[
    Field::PropType,
    Field::PropName,
    Field::ColorR,
    Field::ColorG,
    Field::ColorB,
    Field::ColorA,
];

const VECTOR_FIELDS: &[Field] = &[
    Field::PropType,
    Field::PropName,
    Field::Vec0,
    Field::Vec1,
    Field::Vec2,
    Field::Vec3,
];

const NUMBER_FIELDS: &[Field] = &[Field::PropType, Field::PropName, Field::Number];

const OFFSET_FIELDS: &[Field] = &[
    Field::PropType,
    Field::PropName,
    Field::OffsetX,
    Field::OffsetY,
];

const SCALE_FIELDS: &[Field] = &[
    Field::PropType,
    Field::PropName,
    Field::ScaleX,
    Field::ScaleY,
];

const BARE_FIELDS: &[Field] = &[Field::PropType, Field::PropName];

impl PropertyKind {
    pub fn resolve(prop_type: Option<PropType>, sub_tag: Option<SubTag>) -> Self {
        match (prop_type, sub_tag) {
            (Some(PropType::Tex), Some(SubTag::Tex2d)) => PropertyKind::Texture2d,
            (Some(PropType::Tex), Some(SubTag::Cube)) => PropertyKind::TextureCube,
            (Some(PropType::Tex), Some(SubTag::TexRt)) => PropertyKind::TextureRt,
            (Some(PropType::Tex), Some(SubTag::Null) | None) => PropertyKind::TextureEmpty,
            (Some(PropType::Col), _) => PropertyKind::Color,
            (Some(PropType::Vec), _) => PropertyKind::Vector,
            (Some(PropType::F), _) => PropertyKind::Float,
            (Some(PropType::Range), _) => PropertyKind::Range,
            (Some(PropType::TexOffset), _) => PropertyKind::TexOffset,
            (Some(PropType::TexScale), _) => PropertyKind::TexScale,
            (Some(PropType::Keyword), _) => PropertyKind::Keyword,
            (Some(PropType::Unknown) | None, _) => PropertyKind::Unknown,
        }
    }

    pub fn of(property: &Property) -> Self {
        Self::resolve(property.prop_type, property.sub_tag)
    }

    /// Fields the editor draws for this kind, in display order.
    pub fn visible_fields(self) -> &'static [Field] {
        match self {
            PropertyKind::Texture2d | PropertyKind::TextureCube => TEXTURE_IMAGE_FIELDS,
            PropertyKind::TextureRt => TEXTURE_RT_FIELDS,
            PropertyKind::TextureEmpty => TEXTURE_EMPTY_FIELDS,
            PropertyKind::Color => COLOR_FIELDS,
            PropertyKind::Vector => VECTOR_FIELDS,
            PropertyKind::Float | PropertyKind::Range => NUMBER_FIELDS,
            PropertyKind::TexOffset => OFFSET_FIELDS,
            PropertyKind::TexScale => SCALE_FIELDS,
            PropertyKind::Keyword | PropertyKind::Unknown => BARE_FIELDS,
        }
    }

    pub fn shows(self, field: Field) -> bool {
        self.visible_fields().contains(&field)
    }

    pub fn has_color_picker(self) -> bool {
        self == PropertyKind::Color
    }

    pub fn has_keyword_table(self) -> bool {
        self == PropertyKind::Keyword
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn texture_sub_tags_select_field_sets() {
        let kind = PropertyKind::resolve(Some(PropType::Tex), Some(SubTag::Cube));
        assert_eq!(kind, PropertyKind::TextureCube);
        assert!(kind.shows(Field::Tex2dPath));
        assert!(kind.shows(Field::ScaleY));
        assert!(!kind.shows(Field::DiscardedStr1));

        let kind = PropertyKind::resolve(Some(PropType::Tex), Some(SubTag::TexRt));
        assert!(kind.shows(Field::DiscardedStr2));
        assert!(!kind.shows(Field::Tex2dPath));
    }

    #[test]
    fn texture_without_sub_tag_shows_only_selector() {
        for sub_tag in [None, Some(SubTag::Null)] {
            let kind = PropertyKind::resolve(Some(PropType::Tex), sub_tag);
            assert_eq!(
                kind.visible_fields(),
                &[Field::PropType, Field::PropName, Field::SubTag]
            );
        }
    }

    #[test]
    fn sub_tag_is_ignored_outside_textures() {
        let kind = PropertyKind::resolve(Some(PropType::Col), Some(SubTag::Tex2d));
        assert_eq!(kind, PropertyKind::Color);
        assert!(!kind.shows(Field::SubTag));
        assert!(kind.has_color_picker());
    }

    #[test]
    fn missing_type_shows_selector_and_name_only() {
        let kind = PropertyKind::of(&Property::default());
        assert_eq!(kind, PropertyKind::Unknown);
        assert_eq!(kind.visible_fields(), &[Field::PropType, Field::PropName]);
        assert!(!kind.has_color_picker());
        assert!(!kind.has_keyword_table());
    }

    #[test]
    fn vector_and_float_fields() {
        let vec_fields = PropertyKind::resolve(Some(PropType::Vec), None).visible_fields();
        assert_eq!(&vec_fields[2..], &[Field::Vec0, Field::Vec1, Field::Vec2, Field::Vec3]);

        let f = PropertyKind::resolve(Some(PropType::F), None);
        assert_eq!(f.visible_fields(), &[Field::PropType, Field::PropName, Field::Number]);
    }
}
