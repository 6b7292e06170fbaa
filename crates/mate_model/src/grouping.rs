//! Grouping properties by type and flattening groups into display rows.
//!
//! Groups are derived data: they are rebuilt from the property sequence
//! whenever it or any property's type changes, and never stored.

use std::collections::HashMap;

use crate::property::{PropType, Property};

/// Properties sharing one type, as indices into the property sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyGroup {
    pub prop_type: PropType,
    pub members: Vec<usize>,
}

/// One row of the flattened list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderRow {
    Header(PropType),
    Property(usize),
}

/// Bucket `(index, type)` pairs by type in a single pass.
///
/// Groups appear in first-seen order and keep their members in input order.
/// Entries of the same type merge into one group even when they are not
/// contiguous; a missing type is bucketed under [`PropType::Unknown`].
pub fn group_by_type<I>(entries: I) -> Vec<PropertyGroup>
where
    I: IntoIterator<Item = (usize, Option<PropType>)>,
{
    let mut groups: Vec<PropertyGroup> = Vec::new();
    let mut slots: HashMap<PropType, usize> = HashMap::new();

    for (index, prop_type) in entries {
        let prop_type = prop_type.unwrap_or_default();
        let slot = *slots.entry(prop_type).or_insert_with(|| {
            groups.push(PropertyGroup {
                prop_type,
                members: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].members.push(index);
    }

    groups
}

/// Header followed by its members, for each group in order.
pub fn flatten(groups: &[PropertyGroup]) -> Vec<RenderRow> {
    let len = groups.iter().map(|g| g.members.len() + 1).sum();
    let mut rows = Vec::with_capacity(len);
    for group in groups {
        rows.push(RenderRow::Header(group.prop_type));
        rows.extend(group.members.iter().copied().map(RenderRow::Property));
    }
    rows
}

/// Narrows the list before grouping. The default filter matches everything.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertyFilter {
    pub prop_type: Option<PropType>,
    /// Case-insensitive substring of the property name.
    pub name: String,
}

impl PropertyFilter {
    pub fn is_empty(&self) -> bool {
        self.prop_type.is_none() && self.name.is_empty()
    }

    pub fn matches(&self, property: &Property) -> bool {
        if let Some(prop_type) = self.prop_type {
            if property.group_key() != prop_type {
                return false;
            }
        }
        self.name.is_empty()
            || property
                .prop_name
                .to_lowercase()
                .contains(&self.name.to_lowercase())
    }

    /// `(index, type)` pairs of the matching properties, ready for
    /// [`group_by_type`].
    pub fn keys(&self, properties: &[Property]) -> Vec<(usize, Option<PropType>)> {
        properties
            .iter()
            .enumerate()
            .filter(|(_, p)| self.matches(p))
            .map(|(i, p)| (i, p.prop_type))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(types: &[Option<PropType>]) -> Vec<(usize, Option<PropType>)> {
        types.iter().copied().enumerate().collect()
    }

    #[test]
    fn non_contiguous_types_merge_under_first_header() {
        let groups = group_by_type(typed(&[
            Some(PropType::Col),
            Some(PropType::Vec),
            Some(PropType::Col),
        ]));
        assert_eq!(
            flatten(&groups),
            vec![
                RenderRow::Header(PropType::Col),
                RenderRow::Property(0),
                RenderRow::Property(2),
                RenderRow::Header(PropType::Vec),
                RenderRow::Property(1),
            ]
        );
    }

    #[test]
    fn groups_keep_first_seen_order() {
        let groups = group_by_type(typed(&[
            Some(PropType::Col),
            Some(PropType::Vec),
            Some(PropType::Col),
            Some(PropType::F),
        ]));
        let order: Vec<PropType> = groups.iter().map(|g| g.prop_type).collect();
        assert_eq!(order, vec![PropType::Col, PropType::Vec, PropType::F]);
        assert_eq!(groups[0].members, vec![0, 2]);
    }

    #[test]
    fn missing_type_lands_in_unknown() {
        let groups = group_by_type(typed(&[None, Some(PropType::Tex), Some(PropType::Unknown)]));
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].prop_type, PropType::Unknown);
        assert_eq!(groups[0].members, vec![0, 2]);
    }

    #[test]
    fn empty_input_has_no_rows() {
        assert!(flatten(&group_by_type(Vec::new())).is_empty());
    }

    #[test]
    fn filter_keeps_original_indices() {
        let mut a = Property::new(PropType::Col);
        a.prop_name = "_Color".into();
        let mut b = Property::new(PropType::F);
        b.prop_name = "_Shininess".into();
        let mut c = Property::new(PropType::Col);
        c.prop_name = "_ShadowColor".into();
        let props = vec![a, b, c];

        let filter = PropertyFilter {
            prop_type: None,
            name: "color".into(),
        };
        assert_eq!(
            filter.keys(&props),
            vec![(0, Some(PropType::Col)), (2, Some(PropType::Col))]
        );

        let filter = PropertyFilter {
            prop_type: Some(PropType::F),
            name: String::new(),
        };
        assert_eq!(filter.keys(&props), vec![(1, Some(PropType::F))]);
        assert!(PropertyFilter::default().is_empty());
    }
}
