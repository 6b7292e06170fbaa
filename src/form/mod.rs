//! Form state for the property list being edited.
//!
//! [`MateForm`] owns the property sequence. Widgets read it through
//! [`MateForm::watch`] / [`FieldWatcher`] or the snapshot accessors, and write
//! back only through the `set_*` methods, which bump [`MateForm::revision`]
//! when something actually changed.

mod watch;

pub use watch::FieldWatcher;

use bevy::prelude::*;
use mate_model::{Field, FieldValue, Material, Property};

/// Address of one field: property index plus field inside the property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldPath {
    pub index: usize,
    pub field: Field,
}

impl FieldPath {
    pub fn new(index: usize, field: Field) -> Self {
        Self { index, field }
    }
}

/// The material being edited: header fields plus the ordered property rows.
#[derive(Resource, Debug, Clone, Default)]
pub struct MateForm {
    pub name: String,
    pub shader_name: String,
    pub shader_filename: String,
    properties: Vec<Property>,
    revision: u64,
    generation: u64,
}

impl MateForm {
    pub fn new(properties: Vec<Property>) -> Self {
        Self {
            properties,
            ..Default::default()
        }
    }

    pub fn from_material(material: &Material) -> Self {
        Self {
            name: material.name.clone(),
            shader_name: material.shader_name.clone(),
            shader_filename: material.shader_filename.clone(),
            properties: material
                .properties
                .iter()
                .map(Property::from_material)
                .collect(),
            revision: 0,
            generation: 0,
        }
    }

    /// Replace header and rows with `material`, keeping the revision
    /// monotonic so existing watchers see the change.
    pub fn load_material(&mut self, material: &Material) {
        self.name = material.name.clone();
        self.shader_name = material.shader_name.clone();
        self.shader_filename = material.shader_filename.clone();
        self.replace_all(material.properties.iter().map(Property::from_material).collect());
    }

    /// Typed material of the current rows; rows without a typed form are
    /// skipped.
    pub fn to_material(&self) -> Material {
        Material {
            name: self.name.clone(),
            shader_name: self.shader_name.clone(),
            shader_filename: self.shader_filename.clone(),
            properties: self
                .properties
                .iter()
                .filter_map(Property::to_material)
                .collect(),
        }
    }

    /// Increases on every write that changed a value.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Increases whenever row indices stop referring to the same rows
    /// (full replacement or removal). State keyed by index must be dropped
    /// when it changes.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn property(&self, index: usize) -> Option<&Property> {
        self.properties.get(index)
    }

    /// Latest value at `path`, `None` past the end of the list.
    pub fn watch(&self, path: FieldPath) -> Option<FieldValue> {
        self.properties.get(path.index).map(|p| p.get(path.field))
    }

    /// Bulk write into one property. Returns whether anything changed.
    pub fn set_fields<I>(&mut self, index: usize, writes: I) -> bool
    where
        I: IntoIterator<Item = (Field, FieldValue)>,
    {
        let Some(property) = self.properties.get_mut(index) else {
            return false;
        };
        let mut changed = false;
        for (field, value) in writes {
            changed |= property.set(field, value);
        }
        if changed {
            self.revision += 1;
        }
        changed
    }

    pub fn set_property(&mut self, index: usize, property: Property) -> bool {
        match self.properties.get_mut(index) {
            Some(slot) if *slot != property => {
                *slot = property;
                self.revision += 1;
                true
            }
            _ => false,
        }
    }

    pub fn replace_all(&mut self, properties: Vec<Property>) {
        self.properties = properties;
        self.revision += 1;
        self.generation += 1;
    }

    /// Append a row and return its index.
    pub fn push(&mut self, property: Property) -> usize {
        self.properties.push(property);
        self.revision += 1;
        self.properties.len() - 1
    }

    /// Remove the row at `index`; later rows shift down by one.
    pub fn remove(&mut self, index: usize) -> Option<Property> {
        if index >= self.properties.len() {
            return None;
        }
        self.revision += 1;
        self.generation += 1;
        Some(self.properties.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mate_model::{MaterialProperty, PropType};

    fn sample() -> MateForm {
        MateForm::new(vec![
            Property::new(PropType::Col),
            Property::new(PropType::Vec),
            Property::new(PropType::F),
        ])
    }

    #[test]
    fn set_fields_bumps_revision_only_on_change() {
        let mut form = sample();
        let start = form.revision();

        let writes = [(Field::Vec1, FieldValue::Number(Some(2.0)))];
        assert!(form.set_fields(1, writes.clone()));
        assert_eq!(form.revision(), start + 1);
        assert!(!form.set_fields(1, writes));
        assert_eq!(form.revision(), start + 1);

        assert_eq!(
            form.watch(FieldPath::new(1, Field::Vec1)),
            Some(FieldValue::Number(Some(2.0)))
        );
    }

    #[test]
    fn out_of_range_access_is_inert() {
        let mut form = sample();
        assert_eq!(form.watch(FieldPath::new(9, Field::PropName)), None);
        assert!(!form.set_fields(9, [(Field::Number, FieldValue::Number(Some(1.0)))]));
        assert!(!form.set_property(9, Property::default()));
        assert_eq!(form.remove(9), None);
        assert_eq!(form.revision(), 0);
    }

    #[test]
    fn remove_shifts_later_rows() {
        let mut form = sample();
        let removed = form.remove(0);
        assert_eq!(removed.map(|p| p.group_key()), Some(PropType::Col));
        assert_eq!(form.len(), 2);
        assert_eq!(form.properties()[0].group_key(), PropType::Vec);
    }

    #[test]
    fn push_returns_new_index() {
        let mut form = sample();
        assert_eq!(form.push(Property::new(PropType::Tex)), 3);
        assert_eq!(form.property(3).map(|p| p.group_key()), Some(PropType::Tex));
    }

    #[test]
    fn material_bridge_skips_rows_without_typed_form() {
        let mut form = sample();
        form.name = "skin".into();
        form.push(Property::default());

        let material = form.to_material();
        assert_eq!(material.name, "skin");
        assert_eq!(material.properties.len(), 3);
        assert!(matches!(material.properties[0], MaterialProperty::Col { .. }));

        let back = MateForm::from_material(&material);
        assert_eq!(back.len(), 3);
        assert_eq!(back.name, "skin");
    }

    #[test]
    fn load_material_bumps_revision() {
        let mut form = sample();
        form.set_fields(0, [(Field::ColorR, FieldValue::Number(Some(1.0)))]);
        let before = form.revision();

        let material = MateForm::new(vec![Property::new(PropType::F)]).to_material();
        form.load_material(&material);
        assert!(form.revision() > before);
        assert_eq!(form.len(), 1);
    }

    #[test]
    fn generation_tracks_index_identity() {
        let mut form = sample();
        form.set_fields(0, [(Field::ColorR, FieldValue::Number(Some(1.0)))]);
        form.push(Property::new(PropType::Tex));
        assert_eq!(form.generation(), 0);

        form.remove(3);
        assert_eq!(form.generation(), 1);
        form.replace_all(Vec::new());
        assert_eq!(form.generation(), 2);
    }
}
