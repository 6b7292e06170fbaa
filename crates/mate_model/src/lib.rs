//! # Mate Model
//!
//! Editor-facing types for material property lists. This crate contains only
//! data types and pure functions; no systems, plugins or UI.
//!
//! - [`Property`]: one flat form row, typed by the `prop_type` / `sub_tag`
//!   discriminants
//! - [`PropertyKind`]: which fields the editor shows for a row
//! - [`PackedColor`]: the color picker's packed RGBA value
//! - [`group_by_type`] / [`flatten`]: the grouped display order of a list
//! - [`Material`]: the typed material the rows convert to and from

pub mod color;
pub mod grouping;
pub mod kind;
pub mod material;
pub mod property;

pub use color::{ColorChannels, PackedColor};
pub use grouping::{flatten, group_by_type, PropertyFilter, PropertyGroup, RenderRow};
pub use kind::PropertyKind;
pub use material::{Material, MaterialProperty, TexImage, TexSlot};
pub use property::{Field, FieldValue, Keyword, PropType, Property, SubTag};
