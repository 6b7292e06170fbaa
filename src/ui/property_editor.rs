//! Editor for a single property row.
//!
//! Which inputs appear is decided by [`PropertyKind`]: the `propType` and
//! `subTag` discriminants select a fixed field subset, and fields outside it
//! are left untouched in the working copy.

use bevy_egui::egui;
use mate_model::{Field, Keyword, PropType, Property, PropertyKind, SubTag};
use std::ops::RangeInclusive;
use std::time::Duration;

use super::color_sync::{color_sync_button, ColorSync};
use super::theme::colors;
use crate::constants::{sizes, steps};
use crate::locale::Locale;

/// Draw the inputs of `property` selected by its discriminants.
///
/// Edits land in `property` directly; the return value tells the caller
/// whether to write the working copy back to the form. Color picker edits
/// go through `color` instead and are written by the debounced flush.
pub fn draw_property_editor(
    ui: &mut egui::Ui,
    index: usize,
    property: &mut Property,
    locale: &Locale,
    color: Option<&mut ColorSync>,
    now: Duration,
) -> bool {
    let kind = PropertyKind::of(property);
    let mut changed = false;

    egui::Grid::new(("mate_property_grid", index))
        .num_columns(2)
        .min_col_width(sizes::LABEL_WIDTH)
        .spacing([sizes::ROW_GAP, 4.0])
        .show(ui, |ui| {
            for &field in kind.visible_fields() {
                ui.label(egui::RichText::new(locale.field(field)).color(colors::TEXT_SECONDARY));
                changed |= field_input(ui, index, field, property, locale);
                ui.end_row();
            }

            if kind.has_color_picker() {
                if let Some(sync) = color {
                    ui.label(
                        egui::RichText::new(locale.label("color_picker")).color(colors::TEXT_SECONDARY),
                    );
                    ui.horizontal(|ui| {
                        color_sync_button(ui, sync, now);
                    });
                    ui.end_row();
                }
            }
        });

    if kind.has_keyword_table() {
        ui.add_space(4.0);
        changed |= keyword_table(ui, index, &mut property.keywords, locale);
    }

    changed
}

fn field_input(
    ui: &mut egui::Ui,
    index: usize,
    field: Field,
    property: &mut Property,
    locale: &Locale,
) -> bool {
    match field {
        Field::PropType => prop_type_combo(ui, index, &mut property.prop_type, locale),
        Field::SubTag => sub_tag_combo(ui, index, &mut property.sub_tag, locale),
        _ => {
            if let Some(text) = property.text_mut(field) {
                return ui
                    .add(egui::TextEdit::singleline(text).desired_width(f32::INFINITY))
                    .changed();
            }
            match property.number_mut(field) {
                Some(slot) => number_input(ui, field, slot, locale),
                None => false,
            }
        }
    }
}

fn prop_type_combo(
    ui: &mut egui::Ui,
    index: usize,
    prop_type: &mut Option<PropType>,
    locale: &Locale,
) -> bool {
    let mut changed = false;
    let selected = prop_type.map_or(locale.label("unset"), |t| locale.prop_type(t));
    egui::ComboBox::from_id_salt(("mate_prop_type", index))
        .selected_text(selected)
        .show_ui(ui, |ui| {
            for t in PropType::ALL {
                changed |= ui
                    .selectable_value(&mut *prop_type, Some(t), locale.prop_type(t))
                    .changed();
            }
        });
    changed
}

fn sub_tag_combo(
    ui: &mut egui::Ui,
    index: usize,
    sub_tag: &mut Option<SubTag>,
    locale: &Locale,
) -> bool {
    let mut changed = false;
    let selected = sub_tag.map_or(locale.label("unset"), |s| locale.sub_tag(s));
    egui::ComboBox::from_id_salt(("mate_sub_tag", index))
        .selected_text(selected)
        .show_ui(ui, |ui| {
            for s in SubTag::ALL {
                changed |= ui
                    .selectable_value(&mut *sub_tag, Some(s), locale.sub_tag(s))
                    .changed();
            }
        });
    changed
}

/// Drag speed, clamp range and the value shown while unset.
fn number_bounds(field: Field) -> (f64, Option<RangeInclusive<f32>>, f32) {
    match field {
        Field::ColorR | Field::ColorG | Field::ColorB => {
            (steps::COLOR_CHANNEL, Some(0.0..=255.0), 255.0)
        }
        Field::ColorA => (steps::ALPHA, Some(0.0..=1.0), 1.0),
        Field::ScaleX | Field::ScaleY => (steps::DEFAULT, None, 1.0),
        _ => (steps::DEFAULT, None, 0.0),
    }
}

fn number_input(ui: &mut egui::Ui, field: Field, slot: &mut Option<f32>, locale: &Locale) -> bool {
    let (speed, range, placeholder) = number_bounds(field);
    let mut value = slot.unwrap_or(placeholder);

    let response = ui
        .horizontal(|ui| {
            let mut drag = egui::DragValue::new(&mut value).speed(speed);
            if let Some(range) = range {
                drag = drag.range(range);
            }
            let response = ui.add_sized([sizes::NUMBER_FIELD_WIDTH, ui.spacing().interact_size.y], drag);
            if slot.is_none() {
                ui.label(egui::RichText::new(locale.label("unset")).color(colors::TEXT_MUTED).small());
            }
            response
        })
        .inner;

    if response.changed() && *slot != Some(value) {
        *slot = Some(value);
        return true;
    }
    false
}

fn keyword_table(
    ui: &mut egui::Ui,
    index: usize,
    keywords: &mut Vec<Keyword>,
    locale: &Locale,
) -> bool {
    let mut changed = false;
    let mut remove = None;

    if !keywords.is_empty() {
        egui::Grid::new(("mate_keywords", index))
            .num_columns(3)
            .striped(true)
            .show(ui, |ui| {
                ui.label(egui::RichText::new(locale.label("keyword_key")).color(colors::TEXT_MUTED));
                ui.label(egui::RichText::new(locale.label("keyword_value")).color(colors::TEXT_MUTED));
                ui.label("");
                ui.end_row();

                for (i, keyword) in keywords.iter_mut().enumerate() {
                    changed |= ui.text_edit_singleline(&mut keyword.key).changed();
                    changed |= ui.checkbox(&mut keyword.value, "").changed();
                    if ui.small_button("✖").clicked() {
                        remove = Some(i);
                    }
                    ui.end_row();
                }
            });
    }

    if let Some(i) = remove {
        keywords.remove(i);
        changed = true;
    }

    if ui.small_button(format!("+ {}", locale.label("add_keyword"))).clicked() {
        keywords.push(Keyword::default());
        changed = true;
    }

    changed
}
