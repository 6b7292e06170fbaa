//! "Material Properties" window: filter bar, grouped property list and the
//! add / export buttons.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};
use mate_model::{PropType, Property, PropertyFilter, PropertyKind, RenderRow};
use std::time::Duration;

use super::color_sync::{flush_color_writes, ColorSyncStates};
use super::property_editor::draw_property_editor;
use super::theme::{colors, panel, panel_frame, row_frame};
use super::virtual_list::{draw_property_list, reset_heights_on_visibility, PropertyListView};
use crate::form::MateForm;
use crate::locale::Locale;
use crate::settings::EditorSettings;

/// Window-local state of the properties panel
#[derive(Resource, Default)]
pub struct PropertiesPanelState {
    pub filter: PropertyFilter,
}

/// Deferred panel action, applied after the window is drawn
enum PanelAction {
    Add,
    Remove(usize),
    CopyRon,
}

/// Draws the property list of the [`MateForm`] resource.
///
/// Expects [`EditorSettings`], [`Locale`] and [`MateForm`] to be present.
pub struct MatePropertiesPlugin;

impl Plugin for MatePropertiesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PropertiesPanelState>()
            .init_resource::<PropertyListView>()
            .init_resource::<ColorSyncStates>()
            .add_systems(Update, (flush_color_writes, reset_heights_on_visibility))
            .add_systems(EguiPrimaryContextPass, draw_properties_window);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_properties_window(
    mut contexts: EguiContexts,
    mut form: ResMut<MateForm>,
    mut view: ResMut<PropertyListView>,
    mut syncs: ResMut<ColorSyncStates>,
    mut state: ResMut<PropertiesPanelState>,
    locale: Res<Locale>,
    settings: Res<EditorSettings>,
    time: Res<Time<Real>>,
) -> Result {
    let ctx = contexts.ctx_mut()?;
    let now = time.elapsed();

    if view.sync(&form, &state.filter) {
        debug!("Regrouped {} property rows", view.rows().len());
    }

    let mut action = None;

    egui::Window::new(locale.label("properties_title"))
        .id(egui::Id::new("mate_properties_window"))
        .default_width(panel::DEFAULT_WIDTH)
        .min_width(panel::MIN_WIDTH)
        .frame(panel_frame(&ctx.style()))
        .show(ctx, |ui| {
            filter_bar(ui, &mut state.filter, &locale);
            ui.add_space(panel::WINDOW_PADDING);

            if view.rows().is_empty() {
                ui.label(egui::RichText::new(locale.label("no_properties")).color(colors::TEXT_MUTED));
            } else {
                draw_property_list(ui, &mut view, settings.list_height, |ui, row| match row {
                    RenderRow::Header(prop_type) => group_header(ui, prop_type, &locale),
                    RenderRow::Property(index) => {
                        if let Some(next) =
                            property_row(ui, index, &mut form, &mut syncs, &locale, now)
                        {
                            action = Some(next);
                        }
                    }
                });
            }

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button(format!("+ {}", locale.label("add_property"))).clicked() {
                    action = Some(PanelAction::Add);
                }
                if ui.button(locale.label("copy_ron")).clicked() {
                    action = Some(PanelAction::CopyRon);
                }
            });
        });

    match action {
        Some(PanelAction::Add) => {
            let index = form.push(new_property(&state.filter));
            info!("Added property #{}", index);
        }
        Some(PanelAction::Remove(index)) => {
            // Indices shift after removal, so pending picker writes land first.
            syncs.flush_all(&mut form);
            if let Some(removed) = form.remove(index) {
                info!("Removed property #{} ({:?})", index, removed.prop_name);
            }
        }
        Some(PanelAction::CopyRon) => match form.to_material().to_ron() {
            Ok(ron) => {
                ctx.copy_text(ron);
                info!("Copied material '{}' as RON", form.name);
            }
            Err(e) => error!("Failed to serialize material: {}", e),
        },
        None => {}
    }

    Ok(())
}

/// Row created by the add button. It takes the filtered type and name so it
/// stays visible under the active filter; otherwise it starts as a texture.
fn new_property(filter: &PropertyFilter) -> Property {
    let mut property = Property::new(filter.prop_type.unwrap_or(PropType::Tex));
    property.prop_name = filter.name.clone();
    property
}

fn filter_bar(ui: &mut egui::Ui, filter: &mut PropertyFilter, locale: &Locale) {
    ui.horizontal(|ui| {
        let selected = filter
            .prop_type
            .map_or(locale.label("filter_all"), |t| locale.prop_type(t));
        egui::ComboBox::from_id_salt("mate_filter_type")
            .selected_text(selected)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut filter.prop_type, None, locale.label("filter_all"));
                for t in PropType::ALL {
                    ui.selectable_value(&mut filter.prop_type, Some(t), locale.prop_type(t));
                }
            });
        ui.add(
            egui::TextEdit::singleline(&mut filter.name)
                .hint_text(locale.label("filter_name"))
                .desired_width(f32::INFINITY),
        );
    });
}

fn group_header(ui: &mut egui::Ui, prop_type: PropType, locale: &Locale) {
    ui.add_space(4.0);
    ui.label(
        egui::RichText::new(locale.prop_type(prop_type))
            .strong()
            .color(colors::GROUP_HEADER),
    );
    ui.separator();
}

/// One bordered property row. Edits are written back to the form here;
/// removal is returned so it runs after the list is drawn.
fn property_row(
    ui: &mut egui::Ui,
    index: usize,
    form: &mut MateForm,
    syncs: &mut ColorSyncStates,
    locale: &Locale,
    now: Duration,
) -> Option<PanelAction> {
    let mut working = form.property(index)?.clone();
    let sync = if PropertyKind::of(&working).has_color_picker() {
        Some(syncs.observe(index, form))
    } else {
        None
    };

    let mut remove = false;
    let changed = row_frame()
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(format!("#{index}")).color(colors::TEXT_MUTED).small());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    remove = ui
                        .small_button(egui::RichText::new("✖").color(colors::STATUS_ERROR))
                        .on_hover_text(locale.label("remove_property"))
                        .clicked();
                });
            });
            draw_property_editor(ui, index, &mut working, locale, sync, now)
        })
        .inner;

    if changed {
        form.set_property(index, working);
    }
    remove.then_some(PanelAction::Remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn added_row_is_listed(filter: PropertyFilter) {
        let mut form = MateForm::new(vec![Property::new(PropType::Col)]);
        let mut view = PropertyListView::new(100.0);
        view.sync(&form, &filter);

        let index = form.push(new_property(&filter));
        assert!(view.sync(&form, &filter));
        assert!(view.rows().contains(&RenderRow::Property(index)));
    }

    #[test]
    fn add_without_filter_creates_texture_row() {
        let property = new_property(&PropertyFilter::default());
        assert_eq!(property.prop_type, Some(PropType::Tex));
        added_row_is_listed(PropertyFilter::default());
    }

    #[test]
    fn add_under_type_filter_uses_filtered_type() {
        added_row_is_listed(PropertyFilter {
            prop_type: Some(PropType::Vec),
            name: String::new(),
        });
    }

    #[test]
    fn add_under_name_filter_stays_visible() {
        added_row_is_listed(PropertyFilter {
            prop_type: Some(PropType::Unknown),
            name: "_Wind".into(),
        });
    }
}
