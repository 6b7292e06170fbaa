//! Grouped, virtualized list of property rows.
//!
//! Properties are grouped by type and flattened into header and property
//! rows. Only rows intersecting the scroll viewport are laid out, each at
//! its cached offset; heights measured after layout correct the offsets on
//! the next frame.

mod heights;

pub use heights::RowHeights;

use bevy::prelude::*;
use bevy::window::{WindowFocused, WindowOccluded};
use bevy_egui::egui;
use mate_model::{flatten, group_by_type, PropType, PropertyFilter, PropertyGroup, RenderRow};

use crate::constants::sizes;
use crate::form::MateForm;
use crate::settings::EditorSettings;

/// Rows laid out above and below the viewport.
const OVERSCAN: usize = 1;

/// Derived display state of the property list.
#[derive(Resource, Debug, Clone)]
pub struct PropertyListView {
    /// Form generation and revision plus the filter of the last sync.
    synced: Option<(u64, u64)>,
    filter: PropertyFilter,
    keys: Vec<(usize, Option<PropType>)>,
    groups: Vec<PropertyGroup>,
    rows: Vec<RenderRow>,
    heights: RowHeights,
}

impl FromWorld for PropertyListView {
    fn from_world(world: &mut World) -> Self {
        let default_height = world
            .get_resource::<EditorSettings>()
            .map_or(EditorSettings::default().default_row_height, |s| {
                s.default_row_height
            });
        Self::new(default_height)
    }
}

impl PropertyListView {
    pub fn new(default_row_height: f32) -> Self {
        Self {
            synced: None,
            filter: PropertyFilter::default(),
            keys: Vec::new(),
            groups: Vec::new(),
            rows: Vec::new(),
            heights: RowHeights::new(default_row_height),
        }
    }

    /// Regroup when the filtered sequence or any property type changed.
    ///
    /// Returns `true` when the rows were rebuilt; the height cache is reset
    /// in that case since row indices no longer line up.
    pub fn sync(&mut self, form: &MateForm, filter: &PropertyFilter) -> bool {
        let stamp = (form.generation(), form.revision());
        if self.synced == Some(stamp) && self.filter == *filter {
            return false;
        }
        self.synced = Some(stamp);
        if self.filter != *filter {
            self.filter = filter.clone();
        }

        let keys = filter.keys(form.properties());
        if keys == self.keys {
            return false;
        }
        self.groups = group_by_type(keys.iter().copied());
        self.rows = flatten(&self.groups);
        self.keys = keys;
        self.heights.set_row_count(self.rows.len());
        self.heights.reset();
        true
    }

    pub fn groups(&self) -> &[PropertyGroup] {
        &self.groups
    }

    pub fn rows(&self) -> &[RenderRow] {
        &self.rows
    }

    pub fn heights(&self) -> &RowHeights {
        &self.heights
    }

    pub fn reset_heights(&mut self) {
        self.heights.reset();
    }
}

/// Draw the visible slice of `view` inside a vertical scroll area of at most
/// `max_height`, delegating each row to `draw_row`.
pub fn draw_property_list(
    ui: &mut egui::Ui,
    view: &mut PropertyListView,
    max_height: f32,
    mut draw_row: impl FnMut(&mut egui::Ui, RenderRow),
) {
    let PropertyListView { rows, heights, .. } = view;

    egui::ScrollArea::vertical()
        .id_salt("mate_property_list")
        .max_height(max_height)
        .auto_shrink([false, true])
        .show_viewport(ui, |ui, viewport| {
            let origin = ui.max_rect().min;
            let width = ui.available_width();
            ui.set_height(heights.total_height());

            let visible = heights.visible_range(viewport.min.y, viewport.height());
            let first = visible.start.saturating_sub(OVERSCAN);
            let last = (visible.end + OVERSCAN).min(rows.len());

            let mut moved = false;
            for (i, &row) in rows.iter().enumerate().take(last).skip(first) {
                let top = heights.offset(i);
                let rect = egui::Rect::from_min_size(
                    origin + egui::vec2(0.0, top),
                    egui::vec2(width, heights.height(i)),
                );
                let drawn = ui.scope_builder(
                    egui::UiBuilder::new().max_rect(rect).id_salt(("mate_row", i)),
                    |ui| draw_row(ui, row),
                );
                moved |= heights.measure(i, drawn.response.rect.height() + sizes::ROW_GAP);
            }

            // Offsets below a re-measured row are stale until the next pass.
            if moved {
                ui.ctx().request_repaint();
            }
        });
}

/// Clear cached row heights when a window becomes visible again.
///
/// Layout can change while hidden (font or scale changes), and winit only
/// reports visibility transitions, so each one is treated as a regain.
pub fn reset_heights_on_visibility(
    mut focused: MessageReader<WindowFocused>,
    mut occluded: MessageReader<WindowOccluded>,
    mut view: ResMut<PropertyListView>,
) {
    let focus_gained = focused.read().filter(|e| e.focused).count() > 0;
    let revealed = occluded.read().filter(|e| !e.occluded).count() > 0;
    if focus_gained || revealed {
        debug!("Window visible again, resetting property row heights");
        view.reset_heights();
    }
}
