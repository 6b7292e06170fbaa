//! Color button bridging the four numeric color fields of a property.
//!
//! The button edits a local packed color buffer. Writes back into
//! R/G/B/A are debounced so dragging across the picker produces one form
//! write per quiet period instead of one per frame.

use bevy::prelude::*;
use bevy_egui::egui;
use mate_model::{Field, PackedColor};
use std::collections::HashMap;
use std::time::Duration;

use crate::debounce::Debouncer;
use crate::form::{FieldPath, FieldWatcher, MateForm};
use crate::settings::EditorSettings;

/// Picker state for the color fields of one property.
#[derive(Debug, Clone)]
pub struct ColorSync {
    index: usize,
    watchers: [FieldWatcher; 4],
    derived: PackedColor,
    buffer: PackedColor,
    last_written: Option<PackedColor>,
    writes: Debouncer<PackedColor>,
}

impl ColorSync {
    pub fn new(index: usize, window: Duration, form: &MateForm) -> Self {
        let mut watchers = Field::COLOR.map(|field| FieldWatcher::new(FieldPath::new(index, field)));
        for watcher in &mut watchers {
            watcher.poll(form);
        }
        let derived = derive(index, form);
        Self {
            index,
            watchers,
            derived,
            buffer: derived,
            last_written: None,
            writes: Debouncer::new(window),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Color shown in the button.
    pub fn buffer(&self) -> PackedColor {
        self.buffer
    }

    /// Color packed from the form fields as of the last [`ColorSync::observe`].
    pub fn derived(&self) -> PackedColor {
        self.derived
    }

    pub fn is_pending(&self) -> bool {
        self.writes.is_pending()
    }

    /// Pick up changes to the color fields made elsewhere.
    ///
    /// The buffer only follows the form when the packed value actually
    /// changed and is not the echo of this widget's own last write.
    pub fn observe(&mut self, form: &MateForm) {
        let mut changed = false;
        for watcher in &mut self.watchers {
            changed |= watcher.poll(form);
        }
        if !changed {
            return;
        }

        let derived = derive(self.index, form);
        if derived == self.derived {
            return;
        }
        self.derived = derived;

        if self.last_written.take() == Some(derived) {
            return;
        }
        if derived != self.buffer {
            self.buffer = derived;
        }
    }

    /// User picked `color`: show it now, write it once the picker settles.
    pub fn edit(&mut self, now: Duration, color: PackedColor) {
        self.buffer = color;
        self.writes.call(now, color);
    }

    /// Due write, if the quiet period has elapsed.
    pub fn poll(&mut self, now: Duration) -> Option<PackedColor> {
        let color = self.writes.poll(now)?;
        self.last_written = Some(color);
        Some(color)
    }

    /// Pending write regardless of the quiet period.
    pub fn flush(&mut self) -> Option<PackedColor> {
        let color = self.writes.flush()?;
        self.last_written = Some(color);
        Some(color)
    }

    pub fn remaining(&self, now: Duration) -> Option<Duration> {
        self.writes.remaining(now)
    }
}

fn derive(index: usize, form: &MateForm) -> PackedColor {
    form.property(index)
        .map(|p| p.color_channels().pack())
        .unwrap_or_else(|| PackedColor::from_channels(255.0, 255.0, 255.0, 1.0))
}

/// Color sync state of every property with a visible color picker, keyed by
/// property index.
///
/// States belong to one [`MateForm::generation`]; once the form's rows are
/// replaced or shifted they are dropped together with their pending writes.
#[derive(Resource, Debug)]
pub struct ColorSyncStates {
    window: Duration,
    generation: u64,
    syncs: HashMap<usize, ColorSync>,
}

impl FromWorld for ColorSyncStates {
    fn from_world(world: &mut World) -> Self {
        let window = world
            .get_resource::<EditorSettings>()
            .map(EditorSettings::color_debounce)
            .unwrap_or_else(|| EditorSettings::default().color_debounce());
        Self::new(window)
    }
}

impl ColorSyncStates {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            generation: 0,
            syncs: HashMap::new(),
        }
    }

    fn follow(&mut self, form: &MateForm) {
        if self.generation != form.generation() {
            if !self.syncs.is_empty() {
                debug!("Property rows replaced, dropping {} color states", self.syncs.len());
            }
            self.syncs.clear();
            self.generation = form.generation();
        }
    }

    pub fn get(&self, index: usize) -> Option<&ColorSync> {
        self.syncs.get(&index)
    }

    /// State for `index`, created on first use, after picking up form
    /// changes since the previous frame.
    pub fn observe(&mut self, index: usize, form: &MateForm) -> &mut ColorSync {
        self.follow(form);
        let window = self.window;
        let sync = self
            .syncs
            .entry(index)
            .or_insert_with(|| ColorSync::new(index, window, form));
        sync.observe(form);
        sync
    }

    /// Write every due color into the form. Returns the number of writes.
    pub fn write_due(&mut self, now: Duration, form: &mut MateForm) -> usize {
        self.follow(form);
        let mut written = 0;
        for (index, sync) in &mut self.syncs {
            if let Some(color) = sync.poll(now) {
                form.set_fields(*index, color.channels().field_values());
                written += 1;
            }
        }
        written
    }

    /// Write every pending color into the form without waiting.
    pub fn flush_all(&mut self, form: &mut MateForm) {
        self.follow(form);
        for (index, sync) in &mut self.syncs {
            if let Some(color) = sync.flush() {
                form.set_fields(*index, color.channels().field_values());
            }
        }
    }

    /// Drop all states; used when property indices shift.
    pub fn clear(&mut self) {
        self.syncs.clear();
    }
}

/// Write debounced color edits into the form once their quiet period ends.
pub fn flush_color_writes(
    time: Res<Time<Real>>,
    mut states: ResMut<ColorSyncStates>,
    mut form: ResMut<MateForm>,
) {
    states.write_due(time.elapsed(), &mut form);
}

/// Color button backed by `sync`. Returns whether the user changed it.
pub fn color_sync_button(ui: &mut egui::Ui, sync: &mut ColorSync, now: Duration) -> bool {
    let mut rgba = sync.buffer().to_rgba();
    let changed = ui.color_edit_button_srgba_unmultiplied(&mut rgba).changed();
    if changed {
        sync.edit(now, PackedColor::from_rgba(rgba));
    }
    ui.monospace(sync.buffer().to_hex());

    // Keep frames coming until the pending write lands.
    if let Some(remaining) = sync.remaining(now) {
        ui.ctx().request_repaint_after(remaining);
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use mate_model::{FieldValue, PropType, Property, SubTag};

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn color_form() -> MateForm {
        let mut property = Property::new(PropType::Col);
        property.color_r = Some(10.0);
        property.color_g = Some(20.0);
        property.color_b = Some(30.0);
        property.color_a = Some(1.0);
        MateForm::new(vec![property])
    }

    #[test]
    fn unset_fields_default_to_opaque_white() {
        let form = MateForm::new(vec![Property::new(PropType::Col)]);
        let sync = ColorSync::new(0, ms(200), &form);
        assert_eq!(sync.buffer(), PackedColor(0xffff_ffff));
    }

    #[test]
    fn five_quick_edits_write_once_with_last_color() {
        let mut form = color_form();
        let mut states = ColorSyncStates::new(ms(200));
        let mut writes = 0;

        for (i, t) in [0, 30, 60, 90, 120].into_iter().enumerate() {
            let color = PackedColor::from_rgba([i as u8, 0, 0, 255]);
            states.observe(0, &form).edit(ms(t), color);
            writes += states.write_due(ms(t), &mut form);
        }
        for t in (130..=500).step_by(10) {
            writes += states.write_due(ms(t), &mut form);
        }

        assert_eq!(writes, 1);
        assert_eq!(form.property(0).and_then(|p| p.color_r), Some(4.0));
        assert_eq!(form.property(0).and_then(|p| p.color_g), Some(0.0));
    }

    #[test]
    fn pending_edit_is_not_reverted_by_unchanged_form() {
        let form = color_form();
        let mut sync = ColorSync::new(0, ms(200), &form);
        let picked = PackedColor::from_rgba([200, 100, 50, 255]);

        sync.edit(ms(0), picked);
        sync.observe(&form);
        assert_eq!(sync.buffer(), picked);
        assert!(sync.is_pending());
    }

    #[test]
    fn own_write_echo_does_not_reconcile() {
        let mut form = color_form();
        let mut sync = ColorSync::new(0, ms(200), &form);
        let first = PackedColor::from_rgba([200, 100, 50, 255]);
        let second = PackedColor::from_rgba([1, 2, 3, 255]);

        sync.edit(ms(0), first);
        let written = sync.poll(ms(200));
        assert_eq!(written, Some(first));
        form.set_fields(0, first.channels().field_values());

        // A newer edit is in flight when the first write comes back.
        sync.edit(ms(210), second);
        sync.observe(&form);
        assert_eq!(sync.derived(), first);
        assert_eq!(sync.buffer(), second);
    }

    #[test]
    fn external_field_change_updates_buffer() {
        let mut form = color_form();
        let mut sync = ColorSync::new(0, ms(200), &form);

        form.set_fields(0, [(Field::ColorR, FieldValue::Number(Some(99.0)))]);
        sync.observe(&form);
        assert_eq!(sync.buffer().to_rgba(), [99, 20, 30, 255]);
    }

    #[test]
    fn flush_all_writes_pending_before_clear() {
        let mut form = color_form();
        let mut states = ColorSyncStates::new(ms(200));
        let picked = PackedColor::from_rgba([5, 6, 7, 255]);

        states.observe(0, &form).edit(ms(0), picked);
        states.flush_all(&mut form);
        states.clear();

        assert_eq!(form.property(0).and_then(|p| p.color_b), Some(7.0));
        assert!(states.get(0).is_none());
    }

    #[test]
    fn reload_drops_pending_writes_of_old_rows() {
        let mut form = color_form();
        let mut states = ColorSyncStates::new(ms(200));
        let picked = PackedColor::from_rgba([9, 9, 9, 255]);
        states.observe(0, &form).edit(ms(0), picked);

        let mut texture = Property::new(PropType::Tex);
        texture.sub_tag = Some(SubTag::Tex2d);
        let reloaded = MateForm::new(vec![texture]).to_material();
        form.load_material(&reloaded);

        assert_eq!(states.write_due(ms(200), &mut form), 0);
        assert_eq!(form.property(0).and_then(|p| p.color_r), None);
        assert!(states.get(0).is_none());
    }

    #[test]
    fn removal_elsewhere_drops_states() {
        let mut form = color_form();
        form.push(Property::new(PropType::Col));
        let mut states = ColorSyncStates::new(ms(200));
        states.observe(1, &form).edit(ms(0), PackedColor::from_rgba([1, 1, 1, 255]));

        form.remove(0);
        assert_eq!(states.write_due(ms(500), &mut form), 0);
        assert_eq!(form.property(0).and_then(|p| p.color_r), None);
    }

    #[test]
    fn flush_system_writes_due_colors() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(color_form())
            .insert_resource(ColorSyncStates::new(Duration::ZERO))
            .add_systems(Update, flush_color_writes);

        let picked = PackedColor::from_rgba([42, 43, 44, 255]);
        app.world_mut()
            .resource_scope(|world, mut states: Mut<ColorSyncStates>| {
                let form = world.resource::<MateForm>();
                states.observe(0, form).edit(Duration::ZERO, picked);
            });
        app.update();

        let form = app.world().resource::<MateForm>();
        assert_eq!(form.property(0).and_then(|p| p.color_r), Some(42.0));
    }
}
