//! Polling subscriptions on single form fields.

use mate_model::FieldValue;

use super::{FieldPath, MateForm};

/// Subscription to one field path.
///
/// Each [`FieldWatcher::poll`] compares the field against the value seen on
/// the previous poll and reports whether it changed. The first poll always
/// reports the current value. Dropping the watcher ends the subscription.
#[derive(Debug, Clone)]
pub struct FieldWatcher {
    path: FieldPath,
    seen_revision: Option<u64>,
    value: Option<FieldValue>,
}

impl FieldWatcher {
    pub fn new(path: FieldPath) -> Self {
        Self {
            path,
            seen_revision: None,
            value: None,
        }
    }

    pub fn path(&self) -> FieldPath {
        self.path
    }

    /// Latest value seen by [`FieldWatcher::poll`]; `None` before the first
    /// poll or while the path points past the end of the list.
    pub fn value(&self) -> Option<&FieldValue> {
        self.value.as_ref()
    }

    pub fn poll(&mut self, form: &MateForm) -> bool {
        if self.seen_revision == Some(form.revision()) {
            return false;
        }
        let first = self.seen_revision.is_none();
        self.seen_revision = Some(form.revision());

        let latest = form.watch(self.path);
        if !first && latest == self.value {
            return false;
        }
        self.value = latest;
        true
    }
}
