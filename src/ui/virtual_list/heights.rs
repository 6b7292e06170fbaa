use std::ops::Range;

/// Measurements closer than this are treated as unchanged, so sub-pixel
/// layout jitter does not keep invalidating offsets.
const MEASURE_TOLERANCE: f32 = 0.5;

/// Row heights of a variable-size list.
///
/// Unmeasured rows use the default estimate. Row tops are kept as a prefix
/// sum that is rebuilt lazily from the first row whose height changed.
#[derive(Debug, Clone)]
pub struct RowHeights {
    default: f32,
    measured: Vec<Option<f32>>,
    /// `offsets[i]` is the top of row `i`; one extra entry holds the total.
    offsets: Vec<f32>,
    dirty_from: Option<usize>,
}

impl RowHeights {
    pub fn new(default: f32) -> Self {
        Self {
            default,
            measured: Vec::new(),
            offsets: vec![0.0],
            dirty_from: None,
        }
    }

    pub fn default_height(&self) -> f32 {
        self.default
    }

    pub fn len(&self) -> usize {
        self.measured.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measured.is_empty()
    }

    /// Grow or shrink to `count` rows; new rows start unmeasured.
    pub fn set_row_count(&mut self, count: usize) {
        let old = self.measured.len();
        if old == count {
            return;
        }
        self.measured.resize(count, None);
        self.offsets.resize(count + 1, 0.0);
        self.invalidate(old.min(count));
    }

    pub fn height(&self, index: usize) -> f32 {
        self.measured
            .get(index)
            .copied()
            .flatten()
            .unwrap_or(self.default)
    }

    pub fn is_measured(&self, index: usize) -> bool {
        matches!(self.measured.get(index), Some(Some(_)))
    }

    /// Record the laid-out height of a row. Returns `true` when it differs
    /// from what was cached, meaning later rows moved.
    pub fn measure(&mut self, index: usize, height: f32) -> bool {
        let Some(slot) = self.measured.get_mut(index) else {
            return false;
        };
        if slot.is_some_and(|h| (h - height).abs() < MEASURE_TOLERANCE) {
            return false;
        }
        *slot = Some(height);
        self.invalidate(index);
        true
    }

    /// Forget every measurement.
    pub fn reset(&mut self) {
        self.measured.fill(None);
        self.invalidate(0);
    }

    /// Top of row `index`; `index == len()` gives the total height.
    pub fn offset(&mut self, index: usize) -> f32 {
        self.refresh();
        self.offsets[index.min(self.measured.len())]
    }

    pub fn total_height(&mut self) -> f32 {
        self.offset(self.measured.len())
    }

    /// Rows intersecting `[scroll_top, scroll_top + viewport)`.
    pub fn visible_range(&mut self, scroll_top: f32, viewport: f32) -> Range<usize> {
        self.refresh();
        let count = self.measured.len();
        let bottom = scroll_top + viewport;
        let start = self.offsets[1..].partition_point(|&row_bottom| row_bottom <= scroll_top);
        let end = self.offsets[..count].partition_point(|&row_top| row_top < bottom);
        start..end.max(start)
    }

    fn invalidate(&mut self, from: usize) {
        self.dirty_from = Some(self.dirty_from.map_or(from, |d| d.min(from)));
    }

    fn refresh(&mut self) {
        let Some(from) = self.dirty_from.take() else {
            return;
        };
        for i in from..self.measured.len() {
            self.offsets[i + 1] = self.offsets[i] + self.height(i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_rows() -> RowHeights {
        let mut heights = RowHeights::new(100.0);
        heights.set_row_count(5);
        heights
    }

    #[test]
    fn unmeasured_rows_use_default() {
        let mut heights = five_rows();
        assert_eq!(heights.offset(3), 300.0);
        assert_eq!(heights.total_height(), 500.0);
        assert!(!heights.is_measured(0));
    }

    #[test]
    fn measuring_a_row_shifts_only_later_rows() {
        let mut heights = five_rows();
        assert!(heights.measure(3, 120.0));

        assert_eq!(heights.offset(0), 0.0);
        assert_eq!(heights.offset(1), 100.0);
        assert_eq!(heights.offset(2), 200.0);
        assert_eq!(heights.offset(3), 300.0);
        assert_eq!(heights.offset(4), 420.0);
        assert_eq!(heights.total_height(), 520.0);
    }

    #[test]
    fn same_measurement_is_not_a_change() {
        let mut heights = five_rows();
        assert!(heights.measure(1, 80.0));
        assert!(!heights.measure(1, 80.2));
        assert!(!heights.measure(9, 80.0));
    }

    #[test]
    fn reset_returns_to_estimates() {
        let mut heights = five_rows();
        heights.measure(0, 40.0);
        heights.measure(3, 120.0);
        heights.reset();

        assert!((0..5).all(|i| !heights.is_measured(i)));
        assert_eq!(heights.offset(4), 400.0);
    }

    #[test]
    fn visible_range_covers_intersecting_rows() {
        let mut heights = five_rows();
        assert_eq!(heights.visible_range(150.0, 200.0), 1..4);
        assert_eq!(heights.visible_range(0.0, 100.0), 0..1);
        assert_eq!(heights.visible_range(1000.0, 200.0), 5..5);
    }

    #[test]
    fn row_count_changes_keep_offsets_consistent() {
        let mut heights = five_rows();
        heights.measure(1, 50.0);
        heights.set_row_count(2);
        assert_eq!(heights.total_height(), 150.0);

        heights.set_row_count(4);
        assert_eq!(heights.offset(4), 350.0);
        assert!(heights.is_measured(1));
    }
}
