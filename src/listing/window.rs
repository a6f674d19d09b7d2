//! Windowing arithmetic
//!
//! Maps a scroll position onto the contiguous slice of items that has to be
//! materialized. Constant time: only the geometry is consulted, never the
//! collection itself.

use super::layout::Geometry;

/// Default number of extra rows above and below the viewport
pub const DEFAULT_BUFFER_ROWS: usize = 1;

/// Half-open index range `[start, end)` into the filtered collection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WindowRange {
    pub start: usize,
    pub end: usize,
}

impl WindowRange {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    /// Borrow the windowed items out of the full collection
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.end.min(items.len());
        let start = self.start.min(end);
        &items[start..end]
    }
}

/// Window plus where to draw it
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Window {
    pub range: WindowRange,
    /// First materialized row
    pub first_row: usize,
    /// Translation applied to the materialized rows
    pub offset: f64,
}

/// Compute the window with the default buffer
pub fn compute_window(scroll_offset: f64, container_height: f64, geometry: &Geometry) -> WindowRange {
    compute_window_with_buffer(scroll_offset, container_height, geometry, DEFAULT_BUFFER_ROWS).range
}

/// Compute the window and its render offset for an explicit buffer
pub fn compute_window_with_buffer(
    scroll_offset: f64,
    container_height: f64,
    geometry: &Geometry,
    buffer_rows: usize,
) -> Window {
    if geometry.item_count == 0 || geometry.total_rows == 0 || !(geometry.row_extent > 0.0) {
        return Window::default();
    }

    let row_extent = geometry.row_extent;
    let scroll_offset = sanitize(scroll_offset);
    let container_height = sanitize(container_height);

    let scrolled_rows = floor_rows(scroll_offset / row_extent);
    let first_row = scrolled_rows.saturating_sub(buffer_rows);

    let rows_in_view = if container_height > 0.0 {
        ceil_rows(container_height / row_extent)
    } else {
        0
    };

    let last_row = first_row
        .saturating_add(rows_in_view)
        .saturating_add(buffer_rows.saturating_mul(2))
        .min(geometry.total_rows);

    let columns = geometry.columns.max(1);
    let end = last_row.saturating_mul(columns).min(geometry.item_count);
    let start = first_row.saturating_mul(columns).min(end);

    // Scrolled past the content: pin the offset to the last row
    let first_row = first_row.min(geometry.total_rows);

    Window {
        range: WindowRange { start, end },
        first_row,
        offset: first_row as f64 * row_extent,
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn floor_rows(rows: f64) -> usize {
    let rows = rows.floor();
    if rows >= usize::MAX as f64 {
        usize::MAX
    } else {
        rows as usize
    }
}

fn ceil_rows(rows: f64) -> usize {
    let rows = rows.ceil();
    if rows >= usize::MAX as f64 {
        usize::MAX
    } else {
        rows as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::layout::plan;
    use crate::listing::ViewMode;

    #[test]
    fn test_scenario_grid_top() {
        let geometry = plan(50, ViewMode::Grid, 1024.0);
        let window = compute_window_with_buffer(0.0, 600.0, &geometry, 1);

        // rows 0..4: two visible rows plus two buffer rows, three columns
        assert_eq!(window.first_row, 0);
        assert_eq!(window.range, WindowRange { start: 0, end: 12 });
        assert_eq!(window.offset, 0.0);
    }

    #[test]
    fn test_scenario_grid_shifts_by_rows_scrolled() {
        let geometry = plan(50, ViewMode::Grid, 1024.0);
        let at = |offset: f64| compute_window_with_buffer(offset, 600.0, &geometry, 1);

        // The first scrolled row is still covered by the buffer
        assert_eq!(at(324.0).first_row, 0);

        let base = at(648.0);
        assert_eq!(base.first_row, 1);
        assert_eq!(base.range, WindowRange { start: 3, end: 15 });

        let next = at(648.0 + 324.0);
        assert_eq!(next.first_row, base.first_row + 1);
        assert_eq!(next.range.start, base.range.start + geometry.columns);
        assert_eq!(next.offset, base.offset + 324.0);
    }

    #[test]
    fn test_end_clamped_to_collection() {
        let geometry = plan(50, ViewMode::Grid, 1024.0);
        let window = compute_window(geometry.total_extent, 600.0, &geometry);
        assert_eq!(window.end, 50);
        assert!(window.start <= window.end);
    }

    #[test]
    fn test_scrolled_far_past_end() {
        let geometry = plan(10, ViewMode::List, 800.0);
        let window = compute_window_with_buffer(1.0e9, 600.0, &geometry, 1);
        assert!(window.range.is_empty());
        assert_eq!(window.range.end, 10);
        assert!(window.offset <= geometry.total_extent);
    }

    #[test]
    fn test_empty_collection() {
        let geometry = plan(0, ViewMode::List, 800.0);
        let window = compute_window_with_buffer(500.0, 600.0, &geometry, 1);
        assert_eq!(window, Window::default());
    }

    #[test]
    fn test_non_positive_height_only_buffer() {
        let geometry = plan(100, ViewMode::List, 800.0);
        let window = compute_window_with_buffer(0.0, 0.0, &geometry, 1);
        assert_eq!(window.range, WindowRange { start: 0, end: 2 });

        let window = compute_window_with_buffer(0.0, -10.0, &geometry, 1);
        assert_eq!(window.range, WindowRange { start: 0, end: 2 });
    }

    #[test]
    fn test_garbage_offsets_do_not_panic() {
        let geometry = plan(100, ViewMode::Grid, 1300.0);
        for offset in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -1.0e12] {
            let window = compute_window(offset, 600.0, &geometry);
            assert_eq!(window.start, 0);
        }
    }

    #[test]
    fn test_window_covers_viewport_and_is_bounded() {
        for (count, mode, width) in [
            (1000, ViewMode::List, 900.0),
            (997, ViewMode::Grid, 800.0),
            (333, ViewMode::Grid, 1024.0),
            (1001, ViewMode::Grid, 1600.0),
        ] {
            let geometry = plan(count, mode, width);
            let height = 600.0;
            let rows_in_view = (height / geometry.row_extent).ceil() as usize;
            let bound = (rows_in_view + 2 * DEFAULT_BUFFER_ROWS) * geometry.columns;

            let mut offset = 0.0;
            while offset < geometry.total_extent {
                let range = compute_window(offset, height, &geometry);
                assert!(range.len() <= bound);

                let first_row = (offset / geometry.row_extent).floor() as usize;
                let last_row = ((offset + height) / geometry.row_extent).ceil() as usize;
                let first = first_row * geometry.columns;
                let last = (last_row * geometry.columns).min(count);
                for index in first..last {
                    assert!(range.contains(index), "index {} missing at offset {}", index, offset);
                }
                offset += 97.0;
            }
        }
    }

    #[test]
    fn test_slice_tolerates_short_collection() {
        let items = vec![1, 2, 3];
        let range = WindowRange { start: 2, end: 10 };
        assert_eq!(range.slice(&items), &[3]);
        let range = WindowRange { start: 5, end: 10 };
        assert!(range.slice(&items).is_empty());
    }
}
