use super::config::ListingConfig;
use super::ViewMode;

/// Grid breakpoints (container width in pixels -> columns)
const BREAKPOINT_ONE_COLUMN: f64 = 768.0;
const BREAKPOINT_TWO_COLUMNS: f64 = 1024.0;
const BREAKPOINT_THREE_COLUMNS: f64 = 1280.0;
const MAX_GRID_COLUMNS: usize = 4;

/// Derived layout for one (item count, view mode, width) triple
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    /// Items per row, always at least 1
    pub columns: usize,
    /// Height of one row including the gap below it
    pub row_extent: f64,
    /// Item height without the gap
    pub item_extent: f64,
    /// Number of rows needed for every item
    pub total_rows: usize,
    /// Scrollable height of the whole collection
    pub total_extent: f64,
    /// Number of items the geometry was planned for
    pub item_count: usize,
}

impl Geometry {
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}

/// Column count for a container width
pub fn columns_for(view_mode: ViewMode, container_width: f64) -> usize {
    match view_mode {
        ViewMode::List => 1,
        ViewMode::Grid => {
            // NaN falls through to the narrowest layout
            if !(container_width >= BREAKPOINT_ONE_COLUMN) {
                1
            } else if container_width < BREAKPOINT_TWO_COLUMNS {
                2
            } else if container_width < BREAKPOINT_THREE_COLUMNS {
                3
            } else {
                MAX_GRID_COLUMNS
            }
        }
    }
}

/// Plan the layout with the default item extents
pub fn plan(item_count: usize, view_mode: ViewMode, container_width: f64) -> Geometry {
    plan_with(&ListingConfig::default(), item_count, view_mode, container_width)
}

/// Plan the layout with explicit item extents
pub fn plan_with(
    config: &ListingConfig,
    item_count: usize,
    view_mode: ViewMode,
    container_width: f64,
) -> Geometry {
    let columns = columns_for(view_mode, container_width);

    let (item_extent, gap) = match view_mode {
        ViewMode::List => (config.list_item_height, config.list_gap),
        ViewMode::Grid => (config.grid_item_height, config.grid_gap),
    };

    // A degenerate config still has to produce a positive row extent
    let row_extent = (item_extent + gap).max(1.0);
    let total_rows = item_count.div_ceil(columns);

    Geometry {
        columns,
        row_extent,
        item_extent,
        total_rows,
        total_extent: total_rows as f64 * row_extent,
        item_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_breakpoints() {
        assert_eq!(columns_for(ViewMode::Grid, 0.0), 1);
        assert_eq!(columns_for(ViewMode::Grid, 767.0), 1);
        assert_eq!(columns_for(ViewMode::Grid, 768.0), 2);
        assert_eq!(columns_for(ViewMode::Grid, 1023.0), 2);
        assert_eq!(columns_for(ViewMode::Grid, 1024.0), 3);
        assert_eq!(columns_for(ViewMode::Grid, 1279.0), 3);
        assert_eq!(columns_for(ViewMode::Grid, 1280.0), 4);
        assert_eq!(columns_for(ViewMode::Grid, 4000.0), 4);
        assert_eq!(columns_for(ViewMode::Grid, f64::NAN), 1);
        assert_eq!(columns_for(ViewMode::Grid, -50.0), 1);
    }

    #[test]
    fn test_list_is_single_column() {
        for width in [0.0, 800.0, 1100.0, 1920.0] {
            assert_eq!(columns_for(ViewMode::List, width), 1);
        }
    }

    #[test]
    fn test_row_extents() {
        let list = plan(10, ViewMode::List, 1200.0);
        assert_eq!(list.row_extent, 136.0);
        assert_eq!(list.total_extent, 1360.0);

        let grid = plan(50, ViewMode::Grid, 1024.0);
        assert_eq!(grid.columns, 3);
        assert_eq!(grid.row_extent, 324.0);
        assert_eq!(grid.total_rows, 17);
        assert_eq!(grid.total_extent, 17.0 * 324.0);
    }

    #[test]
    fn test_empty_collection() {
        let geometry = plan(0, ViewMode::Grid, 1500.0);
        assert!(geometry.is_empty());
        assert_eq!(geometry.total_rows, 0);
        assert_eq!(geometry.total_extent, 0.0);
    }

    #[test]
    fn test_plan_is_pure() {
        for width in [320.0, 768.0, 1024.0, 1440.0] {
            for mode in [ViewMode::List, ViewMode::Grid] {
                assert_eq!(plan(123, mode, width), plan(123, mode, width));
            }
        }
    }

    #[test]
    fn test_degenerate_config_keeps_positive_extent() {
        let config = ListingConfig {
            list_item_height: 0.0,
            list_gap: 0.0,
            ..Default::default()
        };
        let geometry = plan_with(&config, 5, ViewMode::List, 500.0);
        assert!(geometry.row_extent > 0.0);
    }
}
