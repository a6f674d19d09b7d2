use std::time::Duration;

/// Tunables shared by the three rendering strategies
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ListingConfig {
    /// Items per page (pagination) and per batch (incremental loading)
    pub page_size: usize,

    /// Rows rendered above and below the viewport by the windowed list
    pub buffer_rows: usize,

    /// Height of the fixed scroll container in pixels
    pub container_height: f64,

    /// List row height and the gap below it
    pub list_item_height: f64,
    pub list_gap: f64,

    /// Grid card height and the gap below each grid row
    pub grid_item_height: f64,
    pub grid_gap: f64,

    /// Delay applied to each incremental batch
    pub load_latency: Duration,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: 20,
            buffer_rows: 1,
            container_height: 600.0,
            list_item_height: 120.0,
            list_gap: 16.0,
            grid_item_height: 300.0,
            grid_gap: 24.0,
            load_latency: Duration::from_millis(500),
        }
    }
}

impl ListingConfig {
    /// Page size that is never zero
    pub fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }
}
