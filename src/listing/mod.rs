//! List rendering core
//!
//! Pure, DOM-free building blocks for the catalog views: viewport tracking,
//! layout planning, windowing, incremental loading, pagination and filtering.
//! The Dioxus hooks in `crate::hooks` and components in `crate::components`
//! drive these types; nothing in here touches the browser.

pub mod config;
pub mod filter;
pub mod layout;
pub mod loader;
pub mod paginator;
pub mod viewport;
pub mod window;

use serde::{Deserialize, Serialize};
use std::rc::Rc;

pub use config::ListingConfig;
pub use filter::{FilterCriteria, FilterState, PriceRange};
pub use layout::{plan, Geometry};
pub use loader::{IncrementalLoader, LoadLatency, Lifetime, TimerLatency};
pub use paginator::Paginator;
pub use viewport::{Viewport, ViewportTracker};
pub use window::{compute_window, WindowRange};

/// Anything the catalog views can list
///
/// Identifiers must be unique within one collection. The views never reorder
/// items, so the caller's order is what gets rendered.
pub trait Listable {
    fn id(&self) -> u32;
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn category(&self) -> &str;
    fn price(&self) -> f64;
}

impl<T: Listable> Listable for Rc<T> {
    fn id(&self) -> u32 {
        (**self).id()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn description(&self) -> &str {
        (**self).description()
    }

    fn category(&self) -> &str {
        (**self).category()
    }

    fn price(&self) -> f64 {
        (**self).price()
    }
}

/// Single-column rows or a responsive card grid
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    List,
    #[default]
    Grid,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::List => "list",
            ViewMode::Grid => "grid",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "list" => ViewMode::List,
            _ => ViewMode::Grid,
        }
    }
}

/// Which strategy materializes the filtered collection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderingMode {
    /// Windowed rendering, only rows near the viewport exist
    Virtual,
    /// Growing prefix loaded in batches
    #[default]
    Lazy,
    /// Fixed-size pages
    Pagination,
}

impl RenderingMode {
    pub const ALL: [RenderingMode; 3] = [
        RenderingMode::Virtual,
        RenderingMode::Lazy,
        RenderingMode::Pagination,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RenderingMode::Virtual => "virtual",
            RenderingMode::Lazy => "lazy",
            RenderingMode::Pagination => "pagination",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "virtual" => RenderingMode::Virtual,
            "pagination" => RenderingMode::Pagination,
            _ => RenderingMode::Lazy,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RenderingMode::Virtual => "Virtual Scrolling",
            RenderingMode::Lazy => "Lazy Loading",
            RenderingMode::Pagination => "Pagination",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_string_round_trip() {
        for mode in RenderingMode::ALL {
            assert_eq!(RenderingMode::from_str(mode.as_str()), mode);
        }
        assert_eq!(ViewMode::from_str("list"), ViewMode::List);
        assert_eq!(ViewMode::from_str("bogus"), ViewMode::Grid);
        assert_eq!(RenderingMode::from_str("bogus"), RenderingMode::Lazy);
    }
}
