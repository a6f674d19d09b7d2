pub mod dom;
pub mod use_incremental_list;
pub mod use_infinite_scroll;
pub mod use_viewport;

pub use dom::scroll_window_to_top;
pub use use_incremental_list::{use_incremental_list, UseIncrementalList};
pub use use_infinite_scroll::use_infinite_scroll;
pub use use_viewport::{use_viewport, UseViewport};
