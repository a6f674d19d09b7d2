// Utility functions
// Helpers shared by stores and components

pub mod data_state;
pub mod format;
pub mod validation;

pub use data_state::FetchState;
pub use format::{format_price, showing_label};

/// Generate a DOM id unique to this page load
pub fn generate_dom_id(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4().simple())
}
