// Application state
// Cart, auth and catalog are context-provided handles; preferences are global

pub mod auth_store;
pub mod cart_store;
pub mod catalog_store;
pub mod preferences_store;

pub use auth_store::{AuthStore, Role, Tier, UserSession};
pub use cart_store::{CartStore, CheckoutSummary};
pub use catalog_store::{CatalogStore, ProductForm, ProductFormError};
