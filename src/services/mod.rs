// External collaborators
// The catalog source and its generated mock data

pub mod catalog;
pub mod mock_catalog;

pub use catalog::{fetch_with_retry, CatalogConfig, CatalogError, CatalogSource, MockCatalog, Product, RetryPolicy};
