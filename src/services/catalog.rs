use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use std::time::Duration;

use crate::listing::{Listable, LoadLatency};
use super::mock_catalog::generate_catalog;

/// A book in the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub stock: u32,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Listable for Product {
    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn price(&self) -> f64 {
        self.price
    }
}

/// Error type for catalog fetches
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// The source could not be reached
    Unavailable(String),
    /// The source did not answer in time
    Timeout,
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CatalogError::Unavailable(e) => write!(f, "Catalog unavailable: {}", e),
            CatalogError::Timeout => write!(f, "Catalog request timed out"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Where the storefront gets its products from
///
/// The whole collection is fetched at once; windowing, batching and paging
/// all happen client-side.
#[async_trait(?Send)]
pub trait CatalogSource {
    async fn fetch_items(&self) -> Result<Vec<Product>, CatalogError>;
}

/// Catalog settings provided at startup
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CatalogConfig {
    /// Number of products to generate
    pub size: usize,
    /// Simulated fetch latency
    pub latency: Duration,
    /// Seed for catalog generation
    pub seed: u64,
    pub retry: RetryPolicy,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            size: 200,
            latency: Duration::from_millis(500),
            seed: 0x0b00_c11e,
            retry: RetryPolicy::default(),
        }
    }
}

/// In-memory catalog with an artificial delay
pub struct MockCatalog {
    config: CatalogConfig,
    latency: Rc<dyn LoadLatency>,
}

impl MockCatalog {
    pub fn new(config: CatalogConfig, latency: Rc<dyn LoadLatency>) -> Self {
        Self { config, latency }
    }
}

#[async_trait(?Send)]
impl CatalogSource for MockCatalog {
    async fn fetch_items(&self) -> Result<Vec<Product>, CatalogError> {
        self.latency.wait(self.config.latency).await;
        let products = generate_catalog(self.config.size, self.config.seed);
        log::info!("Mock catalog served {} products", products.len());
        Ok(products)
    }
}

// =============================================================================
// Retry
// =============================================================================

/// Exponential backoff for catalog fetches
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts including the first
    pub max_attempts: u32,
    /// Delay before the second attempt
    pub base_delay: Duration,
    /// Upper bound on any single delay
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(4),
        }
    }
}

impl RetryPolicy {
    /// Delay after failed attempt number `attempt` (1-based)
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        self.base_delay
            .saturating_mul(1u32 << exponent)
            .min(self.max_delay)
    }
}

/// Fetch the catalog, retrying failures per `policy`
///
/// The last error is returned once every attempt has failed.
pub async fn fetch_with_retry(
    source: &dyn CatalogSource,
    policy: RetryPolicy,
    latency: &dyn LoadLatency,
) -> Result<Vec<Product>, CatalogError> {
    let attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match source.fetch_items().await {
            Ok(products) => {
                if attempt > 1 {
                    log::info!("Catalog fetch succeeded on attempt {}", attempt);
                }
                return Ok(products);
            }
            Err(e) if attempt < attempts => {
                let delay = policy.delay_after(attempt);
                log::warn!("Catalog fetch attempt {} failed: {}; retrying in {:?}", attempt, e, delay);
                latency.wait(delay).await;
                attempt += 1;
            }
            Err(e) => {
                log::error!("Catalog fetch failed after {} attempts: {}", attempt, e);
                return Err(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::loader::ImmediateLatency;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    /// Fails a fixed number of times before serving a tiny catalog
    struct FlakySource {
        failures_left: Cell<u32>,
        calls: Cell<u32>,
    }

    #[async_trait(?Send)]
    impl CatalogSource for FlakySource {
        async fn fetch_items(&self) -> Result<Vec<Product>, CatalogError> {
            self.calls.set(self.calls.get() + 1);
            if self.failures_left.get() > 0 {
                self.failures_left.set(self.failures_left.get() - 1);
                return Err(CatalogError::Unavailable("connection reset".to_string()));
            }
            Ok(generate_catalog(3, 1))
        }
    }

    /// Records requested delays instead of sleeping
    #[derive(Default)]
    struct RecordingLatency {
        waits: RefCell<Vec<Duration>>,
    }

    #[async_trait(?Send)]
    impl LoadLatency for RecordingLatency {
        async fn wait(&self, duration: Duration) {
            self.waits.borrow_mut().push(duration);
        }
    }

    #[test]
    fn test_mock_catalog_serves_configured_size() {
        let config = CatalogConfig { size: 50, ..Default::default() };
        let catalog = MockCatalog::new(config, Rc::new(ImmediateLatency));
        let products = block_on(catalog.fetch_items()).expect("mock never fails");
        assert_eq!(products.len(), 50);
    }

    #[test]
    fn test_mock_catalog_waits_configured_latency() {
        let latency = Rc::new(RecordingLatency::default());
        let catalog = MockCatalog::new(CatalogConfig::default(), latency.clone());
        block_on(catalog.fetch_items()).expect("mock never fails");
        assert_eq!(*latency.waits.borrow(), vec![Duration::from_millis(500)]);
    }

    #[test]
    fn test_retry_recovers() {
        let source = FlakySource { failures_left: Cell::new(2), calls: Cell::new(0) };
        let latency = RecordingLatency::default();
        let result = block_on(fetch_with_retry(&source, RetryPolicy::default(), &latency));

        assert_eq!(result.map(|p| p.len()), Ok(3));
        assert_eq!(source.calls.get(), 3);
        assert_eq!(
            *latency.waits.borrow(),
            vec![Duration::from_millis(250), Duration::from_millis(500)]
        );
    }

    #[test]
    fn test_retry_gives_up() {
        let source = FlakySource { failures_left: Cell::new(10), calls: Cell::new(0) };
        let result = block_on(fetch_with_retry(&source, RetryPolicy::default(), &ImmediateLatency));

        assert!(matches!(result, Err(CatalogError::Unavailable(_))));
        assert_eq!(source.calls.get(), 3);
    }

    #[test]
    fn test_zero_attempts_still_tries_once() {
        let source = FlakySource { failures_left: Cell::new(0), calls: Cell::new(0) };
        let policy = RetryPolicy { max_attempts: 0, ..Default::default() };
        assert!(block_on(fetch_with_retry(&source, policy, &ImmediateLatency)).is_ok());
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn test_backoff_is_capped() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_after(1), Duration::from_millis(250));
        assert_eq!(policy.delay_after(3), Duration::from_secs(1));
        assert_eq!(policy.delay_after(10), Duration::from_secs(4));
        assert_eq!(policy.delay_after(u32::MAX), Duration::from_secs(4));
    }
}
