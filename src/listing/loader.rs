//! Incremental (lazy / infinite-scroll) loading
//!
//! The loader keeps a growing prefix of the filtered collection. A load is a
//! two-step affair so it can straddle an await point on a single-threaded
//! event loop:
//!
//! 1. [`IncrementalLoader::begin_load`] flips `is_loading` and hands out a
//!    [`LoadTicket`]; while it is set, further triggers are dropped.
//! 2. After the injected [`LoadLatency`] resolves,
//!    [`IncrementalLoader::finish_load`] appends the next batch, unless the
//!    collection was replaced in the meantime (stale ticket).
//!
//! Manual "Load more" clicks and the sentinel observer both go through
//! [`load_more`], so they share the same guard.

use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

// =============================================================================
// Latency
// =============================================================================

/// Injectable delay standing in for a network round trip
#[async_trait(?Send)]
pub trait LoadLatency {
    async fn wait(&self, duration: Duration);
}

/// Real timer in the browser
#[derive(Clone, Copy, Debug, Default)]
pub struct TimerLatency;

#[async_trait(?Send)]
impl LoadLatency for TimerLatency {
    async fn wait(&self, duration: Duration) {
        if duration.is_zero() {
            return;
        }

        #[cfg(target_family = "wasm")]
        {
            gloo_timers::future::sleep(duration).await;
        }

        #[cfg(not(target_family = "wasm"))]
        {
            log::trace!("No browser timer available, skipping {:?} delay", duration);
        }
    }
}

/// Resolves at once, for tests and zero-latency configurations
#[derive(Clone, Copy, Debug, Default)]
pub struct ImmediateLatency;

#[async_trait(?Send)]
impl LoadLatency for ImmediateLatency {
    async fn wait(&self, _duration: Duration) {}
}

// =============================================================================
// Component lifetime
// =============================================================================

/// Liveness flag of the component that owns a loader
///
/// Completions that arrive after [`Lifetime::end`] are dropped instead of
/// touching torn-down state.
#[derive(Clone, Debug)]
pub struct Lifetime(Rc<Cell<bool>>);

impl Lifetime {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    pub fn end(&self) {
        self.0.set(false);
    }
}

impl Default for Lifetime {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Loader state
// =============================================================================

/// Snapshot of the loader for rendering
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadState {
    pub loaded_count: usize,
    pub current_page: usize,
    pub is_loading: bool,
    pub has_more: bool,
}

/// Proof that a load was started; consumed by `finish_load`
#[derive(Debug)]
#[must_use = "a started load must be finished or it blocks further loads"]
pub struct LoadTicket {
    generation: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The next batch was materialized
    Appended { added: usize },
    /// The collection changed while the load was in flight
    Stale,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncrementalLoader {
    len: usize,
    page_size: usize,
    current_page: usize,
    is_loading: bool,
    generation: u64,
}

impl IncrementalLoader {
    /// Start over a collection of `len` items with the first batch materialized
    pub fn new(len: usize, page_size: usize) -> Self {
        Self {
            len,
            page_size: page_size.max(1),
            current_page: 1,
            is_loading: false,
            generation: 0,
        }
    }

    /// The filtered collection was replaced: back to the first batch
    ///
    /// Any load in flight becomes stale.
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.current_page = 1;
        self.is_loading = false;
        self.generation = self.generation.wrapping_add(1);
        log::debug!("Incremental loader reset: {} items, page size {}", len, self.page_size);
    }

    pub fn loaded_count(&self) -> usize {
        self.current_page.saturating_mul(self.page_size).min(self.len)
    }

    pub fn has_more(&self) -> bool {
        self.loaded_count() < self.len
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn state(&self) -> LoadState {
        LoadState {
            loaded_count: self.loaded_count(),
            current_page: self.current_page,
            is_loading: self.is_loading,
            has_more: self.has_more(),
        }
    }

    /// The materialized prefix of `items`
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.loaded_count().min(items.len())]
    }

    /// Start a load, or `None` when one is in flight or nothing is left
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        if self.is_loading {
            log::debug!("Load already in flight, dropping trigger");
            return None;
        }
        if !self.has_more() {
            log::debug!("Collection exhausted, nothing to load");
            return None;
        }

        self.is_loading = true;
        Some(LoadTicket {
            generation: self.generation,
        })
    }

    /// Complete a load started with `begin_load`
    pub fn finish_load(&mut self, ticket: LoadTicket) -> LoadOutcome {
        if ticket.generation != self.generation {
            log::debug!("Discarding stale load (generation {} != {})", ticket.generation, self.generation);
            return LoadOutcome::Stale;
        }

        let before = self.loaded_count();
        self.current_page += 1;
        self.is_loading = false;
        let added = self.loaded_count() - before;

        log::debug!(
            "Loaded page {}: {} of {} items materialized",
            self.current_page,
            self.loaded_count(),
            self.len
        );

        LoadOutcome::Appended { added }
    }
}

// =============================================================================
// Driver
// =============================================================================

/// Shared, mutable access to a loader from inside an async task
pub trait LoaderHandle {
    fn with_loader<R>(&self, f: impl FnOnce(&mut IncrementalLoader) -> R) -> R;
}

impl LoaderHandle for RefCell<IncrementalLoader> {
    fn with_loader<R>(&self, f: impl FnOnce(&mut IncrementalLoader) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Run one guarded load: begin, wait out the latency, append
///
/// Returns `None` when the trigger was dropped by the guard or the owner
/// went away during the wait.
pub async fn load_more<H>(
    handle: &H,
    latency: &dyn LoadLatency,
    delay: Duration,
    lifetime: &Lifetime,
) -> Option<LoadOutcome>
where
    H: LoaderHandle + ?Sized,
{
    if !lifetime.is_alive() {
        return None;
    }

    let ticket = handle.with_loader(|loader| loader.begin_load())?;

    latency.wait(delay).await;

    if !lifetime.is_alive() {
        log::debug!("Owner torn down during load, discarding result");
        return None;
    }

    Some(handle.with_loader(|loader| loader.finish_load(ticket)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::future::Future;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    /// Pending exactly once, so joined loads overlap
    struct YieldOnce(bool);

    impl Future for YieldOnce {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.0 {
                Poll::Ready(())
            } else {
                self.0 = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    struct YieldLatency;

    #[async_trait(?Send)]
    impl LoadLatency for YieldLatency {
        async fn wait(&self, _duration: Duration) {
            YieldOnce(false).await
        }
    }

    const DELAY: Duration = Duration::from_millis(500);

    #[test]
    fn test_initial_batch() {
        let loader = IncrementalLoader::new(50, 20);
        assert_eq!(
            loader.state(),
            LoadState { loaded_count: 20, current_page: 1, is_loading: false, has_more: true }
        );

        let small = IncrementalLoader::new(20, 20);
        assert!(!small.has_more());

        let empty = IncrementalLoader::new(0, 20);
        assert_eq!(empty.loaded_count(), 0);
        assert!(!empty.has_more());
    }

    #[test]
    fn test_scenario_fifty_by_twenty() {
        let loader = RefCell::new(IncrementalLoader::new(50, 20));
        let lifetime = Lifetime::new();

        block_on(async {
            let first = load_more(&loader, &ImmediateLatency, DELAY, &lifetime).await;
            assert_eq!(first, Some(LoadOutcome::Appended { added: 20 }));
            assert_eq!(loader.borrow().loaded_count(), 40);
            assert!(loader.borrow().has_more());

            let second = load_more(&loader, &ImmediateLatency, DELAY, &lifetime).await;
            assert_eq!(second, Some(LoadOutcome::Appended { added: 10 }));
            assert_eq!(loader.borrow().loaded_count(), 50);
            assert!(!loader.borrow().has_more());

            let third = load_more(&loader, &ImmediateLatency, DELAY, &lifetime).await;
            assert_eq!(third, None);
            assert_eq!(loader.borrow().loaded_count(), 50);
        });
    }

    #[test]
    fn test_total_loads_is_ceil_len_over_page() {
        for (len, page) in [(1, 1), (7, 3), (50, 20), (60, 20), (101, 10)] {
            let mut loader = IncrementalLoader::new(len, page);
            let mut loads = 1;
            let mut last_batch = loader.loaded_count();

            while let Some(ticket) = loader.begin_load() {
                match loader.finish_load(ticket) {
                    LoadOutcome::Appended { added } => last_batch = added,
                    LoadOutcome::Stale => panic!("unexpected stale load"),
                }
                loads += 1;
            }

            let expected = len.div_ceil(page);
            assert_eq!(loads, expected, "len {} page {}", len, page);
            assert_eq!(last_batch, len - (expected - 1) * page);
            assert!(!loader.has_more());
        }
    }

    #[test]
    fn test_overlapping_triggers_append_once() {
        let loader = RefCell::new(IncrementalLoader::new(50, 20));
        let lifetime = Lifetime::new();

        let (manual, observer) = block_on(async {
            futures::join!(
                load_more(&loader, &YieldLatency, DELAY, &lifetime),
                load_more(&loader, &YieldLatency, DELAY, &lifetime),
            )
        });

        assert_eq!(manual, Some(LoadOutcome::Appended { added: 20 }));
        assert_eq!(observer, None);
        assert_eq!(loader.borrow().loaded_count(), 40);
        assert!(!loader.borrow().is_loading());
    }

    #[test]
    fn test_begin_while_loading_is_noop() {
        let mut loader = IncrementalLoader::new(50, 20);
        let ticket = loader.begin_load().expect("first load starts");
        assert!(loader.is_loading());
        assert!(loader.begin_load().is_none());

        loader.finish_load(ticket);
        assert_eq!(loader.loaded_count(), 40);
    }

    #[test]
    fn test_reset_discards_in_flight_load() {
        let mut loader = IncrementalLoader::new(50, 20);
        let ticket = loader.begin_load().expect("load starts");

        loader.reset(30);
        assert_eq!(loader.finish_load(ticket), LoadOutcome::Stale);
        assert_eq!(loader.state(), LoadState { loaded_count: 20, current_page: 1, is_loading: false, has_more: true });
    }

    #[test]
    fn test_teardown_drops_completion() {
        let loader = RefCell::new(IncrementalLoader::new(50, 20));
        let lifetime = Lifetime::new();

        let result = block_on(async {
            let load = load_more(&loader, &YieldLatency, DELAY, &lifetime);
            let teardown = async { lifetime.end() };
            futures::join!(load, teardown).0
        });

        assert_eq!(result, None);
        assert_eq!(loader.borrow().loaded_count(), 20);

        // Nothing runs on a dead owner
        let result = block_on(load_more(&loader, &ImmediateLatency, DELAY, &lifetime));
        assert_eq!(result, None);
    }

    #[test]
    fn test_visible_prefix() {
        let items: Vec<u32> = (0..50).collect();
        let mut loader = IncrementalLoader::new(items.len(), 20);
        assert_eq!(loader.visible(&items), &items[..20]);

        let ticket = loader.begin_load().expect("load starts");
        loader.finish_load(ticket);
        assert_eq!(loader.visible(&items).len(), 40);

        // Shorter slice than the loader believes
        assert_eq!(loader.visible(&items[..5]).len(), 5);
    }

    #[test]
    fn test_zero_page_size_is_promoted() {
        let loader = IncrementalLoader::new(5, 0);
        assert_eq!(loader.page_size(), 1);
        assert_eq!(loader.loaded_count(), 1);
    }
}
