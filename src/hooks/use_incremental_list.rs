use dioxus::prelude::*;
use std::rc::Rc;

use crate::listing::loader::{load_more, LoaderHandle};
use crate::listing::{IncrementalLoader, Lifetime, ListingConfig, LoadLatency};

impl LoaderHandle for Signal<IncrementalLoader> {
    fn with_loader<R>(&self, f: impl FnOnce(&mut IncrementalLoader) -> R) -> R {
        // Work on a copy so a rejected trigger does not cause a re-render
        let mut loader = self.peek().clone();
        let result = f(&mut loader);
        if *self.peek() != loader {
            let mut signal = *self;
            signal.set(loader);
        }
        result
    }
}

/// Incremental loading state of one list component
#[derive(Clone, Copy, PartialEq)]
pub struct UseIncrementalList {
    pub loader: Signal<IncrementalLoader>,
    /// True when a trigger would start a load
    pub can_load: Memo<bool>,
    lifetime: Signal<Lifetime>,
    latency: Signal<Rc<dyn LoadLatency>>,
    config: Signal<ListingConfig>,
}

impl UseIncrementalList {
    /// Request the next batch
    ///
    /// Manual clicks and the sentinel observer both call this; triggers that
    /// arrive while a load is in flight or after exhaustion are dropped.
    pub fn load_more(&self) {
        let loader = self.loader;
        let lifetime = self.lifetime.peek().clone();
        let latency = Rc::clone(&*self.latency.peek());
        let delay = self.config.peek().load_latency;

        spawn(async move {
            match load_more(&loader, latency.as_ref(), delay, &lifetime).await {
                Some(outcome) => log::debug!("Load finished: {:?}", outcome),
                None => log::trace!("Load trigger dropped"),
            }
        });
    }
}

/// Growing-prefix loader over `items`
///
/// The loader is reset to the first batch whenever the collection or the
/// filter `revision` changes, which also invalidates a load that is still in
/// flight.
#[allow(clippy::ptr_arg)]
pub fn use_incremental_list<T>(items: &Vec<T>, revision: u64) -> UseIncrementalList
where
    T: Clone + PartialEq + 'static,
{
    let config = use_context::<ListingConfig>();
    let latency = use_context::<Rc<dyn LoadLatency>>();

    let mut loader = use_signal(|| IncrementalLoader::new(items.len(), config.effective_page_size()));
    let lifetime = use_signal(Lifetime::new);
    let latency = use_signal(move || latency);
    let config = use_signal(move || config);

    use_effect(use_reactive((items, &revision), move |(items, revision)| {
        log::debug!(
            "Collection changed (filter revision {}), resetting incremental loader to {} items",
            revision,
            items.len()
        );
        loader.write().reset(items.len());
    }));

    let can_load = use_memo(move || {
        let loader = loader.read();
        loader.has_more() && !loader.is_loading()
    });

    use_drop(move || {
        lifetime.peek().end();
    });

    UseIncrementalList {
        loader,
        can_load,
        lifetime,
        latency,
        config,
    }
}
