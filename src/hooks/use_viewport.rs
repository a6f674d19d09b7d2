use dioxus::prelude::*;

use super::dom::{element_metrics, set_element_scroll_top, WindowListener};
use crate::listing::{Viewport, ViewportTracker};

/// Viewport of one scroll container, as seen by a component
#[derive(Clone)]
pub struct UseViewport {
    /// DOM id to put on the scroll container
    pub container_id: String,
    /// Latest measurement; reading it subscribes the component
    pub viewport: Signal<Viewport>,
    tracker: ViewportTracker,
}

impl UseViewport {
    /// Scroll handler for the container's `onscroll`
    pub fn on_scroll(&self) {
        if let Some((scroll_top, _, _)) = element_metrics(&self.container_id) {
            self.tracker.on_scroll(scroll_top);
        }
    }

    pub fn scroll_to_top(&self) {
        set_element_scroll_top(&self.container_id, 0.0);
        self.tracker.on_scroll(0.0);
    }
}

fn measure(tracker: &ViewportTracker, container_id: &str) {
    if let Some((_, width, height)) = element_metrics(container_id) {
        tracker.on_resize(width, height);
    }
}

/// Track scroll offset and size of a container
///
/// The container size is measured on mount and on every window resize; the
/// resize listener is removed when the component is dropped.
pub fn use_viewport(initial: Viewport) -> UseViewport {
    let container_id = use_hook(|| crate::utils::generate_dom_id("listing-viewport"));
    let tracker = use_hook(|| ViewportTracker::new(initial));
    let mut viewport = use_signal(|| tracker.current());

    // Mirror tracker updates into the signal until the component is dropped
    let tracker_for_sub = tracker.clone();
    let mut subscription = use_signal(move || Some(tracker_for_sub.subscribe(move |v| viewport.set(v))));

    #[cfg_attr(not(target_family = "wasm"), allow(unused_mut))]
    let mut resize_listener = use_signal(|| None::<WindowListener>);

    #[cfg_attr(not(target_family = "wasm"), allow(unused_variables))]
    let tracker_for_effect = tracker.clone();
    #[cfg_attr(not(target_family = "wasm"), allow(unused_variables))]
    let id_for_effect = container_id.clone();

    use_effect(move || {
        #[cfg(target_family = "wasm")]
        {
            measure(&tracker_for_effect, &id_for_effect);

            let tracker = tracker_for_effect.clone();
            let id = id_for_effect.clone();
            let listener = WindowListener::new("resize", move || measure(&tracker, &id));
            resize_listener.set(listener);
        }
    });

    let tracker_for_drop = tracker.clone();
    let container_id_for_drop = container_id.clone();
    use_drop(move || {
        // Dropping the guard removes the listener
        resize_listener.write().take();
        let released = subscription.write().take();
        if let Some(released) = released {
            released.unsubscribe();
            log::trace!(
                "Viewport {} released, {} listeners left",
                container_id_for_drop,
                tracker_for_drop.subscriber_count()
            );
        }
    });

    UseViewport {
        container_id,
        viewport,
        tracker,
    }
}
