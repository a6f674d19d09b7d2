use dioxus::core::Task;
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use super::dom::ObserverGuard;

/// Fraction of the sentinel that must be visible before it counts
pub const SENTINEL_THRESHOLD: f64 = 0.1;

/// Infinite scroll hook that triggers loading when a sentinel element enters
/// the scroll container
///
/// Returns a unique ID to assign to a sentinel element at the bottom of the
/// list. While `enabled` is true the sentinel is observed; when it becomes
/// visible `callback` runs. The callback is expected to be guarded (a trigger
/// during an in-flight load is a no-op), so nothing is debounced here. The
/// observer is re-created whenever `enabled` flips back on, which fires again
/// at once if the sentinel is still on screen.
///
/// # Arguments
/// * `callback` - Function to call when more content should be loaded
/// * `enabled` - Whether more content can be loaded right now
/// * `root_id` - DOM id of the scroll container, or `None` for the page
///
/// # Example
/// ```ignore
/// let sentinel_id = use_infinite_scroll(move || list.load_more(), can_load, Some(container_id));
///
/// // In your rsx:
/// div { id: "{sentinel_id}", class: "h-4" }
/// ```
pub fn use_infinite_scroll<F>(callback: F, enabled: Memo<bool>, root_id: Option<String>) -> String
where
    F: FnMut() + 'static,
{
    let sentinel_id = use_hook(|| crate::utils::generate_dom_id("scroll-sentinel"));

    // Store callback in hook so it persists across renders
    #[cfg_attr(not(target_family = "wasm"), allow(unused_variables))]
    let cb = use_hook(|| Rc::new(RefCell::new(callback)));

    let mut observer = use_signal(|| None::<ObserverGuard>);
    let mut pending = use_signal(|| None::<Task>);

    #[cfg_attr(not(target_family = "wasm"), allow(unused_variables))]
    let id_for_effect = sentinel_id.clone();

    use_effect(move || {
        let is_enabled = *enabled.read();

        if let Some(task) = pending.write().take() {
            task.cancel();
        }
        // Disconnects the previous observer
        observer.set(None);

        if !is_enabled {
            log::debug!("Infinite scroll paused");
            return;
        }

        #[cfg(target_family = "wasm")]
        {
            let id = id_for_effect.clone();
            let root = root_id.clone();
            let cb = cb.clone();

            let task = spawn(async move {
                // Let the sentinel reach the DOM
                gloo_timers::future::TimeoutFuture::new(50).await;

                let guard = ObserverGuard::observe(&id, root.as_deref(), SENTINEL_THRESHOLD, move || {
                    log::debug!("Sentinel visible, requesting more items");
                    if let Ok(mut cb) = cb.try_borrow_mut() {
                        cb();
                    }
                });
                observer.set(guard);
            });
            pending.set(Some(task));
        }

        #[cfg(not(target_family = "wasm"))]
        {
            let _ = &root_id;
        }
    });

    use_drop(move || {
        if let Some(task) = pending.write().take() {
            task.cancel();
        }
        observer.write().take();
    });

    sentinel_id
}
