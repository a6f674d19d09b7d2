//! Browser handles that clean up after themselves
//!
//! Both guards detach from the DOM when dropped, so storing one in a signal
//! and clearing it in `use_drop` is all a component has to do. Off the wasm
//! target they are inert.

#[cfg(target_family = "wasm")]
use wasm_bindgen::{closure::Closure, JsCast};

/// A `window` event listener, removed on drop
pub struct WindowListener {
    #[cfg(target_family = "wasm")]
    event: &'static str,
    #[cfg(target_family = "wasm")]
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    #[cfg(target_family = "wasm")]
    pub fn new<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);

        if let Err(e) = window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            log::warn!("Failed to add {} listener: {:?}", event, e);
            return None;
        }

        Some(Self { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        #[cfg(target_family = "wasm")]
        {
            if let Some(window) = web_sys::window() {
                window
                    .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
                    .ok();
                log::debug!("Removed window {} listener", self.event);
            }
        }
    }
}

/// An IntersectionObserver watching one element, disconnected on drop
pub struct ObserverGuard {
    #[cfg(target_family = "wasm")]
    observer: web_sys::IntersectionObserver,
    #[cfg(target_family = "wasm")]
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl ObserverGuard {
    /// Observe `target_id`, calling `on_visible` whenever it starts intersecting
    /// `root_id` (or the browser viewport when `None`)
    #[cfg(target_family = "wasm")]
    pub fn observe<F>(target_id: &str, root_id: Option<&str>, threshold: f64, mut on_visible: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let document = web_sys::window()?.document()?;

        let target = match document.get_element_by_id(target_id) {
            Some(e) => e,
            None => {
                log::debug!("Sentinel element {} not in the DOM yet", target_id);
                return None;
            }
        };

        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            let visible = entries.iter().any(|entry| {
                entry
                    .dyn_into::<web_sys::IntersectionObserverEntry>()
                    .map(|entry| entry.is_intersecting())
                    .unwrap_or(false)
            });
            if visible {
                on_visible();
            }
        }) as Box<dyn FnMut(js_sys::Array)>);

        let options = web_sys::IntersectionObserverInit::new();
        if let Some(root_id) = root_id {
            let root = document.get_element_by_id(root_id);
            options.set_root(root.as_ref());
        }
        options.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold));

        let observer = match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(obs) => obs,
            Err(e) => {
                log::error!("Failed to create IntersectionObserver: {:?}", e);
                return None;
            }
        };

        observer.observe(&target);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        #[cfg(target_family = "wasm")]
        {
            self.observer.disconnect();
        }
    }
}

/// Scroll the page back to the top
pub fn scroll_window_to_top() {
    #[cfg(target_family = "wasm")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

/// Read `(scroll_top, client_width, client_height)` of an element
pub fn element_metrics(id: &str) -> Option<(f64, f64, f64)> {
    #[cfg(target_family = "wasm")]
    {
        let element = web_sys::window()?.document()?.get_element_by_id(id)?;
        Some((
            element.scroll_top() as f64,
            element.client_width() as f64,
            element.client_height() as f64,
        ))
    }

    #[cfg(not(target_family = "wasm"))]
    {
        let _ = id;
        None
    }
}

/// Set an element's scroll offset
pub fn set_element_scroll_top(id: &str, scroll_top: f64) {
    #[cfg(target_family = "wasm")]
    {
        if let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        {
            element.set_scroll_top(scroll_top as i32);
        }
    }

    #[cfg(not(target_family = "wasm"))]
    {
        let _ = (id, scroll_top);
    }
}
