use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// One measurement of the scroll container
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Vertical scroll offset in pixels
    pub scroll_top: f64,
    /// Visible height in pixels
    pub height: f64,
    /// Container width in pixels
    pub width: f64,
}

type Listener = Rc<RefCell<dyn FnMut(Viewport)>>;

struct TrackerInner {
    current: Viewport,
    listeners: Vec<(u64, Listener)>,
    next_id: u64,
}

/// Observes scroll and resize events for one container and fans each
/// measurement out to subscribers
///
/// Cloning yields another handle to the same tracker. Updates are not
/// throttled; subscribers see every event.
#[derive(Clone)]
pub struct ViewportTracker {
    inner: Rc<RefCell<TrackerInner>>,
}

impl ViewportTracker {
    pub fn new(initial: Viewport) -> Self {
        Self {
            inner: Rc::new(RefCell::new(TrackerInner {
                current: sanitize_viewport(initial),
                listeners: Vec::new(),
                next_id: 0,
            })),
        }
    }

    pub fn current(&self) -> Viewport {
        self.inner.borrow().current
    }

    /// Record a scroll event
    pub fn on_scroll(&self, scroll_top: f64) {
        let scroll_top = sanitize(scroll_top);
        self.update(|viewport| viewport.scroll_top = scroll_top);
    }

    /// Record a mount or resize measurement
    pub fn on_resize(&self, width: f64, height: f64) {
        let width = sanitize(width);
        let height = sanitize(height);
        self.update(|viewport| {
            viewport.width = width;
            viewport.height = height;
        });
    }

    /// Register a listener; it stays registered until the returned
    /// subscription is dropped or unsubscribed
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(Viewport) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        let listener: Listener = Rc::new(RefCell::new(listener));
        inner.listeners.push((id, listener));

        Subscription {
            tracker: Rc::downgrade(&self.inner),
            id,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    fn update(&self, apply: impl FnOnce(&mut Viewport)) {
        // Snapshot listeners so one may unsubscribe (or subscribe) while notified
        let (viewport, listeners) = {
            let mut inner = self.inner.borrow_mut();
            apply(&mut inner.current);
            let listeners: Vec<Listener> = inner.listeners.iter().map(|(_, l)| l.clone()).collect();
            (inner.current, listeners)
        };

        for listener in listeners {
            if let Ok(mut listener) = listener.try_borrow_mut() {
                listener(viewport);
            } else {
                log::warn!("Viewport listener re-entered, skipping nested update");
            }
        }
    }
}

/// Registration handle returned by [`ViewportTracker::subscribe`]
pub struct Subscription {
    tracker: Weak<RefCell<TrackerInner>>,
    id: u64,
}

impl Subscription {
    pub fn unsubscribe(self) {
        // Drop does the work
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.tracker.upgrade() {
            if let Ok(mut inner) = inner.try_borrow_mut() {
                inner.listeners.retain(|(id, _)| *id != self.id);
            }
        }
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn sanitize_viewport(viewport: Viewport) -> Viewport {
    Viewport {
        scroll_top: sanitize(viewport.scroll_top),
        height: sanitize(viewport.height),
        width: sanitize(viewport.width),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_subscribers_see_every_update() {
        let tracker = ViewportTracker::new(Viewport::default());
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_clone = seen.clone();
        let _subscription = tracker.subscribe(move |viewport| seen_clone.borrow_mut().push(viewport));

        tracker.on_resize(1024.0, 600.0);
        tracker.on_scroll(10.0);
        tracker.on_scroll(20.0);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0].width, 1024.0);
        assert_eq!(seen[2], Viewport { scroll_top: 20.0, height: 600.0, width: 1024.0 });
    }

    #[test]
    fn test_dropped_subscription_stops_updates() {
        let tracker = ViewportTracker::new(Viewport::default());
        let calls = Rc::new(Cell::new(0));

        let calls_clone = calls.clone();
        let subscription = tracker.subscribe(move |_| calls_clone.set(calls_clone.get() + 1));
        tracker.on_scroll(5.0);
        assert_eq!(tracker.subscriber_count(), 1);

        subscription.unsubscribe();
        tracker.on_scroll(6.0);

        assert_eq!(calls.get(), 1);
        assert_eq!(tracker.subscriber_count(), 0);
        assert_eq!(tracker.current().scroll_top, 6.0);
    }

    #[test]
    fn test_subscription_outliving_tracker() {
        let tracker = ViewportTracker::new(Viewport::default());
        let subscription = tracker.subscribe(|_| {});
        drop(tracker);
        drop(subscription);
    }

    #[test]
    fn test_invalid_measurements_coerced() {
        let tracker = ViewportTracker::new(Viewport { scroll_top: -3.0, height: f64::NAN, width: 800.0 });
        assert_eq!(tracker.current(), Viewport { scroll_top: 0.0, height: 0.0, width: 800.0 });

        tracker.on_scroll(-50.0);
        tracker.on_resize(f64::INFINITY, -1.0);
        assert_eq!(tracker.current(), Viewport::default());
    }

    #[test]
    fn test_clones_share_state() {
        let tracker = ViewportTracker::new(Viewport::default());
        let other = tracker.clone();
        other.on_scroll(42.0);
        assert_eq!(tracker.current().scroll_top, 42.0);
    }
}
