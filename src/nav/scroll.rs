use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Something that reports the vertical scroll offset of the viewport.
pub trait ScrollSource {
    /// Registers `on_scroll`. The listener stays attached for as long as the
    /// returned subscription is alive.
    fn subscribe(&self, on_scroll: Box<dyn FnMut(f64)>) -> ScrollSubscription;
}

/// Guard for an attached scroll listener. Detaches it exactly once, either
/// through [`ScrollSubscription::unsubscribe`] or when dropped.
#[must_use = "dropping the subscription detaches the listener"]
pub struct ScrollSubscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl ScrollSubscription {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    /// A subscription with nothing to detach.
    pub fn inert() -> Self {
        Self { detach: None }
    }

    pub fn is_attached(&self) -> bool {
        self.detach.is_some()
    }

    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.release();
    }
}

/// Scroll events of the browser window.
pub struct WindowScroll {
    window: Window,
}

impl WindowScroll {
    pub fn current() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

impl ScrollSource for WindowScroll {
    fn subscribe(&self, mut on_scroll: Box<dyn FnMut(f64)>) -> ScrollSubscription {
        let window = self.window.clone();
        let reader = self.window.clone();

        let scroll_callback = Closure::wrap(Box::new(move || match reader.scroll_y() {
            Ok(offset) => on_scroll(offset),
            Err(err) => warn!("Could not read scroll offset: {:?}", err),
        }) as Box<dyn FnMut()>);

        if let Err(err) = window
            .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
        {
            warn!("Could not attach scroll listener: {:?}", err);
            return ScrollSubscription::inert();
        }
        debug!("Scroll listener attached");

        // The closure moves into the guard so it outlives the registration.
        ScrollSubscription::new(move || {
            if let Err(err) = window.remove_event_listener_with_callback(
                "scroll",
                scroll_callback.as_ref().unchecked_ref(),
            ) {
                warn!("Could not detach scroll listener: {:?}", err);
            }
            debug!("Scroll listener detached");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::state::NavState;
    use pretty_assertions::assert_eq;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    type Listener = Box<dyn FnMut(f64)>;

    /// Scroll source driven by hand.
    #[derive(Default, Clone)]
    struct ManualScroll {
        listeners: Rc<RefCell<Vec<Option<Listener>>>>,
    }

    impl ManualScroll {
        fn emit(&self, offset: f64) {
            for listener in self.listeners.borrow_mut().iter_mut().flatten() {
                listener(offset);
            }
        }

        fn attached(&self) -> usize {
            self.listeners.borrow().iter().filter(|l| l.is_some()).count()
        }
    }

    impl ScrollSource for ManualScroll {
        fn subscribe(&self, on_scroll: Box<dyn FnMut(f64)>) -> ScrollSubscription {
            let slot = {
                let mut listeners = self.listeners.borrow_mut();
                listeners.push(Some(on_scroll));
                listeners.len() - 1
            };
            let listeners = self.listeners.clone();
            ScrollSubscription::new(move || {
                listeners.borrow_mut()[slot] = None;
            })
        }
    }

    fn track(source: &ManualScroll, state: &Rc<RefCell<NavState>>) -> ScrollSubscription {
        let state = state.clone();
        source.subscribe(Box::new(move |offset| {
            state.borrow_mut().observe_scroll(offset);
        }))
    }

    #[test]
    fn notifications_update_state_while_subscribed() {
        let source = ManualScroll::default();
        let state = Rc::new(RefCell::new(NavState::with_threshold(50.0)));
        let _subscription = track(&source, &state);

        source.emit(60.0);
        assert!(state.borrow().is_past_threshold());
        source.emit(40.0);
        assert!(!state.borrow().is_past_threshold());
    }

    #[test]
    fn no_mutation_after_teardown() {
        let source = ManualScroll::default();
        let state = Rc::new(RefCell::new(NavState::with_threshold(50.0)));
        let subscription = track(&source, &state);

        source.emit(80.0);
        assert!(state.borrow().is_past_threshold());

        drop(subscription);
        assert_eq!(source.attached(), 0);

        let before = state.borrow().clone();
        source.emit(0.0);
        assert_eq!(*state.borrow(), before);
    }

    #[test]
    fn explicit_unsubscribe_detaches() {
        let source = ManualScroll::default();
        let state = Rc::new(RefCell::new(NavState::with_threshold(50.0)));
        let subscription = track(&source, &state);
        assert_eq!(source.attached(), 1);

        subscription.unsubscribe();
        assert_eq!(source.attached(), 0);
        source.emit(500.0);
        assert!(!state.borrow().is_past_threshold());
    }

    #[test]
    fn detach_runs_exactly_once() {
        let calls = Rc::new(Cell::new(0));
        let subscription = {
            let calls = calls.clone();
            ScrollSubscription::new(move || calls.set(calls.get() + 1))
        };
        assert!(subscription.is_attached());
        subscription.unsubscribe();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn inert_subscription_is_not_attached() {
        let subscription = ScrollSubscription::inert();
        assert!(!subscription.is_attached());
    }
}
