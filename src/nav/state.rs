use std::rc::Rc;

use yew::prelude::*;

use crate::config::SCROLL_THRESHOLD_PX;

/// Presentation state of the page header.
///
/// Holds the two flags the header renders from: whether the viewport has
/// scrolled past the threshold, and whether the mobile menu is open. The
/// flags never read each other; every transition touches exactly one.
#[derive(Debug, Clone, PartialEq)]
pub struct NavState {
    threshold: f64,
    past_threshold: bool,
    menu_open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavAction {
    /// A scroll notification carrying the current vertical offset.
    Scrolled(f64),
    ToggleMenu,
    /// A navigation link was activated.
    Navigate,
}

impl Default for NavState {
    fn default() -> Self {
        Self::with_threshold(SCROLL_THRESHOLD_PX)
    }
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            past_threshold: false,
            menu_open: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_past_threshold(&self) -> bool {
        self.past_threshold
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Re-evaluates the scroll flag against `offset`. Returns true if it changed.
    ///
    /// An offset equal to the threshold is not past it. NaN compares false,
    /// so a bogus reading resets the header to its transparent style.
    pub fn observe_scroll(&mut self, offset: f64) -> bool {
        let past = offset > self.threshold;
        let changed = past != self.past_threshold;
        self.past_threshold = past;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Closes the mobile menu regardless of its previous value.
    pub fn navigate(&mut self) -> bool {
        let changed = self.menu_open;
        self.menu_open = false;
        changed
    }

    /// Applies `action`, returning whether anything changed.
    pub fn apply(&mut self, action: NavAction) -> bool {
        match action {
            NavAction::Scrolled(offset) => self.observe_scroll(offset),
            NavAction::ToggleMenu => {
                self.toggle_menu();
                true
            }
            NavAction::Navigate => self.navigate(),
        }
    }
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            // Same Rc, so use_reducer skips the re-render on idle scroll events.
            self
        }
    }
}

/// Adapts a dispatcher into the callback every in-page link fires on click.
///
/// Desktop links, overlay links, hero buttons and footer links all go
/// through this, so following any anchor closes the mobile menu.
pub fn navigate_callback(dispatch: Callback<NavAction>) -> Callback<()> {
    dispatch.reform(|_: ()| NavAction::Navigate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_closed_and_transparent() {
        let state = NavState::new();
        assert!(!state.is_past_threshold());
        assert!(!state.is_menu_open());
        assert_eq!(state.threshold(), SCROLL_THRESHOLD_PX);
    }

    #[test]
    fn threshold_is_strict() {
        let mut state = NavState::with_threshold(50.0);
        state.observe_scroll(50.0);
        assert!(!state.is_past_threshold());
        state.observe_scroll(50.5);
        assert!(state.is_past_threshold());
        state.observe_scroll(50.0);
        assert!(!state.is_past_threshold());
    }

    #[test]
    fn offset_sequence_maps_directly_to_threshold_comparison() {
        let mut state = NavState::with_threshold(50.0);
        let seen: Vec<bool> = [0.0, 10.0, 60.0, 40.0]
            .into_iter()
            .map(|offset| {
                state.observe_scroll(offset);
                state.is_past_threshold()
            })
            .collect();
        assert_eq!(seen, vec![false, false, true, false]);
    }

    #[test]
    fn observe_scroll_reports_changes_only() {
        let mut state = NavState::with_threshold(50.0);
        assert!(!state.observe_scroll(10.0));
        assert!(state.observe_scroll(80.0));
        assert!(!state.observe_scroll(900.0));
        assert!(state.observe_scroll(0.0));
    }

    #[test]
    fn nan_and_negative_offsets_are_not_past_threshold() {
        let mut state = NavState::with_threshold(50.0);
        state.observe_scroll(100.0);
        state.observe_scroll(f64::NAN);
        assert!(!state.is_past_threshold());
        state.observe_scroll(-20.0);
        assert!(!state.is_past_threshold());
    }

    #[test]
    fn toggle_parity() {
        let mut state = NavState::new();
        for n in 1..=6 {
            state.toggle_menu();
            assert_eq!(state.is_menu_open(), n % 2 == 1, "after {n} toggles");
        }
    }

    #[test]
    fn navigate_always_closes() {
        let mut state = NavState::new();
        state.toggle_menu();
        state.toggle_menu();
        state.toggle_menu();
        assert!(state.is_menu_open());

        assert!(state.navigate());
        assert!(!state.is_menu_open());
        assert!(!state.navigate());
        assert!(!state.is_menu_open());
    }

    #[test]
    fn menu_and_scroll_flags_are_independent() {
        let mut state = NavState::with_threshold(50.0);
        state.toggle_menu();
        state.observe_scroll(200.0);
        assert!(state.is_menu_open());
        state.navigate();
        assert!(state.is_past_threshold());
        state.observe_scroll(0.0);
        assert!(!state.is_menu_open());
        state.toggle_menu();
        assert!(!state.is_past_threshold());
        assert!(state.is_menu_open());
    }

    #[test]
    fn reduce_keeps_rc_when_nothing_changes() {
        let state = Rc::new(NavState::with_threshold(50.0));
        let same = state.clone().reduce(NavAction::Scrolled(10.0));
        assert!(Rc::ptr_eq(&state, &same));

        let same = state.clone().reduce(NavAction::Navigate);
        assert!(Rc::ptr_eq(&state, &same));

        let scrolled = state.clone().reduce(NavAction::Scrolled(60.0));
        assert!(!Rc::ptr_eq(&state, &scrolled));
        assert!(scrolled.is_past_threshold());
        assert!(!state.is_past_threshold());
    }

    #[test]
    fn reduce_runs_toggle_then_navigate_scenario() {
        let actions = [
            NavAction::ToggleMenu,
            NavAction::ToggleMenu,
            NavAction::ToggleMenu,
        ];
        let state = actions
            .into_iter()
            .fold(Rc::new(NavState::new()), |state, action| state.reduce(action));
        assert!(state.is_menu_open());

        let state = state.reduce(NavAction::Navigate);
        assert!(!state.is_menu_open());
    }

    fn recording_dispatch(state: &Rc<std::cell::RefCell<NavState>>) -> Callback<NavAction> {
        let state = state.clone();
        Callback::from(move |action: NavAction| {
            state.borrow_mut().apply(action);
        })
    }

    #[test]
    fn link_callback_closes_menu_left_open_across_a_resize() {
        let state = Rc::new(std::cell::RefCell::new(NavState::new()));
        let dispatch = recording_dispatch(&state);

        // Opened on a narrow viewport, then a desktop link is clicked.
        dispatch.emit(NavAction::ToggleMenu);
        assert!(state.borrow().is_menu_open());

        let on_navigate = navigate_callback(dispatch);
        on_navigate.emit(());
        assert!(!state.borrow().is_menu_open());

        on_navigate.emit(());
        assert!(!state.borrow().is_menu_open());
    }

    #[test]
    fn link_callback_leaves_scroll_flag_alone() {
        let state = Rc::new(std::cell::RefCell::new(NavState::with_threshold(50.0)));
        let dispatch = recording_dispatch(&state);
        dispatch.emit(NavAction::Scrolled(120.0));

        navigate_callback(dispatch).emit(());
        assert!(state.borrow().is_past_threshold());
    }
}
