//! Header navigation: state machine, render projections and the scroll signal.

pub mod scroll;
pub mod state;
pub mod style;

pub use scroll::{ScrollSource, ScrollSubscription, WindowScroll};
pub use state::{navigate_callback, NavAction, NavState};
pub use style::{overlay_visible, HeaderStyle, ToggleIcon};
