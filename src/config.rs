use log::Level;

/// Scroll offset (in CSS pixels) above which the header turns opaque.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
