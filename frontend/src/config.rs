use log::Level;
use serde::Serialize;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Notification timings, in milliseconds
pub const NOTIFICATION_ENTER_DELAY_MS: u32 = 100;
pub const NOTIFICATION_AUTO_DISMISS_MS: u32 = 5_000;
pub const NOTIFICATION_EXIT_MS: u32 = 300;

/// Simulated network latency of the contact form.
pub const SUBMIT_LATENCY_MS: u32 = 2_000;

pub const BUTTON_PRESS_MS: u32 = 150;

// Scroll geometry, in CSS pixels
pub const NAVBAR_SCROLLED_THRESHOLD: f64 = 100.0;
pub const NAV_SCROLL_OFFSET: f64 = 80.0;
pub const ACTIVE_SECTION_OFFSET: f64 = 100.0;

/// Options passed to the animate-on-scroll library when the page provides it.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AosOptions {
    pub duration: u32,
    pub once: bool,
    pub offset: u32,
}

pub fn aos_options() -> AosOptions {
    AosOptions {
        duration: 1_000,
        once: true,
        offset: 100,
    }
}
