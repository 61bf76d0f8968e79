//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::Window;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL hash, including the '#' prefix.
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Reload the current page.
pub fn reload() {
    if let Some(window) = window() {
        let _ = window.location().reload();
    }
}
