//! Browser console logging.
//!
//! Messages go to `console.debug`/`info`/`warn` in the browser. On other
//! targets there is no console to write to and the calls compile away,
//! which keeps native unit tests free of JS imports.

#[cfg(target_arch = "wasm32")]
pub fn debug(message: &str) {
    web_sys::console::debug_1(&message.into());
}

#[cfg(target_arch = "wasm32")]
pub fn info(message: &str) {
    web_sys::console::info_1(&message.into());
}

#[cfg(target_arch = "wasm32")]
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn debug(_message: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn info(_message: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(_message: &str) {}
