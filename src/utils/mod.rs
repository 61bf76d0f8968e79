//! Browser utility modules.
//!
//! Provides:
//! - [`dom`] - Window access and URL hash helpers
//! - [`log`] - Browser console logging

pub mod dom;
pub mod log;
