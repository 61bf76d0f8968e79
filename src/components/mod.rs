//! UI components built with Leptos.
//!
//! - [`router`] - Hash routing (main entry point)
//! - [`layout`] - Dashboard layout (sidebar, header, page)
//! - [`sidebar`] - Navigation side panel
//! - [`header`] - Breadcrumb header
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod header;
pub mod icons;
pub mod layout;
pub mod router;
pub mod sidebar;

pub use router::AppRouter;
