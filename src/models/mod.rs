//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`NavItem`], [`NavGroup`], [`IconId`], [`MatchMode`] - Navigation catalog entries
//! - [`RoutePath`] - Hash-based route paths

mod nav;
mod route;

pub use nav::{IconId, MatchMode, NavGroup, NavItem};
pub use route::RoutePath;
