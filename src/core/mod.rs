//! Navigation core: catalog, route resolution and expansion state.
//!
//! This module provides:
//! - [`NavigationCatalog`] and [`CatalogBuilder`] for the static entry registry
//! - [`resolver`] functions deciding which entries are active for a path
//! - [`ExpansionState`] tracking which groups are open
//! - [`render_model`] combining all three into a [`RenderModel`]

mod catalog;
pub mod error;
mod expansion;
mod render;
pub mod resolver;

pub use catalog::{CatalogBuilder, NavigationCatalog, Slot};
pub use error::CatalogError;
pub use expansion::ExpansionState;
pub use render::{RenderModel, ResolvedGroup, ResolvedItem, Section, render_model};
