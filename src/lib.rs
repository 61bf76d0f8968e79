//! Navigation shell of the FYNEAUTO back-office dashboard.
//!
//! The [`core`] module holds the decision logic (catalog, active-route
//! resolution, group expansion); [`components`] renders it with Leptos.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
mod utils;

pub use app::{App, NavSession};
