//! Application router component.
//!
//! Handles URL-based routing with hash history.
//! Uses native hashchange events instead of leptos_router.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the route path is derived from `#/path`
//! - **Layout never re-renders on navigation**: DashboardLayout is always mounted
//! - **hashchange events**: every change is forwarded to [`NavSession::set_path`]

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::NavSession;
use crate::components::layout::DashboardLayout;
#[cfg(target_arch = "wasm32")]
use crate::models::RoutePath;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// Keeps the session's current path in sync with the URL hash:
/// - `#/` → `/` (Dashboard)
/// - `#/edits/loan` → `/edits/loan`
/// - `#/search/results/42` → `/search/results/42`
#[component]
pub fn AppRouter() -> impl IntoView {
    let session = use_context::<NavSession>().expect("NavSession must be provided");

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            session.set_path(RoutePath::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    view! {
        <DashboardLayout>
            <PageOutlet session=session />
        </DashboardLayout>
    }
}

// ============================================================================
// Page Outlet
// ============================================================================

/// Placeholder for page content.
///
/// Pages are owned by their feature modules; the shell only shows which
/// route is current.
#[component]
fn PageOutlet(session: NavSession) -> impl IntoView {
    let model = session.model();

    let title = Memo::new(move |_| {
        model.with(|m| {
            m.active_trail()
                .last()
                .map(|label| label.to_string())
                .unwrap_or_else(|| "Page not found".to_string())
        })
    });

    view! {
        <section class=css::page>
            <h2 class=css::pageTitle>{move || title.get()}</h2>
            <p class=css::pagePath>{move || session.current_path()}</p>
        </section>
    }
}
