//! Root application module.
//!
//! Contains the main App component, the NavSession controller, and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::config;
use crate::core::{ExpansionState, NavigationCatalog, RenderModel, render_model};
use crate::models::RoutePath;
use crate::utils::{dom, log};

// ============================================================================
// NavSession
// ============================================================================

/// Session-scoped navigation state managed with Leptos signals.
///
/// Owns the current route path and the set of expanded sidebar groups.
/// Components read through [`NavSession::model`] and mutate only through
/// [`NavSession::toggle`] and [`NavSession::set_path`].
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals or a
/// `'static` reference. A fresh session (all groups collapsed) is created
/// whenever [`App`] mounts.
#[derive(Clone, Copy)]
pub struct NavSession {
    catalog: &'static NavigationCatalog,
    current_path: RwSignal<String>,
    expansion: RwSignal<ExpansionState>,
    /// Single resolved snapshot shared by every component.
    model: Memo<RenderModel<'static>>,
}

impl NavSession {
    /// Creates a session starting at `initial_path` with every group collapsed.
    pub fn new(catalog: &'static NavigationCatalog, initial_path: RoutePath) -> Self {
        let current_path = RwSignal::new(initial_path.into_string());
        let expansion = RwSignal::new(ExpansionState::new());
        let model = Memo::new(move |_| {
            current_path.with(|path| {
                expansion.with(|expansion| render_model(catalog, path, expansion))
            })
        });

        Self {
            catalog,
            current_path,
            expansion,
            model,
        }
    }

    pub fn catalog(&self) -> &'static NavigationCatalog {
        self.catalog
    }

    /// Records a route change reported by the router.
    pub fn set_path(&self, path: RoutePath) {
        log::debug(&format!("route: {}", path.as_str()));
        self.current_path.set(path.into_string());
    }

    /// Current route path (tracked).
    pub fn current_path(&self) -> String {
        self.current_path.get()
    }

    /// Opens or collapses a sidebar group.
    ///
    /// Keys unknown to the catalog are still recorded.
    pub fn toggle(&self, key: &str) {
        if !self.catalog.contains_group(key) {
            log::warn(&format!("sidebar: toggling unknown group {key:?}"));
        }
        let open = self.expansion.try_update(|state| state.toggle(key));
        if let Some(open) = open {
            let verb = if open { "expanded" } else { "collapsed" };
            log::debug(&format!("sidebar: {key} {verb}"));
        }
    }

    /// Whether a group is open (tracked).
    pub fn is_open(&self, key: &str) -> bool {
        self.expansion.with(|state| state.is_open(key))
    }

    /// Memoized sidebar snapshot, recomputed when the path or expansion changes.
    pub fn model(&self) -> Memo<RenderModel<'static>> {
        self.model
    }

    /// Resolved sidebar for the current path and expansion state (tracked).
    pub fn render_model(&self) -> RenderModel<'static> {
        self.model.get()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Builds the navigation catalog and provides a fresh NavSession
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the hash router
#[component]
pub fn App() -> impl IntoView {
    let session = NavSession::new(config::catalog(), RoutePath::current());
    provide_context(session);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #f9fafb;
                    color: #374151;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #dc2626; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="margin-bottom: 2rem; color: #6b7280;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button on:click=move |_| dom::reload()>
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::group_keys;

    fn session() -> NavSession {
        NavSession::new(config::catalog(), RoutePath::from_hash("#/edits/loan"))
    }

    fn open_groups(session: &NavSession) -> Vec<&'static str> {
        session
            .render_model()
            .groups
            .iter()
            .filter(|g| g.open)
            .map(|g| g.group.key())
            .collect()
    }

    #[test]
    fn test_new_session_is_collapsed() {
        let session = session();
        assert_eq!(session.current_path(), "/edits/loan");
        for group in config::catalog().groups() {
            assert!(!session.is_open(group.key()), "{}", group.key());
        }
        assert!(open_groups(&session).is_empty());
        assert_eq!(session.render_model().active_trail(), ["EDIT", "EDIT LOAN"]);
    }

    #[test]
    fn test_groups_toggle_independently() {
        let session = session();
        session.toggle(group_keys::UPDATES);
        session.toggle(group_keys::REPORTS);

        assert!(session.is_open(group_keys::UPDATES));
        assert!(session.is_open(group_keys::REPORTS));
        assert!(!session.is_open(group_keys::EDITS));
        assert_eq!(open_groups(&session), [group_keys::UPDATES, group_keys::REPORTS]);

        session.toggle(group_keys::UPDATES);
        assert!(!session.is_open(group_keys::UPDATES));
        assert!(session.is_open(group_keys::REPORTS));
    }

    #[test]
    fn test_toggle_twice_restores_session() {
        let session = session();
        session.toggle(group_keys::EDITS);
        let before = session.render_model();

        session.toggle(group_keys::UPDATES);
        session.toggle(group_keys::UPDATES);
        assert_eq!(session.render_model(), before);
        assert!(session.is_open(group_keys::EDITS));
    }

    #[test]
    fn test_set_path_updates_model() {
        let session = session();
        session.set_path(RoutePath::from_hash("#/search/results/42"));

        assert_eq!(session.current_path(), "/search/results/42");
        let model = session.render_model();
        assert!(model.groups.iter().all(|g| !g.active));
        assert_eq!(model.active_trail(), ["Search"]);
        assert_eq!(session.model().get(), model);
    }

    #[test]
    fn test_unknown_key_is_recorded() {
        let session = session();
        let before = session.render_model();

        session.toggle("no-such-group");
        assert!(session.is_open("no-such-group"));
        assert_eq!(session.render_model(), before);
    }
}
