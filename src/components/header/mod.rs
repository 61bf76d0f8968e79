//! Dashboard header component.
//!
//! Shows where the user is: the active group and page labels, or the
//! application name when the route matches no sidebar entry.

use leptos::prelude::*;

use crate::app::NavSession;
use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/components/header/header.module.css");

/// Top bar with the breadcrumb of the current page.
#[component]
pub fn Header() -> impl IntoView {
    let session = use_context::<NavSession>().expect("NavSession must be provided");

    let model = session.model();

    let trail = Memo::new(move |_| {
        model.with(|m| {
            m.active_trail()
                .into_iter()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
    });

    view! {
        <header class=css::header>
            <nav class=css::breadcrumb aria-label="Breadcrumb">
                {move || {
                    let trail = trail.get();
                    if trail.is_empty() {
                        return view! { <span class=css::current>{APP_NAME}</span> }.into_any();
                    }
                    let last = trail.len() - 1;
                    trail
                        .into_iter()
                        .enumerate()
                        .map(|(i, label)| {
                            let class = if i == last { css::current } else { css::crumb };
                            view! { <span class=class>{label}</span> }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </nav>
        </header>
    }
}
