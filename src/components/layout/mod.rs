//! Dashboard page layout.
//!
//! ## Layout
//!
//! - **Desktop (>= 1024px)**: sidebar on the left, header and page on the right
//! - **Smaller screens**: header and page only

use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::components::header::Header;
use crate::components::sidebar::Sidebar;
use crate::config::DESKTOP_MEDIA_QUERY;
use crate::utils::log;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

/// Persistent dashboard chrome around the current page.
#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    let is_desktop = use_media_query(DESKTOP_MEDIA_QUERY);

    // Session teardown is handled by the auth service, not the shell.
    let on_logout = Callback::new(move |_: ()| {
        log::info("logout requested");
    });

    view! {
        <div class=css::layout>
            <Show when=move || is_desktop.get()>
                <Sidebar on_logout=on_logout />
            </Show>
            <div class=css::column>
                <Header />
                <main class=css::main>{children()}</main>
            </div>
        </div>
    }
}
