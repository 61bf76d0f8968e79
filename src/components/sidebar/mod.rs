//! Sidebar navigation component.
//!
//! Draws the session's resolved [`RenderModel`](crate::core::RenderModel):
//! top-level links, collapsible groups, footer links and the logout
//! button. Rows are keyed by their catalog slot and stay mounted across
//! route changes and toggles; only their classes and open state react.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::NavSession;
use crate::components::icons as ic;
use crate::config::{LOGO_ALT, LOGO_URL};
use crate::core::{NavigationCatalog, Slot};
use crate::models::{IconId, NavGroup, NavItem, RoutePath};

stylance::import_crate_style!(css, "src/components/sidebar/sidebar.module.css");

/// A top-level sidebar row, resolved against the static catalog.
#[derive(Clone, Copy)]
enum Row {
    Item(usize, &'static NavItem),
    Group(usize, &'static NavGroup),
}

impl Row {
    fn slot(&self) -> Slot {
        match *self {
            Self::Item(index, _) => Slot::Item(index),
            Self::Group(index, _) => Slot::Group(index),
        }
    }
}

fn rows(catalog: &'static NavigationCatalog) -> Vec<Row> {
    catalog
        .layout()
        .iter()
        .filter_map(|slot| match *slot {
            Slot::Item(index) => catalog.top_items().get(index).map(|item| Row::Item(index, item)),
            Slot::Group(index) => catalog.groups().get(index).map(|group| Row::Group(index, group)),
        })
        .collect()
}

/// Persistent side panel listing the dashboard sections.
///
/// `on_logout` runs when the Logout button is clicked; the shell itself
/// performs no logout.
#[component]
pub fn Sidebar(on_logout: Callback<()>) -> impl IntoView {
    let session = use_context::<NavSession>().expect("NavSession must be provided");
    let catalog = session.catalog();
    let model = session.model();
    let rows = rows(catalog);

    view! {
        <aside class=css::sidebar>
            <div class=css::logo>
                <img src=LOGO_URL alt=LOGO_ALT class=css::logoImage />
            </div>

            <nav class=css::nav>
                <For
                    each=move || rows.clone()
                    key=|row| row.slot()
                    children=move |row| match row {
                        Row::Item(index, item) => {
                            let active = Signal::derive(move || {
                                model.with(|m| m.top_items.get(index).is_some_and(|e| e.active))
                            });
                            view! { <TopLink item=item active=active /> }.into_any()
                        }
                        Row::Group(index, group) => {
                            view! { <GroupSection index=index group=group /> }.into_any()
                        }
                    }
                />
            </nav>

            <div class=css::footer>
                <For
                    each={move || catalog.footer().iter().enumerate().collect::<Vec<_>>()}
                    key={|(_, item)| item.path().to_string()}
                    children=move |(index, item)| {
                        let active = Signal::derive(move || {
                            model.with(|m| m.footer.get(index).is_some_and(|e| e.active))
                        });
                        view! { <TopLink item=item active=active /> }
                    }
                />
                <button class=css::link on:click=move |_| on_logout.run(())>
                    <NavIcon icon=Some(IconId::Logout) />
                    <span>"Logout"</span>
                </button>
            </div>
        </aside>
    }
}

/// Top-level or footer link.
#[component]
fn TopLink(item: &'static NavItem, active: Signal<bool>) -> impl IntoView {
    view! {
        <a
            href=RoutePath::href(item.path())
            class=move || link_class(active.get())
            aria-current=move || active.get().then_some("page")
        >
            <NavIcon icon=item.icon() />
            <span>{item.label()}</span>
            {item.has_badge().then(|| view! { <span class=css::badge></span> })}
        </a>
    }
}

/// Collapsible group: header button plus its children when open.
///
/// The header button is never re-created by a toggle, so keyboard focus
/// stays on it.
#[component]
fn GroupSection(index: usize, group: &'static NavGroup) -> impl IntoView {
    let session = use_context::<NavSession>().expect("NavSession must be provided");
    let model = session.model();
    let key = group.key();

    let active = Signal::derive(move || {
        model.with(|m| m.groups.get(index).is_some_and(|g| g.active))
    });
    let open = Signal::derive(move || session.is_open(key));

    view! {
        <div>
            <button
                class=move || format!("{} {}", link_class(active.get()), css::groupHeader)
                aria-expanded=move || open.get().to_string()
                on:click=move |_| session.toggle(key)
            >
                <span class=css::groupLabel>
                    <NavIcon icon=group.icon() />
                    <span>{group.label()}</span>
                </span>
                {group.has_badge().then(|| view! { <span class=css::badge></span> })}
                <span class=css::chevron>
                    {move || {
                        let chevron = if open.get() { ic::CHEVRON_DOWN } else { ic::CHEVRON_RIGHT };
                        view! { <Icon icon=chevron /> }
                    }}
                </span>
            </button>

            <Show when=move || open.get()>
                <div class=css::children>
                    {group
                        .children()
                        .iter()
                        .enumerate()
                        .map(|(child, item)| {
                            let active = Signal::derive(move || {
                                model.with(|m| {
                                    m.groups
                                        .get(index)
                                        .and_then(|g| g.children.get(child))
                                        .is_some_and(|c| c.active)
                                })
                            });
                            view! { <ChildLink item=item active=active /> }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </div>
    }
}

/// Link inside an open group.
#[component]
fn ChildLink(item: &'static NavItem, active: Signal<bool>) -> impl IntoView {
    let class = move || {
        if active.get() {
            format!("{} {}", css::child, css::childActive)
        } else {
            css::child.to_string()
        }
    };

    view! {
        <a
            href=RoutePath::href(item.path())
            class=class
            aria-current=move || active.get().then_some("page")
        >
            {item.label()}
        </a>
    }
}

#[component]
fn NavIcon(icon: Option<IconId>) -> impl IntoView {
    icon.map(|id| {
        view! {
            <span class=css::icon><Icon icon=ic::nav_icon(id) /></span>
        }
    })
}

fn link_class(active: bool) -> String {
    if active {
        format!("{} {}", css::link, css::linkActive)
    } else {
        css::link.to_string()
    }
}
