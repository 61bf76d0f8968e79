//! Render-ready navigation snapshot.
//!
//! [`render_model`] combines the catalog, the current path and the
//! expansion state into one resolved value. The sidebar draws straight
//! from it and never evaluates activation itself.

use serde::Serialize;

use super::catalog::{NavigationCatalog, Slot};
use super::expansion::ExpansionState;
use super::resolver::{is_child_item_active, is_group_active, is_top_item_active};
use crate::models::{NavGroup, NavItem};

/// An item with its activation verdict.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolvedItem<'a> {
    pub item: &'a NavItem,
    pub active: bool,
}

/// A group with its activation verdict, open state and resolved children.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolvedGroup<'a> {
    pub group: &'a NavGroup,
    pub active: bool,
    pub open: bool,
    pub children: Vec<ResolvedItem<'a>>,
}

/// A top-level sidebar entry in display order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Section<'m, 'a> {
    Item(&'m ResolvedItem<'a>),
    Group(&'m ResolvedGroup<'a>),
}

/// Fully resolved sidebar for one path and one expansion state.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderModel<'a> {
    pub top_items: Vec<ResolvedItem<'a>>,
    pub groups: Vec<ResolvedGroup<'a>>,
    pub footer: Vec<ResolvedItem<'a>>,
    pub layout: &'a [Slot],
}

/// Resolve every catalog entry against `current_path` and `expansion`.
///
/// Children of a collapsed group are still resolved; whether to draw
/// them is up to the caller. A group containing the current page is not
/// opened automatically.
pub fn render_model<'a>(
    catalog: &'a NavigationCatalog,
    current_path: &str,
    expansion: &ExpansionState,
) -> RenderModel<'a> {
    let top_items = catalog
        .top_items()
        .iter()
        .map(|item| ResolvedItem {
            item,
            active: is_top_item_active(item, current_path),
        })
        .collect();

    let groups = catalog
        .groups()
        .iter()
        .map(|group| ResolvedGroup {
            group,
            active: is_group_active(group, current_path),
            open: expansion.is_open(group.key()),
            children: group
                .children()
                .iter()
                .map(|item| ResolvedItem {
                    item,
                    active: is_child_item_active(item, current_path),
                })
                .collect(),
        })
        .collect();

    let footer = catalog
        .footer()
        .iter()
        .map(|item| ResolvedItem {
            item,
            active: is_top_item_active(item, current_path),
        })
        .collect();

    RenderModel {
        top_items,
        groups,
        footer,
        layout: catalog.layout(),
    }
}

impl<'a> RenderModel<'a> {
    /// Top-level items and groups in display order.
    pub fn sections(&self) -> impl Iterator<Item = Section<'_, 'a>> + '_ {
        self.layout.iter().filter_map(|slot| match *slot {
            Slot::Item(i) => self.top_items.get(i).map(Section::Item),
            Slot::Group(i) => self.groups.get(i).map(Section::Group),
        })
    }

    /// Labels leading to the current page, outermost first.
    ///
    /// `["EDIT", "EDIT LOAN"]` for an active child, `["EDIT"]` when only
    /// the group prefix matches, empty when nothing is active.
    pub fn active_trail(&self) -> Vec<&'a str> {
        for section in self.sections() {
            match section {
                Section::Item(entry) if entry.active => return vec![entry.item.label()],
                Section::Group(entry) if entry.active => {
                    let mut trail = vec![entry.group.label()];
                    trail.extend(
                        entry
                            .children
                            .iter()
                            .find(|child| child.active)
                            .map(|child| child.item.label()),
                    );
                    return trail;
                }
                _ => {}
            }
        }

        self.footer
            .iter()
            .find(|entry| entry.active)
            .map(|entry| vec![entry.item.label()])
            .unwrap_or_default()
    }
}
