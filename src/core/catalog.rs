//! Navigation catalog.
//!
//! The catalog is the static registry of every sidebar entry. It is
//! assembled once with [`CatalogBuilder`], validated, and then only read.

use std::collections::HashSet;

use serde::Serialize;

use super::error::CatalogError;
use super::resolver::{is_route_path, within_prefix};
use crate::models::{NavGroup, NavItem};

// ============================================================================
// Catalog
// ============================================================================

/// Position of a top-level entry in the sidebar's display order.
///
/// Items and groups are stored in separate lists; the layout records how
/// they interleave.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case", tag = "kind", content = "index")]
pub enum Slot {
    /// Index into [`NavigationCatalog::top_items`].
    Item(usize),
    /// Index into [`NavigationCatalog::groups`].
    Group(usize),
}

/// Read-only registry of top-level items, groups and footer links.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationCatalog {
    top_items: Vec<NavItem>,
    groups: Vec<NavGroup>,
    footer: Vec<NavItem>,
    layout: Vec<Slot>,
}

impl NavigationCatalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Top-level items, in declaration order.
    pub fn top_items(&self) -> &[NavItem] {
        &self.top_items
    }

    /// Groups, in declaration order.
    pub fn groups(&self) -> &[NavGroup] {
        &self.groups
    }

    /// Links pinned below the main list.
    pub fn footer(&self) -> &[NavItem] {
        &self.footer
    }

    /// Display order of top-level items and groups.
    pub fn layout(&self) -> &[Slot] {
        &self.layout
    }

    /// Group with the given key, if any.
    pub fn group(&self, key: &str) -> Option<&NavGroup> {
        self.groups.iter().find(|g| g.key() == key)
    }

    /// Whether a group with the given key exists.
    pub fn contains_group(&self, key: &str) -> bool {
        self.group(key).is_some()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Accumulates entries in display order and validates them on [`build`].
///
/// [`build`]: CatalogBuilder::build
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    top_items: Vec<NavItem>,
    groups: Vec<NavGroup>,
    footer: Vec<NavItem>,
    layout: Vec<Slot>,
}

impl CatalogBuilder {
    /// Append a top-level item.
    pub fn item(mut self, item: NavItem) -> Self {
        self.layout.push(Slot::Item(self.top_items.len()));
        self.top_items.push(item);
        self
    }

    /// Append a group.
    pub fn group(mut self, group: NavGroup) -> Self {
        self.layout.push(Slot::Group(self.groups.len()));
        self.groups.push(group);
        self
    }

    /// Append a footer link.
    pub fn footer_item(mut self, item: NavItem) -> Self {
        self.footer.push(item);
        self
    }

    /// Validate and freeze the catalog.
    ///
    /// Checks that every path is well-formed, group keys are non-empty
    /// and unique, top-level and footer paths are unique among
    /// themselves, child paths are unique within their group and lie
    /// below the group prefix.
    pub fn build(self) -> Result<NavigationCatalog, CatalogError> {
        let mut top_paths = HashSet::new();
        for item in self.top_items.iter().chain(&self.footer) {
            check_path(item.path())?;
            if !top_paths.insert(item.path()) {
                return Err(CatalogError::DuplicatePath(item.path().to_string()));
            }
        }

        let mut keys = HashSet::new();
        for group in &self.groups {
            if group.key().is_empty() {
                return Err(CatalogError::EmptyGroupKey);
            }
            if !keys.insert(group.key()) {
                return Err(CatalogError::DuplicateGroupKey(group.key().to_string()));
            }
            check_path(group.path_prefix())?;

            let mut child_paths = HashSet::new();
            for child in group.children() {
                check_path(child.path())?;
                if !within_prefix(child.path(), group.path_prefix()) {
                    return Err(CatalogError::ChildOutsideGroup {
                        group: group.key().to_string(),
                        path: child.path().to_string(),
                    });
                }
                if !child_paths.insert(child.path()) {
                    return Err(CatalogError::DuplicatePath(child.path().to_string()));
                }
            }
        }

        Ok(NavigationCatalog {
            top_items: self.top_items,
            groups: self.groups,
            footer: self.footer,
            layout: self.layout,
        })
    }
}

/// Paths start with '/' and carry no trailing '/', except the root itself.
fn check_path(path: &str) -> Result<(), CatalogError> {
    if is_route_path(path) && (path == "/" || !path.ends_with('/')) {
        Ok(())
    } else {
        Err(CatalogError::InvalidPath(path.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn updates() -> NavGroup {
        NavGroup::new("updates", "UPDATES", "/updates")
            .child(NavItem::new("Update Customer", "/updates/customer"))
            .child(NavItem::new("Update Loan", "/updates/loan"))
    }

    #[test]
    fn test_build_keeps_layout_order() {
        let catalog = NavigationCatalog::builder()
            .item(NavItem::new("Dashboard", "/"))
            .group(updates())
            .item(NavItem::new("Setup", "/setup"))
            .footer_item(NavItem::new("Settings", "/settings"))
            .build()
            .unwrap();

        assert_eq!(
            catalog.layout(),
            [Slot::Item(0), Slot::Group(0), Slot::Item(1)]
        );
        assert_eq!(catalog.top_items()[1].label(), "Setup");
        assert_eq!(catalog.footer().len(), 1);
        assert!(catalog.contains_group("updates"));
        assert!(!catalog.contains_group("edits"));
        assert_eq!(catalog.group("updates").map(NavGroup::label), Some("UPDATES"));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = NavigationCatalog::builder().build().unwrap();
        assert!(catalog.top_items().is_empty());
        assert!(catalog.layout().is_empty());
    }

    #[test]
    fn test_duplicate_group_key() {
        let err = NavigationCatalog::builder()
            .group(updates())
            .group(NavGroup::new("updates", "Again", "/again"))
            .build()
            .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateGroupKey("updates".into()));
    }

    #[test]
    fn test_empty_group_key() {
        let err = NavigationCatalog::builder()
            .group(NavGroup::new("", "Nameless", "/nameless"))
            .build()
            .unwrap_err();
        assert_eq!(err, CatalogError::EmptyGroupKey);
    }

    #[test]
    fn test_duplicate_top_level_path() {
        let err = NavigationCatalog::builder()
            .item(NavItem::new("Setup", "/setup"))
            .footer_item(NavItem::new("Setup again", "/setup"))
            .build()
            .unwrap_err();
        assert_eq!(err, CatalogError::DuplicatePath("/setup".into()));
    }

    #[test]
    fn test_duplicate_child_path() {
        let err = NavigationCatalog::builder()
            .group(updates().child(NavItem::new("Dup", "/updates/loan")))
            .build()
            .unwrap_err();
        assert_eq!(err, CatalogError::DuplicatePath("/updates/loan".into()));
    }

    #[test]
    fn test_same_child_path_in_other_scope_is_allowed() {
        let catalog = NavigationCatalog::builder()
            .item(NavItem::new("Monthly", "/reports/monthly"))
            .group(
                NavGroup::new("reports", "Reports", "/reports")
                    .child(NavItem::new("Monthly Reports", "/reports/monthly")),
            )
            .build();
        assert!(catalog.is_ok());
    }

    #[test]
    fn test_invalid_paths() {
        for bad in ["", "setup", "/setup/"] {
            let err = NavigationCatalog::builder()
                .item(NavItem::new("Bad", bad))
                .build()
                .unwrap_err();
            assert_eq!(err, CatalogError::InvalidPath(bad.into()));
        }

        let err = NavigationCatalog::builder()
            .group(NavGroup::new("edits", "EDIT", "edits"))
            .build()
            .unwrap_err();
        assert_eq!(err, CatalogError::InvalidPath("edits".into()));
    }

    #[test]
    fn test_child_outside_group() {
        let err = NavigationCatalog::builder()
            .group(
                NavGroup::new("edits", "EDIT", "/edits")
                    .child(NavItem::new("Loan", "/editsloan")),
            )
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::ChildOutsideGroup {
                group: "edits".into(),
                path: "/editsloan".into(),
            }
        );
        assert_eq!(
            err.to_string(),
            "path /editsloan is outside the prefix of group edits"
        );
    }
}
