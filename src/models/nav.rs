//! Navigation catalog entries.
//!
//! Items and groups are plain immutable data. Icons are symbolic
//! [`IconId`]s; the rendering layer maps them to glyphs in
//! `components::icons`.

use serde::Serialize;

/// Symbolic icon reference attached to navigation entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconId {
    Dashboard,
    Calculator,
    Search,
    Entries,
    Transactions,
    Updates,
    Edit,
    Reports,
    Setup,
    Accounts,
    Settings,
    Logout,
}

/// How a top-level item decides whether it is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// Active only when the current path equals the item path.
    #[default]
    Exact,
    /// Active for the item path and every path below it
    /// (e.g. `/search` also covers `/search/results/42`).
    Subtree,
}

/// A single clickable navigation destination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    label: String,
    path: String,
    icon: Option<IconId>,
    match_mode: MatchMode,
    badge: bool,
}

impl NavItem {
    /// Create an exact-match item without icon or badge.
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            icon: None,
            match_mode: MatchMode::Exact,
            badge: false,
        }
    }

    pub fn with_icon(mut self, icon: IconId) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Make the item active for its whole subtree of routes.
    ///
    /// Only honored for top-level items; group children always match exactly.
    pub fn matching_subtree(mut self) -> Self {
        self.match_mode = MatchMode::Subtree;
        self
    }

    /// Show the attention dot next to the label.
    pub fn with_badge(mut self) -> Self {
        self.badge = true;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn icon(&self) -> Option<IconId> {
        self.icon
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    pub fn has_badge(&self) -> bool {
        self.badge
    }
}

/// An expandable cluster of items sharing a path prefix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavGroup {
    key: String,
    label: String,
    path_prefix: String,
    icon: Option<IconId>,
    badge: bool,
    /// Serialized through the resolved render model instead.
    #[serde(skip)]
    children: Vec<NavItem>,
}

impl NavGroup {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        path_prefix: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            path_prefix: path_prefix.into(),
            icon: None,
            badge: false,
            children: Vec::new(),
        }
    }

    pub fn with_icon(mut self, icon: IconId) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_badge(mut self) -> Self {
        self.badge = true;
        self
    }

    /// Append a child item (display order is insertion order).
    pub fn child(mut self, item: NavItem) -> Self {
        self.children.push(item);
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn path_prefix(&self) -> &str {
        &self.path_prefix
    }

    pub fn icon(&self) -> Option<IconId> {
        self.icon
    }

    pub fn has_badge(&self) -> bool {
        self.badge
    }

    pub fn children(&self) -> &[NavItem] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_defaults() {
        let item = NavItem::new("Entries", "/entries");
        assert_eq!(item.label(), "Entries");
        assert_eq!(item.path(), "/entries");
        assert_eq!(item.icon(), None);
        assert_eq!(item.match_mode(), MatchMode::Exact);
        assert!(!item.has_badge());
    }

    #[test]
    fn test_item_builders() {
        let item = NavItem::new("Search", "/search")
            .with_icon(IconId::Search)
            .matching_subtree()
            .with_badge();
        assert_eq!(item.icon(), Some(IconId::Search));
        assert_eq!(item.match_mode(), MatchMode::Subtree);
        assert!(item.has_badge());
    }

    #[test]
    fn test_group_children_keep_order() {
        let group = NavGroup::new("updates", "UPDATES", "/updates")
            .child(NavItem::new("Update Customer", "/updates/customer"))
            .child(NavItem::new("Update Loan", "/updates/loan"));
        let paths: Vec<_> = group.children().iter().map(NavItem::path).collect();
        assert_eq!(paths, ["/updates/customer", "/updates/loan"]);
        assert_eq!(group.key(), "updates");
        assert_eq!(group.path_prefix(), "/updates");
    }
}
