//! Active-route resolution.
//!
//! Pure functions deciding whether a catalog entry corresponds to the
//! current path. Nothing here fails: an empty or malformed path (no
//! leading `/`) simply leaves every entry inactive.
//!
//! Prefix matching always stops at a segment boundary, so `/search`
//! covers `/search/results/42` but not `/searching`.

use crate::models::{MatchMode, NavGroup, NavItem};

/// Whether a top-level (or footer) item is active for `current_path`.
///
/// Exact items match only their own path; [`MatchMode::Subtree`] items
/// also match any path below theirs.
pub fn is_top_item_active(item: &NavItem, current_path: &str) -> bool {
    if !is_route_path(current_path) {
        return false;
    }
    match item.match_mode() {
        MatchMode::Exact => current_path == item.path(),
        MatchMode::Subtree => within_prefix(current_path, item.path()),
    }
}

/// Whether a group header is active: the path is the group prefix or
/// lies below it. Says nothing about whether the group is expanded.
pub fn is_group_active(group: &NavGroup, current_path: &str) -> bool {
    is_route_path(current_path) && within_prefix(current_path, group.path_prefix())
}

/// Whether a group child is active. Children always match exactly.
pub fn is_child_item_active(item: &NavItem, current_path: &str) -> bool {
    is_route_path(current_path) && current_path == item.path()
}

/// A well-formed route path starts with `/`.
pub(crate) fn is_route_path(path: &str) -> bool {
    path.starts_with('/')
}

/// `path` equals `prefix` or continues it with a `/`.
pub(crate) fn within_prefix(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edits() -> NavGroup {
        NavGroup::new("edits", "EDIT", "/edits")
            .child(NavItem::new("EDIT LOAN", "/edits/loan"))
            .child(NavItem::new("EDIT VEHICLE", "/edits/vehicle"))
    }

    fn search() -> NavItem {
        NavItem::new("Search", "/search").matching_subtree()
    }

    #[test]
    fn test_exact_item() {
        let item = NavItem::new("Entries", "/entries");
        assert!(is_top_item_active(&item, "/entries"));
        assert!(!is_top_item_active(&item, "/entries/"));
        assert!(!is_top_item_active(&item, "/entries/7"));
        assert!(!is_top_item_active(&item, "/entrie"));
    }

    #[test]
    fn test_root_item_is_exact() {
        let dashboard = NavItem::new("Dashboard", "/");
        assert!(is_top_item_active(&dashboard, "/"));
        assert!(!is_top_item_active(&dashboard, "/entries"));
    }

    #[test]
    fn test_subtree_item() {
        let item = search();
        assert!(is_top_item_active(&item, "/search"));
        assert!(is_top_item_active(&item, "/search/results/42"));
        assert!(!is_top_item_active(&item, "/searching"));
        assert!(!is_top_item_active(&item, "/"));
    }

    #[test]
    fn test_subtree_is_a_flag_not_a_label() {
        let renamed = NavItem::new("Find", "/find").matching_subtree();
        assert!(is_top_item_active(&renamed, "/find/abc"));

        let exact_search = NavItem::new("Search", "/search");
        assert!(!is_top_item_active(&exact_search, "/search/abc"));
    }

    #[test]
    fn test_group_prefix() {
        let group = edits();
        assert!(is_group_active(&group, "/edits"));
        assert!(is_group_active(&group, "/edits/loan"));
        assert!(is_group_active(&group, "/edits/anything/deeper"));
        assert!(!is_group_active(&group, "/editsx"));
        assert!(!is_group_active(&group, "/updates/loan"));
    }

    #[test]
    fn test_child_exact_only() {
        let group = edits();
        let loan = &group.children()[0];
        let vehicle = &group.children()[1];

        assert!(is_child_item_active(loan, "/edits/loan"));
        assert!(!is_child_item_active(vehicle, "/edits/loan"));
        assert!(!is_child_item_active(loan, "/edits/loan/3"));
    }

    #[test]
    fn test_child_ignores_subtree_flag() {
        let child = NavItem::new("Results", "/search/results").matching_subtree();
        assert!(!is_child_item_active(&child, "/search/results/1"));
    }

    #[test]
    fn test_malformed_paths_match_nothing() {
        let group = edits();
        let loan = &group.children()[0];
        for path in ["", "edits/loan", "search", " /edits"] {
            assert!(!is_top_item_active(&search(), path), "{path:?}");
            assert!(!is_top_item_active(&NavItem::new("D", "/"), path), "{path:?}");
            assert!(!is_group_active(&group, path), "{path:?}");
            assert!(!is_child_item_active(loan, path), "{path:?}");
        }
    }

    #[test]
    fn test_within_prefix_boundary() {
        assert!(within_prefix("/a", "/a"));
        assert!(within_prefix("/a/b", "/a"));
        assert!(!within_prefix("/ab", "/a"));
        assert!(!within_prefix("/", "/a"));
    }
}
