//! Hash-based route paths.
//!
//! The dashboard routes through the URL hash: `#/edits/loan` is the page
//! at `/edits/loan`. Only the hash ↔ path conversion lives here; deciding
//! what a path activates is the resolver's job.

/// Current route path as handed to the navigation core.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutePath(String);

impl RoutePath {
    /// Root path used when the hash is empty.
    pub const ROOT: &'static str = "/";

    /// Parse a URL hash into a route path.
    ///
    /// An empty hash (`""`, `"#"`) is the root. Anything else is kept
    /// verbatim minus the `#`, so a malformed hash like `#edits` stays
    /// malformed and simply activates nothing.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.strip_prefix('#').unwrap_or(hash);
        if path.is_empty() {
            return Self(Self::ROOT.to_string());
        }
        Self(path.to_string())
    }

    /// Link target for a route path.
    pub fn href(path: &str) -> String {
        format!("#{}", path)
    }

    /// Get the current route from the browser URL.
    pub fn current() -> Self {
        Self::from_hash(&crate::utils::dom::get_hash())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_hash_is_root() {
        assert_eq!(RoutePath::from_hash("").as_str(), "/");
        assert_eq!(RoutePath::from_hash("#").as_str(), "/");
        assert_eq!(RoutePath::from_hash("#/").as_str(), "/");
    }

    #[test]
    fn test_hash_to_path() {
        assert_eq!(RoutePath::from_hash("#/edits/loan").as_str(), "/edits/loan");
        assert_eq!(
            RoutePath::from_hash("#/search/results/42").as_str(),
            "/search/results/42"
        );
        // no leading '#' (e.g. value already stripped by the caller)
        assert_eq!(RoutePath::from_hash("/setup").as_str(), "/setup");
    }

    #[test]
    fn test_malformed_hash_kept_verbatim() {
        assert_eq!(RoutePath::from_hash("#edits").as_str(), "edits");
    }

    #[test]
    fn test_href() {
        assert_eq!(RoutePath::href("/reports/monthly"), "#/reports/monthly");
        assert_eq!(RoutePath::href("/"), "#/");
    }
}
