//! Error types for the navigation core.
//!
//! The core has a single fallible step: building the catalog. Route
//! resolution and expansion toggling never fail.

use thiserror::Error;

/// Catalog configuration errors, raised by `CatalogBuilder::build`.
///
/// These indicate a broken catalog definition and are fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A group was declared with an empty key.
    #[error("group key must not be empty")]
    EmptyGroupKey,
    /// Two groups share the same key.
    #[error("duplicate group key: {0}")]
    DuplicateGroupKey(String),
    /// Two entries in the same scope share a path.
    #[error("duplicate navigation path: {0}")]
    DuplicatePath(String),
    /// A path or prefix without a leading '/', or with a trailing '/'.
    #[error("invalid route path {0:?}: must start with '/' and not end with '/'")]
    InvalidPath(String),
    /// A group child whose path is not below the group prefix.
    #[error("path {path} is outside the prefix of group {group}")]
    ChildOutsideGroup { group: String, path: String },
}
