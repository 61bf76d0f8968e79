//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application,
//! including the navigation catalog definition.

use std::sync::OnceLock;

use crate::core::{CatalogError, NavigationCatalog};
use crate::models::{IconId, NavGroup, NavItem};

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the header when no section is active.
pub const APP_NAME: &str = "FYNEAUTO";

/// Sidebar logo image.
pub const LOGO_URL: &str = "https://cdn.builder.io/api/v1/image/assets%2F2f7586ff9e01429985c3cdd0be5b530e%2Fbbc1714c8c5e4bfe8026b78b72010f9b?format=webp&width=800";

/// Alt text for the sidebar logo.
pub const LOGO_ALT: &str = "FYNEAUTO Logo";

// =============================================================================
// Layout Configuration
// =============================================================================

/// Media query above which the sidebar is shown.
pub const DESKTOP_MEDIA_QUERY: &str = "(min-width: 1024px)";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Familiar, slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Lucide,
    Bootstrap,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;

// =============================================================================
// Navigation Configuration
// =============================================================================

/// Keys of the expandable sidebar groups.
pub mod group_keys {
    pub const UPDATES: &str = "updates";
    pub const EDITS: &str = "edits";
    pub const REPORTS: &str = "reports";
}

/// Define the sidebar navigation.
///
/// Entries appear in the order they are added. Top-level paths are unique,
/// child paths are unique within their group and must sit under the group
/// prefix; `build` rejects anything else.
pub fn configured_catalog() -> Result<NavigationCatalog, CatalogError> {
    NavigationCatalog::builder()
        .item(NavItem::new("Dashboard", "/").with_icon(IconId::Dashboard))
        .item(NavItem::new("EMI Calculator", "/emi-calculator").with_icon(IconId::Calculator))
        // Search results live under /search/...
        .item(
            NavItem::new("Search", "/search")
                .with_icon(IconId::Search)
                .matching_subtree(),
        )
        .item(NavItem::new("Entries", "/entries").with_icon(IconId::Entries))
        .item(NavItem::new("Transactions", "/transactions").with_icon(IconId::Transactions))
        .group(
            NavGroup::new(group_keys::UPDATES, "UPDATES", "/updates")
                .with_icon(IconId::Updates)
                .child(NavItem::new("Update Customer", "/updates/customer"))
                .child(NavItem::new("Update Loan", "/updates/loan"))
                .child(NavItem::new("Update Vehicle", "/updates/vehicle")),
        )
        .group(
            NavGroup::new(group_keys::EDITS, "EDIT", "/edits")
                .with_icon(IconId::Edit)
                .child(NavItem::new("EDIT CUSTOMER", "/edits/customer"))
                .child(NavItem::new("EDIT CO-BORROWER", "/edits/co-borrower"))
                .child(NavItem::new("EDIT GUARANTOR", "/edits/guarantor"))
                .child(NavItem::new("EDIT LOAN", "/edits/loan"))
                .child(NavItem::new("RESTRUCTURE LOAN", "/edits/restructure-loan"))
                .child(NavItem::new("EDIT VEHICLE", "/edits/vehicle"))
                .child(NavItem::new("CHANGE GUARANTOR", "/edits/change-guarantor"))
                .child(NavItem::new("CHANGE HP", "/edits/change-hp"))
                .child(NavItem::new("CHANGE EMI DATE", "/edits/change-emi-date"))
                .child(NavItem::new("EDIT EXT AC NO", "/edits/edit-ext-ac-no")),
        )
        .group(
            NavGroup::new(group_keys::REPORTS, "Reports", "/reports")
                .with_icon(IconId::Reports)
                .with_badge()
                .child(NavItem::new("Monthly Reports", "/reports/monthly"))
                .child(NavItem::new("Customer Reports", "/reports/customer"))
                .child(NavItem::new("Vehicle Reports", "/reports/vehicle")),
        )
        .item(NavItem::new("Setup", "/setup").with_icon(IconId::Setup).with_badge())
        .item(NavItem::new("Accounts", "/accounts").with_icon(IconId::Accounts).with_badge())
        .footer_item(NavItem::new("Settings", "/settings").with_icon(IconId::Settings))
        .build()
}

/// The application catalog, built on first use and shared afterwards.
///
/// Panics if the configured catalog is invalid: that is a build mistake,
/// not something to recover from at runtime.
pub fn catalog() -> &'static NavigationCatalog {
    static CATALOG: OnceLock<NavigationCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        configured_catalog()
            .unwrap_or_else(|err| panic!("invalid navigation catalog: {err}"))
    })
}
