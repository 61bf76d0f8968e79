//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps symbolic [`IconId`]s to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::IconId;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuCalculator as Calculator, LuChevronDown as ChevronDown, LuChevronRight as ChevronRight,
        LuCreditCard as Transactions, LuFileText as Entries, LuLayoutDashboard as Dashboard,
        LuLogOut as Logout, LuPencil as Edit, LuRefreshCw as Updates, LuSearch as Search,
        LuSettings as Settings, LuTrendingUp as Reports, LuUsers as Accounts,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowRepeat as Updates, BsBarChart as Reports, BsBoxArrowRight as Logout,
        BsCalculator as Calculator, BsChevronDown as ChevronDown, BsChevronRight as ChevronRight,
        BsCreditCard as Transactions, BsFileEarmarkText as Entries, BsGear as Settings,
        BsPencil as Edit, BsPeople as Accounts, BsSearch as Search, BsSpeedometer2 as Dashboard,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(DASHBOARD, Dashboard);
themed_icon!(CALCULATOR, Calculator);
themed_icon!(SEARCH, Search);
themed_icon!(ENTRIES, Entries);
themed_icon!(TRANSACTIONS, Transactions);
themed_icon!(UPDATES, Updates);
themed_icon!(EDIT, Edit);
themed_icon!(REPORTS, Reports);
themed_icon!(SETTINGS, Settings);
themed_icon!(ACCOUNTS, Accounts);
themed_icon!(LOGOUT, Logout);

/// Glyph for a navigation entry's symbolic icon.
pub fn nav_icon(id: IconId) -> Icon {
    match id {
        IconId::Dashboard => DASHBOARD,
        IconId::Calculator => CALCULATOR,
        IconId::Search => SEARCH,
        IconId::Entries => ENTRIES,
        IconId::Transactions => TRANSACTIONS,
        IconId::Updates => UPDATES,
        IconId::Edit => EDIT,
        IconId::Reports => REPORTS,
        // Setup and Settings share the gear glyph.
        IconId::Setup | IconId::Settings => SETTINGS,
        IconId::Accounts => ACCOUNTS,
        IconId::Logout => LOGOUT,
    }
}
