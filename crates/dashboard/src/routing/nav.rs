//! Sidebar navigation entries and window titles

use super::Route;

/// Application title shown in the window title bar
pub const APP_TITLE: &str = "Financial Dashboard";

/// A sidebar link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub route: Route,
}

impl NavItem {
    /// Active when `current` is this item's route or nested under it
    pub fn is_active(&self, current: Route) -> bool {
        let base = self.route.path();
        let path = current.path();
        path == base
            || path
                .strip_prefix(base)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

pub const NAVIGATION_ITEMS: [NavItem; 4] = [
    NavItem {
        id: "dashboard",
        label: "Dashboard",
        route: Route::Dashboard,
    },
    NavItem {
        id: "reports",
        label: "Reports",
        route: Route::Reports,
    },
    NavItem {
        id: "analytics",
        label: "Analytics",
        route: Route::Analytics,
    },
    NavItem {
        id: "profile",
        label: "Profile Settings",
        route: Route::Profile,
    },
];

/// Window title for a route ("Financial Dashboard - Insights Overview")
pub fn document_title(route: Route) -> String {
    match route.page_title() {
        Some(title) => format!("{} - {}", APP_TITLE, title),
        None => APP_TITLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_title() {
        assert_eq!(
            document_title(Route::Dashboard),
            "Financial Dashboard - Insights Overview"
        );
        assert_eq!(document_title(Route::Index), "Financial Dashboard");
    }

    #[test]
    fn test_nested_route_activates_parent() {
        let reports = NAVIGATION_ITEMS[1];
        assert!(reports.is_active(Route::Reports));
        assert!(reports.is_active(Route::ReportsPerformance));
        assert!(!reports.is_active(Route::Analytics));
    }

    #[test]
    fn test_exactly_one_item_active_per_page() {
        for route in [Route::Dashboard, Route::AnalyticsDetailed, Route::Profile] {
            let active = NAVIGATION_ITEMS.iter().filter(|item| item.is_active(route)).count();
            assert_eq!(active, 1, "{}", route);
        }
    }
}
