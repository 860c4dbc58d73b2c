//! Route table

/// Who may see a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Only while signed out (auth screens)
    Public,
    /// Only while signed in
    Protected,
}

/// Every view the router knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`, forwards to the dashboard
    Index,
    Login,
    Signup,
    ForgotPassword,
    Dashboard,
    Reports,
    /// Same content as `Reports`
    ReportsPerformance,
    Analytics,
    /// Same content as `Analytics`
    AnalyticsDetailed,
    Profile,
}

impl Route {
    pub const ALL: [Route; 10] = [
        Route::Index,
        Route::Login,
        Route::Signup,
        Route::ForgotPassword,
        Route::Dashboard,
        Route::Reports,
        Route::ReportsPerformance,
        Route::Analytics,
        Route::AnalyticsDetailed,
        Route::Profile,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Index => "/",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::ForgotPassword => "/forgot-password",
            Route::Dashboard => "/dashboard",
            Route::Reports => "/reports",
            Route::ReportsPerformance => "/reports/performance",
            Route::Analytics => "/analytics",
            Route::AnalyticsDetailed => "/analytics/detailed",
            Route::Profile => "/profile",
        }
    }

    /// Match a path against the table (see [`normalize_path`])
    pub fn parse(path: &str) -> Option<Route> {
        let path = normalize_path(path);
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    pub fn access(&self) -> Access {
        match self {
            Route::Login | Route::Signup | Route::ForgotPassword => Access::Public,
            _ => Access::Protected,
        }
    }

    /// Heading shown on the page; `None` for routes that never render
    pub fn page_title(&self) -> Option<&'static str> {
        match self {
            Route::Index => None,
            Route::Dashboard => Some("Insights Overview"),
            Route::Reports | Route::ReportsPerformance => Some("Financial Reports"),
            Route::Analytics | Route::AnalyticsDetailed => Some("Analytics Overview"),
            Route::Profile => Some("Profile Settings"),
            Route::Login => Some("Sign In"),
            Route::Signup => Some("Sign Up"),
            Route::ForgotPassword => Some("Reset Password"),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Strip any `?query` / `#fragment` and a trailing `/`; empty becomes `/`
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = path[..end].trim_end_matches('/');
    if path.is_empty() { "/" } else { path }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_path() {
        for route in Route::ALL {
            assert_eq!(Route::parse(route.path()), Some(route));
        }
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("/reports/"), "/reports");
        assert_eq!(normalize_path("/login?next=%2Freports"), "/login");
        assert_eq!(normalize_path("/analytics#top"), "/analytics");
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(Route::parse("/settings"), None);
        assert_eq!(Route::parse("/reports/quarterly"), None);
        assert_eq!(Route::parse("dashboard"), None);
    }

    #[test]
    fn test_access() {
        assert_eq!(Route::Login.access(), Access::Public);
        assert_eq!(Route::ForgotPassword.access(), Access::Public);
        assert_eq!(Route::Index.access(), Access::Protected);
        assert_eq!(Route::AnalyticsDetailed.access(), Access::Protected);
    }

    #[test]
    fn test_duplicate_content_routes_share_titles() {
        assert_eq!(Route::Reports.page_title(), Route::ReportsPerformance.page_title());
        assert_eq!(Route::Analytics.page_title(), Route::AnalyticsDetailed.page_title());
    }
}
