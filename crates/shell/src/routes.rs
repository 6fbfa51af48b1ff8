//! The static route table.
//!
//! Built once at shell construction and immutable thereafter. Public routes
//! carry no requirement; each protected department area declares the role it
//! requires in its static data. Absence of a required role on a protected
//! route means authenticated-only.

use vantage_auth::RouteRequirement;

/// Fixed redirect targets.
pub const LANDING: &str = "/landing";
pub const UNAUTHORIZED: &str = "/unauthorized";
pub const NOT_FOUND: &str = "/notfound";
pub const LOGIN: &str = "/auth/login";
pub const DASHBOARD: &str = "/";

/// One entry in the route table.
#[derive(Debug, Clone)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub protected: bool,
    pub requirement: Option<RouteRequirement>,
    /// Area routes also match their child paths (`/sales` matches
    /// `/sales/orders`); leaf routes match exactly.
    pub matches_children: bool,
}

impl Route {
    pub fn matches(&self, path: &str) -> bool {
        if path == self.path {
            return true;
        }
        self.matches_children
            && path
                .strip_prefix(self.path)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

fn public(path: &'static str, name: &'static str) -> Route {
    Route {
        path,
        name,
        protected: false,
        requirement: None,
        matches_children: false,
    }
}

fn protected(path: &'static str, name: &'static str) -> Route {
    Route {
        path,
        name,
        protected: true,
        requirement: None,
        matches_children: false,
    }
}

fn area(path: &'static str, name: &'static str, required_role: &'static str) -> Route {
    Route {
        path,
        name,
        protected: true,
        requirement: Some(RouteRequirement::role(required_role)),
        matches_children: true,
    }
}

/// Declare the application's routes.
///
/// Note the external-environment area requires the competition-monitoring
/// *role*, while its menu section is granted by the `pages` entitlement;
/// the asymmetry is carried over as-is (see DESIGN.md).
pub fn route_table() -> Vec<Route> {
    vec![
        public(LANDING, "landing"),
        public(UNAUTHORIZED, "unauthorized"),
        public(NOT_FOUND, "notfound"),
        public(LOGIN, "login"),
        protected(DASHBOARD, "dashboard"),
        protected("/assistant", "assistant"),
        area("/sales", "sales", "sales manager"),
        area("/storage", "storage", "logistics manager"),
        area("/procurement", "procurement", "procurement manager"),
        area("/marketing", "marketing", "marketing manager"),
        area("/external", "external-environment", "competition monitoring manager"),
        area("/admin", "admin-settings", "admin"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_routes_match_exactly() {
        let dashboard = protected(DASHBOARD, "dashboard");
        assert!(dashboard.matches("/"));
        assert!(!dashboard.matches("/sales"));

        let landing = public(LANDING, "landing");
        assert!(landing.matches("/landing"));
        assert!(!landing.matches("/landing/extra"));
    }

    #[test]
    fn area_routes_match_children_only_at_segment_boundaries() {
        let sales = area("/sales", "sales", "sales manager");
        assert!(sales.matches("/sales"));
        assert!(sales.matches("/sales/orders"));
        assert!(sales.matches("/sales/orders/42"));
        assert!(!sales.matches("/salesfoo"));
        assert!(!sales.matches("/storage/sales"));
    }
}
