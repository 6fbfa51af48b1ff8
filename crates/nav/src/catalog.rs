//! The static section catalog.
//!
//! One instance, compiled into the application, never mutated — only
//! filtered into per-session views. Declaration order is a presentation
//! contract: sections render in exactly the order they appear here.

use vantage_auth::{Role, is_unrestricted};

/// Who sees a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionAccess {
    /// Visible to every signed-in user.
    Open,
    /// Visible to holders of this role (or admin).
    Role(&'static str),
    /// Visible when the `pages` claim contains this entitlement (or admin).
    ///
    /// This is the role-OR-pages form, used exactly for the sections whose
    /// access is granted per-user at token issuance rather than through a
    /// manager role. Note the route layer checks the role only; the
    /// discrepancy is deliberate (see DESIGN.md).
    Entitlement(&'static str),
}

impl SectionAccess {
    /// Menu-form predicate: is this section visible to `role`/`pages`?
    ///
    /// Pages are matched verbatim (case-sensitive), roles case-insensitively;
    /// the admin bypass goes through the same central predicate as the route
    /// evaluator.
    pub fn granted_to(&self, role: Option<&Role>, pages: &[String]) -> bool {
        match self {
            SectionAccess::Open => true,
            _ if role.is_some_and(is_unrestricted) => true,
            SectionAccess::Role(required) => {
                role.is_some_and(|role| *role == Role::new(required))
            }
            SectionAccess::Entitlement(page) => pages.iter().any(|held| held == page),
        }
    }
}

pub(crate) struct SectionSpec {
    pub label: &'static str,
    pub icon: Option<&'static str>,
    pub link: Option<&'static str>,
    pub access: SectionAccess,
    pub items: &'static [SectionSpec],
}

const fn leaf(label: &'static str, icon: &'static str, link: &'static str) -> SectionSpec {
    SectionSpec {
        label,
        icon: Some(icon),
        link: Some(link),
        access: SectionAccess::Open,
        items: &[],
    }
}

pub(crate) static CATALOG: &[SectionSpec] = &[
    SectionSpec {
        label: "Home",
        icon: None,
        link: None,
        access: SectionAccess::Open,
        items: &[
            leaf("Dashboard", "home", "/"),
            leaf("Assistant", "sparkles", "/assistant"),
        ],
    },
    SectionSpec {
        label: "Departments",
        icon: None,
        link: None,
        access: SectionAccess::Open,
        items: &[
            SectionSpec {
                label: "Sales",
                icon: Some("shopping-bag"),
                link: None,
                access: SectionAccess::Role("sales manager"),
                items: &[
                    leaf("Overview", "chart-line", "/sales/overview"),
                    leaf("Shops", "building", "/sales/shops"),
                    leaf("Orders", "receipt", "/sales/orders"),
                    leaf("Reports", "chart-bar", "/sales/reports"),
                ],
            },
            SectionSpec {
                label: "Storage",
                icon: Some("warehouse"),
                link: None,
                access: SectionAccess::Role("logistics manager"),
                items: &[
                    leaf("Inventory", "box", "/storage/inventory"),
                    leaf("Warehouses", "warehouse", "/storage/warehouses"),
                    leaf("Reports", "chart-bar", "/storage/reports"),
                ],
            },
            SectionSpec {
                label: "Procurement",
                icon: Some("objects-column"),
                link: None,
                access: SectionAccess::Role("procurement manager"),
                items: &[
                    leaf("Suppliers", "truck", "/procurement/suppliers"),
                    leaf("Products", "tags", "/procurement/products"),
                    leaf("Reports", "chart-bar", "/procurement/reports"),
                ],
            },
            SectionSpec {
                label: "Marketing",
                icon: Some("megaphone"),
                link: None,
                access: SectionAccess::Role("marketing manager"),
                items: &[
                    leaf("Preferences", "heart", "/marketing/preferences"),
                    leaf("Customer Persona", "users", "/marketing/customer-persona"),
                    leaf("Reports", "chart-bar", "/marketing/reports"),
                ],
            },
            SectionSpec {
                label: "External Environment",
                icon: Some("briefcase"),
                link: None,
                access: SectionAccess::Entitlement("competition monitoring manager"),
                items: &[
                    leaf("External Shops", "building", "/external/shops"),
                    leaf("External Suppliers", "truck", "/external/suppliers"),
                    leaf("Market Products", "globe", "/external/products"),
                    leaf("Reports", "chart-bar", "/external/reports"),
                ],
            },
        ],
    },
    SectionSpec {
        label: "Settings",
        icon: None,
        link: None,
        access: SectionAccess::Role("admin"),
        items: &[leaf("Admin", "cog", "/admin")],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_sections_need_no_claims() {
        assert!(SectionAccess::Open.granted_to(None, &[]));
    }

    #[test]
    fn role_sections_match_case_insensitively() {
        let access = SectionAccess::Role("sales manager");
        assert!(access.granted_to(Some(&Role::new("Sales Manager")), &[]));
        assert!(!access.granted_to(Some(&Role::new("logistics manager")), &[]));
        assert!(!access.granted_to(None, &[]));
    }

    #[test]
    fn entitlement_sections_match_pages_verbatim() {
        let access = SectionAccess::Entitlement("competition monitoring manager");
        let held = vec!["competition monitoring manager".to_string()];
        assert!(access.granted_to(Some(&Role::new("sales manager")), &held));

        // Pages are case-sensitive, unlike roles.
        let wrong_case = vec!["Competition Monitoring Manager".to_string()];
        assert!(!access.granted_to(Some(&Role::new("sales manager")), &wrong_case));

        // The section is entitlement-gated: holding the same string as a
        // *role* does not grant it at the menu layer.
        assert!(!access.granted_to(Some(&Role::new("competition monitoring manager")), &[]));
    }

    #[test]
    fn admin_sees_everything() {
        let admin = Role::new("ADMIN");
        assert!(SectionAccess::Role("sales manager").granted_to(Some(&admin), &[]));
        assert!(
            SectionAccess::Entitlement("competition monitoring manager")
                .granted_to(Some(&admin), &[])
        );
    }
}
