use serde::{Deserialize, Serialize};

/// The role that bypasses every requirement.
///
/// This is a hard-coded rule, not a data-driven one: `"admin"` satisfies any
/// route requirement and any page entitlement check regardless of what the
/// `pages` claim contains. Both the route evaluator and the menu builder go
/// through [`is_unrestricted`] so the bypass lives in exactly one place.
pub const ADMIN_ROLE: &str = "admin";

/// Role identifier carried by a credential.
///
/// Roles are opaque strings compared case-insensitively everywhere; the
/// constructor normalizes to lowercase so equality stays a plain string
/// compare. Exact match only — no substring or prefix matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Role(String);

impl Role {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Route-form predicate: does this role satisfy `required`?
    ///
    /// True for the unrestricted role or a case-insensitive exact match.
    /// The menu builder uses a different, wider predicate that also consults
    /// the `pages` claim (see `vantage-nav`); the two are intentionally kept
    /// distinct.
    pub fn satisfies(&self, required: &Role) -> bool {
        is_unrestricted(self) || self == required
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        value.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether `role` bypasses every requirement (the admin bypass).
pub fn is_unrestricted(role: &Role) -> bool {
    role.as_str() == ADMIN_ROLE
}
