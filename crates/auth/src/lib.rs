//! `vantage-auth` — pure client-side authorization boundary.
//!
//! This crate is intentionally decoupled from storage and transport: it
//! decodes credential claims and evaluates route-entry decisions, nothing
//! else. It is signature-trusting by contract — the issuing backend is the
//! trust boundary and no cryptographic verification happens here. Do not
//! extend this crate to "validate" token authenticity; it only reads claims.

pub mod claims;
pub mod guard;
pub mod roles;

pub use claims::{Claims, decode_token};
pub use guard::{
    Decision, Redirect, RouteRequirement, authentication_guard, page_access_guard,
};
pub use roles::{ADMIN_ROLE, Role, is_unrestricted};
