//! `vantage-nav` — permission-driven navigation menu construction.
//!
//! Filters the static section catalog against the current session's role and
//! page entitlements into the ordered menu model the layout renders.

pub mod catalog;
pub mod menu;

pub use catalog::SectionAccess;
pub use menu::{MenuEntry, build_menu};
