use serde::Serialize;

use vantage_auth::Role;

use crate::catalog::{CATALOG, SectionSpec};

/// One rendered navigation entry; a section with children or a leaf link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<MenuEntry>,
}

/// Build the navigation menu for a session.
///
/// Walks the static catalog in declaration order and keeps each section the
/// claims grant access to; children of a granted section are filtered with
/// the same rule. Deterministic and idempotent — identical inputs produce
/// structurally identical, identically ordered output.
///
/// Run once per session establishment. Not reactive: claim changes within
/// the same token lifetime need a fresh login to change the menu.
pub fn build_menu(role: Option<&Role>, pages: &[String]) -> Vec<MenuEntry> {
    build_level(CATALOG, role, pages)
}

fn build_level(specs: &[SectionSpec], role: Option<&Role>, pages: &[String]) -> Vec<MenuEntry> {
    specs
        .iter()
        .filter(|spec| spec.access.granted_to(role, pages))
        .map(|spec| MenuEntry {
            label: spec.label.to_string(),
            icon: spec.icon.map(str::to_string),
            link: spec.link.map(str::to_string),
            items: build_level(spec.items, role, pages),
        })
        .collect()
}
