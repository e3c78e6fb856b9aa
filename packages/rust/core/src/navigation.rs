//! Menu link resolution.

use aderyn_shared::{NavLink, Navigation};

/// Where a menu link points.
pub trait LinkTarget {
    /// Site path or URL. `None` when a reference could not be resolved to a slug.
    fn href(&self) -> Option<String>;

    fn is_external(&self) -> bool;
}

impl LinkTarget for NavLink {
    fn href(&self) -> Option<String> {
        match self {
            NavLink::Page(r) => r.as_ref()?.slug.as_deref().map(|slug| format!("/{slug}")),
            NavLink::Service(r) => r.as_ref()?.slug.as_deref().map(|slug| format!("/services/{slug}")),
            NavLink::External(url) => Some(url.clone()),
            NavLink::Custom(path) => Some(path.clone()),
        }
    }

    fn is_external(&self) -> bool {
        matches!(self, NavLink::External(_))
    }
}

/// A menu entry ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub title: String,
    pub href: Option<String>,
    pub external: bool,
    pub children: Vec<MenuEntry>,
}

fn entry(title: &str, link: &NavLink, children: Vec<MenuEntry>) -> MenuEntry {
    MenuEntry {
        title: title.to_string(),
        href: link.href(),
        external: link.is_external(),
        children,
    }
}

/// Resolve every link of the main menu.
pub fn menu(navigation: &Navigation) -> Vec<MenuEntry> {
    navigation
        .main_navigation
        .iter()
        .map(|item| {
            let children = item
                .sub_items
                .iter()
                .map(|sub| entry(&sub.title, &sub.link, Vec::new()))
                .collect();
            entry(&item.title, &item.link, children)
        })
        .collect()
}
