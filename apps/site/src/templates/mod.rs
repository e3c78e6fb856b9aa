//! Askama Templates
//!
//! Template structs for rendering HTML pages, plus the small view types they
//! iterate over.

use askama::Template;
use askama_web::WebTemplate;
use chrono::Datelike;

use aderyn_core::catalog::{self, CategoryGroup};
use aderyn_core::fallback::COMPANY_NAME;
use aderyn_core::{Body, MenuEntry, Metadata};
use aderyn_portable_text::{PROSE_CLOSE, PROSE_OPEN, escape_html};
use aderyn_shared::{Navigation, Office, Service, SiteSettings};

use crate::state::{AppState, Connection};

// ---------------------------------------------------------------------------
// Shared views
// ---------------------------------------------------------------------------

/// Header and footer data common to every page.
pub struct Layout {
    pub company_name: String,
    /// "Name: phone" entries of the top contact bar.
    pub office_phones: Vec<String>,
    pub email: Option<String>,
    pub menu: Vec<MenuLink>,
    pub year: i32,
}

impl Layout {
    pub fn new(settings: &SiteSettings, navigation: &Navigation) -> Self {
        let company_name = if settings.title.trim().is_empty() {
            COMPANY_NAME.to_string()
        } else {
            settings.title.clone()
        };
        Self {
            company_name,
            office_phones: settings
                .offices
                .iter()
                .filter_map(|office| Some(format!("{}: {}", office.name, office.phone.as_deref()?)))
                .collect(),
            email: settings.email().map(str::to_string),
            menu: aderyn_core::navigation::menu(navigation)
                .into_iter()
                .map(MenuLink::from)
                .collect(),
            year: chrono::Local::now().year(),
        }
    }
}

/// A resolved menu link. An empty `href` renders as plain text.
pub struct MenuLink {
    pub title: String,
    pub href: String,
    pub external: bool,
    pub children: Vec<MenuLink>,
}

impl From<MenuEntry> for MenuLink {
    fn from(entry: MenuEntry) -> Self {
        Self {
            title: entry.title,
            href: entry.href.unwrap_or_default(),
            external: entry.external,
            children: entry.children.into_iter().map(Self::from).collect(),
        }
    }
}

impl MenuLink {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_link(&self) -> bool {
        !self.href.is_empty()
    }
}

/// One service card in a grid.
pub struct ServiceCard {
    pub title: String,
    pub description: Option<String>,
    pub href: String,
    pub badge: Option<String>,
}

impl From<&Service> for ServiceCard {
    fn from(service: &Service) -> Self {
        Self {
            title: service.title.clone(),
            description: service.description.clone(),
            href: format!("/services/{}", service.slug.current),
            badge: service.category.as_ref().map(catalog::badge),
        }
    }
}

pub fn cards(services: &[Service]) -> Vec<ServiceCard> {
    services.iter().map(ServiceCard::from).collect()
}

/// A category heading and its cards on the services page.
pub struct CategorySection {
    pub label: String,
    pub services: Vec<ServiceCard>,
}

impl From<CategoryGroup> for CategorySection {
    fn from(group: CategoryGroup) -> Self {
        Self {
            label: group.label,
            services: cards(&group.services),
        }
    }
}

/// An office with its address split into display lines.
pub struct OfficeCard {
    pub name: String,
    pub lines: Vec<String>,
    pub phone: Option<String>,
    /// `tel:` target with whitespace removed.
    pub tel: Option<String>,
    pub email: Option<String>,
}

impl From<&Office> for OfficeCard {
    fn from(office: &Office) -> Self {
        let mut lines = Vec::new();
        if let Some(address) = &office.address {
            lines.extend(address.building.clone());
            lines.extend(address.street.clone());
            let locality = [address.city.as_deref(), address.postcode.as_deref()]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" ");
            if !locality.is_empty() {
                lines.push(locality);
            }
        }
        Self {
            name: office.name.clone(),
            lines,
            tel: office
                .phone
                .as_ref()
                .map(|phone| phone.chars().filter(|c| !c.is_whitespace()).collect()),
            phone: office.phone.clone(),
            email: office.email.clone(),
        }
    }
}

pub fn office_cards(settings: &SiteSettings) -> Vec<OfficeCard> {
    settings.offices.iter().map(OfficeCard::from).collect()
}

/// Body markup: rendered portable text, or one plain paragraph.
pub fn body_html(state: &AppState, body: &Body) -> String {
    match body {
        Body::Blocks(blocks) => state.render(blocks),
        Body::Text(text) => format!(
            r#"{PROSE_OPEN}<p class="text-gray-700 leading-relaxed">{}</p>{PROSE_CLOSE}"#,
            escape_html(text)
        ),
    }
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

/// Landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub layout: Layout,
    pub meta: Metadata,
    /// Rendered intro from a CMS `home` page; replaces the hero copy.
    pub intro_html: Option<String>,
    pub hero_lead: &'static str,
    pub hero_detail: &'static str,
    pub hero_offices: &'static str,
    pub featured: Vec<ServiceCard>,
    pub has_more: bool,
    pub offices: Vec<OfficeCard>,
}

/// Generic content page (`/{slug}`).
#[derive(Template, WebTemplate)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub layout: Layout,
    pub meta: Metadata,
    pub title: String,
    pub body_html: String,
}

/// Services listing grouped by category.
#[derive(Template, WebTemplate)]
#[template(path = "services.html")]
pub struct ServicesTemplate {
    pub layout: Layout,
    pub meta: Metadata,
    pub sections: Vec<CategorySection>,
    /// Label of the category filter, when one is applied.
    pub filter: Option<String>,
}

/// Single service page.
#[derive(Template, WebTemplate)]
#[template(path = "service.html")]
pub struct ServiceTemplate {
    pub layout: Layout,
    pub meta: Metadata,
    pub title: String,
    pub description: Option<String>,
    pub body_html: String,
    pub related: Vec<ServiceCard>,
}

#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub layout: Layout,
    pub meta: Metadata,
    pub offices: Vec<OfficeCard>,
}

#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub layout: Layout,
    pub meta: Metadata,
}

/// Resolved connection settings (debug builds only).
#[derive(Template, WebTemplate)]
#[template(path = "debug.html")]
pub struct DebugTemplate {
    pub layout: Layout,
    pub meta: Metadata,
    pub connection: Connection,
    pub rendered_at: String,
    pub version: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use aderyn_core::fallback;
    use aderyn_shared::{NavItem, NavLink, Reference, ServiceCategory, Slug};

    #[test]
    fn office_card_joins_city_and_postcode() {
        let offices = fallback::offices();
        let card = OfficeCard::from(&offices[0]);
        assert_eq!(card.name, "Cardiff Office");
        assert_eq!(card.lines, ["Sophia House", "28 Cathedral Road", "Cardiff CF11 9LJ"]);
        assert_eq!(card.tel.as_deref(), Some("(029)20568136"));
    }

    #[test]
    fn layout_lists_office_phones() {
        let layout = Layout::new(&fallback::site_settings(), &fallback::navigation());
        assert_eq!(
            layout.office_phones,
            ["Cardiff Office: (029) 2056 8136", "Swansea Office: (01792) 805100"]
        );
        assert_eq!(layout.email.as_deref(), Some("info@aderynbc.com"));
        assert_eq!(layout.company_name, COMPANY_NAME);
    }

    #[test]
    fn unresolved_links_have_no_href() {
        let navigation = Navigation {
            id: None,
            title: None,
            main_navigation: vec![
                NavItem {
                    key: None,
                    title: "Orphan".into(),
                    link: NavLink::Page(Some(Reference::new("missing"))),
                    sub_items: vec![],
                },
                NavItem {
                    key: None,
                    title: "Home".into(),
                    link: NavLink::Custom("/".into()),
                    sub_items: vec![],
                },
            ],
        };
        let layout = Layout::new(&fallback::site_settings(), &navigation);
        assert_eq!(layout.menu.len(), 2);
        assert!(!layout.menu[0].is_link());
        assert_eq!(layout.menu[1].href, "/");
    }

    #[test]
    fn service_card_badge_and_href() {
        let service = Service {
            id: None,
            title: "Dilapidations".into(),
            slug: Slug::new("dilapidations"),
            category: Some(ServiceCategory::LandlordTenant),
            description: None,
            content: vec![],
            order: None,
            seo: None,
        };
        let card = ServiceCard::from(&service);
        assert_eq!(card.href, "/services/dilapidations");
        assert_eq!(card.badge.as_deref(), Some("Landlord Tenant"));
    }
}
