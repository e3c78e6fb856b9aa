//! Initial content written to an empty dataset by `aderyn migrate`.

use uuid::Uuid;

use aderyn_shared::{
    Block, NavItem, NavLink, NavSubItem, Navigation, Page, Seo, Service, ServiceCategory,
    SiteSettings, Slug,
};

use crate::fallback::{self, COMPANY_NAME};

/// Every document the migration writes.
#[derive(Debug, Clone)]
pub struct SeedContent {
    pub site_settings: SiteSettings,
    pub pages: Vec<Page>,
    pub services: Vec<Service>,
    pub navigation: Navigation,
}

/// A fresh array key: 12 hex characters from a v7 UUID's random tail.
pub fn new_key() -> String {
    let simple = Uuid::now_v7().simple().to_string();
    simple[simple.len() - 12..].to_string()
}

fn keyed_blocks(paragraphs: &[&str]) -> Vec<Block> {
    paragraphs
        .iter()
        .map(|text| {
            let mut block = Block::paragraph(*text);
            block.set_key(new_key());
            if let Block::Text(text_block) = &mut block {
                for span in &mut text_block.children {
                    span.key = Some(new_key());
                }
            }
            block
        })
        .collect()
}

fn seo(title: &str, description: &str) -> Option<Seo> {
    Some(Seo {
        meta_title: Some(format!("{title} - {COMPANY_NAME}")),
        meta_description: Some(description.to_string()),
    })
}

fn page(title: &str, slug: &str, order: i64, in_nav: bool, body: &[&str], description: &str) -> Page {
    Page {
        id: None,
        title: title.into(),
        slug: Slug::new(slug),
        content: keyed_blocks(body),
        order: Some(order),
        show_in_navigation: Some(in_nav),
        seo: seo(title, description),
    }
}

fn service(
    title: &str,
    slug: &str,
    category: ServiceCategory,
    order: i64,
    description: &str,
    body: &str,
) -> Service {
    Service {
        id: None,
        title: title.into(),
        slug: Slug::new(slug),
        category: Some(category),
        description: Some(description.into()),
        content: keyed_blocks(&[body]),
        order: Some(order),
        seo: None,
    }
}

fn nav_link(path: &str) -> NavLink {
    NavLink::Custom(path.into())
}

pub fn pages() -> Vec<Page> {
    vec![
        page(
            "About Us",
            "about-us",
            1,
            true,
            &[
                "Aderyn Building Consultancy is an independent Chartered Building Surveying firm \
providing clear, concise, tailored building surveying, construction and property advice for Landlords, \
Occupiers and Investors of commercial and residential property.",
                "With our diverse range of property knowledge and experience, we are able to offer our \
clients a comprehensive array of real estate services.",
            ],
            "Learn about Aderyn Building Consultancy, an independent Chartered Building Surveying firm \
with offices in Cardiff and Swansea.",
        ),
        page(
            "Party Wall Matters",
            "party-wall-matters",
            2,
            true,
            &["We provide comprehensive party wall services in accordance with the Party Wall etc. Act 1996."],
            "Expert party wall services in accordance with the Party Wall etc. Act 1996.",
        ),
        page(
            "Accreditations",
            "accreditations",
            3,
            true,
            &["Our team holds relevant professional qualifications and accreditations to ensure the \
highest standards of service."],
            "Professional qualifications and accreditations of the Aderyn Building Consultancy team.",
        ),
        page(
            "Privacy Statement",
            "privacy-statement",
            4,
            false,
            &["This privacy statement explains how we collect, use, and protect your personal information."],
            "Privacy policy and data protection information for Aderyn Building Consultancy.",
        ),
    ]
}

pub fn services() -> Vec<Service> {
    use ServiceCategory::{BuildingSurveys, LandlordTenant};

    vec![
        service(
            "Due Diligence Building Surveys",
            "due-diligence-building-surveys",
            BuildingSurveys,
            1,
            "Comprehensive building surveys for property acquisition and investment decisions.",
            "Our due diligence building surveys provide detailed assessments of property condition to \
support informed investment and acquisition decisions.",
        ),
        service(
            "Vendor Surveys",
            "vendor-surveys",
            BuildingSurveys,
            2,
            "Pre-sale property surveys to identify and address potential issues before marketing.",
            "Vendor surveys help property owners identify and address potential issues before bringing \
their property to market.",
        ),
        service(
            "Planned Preventative Maintenance Surveys",
            "planned-preventative-maintenance-surveys",
            BuildingSurveys,
            3,
            "Strategic maintenance planning to preserve property value and prevent costly repairs.",
            "Our planned preventative maintenance surveys help property owners develop strategic \
maintenance programs to preserve value and prevent costly emergency repairs.",
        ),
        service(
            "Building Pathology / Defect Diagnosis",
            "building-pathology-defect-diagnosis",
            BuildingSurveys,
            4,
            "Expert diagnosis of building defects and pathology issues.",
            "Specialist building pathology services to diagnose complex defects and provide expert \
remedial advice.",
        ),
        service(
            "Dilapidations",
            "dilapidations",
            LandlordTenant,
            1,
            "Expert dilapidations advice for landlords and tenants.",
            "Comprehensive dilapidations services including schedules, negotiations, and dispute \
resolution.",
        ),
        service(
            "Licence to Alter",
            "licence-to-alter",
            LandlordTenant,
            2,
            "Licence to alter applications and approvals for tenant improvements.",
            "Expert assistance with licence to alter applications and tenant improvement approvals.",
        ),
    ]
}

pub fn navigation() -> Navigation {
    let item = |title: &str, path: &str, sub_items: Vec<NavSubItem>| NavItem {
        key: Some(new_key()),
        title: title.into(),
        link: nav_link(path),
        sub_items,
    };
    let sub = |title: &str, path: &str| NavSubItem {
        key: Some(new_key()),
        title: title.into(),
        link: nav_link(path),
    };

    Navigation {
        id: Some(Navigation::ID.into()),
        title: Some("Main Navigation".into()),
        main_navigation: vec![
            item("Home", "/", vec![]),
            item("About Us", "/about-us", vec![]),
            item(
                "Building Surveys",
                "/services",
                vec![
                    sub("Due Diligence Building Surveys", "/services/due-diligence-building-surveys"),
                    sub("Vendor Surveys", "/services/vendor-surveys"),
                ],
            ),
            item("Services", "/services", vec![]),
            item("Contact Us", "/contact-us", vec![]),
        ],
    }
}

/// Site settings are the same literal settings the site falls back to, with keyed offices.
pub fn site_settings() -> SiteSettings {
    let mut settings = fallback::site_settings();
    for office in &mut settings.offices {
        office.key = Some(new_key());
    }
    settings
}

pub fn content() -> SeedContent {
    SeedContent {
        site_settings: site_settings(),
        pages: pages(),
        services: services(),
        navigation: navigation(),
    }
}
