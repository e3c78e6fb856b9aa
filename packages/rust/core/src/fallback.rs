//! Literal content served when the CMS has nothing for a route.
//!
//! Also the source of the seed documents, so a freshly migrated dataset and
//! an offline site show the same company details.

use aderyn_shared::{
    Address, ContactInfo, NavItem, NavLink, NavSubItem, Navigation, Office, Seo, ServiceCategory,
    SiteSettings,
};

pub const COMPANY_NAME: &str = "Aderyn Building Consultancy";

pub const SITE_DESCRIPTION: &str = "Independent Chartered Building Surveying firm providing clear, \
concise, tailored building surveying, construction and property advice for Landlords, Occupiers and \
Investors.";

pub const SITE_META_TITLE: &str = "Aderyn Building Consultancy | Building Surveyors Cardiff & Swansea";

/// Hero copy on the home page when no home record exists.
pub const HERO_LEAD: &str = "Independent Chartered Building Surveying firm providing clear, concise, \
tailored building surveying, construction and property advice for Landlords, Occupiers and Investors of \
commercial and residential property.";
pub const HERO_DETAIL: &str = "With our diverse range of property knowledge and experience, we are able \
to offer our clients a comprehensive array of real estate services.";
pub const HERO_OFFICES: &str =
    "With offices in Cardiff and Swansea we provide a national service to our client base.";

const EMAIL: &str = "info@aderynbc.com";
const CARDIFF_PHONE: &str = "(029) 2056 8136";
const SWANSEA_PHONE: &str = "(01792) 805100";

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackPage {
    pub slug: &'static str,
    pub title: &'static str,
    /// Single paragraph shown as the page body.
    pub body: &'static str,
    pub description: &'static str,
}

pub static PAGES: [FallbackPage; 4] = [
    FallbackPage {
        slug: "about-us",
        title: "About Us",
        body: "Aderyn Building Consultancy is an independent Chartered Building Surveying firm \
providing clear, concise, tailored building surveying, construction and property advice for Landlords, \
Occupiers and Investors.",
        description: "Learn about Aderyn Building Consultancy, an independent Chartered Building \
Surveying firm.",
    },
    FallbackPage {
        slug: "party-wall-matters",
        title: "Party Wall Matters",
        body: "Expert party wall advice and services for property owners and developers.",
        description: "Expert party wall advice and services for property owners and developers.",
    },
    FallbackPage {
        slug: "accreditations",
        title: "Accreditations",
        body: "Our professional accreditations and industry memberships.",
        description: "Our professional accreditations and industry memberships.",
    },
    FallbackPage {
        slug: "privacy-statement",
        title: "Privacy Statement",
        body: "Our commitment to protecting your privacy and personal data.",
        description: "Our commitment to protecting your privacy and personal data.",
    },
];

pub fn page(slug: &str) -> Option<&'static FallbackPage> {
    PAGES.iter().find(|p| p.slug == slug)
}

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackService {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: ServiceCategory,
}

const fn svc(
    slug: &'static str,
    title: &'static str,
    description: &'static str,
    category: ServiceCategory,
) -> FallbackService {
    FallbackService {
        slug,
        title,
        description,
        category,
    }
}

pub static SERVICES: [FallbackService; 13] = [
    svc(
        "due-diligence-building-surveys",
        "Due Diligence Building Surveys",
        "Comprehensive building surveys for property acquisition and investment decisions.",
        ServiceCategory::BuildingSurveys,
    ),
    svc(
        "vendor-surveys",
        "Vendor Surveys",
        "Pre-sale property surveys to identify and address potential issues before marketing.",
        ServiceCategory::BuildingSurveys,
    ),
    svc(
        "planned-preventative-maintenance-surveys",
        "Planned Preventative Maintenance Surveys",
        "Strategic maintenance planning to preserve property value and prevent costly repairs.",
        ServiceCategory::BuildingSurveys,
    ),
    svc(
        "building-pathology-defect-diagnosis",
        "Building Pathology / Defect Diagnosis",
        "Expert diagnosis of building defects and pathology issues.",
        ServiceCategory::BuildingSurveys,
    ),
    svc(
        "dilapidations",
        "Dilapidations",
        "Expert dilapidations advice for landlords and tenants.",
        ServiceCategory::LandlordTenant,
    ),
    svc(
        "licence-to-alter",
        "Licence to Alter",
        "Licence to alter applications and approvals for tenant improvements.",
        ServiceCategory::LandlordTenant,
    ),
    svc(
        "feasibility-studies",
        "Feasibility Studies",
        "Comprehensive feasibility assessments for development projects.",
        ServiceCategory::LandlordTenant,
    ),
    svc(
        "reinstatement-cost-assessments",
        "Reinstatement Cost Assessments",
        "Professional reinstatement cost assessments for insurance purposes.",
        ServiceCategory::LandlordTenant,
    ),
    svc(
        "schedules-of-condition",
        "Schedules of Condition",
        "Detailed schedules of condition for property documentation.",
        ServiceCategory::LandlordTenant,
    ),
    svc(
        "contract-administration",
        "Contract Administration",
        "Professional contract administration services for construction projects.",
        ServiceCategory::ProjectDelivery,
    ),
    svc(
        "project-management",
        "Project Management",
        "Comprehensive project management for construction and development projects.",
        ServiceCategory::ProjectDelivery,
    ),
    svc(
        "cdm-2015",
        "CDM 2015",
        "Construction Design and Management Regulations 2015 compliance services.",
        ServiceCategory::ProjectDelivery,
    ),
    svc(
        "exit-strategies",
        "Exit Strategies",
        "Strategic exit planning and implementation for property investments.",
        ServiceCategory::ProfessionalServices,
    ),
];

pub fn service(slug: &str) -> Option<&'static FallbackService> {
    SERVICES.iter().find(|s| s.slug == slug)
}

// ---------------------------------------------------------------------------
// Site settings
// ---------------------------------------------------------------------------

pub fn offices() -> Vec<Office> {
    vec![
        office("Cardiff Office", "Sophia House", "28 Cathedral Road", "Cardiff", "CF11 9LJ", CARDIFF_PHONE),
        office("Swansea Office", "Princess House", "Princess Way", "Swansea", "SA1 3LW", SWANSEA_PHONE),
    ]
}

fn office(name: &str, building: &str, street: &str, city: &str, postcode: &str, phone: &str) -> Office {
    Office {
        key: None,
        name: name.into(),
        address: Some(Address {
            building: Some(building.into()),
            street: Some(street.into()),
            city: Some(city.into()),
            postcode: Some(postcode.into()),
        }),
        phone: Some(phone.into()),
        email: Some(EMAIL.into()),
    }
}

pub fn site_settings() -> SiteSettings {
    SiteSettings {
        id: Some(SiteSettings::ID.into()),
        title: COMPANY_NAME.into(),
        description: Some(SITE_DESCRIPTION.into()),
        contact_info: Some(ContactInfo {
            email: Some(EMAIL.into()),
            phone: Some(CARDIFF_PHONE.into()),
        }),
        offices: offices(),
        social_media: None,
        seo: Some(Seo {
            meta_title: Some(SITE_META_TITLE.into()),
            meta_description: Some(SITE_DESCRIPTION.into()),
        }),
    }
}

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

fn item(title: &str, path: &str, sub_items: Vec<NavSubItem>) -> NavItem {
    NavItem {
        key: None,
        title: title.into(),
        link: NavLink::Custom(path.into()),
        sub_items,
    }
}

fn service_links(category: &ServiceCategory) -> Vec<NavSubItem> {
    SERVICES
        .iter()
        .filter(|s| &s.category == category)
        .map(|s| NavSubItem {
            key: None,
            title: s.title.into(),
            link: NavLink::Custom(format!("/services/{}", s.slug)),
        })
        .collect()
}

/// The main menu as the site shipped before it was CMS-managed.
pub fn navigation() -> Navigation {
    let services = [
        ServiceCategory::LandlordTenant,
        ServiceCategory::ProjectDelivery,
        ServiceCategory::ProfessionalServices,
    ]
    .iter()
    .flat_map(service_links)
    .collect();

    Navigation {
        id: Some(Navigation::ID.into()),
        title: Some("Main Navigation".into()),
        main_navigation: vec![
            item("Home", "/", vec![]),
            item("About Us", "/about-us", vec![]),
            item("Building Surveys", "/services", service_links(&ServiceCategory::BuildingSurveys)),
            item("Party Wall Matters", "/party-wall-matters", vec![]),
            item("Services", "/services", services),
            item("Accreditations", "/accreditations", vec![]),
            item("Contact Us", "/contact-us", vec![]),
            item("Privacy Statement", "/privacy-statement", vec![]),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_by_slug() {
        assert_eq!(page("accreditations").map(|p| p.title), Some("Accreditations"));
        assert!(page("home").is_none());
        assert_eq!(
            service("cdm-2015").map(|s| &s.category),
            Some(&ServiceCategory::ProjectDelivery)
        );
        assert!(service("roofing").is_none());
    }

    #[test]
    fn slugs_are_unique() {
        let mut slugs: Vec<_> = SERVICES.iter().map(|s| s.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), SERVICES.len());
    }

    #[test]
    fn menu_matches_shipped_header() {
        let nav = navigation();
        let titles: Vec<_> = nav.main_navigation.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "Home",
                "About Us",
                "Building Surveys",
                "Party Wall Matters",
                "Services",
                "Accreditations",
                "Contact Us",
                "Privacy Statement"
            ]
        );
        assert_eq!(nav.main_navigation[2].sub_items.len(), 4);
        assert_eq!(nav.main_navigation[4].sub_items.len(), 9);
        assert_eq!(
            nav.main_navigation[4].sub_items[0].link,
            NavLink::Custom("/services/dilapidations".into())
        );
    }

    #[test]
    fn settings_list_both_offices() {
        let settings = site_settings();
        assert_eq!(settings.email(), Some("info@aderynbc.com"));
        let cities: Vec<_> = settings
            .offices
            .iter()
            .filter_map(|o| o.address.as_ref()?.city.as_deref())
            .collect();
        assert_eq!(cities, ["Cardiff", "Swansea"]);
    }
}
