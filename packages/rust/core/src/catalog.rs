//! Service grouping and category labels for the listing page.

use std::sync::LazyLock;

use regex::Regex;

use aderyn_shared::{Service, ServiceCategory};

/// Services sharing one category, in listing order.
#[derive(Debug, Clone)]
pub struct CategoryGroup {
    pub category: ServiceCategory,
    pub label: String,
    pub services: Vec<Service>,
}

/// Group services by category, keeping the order in which each category
/// first appears. Services without a category go under `other`.
pub fn group_by_category(services: Vec<Service>) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();

    for service in services {
        let category = service.category.clone().unwrap_or(ServiceCategory::Other);
        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.services.push(service),
            None => groups.push(CategoryGroup {
                label: category_label(&category),
                category,
                services: vec![service],
            }),
        }
    }

    groups
}

/// Heading for a category: its fixed label, or the tag made readable.
pub fn category_label(category: &ServiceCategory) -> String {
    match category.label() {
        Some(label) => label.to_string(),
        None => badge(category),
    }
}

/// Card badge text: the raw tag with hyphens as spaces, each word capitalised.
pub fn badge(category: &ServiceCategory) -> String {
    title_case(&category.as_str().replace('-', " "))
}

fn title_case(s: &str) -> String {
    static WORD_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w").expect("valid regex"));
    WORD_START
        .replace_all(s, |caps: &regex::Captures<'_>| caps[0].to_uppercase())
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aderyn_shared::Slug;

    fn service(slug: &str, category: Option<&str>) -> Service {
        Service {
            id: Some(format!("svc-{slug}")),
            title: slug.to_string(),
            slug: Slug::new(slug),
            category: category.map(ServiceCategory::from),
            description: None,
            content: vec![],
            order: None,
            seo: None,
        }
    }

    #[test]
    fn every_listed_category_gets_its_fixed_label() {
        let services: Vec<_> = ServiceCategory::LISTED
            .iter()
            .map(|c| service(&format!("s-{c}"), Some(c.as_str())))
            .collect();

        for group in group_by_category(services) {
            assert_eq!(Some(group.label.as_str()), group.category.label());
            assert!(group.services.iter().all(|s| s.category.as_ref() == Some(&group.category)));
        }
    }

    #[test]
    fn groups_keep_first_appearance_order() {
        let groups = group_by_category(vec![
            service("dilapidations", Some("landlord-tenant")),
            service("vendor-surveys", Some("building-surveys")),
            service("licence-to-alter", Some("landlord-tenant")),
        ]);
        let labels: Vec<_> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, ["Landlord and Tenant", "Building Surveys"]);
        let slugs: Vec<_> = groups[0].services.iter().map(|s| s.slug.current.as_str()).collect();
        assert_eq!(slugs, ["dilapidations", "licence-to-alter"]);
    }

    #[test]
    fn uncategorised_services_join_other() {
        let groups = group_by_category(vec![
            service("heritage", None),
            service("misc", Some("other")),
        ]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, "Other Services");
        assert_eq!(groups[0].services.len(), 2);
    }

    #[test]
    fn unlisted_tags_are_title_cased() {
        let tag = ServiceCategory::from("heritage-and-conservation-works");
        assert_eq!(category_label(&tag), "Heritage And Conservation Works");
    }

    #[test]
    fn badges_use_the_raw_tag() {
        assert_eq!(badge(&ServiceCategory::LandlordTenant), "Landlord Tenant");
        assert_eq!(badge(&ServiceCategory::PartyWall), "Party Wall");
    }
}
