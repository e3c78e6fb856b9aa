//! The fixed set of read-only GROQ queries the site runs.
//!
//! Every query filters by document type; list queries sort by `order asc`.

use serde_json::Value;

/// A GROQ query plus its `$param` bindings.
#[derive(Debug, Clone)]
pub struct Query {
    /// Short name used in logs.
    pub name: &'static str,
    pub groq: &'static str,
    pub params: Vec<(&'static str, Value)>,
}

impl Query {
    fn new(name: &'static str, groq: &'static str) -> Self {
        Self {
            name,
            groq,
            params: Vec::new(),
        }
    }

    /// Bind `$name` to a JSON value.
    pub fn param(mut self, name: &'static str, value: impl Into<Value>) -> Self {
        self.params.push((name, value.into()));
        self
    }
}

const SITE_SETTINGS: &str = r#"*[_type == "siteSettings"][0]{
  title,
  description,
  contactInfo,
  offices,
  socialMedia,
  seo
}"#;

const PAGES: &str = r#"*[_type == "page"] | order(order asc){
  _id,
  title,
  slug,
  content,
  order,
  showInNavigation
}"#;

const PAGE_BY_SLUG: &str = r#"*[_type == "page" && slug.current == $slug][0]{
  _id,
  title,
  slug,
  content,
  seo
}"#;

const SERVICES: &str = r#"*[_type == "service"] | order(order asc){
  _id,
  title,
  slug,
  description,
  content,
  category,
  order
}"#;

const SERVICES_BY_CATEGORY: &str = r#"*[_type == "service" && category == $category] | order(order asc){
  _id,
  title,
  slug,
  description,
  content,
  category,
  order
}"#;

const SERVICE_BY_SLUG: &str = r#"*[_type == "service" && slug.current == $slug][0]{
  _id,
  title,
  slug,
  description,
  content,
  category,
  seo
}"#;

const RELATED_SERVICES: &str = r#"*[_type == "service" && category == $category && _id != $currentId] | order(order asc)[0...3]{
  _id,
  title,
  slug,
  description,
  category
}"#;

// References are dereferenced so links can be built without a second query.
const NAVIGATION: &str = r#"*[_type == "navigation"][0]{
  title,
  mainNavigation[]{
    _key,
    title,
    link{
      type,
      external,
      custom,
      "page": page->{"_ref": _id, "slug": slug.current},
      "service": service->{"_ref": _id, "slug": slug.current}
    },
    subItems[]{
      _key,
      title,
      link{
        type,
        external,
        custom,
        "page": page->{"_ref": _id, "slug": slug.current},
        "service": service->{"_ref": _id, "slug": slug.current}
      }
    }
  }
}"#;

pub fn site_settings() -> Query {
    Query::new("site_settings", SITE_SETTINGS)
}

pub fn pages() -> Query {
    Query::new("pages", PAGES)
}

pub fn page_by_slug(slug: &str) -> Query {
    Query::new("page_by_slug", PAGE_BY_SLUG).param("slug", slug)
}

pub fn services() -> Query {
    Query::new("services", SERVICES)
}

pub fn services_by_category(category: &str) -> Query {
    Query::new("services_by_category", SERVICES_BY_CATEGORY).param("category", category)
}

pub fn service_by_slug(slug: &str) -> Query {
    Query::new("service_by_slug", SERVICE_BY_SLUG).param("slug", slug)
}

/// Up to three other services in `category`, excluding `current_id`.
pub fn related_services(category: &str, current_id: &str) -> Query {
    Query::new("related_services", RELATED_SERVICES)
        .param("category", category)
        .param("currentId", current_id)
}

pub fn navigation() -> Query {
    Query::new("navigation", NAVIGATION)
}
