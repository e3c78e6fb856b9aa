//! Fetch-or-fallback content lookups for every page of the site.
//!
//! Each lookup asks the CMS once. A failed request is logged and treated the
//! same as an empty result; the literal fallback content then fills in. No
//! lookup here returns an error.

use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use aderyn_cms::{CmsClient, Query, queries};
use aderyn_shared::{Block, CmsConfig, Navigation, Page, Service, ServiceCategory, SiteSettings};

use crate::fallback::{self, COMPANY_NAME, FallbackPage, FallbackService};

/// Services shown on the home page before "View All Services".
pub const FEATURED_SERVICES: usize = 6;

// ---------------------------------------------------------------------------
// View data
// ---------------------------------------------------------------------------

/// Title and description for the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub title: String,
    pub description: Option<String>,
}

impl Metadata {
    fn not_found(title: &str) -> Self {
        Self {
            title: title.to_string(),
            description: None,
        }
    }
}

/// Main body of a page or service.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Portable text from the CMS.
    Blocks(Vec<Block>),
    /// A single plain paragraph.
    Text(String),
}

impl Body {
    fn from_blocks_or(blocks: Vec<Block>, text: impl Into<String>) -> Self {
        if blocks.is_empty() {
            Self::Text(text.into())
        } else {
            Self::Blocks(blocks)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageContent {
    pub title: String,
    pub body: Body,
    pub metadata: Metadata,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceContent {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<ServiceCategory>,
    pub body: Body,
    pub metadata: Metadata,
    /// Same-category services; only looked up for CMS-backed services.
    pub related: Vec<Service>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeContent {
    /// Body of the CMS page with slug `home` or `/`, if one exists.
    pub intro: Option<Vec<Block>>,
    pub featured: Vec<Service>,
    /// More services exist than are featured.
    pub has_more: bool,
}

// ---------------------------------------------------------------------------
// SiteContent
// ---------------------------------------------------------------------------

/// Content source for the site. Without a client every lookup is fallback.
#[derive(Debug, Clone, Default)]
pub struct SiteContent {
    client: Option<CmsClient>,
}

impl SiteContent {
    /// Connect when a project id is configured; otherwise serve fallback only.
    pub fn new(config: &CmsConfig) -> Self {
        if config.project_id.is_none() {
            debug!("no CMS project configured, serving fallback content");
            return Self::offline();
        }
        match CmsClient::new(config) {
            Ok(client) => Self::from_client(client),
            Err(e) => {
                warn!(error = %e, "could not build CMS client, serving fallback content");
                Self::offline()
            }
        }
    }

    pub fn offline() -> Self {
        Self { client: None }
    }

    pub fn from_client(client: CmsClient) -> Self {
        Self {
            client: Some(client),
        }
    }

    pub fn client(&self) -> Option<&CmsClient> {
        self.client.as_ref()
    }

    /// Run `query`, mapping every failure to `None`.
    async fn fetch<T: DeserializeOwned>(&self, query: Query) -> Option<T> {
        let client = self.client.as_ref()?;
        match client.fetch(&query).await {
            Ok(found) => found,
            Err(e) => {
                warn!(query = query.name, error = %e, "CMS fetch failed, using fallback");
                None
            }
        }
    }

    #[instrument(skip_all)]
    pub async fn home(&self) -> HomeContent {
        let (pages, services) = tokio::join!(
            self.fetch::<Vec<Page>>(queries::pages()),
            self.fetch::<Vec<Service>>(queries::services()),
        );

        let intro = pages
            .unwrap_or_default()
            .into_iter()
            .find(|p| matches!(p.slug.current.as_str(), "home" | "/"))
            .map(|p| p.content)
            .filter(|blocks| !blocks.is_empty());

        let mut featured = services.unwrap_or_default();
        let has_more = featured.len() > FEATURED_SERVICES;
        featured.truncate(FEATURED_SERVICES);

        HomeContent {
            intro,
            featured,
            has_more,
        }
    }

    /// A free-standing page. `None` means 404.
    #[instrument(skip(self))]
    pub async fn page(&self, slug: &str) -> Option<PageContent> {
        let record: Option<Page> = self.fetch(queries::page_by_slug(slug)).await;
        match record {
            Some(page) => Some(page_from_record(page)),
            None => fallback::page(slug).map(page_from_fallback),
        }
    }

    #[instrument(skip(self))]
    pub async fn page_metadata(&self, slug: &str) -> Metadata {
        match self.page(slug).await {
            Some(page) => page.metadata,
            None => Metadata::not_found("Page Not Found"),
        }
    }

    /// A service detail page. `None` means 404.
    #[instrument(skip(self))]
    pub async fn service(&self, slug: &str) -> Option<ServiceContent> {
        let record: Option<Service> = self.fetch(queries::service_by_slug(slug)).await;
        match record {
            Some(service) => {
                let related = match (&service.category, &service.id) {
                    (Some(category), Some(id)) => self
                        .fetch::<Vec<Service>>(queries::related_services(category.as_str(), id))
                        .await
                        .unwrap_or_default(),
                    _ => Vec::new(),
                };
                Some(service_from_record(service, related))
            }
            None => fallback::service(slug).map(service_from_fallback),
        }
    }

    #[instrument(skip(self))]
    pub async fn service_metadata(&self, slug: &str) -> Metadata {
        match self.service(slug).await {
            Some(service) => service.metadata,
            None => Metadata::not_found("Service Not Found"),
        }
    }

    /// All services in listing order. Empty when the CMS has none.
    #[instrument(skip_all)]
    pub async fn services(&self) -> Vec<Service> {
        self.fetch::<Vec<Service>>(queries::services())
            .await
            .unwrap_or_default()
    }

    /// Services tagged `category`, in listing order.
    #[instrument(skip(self))]
    pub async fn services_in(&self, category: &ServiceCategory) -> Vec<Service> {
        self.fetch::<Vec<Service>>(queries::services_by_category(category.as_str()))
            .await
            .unwrap_or_default()
    }

    #[instrument(skip_all)]
    pub async fn site_settings(&self) -> SiteSettings {
        match self.fetch::<SiteSettings>(queries::site_settings()).await {
            Some(settings) => settings,
            None => fallback::site_settings(),
        }
    }

    #[instrument(skip_all)]
    pub async fn navigation(&self) -> Navigation {
        match self.fetch::<Navigation>(queries::navigation()).await {
            Some(navigation) => navigation,
            None => fallback::navigation(),
        }
    }
}

// ---------------------------------------------------------------------------
// Record → view data
// ---------------------------------------------------------------------------

fn default_title(title: &str) -> String {
    format!("{title} - {COMPANY_NAME}")
}

fn page_from_record(page: Page) -> PageContent {
    let seo = page.seo.unwrap_or_default();
    let metadata = Metadata {
        title: seo.meta_title.unwrap_or_else(|| default_title(&page.title)),
        description: Some(
            seo.meta_description
                .unwrap_or_else(|| format!("{} page for {COMPANY_NAME}", page.title)),
        ),
    };
    PageContent {
        body: Body::from_blocks_or(page.content, page.title.clone()),
        title: page.title,
        metadata,
    }
}

fn page_from_fallback(page: &FallbackPage) -> PageContent {
    PageContent {
        title: page.title.to_string(),
        body: Body::Text(page.body.to_string()),
        metadata: Metadata {
            title: default_title(page.title),
            description: Some(page.description.to_string()),
        },
    }
}

fn service_from_record(service: Service, related: Vec<Service>) -> ServiceContent {
    let seo = service.seo.unwrap_or_default();
    let metadata = Metadata {
        title: seo.meta_title.unwrap_or_else(|| default_title(&service.title)),
        description: Some(
            seo.meta_description
                .or_else(|| service.description.clone())
                .unwrap_or_else(|| format!("{} services from {COMPANY_NAME}", service.title)),
        ),
    };
    ServiceContent {
        body: Body::from_blocks_or(service.content, service.description.clone().unwrap_or_default()),
        title: service.title,
        description: service.description,
        category: service.category,
        metadata,
        related,
    }
}

fn service_from_fallback(service: &FallbackService) -> ServiceContent {
    ServiceContent {
        title: service.title.to_string(),
        description: Some(service.description.to_string()),
        category: Some(service.category.clone()),
        body: Body::Text(service.description.to_string()),
        metadata: Metadata {
            title: default_title(service.title),
            description: Some(service.description.to_string()),
        },
        related: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aderyn_shared::{NavLink, Seo, Slug};
    use url::Url;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const QUERY_PATH: &str = "/v2024-01-01/data/query/production";

    fn fixture(name: &str) -> String {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../../fixtures/json")
            .join(name);
        std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("missing fixture: {}", path.display()))
    }

    fn result(value: serde_json::Value) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "result": value }))
    }

    fn content_for(server: &MockServer) -> SiteContent {
        let config = CmsConfig {
            project_id: Some("test-project".into()),
            dataset: "production".into(),
            api_version: "2024-01-01".into(),
            use_cdn: false,
            token: None,
            api_host: Some(Url::parse(&server.uri()).unwrap()),
            timeout_secs: 5,
        };
        SiteContent::new(&config)
    }

    fn svc(n: usize) -> serde_json::Value {
        serde_json::json!({
            "_id": format!("svc-{n}"),
            "title": format!("Service {n}"),
            "slug": {"current": format!("service-{n}")},
            "category": "building-surveys"
        })
    }

    #[tokio::test]
    async fn offline_pages_equal_fallback() {
        let content = SiteContent::offline();
        for page in &fallback::PAGES {
            let found = content.page(page.slug).await.expect("fallback page");
            assert_eq!(found, page_from_fallback(page));
            assert_eq!(found.body, Body::Text(page.body.to_string()));
        }
        assert!(content.page("no-such-page").await.is_none());
    }

    #[tokio::test]
    async fn offline_services_equal_fallback() {
        let content = SiteContent::offline();
        for service in &fallback::SERVICES {
            let found = content.service(service.slug).await.expect("fallback service");
            assert_eq!(found, service_from_fallback(service));
            assert!(found.related.is_empty());
        }
        assert!(content.service("roofing").await.is_none());
    }

    #[tokio::test]
    async fn metadata_fallbacks() {
        let content = SiteContent::offline();
        let meta = content.page_metadata("accreditations").await;
        assert_eq!(meta.title, "Accreditations - Aderyn Building Consultancy");
        assert_eq!(
            meta.description.as_deref(),
            Some("Our professional accreditations and industry memberships.")
        );
        assert_eq!(content.page_metadata("nope").await.title, "Page Not Found");
        assert_eq!(content.service_metadata("nope").await.title, "Service Not Found");
    }

    #[test]
    fn record_metadata_defaults() {
        let page = Page {
            id: Some("p1".into()),
            title: "Team".into(),
            slug: Slug::new("team"),
            content: vec![],
            order: None,
            show_in_navigation: None,
            seo: None,
        };
        let view = page_from_record(page);
        assert_eq!(view.metadata.title, "Team - Aderyn Building Consultancy");
        assert_eq!(
            view.metadata.description.as_deref(),
            Some("Team page for Aderyn Building Consultancy")
        );
        assert_eq!(view.body, Body::Text("Team".into()));

        let service = Service {
            id: Some("s1".into()),
            title: "Roofing".into(),
            slug: Slug::new("roofing"),
            category: None,
            description: None,
            content: vec![],
            order: None,
            seo: Some(Seo {
                meta_title: Some("Roofs".into()),
                meta_description: None,
            }),
        };
        let view = service_from_record(service, vec![]);
        assert_eq!(view.metadata.title, "Roofs");
        assert_eq!(
            view.metadata.description.as_deref(),
            Some("Roofing services from Aderyn Building Consultancy")
        );
        assert_eq!(view.body, Body::Text(String::new()));
    }

    #[tokio::test]
    async fn cms_page_wins_over_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(QUERY_PATH))
            .and(query_param("$slug", "\"about-us\""))
            .respond_with(ResponseTemplate::new(200).set_body_string(fixture("page-about-us.json")))
            .mount(&server)
            .await;

        let page = content_for(&server).page("about-us").await.expect("page");
        assert_eq!(page.metadata.title, "About Aderyn");
        assert_eq!(
            page.metadata.description.as_deref(),
            Some("About Us page for Aderyn Building Consultancy")
        );
        assert!(matches!(page.body, Body::Blocks(ref blocks) if blocks.len() == 2));
    }

    #[tokio::test]
    async fn fetch_errors_fall_back() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(QUERY_PATH))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .mount(&server)
            .await;

        let content = content_for(&server);
        let page = content.page("party-wall-matters").await.expect("fallback");
        assert_eq!(page, page_from_fallback(fallback::page("party-wall-matters").unwrap()));
        assert_eq!(content.site_settings().await, fallback::site_settings());
        assert_eq!(content.navigation().await, fallback::navigation());
        assert!(content.services().await.is_empty());

        let home = content.home().await;
        assert!(home.intro.is_none());
        assert!(home.featured.is_empty());
    }

    #[tokio::test]
    async fn home_features_six_services() {
        let server = MockServer::start().await;
        let services: Vec<_> = (1..=8).map(svc).collect();
        Mock::given(method("GET"))
            .and(path(QUERY_PATH))
            .and(query_param("query", queries::services().groq))
            .respond_with(result(serde_json::Value::Array(services)))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(QUERY_PATH))
            .and(query_param("query", queries::pages().groq))
            .respond_with(result(serde_json::json!([{
                "_id": "home",
                "title": "Home",
                "slug": {"current": "home"},
                "content": [{"_type": "block", "children": [{"_type": "span", "text": "Welcome"}]}]
            }])))
            .mount(&server)
            .await;

        let home = content_for(&server).home().await;
        assert_eq!(home.featured.len(), FEATURED_SERVICES);
        assert!(home.has_more);
        assert_eq!(home.intro.map(|b| b.len()), Some(1));
    }

    #[tokio::test]
    async fn cms_service_fetches_related() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(QUERY_PATH))
            .and(query_param("query", queries::service_by_slug("x").groq))
            .respond_with(result(svc(1)))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(QUERY_PATH))
            .and(query_param("$currentId", "\"svc-1\""))
            .and(query_param("$category", "\"building-surveys\""))
            .respond_with(result(serde_json::json!([svc(2), svc(3)])))
            .expect(1)
            .mount(&server)
            .await;

        let service = content_for(&server).service("service-1").await.expect("service");
        assert_eq!(service.title, "Service 1");
        assert_eq!(service.related.len(), 2);
        assert_eq!(service.body, Body::Text(String::new()));
    }

    #[tokio::test]
    async fn services_in_binds_category() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(QUERY_PATH))
            .and(query_param("$category", "\"landlord-tenant\""))
            .respond_with(result(serde_json::json!([svc(4)])))
            .mount(&server)
            .await;

        let content = content_for(&server);
        let found = content.services_in(&ServiceCategory::LandlordTenant).await;
        assert_eq!(found.len(), 1);
        assert!(SiteContent::offline().services_in(&ServiceCategory::Other).await.is_empty());
    }

    #[tokio::test]
    async fn cms_navigation_and_settings() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(QUERY_PATH))
            .and(query_param("query", queries::navigation().groq))
            .respond_with(ResponseTemplate::new(200).set_body_string(fixture("navigation.json")))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(QUERY_PATH))
            .and(query_param("query", queries::site_settings().groq))
            .respond_with(ResponseTemplate::new(200).set_body_string(fixture("site-settings.json")))
            .mount(&server)
            .await;

        let content = content_for(&server);
        let (nav, settings) = tokio::join!(content.navigation(), content.site_settings());
        assert_eq!(nav.main_navigation.len(), 3);
        assert!(matches!(nav.main_navigation[1].link, NavLink::Page(_)));
        assert_eq!(settings.title, "Aderyn Building Consultancy Ltd");
        assert_eq!(settings.offices.len(), 1);
    }

    #[tokio::test]
    async fn navigation_keeps_items_with_dangling_references() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(QUERY_PATH))
            .and(query_param("query", queries::navigation().groq))
            .respond_with(result(serde_json::json!({
                "title": "Main Navigation",
                "mainNavigation": [
                    {"_key": "a", "title": "CMS Home", "link": {"type": "custom", "custom": "/"}},
                    {"_key": "b", "title": "Old Page", "link": {"type": "page", "page": null}},
                    {"_key": "c", "title": "Unset", "link": {"type": "service"}}
                ]
            })))
            .mount(&server)
            .await;

        let nav = content_for(&server).navigation().await;
        let titles: Vec<_> = nav.main_navigation.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["CMS Home", "Old Page", "Unset"]);
        assert_eq!(nav.main_navigation[1].link, NavLink::Page(None));

        let entries = crate::navigation::menu(&nav);
        assert_eq!(entries[0].href.as_deref(), Some("/"));
        assert_eq!(entries[1].href, None);
        assert_eq!(entries[2].href, None);
    }

    #[test]
    fn missing_project_id_means_offline() {
        let config = CmsConfig {
            project_id: None,
            dataset: "production".into(),
            api_version: "2024-01-01".into(),
            use_cdn: true,
            token: None,
            api_host: None,
            timeout_secs: 5,
        };
        assert!(SiteContent::new(&config).client().is_none());
    }
}
