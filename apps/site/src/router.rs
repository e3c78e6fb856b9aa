//! Router Configuration
//!
//! Route configuration for the website.

use std::path::Path;

use axum::{Router, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{handlers, state::AppState};

/// Create the main router with all routes. Static assets are served from `public_dir`.
pub fn create_router(state: AppState, public_dir: impl AsRef<Path>) -> Router {
    let router = Router::new()
        .route("/", get(handlers::home::home))
        .route("/services", get(handlers::services::services_index))
        .route("/services/{slug}", get(handlers::services::service))
        .route("/contact-us", get(handlers::contact::contact))
        .route("/{slug}", get(handlers::pages::page));

    #[cfg(debug_assertions)]
    let router = router.route("/debug", get(handlers::debug::debug));

    router
        .nest_service("/public", ServeDir::new(public_dir.as_ref()))
        .fallback(handlers::not_found::fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aderyn_core::SiteContent;
    use aderyn_core::fallback;
    use aderyn_portable_text::Renderer;
    use aderyn_shared::CmsConfig;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use scraper::{Html, Selector};
    use tower::ServiceExt;
    use url::Url;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::state::Connection;

    const QUERY_PATH: &str = "/v2024-01-01/data/query/production";

    fn public_dir() -> std::path::PathBuf {
        std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public")
    }

    fn offline_config() -> CmsConfig {
        CmsConfig {
            project_id: None,
            dataset: "production".into(),
            api_version: "2024-01-01".into(),
            use_cdn: false,
            token: None,
            api_host: None,
            timeout_secs: 5,
        }
    }

    fn offline_router() -> Router {
        let state = AppState::from_parts(
            SiteContent::offline(),
            Renderer::default(),
            Connection::from(&offline_config()),
        );
        create_router(state, public_dir())
    }

    fn router_for(server: &MockServer) -> Router {
        let config = CmsConfig {
            project_id: Some("test-project".into()),
            api_host: Some(Url::parse(&server.uri()).unwrap()),
            ..offline_config()
        };
        create_router(AppState::new(&config), public_dir())
    }

    fn fixture(name: &str) -> serde_json::Value {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../fixtures/json")
            .join(name);
        let body = std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("missing fixture: {}", path.display()));
        serde_json::from_str(&body).unwrap()
    }

    /// Keep only the fields a query's projection returns.
    fn projected(query: &aderyn_cms::Query, doc: serde_json::Value) -> serde_json::Value {
        let serde_json::Value::Object(fields) = doc else {
            return doc;
        };
        let projection: Vec<&str> = query
            .groq
            .lines()
            .map(|line| line.trim().trim_end_matches(','))
            .collect();
        fields
            .into_iter()
            .filter(|(name, _)| projection.contains(&name.as_str()))
            .collect()
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, Html) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, Html::parse_document(&String::from_utf8_lossy(&bytes)))
    }

    fn texts(doc: &Html, selector: &str) -> Vec<String> {
        let selector = Selector::parse(selector).unwrap();
        doc.select(&selector)
            .map(|el| el.text().collect::<String>().split_whitespace().collect::<Vec<_>>().join(" "))
            .collect()
    }

    fn first(doc: &Html, selector: &str) -> String {
        texts(doc, selector).into_iter().next().unwrap_or_default()
    }

    #[tokio::test]
    async fn offline_home_shows_hero_and_offices() {
        let (status, doc) = get(offline_router(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(first(&doc, "title"), fallback::SITE_META_TITLE);
        assert_eq!(first(&doc, "main h1"), fallback::COMPANY_NAME);
        assert!(texts(&doc, "main p").contains(&fallback::HERO_LEAD.to_string()));
        // No CMS services, so no services section.
        assert!(texts(&doc, "main h2").iter().all(|h| h != "Our Services"));
        let offices = texts(&doc, "main h3");
        assert_eq!(offices, ["Cardiff Office", "Swansea Office"]);
    }

    #[tokio::test]
    async fn offline_pages_equal_fallback() {
        for page in &fallback::PAGES {
            let (status, doc) = get(offline_router(), &format!("/{}", page.slug)).await;
            assert_eq!(status, StatusCode::OK, "{}", page.slug);
            assert_eq!(first(&doc, "main h1"), page.title);
            assert_eq!(first(&doc, "main .prose p"), page.body);
            assert_eq!(first(&doc, "title"), format!("{} - {}", page.title, fallback::COMPANY_NAME));
        }
    }

    #[tokio::test]
    async fn offline_services_equal_fallback() {
        for service in &fallback::SERVICES {
            let (status, doc) = get(offline_router(), &format!("/services/{}", service.slug)).await;
            assert_eq!(status, StatusCode::OK, "{}", service.slug);
            assert_eq!(first(&doc, "main h1"), service.title);
            assert_eq!(first(&doc, "main .prose p"), service.description);
            assert!(texts(&doc, "main h2").contains(&format!("Need Help with {}?", service.title)));
            assert!(texts(&doc, ".related").is_empty());
        }
    }

    #[tokio::test]
    async fn unknown_slugs_are_not_found() {
        let (status, doc) = get(offline_router(), "/no-such-page").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(first(&doc, "title"), "Page Not Found");

        let (status, doc) = get(offline_router(), "/services/roofing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(first(&doc, "title"), "Service Not Found");

        let (status, _) = get(offline_router(), "/a/b/c").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn offline_services_listing_shows_notice() {
        let (status, doc) = get(offline_router(), "/services").await;
        assert_eq!(status, StatusCode::OK);
        assert!(texts(&doc, ".category").is_empty());
        assert!(first(&doc, "main .text-center.py-12 p").starts_with("Services information is being updated"));
    }

    #[tokio::test]
    async fn contact_page_lists_offices() {
        let (status, doc) = get(offline_router(), "/contact-us").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(texts(&doc, ".office h3"), ["Cardiff Office", "Swansea Office"]);
        let tel = Selector::parse(".office a[href^='tel:']").unwrap();
        let hrefs: Vec<_> = doc.select(&tel).filter_map(|a| a.value().attr("href")).collect();
        assert_eq!(hrefs, ["tel:(029)20568136", "tel:(01792)805100"]);
        assert!(texts(&doc, "main h2").contains(&"National Coverage".to_string()));
        assert_eq!(texts(&doc, "form input").len(), 4);
    }

    #[tokio::test]
    async fn header_uses_fallback_navigation() {
        let (_, doc) = get(offline_router(), "/about-us").await;
        let top: Vec<_> = texts(&doc, "nav[aria-label='Main'] > a, nav[aria-label='Main'] > div > button");
        assert_eq!(top.first().map(String::as_str), Some("Home"));
        assert!(top.contains(&"Building Surveys".to_string()));
        assert!(texts(&doc, "header span.text-gray-600").contains(&"Cardiff Office: (029) 2056 8136".to_string()));
        assert!(first(&doc, "footer").contains(fallback::COMPANY_NAME));
    }

    #[tokio::test]
    async fn serves_static_assets() {
        let response = offline_router()
            .oneshot(Request::builder().uri("/public/css/site.css").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[cfg(debug_assertions)]
    #[tokio::test]
    async fn debug_page_shows_connection() {
        let (status, doc) = get(offline_router(), "/debug").await;
        assert_eq!(status, StatusCode::OK);
        let details = texts(&doc, "dl div");
        assert!(details[0].contains("not configured"));
        assert!(details.contains(&"Dataset: production".to_string()));
        assert!(details.contains(&"Write token: not set".to_string()));
    }

    #[tokio::test]
    async fn cms_services_are_grouped_by_category() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(QUERY_PATH))
            .and(query_param("query", aderyn_cms::queries::services().groq))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixture("services.json")))
            .mount(&server)
            .await;

        let (status, doc) = get(router_for(&server), "/services").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            texts(&doc, ".category h2"),
            ["Building Surveys", "Landlord and Tenant", "Other Services"]
        );
        assert_eq!(
            texts(&doc, ".service-card span"),
            ["Building Surveys", "Landlord Tenant"]
        );
    }

    #[tokio::test]
    async fn category_filter_narrows_listing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(QUERY_PATH))
            .and(query_param("$category", "\"landlord-tenant\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "result": [projected(
                    &aderyn_cms::queries::services_by_category("landlord-tenant"),
                    serde_json::json!({
                        "_id": "svc-dilaps",
                        "_type": "service",
                        "title": "Dilapidations",
                        "slug": {"current": "dilapidations"},
                        "category": "landlord-tenant",
                        "seo": {"metaTitle": "Dilapidations"}
                    })
                )]
            })))
            .mount(&server)
            .await;

        let (_, doc) = get(router_for(&server), "/services?category=landlord-tenant").await;
        assert_eq!(texts(&doc, ".category h2"), ["Landlord and Tenant"]);
        assert_eq!(texts(&doc, ".service-card h3"), ["Dilapidations"]);
        assert!(first(&doc, "main p").starts_with("Landlord and Tenant"));
    }

    #[tokio::test]
    async fn cms_page_renders_portable_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(QUERY_PATH))
            .and(query_param("$slug", "\"about-us\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixture("page-about-us.json")))
            .mount(&server)
            .await;

        let (status, doc) = get(router_for(&server), "/about-us").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(first(&doc, "title"), "About Aderyn");
        assert_eq!(first(&doc, "main h2"), "Who we are");
        // Same wrapper as fallback bodies.
        assert_eq!(first(&doc, "main .prose h2"), "Who we are");
        let link = Selector::parse("main a[href='https://www.rics.org']").unwrap();
        assert_eq!(doc.select(&link).count(), 1);
    }

    #[tokio::test]
    async fn cms_failure_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(QUERY_PATH))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let (status, doc) = get(router_for(&server), "/party-wall-matters").await;
        assert_eq!(status, StatusCode::OK);
        let page = fallback::page("party-wall-matters").unwrap();
        assert_eq!(first(&doc, "main .prose p"), page.body);
        assert!(first(&doc, "footer").contains(fallback::COMPANY_NAME));
    }
}
