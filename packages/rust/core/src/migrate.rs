//! Seed migration: validate every seed document, then write them in order.
//!
//! Settings → pages → services → navigation. The first failing request
//! aborts the run; documents already written stay written.

use std::time::{Duration, Instant};

use serde_json::Value;
use tracing::{error, info, instrument};

use aderyn_cms::{CmsClient, MutationKind};
use aderyn_shared::{Document, Result, to_document_value};

use crate::seed::SeedContent;

/// One document ready to send.
#[derive(Debug, Clone)]
pub struct SeedDocument {
    pub kind: MutationKind,
    /// Human-readable name for progress output.
    pub label: String,
    pub value: Value,
}

impl SeedDocument {
    fn new<D: Document>(kind: MutationKind, label: impl Into<String>, doc: &D) -> Result<Self> {
        Ok(Self {
            kind,
            label: label.into(),
            value: to_document_value(doc)?,
        })
    }

    pub fn doc_type(&self) -> &str {
        self.value.get("_type").and_then(Value::as_str).unwrap_or("document")
    }
}

/// Outcome of a completed migration.
#[derive(Debug, Clone)]
pub struct MigrationSummary {
    pub written: usize,
    /// Ids reported by the lake, in write order.
    pub document_ids: Vec<String>,
    pub elapsed: Duration,
}

/// Progress callback for the migration run.
pub trait MigrationReporter: Send + Sync {
    /// Called when the run moves on to a new document type.
    fn phase(&self, name: &str);
    /// Called after each document is committed.
    fn document_written(&self, label: &str, current: usize, total: usize);
    /// Called when every document has been written.
    fn done(&self, summary: &MigrationSummary);
}

/// No-op reporter for headless/test usage.
pub struct SilentReporter;

impl MigrationReporter for SilentReporter {
    fn phase(&self, _name: &str) {}
    fn document_written(&self, _label: &str, _current: usize, _total: usize) {}
    fn done(&self, _summary: &MigrationSummary) {}
}

/// Turn seed content into validated documents in write order.
///
/// Fails before anything is sent if any document breaks the schema.
pub fn prepare(seed: &SeedContent) -> Result<Vec<SeedDocument>> {
    let mut docs = vec![SeedDocument::new(
        MutationKind::CreateOrReplace,
        "Site settings",
        &seed.site_settings,
    )?];
    for page in &seed.pages {
        docs.push(SeedDocument::new(MutationKind::Create, &page.title, page)?);
    }
    for service in &seed.services {
        docs.push(SeedDocument::new(MutationKind::Create, &service.title, service)?);
    }
    docs.push(SeedDocument::new(
        MutationKind::CreateOrReplace,
        "Navigation",
        &seed.navigation,
    )?);

    for doc in &docs {
        aderyn_schema::ensure_valid(&doc.value)?;
    }

    Ok(docs)
}

fn phase_name(doc_type: &str) -> &'static str {
    match doc_type {
        "siteSettings" => "Creating site settings",
        "page" => "Creating pages",
        "service" => "Creating services",
        "navigation" => "Creating navigation",
        _ => "Creating documents",
    }
}

/// Write `docs` in order, stopping at the first failure.
#[instrument(skip_all, fields(project = client.project_id(), dataset = client.dataset(), count = docs.len()))]
pub async fn migrate(
    client: &CmsClient,
    docs: &[SeedDocument],
    progress: &dyn MigrationReporter,
) -> Result<MigrationSummary> {
    let start = Instant::now();
    let total = docs.len();
    let mut document_ids = Vec::with_capacity(total);
    let mut current_type: Option<&str> = None;

    info!("starting content migration");

    for (i, doc) in docs.iter().enumerate() {
        let doc_type = doc.doc_type();
        if current_type != Some(doc_type) {
            progress.phase(phase_name(doc_type));
            current_type = Some(doc_type);
        }

        let result = client.mutate(doc.kind, &doc.value).await.inspect_err(|e| {
            error!(document = %doc.label, written = i, error = %e, "migration failed");
        })?;

        document_ids.extend(result.document_ids);
        progress.document_written(&doc.label, i + 1, total);
    }

    let summary = MigrationSummary {
        written: total,
        document_ids,
        elapsed: start.elapsed(),
    };
    info!(written = summary.written, elapsed_ms = summary.elapsed.as_millis() as u64, "migration complete");
    progress.done(&summary);

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::seed;
    use aderyn_shared::{AderynError, CmsConfig};
    use url::Url;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MUTATE_PATH: &str = "/v2024-01-01/data/mutate/production";

    fn client_for(server: &MockServer) -> CmsClient {
        let config = CmsConfig {
            project_id: Some("test-project".into()),
            dataset: "production".into(),
            api_version: "2024-01-01".into(),
            use_cdn: false,
            token: Some("sk-test".into()),
            api_host: Some(Url::parse(&server.uri()).unwrap()),
            timeout_secs: 5,
        };
        CmsClient::new(&config).unwrap()
    }

    fn committed() -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "transactionId": "tx-1",
            "results": [{"id": "doc-1", "operation": "create"}]
        }))
    }

    #[derive(Default)]
    struct Recorder {
        phases: Mutex<Vec<String>>,
        written: Mutex<Vec<String>>,
    }

    impl MigrationReporter for Recorder {
        fn phase(&self, name: &str) {
            self.phases.lock().unwrap().push(name.to_string());
        }
        fn document_written(&self, label: &str, _current: usize, _total: usize) {
            self.written.lock().unwrap().push(label.to_string());
        }
        fn done(&self, _summary: &MigrationSummary) {}
    }

    #[test]
    fn seed_documents_pass_validation() {
        let docs = prepare(&seed::content()).expect("seed is valid");
        assert_eq!(docs.len(), 1 + 4 + 6 + 1);
        assert_eq!(docs[0].kind, MutationKind::CreateOrReplace);
        assert_eq!(docs[0].value["_id"], "siteSettings");
        assert_eq!(docs[1].kind, MutationKind::Create);
        assert_eq!(docs[11].doc_type(), "navigation");
        assert_eq!(docs[11].kind, MutationKind::CreateOrReplace);
    }

    #[test]
    fn invalid_seed_is_rejected_before_sending() {
        let mut seed = seed::content();
        seed.services[0].title = String::new();
        let err = prepare(&seed).unwrap_err();
        assert!(matches!(err, AderynError::Validation { .. }));
        assert!(err.to_string().contains("title: required"));
    }

    #[tokio::test]
    async fn writes_in_order() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MUTATE_PATH))
            .respond_with(committed())
            .expect(12)
            .mount(&server)
            .await;

        let docs = prepare(&seed::content()).unwrap();
        let recorder = Recorder::default();
        let summary = migrate(&client_for(&server), &docs, &recorder).await.unwrap();

        assert_eq!(summary.written, 12);
        assert_eq!(summary.document_ids.len(), 12);
        assert_eq!(
            *recorder.phases.lock().unwrap(),
            ["Creating site settings", "Creating pages", "Creating services", "Creating navigation"]
        );
        let written = recorder.written.lock().unwrap();
        assert_eq!(written.first().map(String::as_str), Some("Site settings"));
        assert_eq!(written.last().map(String::as_str), Some("Navigation"));
    }

    #[tokio::test]
    async fn stops_at_first_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MUTATE_PATH))
            .and(body_partial_json(serde_json::json!({
                "mutations": [{"create": {"_type": "page", "slug": {"current": "accreditations"}}}]
            })))
            .respond_with(ResponseTemplate::new(409).set_body_string("conflict"))
            .with_priority(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path(MUTATE_PATH))
            .respond_with(committed())
            .mount(&server)
            .await;

        let docs = prepare(&seed::content()).unwrap();
        let recorder = Recorder::default();
        let err = migrate(&client_for(&server), &docs, &recorder).await.unwrap_err();

        assert!(matches!(err, AderynError::Cms { status: 409, .. }));
        // Settings, About Us, Party Wall Matters went through; nothing after the failure.
        assert_eq!(recorder.written.lock().unwrap().len(), 3);
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 4);
    }
}
