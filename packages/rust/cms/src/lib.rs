//! Client for the hosted content lake's HTTP API.
//!
//! Reads go through `GET /v<version>/data/query/<dataset>` with a GROQ
//! query; writes go through `POST /v<version>/data/mutate/<dataset>` and
//! require a bearer token. There are no retries: callers decide what a
//! failure means.

pub mod queries;

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, info, instrument};
use url::Url;

use aderyn_shared::{AderynError, CmsConfig, Result};

pub use queries::Query;

/// User-Agent string for content lake requests.
const USER_AGENT: &str = concat!("aderyn-site/", env!("CARGO_PKG_VERSION"));

/// Cap on error bodies copied into error messages.
const MAX_ERROR_BODY: usize = 512;

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

/// How a mutation treats an existing document with the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    /// Fails if the id already exists; a missing id is generated by the lake.
    Create,
    /// Overwrites any existing document with the same id.
    CreateOrReplace,
}

impl MutationKind {
    pub fn key(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::CreateOrReplace => "createOrReplace",
        }
    }
}

/// Outcome of a committed mutation.
#[derive(Debug, Clone)]
pub struct MutationResult {
    pub transaction_id: String,
    /// Ids of the documents touched, in request order.
    pub document_ids: Vec<String>,
}

#[derive(Deserialize)]
struct QueryResponse<T> {
    result: Option<T>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MutateResponse {
    transaction_id: String,
    #[serde(default)]
    results: Vec<MutateResult>,
}

#[derive(Deserialize)]
struct MutateResult {
    id: String,
}

// ---------------------------------------------------------------------------
// CmsClient
// ---------------------------------------------------------------------------

/// Handle on one project's dataset.
#[derive(Debug, Clone)]
pub struct CmsClient {
    http: Client,
    base: Url,
    project_id: String,
    dataset: String,
    api_version: String,
    token: Option<String>,
}

impl CmsClient {
    /// Build a client. Fails when no project id is configured.
    pub fn new(config: &CmsConfig) -> Result<Self> {
        let project_id = config
            .project_id
            .clone()
            .ok_or_else(|| AderynError::config("no CMS project id configured"))?;

        let base = match &config.api_host {
            Some(host) => host.clone(),
            None => {
                let host = if config.use_cdn { "apicdn" } else { "api" };
                Url::parse(&format!("https://{project_id}.{host}.sanity.io"))
                    .map_err(|e| AderynError::config(format!("invalid project id '{project_id}': {e}")))?
            }
        };

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AderynError::Network(format!("failed to build HTTP client: {e}")))?;

        debug!(%base, dataset = %config.dataset, "CMS client ready");

        Ok(Self {
            http,
            base,
            project_id,
            dataset: config.dataset.clone(),
            api_version: config.api_version.clone(),
            token: config.token.clone(),
        })
    }

    /// Attach a write token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    fn endpoint(&self, action: &str) -> Result<Url> {
        let path = format!("v{}/data/{action}/{}", self.api_version, self.dataset);
        self.base
            .join(&path)
            .map_err(|e| AderynError::config(format!("cannot build {action} URL: {e}")))
    }

    /// Run a query. A `null` result is `Ok(None)`.
    #[instrument(skip_all, fields(query = query.name))]
    pub async fn fetch<T: DeserializeOwned>(&self, query: &Query) -> Result<Option<T>> {
        let mut url = self.endpoint("query")?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("query", query.groq);
            for (name, value) in &query.params {
                pairs.append_pair(&format!("${name}"), &value.to_string());
            }
        }

        let mut request = self.http.get(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AderynError::Network(format!("{}: {e}", query.name)))?;
        let body = read_success(response).await?;

        let parsed: QueryResponse<T> = serde_json::from_str(&body).map_err(|e| {
            AderynError::parse(format!("{}: unexpected result shape: {e}", query.name))
        })?;

        debug!(found = parsed.result.is_some(), "query complete");
        Ok(parsed.result)
    }

    /// Create a document. Its `_type` must already be set.
    pub async fn create(&self, document: &Value) -> Result<MutationResult> {
        self.mutate(MutationKind::Create, document).await
    }

    /// Create or overwrite a document by `_id`.
    pub async fn create_or_replace(&self, document: &Value) -> Result<MutationResult> {
        self.mutate(MutationKind::CreateOrReplace, document).await
    }

    /// Commit a single mutation. Requires a token; without one nothing is sent.
    #[instrument(skip_all, fields(op = kind.key()))]
    pub async fn mutate(&self, kind: MutationKind, document: &Value) -> Result<MutationResult> {
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| AderynError::config("mutations require an API token"))?;

        let mut url = self.endpoint("mutate")?;
        url.query_pairs_mut().append_pair("returnIds", "true");

        let mut mutation = serde_json::Map::new();
        mutation.insert(kind.key().to_string(), document.clone());
        let body = json!({ "mutations": [Value::Object(mutation)] });

        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| AderynError::Network(format!("mutate: {e}")))?;
        let text = read_success(response).await?;

        let parsed: MutateResponse = serde_json::from_str(&text)
            .map_err(|e| AderynError::parse(format!("mutate: unexpected response: {e}")))?;

        info!(transaction = %parsed.transaction_id, "mutation committed");

        Ok(MutationResult {
            transaction_id: parsed.transaction_id,
            document_ids: parsed.results.into_iter().map(|r| r.id).collect(),
        })
    }
}

/// Read the body of a 2xx response, or turn anything else into [`AderynError::Cms`].
async fn read_success(response: reqwest::Response) -> Result<String> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AderynError::Network(format!("failed to read body: {e}")))?;

    if !status.is_success() {
        let mut message = body;
        if message.len() > MAX_ERROR_BODY {
            let mut cut = MAX_ERROR_BODY;
            while !message.is_char_boundary(cut) {
                cut -= 1;
            }
            message.truncate(cut);
        }
        return Err(AderynError::Cms {
            status: status.as_u16(),
            message,
        });
    }

    Ok(body)
}
