//! Application configuration for the Aderyn site.
//!
//! User config lives at `~/.aderyn/aderyn.toml`.
//! Environment variables supply secrets and override file values, which
//! override defaults. The file only ever stores env var *names*.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AderynError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "aderyn.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".aderyn";

/// Env var that overrides `[cms].dataset`.
pub const DATASET_ENV: &str = "SANITY_DATASET";

// ---------------------------------------------------------------------------
// Config structs (matching aderyn.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Content lake connection settings.
    #[serde(default)]
    pub cms: CmsSettings,

    /// Web server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

/// `[cms]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmsSettings {
    /// Name of the env var holding the project id.
    #[serde(default = "default_project_id_env")]
    pub project_id_env: String,

    /// Dataset to query.
    #[serde(default = "default_dataset")]
    pub dataset: String,

    /// Dated API version, e.g. `2024-01-01`.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Read through the API CDN instead of the live API.
    #[serde(default = "default_true")]
    pub use_cdn: bool,

    /// Name of the env var holding the write token (never store the token itself).
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// Explicit API origin, bypassing the project-derived host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,

    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CmsSettings {
    fn default() -> Self {
        Self {
            project_id_env: default_project_id_env(),
            dataset: default_dataset(),
            api_version: default_api_version(),
            use_cdn: true,
            token_env: default_token_env(),
            api_host: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_project_id_env() -> String {
    "SANITY_PROJECT_ID".into()
}
fn default_dataset() -> String {
    "production".into()
}
fn default_api_version() -> String {
    "2024-01-01".into()
}
fn default_token_env() -> String {
    "SANITY_API_TOKEN".into()
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_true() -> bool {
    true
}

/// `[server]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Directory served under `/public`.
    #[serde(default = "default_public_dir")]
    pub public_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            public_dir: default_public_dir(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:3000".into()
}
fn default_public_dir() -> String {
    "public".into()
}

// ---------------------------------------------------------------------------
// CMS config (runtime, merged from config file + environment)
// ---------------------------------------------------------------------------

/// Runtime CMS configuration: file settings with env-supplied values filled in.
#[derive(Debug, Clone)]
pub struct CmsConfig {
    /// Project id; `None` means every lookup serves fallback content.
    pub project_id: Option<String>,
    pub dataset: String,
    pub api_version: String,
    pub use_cdn: bool,
    /// Write token, only needed for mutations.
    pub token: Option<String>,
    pub api_host: Option<Url>,
    pub timeout_secs: u64,
}

impl CmsConfig {
    /// Resolve against the process environment.
    pub fn from_env(settings: &CmsSettings) -> Result<Self> {
        Self::resolve(settings, |name| std::env::var(name).ok())
    }

    /// Resolve using `lookup` for env var values. Empty values count as unset.
    pub fn resolve(settings: &CmsSettings, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_host = settings
            .api_host
            .as_deref()
            .map(|host| {
                Url::parse(host)
                    .map_err(|e| AderynError::config(format!("invalid cms.api_host '{host}': {e}")))
            })
            .transpose()?;

        Ok(Self {
            project_id: get(&settings.project_id_env),
            dataset: get(DATASET_ENV).unwrap_or_else(|| settings.dataset.clone()),
            api_version: settings.api_version.clone(),
            use_cdn: settings.use_cdn,
            token: get(&settings.token_env),
            api_host,
            timeout_secs: settings.timeout_secs,
        })
    }
}

/// Credentials required by write operations.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub project_id: String,
    pub token: String,
}

/// Check that both the project id and the write token env vars are set and non-empty.
///
/// Runs before any client is built, so a failure here guarantees no request went out.
pub fn require_credentials(
    settings: &CmsSettings,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Credentials> {
    let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    let Some(project_id) = get(&settings.project_id_env) else {
        return Err(AderynError::config(format!(
            "project id not found. Set {} in your environment or .env.local file",
            settings.project_id_env
        )));
    };

    let Some(token) = get(&settings.token_env) else {
        return Err(AderynError::config(format!(
            "API token not found. Set {} in your environment or .env.local file.\n\
             Tokens are issued at https://sanity.io/manage",
            settings.token_env
        )));
    };

    Ok(Credentials { project_id, token })
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.aderyn/`).
pub fn config_dir() -> Result<PathBuf> {
    let home =
        dirs::home_dir().ok_or_else(|| AderynError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.aderyn/aderyn.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| AderynError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| AderynError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| AderynError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| AderynError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| AderynError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
