//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info};

use aderyn_cms::CmsClient;
use aderyn_core::migrate::{self, MigrationReporter, MigrationSummary, SeedDocument};
use aderyn_core::seed;
use aderyn_shared::{
    AppConfig, CmsConfig, init_config, load_config, load_config_from, require_credentials,
};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// Aderyn: content tooling for the Aderyn Building Consultancy website.
#[derive(Parser)]
#[command(
    name = "aderyn",
    version,
    about = "Seed and inspect CMS content for the Aderyn Building Consultancy website.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file to use instead of ~/.aderyn/aderyn.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Write the initial site content to the configured dataset.
    Migrate {
        /// Validate and print the documents without sending anything.
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the content schema as JSON.
    Schema {
        /// Only print this document type (page, service, siteSettings, navigation).
        #[arg(long = "type")]
        doc_type: Option<String>,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "aderyn=info",
        1 => "aderyn=debug",
        _ => "aderyn=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };

    match cli.command {
        Command::Migrate { dry_run: true } => cmd_migrate_dry_run(),
        Command::Migrate { dry_run: false } => {
            let lookup = |name: &str| std::env::var(name).ok();
            let reporter = CliProgress::new();
            let summary = migrate_with(&config, lookup, &reporter).await?;
            print_summary(&summary);
            Ok(())
        }
        Command::Schema { doc_type } => cmd_schema(doc_type.as_deref()),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(&config),
        },
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

/// Check credentials, validate the seed, then write it.
///
/// Nothing is sent unless both credentials are present and every document passes the schema.
async fn migrate_with(
    config: &AppConfig,
    lookup: impl Fn(&str) -> Option<String>,
    reporter: &dyn MigrationReporter,
) -> Result<MigrationSummary> {
    let credentials = require_credentials(&config.cms, &lookup)
        .inspect_err(|e| error!(error = %e, "refusing to migrate"))?;

    let mut cms = CmsConfig::resolve(&config.cms, &lookup)?;
    cms.project_id = Some(credentials.project_id);
    cms.token = Some(credentials.token);
    cms.use_cdn = false;

    let docs = migrate::prepare(&seed::content())?;
    let client = CmsClient::new(&cms)?;

    info!(project = client.project_id(), dataset = client.dataset(), documents = docs.len(), "migrating content");

    migrate::migrate(&client, &docs, reporter)
        .await
        .wrap_err("migration aborted; documents written before the failure were kept")
}

fn cmd_migrate_dry_run() -> Result<()> {
    let docs = migrate::prepare(&seed::content())?;
    for doc in &docs {
        print_document(doc)?;
    }
    println!();
    println!("  {} documents validated; nothing was sent.", docs.len());
    Ok(())
}

fn print_document(doc: &SeedDocument) -> Result<()> {
    println!("# {} ({}, {})", doc.label, doc.doc_type(), doc.kind.key());
    println!("{}", serde_json::to_string_pretty(&doc.value)?);
    Ok(())
}

fn print_summary(summary: &MigrationSummary) {
    println!();
    println!("  Content migration complete!");
    println!("  Written:   {}", summary.written);
    println!("  Time:      {:.1}s", summary.elapsed.as_secs_f64());
    println!();
    println!("  Next steps:");
    println!("  1. Review the documents in the content studio");
    println!("  2. Run the site and check every page");
    println!();
}

fn cmd_schema(doc_type: Option<&str>) -> Result<()> {
    let schema = aderyn_schema::export(doc_type)?;
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show(config: &AppConfig) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    println!("{toml_str}");

    let cms = CmsConfig::from_env(&config.cms)?;
    println!("# resolved");
    println!("# project id: {}", cms.project_id.as_deref().unwrap_or("(unset)"));
    println!("# dataset:    {}", cms.dataset);
    println!(
        "# token:      {}",
        if cms.token.is_some() { "set" } else { "(unset)" }
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(Duration::from_millis(80));
        Self { spinner }
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        if !self.spinner.is_finished() {
            self.spinner.abandon();
        }
    }
}

impl MigrationReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.set_message(format!("{name}..."));
    }

    fn document_written(&self, label: &str, current: usize, total: usize) {
        self.spinner.println(format!("  ✓ {label}"));
        self.spinner.set_message(format!("Written [{current}/{total}]"));
    }

    fn done(&self, _summary: &MigrationSummary) {
        self.spinner.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aderyn_core::SilentReporter;
    use aderyn_shared::AderynError;

    #[test]
    fn parses_subcommands() {
        let cli = Cli::try_parse_from(["aderyn", "migrate", "--dry-run", "-v"]).unwrap();
        assert!(matches!(cli.command, Command::Migrate { dry_run: true }));
        assert_eq!(cli.verbose, 1);

        let cli = Cli::try_parse_from(["aderyn", "schema", "--type", "service", "--log-format", "json"]).unwrap();
        assert!(matches!(cli.command, Command::Schema { doc_type: Some(ref t) } if t == "service"));
        assert!(matches!(cli.log_format, LogFormat::Json));

        assert!(Cli::try_parse_from(["aderyn", "config", "show"]).is_ok());
        assert!(Cli::try_parse_from(["aderyn", "deploy"]).is_err());
    }

    fn root_cause(err: &color_eyre::eyre::Report) -> Option<&AderynError> {
        err.chain().find_map(|e| e.downcast_ref::<AderynError>())
    }

    #[tokio::test]
    async fn migrate_refuses_without_project_id() {
        let err = migrate_with(&AppConfig::default(), |_| None, &SilentReporter)
            .await
            .unwrap_err();
        assert!(matches!(root_cause(&err), Some(AderynError::Config { .. })));
        assert!(err.to_string().contains("SANITY_PROJECT_ID"));
    }

    #[tokio::test]
    async fn migrate_refuses_without_token() {
        let lookup = |name: &str| (name == "SANITY_PROJECT_ID").then(|| "abc123".to_string());
        let err = migrate_with(&AppConfig::default(), lookup, &SilentReporter)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("SANITY_API_TOKEN"));
    }
}
