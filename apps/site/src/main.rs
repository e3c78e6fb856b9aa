//! Aderyn Website
//!
//! Marketing site for Aderyn Building Consultancy, served from CMS content
//! with literal fallbacks.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use aderyn_shared::{CmsConfig, load_config, load_config_from};

/// Serve the Aderyn Building Consultancy website.
#[derive(Parser)]
#[command(name = "aderyn-site", version, long_about = None)]
struct Args {
    /// Config file (defaults to ~/.aderyn/aderyn.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listen address, overriding `[server].bind`.
    #[arg(long)]
    bind: Option<String>,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text")]
    log_format: LogFormat,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Debug, clap::ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

fn init_tracing(args: &Args) {
    let filter = match args.verbose {
        0 => "aderyn=info,tower_http=info",
        1 => "aderyn=debug,tower_http=debug",
        _ => "aderyn=trace,tower_http=trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match args.log_format {
        LogFormat::Text => fmt().with_env_filter(env_filter).with_target(false).init(),
        LogFormat::Json => fmt().json().with_env_filter(env_filter).init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    // .env.local wins over .env; neither overrides the real environment.
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::dotenv();

    init_tracing(&args);

    let mut config = match &args.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };
    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }
    let cms = CmsConfig::from_env(&config.cms)?;

    info!("Starting Aderyn website server");

    aderyn_site::run(&config.server, &cms).await
}
