//! Aderyn CLI: content operations for the Aderyn Building Consultancy site.
//!
//! Seeds a dataset with initial content, prints the content schema, and
//! manages the local config file.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    // .env.local wins over .env; neither overrides the real environment.
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
