//! One-shot OpenAPI generator for a PostgREST-served schema.
//!
//! Reads the `db-uri` out of a PostgREST-style config file, introspects the
//! database's `public` schema, builds the OpenAPI 3.0 document, and writes
//! `swagger.json` and `swagger.yml` to the working directory. Any failure aborts
//! the run with a non-zero exit status before partial output is written.

use anyhow::Context as _;
use clap::Parser;
use pgswag_catalog::reader::CatalogReader;
use pgswag_openapi_doc::builder::build_document;
use pgswag_openapi_doc::settings::DocumentSettings;
use std::path::PathBuf;

mod config;

#[derive(Debug, Parser)]
#[command(name = "pgswag-gen", version, about = "Generate swagger.json / swagger.yml from a Postgres public schema")]
struct Cli {
    /// PostgREST-style config file holding the db-uri entry.
    #[arg(long, default_value = "postgrest.conf")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let db_uri = config::read_db_uri(&cli.config)?;

    let reader = CatalogReader::connect(&db_uri)
        .await
        .context("connect to database")?;
    let catalog = reader.read_catalog().await.context("read schema catalog")?;
    tracing::info!(tables = catalog.len(), "introspected public schema");

    let doc = build_document(&catalog, &DocumentSettings::default());

    let json = serde_json::to_string_pretty(&doc).context("serialize document as JSON")?;
    std::fs::write("swagger.json", json).context("write swagger.json")?;

    let yaml = serde_yaml::to_string(&doc).context("serialize document as YAML")?;
    std::fs::write("swagger.yml", yaml).context("write swagger.yml")?;

    tracing::info!("wrote swagger.json and swagger.yml");
    Ok(())
}
