// src/bin/publish_static.rs
//! Export the whole site and upload it in one go.

use anyhow::{Context, Result, bail};
use kawaraban::bootstrap::{build_services, init_tracing, object_store};
use kawaraban::config::AppConfig;
use serde_json::json;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!(error = %err, "static publish failed");
        eprintln!("static publish failed: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let store = object_store(&config).await?;
    let services = build_services(&config, Some(store))?;
    let publisher = services
        .static_publish()
        .context("publishing requires an object store")?;

    let (export, upload) = publisher.publish_site().await?;
    println!(
        "{}",
        serde_json::to_string_pretty(&json!({ "export": export, "upload": upload }))?
    );

    if !upload.is_success() {
        bail!("{} files failed to upload", upload.failed.len());
    }
    Ok(())
}
