// src/bin/upload_static.rs
//! Upload an already exported site to the configured bucket.
//!
//! Usage: `upload_static [DIR]` (defaults to `EXPORT_DIR`). Exits non-zero
//! when any file failed to upload.

use anyhow::{Result, bail};
use kawaraban::application::commands::publishing::StaticUploadService;
use kawaraban::bootstrap::{init_tracing, object_store};
use kawaraban::config::AppConfig;
use std::{env, path::PathBuf};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!(error = %err, "static upload failed");
        eprintln!("static upload failed: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let dir = env::args_os()
        .nth(1)
        .map_or_else(|| config.export_dir().to_path_buf(), PathBuf::from);

    let store = object_store(&config).await?;
    let upload = StaticUploadService::new(store, config.service_settings().upload);
    let report = upload.upload_dir(&dir).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    if !report.is_success() {
        bail!(
            "{} of {} files failed to upload",
            report.failed.len(),
            report.uploaded + report.failed.len()
        );
    }
    Ok(())
}
