// src/bin/export_static.rs
//! Render the whole site into the export directory.
//!
//! Usage: `export_static [OUT_DIR]` (defaults to `EXPORT_DIR`).

use anyhow::Result;
use kawaraban::bootstrap::{build_services, init_tracing};
use kawaraban::config::AppConfig;
use std::{env, path::PathBuf};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!(error = %err, "static export failed");
        eprintln!("static export failed: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let out_dir = env::args_os()
        .nth(1)
        .map_or_else(|| config.export_dir().to_path_buf(), PathBuf::from);

    let services = build_services(&config, None)?;
    let report = services.static_export.export_site(&out_dir).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
