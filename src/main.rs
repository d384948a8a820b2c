mod config;
mod data;
mod geo;
mod lang;
mod map;

use anyhow::{Context, Result};
use config::Config;
use map::LanguageMap;
use std::fs;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::default();

    match run(&config) {
        Ok(()) => {
            println!("地圖已保存為 '{}'", config.output_path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("地圖創建失敗：{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Fetch boundaries, classify every region and write the page.
/// Nothing is written unless every step before the write succeeds.
fn run(config: &Config) -> Result<()> {
    let shapes = data::fetch_boundaries(&config.source).context("無法下載台灣地理數據")?;

    let language_map = LanguageMap::assemble(shapes, &config.tiles, &config.fallback_view);
    let html = language_map.render().context("failed to serialize map data")?;

    fs::write(&config.output_path, html)
        .with_context(|| format!("failed to write {}", config.output_path.display()))?;
    info!(path = %config.output_path.display(), "map written");

    Ok(())
}
