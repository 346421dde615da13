mod api;
mod config;
mod error;
mod extractor;
mod subtitles;

use anyhow::Result;
use log::info;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = Config::from_env();
    info!(
        "Starting subtitle API on {}:{} (yt-dlp: {})",
        config.host,
        config.port,
        config.yt_dlp_path.display()
    );

    api::run_api_server(config).await?;
    Ok(())
}
