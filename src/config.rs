use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the yt-dlp executable. Defaults to `yt-dlp` on PATH.
    pub yt_dlp_path: PathBuf,

    /// Subtitle language code passed to `--sub-lang`
    pub sub_lang: String,

    /// Wall-clock bound on one yt-dlp invocation, in seconds
    pub timeout_secs: u64,

    /// Host address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Parent directory for per-request working directories.
    /// When unset, the system temp directory is used.
    pub work_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            yt_dlp_path: PathBuf::from("yt-dlp"),
            sub_lang: "en".to_string(),
            timeout_secs: 30,
            host: "0.0.0.0".to_string(),
            port: 8080,
            work_root: None,
        }
    }
}

impl Config {
    /// Builds a config from defaults plus environment overrides.
    ///
    /// Recognized variables: `YT_DLP_PATH`, `SUB_LANG`,
    /// `EXTRACT_TIMEOUT_SECS`, `BIND_HOST`, `BIND_PORT`.
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(path) = std::env::var("YT_DLP_PATH") {
            config.yt_dlp_path = PathBuf::from(path);
        }
        if let Ok(lang) = std::env::var("SUB_LANG") {
            config.sub_lang = lang;
        }
        if let Ok(secs) = std::env::var("EXTRACT_TIMEOUT_SECS") {
            if let Ok(secs) = secs.parse() {
                config.timeout_secs = secs;
            }
        }
        if let Ok(host) = std::env::var("BIND_HOST") {
            config.host = host;
        }
        if let Ok(port) = std::env::var("BIND_PORT") {
            if let Ok(port) = port.parse() {
                config.port = port;
            }
        }

        config
    }
}
