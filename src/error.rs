use thiserror::Error;

/// Classified failures of one subtitle-extraction request
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("URL parameter is required")]
    MissingUrl,

    #[error("Failed to extract subtitles")]
    ExtractionFailed { stderr: String },

    #[error("Processing timed out")]
    Timeout,

    #[error("No subtitles found")]
    NoSubtitles,

    #[error("Malformed subtitle file: {0}")]
    MalformedArtifact(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
