//! Caption data model and formatting for yt-dlp's JSON subtitle output.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ExtractError;

/// A single caption entry from the subtitle file.
///
/// Only `text` is interpreted; every other field the tool emits (timing,
/// positioning, ...) is carried through unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionEntry {
    pub text: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Parsed subtitles for one video
#[derive(Debug, Clone)]
pub struct Subtitles {
    /// Every entry's text joined by newlines, in file order
    pub formatted: String,
    pub entries: Vec<CaptionEntry>,
}

impl Subtitles {
    pub fn from_entries(entries: Vec<CaptionEntry>) -> Self {
        let formatted = entries
            .iter()
            .map(|entry| entry.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        Subtitles { formatted, entries }
    }
}

/// Reads and parses a subtitle artifact from disk.
pub fn parse_subtitle_file(path: &Path) -> Result<Subtitles, ExtractError> {
    let content = std::fs::read_to_string(path)?;
    let entries: Vec<CaptionEntry> = serde_json::from_str(&content)?;
    Ok(Subtitles::from_entries(entries))
}
