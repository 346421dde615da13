//! Subprocess orchestration around yt-dlp.
//!
//! We shell out to the yt-dlp CLI rather than reimplementing platform
//! protocols. Each request gets its own working directory and its own
//! bounded process; nothing is shared between in-flight requests.

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, warn};
use tempfile::TempDir;
use tokio::process::Command;

use crate::config::Config;
use crate::error::ExtractError;
use crate::subtitles::{self, Subtitles};

/// Output basename inside the working directory. yt-dlp appends the
/// language and format, e.g. `subtitle.en.json`.
const OUTPUT_BASENAME: &str = "subtitle";

/// Extension of the subtitle artifact yt-dlp writes
const ARTIFACT_EXT: &str = "json";

/// Runs bounded yt-dlp invocations and parses the subtitle files they
/// leave behind.
pub struct SubtitleExtractor {
    config: Config,
}

impl SubtitleExtractor {
    pub fn new(config: Config) -> Self {
        SubtitleExtractor { config }
    }

    /// Extracts subtitles for one video URL.
    ///
    /// Invokes yt-dlp with a fixed argument set (the URL is the only
    /// caller-controlled argument), bounded by `timeout_secs`. The
    /// working directory is removed on every exit path when `workdir`
    /// drops, including timeout and parse failures.
    pub async fn extract(&self, url: &str) -> Result<Subtitles, ExtractError> {
        if url.trim().is_empty() {
            return Err(ExtractError::MissingUrl);
        }

        let workdir = self.create_workdir()?;
        let output_template = workdir.path().join(OUTPUT_BASENAME);

        let mut cmd = Command::new(&self.config.yt_dlp_path);
        cmd.args([
            "--skip-download",
            "--write-subs",
            "--write-auto-subs",
            "--sub-lang",
            self.config.sub_lang.as_str(),
            "--sub-format",
            "json",
            "--convert-subs",
            "json",
            "--output",
        ])
        .arg(&output_template)
        .arg("--no-warnings")
        .arg(url)
        .kill_on_drop(true);

        let timeout = Duration::from_secs(self.config.timeout_secs);
        let output = match tokio::time::timeout(timeout, cmd.output()).await {
            Ok(result) => result?,
            Err(_) => {
                // Dropping the output future kills the child.
                warn!("yt-dlp timed out after {}s: {}", timeout.as_secs(), url);
                return Err(ExtractError::Timeout);
            }
        };

        debug!("yt-dlp stdout: {}", String::from_utf8_lossy(&output.stdout));
        debug!("yt-dlp stderr: {}", String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(ExtractError::ExtractionFailed {
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        let artifact = find_artifact(workdir.path())?.ok_or(ExtractError::NoSubtitles)?;
        subtitles::parse_subtitle_file(&artifact)
    }

    fn create_workdir(&self) -> Result<TempDir, ExtractError> {
        let workdir = match &self.config.work_root {
            Some(root) => TempDir::new_in(root)?,
            None => TempDir::new()?,
        };
        Ok(workdir)
    }
}

/// Picks the subtitle artifact among the working directory's immediate
/// entries. Candidates are sorted by name so selection does not depend on
/// directory-listing order; the first match wins.
fn find_artifact(dir: &Path) -> Result<Option<PathBuf>, ExtractError> {
    let mut candidates: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == ARTIFACT_EXT))
        .collect();
    candidates.sort();
    Ok(candidates.into_iter().next())
}

#[cfg(test)]
pub(crate) mod testutil {
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    /// Writes an executable shell script standing in for yt-dlp. The
    /// script body sees the real argument list; `$out` holds the value
    /// passed to `--output`.
    pub(crate) fn fake_yt_dlp(dir: &Path, body: &str) -> PathBuf {
        let script = format!(
            "#!/bin/sh\n\
             out=\"\"\n\
             prev=\"\"\n\
             for arg in \"$@\"; do\n\
             \x20\x20if [ \"$prev\" = \"--output\" ]; then out=\"$arg\"; fi\n\
             \x20\x20prev=\"$arg\"\n\
             done\n\
             {body}\n"
        );
        let path = dir.join("fake-yt-dlp");
        std::fs::write(&path, script).unwrap();
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
        path
    }
}
