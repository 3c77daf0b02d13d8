use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::TempDir;
use tokio::process::Command;

use crate::application::ports::{SubtitleFetchError, SubtitleFetcher};
use crate::domain::SubtitleRequest;

pub const DEFAULT_BINARY: &str = "yt-dlp";

/// yt-dlp writes subtitles into its working directory, so the output
/// template is relative and the command runs inside the workspace.
const OUTPUT_TEMPLATE: &str = "%(id)s.%(ext)s";
const COOKIES_FILE: &str = "cookies.txt";
const SUBTITLE_EXTENSION: &str = "srt";
const DIAGNOSTIC_TAIL_CHARS: usize = 300;

/// Adapter that shells out to yt-dlp inside a per-request temporary
/// directory. The directory is removed on every exit path, including
/// faults, when the `TempDir` handle drops.
pub struct YtDlpFetcher {
    binary: String,
}

impl YtDlpFetcher {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    fn build_args(request: &SubtitleRequest, cookies_path: Option<&Path>) -> Vec<String> {
        let mut args: Vec<String> = vec![
            "--skip-download".to_string(),
            "--sub-format".to_string(),
            SUBTITLE_EXTENSION.to_string(),
            "--convert-subs".to_string(),
            SUBTITLE_EXTENSION.to_string(),
            "--sub-langs".to_string(),
            request.languages.clone(),
            "-o".to_string(),
            OUTPUT_TEMPLATE.to_string(),
        ];

        if request.auto_subtitles {
            args.push("--write-auto-subs".to_string());
        } else {
            args.push("--write-subs".to_string());
        }

        if let Some(path) = cookies_path {
            args.push("--cookies".to_string());
            args.push(path.to_string_lossy().into_owned());
        }

        args.push(request.video_url.clone());
        args
    }
}

#[async_trait]
impl SubtitleFetcher for YtDlpFetcher {
    async fn fetch(&self, request: &SubtitleRequest) -> Result<String, SubtitleFetchError> {
        let workspace = TempDir::new()
            .map_err(|e| SubtitleFetchError::Workspace(format!("create workspace: {}", e)))?;

        let cookies_path = match &request.cookies {
            Some(text) => {
                let path = workspace.path().join(COOKIES_FILE);
                tokio::fs::write(&path, text)
                    .await
                    .map_err(|e| SubtitleFetchError::Workspace(format!("write cookies: {}", e)))?;
                Some(path)
            }
            None => None,
        };

        let args = Self::build_args(request, cookies_path.as_deref());
        tracing::debug!(binary = %self.binary, ?args, "Invoking subtitle tool");

        // No timeout: a hung tool hangs the request.
        let output = Command::new(&self.binary)
            .args(&args)
            .current_dir(workspace.path())
            .output()
            .await
            .map_err(|e| SubtitleFetchError::Spawn(format!("{}: {}", self.binary, e)))?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        tracing::debug!(
            exit_code = ?output.status.code(),
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "Subtitle tool finished"
        );

        let subtitle_file = first_subtitle_file(workspace.path()).await?;

        let path = match (output.status.success(), subtitle_file) {
            (true, Some(path)) => path,
            _ => {
                return Err(SubtitleFetchError::NotFound {
                    diagnostic: tail(&stderr, DIAGNOSTIC_TAIL_CHARS).to_string(),
                });
            }
        };

        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| SubtitleFetchError::Workspace(format!("read subtitle file: {}", e)))
    }
}

/// First `.srt` directly inside the workspace, in whatever order the
/// filesystem enumerates entries. Callers must not depend on which
/// file wins when several are produced.
async fn first_subtitle_file(dir: &Path) -> Result<Option<PathBuf>, SubtitleFetchError> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| SubtitleFetchError::Workspace(format!("scan workspace: {}", e)))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| SubtitleFetchError::Workspace(format!("scan workspace: {}", e)))?
    {
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some(SUBTITLE_EXTENSION) {
            return Ok(Some(path));
        }
    }

    Ok(None)
}

/// Last `max_chars` characters of `text`, split on a char boundary.
fn tail(text: &str, max_chars: usize) -> &str {
    match text.char_indices().rev().nth(max_chars.saturating_sub(1)) {
        Some((idx, _)) => &text[idx..],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::tail;

    #[test]
    fn tail_returns_short_input_unchanged() {
        assert_eq!(tail("error", 300), "error");
    }

    #[test]
    fn tail_truncates_to_last_chars() {
        let long = "a".repeat(400);
        assert_eq!(tail(&long, 300).len(), 300);
    }

    #[test]
    fn tail_respects_multibyte_boundaries() {
        let thai = "ข".repeat(400);
        let t = tail(&thai, 300);
        assert_eq!(t.chars().count(), 300);
    }
}
