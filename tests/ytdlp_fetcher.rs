#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use subtext::application::ports::{SubtitleFetchError, SubtitleFetcher};
use subtext::domain::SubtitleRequest;
use subtext::infrastructure::ytdlp::YtDlpFetcher;

/// Drops an executable shell script standing in for yt-dlp, following
/// the stub-binary pattern used for testing downloader wrappers.
fn stub_binary(dir: &Path, script: &str) -> PathBuf {
    let path = dir.join("yt-dlp-stub");
    std::fs::write(&path, script).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

fn fetcher_for(stub: &Path) -> YtDlpFetcher {
    YtDlpFetcher::new(stub.to_string_lossy().into_owned())
}

#[tokio::test]
async fn given_tool_that_produces_srt_when_fetch_then_returns_file_content() {
    let dir = tempfile::tempdir().unwrap();
    let stub = stub_binary(
        dir.path(),
        "#!/bin/sh\nprintf 'stub caption line' > video123.srt\n",
    );

    let srt = fetcher_for(&stub)
        .fetch(&SubtitleRequest::new("https://youtu.be/video123"))
        .await
        .unwrap();

    assert_eq!(srt, "stub caption line");
}

#[tokio::test]
async fn given_failing_tool_when_fetch_then_returns_not_found_with_stderr_tail() {
    let dir = tempfile::tempdir().unwrap();
    let stub = stub_binary(
        dir.path(),
        "#!/bin/sh\necho 'ERROR: video unavailable' >&2\nexit 1\n",
    );

    let err = fetcher_for(&stub)
        .fetch(&SubtitleRequest::new("https://youtu.be/gone"))
        .await
        .unwrap_err();

    match err {
        SubtitleFetchError::NotFound { diagnostic } => {
            assert!(diagnostic.contains("ERROR: video unavailable"));
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn given_failing_tool_with_output_file_when_fetch_then_still_returns_not_found() {
    // Non-zero exit wins even when a subtitle file was produced.
    let dir = tempfile::tempdir().unwrap();
    let stub = stub_binary(
        dir.path(),
        "#!/bin/sh\nprintf 'partial' > video123.srt\nexit 1\n",
    );

    let err = fetcher_for(&stub)
        .fetch(&SubtitleRequest::new("https://youtu.be/video123"))
        .await
        .unwrap_err();

    assert!(matches!(err, SubtitleFetchError::NotFound { .. }));
}

#[tokio::test]
async fn given_clean_exit_without_output_when_fetch_then_returns_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let stub = stub_binary(dir.path(), "#!/bin/sh\nexit 0\n");

    let err = fetcher_for(&stub)
        .fetch(&SubtitleRequest::new("https://youtu.be/nosubs"))
        .await
        .unwrap_err();

    assert!(matches!(err, SubtitleFetchError::NotFound { .. }));
}

#[tokio::test]
async fn given_missing_binary_when_fetch_then_returns_spawn_error() {
    let fetcher = YtDlpFetcher::new("/nonexistent/yt-dlp");

    let err = fetcher
        .fetch(&SubtitleRequest::new("https://youtu.be/any"))
        .await
        .unwrap_err();

    assert!(matches!(err, SubtitleFetchError::Spawn(_)));
}

#[tokio::test]
async fn given_cookies_when_fetch_then_cookie_file_lands_in_workspace() {
    // The stub round-trips the cookie file back as the subtitle output,
    // proving it was written into the tool's working directory.
    let dir = tempfile::tempdir().unwrap();
    let stub = stub_binary(dir.path(), "#!/bin/sh\ncp cookies.txt out.srt\n");

    let mut request = SubtitleRequest::new("https://youtu.be/members-only");
    request.cookies = Some("SESSION=abc".to_string());

    let srt = fetcher_for(&stub).fetch(&request).await.unwrap();

    assert_eq!(srt, "SESSION=abc");
}

#[tokio::test]
async fn given_request_when_fetch_then_passes_expected_flags_in_order() {
    // The stub dumps its argv, one per line, as the subtitle output.
    let dir = tempfile::tempdir().unwrap();
    let stub = stub_binary(dir.path(), "#!/bin/sh\nprintf '%s\\n' \"$@\" > args.srt\n");

    let mut request = SubtitleRequest::new("https://youtu.be/abc123");
    request.languages = "th,en".to_string();

    let dump = fetcher_for(&stub).fetch(&request).await.unwrap();
    let args: Vec<&str> = dump.lines().collect();

    assert_eq!(args.first(), Some(&"--skip-download"));
    assert_eq!(args.last(), Some(&"https://youtu.be/abc123"));
    assert!(args.contains(&"--write-auto-subs"));
    assert!(args.windows(2).any(|w| w == ["--sub-langs", "th,en"]));
    assert!(args.windows(2).any(|w| w == ["-o", "%(id)s.%(ext)s"]));
}

#[tokio::test]
async fn given_creator_subtitles_requested_when_fetch_then_passes_write_subs_flag() {
    let dir = tempfile::tempdir().unwrap();
    let stub = stub_binary(dir.path(), "#!/bin/sh\nprintf '%s\\n' \"$@\" > args.srt\n");

    let mut request = SubtitleRequest::new("https://youtu.be/abc123");
    request.auto_subtitles = false;

    let dump = fetcher_for(&stub).fetch(&request).await.unwrap();
    let args: Vec<&str> = dump.lines().collect();

    assert!(args.contains(&"--write-subs"));
    assert!(!args.contains(&"--write-auto-subs"));
}

#[tokio::test]
async fn given_successful_fetch_when_done_then_workspace_no_longer_exists() {
    // The stub records its working directory as the subtitle content so
    // the test can check the directory is gone afterwards.
    let dir = tempfile::tempdir().unwrap();
    let stub = stub_binary(dir.path(), "#!/bin/sh\nprintf '%s' \"$PWD\" > out.srt\n");

    let workspace = fetcher_for(&stub)
        .fetch(&SubtitleRequest::new("https://youtu.be/abc123"))
        .await
        .unwrap();

    assert!(!workspace.is_empty());
    assert!(!Path::new(workspace.trim()).exists());
}

#[tokio::test]
async fn given_failed_fetch_when_done_then_workspace_no_longer_exists() {
    let dir = tempfile::tempdir().unwrap();
    let stub = stub_binary(
        dir.path(),
        "#!/bin/sh\nprintf '%s' \"$PWD\" > trace.txt\necho fail >&2\nexit 1\n",
    );

    let err = fetcher_for(&stub)
        .fetch(&SubtitleRequest::new("https://youtu.be/abc123"))
        .await
        .unwrap_err();
    assert!(matches!(err, SubtitleFetchError::NotFound { .. }));

    // The trace file was inside the workspace; nothing under the stub's
    // parent dir should remain besides the stub itself.
    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(leftovers, vec!["yt-dlp-stub"]);
}

#[tokio::test]
async fn given_long_stderr_when_fetch_then_diagnostic_is_truncated_tail() {
    let dir = tempfile::tempdir().unwrap();
    // 400 'x' characters followed by a marker; only the last ~300 chars
    // survive, so the head must be gone and the marker present.
    let noise = "x".repeat(400);
    let script = format!("#!/bin/sh\nprintf 'HEAD{}TAILMARK' >&2\nexit 1\n", noise);
    let stub = stub_binary(dir.path(), &script);

    let err = fetcher_for(&stub)
        .fetch(&SubtitleRequest::new("https://youtu.be/abc123"))
        .await
        .unwrap_err();

    match err {
        SubtitleFetchError::NotFound { diagnostic } => {
            assert!(diagnostic.ends_with("TAILMARK"));
            assert!(!diagnostic.contains("HEAD"));
            assert!(diagnostic.chars().count() <= 300);
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}
