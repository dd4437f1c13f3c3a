//! Streaming subtitle downloader
//!
//! Writes one remote file to disk chunk by chunk while advancing a
//! progress bar. A partially written file is left in place if the
//! stream breaks.

use std::path::Path;

use indicatif::ProgressBar;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::client::SubtitleClient;
use crate::error::Result;
use crate::types::DownloadOutcome;

/// Downloads `url` into `target`
///
/// The request is issued first; only then is `target` checked. If it
/// already exists, `confirm_overwrite` decides: `false` leaves the file
/// untouched and yields [`DownloadOutcome::Skipped`].
///
/// `progress` is called only once the write is going ahead, with the
/// declared `Content-Length` (zero when absent). The bar it returns is
/// advanced per chunk and cleared when the write loop ends, even on error.
///
/// # Errors
/// - `HttpError` / `NotFound` if the request or the stream fails
/// - `Io` if the file cannot be created or written
pub async fn download_to_file<F, P>(
    client: &SubtitleClient,
    url: &str,
    target: &Path,
    confirm_overwrite: F,
    progress: P,
) -> Result<DownloadOutcome>
where
    F: FnOnce(&Path) -> bool,
    P: FnOnce(u64) -> ProgressBar,
{
    let mut response = client.open_download(url).await?;

    if target.exists() && !confirm_overwrite(target) {
        info!("Skipping existing file {}", target.display());
        return Ok(DownloadOutcome::Skipped {
            path: target.to_path_buf(),
        });
    }

    let total = response.content_length().unwrap_or(0);
    debug!("Streaming {} ({} bytes declared) to {}", url, total, target.display());

    let bar = progress(total);
    let result = stream_to_file(&mut response, target, &bar).await;
    bar.finish_and_clear();
    let written = result?;

    info!("Saved {} ({} bytes)", target.display(), written);
    Ok(DownloadOutcome::Saved {
        path: target.to_path_buf(),
        bytes: written,
    })
}

async fn stream_to_file(
    response: &mut reqwest::Response,
    target: &Path,
    bar: &ProgressBar,
) -> Result<u64> {
    let mut file = File::create(target).await?;
    let mut written: u64 = 0;

    while let Some(chunk) = response.chunk().await? {
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
        bar.inc(chunk.len() as u64);
    }

    file.flush().await?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SubtitleError;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const VTT: &str = "WEBVTT\n\n00:00:01.000 --> 00:00:03.000\nHola\n";

    async fn serve_vtt(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/subs/1_es.vtt"))
            .respond_with(ResponseTemplate::new(200).set_body_string(VTT))
            .mount(server)
            .await;
    }

    /// Hands out `bar` after sizing it, so the test can inspect it afterwards
    fn sized(bar: &ProgressBar) -> impl FnOnce(u64) -> ProgressBar + '_ {
        move |total| {
            bar.set_length(total);
            bar.clone()
        }
    }

    /// Answers one request with a close-delimited body and no Content-Length
    async fn serve_without_length(body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 2048];
            let _ = socket.read(&mut request).await;
            socket
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Type: text/vtt\r\nConnection: close\r\n\r\n")
                .await
                .unwrap();
            socket.write_all(body.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{}/subs/1_es.vtt", addr)
    }

    #[tokio::test]
    async fn test_download_writes_file() {
        let server = MockServer::start().await;
        serve_vtt(&server).await;
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("serie_x_S02E05_es.vtt");

        let client = SubtitleClient::new().unwrap();
        let bar = ProgressBar::hidden();
        let outcome = download_to_file(
            &client,
            &format!("{}/subs/1_es.vtt", server.uri()),
            &target,
            |_| panic!("no prompt expected for a fresh file"),
            sized(&bar),
        )
        .await
        .unwrap();

        assert_eq!(
            outcome,
            DownloadOutcome::Saved {
                path: target.clone(),
                bytes: VTT.len() as u64,
            }
        );
        assert_eq!(std::fs::read_to_string(&target).unwrap(), VTT);
        assert_eq!(bar.length(), Some(VTT.len() as u64));
        assert!(bar.is_finished());
    }

    #[tokio::test]
    async fn test_download_without_content_length() {
        let url = serve_without_length(VTT).await;
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("doc_es.vtt");

        let client = SubtitleClient::new().unwrap();
        let bar = ProgressBar::hidden();
        let outcome = download_to_file(&client, &url, &target, |_| true, sized(&bar))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            DownloadOutcome::Saved {
                path: target.clone(),
                bytes: VTT.len() as u64,
            }
        );
        assert_eq!(bar.length(), Some(0));
        assert_eq!(std::fs::read_to_string(&target).unwrap(), VTT);
    }

    #[tokio::test]
    async fn test_download_skip_leaves_existing_file() {
        let server = MockServer::start().await;
        serve_vtt(&server).await;
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("doc_es.vtt");
        std::fs::write(&target, b"original bytes").unwrap();

        let client = SubtitleClient::new().unwrap();
        let mut asked = false;
        let outcome = download_to_file(
            &client,
            &format!("{}/subs/1_es.vtt", server.uri()),
            &target,
            |_| {
                asked = true;
                false
            },
            |_| panic!("no progress bar for a skipped file"),
        )
        .await
        .unwrap();

        assert!(asked);
        assert_eq!(outcome, DownloadOutcome::Skipped { path: target.clone() });
        assert_eq!(std::fs::read(&target).unwrap(), b"original bytes");
    }

    #[tokio::test]
    async fn test_download_overwrite_replaces_file() {
        let server = MockServer::start().await;
        serve_vtt(&server).await;
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("doc_es.vtt");
        std::fs::write(&target, b"a much longer original file that must be truncated").unwrap();

        let client = SubtitleClient::new().unwrap();
        download_to_file(
            &client,
            &format!("{}/subs/1_es.vtt", server.uri()),
            &target,
            |_| true,
            |_| ProgressBar::hidden(),
        )
        .await
        .unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), VTT);
    }

    #[tokio::test]
    async fn test_download_write_error_clears_bar() {
        let server = MockServer::start().await;
        serve_vtt(&server).await;
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("doc_es.vtt");
        std::fs::create_dir(&target).unwrap();

        let client = SubtitleClient::new().unwrap();
        let bar = ProgressBar::hidden();
        let result = download_to_file(
            &client,
            &format!("{}/subs/1_es.vtt", server.uri()),
            &target,
            |_| true,
            sized(&bar),
        )
        .await;

        assert!(matches!(result, Err(SubtitleError::Io(_))));
        assert!(bar.is_finished());
        assert!(target.is_dir());
    }

    #[tokio::test]
    async fn test_download_http_error_creates_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("doc_en.vtt");

        let client = SubtitleClient::new().unwrap();
        let result = download_to_file(
            &client,
            &format!("{}/subs/1_en.vtt", server.uri()),
            &target,
            |_| true,
            |_| ProgressBar::hidden(),
        )
        .await;

        assert!(matches!(result, Err(SubtitleError::HttpError(_))));
        assert!(!target.exists());
    }
}
