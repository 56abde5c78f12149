use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::AsyncWriteExt;

use crate::error::DistError;

/// Streams `url` into `dest`. No retries and no checksum: a failed request
/// fails the target.
pub async fn download_jdk(
    client: &reqwest::Client,
    url: &str,
    dest: &Path,
) -> Result<(), DistError> {
    tracing::info!("downloading JDK from '{url}' to '{}'", dest.display());

    let mut response = client
        .get(url)
        .send()
        .await
        .map_err(|e| DistError::JdkDownload(format!("request failed: {e}")))?
        .error_for_status()
        .map_err(|e| DistError::JdkDownload(e.to_string()))?;

    let pb = match response.content_length() {
        Some(len) => ProgressBar::new(len),
        None => ProgressBar::new_spinner(),
    };
    let template = "{msg} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})";
    if let Ok(style) = ProgressStyle::default_bar().template(template) {
        pb.set_style(style.progress_chars("=> "));
    }
    pb.set_message("Downloading JDK");

    let mut file = tokio::fs::File::create(dest).await?;
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| DistError::JdkDownload(format!("download stream failed: {e}")))?
    {
        file.write_all(&chunk).await?;
        pb.inc(chunk.len() as u64);
    }
    file.flush().await?;
    drop(file);

    pb.finish_with_message("Download complete");
    Ok(())
}
