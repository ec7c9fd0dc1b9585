// src/mbnet/client.rs
use crate::utils::error::FetchError;
use reqwest::header;

/// Creates a reqwest client configured for the mbnet archive host.
///
/// The host has served a broken certificate chain for years, so verification
/// is relaxed by default - but only on this one client instance, never via
/// process-wide state. Pass `strict_tls` to verify normally.
fn build_archive_client(strict_tls: bool) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .danger_accept_invalid_certs(!strict_tls)
        .build()
}

/// Downloads the full draw archive from its URL and returns the body as text.
pub async fn download_archive(url: &str, strict_tls: bool) -> Result<String, FetchError> {
    let client = build_archive_client(strict_tls)?; // Propagate client build error if any

    tracing::info!("Downloading archive from: {}", url);

    let response = client
        .get(url)
        .header(header::ACCEPT, "text/plain,*/*")
        .send()
        .await?; // Propagates reqwest::Error as FetchError::Network

    // Check if the request was successful (status code 2xx)
    let status = response.status();
    if !status.is_success() {
        tracing::error!("HTTP error status: {} for URL: {}", status, url);
        if status == reqwest::StatusCode::NOT_FOUND {
            tracing::warn!("Received 404 Not Found - has the archive moved?");
            return Err(FetchError::ArchiveNotFound(url.to_string()));
        }
        // Return generic HTTP error
        return Err(FetchError::Http(status));
    }

    // Read the response body as text
    let body = response.text().await?;
    tracing::debug!("Successfully downloaded {} bytes from {}", body.len(), url);

    Ok(body)
}
