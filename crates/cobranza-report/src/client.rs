//! Collection statistics retrieval: the API or a saved JSON response

use anyhow::{Context, Result};
use collection_stats::{CollectionStats, FetchError};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error};

/// Fetch the collection statistics for every year.
/// One request, no retry; the client timeout bounds the whole exchange.
pub async fn fetch_collection_stats(api_url: &str, timeout: Duration) -> Result<CollectionStats, FetchError> {
    let url = CollectionStats::endpoint(api_url);
    debug!(%url, ?timeout, "fetching collection stats");

    let result = request(&url, timeout).await;
    if let Err(e) = &result {
        error!(%url, "error fetching collection stats: {}", e);
    }
    result
}

async fn request(url: &str, timeout: Duration) -> Result<CollectionStats, FetchError> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let response = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| classify(e, timeout))?;

    if !response.status().is_success() {
        return Err(FetchError::Status(response.status().as_u16()));
    }

    let body = response.text().await.map_err(|e| classify(e, timeout))?;
    debug!(bytes = body.len(), "received collection stats");

    CollectionStats::from_json(&body)
}

fn classify(e: reqwest::Error, timeout: Duration) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout(u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX))
    } else {
        FetchError::Network(e.to_string())
    }
}

/// Read a payload previously saved from `/collection-stats/`
pub fn load_from_file(path: &Path) -> Result<CollectionStats> {
    let body = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let stats = CollectionStats::from_json(&body).with_context(|| format!("Failed to decode {}", path.display()))?;
    debug!(path = %path.display(), years = stats.years().count(), "loaded collection stats from file");
    Ok(stats)
}
