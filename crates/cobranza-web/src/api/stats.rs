use collection_stats::{CollectionStats, FetchError};
use shared::CONFIG;

use super::http::get_text;

/// Fetch the collection statistics for every year.
/// One request, no retry; failures are logged and handed back to the caller.
pub async fn fetch_collection_stats() -> Result<CollectionStats, FetchError> {
    let url = CollectionStats::endpoint(CONFIG.api_url);

    let result = get_text(&url, CONFIG.fetch_timeout_ms)
        .await
        .and_then(|body| CollectionStats::from_json(&body));

    if let Err(e) = &result {
        web_sys::console::error_1(&format!("Error fetching collection stats from {}: {}", url, e).into());
    }

    result
}
