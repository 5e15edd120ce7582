//! HTTP helpers over gloo-net, raced against a response timeout

use std::future::Future;

use collection_stats::FetchError;
use futures::future::{Either, select};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

/// GET `url` and return the body text.
/// Non-2xx responses and a silent backend past `timeout_ms` are errors.
pub async fn get_text(url: &str, timeout_ms: u32) -> Result<String, FetchError> {
    let request = async {
        let response = Request::get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            web_sys::console::error_1(&format!("HTTP error: {}", response.status()).into());
            return Err(FetchError::Status(response.status()));
        }

        response.text().await.map_err(|e| FetchError::Decode(e.to_string()))
    };

    race_deadline(request, TimeoutFuture::new(timeout_ms), timeout_ms).await
}

/// Resolve with `request` unless `deadline` fires first
async fn race_deadline<T>(
    request: impl Future<Output = Result<T, FetchError>>,
    deadline: impl Future<Output = ()>,
    timeout_ms: u32,
) -> Result<T, FetchError> {
    match select(Box::pin(request), Box::pin(deadline)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(FetchError::Timeout(timeout_ms)),
    }
}
