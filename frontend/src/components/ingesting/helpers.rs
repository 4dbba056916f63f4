//! Browser I/O for the ingesting page.
//!
//! Responsibilities
//! - **Status requests**: `GET /status/{job_id}` through `gloo-net`, folding
//!   every way the request can fail into a [`FetchError`] so the session can
//!   treat them alike.
//! - **Navigation**: the delayed full-page redirect once the job completes.

use gloo_net::http::Request;

use common::error::FetchError;
use common::jobs::StatusRecord;

/// Fetches the current status of a job.
///
/// Called from `update.rs` on every poll tick, inside `spawn_local`; the
/// result comes back to the controller as `Msg::StatusFetched`.
///
/// # Arguments
/// * `path` - Status URL, normally `IngestSession::status_path()`.
///
/// # Returns
/// The decoded [`StatusRecord`], or:
/// - `FetchError::Network` when the request could not be sent or answered,
/// - `FetchError::Http` with the status code for any non-2xx response,
/// - `FetchError::Decode` when a 2xx body is not a status record.
pub async fn fetch_status(path: &str) -> Result<StatusRecord, FetchError> {
    let response = Request::get(path)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Http {
            status: response.status(),
        });
    }

    response
        .json::<StatusRecord>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Navigates the browser to `url` after `delay_ms`.
///
/// Used when the overall job completes, so the completion message stays
/// visible for a moment before the assessment page loads. The wait runs as a
/// detached task; nothing cancels it.
///
/// # Arguments
/// * `url` - Destination, e.g. `/assessment/{job_id}`.
/// * `delay_ms` - Delay before `window.location` is set.
pub fn redirect_after(url: String, delay_ms: u32) {
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(delay_ms).await;
        if let Some(window) = web_sys::window() {
            window.location().set_href(&url).ok();
        }
    });
}
