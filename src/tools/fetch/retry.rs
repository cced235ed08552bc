use super::types::{FetchResult, Transport};
use crate::config::RetryPolicy;
use crate::error::{CheckupError, Result};
use reqwest::header::HeaderMap;
use std::time::{Duration, Instant};

/// Run GETs until success, a non-retryable failure, or the retry budget is
/// spent. `sleep` is called with each backoff delay.
pub(super) fn fetch_with_retry<T, S>(
    transport: &T,
    url: &str,
    headers: &HeaderMap,
    policy: &RetryPolicy,
    sleep: S,
) -> Result<FetchResult>
where
    T: Transport + ?Sized,
    S: Fn(Duration),
{
    let start = Instant::now();
    let mut attempts = 0usize;
    let mut retries = 0u32;

    loop {
        attempts += 1;
        let failure = match transport.get(url, headers) {
            Ok(resp) if resp.is_success() => {
                return Ok(FetchResult {
                    html: resp.body,
                    duration_ms: start.elapsed().as_millis() as u64,
                    attempts,
                });
            }
            Ok(resp) if policy.should_retry_status(resp.status) => {
                if retries >= policy.max_retries {
                    return Err(CheckupError::fetch_error(
                        url,
                        &format!(
                            "Max retries exceeded ({} attempts, too many {} error responses)",
                            attempts, resp.status
                        ),
                    ));
                }
                format!("status {}", resp.status)
            }
            Ok(resp) => {
                return Err(CheckupError::fetch_error(
                    url,
                    &format!("HTTP status {} {}", resp.status, resp.reason)
                        .trim_end()
                        .to_string(),
                ));
            }
            Err(e) => {
                if retries >= policy.max_retries {
                    return Err(CheckupError::fetch_error(url, &e));
                }
                e
            }
        };

        retries += 1;
        let delay = policy.backoff(retries);
        log::debug!("retry {retries}/{} for {url} after {failure} (sleep {delay:?})", policy.max_retries);
        if !delay.is_zero() {
            sleep(delay);
        }
    }
}
