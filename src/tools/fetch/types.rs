use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

/// One raw HTTP exchange as seen by the retry loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub reason: String,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues a single GET. Errors are transport failures (connect, timeout,
/// body read); HTTP error statuses come back as `Ok`.
pub trait Transport {
    fn get(&self, url: &str, headers: &HeaderMap) -> Result<HttpResponse, String>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str, headers: &HeaderMap) -> Result<HttpResponse, String> {
        (**self).get(url, headers)
    }
}

/// Result of a fetch operation including telemetry metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchResult {
    /// The fetched HTML content
    pub html: String,
    /// Total duration in milliseconds
    pub duration_ms: u64,
    /// Number of attempts before success
    pub attempts: usize,
}

impl FetchResult {
    /// Consume the result and return just the HTML.
    pub fn into_html(self) -> String {
        self.html
    }
}
